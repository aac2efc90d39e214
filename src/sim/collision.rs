//! Collision detection between the player and the obstacle set

use super::entity::Entity;

/// True if `controlled` overlaps at least one obstacle
///
/// Stops at the first hit; iteration order only affects speed.
pub fn any_collision(controlled: &Entity, obstacles: &[Entity]) -> bool {
    obstacles.iter().any(|o| controlled.overlaps(o))
}

/// Id of the first obstacle (in creation order) that `controlled` overlaps
pub fn first_collision(controlled: &Entity, obstacles: &[Entity]) -> Option<u32> {
    obstacles.iter().find(|o| controlled.overlaps(o)).map(|o| o.id)
}
