//! Axis-aligned rectangle entities
//!
//! The player and every obstacle share one shape: a rectangle with a
//! position, a size and a velocity. `kind` tells them apart.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Role of an entity in the simulation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntityKind {
    /// The single player-steered rectangle
    Player,
    /// A scrolling wall segment
    Obstacle,
}

/// Edges of an entity's rectangle (y grows downward)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub left: f32,
    pub right: f32,
    pub top: f32,
    pub bottom: f32,
}

/// A rectangle entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    pub id: u32,
    pub kind: EntityKind,
    /// Top-left corner; may be negative or past the canvas
    pub pos: Vec2,
    /// Width and height, always positive
    pub size: Vec2,
    /// Displacement applied per tick
    pub vel: Vec2,
    /// Opaque 0xRRGGBB tag for presentation
    pub color: u32,
}

impl Entity {
    pub fn new(id: u32, kind: EntityKind, pos: Vec2, size: Vec2, color: u32) -> Self {
        debug_assert!(
            size.x > 0.0 && size.y > 0.0,
            "entity {id} has non-positive size {size}"
        );
        Self {
            id,
            kind,
            pos,
            size,
            vel: Vec2::ZERO,
            color,
        }
    }

    /// Advance one tick. No bounds checking.
    #[inline]
    pub fn move_step(&mut self) {
        self.pos += self.vel;
    }

    #[inline]
    pub fn bounds(&self) -> Bounds {
        Bounds {
            left: self.pos.x,
            right: self.pos.x + self.size.x,
            top: self.pos.y,
            bottom: self.pos.y + self.size.y,
        }
    }

    /// Separating-axis test. Touching edges count as overlapping.
    pub fn overlaps(&self, other: &Entity) -> bool {
        let a = self.bounds();
        let b = other.bounds();
        !(a.bottom < b.top || a.top > b.bottom || a.right < b.left || a.left > b.right)
    }

    /// Additive velocity change (one key press)
    pub fn nudge_velocity(&mut self, dx: f32, dy: f32) {
        self.vel += Vec2::new(dx, dy);
    }

    /// Zero both velocity components
    pub fn stop(&mut self) {
        self.vel = Vec2::ZERO;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn rect(x: f32, y: f32, w: f32, h: f32) -> Entity {
        Entity::new(0, EntityKind::Obstacle, Vec2::new(x, y), Vec2::new(w, h), 0)
    }

    #[test]
    fn test_bounds() {
        let e = rect(10.0, 20.0, 30.0, 40.0);
        let b = e.bounds();
        assert_eq!(b.left, 10.0);
        assert_eq!(b.right, 40.0);
        assert_eq!(b.top, 20.0);
        assert_eq!(b.bottom, 60.0);
    }

    #[test]
    fn test_move_step_has_no_clamping() {
        let mut e = rect(0.0, 0.0, 5.0, 5.0);
        e.vel = Vec2::new(-3.0, 2.0);
        e.move_step();
        e.move_step();
        assert_eq!(e.pos, Vec2::new(-6.0, 4.0));
    }

    #[test]
    fn test_edge_touching_counts_as_overlap() {
        // a.right == b.left
        let a = rect(0.0, 0.0, 10.0, 10.0);
        let b = rect(10.0, 0.0, 10.0, 10.0);
        assert!(a.overlaps(&b));

        // a.bottom == b.top
        let c = rect(0.0, 10.0, 10.0, 10.0);
        assert!(a.overlaps(&c));

        // Corner to corner
        let d = rect(10.0, 10.0, 5.0, 5.0);
        assert!(a.overlaps(&d));
    }

    #[test]
    fn test_gap_on_either_axis_is_not_overlap() {
        let a = rect(0.0, 0.0, 10.0, 10.0);
        assert!(!a.overlaps(&rect(10.5, 0.0, 10.0, 10.0)));
        assert!(!a.overlaps(&rect(-10.5, 0.0, 10.0, 10.0)));
        assert!(!a.overlaps(&rect(0.0, 10.5, 10.0, 10.0)));
        assert!(!a.overlaps(&rect(0.0, -10.5, 10.0, 10.0)));
    }

    #[test]
    fn test_containment_overlaps() {
        let outer = rect(0.0, 0.0, 100.0, 100.0);
        let inner = rect(40.0, 40.0, 5.0, 5.0);
        assert!(outer.overlaps(&inner));
        assert!(inner.overlaps(&outer));
    }

    #[test]
    fn test_nudge_is_additive_and_stop_zeroes() {
        let mut e = rect(0.0, 0.0, 1.0, 1.0);
        e.nudge_velocity(0.0, -1.0);
        e.nudge_velocity(0.0, -1.0);
        e.nudge_velocity(1.0, 0.0);
        assert_eq!(e.vel, Vec2::new(1.0, -2.0));
        e.stop();
        assert_eq!(e.vel, Vec2::ZERO);
    }

    fn arb_rect() -> impl Strategy<Value = Entity> {
        (-500.0f32..500.0, -500.0f32..500.0, 0.5f32..200.0, 0.5f32..200.0)
            .prop_map(|(x, y, w, h)| rect(x, y, w, h))
    }

    proptest! {
        #[test]
        fn prop_overlap_is_symmetric(a in arb_rect(), b in arb_rect()) {
            prop_assert_eq!(a.overlaps(&b), b.overlaps(&a));
        }

        #[test]
        fn prop_entity_overlaps_itself(a in arb_rect()) {
            prop_assert!(a.overlaps(&a));
        }

        #[test]
        fn prop_horizontal_gap_never_overlaps(a in arb_rect(), gap in 0.01f32..100.0, w in 0.5f32..50.0) {
            let b = rect(a.bounds().right + gap, a.pos.y, w, a.size.y);
            prop_assert!(!a.overlaps(&b));
        }
    }
}
