//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One tick per call, cadence supplied by the caller
//! - Seeded RNG only
//! - Stable iteration order (creation order of obstacles)
//! - No rendering or platform dependencies

pub mod collision;
pub mod entity;
pub mod input;
pub mod spawner;
pub mod state;
pub mod tick;

pub use collision::{any_collision, first_collision};
pub use entity::{Bounds, Entity, EntityKind};
pub use input::Direction;
pub use spawner::{ObstacleSpawner, SpawnRecord};
pub use state::{ObstacleSet, PLAYER_ID, SimEvent, SimPhase, SimulationState};
pub use tick::{TickOutcome, tick};
