//! Simulation state and core types
//!
//! Everything a run needs lives in one [`SimulationState`] value, so several
//! independent runs can coexist and tests can build their own.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::entity::{Entity, EntityKind};
use super::spawner::{ObstacleSpawner, SpawnRecord};
use crate::settings::{ConfigError, SimConfig};

/// Id reserved for the player; obstacle ids start above it
pub const PLAYER_ID: u32 = 0;

/// Run phase. `Halted` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SimPhase {
    Running,
    Halted,
}

/// Notable things that happened during a tick, drained by the presentation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SimEvent {
    /// A top/bottom pair entered at the right edge
    ObstaclesSpawned(SpawnRecord),
    /// The player hit an obstacle; the run is over
    Collision { tick: u64, obstacle_id: u32 },
    /// Obstacles dropped after leaving the canvas (culling enabled only)
    Culled { tick: u64, count: usize },
}

/// Ordered obstacle collection, insertion order = creation order
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObstacleSet {
    items: Vec<Entity>,
    next_id: u32,
}

impl Default for ObstacleSet {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            next_id: PLAYER_ID + 1,
        }
    }
}

impl ObstacleSet {
    /// Append a new obstacle and return its id
    pub fn push(&mut self, pos: Vec2, size: Vec2, color: u32) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        self.items
            .push(Entity::new(id, EntityKind::Obstacle, pos, size, color));
        id
    }

    /// Move every obstacle left by `dx`
    pub fn scroll(&mut self, dx: f32) {
        for obstacle in &mut self.items {
            obstacle.pos.x -= dx;
        }
    }

    /// Drop obstacles whose right edge is left of x = 0. Returns how many.
    pub fn cull_offscreen(&mut self) -> usize {
        let before = self.items.len();
        self.items.retain(|o| o.bounds().right >= 0.0);
        before - self.items.len()
    }

    pub fn as_slice(&self) -> &[Entity] {
        &self.items
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Entity> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Total obstacles ever created, including culled ones
    pub fn created(&self) -> u32 {
        self.next_id - PLAYER_ID - 1
    }
}

/// Complete simulation state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Ticks completed so far
    pub tick_count: u64,
    pub phase: SimPhase,
    /// The controlled entity
    pub player: Entity,
    pub obstacles: ObstacleSet,
    pub spawner: ObstacleSpawner,
    pub config: SimConfig,
    /// Seeded stream all randomness is drawn from
    pub(crate) rng: Pcg32,
    /// Events not yet drained by the presentation
    #[serde(skip)]
    pub(crate) events: Vec<SimEvent>,
}

impl SimulationState {
    /// Fresh run with the reference config
    pub fn new(seed: u64) -> Self {
        Self::build(SimConfig::default(), seed)
    }

    /// Fresh run with a custom config, rejected if it fails validation
    pub fn with_config(config: SimConfig, seed: u64) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::build(config, seed))
    }

    fn build(config: SimConfig, seed: u64) -> Self {
        let player = Entity::new(
            PLAYER_ID,
            EntityKind::Player,
            config.player_start,
            config.player_size,
            config.player_color,
        );
        Self {
            seed,
            tick_count: 0,
            phase: SimPhase::Running,
            player,
            obstacles: ObstacleSet::default(),
            spawner: ObstacleSpawner::from_config(&config),
            config,
            rng: Pcg32::seed_from_u64(seed),
            events: Vec::new(),
        }
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.phase == SimPhase::Running
    }

    /// One point per `score_divisor` ticks
    #[inline]
    pub fn score(&self) -> u64 {
        self.tick_count / self.config.score_divisor
    }

    /// Take all events recorded since the last drain
    pub fn drain_events(&mut self) -> Vec<SimEvent> {
        std::mem::take(&mut self.events)
    }
}
