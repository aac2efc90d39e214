//! Procedural obstacle pairs
//!
//! Every `interval` ticks a top wall and a bottom wall appear at the right
//! edge of the canvas with a random vertical gap between them.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::state::ObstacleSet;
use crate::settings::SimConfig;

/// What one spawn produced
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpawnRecord {
    /// Tick ordinal the pair was created on
    pub tick: u64,
    /// Height of the top wall
    pub height: u32,
    /// Vertical opening between the walls
    pub gap: u32,
    pub top_id: u32,
    pub bottom_id: u32,
}

/// Spawn rules, extracted from a [`SimConfig`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObstacleSpawner {
    pub interval: u64,
    pub min_height: u32,
    pub max_height: u32,
    pub min_gap: u32,
    pub max_gap: u32,
    pub width: f32,
    /// Spawn x coordinate
    pub spawn_x: f32,
    /// Dimension the bottom wall height is measured against
    pub bottom_basis: f32,
    pub color: u32,
}

impl ObstacleSpawner {
    pub fn from_config(config: &SimConfig) -> Self {
        Self {
            interval: config.spawn_interval,
            min_height: config.min_height,
            max_height: config.max_height,
            min_gap: config.min_gap,
            max_gap: config.max_gap,
            width: config.obstacle_width,
            spawn_x: config.canvas_width,
            bottom_basis: config.bottom_basis(),
            color: config.obstacle_color,
        }
    }

    /// Whether a pair is due on this tick ordinal
    #[inline]
    pub fn is_due(&self, tick: u64) -> bool {
        tick % self.interval == 0
    }

    /// Append a pair to `obstacles` if one is due on `tick`
    pub fn maybe_spawn<R: Rng>(
        &self,
        tick: u64,
        rng: &mut R,
        obstacles: &mut ObstacleSet,
    ) -> Option<SpawnRecord> {
        if !self.is_due(tick) {
            return None;
        }

        let height = rng.random_range(self.min_height..=self.max_height);
        let gap = rng.random_range(self.min_gap..=self.max_gap);

        let h = height as f32;
        let g = gap as f32;
        let top_id = obstacles.push(
            Vec2::new(self.spawn_x, 0.0),
            Vec2::new(self.width, h),
            self.color,
        );
        let bottom_id = obstacles.push(
            Vec2::new(self.spawn_x, h + g),
            Vec2::new(self.width, self.bottom_basis - h - g),
            self.color,
        );

        log::debug!("tick {tick}: spawned pair {top_id}/{bottom_id} height={height} gap={gap}");

        Some(SpawnRecord {
            tick,
            height,
            gap,
            top_id,
            bottom_id,
        })
    }
}
