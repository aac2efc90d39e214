//! Simulation configuration
//!
//! Every tunable of a run lives here. Loaded from JSON; any field left out
//! falls back to the reference value in [`crate::consts`].

use std::fs;
use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;

/// Errors raised while loading or validating a [`SimConfig`]
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid configuration: {0}")]
    Invalid(String),
}

/// Which canvas dimension the bottom obstacle height is measured against.
///
/// The reference behaviour computes `canvas_width - height - gap`, so that is
/// the default. `CanvasHeight` makes the bottom obstacle end at the canvas
/// floor instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum BottomHeightBasis {
    #[default]
    CanvasWidth,
    CanvasHeight,
}

impl BottomHeightBasis {
    pub fn as_str(&self) -> &'static str {
        match self {
            BottomHeightBasis::CanvasWidth => "canvas_width",
            BottomHeightBasis::CanvasHeight => "canvas_height",
        }
    }
}

/// Tunables for one simulation run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    // === Canvas ===
    pub canvas_width: f32,
    pub canvas_height: f32,
    /// Cadence the platform layer should tick at
    pub tick_period_ms: u64,

    // === Obstacles ===
    pub spawn_interval: u64,
    pub min_height: u32,
    pub max_height: u32,
    pub min_gap: u32,
    pub max_gap: u32,
    pub obstacle_width: f32,
    /// Units every obstacle moves left per tick
    pub scroll_speed: f32,
    pub bottom_height_basis: BottomHeightBasis,
    /// Drop obstacles once their right edge is left of x = 0
    pub cull_offscreen: bool,

    // === Player ===
    pub player_size: Vec2,
    pub player_start: Vec2,
    /// Velocity change applied by one direction press
    pub input_step: f32,

    // === Scoring ===
    pub score_divisor: u64,

    // === Colors (0xRRGGBB) ===
    pub player_color: u32,
    pub obstacle_color: u32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            canvas_width: CANVAS_WIDTH,
            canvas_height: CANVAS_HEIGHT,
            tick_period_ms: TICK_PERIOD_MS,

            spawn_interval: SPAWN_INTERVAL,
            min_height: MIN_OBSTACLE_HEIGHT,
            max_height: MAX_OBSTACLE_HEIGHT,
            min_gap: MIN_GAP,
            max_gap: MAX_GAP,
            obstacle_width: OBSTACLE_WIDTH,
            scroll_speed: SCROLL_SPEED,
            bottom_height_basis: BottomHeightBasis::CanvasWidth,
            cull_offscreen: false,

            player_size: Vec2::new(PLAYER_WIDTH, PLAYER_HEIGHT),
            player_start: Vec2::new(PLAYER_START_X, PLAYER_START_Y),
            input_step: INPUT_STEP,

            score_divisor: SCORE_DIVISOR,

            player_color: PLAYER_COLOR,
            obstacle_color: OBSTACLE_COLOR,
        }
    }
}

impl SimConfig {
    /// Parse and validate a config from a JSON string
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: SimConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path)?;
        let config = Self::from_json(&json)?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Dimension the bottom obstacle height is derived from
    pub fn bottom_basis(&self) -> f32 {
        match self.bottom_height_basis {
            BottomHeightBasis::CanvasWidth => self.canvas_width,
            BottomHeightBasis::CanvasHeight => self.canvas_height,
        }
    }

    /// Reject configs that could produce a degenerate entity or a stuck clock
    pub fn validate(&self) -> Result<(), ConfigError> {
        fn invalid(msg: impl Into<String>) -> Result<(), ConfigError> {
            Err(ConfigError::Invalid(msg.into()))
        }

        if !(self.canvas_width > 0.0 && self.canvas_height > 0.0) {
            return invalid("canvas dimensions must be positive");
        }
        if self.tick_period_ms == 0 {
            return invalid("tick_period_ms must be greater than 0");
        }
        if self.spawn_interval == 0 {
            return invalid("spawn_interval must be greater than 0");
        }
        if self.min_height == 0 || self.min_height > self.max_height {
            return invalid("obstacle height range must be non-empty and start above 0");
        }
        if self.min_gap > self.max_gap {
            return invalid("gap range must be non-empty");
        }
        if !(self.obstacle_width > 0.0) {
            return invalid("obstacle_width must be positive");
        }
        if !(self.player_size.x > 0.0 && self.player_size.y > 0.0) {
            return invalid("player_size must be positive");
        }
        if self.score_divisor == 0 {
            return invalid("score_divisor must be greater than 0");
        }

        // Worst case draw must still leave a positive bottom obstacle
        let smallest_bottom = self.bottom_basis() - self.max_height as f32 - self.max_gap as f32;
        if !(smallest_bottom > 0.0) {
            return invalid(format!(
                "{} {} leaves no room for a bottom obstacle with height {} and gap {}",
                self.bottom_height_basis.as_str(),
                self.bottom_basis(),
                self.max_height,
                self.max_gap
            ));
        }

        Ok(())
    }
}
