//! Gap Dodge - a tiny obstacle-avoidance simulation
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, spawning, collisions, tick)
//! - `settings`: Data-driven simulation config loaded from JSON
//! - `renderer`: Presentation boundary (frames, presenters, text output)
//! - `platform`: Tick cadence and the demo autopilot

pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use settings::{BottomHeightBasis, ConfigError, SimConfig};
pub use sim::{Direction, SimPhase, SimulationState, TickOutcome, tick};

/// Reference simulation constants
pub mod consts {
    /// Tick period of the reference cadence (50 Hz)
    pub const TICK_PERIOD_MS: u64 = 20;
    /// Maximum ticks run per platform frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Canvas dimensions
    pub const CANVAS_WIDTH: f32 = 480.0;
    pub const CANVAS_HEIGHT: f32 = 270.0;

    /// A pair of obstacles appears every this many ticks
    pub const SPAWN_INTERVAL: u64 = 120;
    /// Top obstacle height range (inclusive)
    pub const MIN_OBSTACLE_HEIGHT: u32 = 20;
    pub const MAX_OBSTACLE_HEIGHT: u32 = 200;
    /// Vertical gap range (inclusive)
    pub const MIN_GAP: u32 = 50;
    pub const MAX_GAP: u32 = 200;
    pub const OBSTACLE_WIDTH: f32 = 10.0;
    /// Leftward obstacle drift per tick
    pub const SCROLL_SPEED: f32 = 1.0;

    /// Player defaults
    pub const PLAYER_WIDTH: f32 = 30.0;
    pub const PLAYER_HEIGHT: f32 = 30.0;
    pub const PLAYER_START_X: f32 = 0.0;
    pub const PLAYER_START_Y: f32 = 110.0;
    /// Velocity change per direction press
    pub const INPUT_STEP: f32 = 1.0;

    /// One point per this many ticks survived
    pub const SCORE_DIVISOR: u64 = 5;

    /// Colors (0xRRGGBB)
    pub const PLAYER_COLOR: u32 = 0xFF0000;
    pub const OBSTACLE_COLOR: u32 = 0x008000;
}
