//! Platform layer
//!
//! Owns what the simulation core deliberately does not:
//! - Tick cadence (fixed-step accumulator)
//! - A demo controller that drives input like a player would

pub mod autopilot;
pub mod stepper;

pub use autopilot::Autopilot;
pub use stepper::FixedStep;
