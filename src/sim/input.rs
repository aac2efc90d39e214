//! Directional input
//!
//! Presses nudge the player's velocity by one step on a single axis and
//! accumulate; a release zeroes both axes. The presentation layer maps its
//! own key events onto these calls.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::state::SimulationState;

/// One of the four steering directions (y grows downward)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Unit velocity change for one press
    pub fn delta(&self) -> Vec2 {
        match self {
            Direction::Up => Vec2::new(0.0, -1.0),
            Direction::Down => Vec2::new(0.0, 1.0),
            Direction::Left => Vec2::new(-1.0, 0.0),
            Direction::Right => Vec2::new(1.0, 0.0),
        }
    }
}

impl SimulationState {
    /// Key down: adjust one velocity axis by `input_step`
    ///
    /// Ignored once the run has halted.
    pub fn on_direction_press(&mut self, direction: Direction) {
        if !self.is_running() {
            return;
        }
        let d = direction.delta() * self.config.input_step;
        self.player.nudge_velocity(d.x, d.y);
    }

    /// Key up: stop the player on both axes
    pub fn on_direction_release(&mut self) {
        if !self.is_running() {
            return;
        }
        self.player.stop();
    }
}
