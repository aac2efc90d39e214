//! Demo autopilot
//!
//! Steers the player toward the middle of the next gap using only the
//! press/release input surface, exactly like a human at the keyboard.

use crate::sim::{Direction, Entity, SimulationState};

/// Vertical slack around the gap center before the autopilot reacts
const DEADBAND: f32 = 3.0;

#[derive(Debug, Clone)]
pub struct Autopilot {
    /// Most presses held in one direction
    pub max_presses: u32,
}

impl Default for Autopilot {
    fn default() -> Self {
        Self { max_presses: 3 }
    }
}

impl Autopilot {
    pub fn new(max_presses: u32) -> Self {
        Self {
            max_presses: max_presses.max(1),
        }
    }

    /// Y coordinate the player center should aim for
    pub fn target_y(&self, state: &SimulationState) -> f32 {
        let player_left = state.player.bounds().left;
        let obstacles = state.obstacles.as_slice();

        // Nearest top wall not yet behind the player; its bottom partner is
        // always the next obstacle created
        let next_top = obstacles
            .iter()
            .enumerate()
            .filter(|(_, o)| o.pos.y == 0.0 && o.bounds().right >= player_left)
            .min_by(|(_, a), (_, b)| a.pos.x.total_cmp(&b.pos.x));

        match next_top {
            Some((idx, top)) => {
                let gap_top = top.bounds().bottom;
                let gap_bottom = obstacles
                    .get(idx + 1)
                    .map(|o: &Entity| o.bounds().top)
                    .unwrap_or(state.config.canvas_height);
                (gap_top + gap_bottom) / 2.0
            }
            None => state.config.canvas_height / 2.0,
        }
    }

    /// Issue this tick's input
    pub fn steer(&self, state: &mut SimulationState) {
        if !state.is_running() {
            return;
        }

        let center = state.player.pos.y + state.player.size.y / 2.0;
        let diff = self.target_y(state) - center;
        let step = state.config.input_step;

        let presses = if diff.abs() <= DEADBAND {
            0
        } else {
            ((diff.abs() / 10.0).ceil() as u32).clamp(1, self.max_presses)
        };
        let wanted = presses as f32 * step * diff.signum();

        if state.player.vel.y == wanted && state.player.vel.x == 0.0 {
            return;
        }

        state.on_direction_release();
        let direction = if diff < 0.0 {
            Direction::Up
        } else {
            Direction::Down
        };
        for _ in 0..presses {
            state.on_direction_press(direction);
        }
    }
}
