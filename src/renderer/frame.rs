//! Render snapshot of a simulation state
//!
//! A [`Frame`] is everything a presentation layer needs to draw one tick:
//! rectangles with colors, the score and whether the run is still going.

use serde::{Deserialize, Serialize};

use crate::sim::{Bounds, Entity, SimulationState};

/// One rectangle to draw
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RectView {
    pub id: u32,
    pub bounds: Bounds,
    pub color: u32,
}

impl From<&Entity> for RectView {
    fn from(entity: &Entity) -> Self {
        Self {
            id: entity.id,
            bounds: entity.bounds(),
            color: entity.color,
        }
    }
}

/// Drawable state after a tick
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    pub tick: u64,
    pub score: u64,
    pub running: bool,
    pub canvas_width: f32,
    pub canvas_height: f32,
    pub player: RectView,
    pub obstacles: Vec<RectView>,
}

impl Frame {
    pub fn capture(state: &SimulationState) -> Self {
        Self {
            tick: state.tick_count,
            score: state.score(),
            running: state.is_running(),
            canvas_width: state.config.canvas_width,
            canvas_height: state.config.canvas_height,
            player: RectView::from(&state.player),
            obstacles: state.obstacles.iter().map(RectView::from).collect(),
        }
    }

    /// Obstacles that intersect the canvas horizontally
    pub fn visible_obstacles(&self) -> impl Iterator<Item = &RectView> {
        self.obstacles
            .iter()
            .filter(|o| o.bounds.right >= 0.0 && o.bounds.left <= self.canvas_width)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    #[test]
    fn test_capture_reflects_state() {
        let mut state = SimulationState::new(5);
        state
            .obstacles
            .push(Vec2::new(300.0, 0.0), Vec2::new(10.0, 40.0), 0x00FF00);
        state
            .obstacles
            .push(Vec2::new(900.0, 0.0), Vec2::new(10.0, 40.0), 0x00FF00);
        state.tick_count = 27;

        let frame = Frame::capture(&state);
        assert_eq!(frame.tick, 27);
        assert_eq!(frame.score, 5);
        assert!(frame.running);
        assert_eq!(frame.player.color, 0xFF0000);
        assert_eq!(frame.player.bounds.right, 30.0);
        assert_eq!(frame.obstacles.len(), 2);
        assert_eq!(frame.visible_obstacles().count(), 1);
    }

    #[test]
    fn test_frame_serializes() {
        let frame = Frame::capture(&SimulationState::new(5));
        let json = serde_json::to_string(&frame).unwrap();
        assert!(json.contains("\"score\":0"));
        let back: Frame = serde_json::from_str(&json).unwrap();
        assert_eq!(back, frame);
    }
}
