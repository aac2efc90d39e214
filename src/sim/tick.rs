//! Fixed-step simulation tick
//!
//! Core game loop step. Advances the run deterministically; the cadence is
//! owned by whoever calls it.

use serde::{Deserialize, Serialize};

use super::collision::first_collision;
use super::state::{SimEvent, SimPhase, SimulationState};

/// Result of one [`tick`] call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TickOutcome {
    /// Tick completed, run continues
    Advanced,
    /// This tick ended the run
    Collided { obstacle_id: u32 },
    /// Run was already over; nothing changed
    Halted,
}

/// Advance the simulation by one tick
pub fn tick(state: &mut SimulationState) -> TickOutcome {
    if state.phase == SimPhase::Halted {
        return TickOutcome::Halted;
    }

    // Ordinal of the tick being executed; the first tick is 1
    let ordinal = state.tick_count + 1;

    state.player.move_step();
    state.obstacles.scroll(state.config.scroll_speed);

    if let Some(record) = state
        .spawner
        .maybe_spawn(ordinal, &mut state.rng, &mut state.obstacles)
    {
        state.events.push(SimEvent::ObstaclesSpawned(record));
    }

    if state.config.cull_offscreen {
        let count = state.obstacles.cull_offscreen();
        if count > 0 {
            log::debug!("tick {ordinal}: culled {count} offscreen obstacles");
            state.events.push(SimEvent::Culled {
                tick: ordinal,
                count,
            });
        }
    }

    let hit = first_collision(&state.player, state.obstacles.as_slice());

    // The halting tick still counts toward the score
    state.tick_count = ordinal;

    match hit {
        Some(obstacle_id) => {
            state.phase = SimPhase::Halted;
            state.events.push(SimEvent::Collision {
                tick: ordinal,
                obstacle_id,
            });
            log::info!(
                "Collision with obstacle {} at tick {}, final score {}",
                obstacle_id,
                ordinal,
                state.score()
            );
            TickOutcome::Collided { obstacle_id }
        }
        None => TickOutcome::Advanced,
    }
}

impl SimulationState {
    /// Advance this run by one tick
    pub fn tick(&mut self) -> TickOutcome {
        tick(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::Direction;
    use crate::sim::collision::any_collision;
    use crate::settings::SimConfig;
    use glam::Vec2;

    /// Player parked well above the canvas so nothing can reach it
    fn safe_state(seed: u64) -> SimulationState {
        let config = SimConfig {
            player_start: Vec2::new(0.0, -500.0),
            ..Default::default()
        };
        SimulationState::with_config(config, seed).expect("valid config")
    }

    #[test]
    fn test_600_ticks_score_and_spawns() {
        let mut state = safe_state(12345);
        for _ in 0..600 {
            assert_eq!(state.tick(), TickOutcome::Advanced);
        }
        assert_eq!(state.tick_count, 600);
        assert_eq!(state.score(), 120);
        assert_eq!(state.obstacles.len(), 10);

        let spawns = state
            .drain_events()
            .into_iter()
            .filter(|e| matches!(e, SimEvent::ObstaclesSpawned(_)))
            .count();
        assert_eq!(spawns, 5);
    }

    #[test]
    fn test_first_pair_appears_on_tick_120() {
        let mut state = safe_state(7);
        for _ in 0..119 {
            state.tick();
        }
        assert!(state.obstacles.is_empty());
        state.tick();
        assert_eq!(state.obstacles.len(), 2);
        // Created after the scroll step, so still at the spawn x
        assert!(state.obstacles.iter().all(|o| o.pos.x == 480.0));
    }

    #[test]
    fn test_obstacles_scroll_one_unit_per_tick() {
        let mut state = safe_state(7);
        for _ in 0..130 {
            state.tick();
        }
        assert!(state.obstacles.iter().all(|o| o.pos.x == 470.0));
    }

    #[test]
    fn test_player_moves_by_velocity() {
        let mut state = safe_state(3);
        state.on_direction_press(Direction::Right);
        state.tick();
        state.tick();
        assert_eq!(state.player.pos, Vec2::new(2.0, -500.0));
    }

    #[test]
    fn test_collision_halts_and_freezes() {
        let mut state = SimulationState::new(42);
        // Put a wall right on top of the player
        state
            .obstacles
            .push(Vec2::new(20.0, 100.0), Vec2::new(10.0, 50.0), 0);
        state.on_direction_press(Direction::Down);

        let outcome = state.tick();
        assert!(matches!(outcome, TickOutcome::Collided { .. }));
        assert_eq!(state.phase, SimPhase::Halted);
        assert!(!state.is_running());
        // The halting tick's movement and count are kept
        assert_eq!(state.tick_count, 1);
        assert_eq!(state.player.pos, Vec2::new(0.0, 111.0));

        let frozen_player = state.player.clone();
        let frozen_obstacles = state.obstacles.as_slice().to_vec();
        let frozen_score = state.score();
        for _ in 0..50 {
            assert_eq!(state.tick(), TickOutcome::Halted);
        }
        assert_eq!(state.player, frozen_player);
        assert_eq!(state.obstacles.as_slice(), &frozen_obstacles[..]);
        assert_eq!(state.score(), frozen_score);
        assert_eq!(state.tick_count, 1);
    }

    #[test]
    fn test_idle_player_eventually_collides_with_reference_config() {
        // Player sits at x 0..30; a wall reaches x = 30 within the first
        // few pairs unless every gap lines up, which the seed does not allow
        let mut state = SimulationState::new(2024);
        let mut ticks = 0;
        while state.is_running() && ticks < 10_000 {
            state.tick();
            ticks += 1;
        }
        assert!(!state.is_running());
        assert!(state.tick_count > 120);
        assert!(any_collision(&state.player, state.obstacles.as_slice()));
    }

    #[test]
    fn test_collision_event_recorded_once() {
        let mut state = SimulationState::new(1);
        state.obstacles.push(Vec2::new(0.0, 0.0), Vec2::new(500.0, 500.0), 0);
        state.tick();
        state.tick();
        let collisions: Vec<_> = state
            .drain_events()
            .into_iter()
            .filter(|e| matches!(e, SimEvent::Collision { .. }))
            .collect();
        assert_eq!(collisions.len(), 1);
    }

    #[test]
    fn test_culling_extension_prunes_passed_walls() {
        let config = SimConfig {
            player_start: Vec2::new(0.0, -500.0),
            cull_offscreen: true,
            ..Default::default()
        };
        let mut state = SimulationState::with_config(config, 9).expect("valid config");
        // First pair spawns at 120 with x = 480, right edge passes 0 after 491 more ticks
        for _ in 0..700 {
            state.tick();
        }
        assert!(state.obstacles.iter().all(|o| o.bounds().right >= 0.0));
        assert!(state.obstacles.created() > state.obstacles.len() as u32);
        assert!(
            state
                .drain_events()
                .iter()
                .any(|e| matches!(e, SimEvent::Culled { .. }))
        );
    }

    #[test]
    fn test_determinism() {
        let mut a = SimulationState::new(99999);
        let mut b = SimulationState::new(99999);
        let presses = [Direction::Up, Direction::Right, Direction::Down];
        for i in 0..400 {
            if i % 37 == 0 {
                let dir = presses[(i / 37) % presses.len()];
                a.on_direction_press(dir);
                b.on_direction_press(dir);
            }
            if i % 53 == 0 {
                a.on_direction_release();
                b.on_direction_release();
            }
            a.tick();
            b.tick();
        }
        assert_eq!(a.tick_count, b.tick_count);
        assert_eq!(a.phase, b.phase);
        assert_eq!(a.player, b.player);
        assert_eq!(a.obstacles.as_slice(), b.obstacles.as_slice());
    }
}
