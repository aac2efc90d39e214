//! Gap Dodge entry point
//!
//! Headless demo: runs one simulation at the configured cadence with the
//! autopilot at the controls, then prints the final frame.
//!
//! Usage: `gap-dodge [config.json] [seed] [max_ticks]`

use std::error::Error;
use std::thread;
use std::time::{Instant, SystemTime, UNIX_EPOCH};

use gap_dodge::platform::{Autopilot, FixedStep};
use gap_dodge::renderer::{Frame, LogPresenter, Presenter, TextRenderer};
use gap_dodge::sim::{SimEvent, SimulationState, TickOutcome};
use gap_dodge::SimConfig;

/// Stop the demo after this many ticks if the autopilot never crashes
const DEFAULT_MAX_TICKS: u64 = 6000;

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    log::info!("Gap Dodge (headless) starting...");

    let mut args = std::env::args().skip(1);

    let config = match args.next().as_deref() {
        Some("-") | None => SimConfig::default(),
        Some(path) => SimConfig::load(path)?,
    };
    let seed = match args.next() {
        Some(s) => s.parse()?,
        None => SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0),
    };
    let max_ticks = match args.next() {
        Some(s) => s.parse()?,
        None => DEFAULT_MAX_TICKS,
    };

    log::info!(
        "Seed {}, tick period {}ms, bottom height basis {}",
        seed,
        config.tick_period_ms,
        config.bottom_height_basis.as_str()
    );

    let mut stepper = FixedStep::from_millis(config.tick_period_ms);
    let mut state = SimulationState::with_config(config, seed)?;
    let pilot = Autopilot::default();
    let mut presenter = LogPresenter::new(50);

    let mut last = Instant::now();
    'run: while state.tick_count < max_ticks {
        thread::sleep(stepper.until_next());
        let now = Instant::now();
        let due = stepper.advance(now - last);
        last = now;

        for _ in 0..due {
            pilot.steer(&mut state);
            let outcome = state.tick();

            for event in state.drain_events() {
                if let SimEvent::ObstaclesSpawned(record) = event {
                    log::debug!(
                        "Pair at tick {}: height {}, gap {}",
                        record.tick,
                        record.height,
                        record.gap
                    );
                }
            }
            presenter.present(&Frame::capture(&state))?;

            if outcome != TickOutcome::Advanced || state.tick_count >= max_ticks {
                break 'run;
            }
        }
    }

    if state.is_running() {
        log::info!("Tick limit {} reached without a collision", max_ticks);
    }

    let frame = Frame::capture(&state);
    print!("{}", TextRenderer::default().render(&frame));
    println!(
        "Ticks: {}  Obstacles created: {}",
        state.tick_count,
        state.obstacles.created()
    );
    Ok(())
}
