//! Fixed timestep accumulator
//!
//! Converts wall-clock time into a whole number of simulation ticks. Leftover
//! time carries into the next frame.

use std::time::Duration;

use crate::consts::MAX_SUBSTEPS;

#[derive(Debug, Clone)]
pub struct FixedStep {
    period: Duration,
    accumulator: Duration,
    max_substeps: u32,
}

impl FixedStep {
    pub fn new(period: Duration) -> Self {
        Self {
            period,
            accumulator: Duration::ZERO,
            max_substeps: MAX_SUBSTEPS,
        }
    }

    pub fn from_millis(ms: u64) -> Self {
        Self::new(Duration::from_millis(ms))
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    /// Add elapsed time and return how many ticks are due
    ///
    /// Never returns more than the substep cap; time beyond the cap is
    /// dropped so a long stall does not cause a burst of catch-up ticks.
    pub fn advance(&mut self, elapsed: Duration) -> u32 {
        let cap = self.period * self.max_substeps;
        self.accumulator = (self.accumulator + elapsed).min(cap);

        let mut due = 0;
        while self.accumulator >= self.period && due < self.max_substeps {
            self.accumulator -= self.period;
            due += 1;
        }
        due
    }

    /// Time until the next tick is due
    pub fn until_next(&self) -> Duration {
        self.period.saturating_sub(self.accumulator)
    }
}
