//! Fixed-timestep driver that turns wall-clock time into game ticks.

use super::logic::RunnerGame;
use super::types::RunnerEvent;
use crate::core::constants::MAX_CATCH_UP_MS;
use rand::Rng;
use std::time::{Duration, Instant};

/// Outcome of one [`FixedStepDriver::advance`] call.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StepReport {
    /// Ticks actually applied.
    pub steps: u32,
    pub events: Vec<RunnerEvent>,
}

/// Accumulates elapsed time and steps the game in fixed increments.
#[derive(Debug, Clone)]
pub struct FixedStepDriver {
    tick_interval: Duration,
    max_catch_up: Duration,
    accumulated: Duration,
    last_advance: Option<Instant>,
}

impl FixedStepDriver {
    pub fn new(tick_interval: Duration) -> Self {
        Self {
            tick_interval,
            max_catch_up: Duration::from_millis(MAX_CATCH_UP_MS),
            accumulated: Duration::ZERO,
            last_advance: None,
        }
    }

    pub fn tick_interval(&self) -> Duration {
        self.tick_interval
    }

    /// Drop any pending time. Call when a round starts.
    pub fn reset(&mut self, now: Instant) {
        self.accumulated = Duration::ZERO;
        self.last_advance = Some(now);
    }

    /// Run every tick that is due at `now`.
    ///
    /// Elapsed time is clamped to 100ms so a stall does not turn into a
    /// burst of catch-up ticks. Stops as soon as the round is over; a
    /// stopped or finished game consumes no ticks.
    pub fn advance<R: Rng>(
        &mut self,
        game: &mut RunnerGame,
        now: Instant,
        rng: &mut R,
    ) -> StepReport {
        let mut report = StepReport::default();
        if !game.is_running() {
            self.reset(now);
            return report;
        }

        let last = self.last_advance.unwrap_or(now);
        let elapsed = now.saturating_duration_since(last).min(self.max_catch_up);
        self.last_advance = Some(now);
        self.accumulated += elapsed;

        while self.accumulated >= self.tick_interval {
            self.accumulated -= self.tick_interval;
            report.events.extend(game.update(now, rng));
            report.steps += 1;

            if !game.is_running() {
                self.accumulated = Duration::ZERO;
                break;
            }
        }

        report
    }

    /// Time until the next tick is due, for sizing the input poll.
    pub fn time_until_next_tick(&self) -> Duration {
        self.tick_interval.saturating_sub(self.accumulated)
    }
}
