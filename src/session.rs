//! Paid break timer.
//!
//! Tracks how long the current break has lasted and what it earned at the
//! player's monthly salary. Stopping the session is what ends the game round
//! from outside.

use crate::core::constants::{WORKING_DAYS_PER_MONTH, WORKING_HOURS_PER_DAY};
use chrono::{DateTime, Local};
use std::time::{Duration, Instant};
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum SessionError {
    #[error("monthly salary must be a positive number, got {0}")]
    InvalidSalary(f64),
}

/// Earnings per minute of paid time for a monthly salary.
pub fn rate_per_minute(monthly_salary: f64) -> f64 {
    let hourly = monthly_salary / (WORKING_DAYS_PER_MONTH * WORKING_HOURS_PER_DAY);
    hourly / 60.0
}

/// A running break.
#[derive(Debug, Clone)]
pub struct BreakSession {
    monthly_salary: f64,
    started_at: Instant,
    /// Wall-clock start time, for display only.
    pub started_at_local: DateTime<Local>,
}

impl BreakSession {
    pub fn start(monthly_salary: f64, now: Instant) -> Result<Self, SessionError> {
        if !monthly_salary.is_finite() || monthly_salary <= 0.0 {
            return Err(SessionError::InvalidSalary(monthly_salary));
        }
        log::info!("break started at salary {:.2}", monthly_salary);
        Ok(Self {
            monthly_salary,
            started_at: now,
            started_at_local: Local::now(),
        })
    }

    pub fn monthly_salary(&self) -> f64 {
        self.monthly_salary
    }

    pub fn elapsed(&self, now: Instant) -> Duration {
        now.saturating_duration_since(self.started_at)
    }

    /// Running clock as `MM:SS`. Minutes wrap at one hour.
    pub fn clock_display(&self, now: Instant) -> String {
        let total = self.elapsed(now).as_secs();
        format!("{:02}:{:02}", (total / 60) % 60, total % 60)
    }

    /// Earnings so far, counted in whole seconds.
    pub fn earnings_so_far(&self, now: Instant) -> f64 {
        earnings_for(self.elapsed(now).as_secs(), self.monthly_salary)
    }

    /// End the break and compute what it was worth.
    pub fn stop(self, now: Instant) -> SessionSummary {
        let total_seconds = self.elapsed(now).as_secs();
        let summary = SessionSummary {
            total_seconds,
            earnings: earnings_for(total_seconds, self.monthly_salary),
        };
        log::info!(
            "break stopped after {} earning {}",
            summary.time_spent(),
            summary.earnings_display()
        );
        summary
    }
}

fn earnings_for(total_seconds: u64, monthly_salary: f64) -> f64 {
    (total_seconds as f64 / 60.0) * rate_per_minute(monthly_salary)
}

/// Result of a finished break.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SessionSummary {
    pub total_seconds: u64,
    pub earnings: f64,
}

impl SessionSummary {
    /// `M:SS`, minutes not padded or wrapped.
    pub fn time_spent(&self) -> String {
        format!("{}:{:02}", self.total_seconds / 60, self.total_seconds % 60)
    }

    pub fn earnings_display(&self) -> String {
        format!("{:.2}€", self.earnings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_invalid_salary() {
        let now = Instant::now();
        assert_eq!(
            BreakSession::start(0.0, now).unwrap_err(),
            SessionError::InvalidSalary(0.0)
        );
        assert!(BreakSession::start(-10.0, now).is_err());
        assert!(BreakSession::start(f64::NAN, now).is_err());
        assert!(BreakSession::start(f64::INFINITY, now).is_err());
    }

    #[test]
    fn test_rate_per_minute() {
        // 3360 / 168 hours = 20/hour
        assert!((rate_per_minute(3360.0) - 20.0 / 60.0).abs() < 1e-12);
    }

    #[test]
    fn test_clock_display() {
        let t0 = Instant::now();
        let session = BreakSession::start(3000.0, t0).unwrap();
        assert_eq!(session.clock_display(t0), "00:00");
        assert_eq!(session.clock_display(t0 + Duration::from_secs(65)), "01:05");
        assert_eq!(
            session.clock_display(t0 + Duration::from_millis(59_999)),
            "00:59"
        );
        // Minutes wrap at the hour like a stopwatch face
        assert_eq!(
            session.clock_display(t0 + Duration::from_secs(3_725)),
            "02:05"
        );
    }

    #[test]
    fn test_stop_summary() {
        let t0 = Instant::now();
        let session = BreakSession::start(3360.0, t0).unwrap();

        let summary = session.stop(t0 + Duration::from_millis(90_900));

        assert_eq!(summary.total_seconds, 90);
        assert_eq!(summary.time_spent(), "1:30");
        // 1.5 minutes at 1/3 per minute
        assert!((summary.earnings - 0.5).abs() < 1e-12);
        assert_eq!(summary.earnings_display(), "0.50€");
    }

    #[test]
    fn test_long_break_time_spent_is_not_wrapped() {
        let summary = SessionSummary {
            total_seconds: 3_725,
            earnings: 0.0,
        };
        assert_eq!(summary.time_spent(), "62:05");
    }

    #[test]
    fn test_earnings_so_far_counts_whole_seconds() {
        let t0 = Instant::now();
        let session = BreakSession::start(3360.0, t0).unwrap();
        let a = session.earnings_so_far(t0 + Duration::from_millis(59_000));
        let b = session.earnings_so_far(t0 + Duration::from_millis(59_999));
        assert_eq!(a, b);
    }
}
