//! Scroll speed ramp: a step up every fixed interval of play.

use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpeedController {
    pub base_speed: f64,
    pub step: f64,
    pub step_interval: Duration,
}

impl SpeedController {
    /// Speed after `elapsed` time since round start.
    ///
    /// `base + floor(elapsed / interval) * step`. Unbounded.
    pub fn speed_at(&self, elapsed: Duration) -> f64 {
        let interval_ms = self.step_interval.as_millis().max(1);
        let increments = elapsed.as_millis() / interval_ms;
        self.base_speed + increments as f64 * self.step
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn controller() -> SpeedController {
        SpeedController {
            base_speed: 6.0,
            step: 0.8,
            step_interval: Duration::from_secs(10),
        }
    }

    #[test]
    fn test_base_speed_at_start() {
        assert_eq!(controller().speed_at(Duration::ZERO), 6.0);
    }

    #[test]
    fn test_step_boundaries() {
        let c = controller();
        assert_eq!(c.speed_at(Duration::from_millis(9_999)), 6.0);
        assert!((c.speed_at(Duration::from_secs(10)) - 6.8).abs() < 1e-9);
        assert!((c.speed_at(Duration::from_millis(19_999)) - 6.8).abs() < 1e-9);
        assert!((c.speed_at(Duration::from_secs(20)) - 7.6).abs() < 1e-9);
    }

    #[test]
    fn test_matches_closed_form() {
        let c = controller();
        for seconds in 0..300u64 {
            let expected = 6.0 + 0.8 * (seconds / 10) as f64;
            let actual = c.speed_at(Duration::from_secs(seconds));
            assert!((actual - expected).abs() < 1e-9, "t={}", seconds);
        }
    }

    #[test]
    fn test_non_decreasing() {
        let c = controller();
        let mut last = 0.0;
        for ms in (0..120_000u64).step_by(250) {
            let speed = c.speed_at(Duration::from_millis(ms));
            assert!(speed >= last);
            last = speed;
        }
    }

    #[test]
    fn test_idempotent() {
        let c = controller();
        let t = Duration::from_millis(34_567);
        assert_eq!(c.speed_at(t), c.speed_at(t));
    }
}
