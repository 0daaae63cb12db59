//! Frame clocks
//!
//! A clock reports the seconds elapsed since it was last asked.

use std::time::Instant;

/// Source of per-frame deltas
pub trait Clock {
    /// Seconds since the previous call; never negative
    fn elapsed(&mut self) -> f64;
}

/// Wall-clock time from a monotonic source.
///
/// The first call only records the baseline and returns 0.
#[derive(Debug, Default)]
pub struct MonotonicClock {
    last: Option<Instant>,
}

impl MonotonicClock {
    pub fn new() -> Self {
        Self { last: None }
    }

    /// Start measuring from now so the next call returns a real delta
    pub fn primed() -> Self {
        Self {
            last: Some(Instant::now()),
        }
    }
}

impl Clock for MonotonicClock {
    fn elapsed(&mut self) -> f64 {
        let now = Instant::now();
        let delta = match self.last {
            Some(prev) => now.saturating_duration_since(prev).as_secs_f64(),
            None => 0.0,
        };
        self.last = Some(now);
        delta
    }
}

/// Returns the same step every frame (deterministic replays)
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    step: f64,
}

impl FixedClock {
    /// Non-finite or negative steps collapse to 0
    pub fn new(step: f64) -> Self {
        let step = if step.is_finite() { step.max(0.0) } else { 0.0 };
        Self { step }
    }

    pub fn step(&self) -> f64 {
        self.step
    }
}

impl Clock for FixedClock {
    fn elapsed(&mut self) -> f64 {
        self.step
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_monotonic_first_call_is_zero() {
        let mut clock = MonotonicClock::new();
        assert_eq!(clock.elapsed(), 0.0);
        assert!(clock.elapsed() >= 0.0);
    }

    #[test]
    fn test_monotonic_measures_sleep() {
        let mut clock = MonotonicClock::primed();
        std::thread::sleep(std::time::Duration::from_millis(5));
        assert!(clock.elapsed() >= 0.004);
    }

    #[test]
    fn test_fixed_clock() {
        let mut clock = FixedClock::new(0.25);
        assert_eq!(clock.elapsed(), 0.25);
        assert_eq!(clock.elapsed(), 0.25);
        assert_eq!(FixedClock::new(-1.0).step(), 0.0);
        assert_eq!(FixedClock::new(f64::NAN).step(), 0.0);
    }
}
