//! Refresh scheduling for the reader loop.
//!
//! The reader is single-threaded: the main loop asks [`RefreshClock`]
//! whether a fetch is due, runs it in place, and records the attempt.  A
//! failed fetch is not retried until the next interval, the same as a
//! successful one.
//!
//! ## For contributors
//!
//! All methods take `now` explicitly so tests can drive the clock with
//! synthetic [`Instant`]s instead of sleeping.

use std::time::{Duration, Instant};

/// How often the reader re-fetches its feed by default.
pub const DEFAULT_REFRESH_INTERVAL: Duration = Duration::from_secs(30 * 60);

#[derive(Debug)]
pub struct RefreshClock {
    interval: Duration,
    last_attempt: Option<Instant>,
    forced: bool,
}

impl RefreshClock {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            last_attempt: None,
            forced: false,
        }
    }

    /// True before the first fetch, after [`request_now`](Self::request_now),
    /// and once `interval` has passed since the last attempt.
    pub fn is_due(&self, now: Instant) -> bool {
        match self.last_attempt {
            None => true,
            Some(_) if self.forced => true,
            Some(at) => now.saturating_duration_since(at) >= self.interval,
        }
    }

    /// Record that a fetch ran at `now`, whatever its outcome.
    pub fn mark_attempt(&mut self, now: Instant) {
        self.last_attempt = Some(now);
        self.forced = false;
    }

    /// Make the next [`is_due`](Self::is_due) return true.
    pub fn request_now(&mut self) {
        self.forced = true;
    }

    /// Time left until the next scheduled fetch, `None` before the first one.
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        let at = self.last_attempt?;
        Some(self.interval.saturating_sub(now.saturating_duration_since(at)))
    }

    /// Human-readable countdown for the header line.
    pub fn countdown(&self, now: Instant) -> String {
        match self.remaining(now) {
            None => "Next update: unknown".to_string(),
            Some(left) if left.is_zero() => "Updating soon…".to_string(),
            Some(left) => {
                let secs = left.as_secs();
                format!("Next update in {:02}:{:02}", secs / 60, secs % 60)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MIN: Duration = Duration::from_secs(60);

    #[test]
    fn due_before_first_attempt() {
        let clock = RefreshClock::new(MIN);
        assert!(clock.is_due(Instant::now()));
        assert_eq!(clock.countdown(Instant::now()), "Next update: unknown");
    }

    #[test]
    fn not_due_until_interval_passes() {
        let start = Instant::now();
        let mut clock = RefreshClock::new(MIN);
        clock.mark_attempt(start);

        assert!(!clock.is_due(start + Duration::from_secs(59)));
        assert!(clock.is_due(start + MIN));
    }

    #[test]
    fn request_now_forces_one_refresh() {
        let start = Instant::now();
        let mut clock = RefreshClock::new(MIN);
        clock.mark_attempt(start);

        clock.request_now();
        assert!(clock.is_due(start));

        clock.mark_attempt(start);
        assert!(!clock.is_due(start));
    }

    #[test]
    fn countdown_formats_minutes_and_seconds() {
        let start = Instant::now();
        let mut clock = RefreshClock::new(DEFAULT_REFRESH_INTERVAL);
        clock.mark_attempt(start);

        assert_eq!(clock.countdown(start), "Next update in 30:00");
        assert_eq!(
            clock.countdown(start + Duration::from_secs(61)),
            "Next update in 28:59"
        );
    }

    #[test]
    fn countdown_when_overdue() {
        let start = Instant::now();
        let mut clock = RefreshClock::new(MIN);
        clock.mark_attempt(start);
        assert_eq!(clock.countdown(start + 2 * MIN), "Updating soon…");
    }
}
