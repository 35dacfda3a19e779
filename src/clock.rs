//! Advisory per-move clock.
//!
//! The engine never schedules callbacks; the presentation layer polls
//! with its own notion of "now" and invokes the session's turn-forfeit
//! transition when a move runs out of time.

use std::time::{Duration, Instant};

/// Default time allowed per move.
pub const DEFAULT_MOVE_LIMIT: Duration = Duration::from_secs(30);

/// Tracks elapsed time on the current move against a fixed limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveClock {
    limit: Duration,
    started: Instant,
}

impl MoveClock {
    /// Creates a clock with the given limit, started at `now`.
    pub fn new(limit: Duration, now: Instant) -> Self {
        Self { limit, started: now }
    }

    /// Restarts the clock at `now` for the next move.
    pub fn restart(&mut self, now: Instant) {
        self.started = now;
    }

    /// Backdates the clock so that `elapsed` time has already passed,
    /// used when restoring a saved game mid-move.
    pub fn restart_with_elapsed(&mut self, now: Instant, elapsed: Duration) {
        self.started = now.checked_sub(elapsed).unwrap_or(now);
    }

    /// The configured per-move limit.
    pub fn limit(&self) -> Duration {
        self.limit
    }

    /// Time spent on the current move as of `now`.
    pub fn elapsed(&self, now: Instant) -> Duration {
        now.saturating_duration_since(self.started)
    }

    /// Time left on the current move as of `now`, saturating at zero.
    pub fn remaining(&self, now: Instant) -> Duration {
        self.limit.saturating_sub(self.elapsed(now))
    }

    /// Whether the current move has run out of time as of `now`.
    pub fn is_expired(&self, now: Instant) -> bool {
        self.remaining(now) == Duration::ZERO
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_clock_not_expired() {
        let now = Instant::now();
        let clock = MoveClock::new(DEFAULT_MOVE_LIMIT, now);
        assert_eq!(clock.remaining(now), DEFAULT_MOVE_LIMIT);
        assert!(!clock.is_expired(now));
    }

    #[test]
    fn test_remaining_counts_down() {
        let now = Instant::now();
        let clock = MoveClock::new(Duration::from_secs(30), now);
        let later = now + Duration::from_secs(12);
        assert_eq!(clock.remaining(later), Duration::from_secs(18));
        assert_eq!(clock.elapsed(later), Duration::from_secs(12));
    }

    #[test]
    fn test_expires_at_limit() {
        let now = Instant::now();
        let clock = MoveClock::new(Duration::from_secs(30), now);
        assert!(clock.is_expired(now + Duration::from_secs(30)));
        assert!(clock.is_expired(now + Duration::from_secs(31)));
        assert_eq!(
            clock.remaining(now + Duration::from_secs(45)),
            Duration::ZERO
        );
    }

    #[test]
    fn test_restart_resets_elapsed() {
        let now = Instant::now();
        let mut clock = MoveClock::new(Duration::from_secs(30), now);
        let later = now + Duration::from_secs(29);
        clock.restart(later);
        assert_eq!(clock.remaining(later), Duration::from_secs(30));
    }

    #[test]
    fn test_restart_with_elapsed_backdates() {
        let now = Instant::now() + Duration::from_secs(100);
        let mut clock = MoveClock::new(Duration::from_secs(30), now);
        clock.restart_with_elapsed(now, Duration::from_secs(10));
        assert_eq!(clock.remaining(now), Duration::from_secs(20));
    }
}
