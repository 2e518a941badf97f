//! The game loop's periodic timer.
//!
//! A `Ticker` never fires on its own: the caller polls it with the current
//! time. Disarming clears the pending deadline, so a poll that arrives after
//! a stop can never fire.

use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
pub struct Ticker {
    period: Duration,
    next_due: Option<Instant>,
}

impl Ticker {
    pub fn new(period: Duration) -> Self {
        Self {
            period,
            next_due: None,
        }
    }

    pub fn from_millis(period_ms: u32) -> Self {
        Self::new(Duration::from_millis(period_ms.max(1) as u64))
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    pub fn is_armed(&self) -> bool {
        self.next_due.is_some()
    }

    /// Schedule the first firing one period after `now`.
    ///
    /// Re-arming an armed ticker keeps its current deadline.
    pub fn arm(&mut self, now: Instant) {
        if self.next_due.is_none() {
            self.next_due = Some(now + self.period);
        }
    }

    pub fn disarm(&mut self) {
        self.next_due = None;
    }

    /// Fire at most once if the deadline has passed.
    ///
    /// The next deadline is measured from `now`, so a late poll does not
    /// produce a burst of catch-up ticks.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.next_due {
            Some(due) if now >= due => {
                self.next_due = Some(now + self.period);
                true
            }
            _ => false,
        }
    }

    /// Time left until the next firing; `None` when disarmed.
    pub fn time_until(&self, now: Instant) -> Option<Duration> {
        self.next_due
            .map(|due| due.checked_duration_since(now).unwrap_or(Duration::ZERO))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MS: Duration = Duration::from_millis(1);

    #[test]
    fn test_disarmed_never_fires() {
        let t0 = Instant::now();
        let mut t = Ticker::from_millis(50);
        assert!(!t.is_armed());
        assert!(!t.poll(t0 + 1000 * MS));
        assert_eq!(t.time_until(t0), None);
    }

    #[test]
    fn test_fires_once_per_period() {
        let t0 = Instant::now();
        let mut t = Ticker::from_millis(50);
        t.arm(t0);

        assert!(!t.poll(t0 + 49 * MS));
        assert!(t.poll(t0 + 50 * MS));
        assert!(!t.poll(t0 + 60 * MS));
        assert!(t.poll(t0 + 100 * MS));
    }

    #[test]
    fn test_late_poll_does_not_catch_up() {
        let t0 = Instant::now();
        let mut t = Ticker::from_millis(50);
        t.arm(t0);

        assert!(t.poll(t0 + 500 * MS));
        assert!(!t.poll(t0 + 500 * MS));
        assert_eq!(t.time_until(t0 + 500 * MS), Some(50 * MS));
    }

    #[test]
    fn test_rearm_keeps_deadline() {
        let t0 = Instant::now();
        let mut t = Ticker::from_millis(50);
        t.arm(t0);
        t.arm(t0 + 40 * MS);
        assert!(t.poll(t0 + 50 * MS));
    }

    #[test]
    fn test_disarm_cancels_pending_firing() {
        let t0 = Instant::now();
        let mut t = Ticker::from_millis(50);
        t.arm(t0);
        t.disarm();
        assert!(!t.poll(t0 + 50 * MS));
        assert!(!t.is_armed());
    }

    #[test]
    fn test_time_until_saturates_at_zero() {
        let t0 = Instant::now();
        let mut t = Ticker::from_millis(50);
        t.arm(t0);
        assert_eq!(t.time_until(t0 + 80 * MS), Some(Duration::ZERO));
        assert_eq!(t.time_until(t0 + 20 * MS), Some(30 * MS));
    }

    #[test]
    fn test_zero_period_is_raised_to_one_ms() {
        assert_eq!(Ticker::from_millis(0).period(), MS);
    }
}
