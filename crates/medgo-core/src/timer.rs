//! Frame-driven timers
//!
//! Both timers count host frame time handed to them through `tick`; there
//! is no background thread. A timer belongs to exactly one component and
//! goes away with it.

use std::time::Duration;

/// Fires once after a delay
#[derive(Debug, Clone)]
pub struct Timeout {
    remaining: Duration,
    fired: bool,
}

impl Timeout {
    pub fn after(delay: Duration) -> Self {
        Self {
            remaining: delay,
            fired: false,
        }
    }

    pub fn after_ms(delay_ms: u64) -> Self {
        Self::after(Duration::from_millis(delay_ms))
    }

    pub fn has_fired(&self) -> bool {
        self.fired
    }

    /// Returns the time left over past the firing point on the tick where
    /// the timeout fires, `None` on every other tick.
    pub fn tick(&mut self, dt: Duration) -> Option<Duration> {
        if self.fired {
            return None;
        }
        if dt >= self.remaining {
            self.fired = true;
            let left = dt - self.remaining;
            self.remaining = Duration::ZERO;
            Some(left)
        } else {
            self.remaining -= dt;
            None
        }
    }
}

/// Fires every `period` until cancelled
#[derive(Debug, Clone)]
pub struct Interval {
    period: Duration,
    until_next: Duration,
    active: bool,
}

impl Interval {
    pub fn every(period: Duration) -> Self {
        Self {
            period,
            until_next: period,
            active: !period.is_zero(),
        }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Cancelling twice is fine
    pub fn cancel(&mut self) {
        self.active = false;
    }

    /// Number of times the interval fired during `dt`
    pub fn tick(&mut self, dt: Duration) -> u32 {
        if !self.active {
            return 0;
        }
        let mut fired = 0;
        let mut dt = dt;
        while dt >= self.until_next {
            dt -= self.until_next;
            self.until_next = self.period;
            fired += 1;
        }
        self.until_next -= dt;
        fired
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn test_timeout_fires_once_with_leftover() {
        let mut timeout = Timeout::after_ms(300);
        assert_eq!(timeout.tick(ms(200)), None);
        assert!(!timeout.has_fired());
        assert_eq!(timeout.tick(ms(150)), Some(ms(50)));
        assert!(timeout.has_fired());
        assert_eq!(timeout.tick(ms(500)), None);
    }

    #[test]
    fn test_zero_timeout_fires_on_first_tick() {
        let mut timeout = Timeout::after(Duration::ZERO);
        assert_eq!(timeout.tick(Duration::ZERO), Some(Duration::ZERO));
    }

    #[test]
    fn test_interval_counts_periods() {
        let mut interval = Interval::every(ms(16));
        assert_eq!(interval.tick(ms(10)), 0);
        assert_eq!(interval.tick(ms(6)), 1);
        assert_eq!(interval.tick(ms(50)), 3);
        assert_eq!(interval.tick(ms(14)), 1);
    }

    #[test]
    fn test_cancelled_interval_is_silent() {
        let mut interval = Interval::every(ms(16));
        interval.cancel();
        interval.cancel();
        assert!(!interval.is_active());
        assert_eq!(interval.tick(ms(1000)), 0);
    }

    #[test]
    fn test_zero_period_never_fires() {
        let mut interval = Interval::every(Duration::ZERO);
        assert!(!interval.is_active());
        assert_eq!(interval.tick(ms(16)), 0);
    }
}
