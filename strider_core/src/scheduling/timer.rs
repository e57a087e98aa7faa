use std::time::{Duration, Instant};

/// Owned handle for a periodic deadline.
///
/// The first fire is one full period after creation. `poll()` re-arms from
/// the moment it fires, so a caller that falls behind does not get a burst
/// of catch-up fires. Dropping the handle is cancellation; a cancelled
/// timer is recreated, never resumed.
#[derive(Debug)]
pub struct PeriodicTimer {
    period: Duration,
    next_due: Instant,
}

impl PeriodicTimer {
    pub fn new(period: Duration) -> Self {
        Self {
            period,
            next_due: Instant::now() + period,
        }
    }

    /// Returns `true` when the period has elapsed, re-arming the deadline.
    pub fn poll(&mut self) -> bool {
        let now = Instant::now();
        if now >= self.next_due {
            self.next_due = now + self.period;
            true
        } else {
            false
        }
    }

    pub fn period(&self) -> Duration {
        self.period
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_period_is_always_due() {
        let mut timer = PeriodicTimer::new(Duration::ZERO);
        assert!(timer.poll());
        assert!(timer.poll());
    }

    #[test]
    fn first_fire_waits_one_full_period() {
        let mut timer = PeriodicTimer::new(Duration::from_millis(50));
        assert!(!timer.poll());
        std::thread::sleep(Duration::from_millis(60));
        assert!(timer.poll());
    }

    #[test]
    fn poll_rearms_after_firing() {
        let mut timer = PeriodicTimer::new(Duration::from_millis(50));
        std::thread::sleep(Duration::from_millis(60));
        assert!(timer.poll());
        // Just fired; the next deadline is a full period away.
        assert!(!timer.poll());
    }
}
