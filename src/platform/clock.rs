//! Fixed-rate tick pacing

use std::time::{Duration, Instant};

/// Waits out the remainder of a tick
pub trait Pacer {
    fn wait(&mut self);
}

/// Sleeps so that ticks start `1 / tick_rate` seconds apart.
///
/// If a tick overruns, the schedule restarts from now instead of trying to
/// catch up.
#[derive(Debug, Clone)]
pub struct FrameClock {
    period: Duration,
    next: Option<Instant>,
}

impl FrameClock {
    pub fn new(tick_rate: u32) -> Self {
        Self {
            period: Duration::from_secs(1) / tick_rate.max(1),
            next: None,
        }
    }

    pub fn period(&self) -> Duration {
        self.period
    }
}

impl Pacer for FrameClock {
    fn wait(&mut self) {
        let now = Instant::now();
        let deadline = self.next.unwrap_or(now + self.period);
        if deadline > now {
            std::thread::sleep(deadline - now);
            self.next = Some(deadline + self.period);
        } else {
            self.next = Some(now + self.period);
        }
    }
}

/// Runs ticks back to back (tests, headless replays)
#[derive(Debug, Clone, Copy, Default)]
pub struct NoWait;

impl Pacer for NoWait {
    fn wait(&mut self) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_period_from_rate() {
        assert_eq!(FrameClock::new(10).period(), Duration::from_millis(100));
        assert_eq!(FrameClock::new(0).period(), Duration::from_secs(1));
    }

    #[test]
    fn test_wait_paces_ticks() {
        let mut clock = FrameClock::new(200);
        let start = Instant::now();
        for _ in 0..3 {
            clock.wait();
        }
        assert!(start.elapsed() >= Duration::from_millis(10));
    }
}
