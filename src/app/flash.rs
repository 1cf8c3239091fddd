//! Periodic flash reminder scheduling.

use std::time::{Duration, Instant};

use crate::model::constants::FLASH_INTERVAL;

/// Fires once per period while started.
#[derive(Debug, Clone)]
pub struct FlashScheduler {
    period: Duration,
    next: Option<Instant>,
}

impl Default for FlashScheduler {
    fn default() -> Self {
        Self::new(FLASH_INTERVAL)
    }
}

impl FlashScheduler {
    pub fn new(period: Duration) -> Self {
        Self { period, next: None }
    }

    pub fn start(&mut self, now: Instant) {
        self.next = Some(now + self.period);
    }

    pub fn stop(&mut self) {
        self.next = None;
    }

    pub fn is_running(&self) -> bool {
        self.next.is_some()
    }

    pub fn next_due(&self) -> Option<Instant> {
        self.next
    }

    /// True if a period elapsed. Missed periods collapse into one flash and
    /// the next one is scheduled a full period from `now`.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.next {
            Some(due) if now >= due => {
                self.next = Some(now + self.period);
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fires_once_per_period() {
        let t0 = Instant::now();
        let mut f = FlashScheduler::default();
        f.start(t0);

        assert!(!f.poll(t0 + Duration::from_secs(60)));
        assert!(f.poll(t0 + FLASH_INTERVAL));
        assert!(!f.poll(t0 + FLASH_INTERVAL + Duration::from_secs(1)));
        assert!(f.poll(t0 + FLASH_INTERVAL * 2));
    }

    #[test]
    fn long_sleep_fires_once() {
        let t0 = Instant::now();
        let mut f = FlashScheduler::default();
        f.start(t0);
        let late = t0 + FLASH_INTERVAL * 5;
        assert!(f.poll(late));
        assert!(!f.poll(late));
        assert_eq!(f.next_due(), Some(late + FLASH_INTERVAL));
    }

    #[test]
    fn stopped_never_fires() {
        let t0 = Instant::now();
        let mut f = FlashScheduler::default();
        f.start(t0);
        f.stop();
        assert!(!f.is_running());
        assert!(!f.poll(t0 + FLASH_INTERVAL * 2));
    }
}
