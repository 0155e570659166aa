//! Fixed-cadence tick timer driven by the event loop.

use std::time::{Duration, Instant};

/// Holds the deadline of the next game tick. After each tick the deadline is
/// re-armed one interval from when the tick ran, so a stalled frame never
/// produces a burst of catch-up ticks.
#[derive(Debug, Clone, Copy)]
pub struct TickScheduler {
    interval: Duration,
    next_tick: Instant,
}

impl TickScheduler {
    pub fn new(interval: Duration, now: Instant) -> Self {
        Self {
            interval,
            next_tick: now + interval,
        }
    }

    pub fn from_millis(millis: u64, now: Instant) -> Self {
        Self::new(Duration::from_millis(millis), now)
    }

    pub fn is_due(&self, now: Instant) -> bool {
        now >= self.next_tick
    }

    pub fn rearm(&mut self, now: Instant) {
        self.next_tick = now + self.interval;
    }

    pub fn next_tick(&self) -> Instant {
        self.next_tick
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }
}
