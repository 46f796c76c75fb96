//! Wall-clock sampling for the live "now" marker.

mod ticker;

pub use ticker::{ClockTick, ClockTicker, TickWaker};

use std::time::Duration;

use chrono::{DateTime, Utc};

/// Source of the current wall-clock time.
pub trait WallClock {
    fn now(&self) -> DateTime<Utc>;
}

/// Reads the system clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl WallClock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

impl<F> WallClock for F
where
    F: Fn() -> DateTime<Utc>,
{
    fn now(&self) -> DateTime<Utc> {
        self()
    }
}

/// Last sampled wall-clock time, refreshed once per tick.
///
/// Every tick resamples the clock instead of advancing a counter, so missed
/// or late ticks never accumulate drift.
#[derive(Debug, Clone)]
pub struct LiveClock<C: WallClock = SystemClock> {
    clock: C,
    current: DateTime<Utc>,
    interval: Duration,
}

impl<C: WallClock> LiveClock<C> {
    #[must_use]
    pub fn new(clock: C, interval: Duration) -> Self {
        let current = clock.now();
        Self {
            clock,
            current,
            interval,
        }
    }

    #[must_use]
    pub fn current(&self) -> DateTime<Utc> {
        self.current
    }

    #[must_use]
    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn tick(&mut self) -> DateTime<Utc> {
        self.current = self.clock.now();
        self.current
    }
}
