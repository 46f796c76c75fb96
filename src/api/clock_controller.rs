use chrono::{DateTime, Utc};
use tracing::{debug, trace};

use crate::clock::{ClockTicker, TickWaker, WallClock};
use crate::error::ChartResult;
use crate::render::Renderer;

use super::ChartEngine;

impl<R: Renderer, C: WallClock> ChartEngine<R, C> {
    /// Last sampled wall-clock time.
    #[must_use]
    pub fn current_time(&self) -> DateTime<Utc> {
        self.clock.current()
    }

    /// Resamples the wall clock immediately.
    pub fn tick_clock(&mut self) -> DateTime<Utc> {
        self.clock.tick()
    }

    /// Starts the periodic timer. Restarting replaces the previous timer.
    pub fn start_live_clock(&mut self) -> ChartResult<()> {
        self.start_live_clock_with_waker(None)
    }

    /// Starts the periodic timer with a callback run on every tick.
    pub fn start_live_clock_with_waker(&mut self, waker: Option<TickWaker>) -> ChartResult<()> {
        self.stop_live_clock();
        let ticker = ClockTicker::spawn_with_waker(self.clock.interval(), waker)?;
        self.ticker = Some(ticker);
        self.clock.tick();
        Ok(())
    }

    /// Stops and joins the periodic timer, if running.
    pub fn stop_live_clock(&mut self) {
        if let Some(mut ticker) = self.ticker.take() {
            ticker.shutdown();
            debug!("live clock stopped");
        }
    }

    #[must_use]
    pub fn is_live_clock_running(&self) -> bool {
        self.ticker.as_ref().is_some_and(ClockTicker::is_running)
    }

    /// Drains pending timer ticks on the calling thread.
    ///
    /// Resamples the clock once if any tick arrived and returns whether it did.
    pub fn pump_clock(&mut self) -> bool {
        let Some(ticker) = self.ticker.as_ref() else {
            return false;
        };
        let pending = ticker.drain();
        if pending == 0 {
            return false;
        }
        let now = self.clock.tick();
        trace!(pending, %now, "live clock advanced");
        true
    }
}
