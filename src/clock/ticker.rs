use std::sync::mpsc::{
    self, Receiver, RecvTimeoutError, Sender, SyncSender, TryRecvError, TrySendError,
};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use tracing::{debug, trace};

use crate::error::{ChartError, ChartResult};

/// Callback run on the timer thread whenever a tick becomes pending, typically
/// to wake the host event loop so it can call `ChartEngine::pump_clock`.
pub type TickWaker = Box<dyn Fn() + Send + 'static>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClockTick {
    pub sequence: u64,
}

/// Scoped periodic timer.
///
/// A worker thread emits one [`ClockTick`] per interval. At most one tick is
/// queued; ticks arriving while one is pending are coalesced into it.
/// Dropping the ticker stops and joins the worker, so no callback outlives
/// its owner.
pub struct ClockTicker {
    ticks: Receiver<ClockTick>,
    stop: Option<Sender<()>>,
    worker: Option<JoinHandle<()>>,
    interval: Duration,
}

impl std::fmt::Debug for ClockTicker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClockTicker")
            .field("interval", &self.interval)
            .field("running", &self.is_running())
            .finish()
    }
}

impl ClockTicker {
    pub fn spawn(interval: Duration) -> ChartResult<Self> {
        Self::spawn_with_waker(interval, None)
    }

    pub fn spawn_with_waker(interval: Duration, waker: Option<TickWaker>) -> ChartResult<Self> {
        if interval.is_zero() {
            return Err(ChartError::InvalidData(
                "clock interval must be > 0".to_owned(),
            ));
        }

        let (tick_tx, ticks) = mpsc::sync_channel(1);
        let (stop, stop_rx) = mpsc::channel::<()>();
        let worker = thread::Builder::new()
            .name("tariff-chart-clock".to_owned())
            .spawn(move || run_ticker(interval, &stop_rx, &tick_tx, waker.as_deref()))?;

        debug!(interval_ms = interval.as_millis() as u64, "clock ticker started");
        Ok(Self {
            ticks,
            stop: Some(stop),
            worker: Some(worker),
            interval,
        })
    }

    #[must_use]
    pub fn interval(&self) -> Duration {
        self.interval
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.worker.is_some()
    }

    /// Takes every pending tick without blocking and returns how many there were.
    pub fn drain(&self) -> usize {
        let mut count = 0;
        loop {
            match self.ticks.try_recv() {
                Ok(tick) => {
                    trace!(sequence = tick.sequence, "clock tick");
                    count += 1;
                }
                Err(TryRecvError::Empty | TryRecvError::Disconnected) => return count,
            }
        }
    }

    /// Stops the worker and waits for it to exit. Idempotent.
    pub fn shutdown(&mut self) {
        // Dropping the sender disconnects the worker's stop channel.
        self.stop.take();
        if let Some(worker) = self.worker.take() {
            let _ = worker.join();
            debug!("clock ticker stopped");
        }
        while self.ticks.try_recv().is_ok() {}
    }
}

impl Drop for ClockTicker {
    fn drop(&mut self) {
        self.shutdown();
    }
}

fn run_ticker(
    interval: Duration,
    stop: &Receiver<()>,
    ticks: &SyncSender<ClockTick>,
    waker: Option<&(dyn Fn() + Send)>,
) {
    let mut sequence = 0_u64;
    loop {
        match stop.recv_timeout(interval) {
            Err(RecvTimeoutError::Timeout) => {
                sequence += 1;
                match ticks.try_send(ClockTick { sequence }) {
                    Ok(()) => {
                        if let Some(waker) = waker {
                            waker();
                        }
                    }
                    Err(TrySendError::Full(_)) => {}
                    Err(TrySendError::Disconnected(_)) => return,
                }
            }
            Ok(()) | Err(RecvTimeoutError::Disconnected) => return,
        }
    }
}
