use std::cell::Cell;
use std::rc::Rc;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::thread;
use std::time::{Duration, Instant};

use chrono::{DateTime, TimeDelta, TimeZone, Utc};

use tariff_chart::ChartError;
use tariff_chart::clock::{ClockTicker, LiveClock, TickWaker, WallClock};

fn base() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0)
        .single()
        .expect("valid ts")
}

fn wait_until(deadline: Duration, mut condition: impl FnMut() -> bool) -> bool {
    let start = Instant::now();
    while start.elapsed() < deadline {
        if condition() {
            return true;
        }
        thread::sleep(Duration::from_millis(5));
    }
    condition()
}

#[test]
fn live_clock_samples_on_creation_and_each_tick() {
    let seconds = Rc::new(Cell::new(0_i64));
    let source = {
        let seconds = Rc::clone(&seconds);
        move || base() + TimeDelta::seconds(seconds.get())
    };

    let mut clock = LiveClock::new(source, Duration::from_secs(1));
    assert_eq!(clock.current(), base());

    seconds.set(1);
    assert_eq!(clock.current(), base(), "no resample before tick");
    assert_eq!(clock.tick(), base() + TimeDelta::seconds(1));

    // A jump of several seconds is picked up in one tick, not counted forward.
    seconds.set(9);
    assert_eq!(clock.tick(), base() + TimeDelta::seconds(9));
    assert_eq!(clock.interval(), Duration::from_secs(1));
}

#[test]
fn closures_act_as_wall_clocks() {
    let fixed = || base();
    assert_eq!(fixed.now(), base());
}

#[test]
fn ticker_delivers_ticks_until_shutdown() {
    let mut ticker = ClockTicker::spawn(Duration::from_millis(5)).expect("spawn ticker");
    assert!(ticker.is_running());
    assert_eq!(ticker.interval(), Duration::from_millis(5));

    let mut received = 0;
    assert!(
        wait_until(Duration::from_secs(2), || {
            received += ticker.drain();
            received >= 2
        }),
        "ticker should deliver ticks"
    );

    ticker.shutdown();
    assert!(!ticker.is_running());
    thread::sleep(Duration::from_millis(30));
    assert_eq!(ticker.drain(), 0, "no ticks after shutdown");

    ticker.shutdown();
}

#[test]
fn waker_runs_once_per_queued_tick() {
    let wakes = Arc::new(AtomicUsize::new(0));
    let waker: TickWaker = {
        let wakes = Arc::clone(&wakes);
        Box::new(move || {
            wakes.fetch_add(1, Ordering::SeqCst);
        })
    };

    let ticker =
        ClockTicker::spawn_with_waker(Duration::from_millis(5), Some(waker)).expect("spawn");
    assert!(wait_until(Duration::from_secs(2), || {
        ticker.drain();
        wakes.load(Ordering::SeqCst) >= 2
    }));

    drop(ticker);
    let after_drop = wakes.load(Ordering::SeqCst);
    thread::sleep(Duration::from_millis(30));
    assert_eq!(wakes.load(Ordering::SeqCst), after_drop);
}

#[test]
fn zero_interval_is_rejected() {
    let err = ClockTicker::spawn(Duration::ZERO).expect_err("zero interval");
    assert!(matches!(err, ChartError::InvalidData(_)));
}

#[test]
fn undrained_ticks_coalesce_into_one() {
    let wakes = Arc::new(AtomicUsize::new(0));
    let waker: TickWaker = {
        let wakes = Arc::clone(&wakes);
        Box::new(move || {
            wakes.fetch_add(1, Ordering::SeqCst);
        })
    };
    let ticker =
        ClockTicker::spawn_with_waker(Duration::from_millis(2), Some(waker)).expect("spawn");

    assert!(wait_until(Duration::from_secs(2), || wakes.load(Ordering::SeqCst) >= 1));
    thread::sleep(Duration::from_millis(50));

    // Many intervals elapsed, but only one tick was queued and woke the host.
    assert_eq!(wakes.load(Ordering::SeqCst), 1);
    assert_eq!(ticker.drain(), 1);
}
