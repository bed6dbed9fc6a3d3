//! # Live Age Updates
//!
//! Re-evaluates an age on a fixed interval so that running totals (seconds, minutes)
//! keep moving while a result is on screen.
//!
//! The ticker samples a [`Clock`] on a background thread and hands every fresh
//! [`AgeResult`] to a callback. Dropping the ticker, or calling [`AgeTicker::cancel`],
//! stops the thread and waits for it to finish. A ticker dropped from inside its own
//! callback does not wait; its thread exits as soon as the callback returns.
//!
//! ```rust
//! # use calckit::prelude::*;
//! use std::sync::mpsc;
//! use std::time::Duration;
//!
//! let birth = parse_local_date("2000-01-01")?;
//! let (tx, rx) = mpsc::channel();
//! let ticker = AgeTicker::spawn(birth, SystemClock, Duration::from_millis(10), move |age| {
//!     let _ = tx.send(age);
//! })?;
//! let first = rx.recv()?.unwrap();
//! assert!(first.years >= 24);
//! ticker.cancel();
//! # CalcResult::Ok(())
//! ```

use crate::CalcResult;
use crate::calendar::age::{AgeResult, calculate_age};
use chrono::{Local, NaiveDate, NaiveDateTime};
use std::sync::mpsc::{self, RecvTimeoutError, Sender};
use std::thread::{self, JoinHandle};
use std::time::Duration;

/// Interval between two evaluations of a live age.
pub const DEFAULT_TICK_INTERVAL: Duration = Duration::from_secs(1);

/// Source of the current local instant.
pub trait Clock: Send + 'static {
    fn now(&self) -> NaiveDateTime;
}

/// Local wall-clock time of the host.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// Cancellable periodic age evaluation.
#[derive(Debug)]
pub struct AgeTicker {
    stop: Option<Sender<()>>,
    handle: Option<JoinHandle<()>>,
}

impl AgeTicker {
    /// Start ticking immediately, then once per `interval`.
    ///
    /// The callback receives `None` while the birth date lies after the clock's current time.
    pub fn spawn<C, F>(
        birth_date: NaiveDate,
        clock: C,
        interval: Duration,
        mut on_tick: F,
    ) -> CalcResult<Self>
    where
        C: Clock,
        F: FnMut(Option<AgeResult>) + Send + 'static,
    {
        let (stop_tx, stop_rx) = mpsc::channel::<()>();

        let handle = thread::Builder::new()
            .name("age-ticker".to_string())
            .spawn(move || {
                loop {
                    let age = calculate_age()
                        .birth_date(birth_date)
                        .now(clock.now())
                        .call();
                    on_tick(age);

                    match stop_rx.recv_timeout(interval) {
                        Err(RecvTimeoutError::Timeout) => continue,
                        // Explicit stop or the ticker was dropped
                        Ok(()) | Err(RecvTimeoutError::Disconnected) => break,
                    }
                }
                trace!("age ticker for {birth_date} stopped");
            })?;

        debug!("age ticker for {birth_date} started, interval {interval:?}");
        Ok(AgeTicker {
            stop: Some(stop_tx),
            handle: Some(handle),
        })
    }

    /// Start ticking once per second on the system clock.
    pub fn spawn_default<F>(birth_date: NaiveDate, on_tick: F) -> CalcResult<Self>
    where
        F: FnMut(Option<AgeResult>) + Send + 'static,
    {
        Self::spawn(birth_date, SystemClock, DEFAULT_TICK_INTERVAL, on_tick)
    }

    /// Stop ticking and wait for the last evaluation to finish.
    pub fn cancel(mut self) {
        self.shutdown();
    }

    fn shutdown(&mut self) {
        // Dropping the sender wakes the thread out of its wait
        self.stop.take();
        if let Some(handle) = self.handle.take() {
            // Dropped from its own callback: the thread exits once the callback returns
            if handle.thread().id() == thread::current().id() {
                return;
            }
            if handle.join().is_err() {
                warn!("age ticker thread panicked");
            }
        }
    }
}

impl Drop for AgeTicker {
    fn drop(&mut self) {
        self.shutdown();
    }
}

// =======================================
// UNIT TESTS
// =======================================
#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicI64, Ordering};
    use std::sync::{Arc, Mutex};

    /// Starts at `start` and advances one second per reading.
    struct SteppingClock {
        start: NaiveDateTime,
        readings: Arc<AtomicI64>,
    }

    impl Clock for SteppingClock {
        fn now(&self) -> NaiveDateTime {
            let n = self.readings.fetch_add(1, Ordering::SeqCst);
            self.start + chrono::Duration::seconds(n)
        }
    }

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_ticker_reports_advancing_totals() {
        let clock = SteppingClock {
            start: ymd(2024, 6, 15).and_hms_opt(12, 0, 0).unwrap(),
            readings: Arc::new(AtomicI64::new(0)),
        };
        let (tx, rx) = mpsc::channel();
        let ticker = AgeTicker::spawn(ymd(2000, 1, 1), clock, Duration::from_millis(1), move |age| {
            let _ = tx.send(age);
        })
        .unwrap();

        let first = rx.recv().unwrap().unwrap();
        let second = rx.recv().unwrap().unwrap();
        ticker.cancel();

        assert_eq!(first.years, 24);
        assert_eq!(second.total_seconds, first.total_seconds + 1);
    }

    #[test]
    fn test_ticker_future_birth_date() {
        let clock = SteppingClock {
            start: ymd(2024, 1, 1).and_hms_opt(0, 0, 0).unwrap(),
            readings: Arc::new(AtomicI64::new(0)),
        };
        let (tx, rx) = mpsc::channel();
        let ticker = AgeTicker::spawn(ymd(2030, 1, 1), clock, Duration::from_millis(1), move |age| {
            let _ = tx.send(age);
        })
        .unwrap();
        assert!(rx.recv().unwrap().is_none());
        drop(ticker);
    }

    #[test]
    fn test_ticker_stops_on_cancel() {
        let readings = Arc::new(AtomicI64::new(0));
        let clock = SteppingClock {
            start: ymd(2024, 1, 1).and_hms_opt(0, 0, 0).unwrap(),
            readings: Arc::clone(&readings),
        };
        let ticker = AgeTicker::spawn(ymd(2000, 1, 1), clock, Duration::from_secs(60), |_| {})
            .unwrap();
        // Long interval: cancel must not wait for the next tick
        ticker.cancel();
        let after_cancel = readings.load(Ordering::SeqCst);
        thread::sleep(Duration::from_millis(20));
        assert_eq!(readings.load(Ordering::SeqCst), after_cancel);
        assert!(after_cancel <= 1);
    }

    #[test]
    fn test_ticker_dropped_from_its_own_callback() {
        let clock = SteppingClock {
            start: ymd(2024, 1, 1).and_hms_opt(0, 0, 0).unwrap(),
            readings: Arc::new(AtomicI64::new(0)),
        };
        let slot: Arc<Mutex<Option<AgeTicker>>> = Arc::new(Mutex::new(None));
        let (done_tx, done_rx) = mpsc::channel();

        let callback_slot = Arc::clone(&slot);
        let ticker = AgeTicker::spawn(ymd(2000, 1, 1), clock, Duration::from_millis(1), move |_| {
            let owned = callback_slot.lock().unwrap().take();
            if let Some(ticker) = owned {
                drop(ticker);
                let _ = done_tx.send(());
            }
        })
        .unwrap();
        *slot.lock().unwrap() = Some(ticker);

        assert_eq!(done_rx.recv_timeout(Duration::from_secs(5)), Ok(()));
        // The thread winds down and releases the callback
        assert_eq!(
            done_rx.recv_timeout(Duration::from_secs(5)),
            Err(RecvTimeoutError::Disconnected)
        );
    }
}
