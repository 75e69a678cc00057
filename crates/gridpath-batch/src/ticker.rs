//! A fixed-interval trigger running on its own control thread.

use std::sync::mpsc::{self, RecvTimeoutError, Sender};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use log::{debug, warn};

use crate::error::{BatchError, Result};

/// Calls a callback once per interval until stopped.
///
/// The callback runs on the ticker thread, so a slow tick delays the next one
/// instead of overlapping it. Stopping never interrupts a tick that is
/// already running; [`stop`](Self::stop) waits for it to return.
pub struct Ticker {
    stop_tx: Option<Sender<()>>,
    handle: Option<JoinHandle<u64>>,
}

impl Ticker {
    /// Spawn the control thread. The first tick fires one `interval` after
    /// start; `on_tick` receives the zero-based tick number.
    pub fn start<F>(interval: Duration, mut on_tick: F) -> Result<Self>
    where
        F: FnMut(u64) + Send + 'static,
    {
        let Some(mut next) = Instant::now().checked_add(interval) else {
            return Err(BatchError::Config(format!(
                "ticker interval {interval:?} is out of range"
            )));
        };
        let (stop_tx, stop_rx) = mpsc::channel::<()>();
        let handle = thread::Builder::new()
            .name("gridpath-ticker".into())
            .spawn(move || {
                let mut ticks = 0u64;
                loop {
                    let wait = next.saturating_duration_since(Instant::now());
                    match stop_rx.recv_timeout(wait) {
                        Err(RecvTimeoutError::Timeout) => {}
                        Ok(()) | Err(RecvTimeoutError::Disconnected) => break,
                    }
                    on_tick(ticks);
                    ticks += 1;

                    // Overran: skip the missed deadlines rather than bursting.
                    let now = Instant::now();
                    let following = match next.checked_add(interval) {
                        Some(t) if t > now => Some(t),
                        _ => now.checked_add(interval),
                    };
                    let Some(following) = following else {
                        warn!("ticker deadline overflowed after {ticks} ticks");
                        break;
                    };
                    next = following;
                }
                debug!("ticker stopped after {ticks} ticks");
                ticks
            })?;
        Ok(Self {
            stop_tx: Some(stop_tx),
            handle: Some(handle),
        })
    }

    /// Whether the control thread is still alive.
    pub fn is_running(&self) -> bool {
        self.handle.as_ref().is_some_and(|h| !h.is_finished())
    }

    /// Stop scheduling ticks, wait for an in-flight tick, and return how many
    /// ticks ran.
    pub fn stop(mut self) -> Result<u64> {
        self.shutdown()
    }

    fn shutdown(&mut self) -> Result<u64> {
        // Dropping the sender wakes the control thread.
        self.stop_tx.take();
        match self.handle.take() {
            Some(handle) => handle.join().map_err(|_| BatchError::TickerPanicked),
            None => Ok(0),
        }
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        if let Err(e) = self.shutdown() {
            warn!("{e}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

    const TIMEOUT: Duration = Duration::from_secs(5);

    #[test]
    fn ticks_in_order_until_stopped() {
        let (tx, rx) = mpsc::channel();
        let ticker = Ticker::start(Duration::from_millis(5), move |n| {
            let _ = tx.send(n);
        })
        .unwrap();
        for expected in 0..3 {
            assert_eq!(rx.recv_timeout(TIMEOUT), Ok(expected));
        }
        let ticks = ticker.stop().unwrap();
        assert!(ticks >= 3);
    }

    #[test]
    fn stop_waits_for_in_flight_tick() {
        let (started_tx, started_rx) = mpsc::channel();
        let finished = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&finished);
        let ticker = Ticker::start(Duration::from_millis(1), move |_| {
            let _ = started_tx.send(());
            thread::sleep(Duration::from_millis(50));
            flag.store(true, Ordering::SeqCst);
        })
        .unwrap();

        started_rx.recv_timeout(TIMEOUT).unwrap();
        let ticks = ticker.stop().unwrap();
        assert!(finished.load(Ordering::SeqCst));
        assert_eq!(ticks, 1);
    }

    #[test]
    fn drop_stops_ticking() {
        let count = Arc::new(AtomicU64::new(0));
        let seen = Arc::clone(&count);
        let ticker = Ticker::start(Duration::from_millis(2), move |_| {
            seen.fetch_add(1, Ordering::SeqCst);
        })
        .unwrap();
        thread::sleep(Duration::from_millis(20));
        drop(ticker);
        let after_drop = count.load(Ordering::SeqCst);
        thread::sleep(Duration::from_millis(20));
        assert_eq!(count.load(Ordering::SeqCst), after_drop);
    }

    #[test]
    fn stop_before_first_tick() {
        let ticker = Ticker::start(Duration::from_secs(60), |_| {}).unwrap();
        assert!(ticker.is_running());
        assert_eq!(ticker.stop().unwrap(), 0);
    }

    #[test]
    fn unrepresentable_interval_is_rejected() {
        let called = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&called);
        let result = Ticker::start(Duration::MAX, move |_| flag.store(true, Ordering::SeqCst));
        assert!(matches!(result, Err(BatchError::Config(_))));
        assert!(!called.load(Ordering::SeqCst));
    }

    #[test]
    fn panicking_tick_is_reported() {
        let ticker = Ticker::start(Duration::from_millis(1), |_| panic!("boom")).unwrap();
        while ticker.is_running() {
            thread::sleep(Duration::from_millis(1));
        }
        assert!(matches!(ticker.stop(), Err(BatchError::TickerPanicked)));
    }
}
