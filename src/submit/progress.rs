//! Cosmetic submission progress. The percentage is advanced on a fixed
//! timer while the network calls are in flight, capped at 90 until the
//! sequence resolves, then snapped to 100 (or reset to 0 on failure). It is
//! UI feedback only and says nothing about actual network progress.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;

pub const PROGRESS_CAP: u8 = 90;
pub const PROGRESS_DONE: u8 = 100;

const TICK_INTERVAL: Duration = Duration::from_millis(200);
const TICK_STEP: u8 = 5;

pub struct Progress {
    tx: Arc<watch::Sender<u8>>,
}

impl Progress {
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(0);
        Self { tx: Arc::new(tx) }
    }

    pub fn subscribe(&self) -> watch::Receiver<u8> {
        self.tx.subscribe()
    }

    /// Starts the ticker task. The returned guard aborts it when dropped,
    /// so the percentage stops moving the moment the sequence resolves.
    pub fn start_ticker(&self) -> TickerGuard {
        self.tx.send_replace(0);
        let tx = Arc::clone(&self.tx);
        let handle = tokio::spawn(async move {
            let mut interval = tokio::time::interval(TICK_INTERVAL);
            interval.tick().await;
            loop {
                interval.tick().await;
                let current = *tx.borrow();
                tx.send_replace(current.saturating_add(TICK_STEP).min(PROGRESS_CAP));
            }
        });
        TickerGuard { handle }
    }

    pub fn finish(&self) {
        self.tx.send_replace(PROGRESS_DONE);
    }

    pub fn reset(&self) {
        self.tx.send_replace(0);
    }
}

impl Default for Progress {
    fn default() -> Self {
        Self::new()
    }
}

pub struct TickerGuard {
    handle: JoinHandle<()>,
}

impl Drop for TickerGuard {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn ticker_caps_at_ninety_until_resolution() {
        let progress = Progress::new();
        let rx = progress.subscribe();
        let ticker = progress.start_ticker();

        // Far more ticks than needed to reach the cap.
        for _ in 0..40 {
            tokio::time::advance(TICK_INTERVAL).await;
            tokio::task::yield_now().await;
        }
        assert_eq!(*rx.borrow(), PROGRESS_CAP);

        drop(ticker);
        progress.finish();
        assert_eq!(*rx.borrow(), PROGRESS_DONE);
    }

    #[tokio::test]
    async fn reset_returns_to_zero_after_failure() {
        let progress = Progress::new();
        let rx = progress.subscribe();
        let ticker = progress.start_ticker();
        drop(ticker);
        progress.reset();
        assert_eq!(*rx.borrow(), 0);
    }
}
