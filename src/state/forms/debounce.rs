//! Trailing-edge debouncer backed by a tokio task
//!
//! Each `schedule` aborts whatever is still pending and arms a fresh
//! timer; only the last value of a burst is delivered on the channel.
//! Dropping the debouncer aborts the pending timer.

use std::time::Duration;
use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;

pub struct Debouncer<T> {
    delay: Duration,
    tx: UnboundedSender<T>,
    pending: Option<JoinHandle<()>>,
}

impl<T: Send + 'static> Debouncer<T> {
    pub fn new(delay: Duration, tx: UnboundedSender<T>) -> Self {
        Self {
            delay,
            tx,
            pending: None,
        }
    }

    /// Deliver `value` after the delay unless another value is scheduled first.
    ///
    /// Must be called from within a tokio runtime.
    pub fn schedule(&mut self, value: T) {
        self.cancel();

        let tx = self.tx.clone();
        let delay = self.delay;
        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            // Receiver gone means the app is shutting down
            let _ = tx.send(value);
        }));
    }

    /// Abort the pending timer. Returns true if one was still armed.
    pub fn cancel(&mut self) -> bool {
        match self.pending.take() {
            Some(handle) if !handle.is_finished() => {
                handle.abort();
                tracing::trace!("debounce timer cancelled");
                true
            }
            _ => false,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending.as_ref().is_some_and(|h| !h.is_finished())
    }
}

impl<T> Drop for Debouncer<T> {
    fn drop(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::sync::mpsc::{self, error::TryRecvError};

    const DELAY: Duration = Duration::from_millis(500);

    #[tokio::test(start_paused = true)]
    async fn test_delivers_after_delay() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut debouncer = Debouncer::new(DELAY, tx);

        debouncer.schedule(1);
        assert!(debouncer.is_pending());

        tokio::time::sleep(Duration::from_millis(499)).await;
        assert_eq!(rx.try_recv(), Err(TryRecvError::Empty));

        tokio::time::sleep(Duration::from_millis(2)).await;
        assert_eq!(rx.try_recv(), Ok(1));
        assert!(!debouncer.is_pending());
    }

    #[tokio::test(start_paused = true)]
    async fn test_burst_delivers_only_last_value() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut debouncer = Debouncer::new(DELAY, tx);

        debouncer.schedule("first");
        tokio::time::sleep(Duration::from_millis(200)).await;
        debouncer.schedule("second");
        tokio::time::sleep(Duration::from_millis(400)).await;
        // 600ms since the first schedule, but it was superseded
        assert_eq!(rx.try_recv(), Err(TryRecvError::Empty));

        tokio::time::sleep(Duration::from_millis(200)).await;
        assert_eq!(rx.try_recv(), Ok("second"));
        assert_eq!(rx.try_recv(), Err(TryRecvError::Empty));
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_prevents_delivery() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut debouncer = Debouncer::new(DELAY, tx);

        debouncer.schedule(7);
        assert!(debouncer.cancel());
        assert!(!debouncer.cancel());

        tokio::time::sleep(DELAY * 2).await;
        assert_eq!(rx.try_recv(), Err(TryRecvError::Empty));
    }

    #[tokio::test(start_paused = true)]
    async fn test_drop_aborts_pending_timer() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut debouncer = Debouncer::new(DELAY, tx);
        debouncer.schedule(3);
        drop(debouncer);

        tokio::time::sleep(DELAY * 2).await;
        // All senders are gone and nothing was delivered
        assert_eq!(rx.try_recv(), Err(TryRecvError::Disconnected));
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_after_delivery_reports_nothing_pending() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut debouncer = Debouncer::new(DELAY, tx);
        debouncer.schedule(5);

        tokio::time::sleep(DELAY + Duration::from_millis(1)).await;
        assert_eq!(rx.try_recv(), Ok(5));
        assert!(!debouncer.cancel());
    }
}
