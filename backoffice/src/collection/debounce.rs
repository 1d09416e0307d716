//! Search input debouncing.
//!
//! At most one evaluation per quiet period, with the period anchored at the
//! moment of submission. Superseding input kills the pending timer outright
//! rather than letting it fire and be ignored, and every evaluation carries a
//! generation token so the caller can discard a result that a later
//! submission or retraction has overtaken. Dropping the debouncer cancels any
//! outstanding timer.
use std::time::Duration;
use tokio::sync::{mpsc, oneshot};
use tracing::debug;

struct KillHandle(Option<oneshot::Sender<()>>);

impl KillHandle {
    fn kill(&mut self) {
        if let Some(tx) = self.0.take() {
            // The timer may already have fired; that is not an error.
            let _ = tx.send(());
        }
    }
}

fn kill_channel() -> (KillHandle, oneshot::Receiver<()>) {
    let (tx, rx) = oneshot::channel();
    (KillHandle(Some(tx)), rx)
}

/// A value that survived a full quiet period.
#[derive(Debug, PartialEq, Eq)]
pub struct Debounced<T> {
    pub generation: u64,
    pub value: T,
}

pub struct Debouncer<T> {
    quiet: Duration,
    latest: u64,
    kill: Option<KillHandle>,
    pending: bool,
    tx: mpsc::UnboundedSender<Debounced<T>>,
    rx: mpsc::UnboundedReceiver<Debounced<T>>,
}

impl<T: Send + 'static> Debouncer<T> {
    pub fn new(quiet: Duration) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            quiet,
            latest: 0,
            kill: None,
            pending: false,
            tx,
            rx,
        }
    }
    /// Schedule `value` for evaluation one quiet interval from now,
    /// superseding any pending evaluation. Returns the new generation token.
    pub fn submit(&mut self, value: T) -> u64 {
        self.cancel_pending();
        let (handle, signal) = kill_channel();
        self.kill = Some(handle);
        self.pending = true;
        self.latest += 1;
        let generation = self.latest;
        // Anchor the deadline at submission, not at the task's first poll.
        let deadline = tokio::time::Instant::now() + self.quiet;
        let tx = self.tx.clone();
        tokio::spawn(async move {
            tokio::select! {
                biased;
                // Once the deadline has passed the value always settles, even
                // if a kill arrives before the task is next polled.
                _ = tokio::time::sleep_until(deadline) => {
                    let _ = tx.send(Debounced { generation, value });
                }
                // Also resolves when the handle is dropped on teardown.
                _ = signal => debug!("Debounced evaluation {generation} cancelled"),
            }
        });
        generation
    }
    /// Kill the pending timer, if any, without scheduling a replacement. Any
    /// value that settled before the retraction is marked stale.
    pub fn cancel_pending(&mut self) {
        if let Some(mut kill) = self.kill.take() {
            kill.kill();
            self.latest += 1;
            self.pending = false;
        }
    }
    /// The generation of the most recent submission or retraction. A settled
    /// value with an older generation has been superseded and must be
    /// discarded.
    pub fn latest_generation(&self) -> u64 {
        self.latest
    }
    /// Wait for the next value to survive its quiet period. Returns `None`
    /// immediately when no evaluation is outstanding.
    pub async fn settled(&mut self) -> Option<Debounced<T>> {
        if let Some(value) = self.try_settled() {
            return Some(value);
        }
        if !self.pending {
            return None;
        }
        let value = self.rx.recv().await?;
        if value.generation == self.latest {
            self.pending = false;
        }
        Some(value)
    }
    /// Non-blocking variant of [`Self::settled`].
    pub fn try_settled(&mut self) -> Option<Debounced<T>> {
        let value = self.rx.try_recv().ok()?;
        if value.generation == self.latest {
            self.pending = false;
        }
        Some(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn rapid_updates_yield_one_evaluation_of_the_last_value() {
        let mut debouncer = Debouncer::new(Duration::from_millis(300));
        debouncer.submit("a".to_string());
        tokio::time::advance(Duration::from_millis(100)).await;
        debouncer.submit("ab".to_string());
        tokio::time::advance(Duration::from_millis(100)).await;
        let generation = debouncer.submit("aba".to_string());
        tokio::time::advance(Duration::from_millis(301)).await;

        let settled = debouncer.settled().await.unwrap();
        assert_eq!(settled.generation, generation);
        assert_eq!(settled.value, "aba");
        assert_eq!(settled.generation, debouncer.latest_generation());
        // The superseded submissions were killed, not merely ignored.
        assert!(debouncer.try_settled().is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn spaced_updates_each_evaluate() {
        let mut debouncer = Debouncer::new(Duration::from_millis(300));
        debouncer.submit(1);
        tokio::time::advance(Duration::from_millis(301)).await;
        debouncer.submit(2);
        tokio::time::advance(Duration::from_millis(301)).await;
        assert_eq!(debouncer.settled().await.unwrap().value, 1);
        assert_eq!(debouncer.settled().await.unwrap().value, 2);
    }

    #[tokio::test(start_paused = true)]
    async fn quiet_period_is_anchored_at_submission() {
        let mut debouncer = Debouncer::new(Duration::from_millis(300));
        let generation = debouncer.submit("kept");
        tokio::time::advance(Duration::from_millis(301)).await;
        // The quiet period elapsed before this supersession, so the first
        // value must still settle rather than be cancelled retroactively.
        debouncer.submit("newer");
        let settled = debouncer.settled().await.unwrap();
        assert_eq!(settled.generation, generation);
        assert_eq!(settled.value, "kept");
    }

    #[tokio::test(start_paused = true)]
    async fn settled_is_none_after_a_retraction() {
        let mut debouncer: Debouncer<&str> = Debouncer::new(Duration::from_millis(300));
        assert!(debouncer.settled().await.is_none());
        debouncer.submit("doomed");
        debouncer.cancel_pending();
        // Nothing is outstanding, so waiting must not block.
        assert!(debouncer.settled().await.is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn retraction_after_the_quiet_period_marks_the_value_stale() {
        let mut debouncer = Debouncer::new(Duration::from_millis(300));
        debouncer.submit("retracted");
        tokio::time::advance(Duration::from_millis(301)).await;
        debouncer.cancel_pending();
        let settled = debouncer.settled().await.unwrap();
        assert!(settled.generation < debouncer.latest_generation());
    }

    #[tokio::test(start_paused = true)]
    async fn cancel_pending_suppresses_the_evaluation() {
        let mut debouncer = Debouncer::new(Duration::from_millis(300));
        debouncer.submit("doomed");
        debouncer.cancel_pending();
        tokio::time::advance(Duration::from_millis(400)).await;
        assert!(debouncer.try_settled().is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn stale_generation_is_detectable() {
        let mut debouncer = Debouncer::new(Duration::from_millis(300));
        let first = debouncer.submit("old");
        tokio::time::advance(Duration::from_millis(301)).await;
        // The first evaluation settled, but newer input has since arrived.
        let second = debouncer.submit("new");
        let settled = debouncer.settled().await.unwrap();
        assert_eq!(settled.generation, first);
        assert!(settled.generation < debouncer.latest_generation());
        tokio::time::advance(Duration::from_millis(301)).await;
        assert_eq!(debouncer.settled().await.unwrap().generation, second);
    }
}
