//! Clipboard watch loop
//!
//! One long-lived task per clipboard slot polls the clipboard port and
//! emits a [`ClipboardEvent`] for every external change, in detection
//! order. The text and image watch tasks are independent and unordered
//! relative to each other.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::time::{self, MissedTickBehavior};
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

use crate::domain::clip::{ClipKind, ClipboardEvent};

use super::ports::Clipboard;

/// Capacity of the per-slot event channel. A burst beyond this
/// backpressures the poll loop instead of growing without bound.
const EVENT_CHANNEL_CAPACITY: usize = 16;

/// Spawn a watch task for one clipboard slot.
///
/// The first successful poll establishes a baseline and is not emitted;
/// only subsequent changes produce events. A slot cleared to empty updates
/// the baseline silently. The task stops when the token is cancelled or
/// the receiver is dropped, closing the returned channel.
pub fn spawn_watcher(
    clipboard: Arc<dyn Clipboard>,
    kind: ClipKind,
    poll_interval: Duration,
    cancel: CancellationToken,
) -> mpsc::Receiver<ClipboardEvent> {
    let (tx, rx) = mpsc::channel(EVENT_CHANNEL_CAPACITY);
    tokio::spawn(watch_loop(clipboard, kind, poll_interval, cancel, tx));
    rx
}

async fn watch_loop(
    clipboard: Arc<dyn Clipboard>,
    kind: ClipKind,
    poll_interval: Duration,
    cancel: CancellationToken,
    events: mpsc::Sender<ClipboardEvent>,
) {
    let mut ticker = time::interval(poll_interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

    // Last observed snapshot; None until the baseline read succeeds.
    let mut last_seen: Option<Vec<u8>> = None;

    loop {
        tokio::select! {
            _ = cancel.cancelled() => break,
            _ = ticker.tick() => {}
        }

        let current = match clipboard.read(kind).await {
            Ok(bytes) => bytes,
            Err(e) => {
                // Transient read failures skip the poll; the slot is
                // re-read on the next tick.
                warn!(slot = %kind, error = %e, "clipboard read failed");
                continue;
            }
        };

        match &last_seen {
            None => {
                last_seen = Some(current);
            }
            Some(previous) if *previous == current => {}
            Some(_) => {
                let emit = !current.is_empty();
                last_seen = Some(current.clone());

                if !emit {
                    debug!(slot = %kind, "slot cleared, no event");
                    continue;
                }

                if events
                    .send(ClipboardEvent::new(kind, current))
                    .await
                    .is_err()
                {
                    break;
                }
            }
        }
    }

    debug!(slot = %kind, "watch loop stopped");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::ClipboardError;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;
    use tokio::time::timeout;

    const POLL: Duration = Duration::from_millis(10);
    const EVENT_WAIT: Duration = Duration::from_secs(1);
    const QUIET_WAIT: Duration = Duration::from_millis(150);

    /// In-memory clipboard with a single controllable slot
    struct FakeClipboard {
        content: Mutex<Vec<u8>>,
        reads: AtomicUsize,
    }

    impl FakeClipboard {
        fn new(initial: &[u8]) -> Arc<Self> {
            Arc::new(Self {
                content: Mutex::new(initial.to_vec()),
                reads: AtomicUsize::new(0),
            })
        }

        fn set(&self, payload: &[u8]) {
            *self.content.lock().unwrap() = payload.to_vec();
        }

        /// Wait until the watcher has taken its baseline read, so writes
        /// made afterwards are guaranteed to be seen as changes.
        async fn baseline_observed(&self) {
            while self.reads.load(Ordering::SeqCst) == 0 {
                tokio::time::sleep(Duration::from_millis(5)).await;
            }
        }
    }

    #[async_trait]
    impl Clipboard for FakeClipboard {
        async fn probe(&self) -> Result<(), ClipboardError> {
            Ok(())
        }

        async fn read(&self, _kind: ClipKind) -> Result<Vec<u8>, ClipboardError> {
            let content = self.content.lock().unwrap().clone();
            self.reads.fetch_add(1, Ordering::SeqCst);
            Ok(content)
        }

        async fn write(&self, _kind: ClipKind, payload: &[u8]) -> Result<(), ClipboardError> {
            self.set(payload);
            Ok(())
        }
    }

    #[tokio::test]
    async fn baseline_is_not_emitted() {
        let clipboard = FakeClipboard::new(b"preexisting");
        let cancel = CancellationToken::new();
        let mut rx = spawn_watcher(clipboard, ClipKind::Text, POLL, cancel.clone());

        assert!(timeout(QUIET_WAIT, rx.recv()).await.is_err());
        cancel.cancel();
    }

    #[tokio::test]
    async fn distinct_writes_emit_in_order() {
        let clipboard = FakeClipboard::new(b"");
        let cancel = CancellationToken::new();
        let mut rx = spawn_watcher(
            Arc::clone(&clipboard) as Arc<dyn Clipboard>,
            ClipKind::Text,
            POLL,
            cancel.clone(),
        );
        clipboard.baseline_observed().await;

        for payload in [b"one".as_slice(), b"two", b"three"] {
            clipboard.set(payload);
            let event = timeout(EVENT_WAIT, rx.recv())
                .await
                .expect("event not emitted")
                .expect("channel closed");
            assert_eq!(event.kind(), ClipKind::Text);
            assert_eq!(event.payload(), payload);
        }

        cancel.cancel();
    }

    #[tokio::test]
    async fn unchanged_content_emits_nothing() {
        let clipboard = FakeClipboard::new(b"");
        let cancel = CancellationToken::new();
        let mut rx = spawn_watcher(
            Arc::clone(&clipboard) as Arc<dyn Clipboard>,
            ClipKind::Image,
            POLL,
            cancel.clone(),
        );
        clipboard.baseline_observed().await;

        clipboard.set(b"frame");
        let event = timeout(EVENT_WAIT, rx.recv()).await.unwrap().unwrap();
        assert_eq!(event.payload(), b"frame");

        // Re-writing the same bytes is a no-op; no duplicate event.
        clipboard.set(b"frame");
        assert!(timeout(QUIET_WAIT, rx.recv()).await.is_err());

        cancel.cancel();
    }

    #[tokio::test]
    async fn cleared_slot_emits_nothing() {
        let clipboard = FakeClipboard::new(b"");
        let cancel = CancellationToken::new();
        let mut rx = spawn_watcher(
            Arc::clone(&clipboard) as Arc<dyn Clipboard>,
            ClipKind::Text,
            POLL,
            cancel.clone(),
        );
        clipboard.baseline_observed().await;

        clipboard.set(b"something");
        timeout(EVENT_WAIT, rx.recv()).await.unwrap().unwrap();

        clipboard.set(b"");
        assert!(timeout(QUIET_WAIT, rx.recv()).await.is_err());

        // The cleared slot is the new baseline; restoring content emits.
        clipboard.set(b"something");
        let event = timeout(EVENT_WAIT, rx.recv()).await.unwrap().unwrap();
        assert_eq!(event.payload(), b"something");

        cancel.cancel();
    }

    #[tokio::test]
    async fn cancellation_closes_the_channel() {
        let clipboard = FakeClipboard::new(b"");
        let cancel = CancellationToken::new();
        let mut rx = spawn_watcher(clipboard, ClipKind::Text, POLL, cancel.clone());

        cancel.cancel();
        let closed = timeout(EVENT_WAIT, rx.recv()).await.expect("should close");
        assert!(closed.is_none());
    }
}
