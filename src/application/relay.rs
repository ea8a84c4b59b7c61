//! Change relay loop
//!
//! Drains clipboard events from a watch channel and hands each one to the
//! notifier, 1:1. Delivery failures are fatal: the loop returns the error
//! and the daemon runner tears everything down.

use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::debug;

use crate::domain::clip::ClipboardEvent;

use super::ports::{ChangeNotifier, NotifyError};

/// Relay events until the channel closes, the token is cancelled, or a
/// delivery fails.
pub async fn relay_events<N: ChangeNotifier>(
    mut events: mpsc::Receiver<ClipboardEvent>,
    notifier: N,
    cancel: CancellationToken,
) -> Result<(), NotifyError> {
    loop {
        let event = tokio::select! {
            _ = cancel.cancelled() => return Ok(()),
            maybe = events.recv() => match maybe {
                Some(event) => event,
                None => return Ok(()),
            },
        };

        debug!(slot = %event.kind(), bytes = event.len(), "relaying clipboard change");
        notifier.notify(&event).await?;
    }
}
