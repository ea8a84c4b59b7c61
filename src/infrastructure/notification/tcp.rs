//! TCP change notifier
//!
//! Delivers each clipboard change on its own short-lived connection: dial,
//! write the whole `<TAG>:<base64>` message, shut the stream down. The
//! transport has no length framing, so the receiver accumulates bytes
//! until the connection closes and treats that as end-of-message. This
//! supports payloads far larger than a single TCP segment at the cost of
//! one ephemeral socket per change; length-prefixed framing over a
//! persistent connection would be the better design absent the
//! compatibility constraint.

use async_trait::async_trait;
use tokio::io::AsyncWriteExt;
use tokio::net::TcpStream;
use tracing::debug;

use crate::application::ports::{ChangeNotifier, NotifyError};
use crate::domain::clip::{ClipboardEvent, Notification};

/// Change notifier dialing the controller per event
pub struct TcpChangeNotifier {
    address: String,
}

impl TcpChangeNotifier {
    /// Create a notifier targeting the controller address
    pub fn new(address: impl Into<String>) -> Self {
        Self {
            address: address.into(),
        }
    }

    /// Get the controller address
    pub fn address(&self) -> &str {
        &self.address
    }
}

#[async_trait]
impl ChangeNotifier for TcpChangeNotifier {
    async fn notify(&self, event: &ClipboardEvent) -> Result<(), NotifyError> {
        let wire = Notification::from_event(event).to_wire();

        let mut stream = TcpStream::connect(&self.address).await.map_err(|e| {
            NotifyError::DialFailed {
                address: self.address.clone(),
                message: e.to_string(),
            }
        })?;

        stream
            .write_all(wire.as_bytes())
            .await
            .map_err(|e| NotifyError::SendFailed(e.to_string()))?;

        // Closing the connection is the end-of-message marker.
        stream
            .shutdown()
            .await
            .map_err(|e| NotifyError::SendFailed(e.to_string()))?;

        debug!(slot = %event.kind(), wire_bytes = wire.len(), "notification delivered");
        Ok(())
    }
}
