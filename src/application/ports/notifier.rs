//! Change notifier port interface

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::clip::ClipboardEvent;

/// Notification delivery errors.
/// Both variants are fatal to the daemon; there is no retry.
#[derive(Debug, Clone, Error)]
pub enum NotifyError {
    #[error("Failed to reach controller at {address}: {message}")]
    DialFailed { address: String, message: String },

    #[error("Failed to deliver notification: {0}")]
    SendFailed(String),
}

/// Port for delivering clipboard change notifications to the controller
#[async_trait]
pub trait ChangeNotifier: Send + Sync {
    /// Deliver one clipboard event. Each event maps to exactly one
    /// delivery; no batching or coalescing.
    async fn notify(&self, event: &ClipboardEvent) -> Result<(), NotifyError>;
}

/// Blanket implementation for boxed notifier types
#[async_trait]
impl ChangeNotifier for Box<dyn ChangeNotifier> {
    async fn notify(&self, event: &ClipboardEvent) -> Result<(), NotifyError> {
        self.as_ref().notify(event).await
    }
}
