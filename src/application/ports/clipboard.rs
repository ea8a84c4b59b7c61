//! Clipboard port interface

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::clip::ClipKind;

/// Clipboard errors
#[derive(Debug, Clone, Error)]
pub enum ClipboardError {
    #[error("Clipboard unavailable: {0}")]
    Unavailable(String),

    #[error("Failed to read clipboard: {0}")]
    ReadFailed(String),

    #[error("Failed to write clipboard: {0}")]
    WriteFailed(String),
}

/// Port for OS clipboard access
#[async_trait]
pub trait Clipboard: Send + Sync {
    /// Verify the OS clipboard subsystem can be attached to.
    /// Called once at startup; failure aborts before any watching begins.
    async fn probe(&self) -> Result<(), ClipboardError>;

    /// Read the current content of one clipboard slot.
    ///
    /// An empty or absent slot reads as empty bytes, not an error.
    /// Image content is PNG-encoded bytes.
    async fn read(&self, kind: ClipKind) -> Result<Vec<u8>, ClipboardError>;

    /// Replace the content of one clipboard slot.
    ///
    /// Text payloads are UTF-8 bytes; image payloads are PNG-encoded bytes.
    async fn write(&self, kind: ClipKind, payload: &[u8]) -> Result<(), ClipboardError>;
}

/// Blanket implementation for boxed clipboard types
#[async_trait]
impl Clipboard for Box<dyn Clipboard> {
    async fn probe(&self) -> Result<(), ClipboardError> {
        self.as_ref().probe().await
    }

    async fn read(&self, kind: ClipKind) -> Result<Vec<u8>, ClipboardError> {
        self.as_ref().read(kind).await
    }

    async fn write(&self, kind: ClipKind, payload: &[u8]) -> Result<(), ClipboardError> {
        self.as_ref().write(kind, payload).await
    }
}
