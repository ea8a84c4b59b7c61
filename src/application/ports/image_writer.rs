//! Image writer port interface
//!
//! Writing an image to the clipboard is platform-sensitive: some setups can
//! take PNG bytes directly, others need an external helper staged through a
//! temporary file. The capability is a port so the strategy is selected once
//! at startup and tests can substitute a fake writer.

use async_trait::async_trait;
use thiserror::Error;

/// Image write errors
#[derive(Debug, Clone, Error)]
pub enum ImageWriteError {
    #[error("{0} not found. Please install {0}.")]
    ToolNotFound(String),

    #[error("Failed to stage image for helper: {0}")]
    StageFailed(String),

    #[error("Failed to write image to clipboard: {0}")]
    WriteFailed(String),
}

/// Port for writing image content to the clipboard
#[async_trait]
pub trait ImageWriter: Send + Sync {
    /// Write PNG-encoded bytes as the new image clipboard content.
    ///
    /// Helper failures propagate; the command must never report success
    /// when the clipboard write did not occur.
    async fn write_image(&self, png: &[u8]) -> Result<(), ImageWriteError>;
}

/// Blanket implementation for boxed image writer types
#[async_trait]
impl ImageWriter for Box<dyn ImageWriter> {
    async fn write_image(&self, png: &[u8]) -> Result<(), ImageWriteError> {
        self.as_ref().write_image(png).await
    }
}
