//! One-shot command use case
//!
//! Performs a single clipboard read or write and returns, bypassing the
//! watcher and transport entirely. The four commands mirror the process
//! invocation contract: READ_TEXT, READ_IMAGE, WRITE_TEXT, WRITE_IMAGE.

use std::time::Duration;

use thiserror::Error;

use crate::domain::clip::ClipKind;
use crate::domain::codec::{self, CodecError};

use super::ports::{Clipboard, ClipboardError, ImageWriteError, ImageWriter};

/// Pause after a clipboard write so the OS can settle the new content
/// before the process exits.
const WRITE_SETTLE_DELAY: Duration = Duration::from_millis(100);

/// Errors from one-shot commands
#[derive(Debug, Error)]
pub enum CommandError {
    #[error(transparent)]
    Clipboard(#[from] ClipboardError),

    #[error(transparent)]
    ImageWrite(#[from] ImageWriteError),

    #[error(transparent)]
    Payload(#[from] CodecError),
}

/// One-shot command use case
pub struct OneShotCommandUseCase<C, W>
where
    C: Clipboard,
    W: ImageWriter,
{
    clipboard: C,
    image_writer: W,
}

impl<C, W> OneShotCommandUseCase<C, W>
where
    C: Clipboard,
    W: ImageWriter,
{
    /// Create a new one-shot use case instance
    pub fn new(clipboard: C, image_writer: W) -> Self {
        Self {
            clipboard,
            image_writer,
        }
    }

    /// Read the text clipboard and return its base64 encoding.
    /// An empty slot encodes to the empty string.
    pub async fn read_text(&self) -> Result<String, CommandError> {
        let bytes = self.clipboard.read(ClipKind::Text).await?;
        Ok(codec::encode(&bytes))
    }

    /// Read the image clipboard (PNG bytes) and return its base64 encoding
    pub async fn read_image(&self) -> Result<String, CommandError> {
        let bytes = self.clipboard.read(ClipKind::Image).await?;
        Ok(codec::encode(&bytes))
    }

    /// Write one line of input verbatim as the new text clipboard content.
    ///
    /// The trailing newline, if present, is part of the content. This is
    /// pinned behavior: controllers strip it themselves when unwanted.
    pub async fn write_text(&self, line: &str) -> Result<(), CommandError> {
        self.clipboard.write(ClipKind::Text, line.as_bytes()).await?;
        tokio::time::sleep(WRITE_SETTLE_DELAY).await;
        Ok(())
    }

    /// Decode one base64 line of input and write it as the new image
    /// clipboard content through the platform image writer.
    ///
    /// Malformed base64 is an explicit error; the command never proceeds
    /// with empty data. Helper failures propagate to the exit status.
    pub async fn write_image(&self, line: &str) -> Result<(), CommandError> {
        let png = codec::decode(line.trim_end())?;
        self.image_writer.write_image(&png).await?;
        tokio::time::sleep(WRITE_SETTLE_DELAY).await;
        Ok(())
    }
}
