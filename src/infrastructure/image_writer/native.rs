//! Native image writer using the clipboard port directly

use async_trait::async_trait;

use crate::application::ports::{Clipboard, ImageWriteError, ImageWriter};
use crate::domain::clip::ClipKind;

/// Image writer that hands PNG bytes straight to the OS clipboard
pub struct NativeImageWriter {
    clipboard: Box<dyn Clipboard>,
}

impl NativeImageWriter {
    /// Create a new native image writer over a clipboard adapter
    pub fn new(clipboard: Box<dyn Clipboard>) -> Self {
        Self { clipboard }
    }
}

#[async_trait]
impl ImageWriter for NativeImageWriter {
    async fn write_image(&self, png: &[u8]) -> Result<(), ImageWriteError> {
        self.clipboard
            .write(ClipKind::Image, png)
            .await
            .map_err(|e| ImageWriteError::WriteFailed(e.to_string()))
    }
}
