//! No-op image writer

use async_trait::async_trait;

use crate::application::ports::{ImageWriteError, ImageWriter};

/// No-op image writer that does nothing
///
/// Used by commands that never write images, so they don't pay for tool
/// detection or fail on a missing helper.
pub struct NoOpImageWriter;

impl NoOpImageWriter {
    /// Create a new no-op image writer
    pub fn new() -> Self {
        Self
    }
}

impl Default for NoOpImageWriter {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ImageWriter for NoOpImageWriter {
    async fn write_image(&self, _png: &[u8]) -> Result<(), ImageWriteError> {
        // Do nothing
        Ok(())
    }
}
