//! Xclip image writer for X11 setups
//!
//! xclip takes ownership of the selection in a forked background process,
//! so the image survives this process exiting. The PNG is staged through a
//! temporary directory scoped to the invocation; the directory is removed
//! on every exit path when the guard drops.

use std::process::Stdio;

use async_trait::async_trait;
use tokio::process::Command;

use crate::application::ports::{ImageWriteError, ImageWriter};

/// Image writer invoking the xclip utility
pub struct XclipImageWriter;

impl XclipImageWriter {
    /// Create a new xclip image writer
    pub fn new() -> Self {
        Self
    }
}

impl Default for XclipImageWriter {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ImageWriter for XclipImageWriter {
    async fn write_image(&self, png: &[u8]) -> Result<(), ImageWriteError> {
        let staging = tempfile::Builder::new()
            .prefix("clip-relay-img-")
            .tempdir()
            .map_err(|e| ImageWriteError::StageFailed(e.to_string()))?;

        let path = staging.path().join("clipboard.png");
        tokio::fs::write(&path, png)
            .await
            .map_err(|e| ImageWriteError::StageFailed(e.to_string()))?;

        let output = Command::new("xclip")
            .args(["-selection", "clipboard", "-t", "image/png", "-i"])
            .arg(&path)
            .stdin(Stdio::null())
            .output()
            .await
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    ImageWriteError::ToolNotFound("xclip".to_string())
                } else {
                    ImageWriteError::WriteFailed(e.to_string())
                }
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(ImageWriteError::WriteFailed(format!(
                "xclip exited with status {}: {}",
                output.status,
                stderr.trim()
            )));
        }

        Ok(())
    }
}
