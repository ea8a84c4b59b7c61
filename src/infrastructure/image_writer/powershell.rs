//! PowerShell image writer for Windows
//!
//! Stages the PNG through a temporary file and asks PowerShell to place it
//! on the clipboard via System.Windows.Forms. The staging directory is
//! removed on every exit path when the guard drops.

use std::process::Stdio;

use async_trait::async_trait;
use tokio::process::Command;

use crate::application::ports::{ImageWriteError, ImageWriter};

/// Clipboard access through Windows Forms requires an STA thread, hence
/// the -STA flag. The staged file path arrives as $args[0].
const SET_IMAGE_SCRIPT: &str = "Add-Type -AssemblyName System.Windows.Forms; \
Add-Type -AssemblyName System.Drawing; \
$img = [System.Drawing.Image]::FromFile($args[0]); \
[System.Windows.Forms.Clipboard]::SetImage($img); \
$img.Dispose()";

/// Image writer invoking PowerShell
pub struct PowershellImageWriter;

impl PowershellImageWriter {
    /// Create a new PowerShell image writer
    pub fn new() -> Self {
        Self
    }
}

impl Default for PowershellImageWriter {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ImageWriter for PowershellImageWriter {
    async fn write_image(&self, png: &[u8]) -> Result<(), ImageWriteError> {
        let staging = tempfile::Builder::new()
            .prefix("clip-relay-img-")
            .tempdir()
            .map_err(|e| ImageWriteError::StageFailed(e.to_string()))?;

        let path = staging.path().join("clipboard.png");
        tokio::fs::write(&path, png)
            .await
            .map_err(|e| ImageWriteError::StageFailed(e.to_string()))?;

        let output = Command::new("powershell")
            .args(["-NoProfile", "-STA", "-Command", SET_IMAGE_SCRIPT])
            .arg(&path)
            .stdin(Stdio::null())
            .output()
            .await
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    ImageWriteError::ToolNotFound("powershell".to_string())
                } else {
                    ImageWriteError::WriteFailed(e.to_string())
                }
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(ImageWriteError::WriteFailed(format!(
                "powershell exited with status {}: {}",
                output.status,
                stderr.trim()
            )));
        }

        Ok(())
    }
}
