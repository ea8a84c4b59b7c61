//! Cross-platform clipboard adapter using arboard
//!
//! Works on Windows, macOS, and Linux (X11/Wayland). Image content crosses
//! the port boundary as PNG bytes; arboard exposes raw RGBA frames, so this
//! adapter converts in both directions.

use std::borrow::Cow;
use std::io::Cursor;

use async_trait::async_trait;

use crate::application::ports::{Clipboard, ClipboardError};
use crate::domain::clip::ClipKind;

/// Cross-platform clipboard adapter using arboard
pub struct ArboardClipboard;

impl ArboardClipboard {
    /// Create a new arboard clipboard adapter
    pub fn new() -> Self {
        Self
    }
}

impl Default for ArboardClipboard {
    fn default() -> Self {
        Self::new()
    }
}

fn open() -> Result<arboard::Clipboard, ClipboardError> {
    arboard::Clipboard::new().map_err(|e| ClipboardError::Unavailable(e.to_string()))
}

/// Encode an arboard RGBA frame into PNG bytes
fn encode_png(frame: &arboard::ImageData<'_>) -> Result<Vec<u8>, ClipboardError> {
    let rgba = image::RgbaImage::from_raw(
        frame.width as u32,
        frame.height as u32,
        frame.bytes.to_vec(),
    )
    .ok_or_else(|| {
        ClipboardError::ReadFailed("clipboard image has inconsistent dimensions".to_string())
    })?;

    let mut png = Vec::new();
    image::DynamicImage::ImageRgba8(rgba)
        .write_to(&mut Cursor::new(&mut png), image::ImageFormat::Png)
        .map_err(|e| ClipboardError::ReadFailed(e.to_string()))?;

    Ok(png)
}

/// Decode PNG bytes into an arboard RGBA frame
fn decode_png(png: &[u8]) -> Result<arboard::ImageData<'static>, ClipboardError> {
    let rgba = image::load_from_memory(png)
        .map_err(|e| ClipboardError::WriteFailed(e.to_string()))?
        .into_rgba8();

    Ok(arboard::ImageData {
        width: rgba.width() as usize,
        height: rgba.height() as usize,
        bytes: Cow::Owned(rgba.into_raw()),
    })
}

fn read_blocking(kind: ClipKind) -> Result<Vec<u8>, ClipboardError> {
    let mut clipboard = open()?;

    match kind {
        ClipKind::Text => match clipboard.get_text() {
            Ok(text) => Ok(text.into_bytes()),
            // An empty slot reads as empty bytes, not an error.
            Err(arboard::Error::ContentNotAvailable) => Ok(Vec::new()),
            Err(e) => Err(ClipboardError::ReadFailed(e.to_string())),
        },
        ClipKind::Image => match clipboard.get_image() {
            Ok(frame) => encode_png(&frame),
            Err(arboard::Error::ContentNotAvailable) => Ok(Vec::new()),
            Err(e) => Err(ClipboardError::ReadFailed(e.to_string())),
        },
    }
}

fn write_blocking(kind: ClipKind, payload: &[u8]) -> Result<(), ClipboardError> {
    let mut clipboard = open()?;

    match kind {
        ClipKind::Text => {
            let text = String::from_utf8_lossy(payload).into_owned();
            clipboard
                .set_text(text)
                .map_err(|e| ClipboardError::WriteFailed(e.to_string()))
        }
        ClipKind::Image => {
            let frame = decode_png(payload)?;
            clipboard
                .set_image(frame)
                .map_err(|e| ClipboardError::WriteFailed(e.to_string()))
        }
    }
}

#[async_trait]
impl Clipboard for ArboardClipboard {
    async fn probe(&self) -> Result<(), ClipboardError> {
        // arboard operations are blocking, so run in spawn_blocking
        tokio::task::spawn_blocking(|| open().map(drop))
            .await
            .map_err(|e| ClipboardError::Unavailable(format!("Task join error: {}", e)))?
    }

    async fn read(&self, kind: ClipKind) -> Result<Vec<u8>, ClipboardError> {
        tokio::task::spawn_blocking(move || read_blocking(kind))
            .await
            .map_err(|e| ClipboardError::ReadFailed(format!("Task join error: {}", e)))?
    }

    async fn write(&self, kind: ClipKind, payload: &[u8]) -> Result<(), ClipboardError> {
        let payload = payload.to_vec();
        tokio::task::spawn_blocking(move || write_blocking(kind, &payload))
            .await
            .map_err(|e| ClipboardError::WriteFailed(format!("Task join error: {}", e)))?
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clipboard_creates_successfully() {
        let _clipboard = ArboardClipboard::new();
    }

    #[test]
    fn png_round_trip_preserves_pixels() {
        let rgba: Vec<u8> = vec![
            255, 0, 0, 255, // red
            0, 255, 0, 255, // green
            0, 0, 255, 255, // blue
            255, 255, 255, 255, // white
        ];
        let frame = arboard::ImageData {
            width: 2,
            height: 2,
            bytes: Cow::Owned(rgba.clone()),
        };

        let png = encode_png(&frame).unwrap();
        let decoded = decode_png(&png).unwrap();

        assert_eq!(decoded.width, 2);
        assert_eq!(decoded.height, 2);
        assert_eq!(decoded.bytes.as_ref(), rgba.as_slice());
    }

    #[test]
    fn decode_rejects_non_png_bytes() {
        assert!(decode_png(b"definitely not a png").is_err());
    }

    #[test]
    fn encode_rejects_inconsistent_dimensions() {
        let frame = arboard::ImageData {
            width: 10,
            height: 10,
            bytes: Cow::Owned(vec![0u8; 4]), // far too short for 10x10
        };
        assert!(encode_png(&frame).is_err());
    }
}
