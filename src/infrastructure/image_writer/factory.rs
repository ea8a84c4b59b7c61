//! Image-write tool factory with automatic detection

use std::fmt;
use std::str::FromStr;

#[cfg(target_os = "linux")]
use std::process::Stdio;

#[cfg(target_os = "linux")]
use tokio::process::Command;

use crate::application::ports::{Clipboard, ImageWriteError, ImageWriter};

use super::native::NativeImageWriter;
#[cfg(windows)]
use super::powershell::PowershellImageWriter;
#[cfg(target_os = "linux")]
use super::xclip::XclipImageWriter;

/// Available image-write tools
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageTool {
    /// Direct clipboard write through arboard
    Native,
    /// Linux: xclip utility (X11)
    #[cfg(target_os = "linux")]
    Xclip,
    /// Windows: PowerShell System.Windows.Forms helper
    #[cfg(windows)]
    Powershell,
}

/// User preference for image-write tool selection.
///
/// - All platforms support `Native` and `Auto` (the default).
/// - Linux additionally supports `Xclip`; Windows additionally supports
///   `Powershell`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ImageToolPreference {
    /// Auto-detect the best tool for this platform (default)
    #[default]
    Auto,
    /// Direct clipboard write through arboard
    Native,
    /// Use xclip (Linux only, X11)
    #[cfg(target_os = "linux")]
    Xclip,
    /// Use the PowerShell helper (Windows only)
    #[cfg(windows)]
    Powershell,
}

impl fmt::Display for ImageToolPreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImageToolPreference::Auto => write!(f, "auto"),
            ImageToolPreference::Native => write!(f, "native"),
            #[cfg(target_os = "linux")]
            ImageToolPreference::Xclip => write!(f, "xclip"),
            #[cfg(windows)]
            ImageToolPreference::Powershell => write!(f, "powershell"),
        }
    }
}

/// Error type for parsing an image tool preference
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseImageToolError {
    pub value: String,
    pub valid_options: &'static str,
}

impl fmt::Display for ParseImageToolError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid image tool '{}'. Valid options: {}",
            self.value, self.valid_options
        )
    }
}

impl std::error::Error for ParseImageToolError {}

#[cfg(target_os = "linux")]
const VALID_IMAGE_TOOL_OPTIONS: &'static str = "auto, native, xclip";
#[cfg(windows)]
const VALID_IMAGE_TOOL_OPTIONS: &'static str = "auto, native, powershell";
#[cfg(not(any(target_os = "linux", windows)))]
const VALID_IMAGE_TOOL_OPTIONS: &'static str = "auto, native";

impl FromStr for ImageToolPreference {
    type Err = ParseImageToolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "auto" => Ok(ImageToolPreference::Auto),
            "native" => Ok(ImageToolPreference::Native),
            #[cfg(target_os = "linux")]
            "xclip" => Ok(ImageToolPreference::Xclip),
            #[cfg(windows)]
            "powershell" => Ok(ImageToolPreference::Powershell),
            _ => Err(ParseImageToolError {
                value: s.to_string(),
                valid_options: VALID_IMAGE_TOOL_OPTIONS,
            }),
        }
    }
}

impl fmt::Display for ImageTool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImageTool::Native => write!(f, "native"),
            #[cfg(target_os = "linux")]
            ImageTool::Xclip => write!(f, "xclip"),
            #[cfg(windows)]
            ImageTool::Powershell => write!(f, "powershell"),
        }
    }
}

/// Check if a tool binary is available using `which`
#[cfg(target_os = "linux")]
async fn is_tool_available(tool: &str) -> bool {
    Command::new("which")
        .arg(tool)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .await
        .map(|s| s.success())
        .unwrap_or(false)
}

/// Detect the best image-write tool for this platform.
///
/// On Linux, xclip is preferred when present: it re-owns the selection in
/// a background process, so the image survives a one-shot invocation
/// exiting. Everywhere else (and as the Linux fallback) the native
/// arboard write is used.
pub async fn detect_image_tool() -> ImageTool {
    #[cfg(target_os = "linux")]
    {
        if is_tool_available("xclip").await {
            return ImageTool::Xclip;
        }
        ImageTool::Native
    }

    #[cfg(windows)]
    {
        ImageTool::Powershell
    }

    #[cfg(not(any(target_os = "linux", windows)))]
    {
        ImageTool::Native
    }
}

/// Create an image writer using the specified preference.
///
/// Returns the writer and the selected tool, or an error if an explicitly
/// requested tool is not available.
pub async fn create_image_writer(
    clipboard: Box<dyn Clipboard>,
    preference: ImageToolPreference,
) -> Result<(Box<dyn ImageWriter>, ImageTool), ImageWriteError> {
    match preference {
        ImageToolPreference::Auto => {
            let tool = detect_image_tool().await;
            Ok((create_specific_tool(clipboard, tool), tool))
        }
        ImageToolPreference::Native => Ok((
            Box::new(NativeImageWriter::new(clipboard)) as Box<dyn ImageWriter>,
            ImageTool::Native,
        )),
        #[cfg(target_os = "linux")]
        ImageToolPreference::Xclip => {
            if is_tool_available("xclip").await {
                Ok((
                    Box::new(XclipImageWriter::new()) as Box<dyn ImageWriter>,
                    ImageTool::Xclip,
                ))
            } else {
                Err(ImageWriteError::ToolNotFound("xclip".to_string()))
            }
        }
        #[cfg(windows)]
        ImageToolPreference::Powershell => Ok((
            Box::new(PowershellImageWriter::new()) as Box<dyn ImageWriter>,
            ImageTool::Powershell,
        )),
    }
}

/// Create a specific image-write tool adapter
fn create_specific_tool(clipboard: Box<dyn Clipboard>, tool: ImageTool) -> Box<dyn ImageWriter> {
    match tool {
        ImageTool::Native => Box::new(NativeImageWriter::new(clipboard)),
        #[cfg(target_os = "linux")]
        ImageTool::Xclip => {
            let _ = clipboard;
            Box::new(XclipImageWriter::new())
        }
        #[cfg(windows)]
        ImageTool::Powershell => {
            let _ = clipboard;
            Box::new(PowershellImageWriter::new())
        }
    }
}
