//! Infrastructure layer - Adapter implementations
//!
//! Contains concrete implementations of the port interfaces,
//! integrating with the OS clipboard, external helper tools,
//! and the controller's TCP endpoint.

pub mod clipboard;
pub mod config;
pub mod image_writer;
pub mod notification;

// Re-export adapters
pub use clipboard::{create_clipboard, ArboardClipboard};
pub use config::XdgConfigStore;
pub use image_writer::{
    create_image_writer, ImageTool, ImageToolPreference, NativeImageWriter, NoOpImageWriter,
};
pub use notification::TcpChangeNotifier;
