//! Clipboard change value objects and wire serialization

mod event;
mod notification;

pub use event::{ClipKind, ClipboardEvent};
pub use notification::{Notification, NotificationParseError};
