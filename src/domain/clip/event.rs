//! Clipboard change event value objects

use std::fmt;

/// One of the two tracked clipboard slots
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClipKind {
    Text,
    Image,
}

impl ClipKind {
    /// Get the wire tag announcing a change to this slot
    pub const fn tag(&self) -> &'static str {
        match self {
            Self::Text => "TEXT_CHANGED",
            Self::Image => "IMAGE_CHANGED",
        }
    }

    /// Resolve a wire tag back to a clip kind
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "TEXT_CHANGED" => Some(Self::Text),
            "IMAGE_CHANGED" => Some(Self::Image),
            _ => None,
        }
    }
}

impl fmt::Display for ClipKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text => write!(f, "text"),
            Self::Image => write!(f, "image"),
        }
    }
}

/// Value object representing one detected clipboard change.
/// Consumed exactly once by the notification transport; never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClipboardEvent {
    kind: ClipKind,
    payload: Vec<u8>,
}

impl ClipboardEvent {
    /// Create an event from the changed slot and its new content
    pub fn new(kind: ClipKind, payload: Vec<u8>) -> Self {
        Self { kind, payload }
    }

    /// Get the changed slot
    pub fn kind(&self) -> ClipKind {
        self.kind
    }

    /// Get the raw payload bytes
    pub fn payload(&self) -> &[u8] {
        &self.payload
    }

    /// Consume and return the raw payload bytes
    pub fn into_payload(self) -> Vec<u8> {
        self.payload
    }

    /// Get the payload size in bytes
    pub fn len(&self) -> usize {
        self.payload.len()
    }

    /// Check if the payload is empty
    pub fn is_empty(&self) -> bool {
        self.payload.is_empty()
    }
}
