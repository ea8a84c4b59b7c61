//! Wire notification value object
//!
//! A notification is the serialized form of one clipboard event:
//! `<TAG>:<base64>` with no trailing delimiter. The transport closes the
//! connection after the write, so connection close is the end-of-message
//! marker. A persistent connection with length-prefixed framing would be
//! the stronger design, but the one-connection-per-message form is kept
//! for compatibility with existing controllers.

use thiserror::Error;

use super::event::{ClipKind, ClipboardEvent};
use crate::domain::codec::{self, CodecError};

/// Error when parsing a wire notification
#[derive(Debug, Clone, Error)]
pub enum NotificationParseError {
    #[error("Missing ':' separator in notification")]
    MissingSeparator,

    #[error("Unknown notification tag: \"{0}\"")]
    UnknownTag(String),

    #[error("Invalid payload encoding: {0}")]
    InvalidPayload(#[from] CodecError),
}

/// Serialized form of one clipboard change, ready for the wire
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    kind: ClipKind,
    encoded_payload: String,
}

impl Notification {
    /// Serialize a clipboard event. Every event maps to exactly one
    /// notification; the payload is base64-encoded so binary image data
    /// survives the text-oriented transport.
    pub fn from_event(event: &ClipboardEvent) -> Self {
        Self {
            kind: event.kind(),
            encoded_payload: codec::encode(event.payload()),
        }
    }

    /// Get the changed slot this notification reports
    pub fn kind(&self) -> ClipKind {
        self.kind
    }

    /// Get the base64 payload as sent on the wire
    pub fn encoded_payload(&self) -> &str {
        &self.encoded_payload
    }

    /// Render the full wire form: `<TAG>:<base64>`
    pub fn to_wire(&self) -> String {
        format!("{}:{}", self.kind.tag(), self.encoded_payload)
    }

    /// Parse a complete wire message back into a notification.
    /// Used by controller-side consumers and tests.
    pub fn parse(wire: &str) -> Result<Self, NotificationParseError> {
        let (tag, encoded) = wire
            .split_once(':')
            .ok_or(NotificationParseError::MissingSeparator)?;

        let kind = ClipKind::from_tag(tag)
            .ok_or_else(|| NotificationParseError::UnknownTag(tag.to_string()))?;

        // Validate the payload encoding up front so a malformed message
        // fails at parse time, not at first decode.
        codec::decode(encoded)?;

        Ok(Self {
            kind,
            encoded_payload: encoded.to_string(),
        })
    }

    /// Decode the payload back into raw bytes
    pub fn decode_payload(&self) -> Result<Vec<u8>, CodecError> {
        codec::decode(&self.encoded_payload)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_form_is_tag_colon_base64() {
        let event = ClipboardEvent::new(ClipKind::Text, b"hello".to_vec());
        let notification = Notification::from_event(&event);
        assert_eq!(notification.to_wire(), "TEXT_CHANGED:aGVsbG8=");
    }

    #[test]
    fn image_events_use_image_tag() {
        let event = ClipboardEvent::new(ClipKind::Image, vec![0x89, 0x50, 0x4e, 0x47]);
        let notification = Notification::from_event(&event);
        assert!(notification.to_wire().starts_with("IMAGE_CHANGED:"));
    }

    #[test]
    fn empty_payload_serializes_to_bare_tag() {
        let event = ClipboardEvent::new(ClipKind::Text, Vec::new());
        let notification = Notification::from_event(&event);
        assert_eq!(notification.to_wire(), "TEXT_CHANGED:");
    }

    #[test]
    fn parse_round_trips() {
        let event = ClipboardEvent::new(ClipKind::Image, vec![1, 2, 3, 255]);
        let wire = Notification::from_event(&event).to_wire();

        let parsed = Notification::parse(&wire).unwrap();
        assert_eq!(parsed.kind(), ClipKind::Image);
        assert_eq!(parsed.decode_payload().unwrap(), vec![1, 2, 3, 255]);
    }

    #[test]
    fn parse_rejects_missing_separator() {
        let err = Notification::parse("TEXT_CHANGED").unwrap_err();
        assert!(matches!(err, NotificationParseError::MissingSeparator));
    }

    #[test]
    fn parse_rejects_unknown_tag() {
        let err = Notification::parse("FILE_CHANGED:aGVsbG8=").unwrap_err();
        assert!(matches!(err, NotificationParseError::UnknownTag(_)));
    }

    #[test]
    fn parse_rejects_malformed_payload() {
        let err = Notification::parse("TEXT_CHANGED:not*base64*").unwrap_err();
        assert!(matches!(err, NotificationParseError::InvalidPayload(_)));
    }

    #[test]
    fn payload_with_colon_bytes_survives() {
        // Only the first ':' separates tag from payload; base64 output
        // never contains ':' so the split is unambiguous.
        let event = ClipboardEvent::new(ClipKind::Text, b"a:b:c".to_vec());
        let wire = Notification::from_event(&event).to_wire();
        let parsed = Notification::parse(&wire).unwrap();
        assert_eq!(parsed.decode_payload().unwrap(), b"a:b:c".to_vec());
    }
}
