//! Payload codec
//!
//! Clipboard payloads travel over a line/stream-oriented transport, so both
//! text and binary image content are base64-encoded before hitting the wire.
//! The encoded form contains no newline or NUL bytes.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use thiserror::Error;

/// Error when decoding a base64 payload
#[derive(Debug, Clone, Error)]
#[error("Invalid base64 payload: {0}")]
pub struct CodecError(String);

/// Encode raw payload bytes into their transport-safe base64 form
pub fn encode(payload: &[u8]) -> String {
    STANDARD.encode(payload)
}

/// Decode a base64 payload back into raw bytes.
/// Malformed input is an explicit error, never empty data.
pub fn decode(encoded: &str) -> Result<Vec<u8>, CodecError> {
    STANDARD
        .decode(encoded)
        .map_err(|e| CodecError(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trip_identity() {
        let payload = b"the quick brown fox".to_vec();
        assert_eq!(decode(&encode(&payload)).unwrap(), payload);
    }

    #[test]
    fn round_trip_empty() {
        assert_eq!(encode(&[]), "");
        assert_eq!(decode("").unwrap(), Vec::<u8>::new());
    }

    #[test]
    fn round_trip_binary() {
        let payload: Vec<u8> = (0..=255).collect();
        assert_eq!(decode(&encode(&payload)).unwrap(), payload);
    }

    #[test]
    fn known_vector() {
        assert_eq!(encode(b"hello"), "aGVsbG8=");
    }

    #[test]
    fn encoded_form_has_no_control_characters() {
        let payload = vec![b'\n', b'\0', 0xff, b'\r'];
        let encoded = encode(&payload);
        assert!(!encoded.contains('\n'));
        assert!(!encoded.contains('\0'));
    }

    #[test]
    fn malformed_input_is_an_error() {
        assert!(decode("not*valid*base64").is_err());
        assert!(decode("aGVsbG8").is_err()); // bad padding
    }
}
