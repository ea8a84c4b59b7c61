//! Domain error types

use thiserror::Error;

/// Error when parsing a port argument
#[derive(Debug, Clone, Error)]
#[error("Invalid port: \"{input}\". Expected a TCP port number (1-65535) or one of READ_TEXT, READ_IMAGE, WRITE_TEXT, WRITE_IMAGE")]
pub struct PortParseError {
    pub input: String,
}

/// Error when configuration fails
#[derive(Debug, Clone, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(String),

    #[error("Failed to parse config file: {0}")]
    ParseError(String),
}
