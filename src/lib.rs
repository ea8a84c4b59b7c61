//! ClipRelay - clipboard change relay daemon
//!
//! This crate watches the OS clipboard for text and image changes and
//! relays each change as a tagged, base64-encoded notification to a
//! controller process over local TCP. A one-shot mode performs a single
//! clipboard read or write and exits.
//!
//! # Architecture
//!
//! The crate follows hexagonal (ports & adapters) architecture:
//!
//! - **Domain**: Core value objects (events, notifications, codec) and errors
//! - **Application**: Use cases and port interfaces (traits)
//! - **Infrastructure**: Adapter implementations (arboard, xclip, TCP, etc.)
//! - **CLI**: Command-line interface, control channel, and signal handling

pub mod application;
pub mod cli;
pub mod domain;
pub mod infrastructure;
