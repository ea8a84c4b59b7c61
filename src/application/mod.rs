//! Application layer - Use cases and port interfaces
//!
//! Contains the core business operations and trait definitions
//! for external system interactions.

pub mod oneshot;
pub mod ports;
pub mod relay;
pub mod watch;

// Re-export use cases
pub use oneshot::{CommandError, OneShotCommandUseCase};
pub use relay::relay_events;
pub use watch::spawn_watcher;
