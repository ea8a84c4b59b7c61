//! Configuration value objects

mod app_config;

pub use app_config::{AppConfig, DEFAULT_POLL_INTERVAL_MS, DEFAULT_PORT};
