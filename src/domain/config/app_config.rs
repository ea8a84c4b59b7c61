//! Application configuration value object

use serde::{Deserialize, Serialize};

/// Default TCP port the controller listens on
pub const DEFAULT_PORT: u16 = 19559;

/// Default clipboard poll interval in milliseconds
pub const DEFAULT_POLL_INTERVAL_MS: u64 = 200;

/// Application configuration.
/// All fields are optional to support partial configs and merging.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Controller TCP port on localhost
    pub port: Option<u16>,
    /// Clipboard poll interval in milliseconds
    pub poll_interval_ms: Option<u64>,
    /// Image-write tool preference (auto, native, xclip, powershell)
    pub image_tool: Option<String>,
}

impl AppConfig {
    /// Create config with default values
    pub fn defaults() -> Self {
        Self {
            port: Some(DEFAULT_PORT),
            poll_interval_ms: Some(DEFAULT_POLL_INTERVAL_MS),
            image_tool: Some("auto".to_string()),
        }
    }

    /// Create an empty config (all None)
    pub fn empty() -> Self {
        Self::default()
    }

    /// Merge this config with another, where other takes precedence.
    /// Only non-None values from other will override this.
    pub fn merge(self, other: Self) -> Self {
        Self {
            port: other.port.or(self.port),
            poll_interval_ms: other.poll_interval_ms.or(self.poll_interval_ms),
            image_tool: other.image_tool.or(self.image_tool),
        }
    }

    /// Get the port, or the default if not set
    pub fn port_or_default(&self) -> u16 {
        self.port.unwrap_or(DEFAULT_PORT)
    }

    /// Get the poll interval, or the default if not set
    pub fn poll_interval_ms_or_default(&self) -> u64 {
        self.poll_interval_ms.unwrap_or(DEFAULT_POLL_INTERVAL_MS)
    }

    /// Get the image tool preference, or "auto" if not set
    pub fn image_tool_or_default(&self) -> &str {
        self.image_tool.as_deref().unwrap_or("auto")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_fill_every_field() {
        let config = AppConfig::defaults();
        assert_eq!(config.port, Some(DEFAULT_PORT));
        assert_eq!(config.poll_interval_ms, Some(DEFAULT_POLL_INTERVAL_MS));
        assert_eq!(config.image_tool.as_deref(), Some("auto"));
    }

    #[test]
    fn empty_has_no_values() {
        let config = AppConfig::empty();
        assert!(config.port.is_none());
        assert!(config.poll_interval_ms.is_none());
        assert!(config.image_tool.is_none());
    }

    #[test]
    fn merge_prefers_other() {
        let base = AppConfig::defaults();
        let override_config = AppConfig {
            port: Some(8090),
            ..Default::default()
        };

        let merged = base.merge(override_config);
        assert_eq!(merged.port, Some(8090));
        assert_eq!(merged.poll_interval_ms, Some(DEFAULT_POLL_INTERVAL_MS));
    }

    #[test]
    fn merge_keeps_base_when_other_is_none() {
        let base = AppConfig {
            port: Some(9000),
            poll_interval_ms: Some(50),
            image_tool: Some("xclip".to_string()),
        };

        let merged = base.clone().merge(AppConfig::empty());
        assert_eq!(merged.port, Some(9000));
        assert_eq!(merged.poll_interval_ms, Some(50));
        assert_eq!(merged.image_tool.as_deref(), Some("xclip"));
    }

    #[test]
    fn accessors_fall_back_to_defaults() {
        let config = AppConfig::empty();
        assert_eq!(config.port_or_default(), 19559);
        assert_eq!(config.poll_interval_ms_or_default(), 200);
        assert_eq!(config.image_tool_or_default(), "auto");
    }

    #[test]
    fn parses_from_toml() {
        let config: AppConfig = toml::from_str("port = 8090\npoll_interval_ms = 100\n").unwrap();
        assert_eq!(config.port, Some(8090));
        assert_eq!(config.poll_interval_ms, Some(100));
        assert!(config.image_tool.is_none());
    }
}
