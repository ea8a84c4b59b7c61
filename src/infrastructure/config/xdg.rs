//! XDG config store adapter

use std::path::PathBuf;

use async_trait::async_trait;
use tokio::fs;

use crate::application::ports::ConfigStore;
use crate::domain::config::AppConfig;
use crate::domain::error::ConfigError;

/// XDG-compliant config store
pub struct XdgConfigStore {
    path: PathBuf,
}

impl XdgConfigStore {
    /// Create a new XDG config store with default path
    pub fn new() -> Self {
        let config_dir = dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("~/.config"))
            .join("clip-relay");

        Self {
            path: config_dir.join("config.toml"),
        }
    }

    /// Create with custom path
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Parse TOML content into AppConfig
    fn parse_toml(content: &str) -> Result<AppConfig, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::ParseError(e.to_string()))
    }
}

impl Default for XdgConfigStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ConfigStore for XdgConfigStore {
    async fn load(&self) -> Result<AppConfig, ConfigError> {
        if !self.exists() {
            // Return empty config if file doesn't exist
            return Ok(AppConfig::empty());
        }

        let content = fs::read_to_string(&self.path)
            .await
            .map_err(|e| ConfigError::ReadError(e.to_string()))?;

        Self::parse_toml(&content)
    }

    fn path(&self) -> PathBuf {
        self.path.clone()
    }

    fn exists(&self) -> bool {
        self.path.exists()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_path_is_under_clip_relay() {
        let store = XdgConfigStore::new();
        let path = store.path();
        assert!(path.ends_with("clip-relay/config.toml"));
    }

    #[tokio::test]
    async fn missing_file_loads_as_empty_config() {
        let store = XdgConfigStore::with_path("/nonexistent/clip-relay/config.toml");
        let config = store.load().await.unwrap();
        assert!(config.port.is_none());
    }

    #[tokio::test]
    async fn loads_values_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        tokio::fs::write(&path, "port = 8090\nimage_tool = \"native\"\n")
            .await
            .unwrap();

        let store = XdgConfigStore::with_path(&path);
        let config = store.load().await.unwrap();
        assert_eq!(config.port, Some(8090));
        assert_eq!(config.image_tool.as_deref(), Some("native"));
    }

    #[tokio::test]
    async fn malformed_file_is_a_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        tokio::fs::write(&path, "port = \"not a number").await.unwrap();

        let store = XdgConfigStore::with_path(&path);
        assert!(matches!(
            store.load().await,
            Err(ConfigError::ParseError(_))
        ));
    }
}
