//! Config - Application Configuration

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::constants::{
    APP_TITLE, DEFAULT_WINDOW_HEIGHT, DEFAULT_WINDOW_WIDTH, MIN_WINDOW_HEIGHT, MIN_WINDOW_WIDTH,
};
use crate::error::Result;

/// Main application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AppConfig {
    /// Window configuration
    pub window: WindowConfig,
    /// Layout classification options
    pub layout: LayoutConfig,
    /// Logging options
    pub log: LogConfig,
    /// Optional TOML catalog replacing the builtin products
    pub catalog_file: Option<PathBuf>,
    /// Route opened at startup (e.g. `detail/Product%20B`)
    pub start_route: Option<String>,
}

impl AppConfig {
    /// Parse a TOML configuration
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }
}

/// Main window configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    pub width: f32,
    pub height: f32,
    pub min_width: f32,
    pub min_height: f32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: APP_TITLE.to_string(),
            width: DEFAULT_WINDOW_WIDTH,
            height: DEFAULT_WINDOW_HEIGHT,
            min_width: MIN_WINDOW_WIDTH,
            min_height: MIN_WINDOW_HEIGHT,
        }
    }
}

/// Layout classification configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LayoutConfig {
    /// Minimum viewport width for the split pane (0 = orientation only)
    pub split_min_width: f32,
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Default filter directive when RUST_LOG is unset
    pub level: String,
    /// Whether to also write a rolling log file
    pub file: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_uses_defaults() {
        let config = AppConfig::from_toml_str("").expect("empty config");
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.window.title, APP_TITLE);
        assert_eq!(config.layout.split_min_width, 0.0);
        assert!(config.catalog_file.is_none());
        assert!(config.start_route.is_none());
    }

    #[test]
    fn partial_config_overrides_only_given_fields() {
        let config = AppConfig::from_toml_str(
            r#"
            catalog_file = "/tmp/catalog.toml"
            start_route = "detail/Product%20B"

            [window]
            width = 480.0

            [layout]
            split_min_width = 720.0

            [log]
            level = "debug"
            "#,
        )
        .expect("valid config");

        assert_eq!(config.window.width, 480.0);
        assert_eq!(config.window.height, DEFAULT_WINDOW_HEIGHT);
        assert_eq!(config.layout.split_min_width, 720.0);
        assert_eq!(config.log.level, "debug");
        assert!(config.log.file);
        assert_eq!(config.catalog_file, Some(PathBuf::from("/tmp/catalog.toml")));
        assert_eq!(config.start_route.as_deref(), Some("detail/Product%20B"));
    }

    #[test]
    fn malformed_config_is_an_error() {
        assert!(AppConfig::from_toml_str("[window]\nwidth = \"wide\"").is_err());
    }
}
