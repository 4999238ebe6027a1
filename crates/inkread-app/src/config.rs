//! Application configuration.

use inkread_core::HISTORY_CAPACITY;
use inkread_core::stroke::DEFAULT_BRUSH_WIDTH;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Application configuration.
///
/// Every field has a default, so a config file only needs the keys it changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Base URL of the recognition service.
    pub api_url: String,
    pub canvas_width: u32,
    pub canvas_height: u32,
    pub output_width: u32,
    pub output_height: u32,
    /// Initial brush color (hex).
    pub brush_color: String,
    pub brush_width: u32,
    pub history_capacity: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_url: "http://127.0.0.1:5000/api".to_string(),
            canvas_width: 800,
            canvas_height: 600,
            output_width: 800,
            output_height: 600,
            brush_color: "#000000".to_string(),
            brush_width: DEFAULT_BRUSH_WIDTH,
            history_capacity: HISTORY_CAPACITY,
        }
    }
}

impl AppConfig {
    /// Parse a TOML config.
    pub fn from_toml(source: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(source)?)
    }

    /// Load a TOML config file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let source = std::fs::read_to_string(path)?;
        let config = Self::from_toml(&source)?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_config_keeps_defaults() {
        let config = AppConfig::from_toml(
            r##"
            api_url = "http://localhost:9000/api"
            brush_color = "#ff0000"
            "##,
        )
        .unwrap();
        assert_eq!(config.api_url, "http://localhost:9000/api");
        assert_eq!(config.brush_color, "#ff0000");
        assert_eq!(config.canvas_width, 800);
        assert_eq!(config.history_capacity, 30);
    }

    #[test]
    fn test_empty_config_is_default() {
        assert_eq!(AppConfig::from_toml("").unwrap(), AppConfig::default());
    }

    #[test]
    fn test_invalid_config() {
        assert!(matches!(
            AppConfig::from_toml("canvas_width = \"wide\""),
            Err(ConfigError::Parse(_))
        ));
    }
}
