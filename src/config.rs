//! Embedded application configuration
//!
//! Defaults ship inside the binary as `config.toml`.

use serde::Deserialize;
use std::str::FromStr;

use crate::error::ConfigError;

const CONFIG_TOML: &str = include_str!("../config.toml");

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub logging: LoggingConfig,
    pub overlay: OverlayConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    level: String,
}

impl LoggingConfig {
    /// Maximum tracing level
    pub fn level(&self) -> Result<tracing::Level, ConfigError> {
        tracing::Level::from_str(&self.level)
            .map_err(|_| ConfigError::InvalidLogLevel(self.level.clone()))
    }
}

/// Geometry of the overlay decorations, in display pixels
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct OverlayConfig {
    pub z_index: i32,
    pub border_width: f64,
    pub label_offset_x: f64,
    pub label_offset_y: f64,
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            z_index: 1000,
            border_width: 2.0,
            label_offset_x: 5.0,
            label_offset_y: -25.0,
        }
    }
}

/// Load configuration from the embedded config.toml
pub fn load_config() -> Result<Config, ConfigError> {
    parse_config(CONFIG_TOML)
}

fn parse_config(source: &str) -> Result<Config, ConfigError> {
    let config: Config = toml::from_str(source)?;
    if config.overlay.border_width < 0.0 {
        return Err(ConfigError::Invalid(format!(
            "overlay.border_width must not be negative (got {})",
            config.overlay.border_width
        )));
    }
    Ok(config)
}
