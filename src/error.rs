use thiserror::Error;

use crate::crop::{CropFilter, Resolution};

pub use crate::crop::CropFilterParseError;
pub use crate::preferences::PreferencesError;
pub use crate::session::SessionError;

/// Application-level errors
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Preferences error: {0}")]
    Preferences(#[from] PreferencesError),

    #[error("Session error: {0}")]
    Session(#[from] SessionError),

    #[error("Invalid crop filter: {0}")]
    Filter(#[from] CropFilterParseError),

    #[error("{0} has an empty region")]
    EmptyRegion(CropFilter),

    #[error("{filter} extends outside a {}x{} frame", .frame.width, .frame.height)]
    OutsideFrame {
        filter: CropFilter,
        frame: Resolution,
    },
}

/// Embedded configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse config.toml: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid log level: {0:?}")]
    InvalidLogLevel(String),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}
