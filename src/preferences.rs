//! User preferences storage
//!
//! Handles saving and loading user preferences to a JSON file
//! in the application config directory.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{error, info, warn};

use crate::i18n::{self, DEFAULT_LANGUAGE};

/// Default overlay dimming opacity (30%)
pub const DEFAULT_OVERLAY_DIM_OPACITY: f64 = 0.3;

/// Highest dimming opacity; the video must stay visible under the overlay
pub const MAX_OVERLAY_DIM_OPACITY: f64 = 0.9;

/// Default dark mode setting (dark)
const DEFAULT_IS_DARK_MODE: bool = true;

/// User preferences
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct Preferences {
    /// UI language code (e.g., "en", "no", "da", "fi", "de")
    /// Defaults to "en" (English) if not set
    pub language_code: Option<String>,
    /// Background mode (true = dark, false = light, defaults to true)
    pub is_dark_mode: Option<bool>,
    /// Opacity of the overlay dimming layer (0.0 to 0.9, defaults to 0.3)
    pub overlay_dim_opacity: Option<f64>,
}

impl Preferences {
    pub fn language_code(&self) -> &str {
        self.language_code.as_deref().unwrap_or(DEFAULT_LANGUAGE)
    }

    pub fn is_dark_mode(&self) -> bool {
        self.is_dark_mode.unwrap_or(DEFAULT_IS_DARK_MODE)
    }

    pub fn overlay_dim_opacity(&self) -> f64 {
        self.overlay_dim_opacity
            .unwrap_or(DEFAULT_OVERLAY_DIM_OPACITY)
            .clamp(0.0, MAX_OVERLAY_DIM_OPACITY)
    }
}

/// Get the preferences file path
pub fn preferences_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("framecrop").join("preferences.json"))
}

/// Load preferences from disk
///
/// Returns default preferences if the file doesn't exist or can't be read
pub fn load_preferences() -> Preferences {
    match preferences_path() {
        Some(path) => load_preferences_from(&path),
        None => Preferences::default(),
    }
}

/// Load preferences from a specific file
pub fn load_preferences_from(path: &Path) -> Preferences {
    if !path.exists() {
        return Preferences::default();
    }

    match fs::read_to_string(path) {
        Ok(contents) => match serde_json::from_str(&contents) {
            Ok(prefs) => prefs,
            Err(e) => {
                error!("Failed to parse preferences: {}", e);
                Preferences::default()
            }
        },
        Err(e) => {
            error!("Failed to read preferences file: {}", e);
            Preferences::default()
        }
    }
}

/// Save preferences to a specific file
pub fn save_preferences_to(prefs: &Preferences, path: &Path) -> Result<(), PreferencesError> {
    // Ensure parent directory exists
    if let Some(parent) = path.parent() {
        if !parent.exists() {
            fs::create_dir_all(parent)?;
            info!("Created preferences directory: {:?}", parent);
        }
    }

    let json = serde_json::to_string_pretty(prefs)?;
    fs::write(path, json)?;
    info!("Saved preferences to: {:?}", path);

    Ok(())
}

/// Changes requested for the stored preferences; `None` leaves a field as is
#[derive(Debug, Default, Clone, PartialEq)]
pub struct PreferencesUpdate {
    pub language_code: Option<String>,
    pub is_dark_mode: Option<bool>,
    pub overlay_dim_opacity: Option<f64>,
}

impl PreferencesUpdate {
    pub fn is_empty(&self) -> bool {
        self.language_code.is_none()
            && self.is_dark_mode.is_none()
            && self.overlay_dim_opacity.is_none()
    }

    /// Apply the requested changes to `prefs`
    pub fn apply_to(&self, prefs: &mut Preferences) {
        if let Some(code) = &self.language_code {
            if !i18n::is_supported(code) {
                warn!(
                    "Language {:?} has no translation (supported: {}), English will be used",
                    code,
                    i18n::supported_languages().join(", ")
                );
            }
            prefs.language_code = Some(code.clone());
        }
        if let Some(is_dark) = self.is_dark_mode {
            prefs.is_dark_mode = Some(is_dark);
        }
        if let Some(value) = self.overlay_dim_opacity {
            prefs.overlay_dim_opacity = Some(value.clamp(0.0, MAX_OVERLAY_DIM_OPACITY));
        }
    }
}

/// Apply `update` to the user's preferences file and return the result
pub fn update_preferences(update: &PreferencesUpdate) -> Result<Preferences, PreferencesError> {
    let path = preferences_path().ok_or(PreferencesError::NoConfigDir)?;
    update_preferences_at(&path, update)
}

/// Apply `update` to the preferences stored at `path`
pub fn update_preferences_at(
    path: &Path,
    update: &PreferencesUpdate,
) -> Result<Preferences, PreferencesError> {
    let mut prefs = load_preferences_from(path);
    if update.is_empty() {
        return Ok(prefs);
    }
    update.apply_to(&mut prefs);
    save_preferences_to(&prefs, path)?;
    Ok(prefs)
}

/// Preferences errors
#[derive(Debug, thiserror::Error)]
pub enum PreferencesError {
    #[error("Could not find config directory")]
    NoConfigDir,

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_file(name: &str) -> PathBuf {
        std::env::temp_dir()
            .join(format!("framecrop-prefs-{}-{}", std::process::id(), name))
            .join("preferences.json")
    }

    #[test]
    fn test_default_preferences() {
        let prefs = Preferences::default();
        assert!(prefs.language_code.is_none());
        assert!(prefs.is_dark_mode.is_none());
        assert!(prefs.overlay_dim_opacity.is_none());

        assert_eq!(prefs.language_code(), "en");
        assert!(prefs.is_dark_mode());
        assert_eq!(prefs.overlay_dim_opacity(), DEFAULT_OVERLAY_DIM_OPACITY);
    }

    #[test]
    fn test_dim_opacity_is_clamped() {
        let prefs = Preferences {
            overlay_dim_opacity: Some(1.5),
            ..Preferences::default()
        };
        assert_eq!(prefs.overlay_dim_opacity(), MAX_OVERLAY_DIM_OPACITY);

        let prefs = Preferences {
            overlay_dim_opacity: Some(-0.2),
            ..Preferences::default()
        };
        assert_eq!(prefs.overlay_dim_opacity(), 0.0);
    }

    #[test]
    fn test_preferences_path() {
        if let Some(path) = preferences_path() {
            assert!(path.ends_with("framecrop/preferences.json"));
        }
    }

    #[test]
    fn test_save_and_load() {
        let path = scratch_file("roundtrip");
        let prefs = Preferences {
            language_code: Some("fi".to_string()),
            is_dark_mode: Some(false),
            overlay_dim_opacity: Some(0.5),
        };

        save_preferences_to(&prefs, &path).unwrap();
        assert_eq!(load_preferences_from(&path), prefs);

        fs::remove_dir_all(path.parent().unwrap()).ok();
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let path = scratch_file("missing");
        assert_eq!(load_preferences_from(&path), Preferences::default());
    }

    #[test]
    fn test_corrupt_file_gives_defaults() {
        let path = scratch_file("corrupt");
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "{ not json").unwrap();

        assert_eq!(load_preferences_from(&path), Preferences::default());

        fs::remove_dir_all(path.parent().unwrap()).ok();
    }

    #[test]
    fn test_update_changes_only_requested_fields() {
        let path = scratch_file("update");
        let stored = Preferences {
            language_code: Some("da".to_string()),
            is_dark_mode: Some(true),
            overlay_dim_opacity: Some(0.4),
        };
        save_preferences_to(&stored, &path).unwrap();

        let update = PreferencesUpdate {
            is_dark_mode: Some(false),
            ..PreferencesUpdate::default()
        };
        let prefs = update_preferences_at(&path, &update).unwrap();

        assert_eq!(prefs.language_code(), "da");
        assert!(!prefs.is_dark_mode());
        assert_eq!(prefs.overlay_dim_opacity(), 0.4);
        assert_eq!(load_preferences_from(&path), prefs);

        fs::remove_dir_all(path.parent().unwrap()).ok();
    }

    #[test]
    fn test_update_clamps_dim_opacity() {
        let path = scratch_file("update-clamp");
        let update = PreferencesUpdate {
            language_code: Some("de".to_string()),
            overlay_dim_opacity: Some(2.0),
            ..PreferencesUpdate::default()
        };
        update_preferences_at(&path, &update).unwrap();

        let saved = load_preferences_from(&path);
        assert_eq!(saved.language_code(), "de");
        assert_eq!(saved.overlay_dim_opacity, Some(MAX_OVERLAY_DIM_OPACITY));

        fs::remove_dir_all(path.parent().unwrap()).ok();
    }

    #[test]
    fn test_empty_update_does_not_write() {
        let path = scratch_file("update-empty");
        let prefs = update_preferences_at(&path, &PreferencesUpdate::default()).unwrap();

        assert_eq!(prefs, Preferences::default());
        assert!(!path.exists());
    }
}
