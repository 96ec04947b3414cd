//! Colors shared by the overlay and the crop button.

use serde::Serialize;
use std::fmt;

/// 8-bit RGB color with a fractional alpha
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Color {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
    pub alpha: f64,
}

impl Color {
    pub const TRANSPARENT: Color = Color::rgba(0, 0, 0, 0.0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const BLACK: Color = Color::rgb(0, 0, 0);

    /// Selection outline blue
    pub const SELECTION: Color = Color::rgb(0, 0, 255);
    /// Dimension label text
    pub const LABEL_TEXT: Color = Color::rgb(0, 255, 0);
    /// Active crop button fill
    pub const ACCENT: Color = Color::rgb(0, 122, 204);
    /// Active crop button fill under the pointer
    pub const ACCENT_PRESSED: Color = Color::rgb(0, 90, 158);
    /// Icon color when a selection exists but drawing mode is off
    pub const HAS_SELECTION: Color = Color::rgb(0, 255, 0);

    pub const fn rgb(red: u8, green: u8, blue: u8) -> Self {
        Self::rgba(red, green, blue, 1.0)
    }

    pub const fn rgba(red: u8, green: u8, blue: u8, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    pub const fn with_alpha(self, alpha: f64) -> Self {
        Self { alpha, ..self }
    }
}

impl fmt::Display for Color {
    /// CSS `rgba(...)` notation
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "rgba({}, {}, {}, {})",
            self.red, self.green, self.blue, self.alpha
        )
    }
}

/// Light or dark appearance of the host UI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn from_dark_mode(is_dark: bool) -> Self {
        if is_dark {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    /// Foreground for idle controls
    pub fn neutral(self) -> Color {
        match self {
            Theme::Dark => Color::rgb(238, 238, 238),
            Theme::Light => Color::rgb(32, 32, 32),
        }
    }
}
