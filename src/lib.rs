//! Drag-to-select crop interaction for video preview panes.
//!
//! The crate keeps the selection state, describes the overlay and the crop
//! button as view models, and turns the drawn rectangle into an encoder crop
//! filter (`crop=<width>:<height>:<x>:<y>`). Painting and input capture are
//! left to the host UI.

#![deny(clippy::all)]

pub mod config;
pub mod crop;
pub mod crop_button;
pub mod error;
pub mod i18n;
pub mod overlay;
pub mod pane;
pub mod preferences;
pub mod session;
pub mod theme;

pub use crop::{CropFilter, CropState, CropTracker, PreviewSurface, Rect, Resolution};
pub use error::*;
pub use pane::{PaneAppearance, PreviewPane};
