//! Look of the crop button, derived from its props.

use serde::Serialize;

use super::CropButtonProps;
use crate::i18n::{self, Catalog};
use crate::theme::{Color, Theme};

const BUTTON_SIZE: f64 = 40.0;
const CORNER_RADIUS: f64 = 4.0;
const ICON_SIZE: f64 = 20.0;
const POINTER_OVER_ALPHA: f64 = 0.1;

/// Everything the host needs to draw the crop button
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CropButtonView {
    pub width: f64,
    pub height: f64,
    pub corner_radius: f64,
    pub icon_size: f64,
    pub background: Color,
    pub foreground: Color,
    pub tooltip: String,
}

pub(super) fn view(props: &CropButtonProps, theme: Theme, catalog: &Catalog) -> CropButtonView {
    let background = match (props.is_active, props.is_pointer_over) {
        (true, true) => Color::ACCENT_PRESSED,
        (true, false) => Color::ACCENT,
        (false, true) => Color::BLACK.with_alpha(POINTER_OVER_ALPHA),
        (false, false) => Color::TRANSPARENT,
    };

    let foreground = if props.is_active {
        Color::WHITE
    } else if props.has_crop {
        Color::HAS_SELECTION
    } else {
        theme.neutral()
    };

    let tooltip = if props.clears_on_click() {
        i18n::CLEAR_CROP
    } else {
        i18n::TOGGLE_CROP_MODE
    };

    CropButtonView {
        width: BUTTON_SIZE,
        height: BUTTON_SIZE,
        corner_radius: CORNER_RADIUS,
        icon_size: ICON_SIZE,
        background,
        foreground,
        tooltip: catalog.t(tooltip).to_string(),
    }
}
