//! Overlay view model: what the host should draw above the video.

use serde::Serialize;

use crate::crop::{Point, Rect};
use crate::theme::Color;

/// Whether a layer receives pointer input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PointerEvents {
    Auto,
    None,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Cursor {
    Crosshair,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BorderStyle {
    Dashed,
    Solid,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Border {
    pub width: f64,
    pub style: BorderStyle,
    pub color: Color,
}

/// The selection rectangle
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SelectionBox {
    pub bounds: Rect,
    pub border: Border,
    pub fill: Color,
    pub pointer_events: PointerEvents,
}

/// Floating "width × height" readout next to the selection
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DimensionLabel {
    /// Top-left corner of the label
    pub position: Point,
    pub text: String,
    pub background: Color,
    pub color: Color,
    pub font_size: f64,
    pub monospace: bool,
}

/// Centered hint shown before anything has been drawn
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Instructions {
    pub text: String,
    pub background: Color,
    pub color: Color,
    pub font_size: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum OverlayContent {
    Selection {
        selection: SelectionBox,
        label: DimensionLabel,
    },
    Instructions(Instructions),
}

/// A full-bleed layer covering the preview
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OverlayView {
    pub pointer_events: PointerEvents,
    pub cursor: Cursor,
    pub z_index: i32,
    /// Dimming layer color covering the whole preview
    pub dim: Color,
    pub content: OverlayContent,
}

impl OverlayView {
    /// True when pointer callbacks are wired to this layer
    pub fn accepts_input(&self) -> bool {
        self.pointer_events == PointerEvents::Auto
    }

    pub fn selection(&self) -> Option<&SelectionBox> {
        match &self.content {
            OverlayContent::Selection { selection, .. } => Some(selection),
            OverlayContent::Instructions(_) => None,
        }
    }

    pub fn label(&self) -> Option<&DimensionLabel> {
        match &self.content {
            OverlayContent::Selection { label, .. } => Some(label),
            OverlayContent::Instructions(_) => None,
        }
    }

    pub fn instructions(&self) -> Option<&Instructions> {
        match &self.content {
            OverlayContent::Instructions(instructions) => Some(instructions),
            OverlayContent::Selection { .. } => None,
        }
    }
}
