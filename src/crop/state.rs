//! Selection state and its transitions.
//!
//! `CropState` is a small `Copy` aggregate. Every transition takes the prior
//! value and returns a new one; nothing mutates a state in place.

use serde::Serialize;

use super::geometry::{Dimensions, Point, Rect};

/// Aggregate selection state for one preview pane
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct CropState {
    /// Drawing mode is engaged and overlay pointer events are live
    pub is_active: bool,
    /// A pointer-down happened while active and has not been released
    pub is_dragging: bool,
    /// Clear-affordance preview while the pointer is over the toggle
    pub is_hovering: bool,
    /// Drag anchor in container-local pixels
    pub start_point: Option<Point>,
    /// In-progress or finalized selection
    pub current_rect: Option<Rect>,
    /// Display size of the video captured when drawing mode started
    pub video_dimensions: Option<Dimensions>,
}

/// A single state transition
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CropAction {
    Start { dimensions: Option<Dimensions> },
    Stop,
    Clear,
    SetHovering(bool),
    PointerDown(Point),
    PointerMove(Point),
    PointerUp,
}

impl CropState {
    pub fn new() -> Self {
        Self::default()
    }

    /// True when a selection exists, finalized or in progress
    pub fn has_crop(&self) -> bool {
        self.current_rect.is_some()
    }

    /// Apply `action`, returning the next state
    pub fn reduce(self, action: CropAction) -> Self {
        match action {
            CropAction::Start { dimensions } => self.start(dimensions),
            CropAction::Stop => self.stop(),
            CropAction::Clear => self.clear(),
            CropAction::SetHovering(hovering) => self.with_hovering(hovering),
            CropAction::PointerDown(point) => self.pointer_down(point),
            CropAction::PointerMove(point) => self.pointer_move(point),
            CropAction::PointerUp => self.pointer_up(),
        }
    }

    pub fn start(self, dimensions: Option<Dimensions>) -> Self {
        Self {
            is_active: true,
            video_dimensions: dimensions,
            ..self
        }
    }

    /// Leave drawing mode, keeping any rectangle
    pub fn stop(self) -> Self {
        Self {
            is_active: false,
            is_dragging: false,
            start_point: None,
            ..self
        }
    }

    /// Discard the selection. The captured video dimensions survive.
    pub fn clear(self) -> Self {
        Self {
            is_active: false,
            is_dragging: false,
            is_hovering: false,
            start_point: None,
            current_rect: None,
            video_dimensions: self.video_dimensions,
        }
    }

    pub fn with_hovering(self, hovering: bool) -> Self {
        Self {
            is_hovering: hovering,
            ..self
        }
    }

    pub fn pointer_down(self, point: Point) -> Self {
        if !self.is_active {
            return self;
        }

        Self {
            is_dragging: true,
            start_point: Some(point),
            current_rect: Some(Rect::at(point)),
            ..self
        }
    }

    pub fn pointer_move(self, point: Point) -> Self {
        if !self.is_active || !self.is_dragging {
            return self;
        }
        let Some(anchor) = self.start_point else {
            return self;
        };

        Self {
            current_rect: Some(Rect::from_corners(anchor, point)),
            ..self
        }
    }

    /// Finish the drag. The drawn rectangle becomes the selection, even when
    /// it has zero size.
    pub fn pointer_up(self) -> Self {
        if !self.is_active || !self.is_dragging {
            return self;
        }

        Self {
            is_active: false,
            is_dragging: false,
            start_point: None,
            ..self
        }
    }
}
