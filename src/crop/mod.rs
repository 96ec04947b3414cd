//! Crop selection tracking
//!
//! Tracks the drag-to-select rectangle drawn over a video preview and derives
//! the encoder crop filter from it.

mod filter;
mod geometry;
mod state;
mod surface;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

pub use filter::{derive_crop_filter, CropFilter, CropFilterParseError};
pub use geometry::{Dimensions, Point, Rect, Resolution};
pub(crate) use geometry::round_half_up;
pub use state::{CropAction, CropState};
pub use surface::{FixedSurface, PreviewSurface, VideoElement};

use crate::overlay::OverlayHandlers;

/// A pointer event in screen-space coordinates
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PointerEvent {
    pub client_x: f64,
    pub client_y: f64,
}

impl PointerEvent {
    pub const fn new(client_x: f64, client_y: f64) -> Self {
        Self { client_x, client_y }
    }
}

/// Selection tracker for one preview pane
#[derive(Debug)]
pub struct CropTracker<S> {
    surface: S,
    state: CropState,
}

impl<S: PreviewSurface> CropTracker<S> {
    pub fn new(surface: S) -> Self {
        Self {
            surface,
            state: CropState::new(),
        }
    }

    /// Current state snapshot
    pub fn state(&self) -> CropState {
        self.state
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Replace the surface, e.g. after the host re-mounts the preview
    pub fn set_surface(&mut self, surface: S) {
        self.surface = surface;
    }

    /// Enter drawing mode
    ///
    /// Captures the video's display size at this moment. If the preview is not
    /// mounted the snapshot is empty and `crop_filter` stays unavailable.
    pub fn start_crop(&mut self) {
        let dimensions = self.display_dimensions();
        match dimensions {
            Some(d) => info!("Crop mode started ({:.0}x{:.0} display)", d.width, d.height),
            None => info!("Crop mode started without a mounted video"),
        }
        self.dispatch(CropAction::Start { dimensions });
    }

    pub fn stop_crop(&mut self) {
        info!("Crop mode stopped");
        self.dispatch(CropAction::Stop);
    }

    pub fn clear_crop(&mut self) {
        info!("Crop selection cleared");
        self.dispatch(CropAction::Clear);
    }

    pub fn set_hovering(&mut self, hovering: bool) {
        self.dispatch(CropAction::SetHovering(hovering));
    }

    pub fn on_pointer_down(&mut self, event: PointerEvent) {
        if !self.state.is_active {
            return;
        }
        let Some(point) = self.local_point(event) else {
            return;
        };
        debug!("Crop drag started at ({:.1}, {:.1})", point.x, point.y);
        self.dispatch(CropAction::PointerDown(point));
    }

    pub fn on_pointer_move(&mut self, event: PointerEvent) {
        if !self.state.is_active || !self.state.is_dragging || self.state.start_point.is_none() {
            return;
        }
        let Some(point) = self.local_point(event) else {
            return;
        };
        self.dispatch(CropAction::PointerMove(point));
    }

    pub fn on_pointer_up(&mut self) {
        if !self.state.is_active || !self.state.is_dragging {
            return;
        }
        self.dispatch(CropAction::PointerUp);
        match self.state.current_rect {
            Some(rect) if rect.is_empty() => {
                debug!(
                    "Degenerate crop selection finalized at ({:.0}, {:.0}), encoder gets 1px",
                    rect.x, rect.y
                );
            }
            Some(rect) => {
                debug!(
                    "Crop selection finalized: {:.0}x{:.0} at ({:.0}, {:.0})",
                    rect.width, rect.height, rect.x, rect.y
                );
            }
            None => {}
        }
    }

    /// Crop filter for `rect` against a stream of `target` resolution, using
    /// the display size captured by the last `start_crop`.
    pub fn crop_filter(&self, rect: Option<&Rect>, target: Option<Resolution>) -> Option<CropFilter> {
        derive_crop_filter(rect, target, self.state.video_dimensions)
    }

    /// Crop filter for the tracker's own selection
    pub fn current_crop_filter(&self, target: Option<Resolution>) -> Option<CropFilter> {
        self.crop_filter(self.state.current_rect.as_ref(), target)
    }

    fn dispatch(&mut self, action: CropAction) {
        self.state = self.state.reduce(action);
    }

    fn display_dimensions(&self) -> Option<Dimensions> {
        self.surface
            .video_element()
            .and_then(|video| video.display_dimensions())
    }

    /// Convert a screen-space event into container-local pixels
    fn local_point(&self, event: PointerEvent) -> Option<Point> {
        let origin = self.surface.origin()?;
        Some(Point::new(
            event.client_x - origin.x,
            event.client_y - origin.y,
        ))
    }
}

impl<S: PreviewSurface> OverlayHandlers for CropTracker<S> {
    fn on_pointer_down(&mut self, event: PointerEvent) {
        CropTracker::on_pointer_down(self, event);
    }

    fn on_pointer_move(&mut self, event: PointerEvent) {
        CropTracker::on_pointer_move(self, event);
    }

    fn on_pointer_up(&mut self) {
        CropTracker::on_pointer_up(self);
    }
}
