//! Video preview pane with crop selection
//!
//! Wires the crop button, the overlay and the selection tracker together and
//! hands the resulting crop filter to whoever configures the encoder.

use std::cell::RefCell;
use std::rc::Rc;
use tracing::debug;

use crate::crop::{CropFilter, CropState, CropTracker, PointerEvent, PreviewSurface, Resolution};
use crate::crop_button::{ClickAction, CropButton, CropButtonCallbacks, CropButtonProps, CropButtonView};
use crate::i18n::Catalog;
use crate::overlay::{Overlay, OverlayPointerEvent, OverlayProps, OverlayStyle, OverlayView};
use crate::preferences::Preferences;
use crate::theme::Theme;

/// Appearance settings for a pane
#[derive(Debug, Clone, Copy)]
pub struct PaneAppearance {
    pub overlay: OverlayStyle,
    pub theme: Theme,
    pub catalog: Catalog,
}

impl PaneAppearance {
    pub fn from_preferences(prefs: &Preferences, overlay: OverlayStyle) -> Self {
        Self {
            overlay: OverlayStyle {
                dim_opacity: prefs.overlay_dim_opacity(),
                ..overlay
            },
            theme: Theme::from_dark_mode(prefs.is_dark_mode()),
            catalog: Catalog::new(prefs.language_code()),
        }
    }
}

impl Default for PaneAppearance {
    fn default() -> Self {
        Self {
            overlay: OverlayStyle::default(),
            theme: Theme::default(),
            catalog: Catalog::english(),
        }
    }
}

/// Preview pane state for the crop interaction
pub struct PreviewPane<S: PreviewSurface + 'static> {
    tracker: Rc<RefCell<CropTracker<S>>>,
    callbacks: CropButtonCallbacks,
    appearance: PaneAppearance,
    button_pointer_over: bool,
    export_confirm_visible: bool,
}

impl<S: PreviewSurface + 'static> PreviewPane<S> {
    pub fn new(surface: S, appearance: PaneAppearance) -> Self {
        let tracker = Rc::new(RefCell::new(CropTracker::new(surface)));
        let callbacks = create_button_callbacks(&tracker);

        Self {
            tracker,
            callbacks,
            appearance,
            button_pointer_over: false,
            export_confirm_visible: false,
        }
    }

    /// Current selection state
    pub fn crop_state(&self) -> CropState {
        self.tracker.borrow().state()
    }

    pub fn set_surface(&mut self, surface: S) {
        self.tracker.borrow_mut().set_surface(surface);
    }

    /// Show or hide the export confirmation, which hides the overlay
    pub fn set_export_confirm_visible(&mut self, visible: bool) {
        self.export_confirm_visible = visible;
    }

    pub fn overlay_props(&self) -> OverlayProps {
        let state = self.crop_state();
        OverlayProps {
            crop_rect: state.current_rect,
            is_active: state.is_active,
            is_dragging: state.is_dragging,
            is_hovering: state.is_hovering,
            export_confirm_visible: self.export_confirm_visible,
        }
    }

    pub fn button_props(&self) -> CropButtonProps {
        let state = self.crop_state();
        CropButtonProps {
            is_active: state.is_active,
            has_crop: state.has_crop(),
            is_pointer_over: self.button_pointer_over,
        }
    }

    pub fn overlay_view(&self) -> Option<OverlayView> {
        Overlay::render(
            &self.overlay_props(),
            &self.appearance.overlay,
            &self.appearance.catalog,
        )
    }

    pub fn button_view(&self) -> CropButtonView {
        CropButton::view(
            &self.button_props(),
            self.appearance.theme,
            &self.appearance.catalog,
        )
    }

    pub fn click_button(&mut self) -> ClickAction {
        let props = self.button_props();
        let (action, _) = CropButton::handle_click(&props, &self.callbacks);
        action
    }

    pub fn button_pointer_enter(&mut self) {
        let props = self.button_props();
        self.button_pointer_over = true;
        CropButton::handle_pointer_enter(&props, &self.callbacks);
    }

    pub fn button_pointer_leave(&mut self) {
        self.button_pointer_over = false;
        CropButton::handle_pointer_leave(&self.callbacks);
    }

    /// Deliver pointer input that landed on the overlay.
    ///
    /// Returns whether the overlay took the event.
    pub fn overlay_pointer(&mut self, event: OverlayPointerEvent) -> bool {
        let view = self.overlay_view();
        let mut tracker = self.tracker.borrow_mut();
        Overlay::dispatch(view.as_ref(), event, &mut *tracker)
    }

    pub fn pointer_down(&mut self, event: PointerEvent) -> bool {
        self.overlay_pointer(OverlayPointerEvent::Down(event))
    }

    pub fn pointer_move(&mut self, event: PointerEvent) -> bool {
        self.overlay_pointer(OverlayPointerEvent::Move(event))
    }

    pub fn pointer_up(&mut self) -> bool {
        self.overlay_pointer(OverlayPointerEvent::Up)
    }

    /// Crop filter for the current selection against the encoded stream
    pub fn crop_filter(&self, target: Option<Resolution>) -> Option<CropFilter> {
        self.tracker.borrow().current_crop_filter(target)
    }
}

/// Create crop button callbacks bound to `tracker`
fn create_button_callbacks<S: PreviewSurface + 'static>(
    tracker: &Rc<RefCell<CropTracker<S>>>,
) -> CropButtonCallbacks {
    let tracker_toggle = tracker.clone();
    let tracker_clear = tracker.clone();
    let tracker_hover = tracker.clone();

    CropButtonCallbacks {
        on_toggle: Box::new(move || {
            let mut tracker = tracker_toggle.borrow_mut();
            if tracker.state().is_active {
                tracker.stop_crop();
            } else {
                tracker.start_crop();
            }
        }),

        on_clear: Box::new(move || {
            tracker_clear.borrow_mut().clear_crop();
        }),

        on_hover: Some(Box::new(move |hovering| {
            debug!("Crop clear preview: {}", hovering);
            tracker_hover.borrow_mut().set_hovering(hovering);
        })),
    }
}
