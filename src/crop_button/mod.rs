//! Crop mode toggle button
//!
//! One button with two jobs: it toggles drawing mode, or, when a finished
//! selection exists and drawing mode is off, it clears that selection.

mod style;

use tracing::debug;

pub use style::CropButtonView;

use crate::i18n::Catalog;
use crate::theme::Theme;

/// Inputs to the crop button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CropButtonProps {
    pub is_active: bool,
    pub has_crop: bool,
    /// Pointer is currently over the button
    pub is_pointer_over: bool,
}

impl CropButtonProps {
    /// Clicking will clear the selection instead of toggling drawing mode.
    /// The tooltip is chosen from the same predicate.
    pub fn clears_on_click(&self) -> bool {
        self.has_crop && !self.is_active
    }
}

/// Callbacks for button actions
pub struct CropButtonCallbacks {
    pub on_toggle: Box<dyn Fn()>,
    pub on_clear: Box<dyn Fn()>,
    pub on_hover: Option<Box<dyn Fn(bool)>>,
}

/// Whether an event may bubble to ancestor handlers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Propagation {
    Continue,
    Stop,
}

/// What a click did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickAction {
    Toggle,
    Clear,
}

pub struct CropButton;

impl CropButton {
    /// Route a click to the clear or toggle callback.
    ///
    /// The click never propagates to ancestors.
    pub fn handle_click(
        props: &CropButtonProps,
        callbacks: &CropButtonCallbacks,
    ) -> (ClickAction, Propagation) {
        let action = if props.clears_on_click() {
            (callbacks.on_clear)();
            ClickAction::Clear
        } else {
            (callbacks.on_toggle)();
            ClickAction::Toggle
        };
        debug!("Crop button clicked: {:?}", action);
        (action, Propagation::Stop)
    }

    /// Pointer entered the button; previews the clear action if clicking
    /// would clear.
    pub fn handle_pointer_enter(props: &CropButtonProps, callbacks: &CropButtonCallbacks) {
        if props.clears_on_click() {
            if let Some(on_hover) = &callbacks.on_hover {
                on_hover(true);
            }
        }
    }

    /// Pointer left the button; always ends the clear preview
    pub fn handle_pointer_leave(callbacks: &CropButtonCallbacks) {
        if let Some(on_hover) = &callbacks.on_hover {
            on_hover(false);
        }
    }

    pub fn view(props: &CropButtonProps, theme: Theme, catalog: &Catalog) -> CropButtonView {
        style::view(props, theme, catalog)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::Color;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Debug, Clone, PartialEq)]
    enum Call {
        Toggle,
        Clear,
        Hover(bool),
    }

    fn recording_callbacks() -> (CropButtonCallbacks, Rc<RefCell<Vec<Call>>>) {
        let calls = Rc::new(RefCell::new(Vec::new()));
        let toggle = calls.clone();
        let clear = calls.clone();
        let hover = calls.clone();

        let callbacks = CropButtonCallbacks {
            on_toggle: Box::new(move || toggle.borrow_mut().push(Call::Toggle)),
            on_clear: Box::new(move || clear.borrow_mut().push(Call::Clear)),
            on_hover: Some(Box::new(move |h| hover.borrow_mut().push(Call::Hover(h)))),
        };
        (callbacks, calls)
    }

    fn props(is_active: bool, has_crop: bool) -> CropButtonProps {
        CropButtonProps {
            is_active,
            has_crop,
            is_pointer_over: false,
        }
    }

    #[test]
    fn test_click_clears_only_with_inactive_selection() {
        for (is_active, has_crop) in [(false, false), (false, true), (true, false), (true, true)] {
            let (callbacks, calls) = recording_callbacks();
            let (action, propagation) = CropButton::handle_click(&props(is_active, has_crop), &callbacks);

            let expected = if has_crop && !is_active {
                Call::Clear
            } else {
                Call::Toggle
            };
            assert_eq!(*calls.borrow(), vec![expected.clone()]);
            assert_eq!(action == ClickAction::Clear, expected == Call::Clear);
            assert_eq!(propagation, Propagation::Stop);
        }
    }

    #[test]
    fn test_tooltip_agrees_with_click() {
        let catalog = Catalog::english();
        for (is_active, has_crop) in [(false, false), (false, true), (true, false), (true, true)] {
            let props = props(is_active, has_crop);
            let (callbacks, _) = recording_callbacks();
            let (action, _) = CropButton::handle_click(&props, &callbacks);
            let tooltip = CropButton::view(&props, Theme::Dark, &catalog).tooltip;

            match action {
                ClickAction::Clear => assert_eq!(tooltip, "Clear crop"),
                ClickAction::Toggle => assert_eq!(tooltip, "Toggle crop mode"),
            }
        }
    }

    #[test]
    fn test_hover_preview_only_when_clear_is_possible() {
        let (callbacks, calls) = recording_callbacks();

        CropButton::handle_pointer_enter(&props(false, false), &callbacks);
        CropButton::handle_pointer_enter(&props(true, true), &callbacks);
        assert!(calls.borrow().is_empty());

        CropButton::handle_pointer_enter(&props(false, true), &callbacks);
        assert_eq!(*calls.borrow(), vec![Call::Hover(true)]);
    }

    #[test]
    fn test_pointer_leave_always_ends_preview() {
        let (callbacks, calls) = recording_callbacks();
        CropButton::handle_pointer_leave(&callbacks);
        assert_eq!(*calls.borrow(), vec![Call::Hover(false)]);
    }

    #[test]
    fn test_hover_callback_is_optional() {
        let callbacks = CropButtonCallbacks {
            on_toggle: Box::new(|| {}),
            on_clear: Box::new(|| {}),
            on_hover: None,
        };
        CropButton::handle_pointer_enter(&props(false, true), &callbacks);
        CropButton::handle_pointer_leave(&callbacks);
    }

    #[test]
    fn test_colors_follow_state() {
        let catalog = Catalog::english();
        let view = |p: CropButtonProps| CropButton::view(&p, Theme::Dark, &catalog);

        let active = view(props(true, false));
        assert_eq!(active.background, Color::ACCENT);
        assert_eq!(active.foreground, Color::WHITE);

        let selected = view(props(false, true));
        assert_eq!(selected.background, Color::TRANSPARENT);
        assert_eq!(selected.foreground, Color::HAS_SELECTION);

        let idle = view(props(false, false));
        assert_eq!(idle.foreground, Theme::Dark.neutral());
    }

    #[test]
    fn test_pointer_over_background() {
        let catalog = Catalog::english();
        let over = |is_active| CropButtonProps {
            is_active,
            has_crop: false,
            is_pointer_over: true,
        };

        assert_eq!(
            CropButton::view(&over(true), Theme::Light, &catalog).background,
            Color::ACCENT_PRESSED
        );
        assert_eq!(
            CropButton::view(&over(false), Theme::Light, &catalog).background,
            Color::BLACK.with_alpha(0.1)
        );
    }

    #[test]
    fn test_localized_tooltip() {
        let view = CropButton::view(&props(false, true), Theme::Dark, &Catalog::new("no"));
        assert_eq!(view.tooltip, "Fjern beskjæring");
    }
}
