//! Crop selection overlay
//!
//! A transparent layer above the video preview. It is shown while a selection
//! is being drawn, while the crop button previews the clear action, or while a
//! finished selection exists.

mod view;

pub use view::{
    Border, BorderStyle, Cursor, DimensionLabel, Instructions, OverlayContent, OverlayView,
    PointerEvents, SelectionBox,
};

use crate::config::OverlayConfig;
use crate::crop::{round_half_up, Point, PointerEvent, Rect};
use crate::i18n::{self, Catalog};
use crate::preferences::DEFAULT_OVERLAY_DIM_OPACITY;
use crate::theme::Color;

const ACTIVE_FILL_ALPHA: f64 = 0.1;
const FINALIZED_FILL_ALPHA: f64 = 0.05;
const LABEL_BACKGROUND_ALPHA: f64 = 0.8;
const LABEL_FONT_SIZE: f64 = 12.0;
const INSTRUCTIONS_FONT_SIZE: f64 = 14.0;

/// Receivers for pointer input forwarded by the overlay
pub trait OverlayHandlers {
    fn on_pointer_down(&mut self, event: PointerEvent);
    fn on_pointer_move(&mut self, event: PointerEvent);
    fn on_pointer_up(&mut self);
}

/// Raw pointer input arriving at the overlay layer
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OverlayPointerEvent {
    Down(PointerEvent),
    Move(PointerEvent),
    Up,
}

/// Inputs to the overlay
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct OverlayProps {
    pub crop_rect: Option<Rect>,
    pub is_active: bool,
    pub is_dragging: bool,
    pub is_hovering: bool,
    /// An export confirmation is on screen and takes precedence
    pub export_confirm_visible: bool,
}

/// Visual parameters for the overlay
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OverlayStyle {
    pub config: OverlayConfig,
    pub dim_opacity: f64,
}

impl Default for OverlayStyle {
    fn default() -> Self {
        Self {
            config: OverlayConfig::default(),
            dim_opacity: DEFAULT_OVERLAY_DIM_OPACITY,
        }
    }
}

pub struct Overlay;

impl Overlay {
    /// Build the overlay for `props`, or `None` when nothing should be shown
    pub fn render(props: &OverlayProps, style: &OverlayStyle, catalog: &Catalog) -> Option<OverlayView> {
        if props.export_confirm_visible {
            return None;
        }
        if !props.is_active && !props.is_hovering && props.crop_rect.is_none() {
            return None;
        }

        let pointer_events = if props.is_active {
            PointerEvents::Auto
        } else {
            PointerEvents::None
        };

        let content = match props.crop_rect {
            Some(rect) => OverlayContent::Selection {
                selection: selection_box(rect, props.is_active || props.is_dragging, style),
                label: dimension_label(rect, style),
            },
            None => OverlayContent::Instructions(Instructions {
                text: catalog.t(i18n::CROP_INSTRUCTIONS).to_string(),
                background: Color::BLACK.with_alpha(LABEL_BACKGROUND_ALPHA),
                color: Color::WHITE,
                font_size: INSTRUCTIONS_FONT_SIZE,
            }),
        };

        Some(OverlayView {
            pointer_events,
            cursor: Cursor::Crosshair,
            z_index: style.config.z_index,
            dim: Color::BLACK.with_alpha(style.dim_opacity),
            content,
        })
    }

    /// Forward `event` to `handlers` if the rendered overlay accepts input.
    ///
    /// Returns whether the event was forwarded. A hidden overlay (`None`)
    /// never forwards.
    pub fn dispatch<H: OverlayHandlers + ?Sized>(
        view: Option<&OverlayView>,
        event: OverlayPointerEvent,
        handlers: &mut H,
    ) -> bool {
        match view {
            Some(view) if view.accepts_input() => {
                match event {
                    OverlayPointerEvent::Down(e) => handlers.on_pointer_down(e),
                    OverlayPointerEvent::Move(e) => handlers.on_pointer_move(e),
                    OverlayPointerEvent::Up => handlers.on_pointer_up(),
                }
                true
            }
            _ => false,
        }
    }
}

fn selection_box(rect: Rect, drawing: bool, style: &OverlayStyle) -> SelectionBox {
    let (border_style, fill_alpha, pointer_events) = if drawing {
        (BorderStyle::Dashed, ACTIVE_FILL_ALPHA, PointerEvents::Auto)
    } else {
        (BorderStyle::Solid, FINALIZED_FILL_ALPHA, PointerEvents::None)
    };

    SelectionBox {
        bounds: rect,
        border: Border {
            width: style.config.border_width,
            style: border_style,
            color: Color::SELECTION,
        },
        fill: Color::SELECTION.with_alpha(fill_alpha),
        pointer_events,
    }
}

fn dimension_label(rect: Rect, style: &OverlayStyle) -> DimensionLabel {
    let corner = rect.top_right();
    DimensionLabel {
        position: Point::new(
            corner.x + style.config.label_offset_x,
            corner.y + style.config.label_offset_y,
        ),
        text: format!("{} × {}", round_half_up(rect.width), round_half_up(rect.height)),
        background: Color::BLACK.with_alpha(LABEL_BACKGROUND_ALPHA),
        color: Color::LABEL_TEXT,
        font_size: LABEL_FONT_SIZE,
        monospace: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Recorder {
        downs: usize,
        moves: usize,
        ups: usize,
    }

    impl OverlayHandlers for Recorder {
        fn on_pointer_down(&mut self, _event: PointerEvent) {
            self.downs += 1;
        }

        fn on_pointer_move(&mut self, _event: PointerEvent) {
            self.moves += 1;
        }

        fn on_pointer_up(&mut self) {
            self.ups += 1;
        }
    }

    fn render(props: OverlayProps) -> Option<OverlayView> {
        Overlay::render(&props, &OverlayStyle::default(), &Catalog::english())
    }

    fn rect() -> Rect {
        Rect::new(100.0, 50.0, 200.4, 99.6)
    }

    #[test]
    fn test_hidden_when_idle() {
        assert!(render(OverlayProps::default()).is_none());
    }

    #[test]
    fn test_suppressed_by_export_confirm() {
        let props = OverlayProps {
            crop_rect: Some(rect()),
            is_active: true,
            is_dragging: true,
            is_hovering: true,
            export_confirm_visible: true,
        };
        assert!(render(props).is_none());
    }

    #[test]
    fn test_active_without_rect_shows_instructions() {
        let view = render(OverlayProps {
            is_active: true,
            ..OverlayProps::default()
        })
        .unwrap();

        assert!(view.accepts_input());
        assert_eq!(view.cursor, Cursor::Crosshair);
        assert_eq!(view.z_index, 1000);
        assert!(view.selection().is_none());
        assert_eq!(
            view.instructions().unwrap().text,
            "Click and drag to create a crop area"
        );
    }

    #[test]
    fn test_hover_preview_does_not_take_input() {
        let view = render(OverlayProps {
            is_hovering: true,
            crop_rect: Some(rect()),
            ..OverlayProps::default()
        })
        .unwrap();

        assert_eq!(view.pointer_events, PointerEvents::None);
        assert!(!view.accepts_input());
    }

    #[test]
    fn test_drawing_uses_dashed_outline() {
        let view = render(OverlayProps {
            is_active: true,
            is_dragging: true,
            crop_rect: Some(rect()),
            ..OverlayProps::default()
        })
        .unwrap();

        let selection = view.selection().unwrap();
        assert_eq!(selection.border.style, BorderStyle::Dashed);
        assert_eq!(selection.border.width, 2.0);
        assert_eq!(selection.fill.alpha, ACTIVE_FILL_ALPHA);
        assert_eq!(selection.bounds, rect());
    }

    #[test]
    fn test_finalized_uses_solid_outline() {
        let view = render(OverlayProps {
            crop_rect: Some(rect()),
            ..OverlayProps::default()
        })
        .unwrap();

        let selection = view.selection().unwrap();
        assert_eq!(selection.border.style, BorderStyle::Solid);
        assert_eq!(selection.fill.alpha, FINALIZED_FILL_ALPHA);
        assert_eq!(selection.pointer_events, PointerEvents::None);
        assert!(view.instructions().is_none());
    }

    #[test]
    fn test_label_shows_rounded_size_at_top_right() {
        let view = render(OverlayProps {
            crop_rect: Some(rect()),
            ..OverlayProps::default()
        })
        .unwrap();

        let label = view.label().unwrap();
        assert_eq!(label.text, "200 × 100");
        assert!((label.position.x - 305.4).abs() < 1e-9);
        assert_eq!(label.position.y, 25.0);
        assert!(label.monospace);
    }

    #[test]
    fn test_dim_layer_uses_style_opacity() {
        let style = OverlayStyle {
            dim_opacity: 0.6,
            ..OverlayStyle::default()
        };
        let props = OverlayProps {
            is_active: true,
            ..OverlayProps::default()
        };
        let view = Overlay::render(&props, &style, &Catalog::english()).unwrap();

        assert_eq!(view.dim, Color::BLACK.with_alpha(0.6));
    }

    #[test]
    fn test_instructions_are_localized() {
        let props = OverlayProps {
            is_active: true,
            ..OverlayProps::default()
        };
        let view = Overlay::render(&props, &OverlayStyle::default(), &Catalog::new("de")).unwrap();

        assert_eq!(
            view.instructions().unwrap().text,
            "Klicken und ziehen, um einen Zuschnittbereich zu erstellen"
        );
    }

    #[test]
    fn test_dispatch_only_while_active() {
        let active = render(OverlayProps {
            is_active: true,
            ..OverlayProps::default()
        });
        let passive = render(OverlayProps {
            crop_rect: Some(rect()),
            ..OverlayProps::default()
        });
        let event = OverlayPointerEvent::Down(PointerEvent::new(1.0, 1.0));
        let mut recorder = Recorder::default();

        assert!(Overlay::dispatch(active.as_ref(), event, &mut recorder));
        assert!(Overlay::dispatch(active.as_ref(), OverlayPointerEvent::Up, &mut recorder));
        assert!(!Overlay::dispatch(passive.as_ref(), event, &mut recorder));
        assert!(!Overlay::dispatch(None, OverlayPointerEvent::Up, &mut recorder));

        assert_eq!(recorder.downs, 1);
        assert_eq!(recorder.moves, 0);
        assert_eq!(recorder.ups, 1);
    }
}
