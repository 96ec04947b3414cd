//! Recorded interaction scripts
//!
//! A script describes the preview geometry and a sequence of button and
//! pointer steps. Replaying it through a `PreviewPane` reproduces the crop a
//! user would have drawn, which is handy for checking encoder settings without
//! the UI.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use crate::crop::{CropFilter, CropState, FixedSurface, PointerEvent, Resolution};
use crate::crop_button::CropButtonView;
use crate::overlay::OverlayView;
use crate::pane::{PaneAppearance, PreviewPane};

/// A recorded crop interaction
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SessionScript {
    pub surface: FixedSurface,
    /// Resolution of the stream being encoded
    #[serde(default)]
    pub target: Option<Resolution>,
    pub steps: Vec<Step>,
}

/// One user interaction. Pointer coordinates are screen-space.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Step {
    ButtonClick,
    ButtonEnter,
    ButtonLeave,
    PointerDown { x: f64, y: f64 },
    PointerMove { x: f64, y: f64 },
    PointerUp,
    ExportConfirm { visible: bool },
    Remount { surface: FixedSurface },
}

/// Outcome of replaying a script
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReplayReport {
    pub state: CropState,
    pub target: Option<Resolution>,
    pub filter: Option<CropFilter>,
    /// Filter in the encoder's string form
    pub filter_string: Option<String>,
    pub overlay: Option<OverlayView>,
    pub button: CropButtonView,
    /// Pointer steps the overlay did not accept
    pub ignored_pointer_steps: usize,
}

/// Read a script from a JSON file
pub fn load_script(path: &Path) -> Result<SessionScript, SessionError> {
    let contents = fs::read_to_string(path).map_err(|e| SessionError::Read {
        path: path.to_path_buf(),
        source: e,
    })?;
    let script = parse_script(&contents)?;
    info!("Loaded session script with {} steps from {:?}", script.steps.len(), path);
    Ok(script)
}

pub fn parse_script(json: &str) -> Result<SessionScript, SessionError> {
    Ok(serde_json::from_str(json)?)
}

/// Replay `script`; `target` overrides the script's own target resolution
pub fn replay(
    script: &SessionScript,
    target: Option<Resolution>,
    appearance: PaneAppearance,
) -> ReplayReport {
    let mut pane = PreviewPane::new(script.surface, appearance);
    let mut ignored = 0;

    for (index, step) in script.steps.iter().enumerate() {
        debug!("Step {}: {:?}", index, step);
        let accepted = match *step {
            Step::ButtonClick => {
                pane.click_button();
                true
            }
            Step::ButtonEnter => {
                pane.button_pointer_enter();
                true
            }
            Step::ButtonLeave => {
                pane.button_pointer_leave();
                true
            }
            Step::PointerDown { x, y } => pane.pointer_down(PointerEvent::new(x, y)),
            Step::PointerMove { x, y } => pane.pointer_move(PointerEvent::new(x, y)),
            Step::PointerUp => pane.pointer_up(),
            Step::ExportConfirm { visible } => {
                pane.set_export_confirm_visible(visible);
                true
            }
            Step::Remount { surface } => {
                pane.set_surface(surface);
                true
            }
        };
        if !accepted {
            ignored += 1;
        }
    }

    if ignored > 0 {
        warn!("{} pointer steps were ignored by the overlay", ignored);
    }

    let target = target.or(script.target);
    let filter = pane.crop_filter(target);

    ReplayReport {
        state: pane.crop_state(),
        target,
        filter,
        filter_string: filter.map(|f| f.to_string()),
        overlay: pane.overlay_view(),
        button: pane.button_view(),
        ignored_pointer_steps: ignored,
    }
}

/// Parse a resolution written as `WIDTHxHEIGHT`, e.g. `1920x1080`
pub fn parse_resolution(value: &str) -> Result<Resolution, SessionError> {
    let invalid = || SessionError::InvalidResolution(value.to_string());

    let (width, height) = value
        .trim()
        .split_once(['x', 'X'])
        .ok_or_else(invalid)?;
    let width: u32 = width.trim().parse().map_err(|_| invalid())?;
    let height: u32 = height.trim().parse().map_err(|_| invalid())?;

    if width == 0 || height == 0 {
        return Err(invalid());
    }
    Ok(Resolution::new(width, height))
}

/// Session script errors
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("Failed to read script {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid script: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid resolution {0:?} (expected WIDTHxHEIGHT)")]
    InvalidResolution(String),
}
