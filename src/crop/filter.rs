//! Crop filter derivation.
//!
//! Maps a selection drawn over the displayed video into the pixel space of the
//! stream being encoded, and formats it as `crop=<width>:<height>:<x>:<y>`.
//! That token order is what the encoder's filter parser expects, so the
//! `Display` output must not change.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::geometry::{round_half_up, Dimensions, Rect, Resolution};

const FILTER_NAME: &str = "crop";

/// A crop region in native stream pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CropFilter {
    pub width: u32,
    pub height: u32,
    pub x: u32,
    pub y: u32,
}

impl fmt::Display for CropFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}={}:{}:{}:{}",
            FILTER_NAME, self.width, self.height, self.x, self.y
        )
    }
}

impl FromStr for CropFilter {
    type Err = CropFilterParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let args = s
            .strip_prefix(FILTER_NAME)
            .and_then(|rest| rest.strip_prefix('='))
            .ok_or(CropFilterParseError::MissingPrefix)?;

        let fields: Vec<&str> = args.split(':').collect();
        if fields.len() != 4 {
            return Err(CropFilterParseError::FieldCount(fields.len()));
        }

        let parse = |name: &'static str, value: &str| {
            value
                .parse::<u32>()
                .map_err(|_| CropFilterParseError::InvalidNumber {
                    field: name,
                    value: value.to_string(),
                })
        };

        Ok(Self {
            width: parse("width", fields[0])?,
            height: parse("height", fields[1])?,
            x: parse("x", fields[2])?,
            y: parse("y", fields[3])?,
        })
    }
}

/// Errors from parsing a crop filter string
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum CropFilterParseError {
    #[error("Filter does not start with \"crop=\"")]
    MissingPrefix,

    #[error("Expected 4 fields (width:height:x:y), found {0}")]
    FieldCount(usize),

    #[error("Invalid {field} value: {value:?}")]
    InvalidNumber { field: &'static str, value: String },
}

/// Derive the crop region for `target` from a rectangle drawn over a video
/// displayed at `display` size.
///
/// Returns `None` when any input is missing or has a zero dimension. The
/// result always lies inside the target frame and is at least 1x1.
pub fn derive_crop_filter(
    rect: Option<&Rect>,
    target: Option<Resolution>,
    display: Option<Dimensions>,
) -> Option<CropFilter> {
    let rect = rect?;
    let target = target?;
    let display = display?;

    if !display.is_usable() || target.width == 0 || target.height == 0 {
        return None;
    }

    let scale_x = f64::from(target.width) / display.width;
    let scale_y = f64::from(target.height) / display.height;

    let crop_x = round_half_up(rect.x * scale_x);
    let crop_y = round_half_up(rect.y * scale_y);
    let crop_width = round_half_up(rect.width * scale_x);
    let crop_height = round_half_up(rect.height * scale_y);

    let (x, width) = clamp_span(crop_x, crop_width, target.width);
    let (y, height) = clamp_span(crop_y, crop_height, target.height);

    Some(CropFilter {
        width,
        height,
        x,
        y,
    })
}

/// Clamp an origin into `[0, limit - 1]` and a length into
/// `[1, limit - origin]`. `limit` must be non-zero.
fn clamp_span(origin: i64, length: i64, limit: u32) -> (u32, u32) {
    let limit = i64::from(limit);
    let origin = origin.clamp(0, limit - 1);
    let length = length.clamp(1, limit - origin);
    (origin as u32, length as u32)
}
