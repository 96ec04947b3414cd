//! Read-only access to the mounted video preview.

use serde::{Deserialize, Serialize};

use super::geometry::{Dimensions, Point};

/// Size information reported by a rendered video element
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct VideoElement {
    /// Size the element occupies on screen
    pub displayed: Dimensions,
    /// Intrinsic size of the decoded media (zero until metadata is loaded)
    #[serde(default)]
    pub native: Dimensions,
}

impl VideoElement {
    /// Display-space size used to scale selections.
    ///
    /// Falls back to the native size when the element has not been laid out
    /// yet, and returns `None` when neither is usable.
    pub fn display_dimensions(&self) -> Option<Dimensions> {
        if self.displayed.is_usable() {
            Some(self.displayed)
        } else if self.native.is_usable() {
            Some(self.native)
        } else {
            None
        }
    }
}

/// The preview container hosting the video.
///
/// Hosts implement this over whatever widget renders the video. Every query
/// returns `None` while the container is not mounted.
pub trait PreviewSurface {
    /// Screen-space position of the container's top-left corner
    fn origin(&self) -> Option<Point>;

    /// The video element inside the container, if any
    fn video_element(&self) -> Option<VideoElement>;
}

/// A surface with fixed geometry.
///
/// Used by the replay tool and by hosts that push layout updates in
/// explicitly instead of querying a live widget.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct FixedSurface {
    #[serde(default)]
    pub origin: Option<Point>,
    #[serde(default)]
    pub video: Option<VideoElement>,
}

impl FixedSurface {
    /// A mounted surface at `origin` showing a video at `displayed` size
    pub fn mounted(origin: Point, displayed: Dimensions) -> Self {
        Self {
            origin: Some(origin),
            video: Some(VideoElement {
                displayed,
                native: Dimensions::default(),
            }),
        }
    }

    /// A surface that has not been mounted yet
    pub fn unmounted() -> Self {
        Self::default()
    }
}

impl PreviewSurface for FixedSurface {
    fn origin(&self) -> Option<Point> {
        self.origin
    }

    fn video_element(&self) -> Option<VideoElement> {
        self.video
    }
}

impl<S: PreviewSurface + ?Sized> PreviewSurface for &S {
    fn origin(&self) -> Option<Point> {
        (**self).origin()
    }

    fn video_element(&self) -> Option<VideoElement> {
        (**self).video_element()
    }
}
