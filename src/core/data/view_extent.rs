use std::error::Error;
use std::fmt;

use crate::core::data::screen_size::ScreenSize;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum ViewExtentError {
    InvalidSize { plane_width: f64, plane_height: f64 },
}

impl fmt::Display for ViewExtentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSize {
                plane_width,
                plane_height,
            } => {
                write!(
                    f,
                    "view extent must be positive and finite: {}x{}",
                    plane_width, plane_height
                )
            }
        }
    }
}

impl Error for ViewExtentError {}

/// Span of the complex plane visible at `zoom == 1.0`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ViewExtent {
    plane_width: f64,
    plane_height: f64,
}

impl ViewExtent {
    pub fn new(plane_width: f64, plane_height: f64) -> Result<Self, ViewExtentError> {
        let valid = |v: f64| v.is_finite() && v > 0.0;

        if !valid(plane_width) || !valid(plane_height) {
            return Err(ViewExtentError::InvalidSize {
                plane_width,
                plane_height,
            });
        }

        Ok(Self {
            plane_width,
            plane_height,
        })
    }

    /// Fixes the vertical span and widens the horizontal one to the surface's
    /// aspect ratio so the set is not stretched.
    pub fn from_screen(screen: ScreenSize, plane_height: f64) -> Result<Self, ViewExtentError> {
        Self::new(plane_height * screen.aspect_ratio(), plane_height)
    }

    #[must_use]
    pub fn plane_width(&self) -> f64 {
        self.plane_width
    }

    #[must_use]
    pub fn plane_height(&self) -> f64 {
        self.plane_height
    }
}
