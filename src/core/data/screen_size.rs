use std::error::Error;
use std::fmt;

use crate::core::data::point::{NormalizedPoint, PixelPosition, Point};

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ScreenSizeError {
    Empty { width: u32, height: u32 },
    TooLarge { width: u32, height: u32 },
}

/// Largest side length; pixel coordinates are `i32`.
pub const MAX_SIDE: u32 = i32::MAX as u32;

impl fmt::Display for ScreenSizeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty { width, height } => {
                write!(f, "screen size must be positive: {}x{}", width, height)
            }
            Self::TooLarge { width, height } => {
                write!(
                    f,
                    "screen size {}x{} exceeds {} pixels per side",
                    width, height, MAX_SIDE
                )
            }
        }
    }
}

impl Error for ScreenSizeError {}

/// Pixel dimensions of the render surface. Both sides are always non-zero,
/// so dividing by them is total, and fit in `i32`.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct ScreenSize {
    width: u32,
    height: u32,
}

impl ScreenSize {
    pub fn new(width: u32, height: u32) -> Result<Self, ScreenSizeError> {
        if width == 0 || height == 0 {
            return Err(ScreenSizeError::Empty { width, height });
        }

        if width > MAX_SIDE || height > MAX_SIDE {
            return Err(ScreenSizeError::TooLarge { width, height });
        }

        Ok(Self { width, height })
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[must_use]
    pub fn aspect_ratio(&self) -> f64 {
        f64::from(self.width) / f64::from(self.height)
    }

    #[must_use]
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    #[must_use]
    pub fn contains_point(&self, point: Point) -> bool {
        point.x >= 0
            && point.y >= 0
            && (point.x as u32) < self.width
            && (point.y as u32) < self.height
    }

    /// Normalises a pointer position against the surface size.
    ///
    /// Positions outside the surface are not clamped; a pointer dragged past
    /// the window edge still produces a meaningful anchor.
    #[must_use]
    pub fn normalize(&self, position: PixelPosition) -> NormalizedPoint {
        NormalizedPoint::new(
            position.x / f64::from(self.width),
            position.y / f64::from(self.height),
        )
    }

    /// Normalised coordinate of the centre of `pixel`, which is where the
    /// fragment stage samples it.
    #[must_use]
    pub fn pixel_center(&self, pixel: Point) -> NormalizedPoint {
        self.normalize(PixelPosition::new(
            f64::from(pixel.x) + 0.5,
            f64::from(pixel.y) + 0.5,
        ))
    }
}
