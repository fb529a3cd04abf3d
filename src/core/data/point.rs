/// A pixel position on the render surface, origin top-left, y growing downward.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

/// A pointer position or motion delta in (possibly fractional) pixels.
///
/// Window systems report the cursor with sub-pixel precision, so the
/// interaction layer works in `f64` rather than [`Point`].
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct PixelPosition {
    pub x: f64,
    pub y: f64,
}

impl PixelPosition {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A screen coordinate normalised to `[0, 1]²`, `v` growing downward.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct NormalizedPoint {
    pub u: f64,
    pub v: f64,
}

impl NormalizedPoint {
    pub const CENTER: Self = Self { u: 0.5, v: 0.5 };

    #[must_use]
    pub const fn new(u: f64, v: f64) -> Self {
        Self { u, v }
    }
}
