use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::complex::Complex;
use crate::core::data::point::Point;
use crate::core::data::screen_size::ScreenSize;
use crate::core::data::view_extent::ViewExtent;
use crate::core::data::viewport::ViewportState;
use crate::core::fractals::mandelbrot::errors::MandelbrotError;
use crate::core::util::pixel_to_complex_coords::{
    pixel_to_complex_coords, PixelToComplexCoordsError,
};

/// Returned by [`escape_fraction`] for points that never escaped.
pub const INSIDE: f32 = 1.0;

/// Largest `f32` below [`INSIDE`]. Escaped points never reach the sentinel,
/// however large the budget.
pub const LAST_ESCAPE: f32 = 1.0 - f32::EPSILON / 2.0;

const ESCAPE_RADIUS_SQUARED: f64 = 4.0;

/// Iteration at which the orbit of `z ← z² + c`, started at `z = c`, first
/// leaves the radius-2 disc, or `None` if it stays inside for `max_iterations`
/// steps.
#[must_use]
pub fn escape_iteration(c: Complex, max_iterations: u32) -> Option<u32> {
    let mut z = c;

    for iteration in 0..max_iterations {
        z = z * z + c;

        if z.magnitude_squared() > ESCAPE_RADIUS_SQUARED {
            return Some(iteration);
        }
    }

    None
}

/// Normalised escape speed in `[0, 1)`, or exactly [`INSIDE`] for points
/// that did not escape within the budget.
#[must_use]
pub fn escape_fraction(c: Complex, max_iterations: u32) -> f32 {
    match escape_iteration(c, max_iterations) {
        Some(iteration) => escaped_fraction(iteration, max_iterations),
        None => INSIDE,
    }
}

fn escaped_fraction(iteration: u32, max_iterations: u32) -> f32 {
    let fraction = f64::from(iteration) / f64::from(max_iterations);

    (fraction as f32).min(LAST_ESCAPE)
}

/// Per-pixel escape-time evaluation for one frame of the view.
#[derive(Debug)]
pub struct MandelbrotAlgorithm {
    screen: ScreenSize,
    viewport: ViewportState,
    extent: ViewExtent,
    max_iterations: u32,
}

impl FractalAlgorithm for MandelbrotAlgorithm {
    type Success = f32;
    type Failure = PixelToComplexCoordsError;

    fn compute(&self, pixel: Point) -> Result<Self::Success, Self::Failure> {
        let c = pixel_to_complex_coords(pixel, self.screen, &self.viewport, &self.extent)?;

        Ok(escape_fraction(c, self.max_iterations))
    }
}

impl MandelbrotAlgorithm {
    pub fn new(
        screen: ScreenSize,
        viewport: ViewportState,
        extent: ViewExtent,
        max_iterations: u32,
    ) -> Result<Self, MandelbrotError> {
        if max_iterations == 0 {
            return Err(MandelbrotError::ZeroMaxIterationsError);
        }

        Ok(Self {
            screen,
            viewport,
            extent,
            max_iterations,
        })
    }
}
