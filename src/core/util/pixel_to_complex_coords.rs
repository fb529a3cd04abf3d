use crate::core::data::complex::Complex;
use crate::core::data::point::{NormalizedPoint, Point};
use crate::core::data::screen_size::ScreenSize;
use crate::core::data::view_extent::ViewExtent;
use crate::core::data::viewport::ViewportState;
use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum PixelToComplexCoordsError {
    PointOutsideScreen { point: Point, screen: ScreenSize },
}

impl fmt::Display for PixelToComplexCoordsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PointOutsideScreen { point, screen } => {
                write!(
                    f,
                    "point (x: {}, y: {}) is outside the {}x{} screen",
                    point.x,
                    point.y,
                    screen.width(),
                    screen.height()
                )
            }
        }
    }
}

impl Error for PixelToComplexCoordsError {}

/// Maps a normalised screen coordinate to the complex plane.
///
/// The fragment stage in `mandelbrot.wgsl` performs the same arithmetic per
/// pixel; the two must stay in step.
#[must_use]
pub fn normalized_to_complex(
    point: NormalizedPoint,
    viewport: &ViewportState,
    extent: &ViewExtent,
) -> Complex {
    Complex {
        real: (point.u - 0.5) * extent.plane_width() * viewport.zoom + viewport.center.real,
        imag: (point.v - 0.5) * extent.plane_height() * viewport.zoom + viewport.center.imag,
    }
}

/// Maps the centre of a surface pixel to the complex plane.
pub fn pixel_to_complex_coords(
    pixel: Point,
    screen: ScreenSize,
    viewport: &ViewportState,
    extent: &ViewExtent,
) -> Result<Complex, PixelToComplexCoordsError> {
    if !screen.contains_point(pixel) {
        return Err(PixelToComplexCoordsError::PointOutsideScreen {
            point: pixel,
            screen,
        });
    }

    Ok(normalized_to_complex(
        screen.pixel_center(pixel),
        viewport,
        extent,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square_extent() -> ViewExtent {
        ViewExtent::new(2.0, 2.0).unwrap()
    }

    #[test]
    fn test_center_maps_to_viewport_center() {
        let viewport = ViewportState::default();

        let c = normalized_to_complex(NormalizedPoint::CENTER, &viewport, &square_extent());

        assert_eq!(c, viewport.center);
    }

    #[test]
    fn test_corners_span_extent_times_zoom() {
        let viewport = ViewportState {
            zoom: 0.5,
            center: Complex::new(1.0, -1.0),
        };
        let extent = square_extent();

        let top_left = normalized_to_complex(NormalizedPoint::new(0.0, 0.0), &viewport, &extent);
        let bottom_right =
            normalized_to_complex(NormalizedPoint::new(1.0, 1.0), &viewport, &extent);

        assert_eq!(top_left, Complex::new(0.5, -1.5));
        assert_eq!(bottom_right, Complex::new(1.5, -0.5));
    }

    #[test]
    fn test_imaginary_axis_grows_downward() {
        let viewport = ViewportState::default();
        let extent = square_extent();

        let top = normalized_to_complex(NormalizedPoint::new(0.5, 0.0), &viewport, &extent);
        let bottom = normalized_to_complex(NormalizedPoint::new(0.5, 1.0), &viewport, &extent);

        assert!(top.imag < bottom.imag);
    }

    #[test]
    fn test_pixel_samples_at_its_center() {
        let screen = ScreenSize::new(2, 2).unwrap();
        let viewport = ViewportState {
            zoom: 1.0,
            center: Complex::new(0.0, 0.0),
        };

        let c = pixel_to_complex_coords(Point { x: 0, y: 0 }, screen, &viewport, &square_extent());

        assert_eq!(c, Ok(Complex::new(-0.5, -0.5)));
    }

    #[test]
    fn test_pixel_outside_screen_fails() {
        let screen = ScreenSize::new(100, 100).unwrap();
        let point = Point { x: 100, y: 3 };

        let result = pixel_to_complex_coords(
            point,
            screen,
            &ViewportState::default(),
            &square_extent(),
        );

        assert_eq!(
            result,
            Err(PixelToComplexCoordsError::PointOutsideScreen { point, screen })
        );
    }
}
