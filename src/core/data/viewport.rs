use crate::core::data::complex::Complex;
use crate::core::data::point::NormalizedPoint;
use crate::core::data::view_extent::ViewExtent;

pub const DEFAULT_ZOOM: f64 = 1.0;
pub const DEFAULT_CENTER: Complex = Complex::new(-0.75, 0.0);

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ZoomDirection {
    In,
    Out,
}

impl ZoomDirection {
    /// Scrolling up zooms in. Anything else, a zero delta included, zooms out.
    #[must_use]
    pub fn from_scroll(dy: f64) -> Self {
        if dy > 0.0 { Self::In } else { Self::Out }
    }
}

/// Zoom factor and centre of the visible region of the complex plane.
///
/// `zoom` multiplies the [`ViewExtent`]: smaller values show less of the
/// plane. It is never clamped, so very deep zooms run into `f32` precision
/// limits on the GPU.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ViewportState {
    pub zoom: f64,
    pub center: Complex,
}

impl Default for ViewportState {
    fn default() -> Self {
        Self {
            zoom: DEFAULT_ZOOM,
            center: DEFAULT_CENTER,
        }
    }
}

impl ViewportState {
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.zoom.is_finite() && self.zoom > 0.0 && self.center.is_finite()
    }

    /// Zooms by `step` while keeping the plane point under `anchor` fixed on
    /// screen.
    pub fn zoom_at(
        &mut self,
        direction: ZoomDirection,
        anchor: NormalizedPoint,
        extent: &ViewExtent,
        step: f64,
    ) {
        let zoom_before = self.zoom;

        self.zoom = match direction {
            ZoomDirection::In => self.zoom / step,
            ZoomDirection::Out => self.zoom * step,
        };

        let zoom_delta = zoom_before - self.zoom;
        self.center.real += (anchor.u - 0.5) * extent.plane_width() * zoom_delta;
        self.center.imag += (anchor.v - 0.5) * extent.plane_height() * zoom_delta;
    }

    /// Moves the view against a pointer displacement given as a fraction of
    /// the surface size, so the content follows the cursor.
    pub fn pan_by(&mut self, du: f64, dv: f64, extent: &ViewExtent) {
        self.center.real -= du * extent.plane_width() * self.zoom;
        self.center.imag -= dv * extent.plane_height() * self.zoom;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::util::pixel_to_complex_coords::normalized_to_complex;

    const EPSILON: f64 = 1e-12;
    const STEP: f64 = 1.2;

    fn assert_approx_eq(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() <= EPSILON,
            "actual={} expected={}",
            actual,
            expected
        );
    }

    fn extent() -> ViewExtent {
        ViewExtent::new(2.5 * 16.0 / 9.0, 2.5).unwrap()
    }

    #[test]
    fn default_viewport_is_the_classic_framing() {
        let viewport = ViewportState::default();

        assert_eq!(viewport.zoom, 1.0);
        assert_eq!(viewport.center, Complex::new(-0.75, 0.0));
        assert!(viewport.is_valid());
    }

    #[test]
    fn scroll_direction_follows_sign() {
        assert_eq!(ZoomDirection::from_scroll(1.0), ZoomDirection::In);
        assert_eq!(ZoomDirection::from_scroll(-3.0), ZoomDirection::Out);
        assert_eq!(ZoomDirection::from_scroll(0.0), ZoomDirection::Out);
    }

    #[test]
    fn zoom_in_at_center_divides_zoom_and_keeps_center() {
        let mut viewport = ViewportState::default();

        viewport.zoom_at(ZoomDirection::In, NormalizedPoint::CENTER, &extent(), STEP);

        assert_approx_eq(viewport.zoom, 1.0 / 1.2);
        assert_eq!(viewport.center, DEFAULT_CENTER);
    }

    #[test]
    fn zoom_out_multiplies_zoom() {
        let mut viewport = ViewportState::default();

        viewport.zoom_at(ZoomDirection::Out, NormalizedPoint::CENTER, &extent(), STEP);
        viewport.zoom_at(ZoomDirection::Out, NormalizedPoint::CENTER, &extent(), STEP);

        assert_approx_eq(viewport.zoom, 1.44);
    }

    #[test]
    fn zoom_keeps_point_under_anchor_fixed() {
        let extent = extent();
        let anchors = [
            NormalizedPoint::new(0.0, 0.0),
            NormalizedPoint::new(0.1, 0.9),
            NormalizedPoint::new(0.73, 0.21),
            NormalizedPoint::new(1.0, 1.0),
        ];

        for anchor in anchors {
            for direction in [ZoomDirection::In, ZoomDirection::Out] {
                let mut viewport = ViewportState {
                    zoom: 0.37,
                    center: Complex::new(-1.2, 0.3),
                };
                let before = normalized_to_complex(anchor, &viewport, &extent);

                viewport.zoom_at(direction, anchor, &extent, STEP);
                let after = normalized_to_complex(anchor, &viewport, &extent);

                assert_approx_eq(after.real, before.real);
                assert_approx_eq(after.imag, before.imag);
            }
        }
    }

    #[test]
    fn zoom_in_then_out_at_same_anchor_restores_view() {
        let extent = extent();
        let anchor = NormalizedPoint::new(0.2, 0.65);
        let mut viewport = ViewportState::default();

        viewport.zoom_at(ZoomDirection::In, anchor, &extent, STEP);
        viewport.zoom_at(ZoomDirection::Out, anchor, &extent, STEP);

        assert_approx_eq(viewport.zoom, 1.0);
        assert_approx_eq(viewport.center.real, DEFAULT_CENTER.real);
        assert_approx_eq(viewport.center.imag, DEFAULT_CENTER.imag);
    }

    #[test]
    fn pan_moves_center_against_pointer() {
        let extent = extent();
        let mut viewport = ViewportState::default();

        viewport.pan_by(0.1, -0.2, &extent);

        assert_approx_eq(viewport.center.real, -0.75 - 0.1 * extent.plane_width());
        assert_approx_eq(viewport.center.imag, 0.2 * extent.plane_height());
    }

    #[test]
    fn pan_scales_with_zoom() {
        let extent = extent();
        let mut viewport = ViewportState {
            zoom: 0.5,
            center: Complex::new(0.0, 0.0),
        };

        viewport.pan_by(0.25, 0.25, &extent);

        assert_approx_eq(viewport.center.real, -0.125 * extent.plane_width());
        assert_approx_eq(viewport.center.imag, -0.125 * extent.plane_height());
    }

    #[test]
    fn non_positive_zoom_is_invalid() {
        let viewport = ViewportState {
            zoom: 0.0,
            ..ViewportState::default()
        };

        assert!(!viewport.is_valid());
    }
}
