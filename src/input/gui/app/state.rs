use std::time::{Duration, Instant};

use crate::core::data::complex::Complex;
use crate::core::data::point::PixelPosition;
use crate::core::data::screen_size::ScreenSize;
use crate::core::data::view_extent::ViewExtent;
use crate::core::data::viewport::ViewportState;
use crate::core::fractals::mandelbrot::algorithm::escape_fraction;
use crate::core::shader::uniforms::exceeds_single_precision;
use crate::core::util::pixel_to_complex_coords::normalized_to_complex;

/// Overlay visibility and frame pacing.
#[derive(Debug)]
pub struct OverlayState {
    pub visible: bool,
    last_frame: Option<Instant>,
    frame_time: Option<Duration>,
}

impl Default for OverlayState {
    fn default() -> Self {
        Self {
            visible: true,
            last_frame: None,
            frame_time: None,
        }
    }
}

impl OverlayState {
    pub fn toggle(&mut self) {
        self.visible = !self.visible;
    }

    pub fn record_frame(&mut self, now: Instant) {
        if let Some(last) = self.last_frame {
            self.frame_time = Some(now.saturating_duration_since(last));
        }

        self.last_frame = Some(now);
    }

    #[must_use]
    pub fn frame_time(&self) -> Option<Duration> {
        self.frame_time
    }
}

/// Plane coordinate under the pointer and how fast it escapes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerReadout {
    pub point: Complex,
    pub escape_fraction: f32,
}

/// Everything the overlay prints for one frame, captured before the egui
/// pass so the UI closure does not borrow the app.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OverlaySnapshot {
    pub viewport: ViewportState,
    pub max_iterations: u32,
    pub screen: ScreenSize,
    pub frame_time: Option<Duration>,
    pub pointer: Option<PointerReadout>,
    pub precision_limited: bool,
}

impl OverlaySnapshot {
    #[must_use]
    pub fn capture(
        viewport: ViewportState,
        extent: &ViewExtent,
        screen: ScreenSize,
        max_iterations: u32,
        frame_time: Option<Duration>,
        pointer: Option<PixelPosition>,
    ) -> Self {
        let pointer = pointer.map(|position| {
            let point = normalized_to_complex(screen.normalize(position), &viewport, extent);

            PointerReadout {
                point,
                escape_fraction: escape_fraction(point, max_iterations),
            }
        });

        Self {
            viewport,
            max_iterations,
            screen,
            frame_time,
            pointer,
            precision_limited: exceeds_single_precision(&viewport, extent, screen),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::fractals::mandelbrot::algorithm::INSIDE;

    #[test]
    fn test_frame_time_needs_two_frames() {
        let mut state = OverlayState::default();
        let start = Instant::now();

        state.record_frame(start);
        assert_eq!(state.frame_time(), None);

        state.record_frame(start + Duration::from_millis(16));
        assert_eq!(state.frame_time(), Some(Duration::from_millis(16)));
    }

    #[test]
    fn test_toggle_flips_visibility() {
        let mut state = OverlayState::default();

        assert!(state.visible);
        state.toggle();
        assert!(!state.visible);
    }

    #[test]
    fn test_snapshot_reads_point_under_pointer() {
        let screen = ScreenSize::new(200, 100).unwrap();
        let extent = ViewExtent::new(4.0, 2.0).unwrap();
        let viewport = ViewportState {
            zoom: 1.0,
            center: Complex::new(0.0, 0.0),
        };

        let snapshot = OverlaySnapshot::capture(
            viewport,
            &extent,
            screen,
            100,
            None,
            Some(PixelPosition::new(100.0, 50.0)),
        );

        let readout = snapshot.pointer.unwrap();
        assert_eq!(readout.point, Complex::new(0.0, 0.0));
        assert_eq!(readout.escape_fraction, INSIDE);
        assert!(!snapshot.precision_limited);
    }

    #[test]
    fn test_snapshot_without_pointer() {
        let screen = ScreenSize::new(200, 100).unwrap();
        let extent = ViewExtent::new(4.0, 2.0).unwrap();

        let snapshot = OverlaySnapshot::capture(
            ViewportState::default(),
            &extent,
            screen,
            100,
            None,
            None,
        );

        assert_eq!(snapshot.pointer, None);
    }
}
