use crate::core::data::screen_size::ScreenSize;
use crate::core::data::view_extent::{ViewExtent, ViewExtentError};
use crate::core::data::viewport::ViewportState;
use crate::core::fractals::mandelbrot::errors::MandelbrotError;

pub const DEFAULT_MAX_ITERATIONS: u32 = 100;
pub const DEFAULT_PLANE_HEIGHT: f64 = 2.5;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MandelbrotConfig {
    /// Escape-time iteration cap, fixed for the lifetime of the program.
    pub max_iterations: u32,
    /// Vertical span of the complex plane at zoom 1.0.
    pub plane_height: f64,
    /// View at startup and after a reset.
    pub home: ViewportState,
}

impl Default for MandelbrotConfig {
    fn default() -> Self {
        Self {
            max_iterations: DEFAULT_MAX_ITERATIONS,
            plane_height: DEFAULT_PLANE_HEIGHT,
            home: ViewportState::default(),
        }
    }
}

impl MandelbrotConfig {
    pub fn validate(&self) -> Result<(), MandelbrotError> {
        if self.max_iterations == 0 {
            return Err(MandelbrotError::ZeroMaxIterationsError);
        }

        if !self.plane_height.is_finite() || self.plane_height <= 0.0 {
            return Err(MandelbrotError::InvalidPlaneHeight {
                plane_height: self.plane_height,
            });
        }

        if !self.home.is_valid() {
            return Err(MandelbrotError::InvalidHomeView {
                zoom: self.home.zoom,
                center: self.home.center,
            });
        }

        Ok(())
    }

    pub fn view_extent(&self, screen: ScreenSize) -> Result<ViewExtent, ViewExtentError> {
        ViewExtent::from_screen(screen, self.plane_height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::complex::Complex;

    #[test]
    fn default_config_is_valid() {
        let config = MandelbrotConfig::default();

        assert_eq!(config.validate(), Ok(()));
        assert_eq!(config.max_iterations, 100);
        assert_eq!(config.home, ViewportState::default());
    }

    #[test]
    fn zero_iterations_are_rejected() {
        let config = MandelbrotConfig {
            max_iterations: 0,
            ..MandelbrotConfig::default()
        };

        assert_eq!(config.validate(), Err(MandelbrotError::ZeroMaxIterationsError));
    }

    #[test]
    fn bad_plane_height_is_rejected() {
        for plane_height in [0.0, -2.5, f64::NAN] {
            let config = MandelbrotConfig {
                plane_height,
                ..MandelbrotConfig::default()
            };

            assert!(matches!(
                config.validate(),
                Err(MandelbrotError::InvalidPlaneHeight { .. })
            ));
        }
    }

    #[test]
    fn bad_home_view_is_rejected() {
        let config = MandelbrotConfig {
            home: ViewportState {
                zoom: 1.0,
                center: Complex::new(f64::INFINITY, 0.0),
            },
            ..MandelbrotConfig::default()
        };

        assert!(matches!(
            config.validate(),
            Err(MandelbrotError::InvalidHomeView { .. })
        ));
    }

    #[test]
    fn view_extent_uses_plane_height_and_aspect() {
        let config = MandelbrotConfig::default();
        let extent = config
            .view_extent(ScreenSize::new(1920, 1080).unwrap())
            .unwrap();

        assert_eq!(extent.plane_height(), 2.5);
        assert!((extent.plane_width() - 4.444_444_444_444_445).abs() < 1e-12);
    }
}
