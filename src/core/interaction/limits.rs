use std::error::Error;
use std::fmt;

pub const DEFAULT_ZOOM_STEP: f64 = 1.2;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InteractionLimitsError {
    InvalidZoomStep { zoom_step: f64 },
}

impl fmt::Display for InteractionLimitsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidZoomStep { zoom_step } => {
                write!(f, "zoom step must be finite and greater than 1, got {}", zoom_step)
            }
        }
    }
}

impl Error for InteractionLimitsError {}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InteractionLimits {
    /// Factor applied to the zoom per scroll notch. Zoom itself is unbounded.
    pub zoom_step: f64,
}

impl Default for InteractionLimits {
    fn default() -> Self {
        Self {
            zoom_step: DEFAULT_ZOOM_STEP,
        }
    }
}

impl InteractionLimits {
    pub fn validate(&self) -> Result<(), InteractionLimitsError> {
        if !self.zoom_step.is_finite() || self.zoom_step <= 1.0 {
            return Err(InteractionLimitsError::InvalidZoomStep {
                zoom_step: self.zoom_step,
            });
        }

        Ok(())
    }
}
