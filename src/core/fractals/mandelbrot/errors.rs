use std::{error::Error, fmt};

use crate::core::data::complex::Complex;

#[derive(Debug, PartialEq)]
pub enum MandelbrotError {
    ZeroMaxIterationsError,
    InvalidPlaneHeight { plane_height: f64 },
    InvalidHomeView { zoom: f64, center: Complex },
}

impl fmt::Display for MandelbrotError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroMaxIterationsError => {
                write!(f, "Maximum iterations must be greater than zero")
            }
            Self::InvalidPlaneHeight { plane_height } => {
                write!(f, "Plane height must be positive and finite, got {}", plane_height)
            }
            Self::InvalidHomeView { zoom, center } => {
                write!(
                    f,
                    "Home view needs a positive zoom and a finite centre, got zoom {} at {} + {}i",
                    zoom, center.real, center.imag
                )
            }
        }
    }
}

impl Error for MandelbrotError {}
