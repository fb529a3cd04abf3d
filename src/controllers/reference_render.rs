//! CPU rendition of the fragment program.
//!
//! Evaluates the same transform, escape-time loop and palette as
//! `mandelbrot.wgsl`, one rayon task per row, sampling each pixel at its
//! centre exactly like the rasteriser does. It pins the GPU semantics in
//! tests and benchmarks and needs no graphics device.

use std::convert::Infallible;
use std::error::Error;
use std::fmt;

use log::debug;

use crate::core::actions::generate_fractal::generate_fractal_parallel_rayon::generate_fractal_parallel_rayon;
use crate::core::actions::generate_pixel_buffer::generate_pixel_buffer::{
    GeneratePixelBufferError, generate_pixel_buffer,
};
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::screen_size::ScreenSize;
use crate::core::data::view_extent::ViewExtent;
use crate::core::data::viewport::ViewportState;
use crate::core::fractals::mandelbrot::algorithm::MandelbrotAlgorithm;
use crate::core::fractals::mandelbrot::colour_map::ShaderPalette;
use crate::core::fractals::mandelbrot::errors::MandelbrotError;
use crate::core::util::pixel_to_complex_coords::PixelToComplexCoordsError;

#[derive(Debug)]
pub enum ReferenceRenderError {
    Mandelbrot(MandelbrotError),
    PixelToComplex(PixelToComplexCoordsError),
    PixelBuffer(GeneratePixelBufferError<Infallible>),
}

impl fmt::Display for ReferenceRenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Mandelbrot(err) => write!(f, "invalid fractal settings: {}", err),
            Self::PixelToComplex(err) => write!(f, "pixel mapping failed: {}", err),
            Self::PixelBuffer(err) => write!(f, "colouring failed: {}", err),
        }
    }
}

impl Error for ReferenceRenderError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Mandelbrot(err) => Some(err),
            Self::PixelToComplex(err) => Some(err),
            Self::PixelBuffer(err) => Some(err),
        }
    }
}

impl From<MandelbrotError> for ReferenceRenderError {
    fn from(err: MandelbrotError) -> Self {
        Self::Mandelbrot(err)
    }
}

impl From<PixelToComplexCoordsError> for ReferenceRenderError {
    fn from(err: PixelToComplexCoordsError) -> Self {
        Self::PixelToComplex(err)
    }
}

impl From<GeneratePixelBufferError<Infallible>> for ReferenceRenderError {
    fn from(err: GeneratePixelBufferError<Infallible>) -> Self {
        Self::PixelBuffer(err)
    }
}

/// Renders one frame of the view into an RGBA buffer.
pub fn render_reference_frame(
    screen: ScreenSize,
    viewport: &ViewportState,
    extent: &ViewExtent,
    max_iterations: u32,
) -> Result<PixelBuffer, ReferenceRenderError> {
    let algorithm = MandelbrotAlgorithm::new(screen, *viewport, *extent, max_iterations)?;
    let fractions = generate_fractal_parallel_rayon(screen, &algorithm)?;

    debug!(
        "reference frame {}x{} at zoom {}",
        screen.width(),
        screen.height(),
        viewport.zoom
    );

    Ok(generate_pixel_buffer(fractions, &ShaderPalette, screen)?)
}
