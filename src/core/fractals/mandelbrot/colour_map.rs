use std::convert::Infallible;

use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::data::colour::{Colour, Rgba};
use crate::core::fractals::mandelbrot::algorithm::INSIDE;

const INSIDE_COLOUR: Rgba = Rgba::new(0.0, 0.0, 0.0, 1.0);
const CHANNEL_WEIGHTS: [f32; 3] = [5.0, 2.0, 8.0];

/// The fixed violet palette of the fragment program.
///
/// Members of the set are black; everything else scales linearly with the
/// escape fraction and saturates early on the red and blue channels.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ShaderPalette;

impl ShaderPalette {
    #[must_use]
    pub fn shade(&self, fraction: f32) -> Rgba {
        if fraction == INSIDE {
            return INSIDE_COLOUR;
        }

        let [r, g, b] = CHANNEL_WEIGHTS;
        Rgba::new(r * fraction, g * fraction, b * fraction, 1.0)
    }
}

impl ColourMap for ShaderPalette {
    type Value = f32;
    type Failure = Infallible;

    fn map(&self, fraction: f32) -> Result<Colour, Self::Failure> {
        Ok(self.shade(fraction).quantize())
    }
}
