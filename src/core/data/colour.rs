/// An 8-bit-per-channel colour as stored in a framebuffer.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Colour {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

/// A linear floating-point colour as produced by a fragment program.
///
/// Channels are not clamped; anything above `1.0` saturates when quantised,
/// the same way a `Rgba8` render target treats it.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Rgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Rgba {
    #[must_use]
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    #[must_use]
    pub fn quantize(&self) -> Colour {
        Colour {
            r: quantize_channel(self.r),
            g: quantize_channel(self.g),
            b: quantize_channel(self.b),
            a: quantize_channel(self.a),
        }
    }
}

fn quantize_channel(value: f32) -> u8 {
    (value.clamp(0.0, 1.0) * 255.0).round() as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quantize_saturates_above_one() {
        let colour = Rgba::new(5.0, 0.5, 1.0, 1.0).quantize();

        assert_eq!(colour, Colour { r: 255, g: 128, b: 255, a: 255 });
    }

    #[test]
    fn test_quantize_clamps_negative_and_nan_to_zero() {
        let colour = Rgba::new(-1.0, f32::NAN, 0.0, 0.0).quantize();

        assert_eq!(colour.r, 0);
        assert_eq!(colour.g, 0);
    }
}
