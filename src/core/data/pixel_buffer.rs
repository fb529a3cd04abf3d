use crate::core::data::colour::Colour;
use crate::core::data::point::Point;
use crate::core::data::screen_size::ScreenSize;
use std::error::Error;
use std::fmt;

pub const BYTES_PER_PIXEL: usize = 4;

fn screen_to_buffer_size(screen: ScreenSize) -> usize {
    screen.pixel_count() * BYTES_PER_PIXEL
}

#[derive(Debug, Clone, PartialEq)]
pub enum PixelBufferError {
    PixelOutsideBounds { pixel: Point, screen: ScreenSize },
    BoundsMismatch { expected_size: usize, buffer_size: usize },
}

impl fmt::Display for PixelBufferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BoundsMismatch {
                expected_size,
                buffer_size,
            } => {
                write!(
                    f,
                    "expected {} bytes of pixel data but got {}",
                    expected_size, buffer_size
                )
            }
            Self::PixelOutsideBounds { pixel, screen } => {
                write!(
                    f,
                    "pixel at x:{}, y:{} outside of {}x{} buffer",
                    pixel.x,
                    pixel.y,
                    screen.width(),
                    screen.height()
                )
            }
        }
    }
}

impl Error for PixelBufferError {}

pub type PixelBufferData = Vec<u8>;

/// Row-major RGBA8 image, the same layout as the GPU render target.
#[derive(Debug)]
pub struct PixelBuffer {
    screen: ScreenSize,
    buffer: PixelBufferData,
}

impl PixelBuffer {
    pub fn from_data(screen: ScreenSize, buffer: PixelBufferData) -> Result<Self, PixelBufferError> {
        let expected_size = screen_to_buffer_size(screen);

        if expected_size != buffer.len() {
            return Err(PixelBufferError::BoundsMismatch {
                expected_size,
                buffer_size: buffer.len(),
            });
        }

        Ok(Self { screen, buffer })
    }

    #[must_use]
    pub fn screen(&self) -> ScreenSize {
        self.screen
    }

    #[must_use]
    pub fn buffer(&self) -> &PixelBufferData {
        &self.buffer
    }

    pub fn pixel(&self, pixel: Point) -> Result<Colour, PixelBufferError> {
        let index = self.index_of(pixel)?;

        Ok(Colour {
            r: self.buffer[index],
            g: self.buffer[index + 1],
            b: self.buffer[index + 2],
            a: self.buffer[index + 3],
        })
    }

    fn index_of(&self, pixel: Point) -> Result<usize, PixelBufferError> {
        if !self.screen.contains_point(pixel) {
            return Err(PixelBufferError::PixelOutsideBounds {
                pixel,
                screen: self.screen,
            });
        }

        Ok((pixel.y as usize * self.screen.width() as usize + pixel.x as usize) * BYTES_PER_PIXEL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn screen(width: u32, height: u32) -> ScreenSize {
        ScreenSize::new(width, height).unwrap()
    }

    #[test]
    fn test_from_data_rejects_wrong_length() {
        let result = PixelBuffer::from_data(screen(2, 2), vec![0; 12]);

        assert_eq!(
            result.unwrap_err(),
            PixelBufferError::BoundsMismatch {
                expected_size: 16,
                buffer_size: 12
            }
        );
    }

    #[test]
    fn test_reads_rgba_pixel_in_row_major_order() {
        let data: Vec<u8> = (0..4 * 4 * 4).map(|byte| byte as u8).collect();
        let buffer = PixelBuffer::from_data(screen(4, 4), data).unwrap();

        assert_eq!(
            buffer.pixel(Point { x: 2, y: 3 }).unwrap(),
            Colour { r: 56, g: 57, b: 58, a: 59 }
        );
    }

    #[test]
    fn test_pixel_outside_bounds_fails() {
        let buffer = PixelBuffer::from_data(screen(4, 4), vec![0; 64]).unwrap();
        let pixel = Point { x: 4, y: 0 };

        assert_eq!(
            buffer.pixel(pixel),
            Err(PixelBufferError::PixelOutsideBounds {
                pixel,
                screen: screen(4, 4)
            })
        );
    }
}
