use crate::core::data::colour::Colour;
use std::error::Error;

/// Turns one per-pixel value into the colour stored for that pixel.
pub trait ColourMap {
    type Value;
    type Failure: Error;

    fn map(&self, value: Self::Value) -> Result<Colour, Self::Failure>;
}
