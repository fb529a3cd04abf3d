use std::error::Error;
use crate::core::data::point::Point;

/// Evaluates one pixel. Implementations hold no mutable state, so any number
/// of pixels can be computed concurrently.
pub trait FractalAlgorithm {
    type Success;
    type Failure: Error;

    fn compute(&self, pixel: Point) -> Result<Self::Success, Self::Failure>;
}
