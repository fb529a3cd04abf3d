use rayon::prelude::*;

use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::point::Point;
use crate::core::data::screen_size::ScreenSize;

/// Evaluates every pixel of `screen` in parallel, one rayon task per row.
///
/// Pixels share nothing but the read-only algorithm and each result lands
/// in its own slot, so the output is identical to a sequential row-major
/// scan. The first failing pixel aborts the whole frame.
pub fn generate_fractal_parallel_rayon<Alg>(
    screen: ScreenSize,
    algorithm: &Alg,
) -> Result<Vec<Alg::Success>, Alg::Failure>
where
    Alg: FractalAlgorithm + Sync,
    Alg::Success: Send,
    Alg::Failure: Send,
{
    // lossless: ScreenSize keeps both sides within i32
    let width = screen.width() as i32;
    let height = screen.height() as i32;

    let rows: Vec<Vec<Alg::Success>> = (0..height)
        .into_par_iter()
        .map(|y| {
            (0..width)
                .map(|x| algorithm.compute(Point { x, y }))
                .collect::<Result<Vec<_>, _>>()
        })
        .collect::<Result<_, _>>()?;

    Ok(rows.into_iter().flatten().collect())
}
