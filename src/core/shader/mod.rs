pub mod program;
pub mod quad;
pub mod uniforms;

pub use program::{MANDELBROT_PROGRAM, ShaderProgram, UniformField, UniformKind};
pub use quad::{FULL_SCREEN_QUAD, QuadVertex};
pub use uniforms::{FrameUniforms, exceeds_single_precision};
