use bytemuck::{Pod, Zeroable};

use crate::core::data::screen_size::ScreenSize;
use crate::core::data::view_extent::ViewExtent;
use crate::core::data::viewport::ViewportState;

/// Per-frame parameters of the fragment program, laid out to match
/// `FrameUniforms` in `mandelbrot.wgsl` byte for byte.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct FrameUniforms {
    pub center: [f32; 2],
    pub zoom: f32,
    pub plane_width: f32,
    pub plane_height: f32,
    pub max_iter: i32,
    pub _padding: [f32; 2],
}

impl FrameUniforms {
    /// Narrows the control-side `f64` state to what the GPU consumes.
    #[must_use]
    pub fn new(viewport: &ViewportState, extent: &ViewExtent, max_iterations: u32) -> Self {
        Self {
            center: [viewport.center.real as f32, viewport.center.imag as f32],
            zoom: viewport.zoom as f32,
            plane_width: extent.plane_width() as f32,
            plane_height: extent.plane_height() as f32,
            max_iter: i32::try_from(max_iterations).unwrap_or(i32::MAX),
            _padding: [0.0; 2],
        }
    }
}

/// True once neighbouring pixels are closer together in the plane than
/// single precision can tell apart around the current centre, at which point
/// the GPU image degrades into blocks.
#[must_use]
pub fn exceeds_single_precision(
    viewport: &ViewportState,
    extent: &ViewExtent,
    screen: ScreenSize,
) -> bool {
    let pixel_span = (extent.plane_width() / f64::from(screen.width()))
        .min(extent.plane_height() / f64::from(screen.height()))
        * viewport.zoom;

    let magnitude = viewport
        .center
        .real
        .abs()
        .max(viewport.center.imag.abs())
        .max(extent.plane_width().max(extent.plane_height()) * viewport.zoom * 0.5);

    pixel_span < magnitude * f64::from(f32::EPSILON)
}
