//! Interactive Mandelbrot explorer: a viewport that follows pointer input
//! and an escape-time program evaluated per pixel on the GPU.
//!
//! The `core` modules are platform free and always built. The window,
//! input translation and GPU presenter sit behind the `gui` feature.

pub mod controllers;
pub mod core;
#[cfg(feature = "gui")]
mod input;
#[cfg(feature = "gui")]
mod presenters;

pub use controllers::reference_render::{render_reference_frame, ReferenceRenderError};
pub use crate::core::data::viewport::ViewportState;
pub use crate::core::fractals::mandelbrot::mandelbrot_config::MandelbrotConfig;
pub use crate::core::interaction::{InputEvent, InteractionController, InteractionLimits, RunSignal};

#[cfg(feature = "gui")]
pub use input::gui::commands::run_gui::RunGuiCommand;
#[cfg(feature = "gui")]
pub use input::gui::errors::GuiError;
#[cfg(feature = "gui")]
pub use input::gui::window_config::WindowConfig;
#[cfg(feature = "gui")]
pub use presenters::gpu::factory::ShaderPresenterFactory;
