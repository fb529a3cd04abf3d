use std::error::Error;
use std::fmt;

use winit::error::{EventLoopError, OsError};

use crate::core::data::screen_size::ScreenSizeError;
use crate::core::data::view_extent::ViewExtentError;
use crate::core::fractals::mandelbrot::errors::MandelbrotError;
use crate::core::interaction::limits::InteractionLimitsError;
use crate::core::shader::program::ShaderProgramError;

/// Everything that can stop the explorer window from starting or running.
#[derive(Debug)]
pub enum GuiError {
    EventLoop(EventLoopError),
    Window(OsError),
    Surface(pixels::Error),
    Texture(pixels::TextureError),
    ShaderProgram(ShaderProgramError),
    /// The GPU driver rejected the shader module or the pipeline built on it.
    PipelineValidation { message: String },
    ScreenSize(ScreenSizeError),
    ViewExtent(ViewExtentError),
    Mandelbrot(MandelbrotError),
    InteractionLimits(InteractionLimitsError),
}

impl fmt::Display for GuiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EventLoop(err) => write!(f, "event loop error: {}", err),
            Self::Window(err) => write!(f, "failed to create window: {}", err),
            Self::Surface(err) => write!(f, "GPU surface error: {}", err),
            Self::Texture(err) => write!(f, "GPU texture error: {}", err),
            Self::ShaderProgram(err) => write!(f, "invalid shader program: {}", err),
            Self::PipelineValidation { message } => {
                write!(f, "render pipeline failed validation: {}", message)
            }
            Self::ScreenSize(err) => write!(f, "{}", err),
            Self::ViewExtent(err) => write!(f, "{}", err),
            Self::Mandelbrot(err) => write!(f, "invalid fractal settings: {}", err),
            Self::InteractionLimits(err) => write!(f, "invalid interaction settings: {}", err),
        }
    }
}

impl Error for GuiError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::EventLoop(err) => Some(err),
            Self::Window(err) => Some(err),
            Self::Surface(err) => Some(err),
            Self::Texture(err) => Some(err),
            Self::ShaderProgram(err) => Some(err),
            Self::PipelineValidation { .. } => None,
            Self::ScreenSize(err) => Some(err),
            Self::ViewExtent(err) => Some(err),
            Self::Mandelbrot(err) => Some(err),
            Self::InteractionLimits(err) => Some(err),
        }
    }
}

impl From<EventLoopError> for GuiError {
    fn from(err: EventLoopError) -> Self {
        Self::EventLoop(err)
    }
}

impl From<OsError> for GuiError {
    fn from(err: OsError) -> Self {
        Self::Window(err)
    }
}

impl From<pixels::Error> for GuiError {
    fn from(err: pixels::Error) -> Self {
        Self::Surface(err)
    }
}

impl From<pixels::TextureError> for GuiError {
    fn from(err: pixels::TextureError) -> Self {
        Self::Texture(err)
    }
}

impl From<ShaderProgramError> for GuiError {
    fn from(err: ShaderProgramError) -> Self {
        Self::ShaderProgram(err)
    }
}

impl From<ScreenSizeError> for GuiError {
    fn from(err: ScreenSizeError) -> Self {
        Self::ScreenSize(err)
    }
}

impl From<ViewExtentError> for GuiError {
    fn from(err: ViewExtentError) -> Self {
        Self::ViewExtent(err)
    }
}

impl From<MandelbrotError> for GuiError {
    fn from(err: MandelbrotError) -> Self {
        Self::Mandelbrot(err)
    }
}

impl From<InteractionLimitsError> for GuiError {
    fn from(err: InteractionLimitsError) -> Self {
        Self::InteractionLimits(err)
    }
}
