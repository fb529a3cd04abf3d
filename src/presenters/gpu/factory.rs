use winit::window::Window;

use crate::core::shader::program::ShaderProgram;
use crate::input::gui::commands::ports::presenter_factory::GuiPresenterFactoryPort;
use crate::input::gui::errors::GuiError;
use crate::presenters::gpu::presenter::ShaderPresenter;

#[derive(Debug, Default)]
pub struct ShaderPresenterFactory {}

impl ShaderPresenterFactory {
    #[must_use]
    pub fn new() -> Self {
        Self {}
    }
}

impl GuiPresenterFactoryPort<ShaderPresenter> for ShaderPresenterFactory {
    fn build(&self, window: &'static Window, program: &ShaderProgram) -> Result<ShaderPresenter, GuiError> {
        ShaderPresenter::new(window, program)
    }
}
