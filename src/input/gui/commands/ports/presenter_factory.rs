use winit::window::Window;

use crate::core::shader::program::ShaderProgram;
use crate::input::gui::app::ports::presenter::GuiPresenterPort;
use crate::input::gui::errors::GuiError;

pub trait GuiPresenterFactoryPort<T: GuiPresenterPort> {
    fn build(&self, window: &'static Window, program: &ShaderProgram) -> Result<T, GuiError>;
}
