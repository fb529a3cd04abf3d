use egui::Context as EguiContext;

use crate::core::shader::uniforms::FrameUniforms;
use crate::input::gui::errors::GuiError;

/// Draws one frame of the fractal program with the egui overlay on top.
pub trait GuiPresenterPort {
    fn render(
        &mut self,
        uniforms: &FrameUniforms,
        egui_output: egui::FullOutput,
        egui_ctx: &EguiContext,
    ) -> Result<(), GuiError>;

    fn resize(&mut self, width: u32, height: u32) -> Result<(), GuiError>;
}
