use crate::core::data::viewport::ViewportState;
use crate::core::interaction::controller::InteractionController;
use crate::core::interaction::events::{InputEvent, RunSignal};
use crate::core::shader::uniforms::FrameUniforms;

/// What the frame loop does next.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FrameStep {
    Render(FrameUniforms),
    Quit,
}

/// The view being explored plus the input queued since the last frame.
/// Owns no window, so the frame ordering can be exercised directly.
#[derive(Debug)]
pub struct ViewSession {
    controller: InteractionController,
    viewport: ViewportState,
    max_iterations: u32,
    pending: Vec<InputEvent>,
}

impl ViewSession {
    #[must_use]
    pub fn new(controller: InteractionController, viewport: ViewportState, max_iterations: u32) -> Self {
        Self {
            controller,
            viewport,
            max_iterations,
            pending: Vec::new(),
        }
    }

    pub fn push(&mut self, event: InputEvent) {
        self.pending.push(event);
    }

    /// Runs every queued event through the controller, in arrival order.
    pub fn apply_pending(&mut self) -> RunSignal {
        let events = std::mem::take(&mut self.pending);

        self.controller.drain(events, &mut self.viewport)
    }

    /// Applies all queued input, then snapshots the parameters of the frame
    /// about to be drawn.
    pub fn begin_frame(&mut self) -> FrameStep {
        match self.apply_pending() {
            RunSignal::Quit => FrameStep::Quit,
            RunSignal::Continue => FrameStep::Render(FrameUniforms::new(
                &self.viewport,
                &self.controller.extent(),
                self.max_iterations,
            )),
        }
    }

    #[must_use]
    pub fn viewport(&self) -> ViewportState {
        self.viewport
    }

    #[must_use]
    pub fn controller(&self) -> &InteractionController {
        &self.controller
    }

    pub fn controller_mut(&mut self) -> &mut InteractionController {
        &mut self.controller
    }

    #[must_use]
    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }
}
