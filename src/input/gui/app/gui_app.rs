use std::time::Instant;

use egui::Context;
use egui_winit::State as EguiWinitState;
use log::{debug, info};
use winit::event::WindowEvent;
use winit::event_loop::EventLoop;
use winit::window::Window;

use crate::core::data::screen_size::ScreenSize;
use crate::core::data::viewport::ViewportState;
use crate::core::interaction::controller::InteractionController;
use crate::core::interaction::events::{InputEvent, RunSignal};
use crate::input::gui::app::event_translation::{
    survives_egui_capture, translate_window_event, GuiAction, PointerTracker,
};
use crate::input::gui::app::ports::presenter::GuiPresenterPort;
use crate::input::gui::app::session::{FrameStep, ViewSession};
use crate::input::gui::app::state::{OverlaySnapshot, OverlayState};
use crate::input::gui::errors::GuiError;

pub struct GuiApp<T: GuiPresenterPort> {
    presenter: T,
    session: ViewSession,
    pointer: PointerTracker,
    overlay: OverlayState,
    pub scale_factor: f64,
    pub egui_ctx: Context,
    pub egui_state: EguiWinitState,
}

impl<T: GuiPresenterPort> GuiApp<T> {
    pub fn new(
        window: &'static Window,
        event_loop: &EventLoop<()>,
        presenter: T,
        controller: InteractionController,
        viewport: ViewportState,
        max_iterations: u32,
    ) -> Self {
        let scale_factor = window.scale_factor();
        let egui_ctx = Context::default();

        let egui_state = EguiWinitState::new(
            egui_ctx.clone(),
            egui_ctx.viewport_id(),
            event_loop,
            Some(scale_factor as f32),
            None,
        );

        Self {
            presenter,
            session: ViewSession::new(controller, viewport, max_iterations),
            pointer: PointerTracker::default(),
            overlay: OverlayState::default(),
            scale_factor,
            egui_ctx,
            egui_state,
        }
    }

    /// Feeds the event to egui first. Returns whether egui consumed it.
    pub fn handle_window_event(&mut self, window: &Window, event: &WindowEvent) -> bool {
        self.egui_state.on_window_event(window, event).consumed
    }

    /// Queues the input meaning of a window event for the next frame.
    pub fn queue_window_event(&mut self, event: &WindowEvent, egui_consumed: bool) {
        let Some(action) = translate_window_event(event, &mut self.pointer) else {
            return;
        };

        if egui_consumed && !survives_egui_capture(&action) {
            return;
        }

        match action {
            GuiAction::Input(input) => self.session.push(input),
            GuiAction::ToggleOverlay => {
                self.overlay.toggle();
                debug!("overlay visible: {}", self.overlay.visible);
            }
        }
    }

    /// Applies queued input without drawing, so a quit is seen even while
    /// no redraw is pending.
    pub fn apply_pending_input(&mut self) -> RunSignal {
        self.session.apply_pending()
    }

    /// Applies all queued input, then draws the resulting view.
    pub fn redraw(&mut self, window: &Window) -> Result<RunSignal, GuiError> {
        let uniforms = match self.session.begin_frame() {
            FrameStep::Render(uniforms) => uniforms,
            FrameStep::Quit => return Ok(RunSignal::Quit),
        };

        self.overlay.record_frame(Instant::now());

        let egui_output = self.update_ui(window);
        self.egui_state
            .handle_platform_output(window, egui_output.platform_output.clone());

        self.presenter.render(&uniforms, egui_output, &self.egui_ctx)?;

        Ok(RunSignal::Continue)
    }

    /// Follows the surface size. The plane extent keeps its startup value so
    /// a resize stretches the image instead of revealing more of the plane.
    pub fn resize(&mut self, width: u32, height: u32) -> Result<(), GuiError> {
        let Ok(screen) = ScreenSize::new(width, height) else {
            debug!("ignoring resize to {}x{}", width, height);
            return Ok(());
        };

        info!("surface resized to {}x{}", width, height);
        self.presenter.resize(width, height)?;
        self.session.controller_mut().set_screen(screen);

        Ok(())
    }

    pub fn set_scale_factor(&mut self, scale_factor: f64, window: &Window) -> Result<(), GuiError> {
        self.scale_factor = scale_factor;
        self.egui_ctx.set_pixels_per_point(scale_factor as f32);

        let size = window.inner_size();
        self.resize(size.width, size.height)
    }

    fn update_ui(&mut self, window: &Window) -> egui::FullOutput {
        let raw_input = self.egui_state.take_egui_input(window);
        let visible = self.overlay.visible;
        let snapshot = OverlaySnapshot::capture(
            self.session.viewport(),
            &self.session.controller().extent(),
            self.session.controller().screen(),
            self.session.max_iterations(),
            self.overlay.frame_time(),
            self.pointer.position(),
        );
        let mut reset_clicked = false;

        let output = self.egui_ctx.run(raw_input, |ctx| {
            if visible {
                show_overlay(ctx, &snapshot, &mut reset_clicked);
            }
        });

        if reset_clicked {
            self.session.push(InputEvent::ResetView);
        }

        output
    }
}

fn show_overlay(ctx: &Context, snapshot: &OverlaySnapshot, reset_clicked: &mut bool) {
    egui::Window::new("View")
        .default_pos([10.0, 10.0])
        .resizable(false)
        .show(ctx, |ui| {
            ui.label(format!("Zoom: {:.6e}", snapshot.viewport.zoom));
            ui.label(format!(
                "Centre: {:.12} {:+.12}i",
                snapshot.viewport.center.real, snapshot.viewport.center.imag
            ));
            ui.label(format!("Max iterations: {}", snapshot.max_iterations));
            ui.label(format!(
                "Surface: {}x{}",
                snapshot.screen.width(),
                snapshot.screen.height()
            ));

            if let Some(frame_time) = snapshot.frame_time {
                ui.label(format!("Frame time: {:.2} ms", frame_time.as_secs_f64() * 1000.0));
            }

            ui.separator();
            match snapshot.pointer {
                Some(readout) => {
                    ui.label(format!(
                        "Pointer: {:.8} {:+.8}i",
                        readout.point.real, readout.point.imag
                    ));
                    ui.label(format!("Escape fraction: {:.3}", readout.escape_fraction));
                }
                None => {
                    ui.label("Pointer: outside window");
                }
            }

            if snapshot.precision_limited {
                ui.separator();
                ui.colored_label(
                    egui::Color32::LIGHT_RED,
                    "Single-precision limit reached, detail is lost",
                );
            }

            ui.separator();
            if ui.button("Reset view").clicked() {
                *reset_clicked = true;
            }
            ui.label("Drag to pan, scroll to zoom, R to reset, H to hide, Q to quit");
        });
}
