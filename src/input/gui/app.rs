//! Frame loop of the explorer window.

pub mod event_translation;
pub mod gui_app;
pub mod ports;
pub mod session;
pub mod state;

use log::{error, info};
use winit::event::{Event, WindowEvent};
use winit::event_loop::EventLoop;
use winit::window::Window;

use crate::core::interaction::events::RunSignal;
use crate::input::gui::app::gui_app::GuiApp;
use crate::input::gui::app::ports::presenter::GuiPresenterPort;
use crate::input::gui::errors::GuiError;

/// Runs until the controller signals quit or rendering fails.
///
/// Window events are queued as they arrive. Each redraw applies the queue
/// before drawing, so a frame always shows the view after all input
/// delivered so far. The queue is also applied when the loop goes idle, so
/// a quit is seen even while no redraw is pending.
pub fn run<T: GuiPresenterPort>(
    mut app: GuiApp<T>,
    window: &'static Window,
    event_loop: EventLoop<()>,
) -> Result<(), GuiError> {
    let mut failure: Option<GuiError> = None;

    event_loop.run(|event, elwt| match event {
        Event::WindowEvent {
            ref event,
            window_id,
        } if window_id == window.id() => {
            let egui_consumed = app.handle_window_event(window, event);

            let result = match event {
                WindowEvent::RedrawRequested => match app.redraw(window) {
                    Ok(RunSignal::Quit) => {
                        info!("shutting down");
                        elwt.exit();
                        Ok(())
                    }
                    Ok(RunSignal::Continue) => Ok(()),
                    Err(err) => Err(err),
                },
                WindowEvent::Resized(size) => app.resize(size.width, size.height),
                WindowEvent::ScaleFactorChanged { scale_factor, .. } => {
                    app.set_scale_factor(*scale_factor, window)
                }
                _ => {
                    app.queue_window_event(event, egui_consumed);
                    Ok(())
                }
            };

            if let Err(err) = result {
                error!("{}", err);
                failure = Some(err);
                elwt.exit();
            }
        }
        Event::AboutToWait => {
            if app.apply_pending_input() == RunSignal::Quit {
                info!("shutting down");
                elwt.exit();
            } else {
                window.request_redraw();
            }
        }
        _ => {}
    })?;

    failure.map_or(Ok(()), Err)
}
