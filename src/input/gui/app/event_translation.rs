//! Maps winit window events onto the platform-free [`InputEvent`] vocabulary.

use winit::dpi::PhysicalPosition;
use winit::event::{ElementState, MouseButton, MouseScrollDelta, WindowEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

use crate::core::data::point::PixelPosition;
use crate::core::interaction::events::{InputEvent, Key, PointerButton};

/// What a window event means to the app.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GuiAction {
    Input(InputEvent),
    ToggleOverlay,
}

/// Last known cursor position, used to turn absolute cursor positions into
/// motion deltas and to anchor wheel zooms.
#[derive(Debug, Default, Clone, Copy)]
pub struct PointerTracker {
    position: Option<PixelPosition>,
}

impl PointerTracker {
    #[must_use]
    pub fn position(&self) -> Option<PixelPosition> {
        self.position
    }

    /// Records the new position and returns the displacement from the
    /// previous one, if there was one.
    pub fn moved_to(&mut self, position: PhysicalPosition<f64>) -> Option<(f64, f64)> {
        let next = PixelPosition::new(position.x, position.y);
        let delta = self.position.map(|prev| (next.x - prev.x, next.y - prev.y));

        self.position = Some(next);
        delta
    }

    pub fn left(&mut self) {
        self.position = None;
    }
}

pub fn map_button(button: MouseButton) -> PointerButton {
    match button {
        MouseButton::Left => PointerButton::Primary,
        MouseButton::Right => PointerButton::Secondary,
        MouseButton::Middle => PointerButton::Middle,
        MouseButton::Back => PointerButton::Other(3),
        MouseButton::Forward => PointerButton::Other(4),
        MouseButton::Other(id) => PointerButton::Other(id),
    }
}

pub fn map_key(key: PhysicalKey) -> GuiAction {
    let key = match key {
        PhysicalKey::Code(KeyCode::KeyH) => return GuiAction::ToggleOverlay,
        PhysicalKey::Code(KeyCode::KeyQ) => Key::Q,
        PhysicalKey::Code(KeyCode::Escape) => Key::Escape,
        PhysicalKey::Code(KeyCode::KeyR) => Key::R,
        _ => Key::Other,
    };

    GuiAction::Input(InputEvent::KeyDown(key))
}

/// Vertical wheel travel, positive away from the user.
pub fn scroll_dy(delta: MouseScrollDelta) -> f64 {
    match delta {
        MouseScrollDelta::LineDelta(_, y) => f64::from(y),
        MouseScrollDelta::PixelDelta(position) => position.y,
    }
}

pub fn translate_window_event(
    event: &WindowEvent,
    pointer: &mut PointerTracker,
) -> Option<GuiAction> {
    match event {
        WindowEvent::CloseRequested => Some(GuiAction::Input(InputEvent::Quit)),
        WindowEvent::KeyboardInput { event, .. } => {
            if event.state == ElementState::Pressed && !event.repeat {
                Some(map_key(event.physical_key))
            } else {
                None
            }
        }
        WindowEvent::MouseWheel { delta, .. } => {
            let dy = scroll_dy(*delta);

            // horizontal-only scrolling carries no zoom
            if dy == 0.0 {
                return None;
            }

            pointer
                .position()
                .map(|pointer| GuiAction::Input(InputEvent::Scroll { dy, pointer }))
        }
        WindowEvent::MouseInput { state, button, .. } => {
            let button = map_button(*button);

            Some(GuiAction::Input(match state {
                ElementState::Pressed => InputEvent::ButtonDown(button),
                ElementState::Released => InputEvent::ButtonUp(button),
            }))
        }
        WindowEvent::CursorMoved { position, .. } => pointer
            .moved_to(*position)
            .map(|(dx, dy)| GuiAction::Input(InputEvent::PointerMotion { dx, dy })),
        WindowEvent::CursorLeft { .. } => {
            pointer.left();
            None
        }
        _ => None,
    }
}

/// Input that still has to reach the controller when egui claimed the event.
pub fn survives_egui_capture(action: &GuiAction) -> bool {
    matches!(
        action,
        GuiAction::Input(InputEvent::Quit | InputEvent::ButtonUp(_))
    )
}
