use crate::core::data::point::PixelPosition;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    Primary,
    Secondary,
    Middle,
    Other(u16),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Q,
    Escape,
    R,
    Other,
}

/// Input as delivered by the window host, already stripped of
/// platform-specific detail.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// The window was asked to close.
    Quit,
    KeyDown(Key),
    /// Wheel movement; positive `dy` is away from the user.
    Scroll { dy: f64, pointer: PixelPosition },
    ButtonDown(PointerButton),
    ButtonUp(PointerButton),
    /// Pointer displacement in pixels since the previous motion event.
    PointerMotion { dx: f64, dy: f64 },
    /// Return to the configured home view.
    ResetView,
}

/// Outcome of processing input, checked by the frame loop before it renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunSignal {
    Continue,
    Quit,
}
