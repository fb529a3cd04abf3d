pub mod controller;
pub mod drag;
pub mod events;
pub mod limits;

pub use controller::InteractionController;
pub use drag::DragState;
pub use events::{InputEvent, Key, PointerButton, RunSignal};
pub use limits::InteractionLimits;
