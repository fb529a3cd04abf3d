/// Whether the primary button is currently held, turning pointer motion into
/// panning.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DragState {
    pub active: bool,
}
