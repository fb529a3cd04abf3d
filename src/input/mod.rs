//! Input adapters for the explorer.

#[cfg(feature = "gui")]
pub mod gui;
