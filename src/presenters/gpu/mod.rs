pub mod factory;
pub mod pipeline;
pub mod presenter;
