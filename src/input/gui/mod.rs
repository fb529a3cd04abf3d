//! Windowed front end: winit for the window and input, a wgpu pipeline for
//! the fractal, egui for the status overlay.

pub mod app;
pub mod commands;
pub mod errors;
pub mod window_config;
