pub mod reference_render;
