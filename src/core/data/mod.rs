pub mod colour;
pub mod complex;
pub mod pixel_buffer;
pub mod point;
pub mod screen_size;
pub mod view_extent;
pub mod viewport;
