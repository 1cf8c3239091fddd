//! Overlay view and drawing.

pub mod drawing;
pub mod view;

pub use drawing::{draw_border, draw_overlay};
pub use view::{create_overlay_view, set_frame_state};
