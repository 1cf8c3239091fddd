//! Cursor tracking: pointer sampling, coordinate flipping, deadband and
//! ease-out animation. Platform-independent; the macOS sampler lives in
//! `platform::macos::input::pointer`.

pub mod animation;
pub mod pointer;

pub use animation::{ease_out, EasedPoint};
pub use pointer::{
    flip_to_top_left, screen_for_point, CursorTracker, PointerSource, TrackedPosition,
};
