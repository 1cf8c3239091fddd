#![allow(unexpected_cfgs)] // Silence cfg warnings from objc macros

//! Pace: a reading-focus overlay.
//!
//! Everything outside `platform` is plain Rust with no FFI so it builds and
//! tests on any host. The macOS shell in `platform::macos` only binds that
//! core to AppKit and Carbon.

pub mod analytics;
pub mod app;
pub mod events;
pub mod model;
pub mod storage;
pub mod tracking;

#[cfg(target_os = "macos")]
pub mod platform;

pub use app::{Flow, PaceController, RenderState};
pub use events::{AppEvent, EventBus, EventPublisher};
pub use model::{AppState, BackgroundStyle, FocusConfiguration, FocusMode, FocusSize};
pub use storage::StoreError;
