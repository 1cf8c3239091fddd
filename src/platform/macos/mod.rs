//! macOS shell using AppKit via objc2 and Carbon for hotkeys.
//!
//! - `ffi`: message-sending helpers and Carbon declarations
//! - `storage`: NSUserDefaults-backed `PreferenceStore`
//! - `input`: hotkeys, pointer sampling, lifecycle observers
//! - `ui`: windows, views, status bar
//! - `handlers`: applies controller output to the UI
//! - `app`: main-thread runtime owning the controller

pub mod app;
pub mod ffi;
pub mod handlers;
pub mod input;
pub mod storage;
pub mod ui;
