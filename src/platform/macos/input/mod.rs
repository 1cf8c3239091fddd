//! Input handling module.
//!
//! - hotkeys.rs: Carbon hotkey registration and handling
//! - observers.rs: application termination
//! - pointer.rs: `PointerSource` over NSEvent/NSScreen

pub mod hotkeys;
pub mod observers;
pub mod pointer;

pub use hotkeys::{install_hotkeys, HotkeyRegistration};
pub use observers::install_termination_observer;
pub use pointer::CocoaPointerSource;
