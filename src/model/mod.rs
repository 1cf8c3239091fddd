//! Application domain model.
//!
//! This module contains pure business logic (no FFI dependencies):
//! focus settings and their cycling, configuration resolution and legacy
//! migration, geometry and mask shapes, visibility state, the hotkey table
//! and the menu model.
//!
//! Persistence is in `storage`; the NSUserDefaults backend is in
//! `platform::macos::storage`.

pub mod app_state;
pub mod configuration;
pub mod constants;
pub mod focus;
pub mod geometry;
pub mod hotkeys;
pub mod menu;
pub mod shape;

pub use app_state::AppState;
pub use configuration::{migrate_legacy_mode, FocusConfiguration, FocusGeometry, RawSettings};
pub use constants::*;
pub use focus::{cycle_next, BackgroundStyle, Cyclic, FocusMode, FocusSize, Rgba};
pub use geometry::{Point, Rect, Size};
pub use hotkeys::{binding_by_id, binding_for_event, HotkeyBinding, Modifiers, HOTKEY_BINDINGS};
pub use menu::{MenuEntry, MenuModel};
pub use shape::{resolve_mask, MaskRegion};
