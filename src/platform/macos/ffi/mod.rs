//! Raw bindings: objc2 message-sending helpers and Carbon hotkeys.

pub mod bridge;
pub mod carbon;

pub use carbon::*;
