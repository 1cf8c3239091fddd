//! First-run welcome: a single alert listing the shortcuts.

use crate::model::{Cyclic, FocusMode, HOTKEY_BINDINGS};
use crate::platform::macos::ffi::bridge::{get_class, id, msg_send, nsstring_id, NSApp, YES};

/// Body text of the welcome alert.
pub fn onboarding_text() -> String {
    let modes: Vec<&str> = FocusMode::ALL.iter().map(|m| m.label()).collect();

    let mut text = format!(
        "Pace dims everything except the area around your cursor.\n\nModes: {}.\n\nShortcuts:\n",
        modes.join(", ")
    );
    for binding in HOTKEY_BINDINGS.iter() {
        text.push_str(&format!(
            "  {}  {}\n",
            binding.display(),
            binding.event.description()
        ));
    }
    text.push_str("\nEverything is also available from the menu bar icon.");
    text
}

/// Show the welcome alert modally.
///
/// # Safety
/// Main thread only, before or outside any controller borrow.
pub unsafe fn show_onboarding() {
    let app: id = NSApp();
    let _: () = msg_send![app, activateIgnoringOtherApps: YES];

    let alert: id = msg_send![get_class("NSAlert"), alloc];
    let alert: id = msg_send![alert, init];
    let _: () = msg_send![alert, setMessageText: nsstring_id("Welcome to Pace")];
    let _: () = msg_send![alert, setInformativeText: nsstring_id(&onboarding_text())];
    let _: id = msg_send![alert, addButtonWithTitle: nsstring_id("Get Started")];
    let _: isize = msg_send![alert, runModal];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn welcome_text_lists_modes_and_chords() {
        let text = onboarding_text();
        assert!(text.contains("James Bond"));
        for binding in HOTKEY_BINDINGS.iter() {
            assert!(text.contains(&binding.display()));
        }
    }
}
