//! Global hotkey bindings.
//!
//! The table is pure data; `platform::macos::input::hotkeys` registers each
//! entry with Carbon and publishes the bound event when it fires.

use crate::events::AppEvent;

/// Modifier keys of a chord.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Modifiers {
    pub control: bool,
    pub option: bool,
    pub command: bool,
    pub shift: bool,
}

impl Modifiers {
    pub const CONTROL_OPTION: Modifiers = Modifiers {
        control: true,
        option: true,
        command: false,
        shift: false,
    };

    /// Menu-style glyphs in the conventional macOS order.
    pub fn symbols(&self) -> String {
        let mut s = String::new();
        if self.control {
            s.push('⌃');
        }
        if self.option {
            s.push('⌥');
        }
        if self.shift {
            s.push('⇧');
        }
        if self.command {
            s.push('⌘');
        }
        s
    }
}

/// One global chord and the event it publishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HotkeyBinding {
    /// Identifier handed to the OS and echoed back on press.
    pub id: u32,
    /// Printable key, used for menu hints.
    pub key: char,
    /// ANSI virtual key code.
    pub key_code: u32,
    pub modifiers: Modifiers,
    pub event: AppEvent,
}

impl HotkeyBinding {
    /// Human-readable chord, e.g. `⌃⌥M`.
    pub fn display(&self) -> String {
        format!("{}{}", self.modifiers.symbols(), self.key)
    }
}

/// The five fixed bindings.
pub const HOTKEY_BINDINGS: [HotkeyBinding; 5] = [
    HotkeyBinding {
        id: 1,
        key: 'M',
        key_code: 46,
        modifiers: Modifiers::CONTROL_OPTION,
        event: AppEvent::CycleMode,
    },
    HotkeyBinding {
        id: 2,
        key: 'S',
        key_code: 1,
        modifiers: Modifiers::CONTROL_OPTION,
        event: AppEvent::CycleSize,
    },
    HotkeyBinding {
        id: 3,
        key: 'O',
        key_code: 31,
        modifiers: Modifiers::CONTROL_OPTION,
        event: AppEvent::TurnOff,
    },
    HotkeyBinding {
        id: 4,
        key: 'B',
        key_code: 11,
        modifiers: Modifiers::CONTROL_OPTION,
        event: AppEvent::CycleBackground,
    },
    HotkeyBinding {
        id: 5,
        key: 'F',
        key_code: 3,
        modifiers: Modifiers::CONTROL_OPTION,
        event: AppEvent::ToggleFocusMessage,
    },
];

/// Binding with the given id.
pub fn binding_by_id(id: u32) -> Option<&'static HotkeyBinding> {
    HOTKEY_BINDINGS.iter().find(|b| b.id == id)
}

/// Binding that publishes `event`, if any.
pub fn binding_for_event(event: AppEvent) -> Option<&'static HotkeyBinding> {
    HOTKEY_BINDINGS.iter().find(|b| b.event == event)
}
