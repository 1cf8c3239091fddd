//! Carbon Event Manager declarations for global hotkeys.

use std::ffi::c_void;

use crate::model::Modifiers;

pub type EventTargetRef = *mut c_void;
pub type EventHandlerRef = *mut c_void;
pub type EventRef = *mut c_void;
pub type EventHandlerCallRef = *mut c_void;
pub type EventHotKeyRef = *mut c_void;
pub type EventHandlerUPP = extern "C" fn(EventHandlerCallRef, EventRef, *mut c_void) -> i32;

#[repr(C)]
#[derive(Copy, Clone)]
pub struct EventTypeSpec {
    pub event_class: u32,
    pub event_kind: u32,
}

#[repr(C)]
#[derive(Copy, Clone)]
pub struct EventHotKeyID {
    pub signature: u32,
    pub id: u32,
}

pub const NO_ERR: i32 = 0;
pub const K_EVENT_CLASS_KEYBOARD: u32 = 0x6B65_7962; // 'keyb'
pub const K_EVENT_HOTKEY_PRESSED: u32 = 6;
pub const K_EVENT_PARAM_DIRECT_OBJECT: u32 = 0x2D2D_2D2D; // '----'
pub const TYPE_EVENT_HOTKEY_ID: u32 = 0x686B_6964; // 'hkid'

pub const CMD_KEY: u32 = 1 << 8;
pub const SHIFT_KEY: u32 = 1 << 9;
pub const OPTION_KEY: u32 = 1 << 11;
pub const CONTROL_KEY: u32 = 1 << 12;

/// Hotkey signature: 'pace'
pub const SIG_PACE: u32 = 0x7061_6365;

/// Carbon modifier mask for a chord.
pub fn carbon_modifiers(m: Modifiers) -> u32 {
    let mut mask = 0;
    if m.command {
        mask |= CMD_KEY;
    }
    if m.shift {
        mask |= SHIFT_KEY;
    }
    if m.option {
        mask |= OPTION_KEY;
    }
    if m.control {
        mask |= CONTROL_KEY;
    }
    mask
}

#[link(name = "Carbon", kind = "framework")]
extern "C" {
    pub fn RegisterEventHotKey(
        inHotKeyCode: u32,
        inHotKeyModifiers: u32,
        inHotKeyID: EventHotKeyID,
        inTarget: EventTargetRef,
        inOptions: u32,
        outRef: *mut EventHotKeyRef,
    ) -> i32;

    pub fn UnregisterEventHotKey(inHotKeyRef: EventHotKeyRef) -> i32;

    pub fn InstallEventHandler(
        inTarget: EventTargetRef,
        inHandler: EventHandlerUPP,
        inNumTypes: u32,
        inList: *const EventTypeSpec,
        inUserData: *mut c_void,
        outRef: *mut EventHandlerRef,
    ) -> i32;

    pub fn RemoveEventHandler(inHandlerRef: EventHandlerRef) -> i32;

    pub fn GetApplicationEventTarget() -> EventTargetRef;

    pub fn GetEventClass(inEvent: EventRef) -> u32;
    pub fn GetEventKind(inEvent: EventRef) -> u32;

    pub fn GetEventParameter(
        inEvent: EventRef,
        inName: u32,
        inDesiredType: u32,
        outActualType: *mut u32,
        inBufferSize: u32,
        outActualSize: *mut u32,
        outData: *mut c_void,
    ) -> i32;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn control_option_mask() {
        assert_eq!(
            carbon_modifiers(Modifiers::CONTROL_OPTION),
            CONTROL_KEY | OPTION_KEY
        );
    }

    #[test]
    fn signature_spells_pace() {
        assert_eq!(&SIG_PACE.to_be_bytes(), b"pace");
    }
}
