//! Carbon hotkey management.
//!
//! Registers every entry of `HOTKEY_BINDINGS`. The handler only publishes
//! the bound `AppEvent`; the main-thread timer does the rest.

use std::ffi::c_void;

use tracing::{debug, warn};

use crate::events::publish;
use crate::model::{binding_by_id, HOTKEY_BINDINGS};
use crate::platform::macos::ffi::{
    carbon_modifiers, EventHandlerCallRef, EventHandlerRef, EventHotKeyID, EventHotKeyRef,
    EventRef, EventTypeSpec, GetApplicationEventTarget, GetEventClass, GetEventKind,
    GetEventParameter, InstallEventHandler, RegisterEventHotKey, RemoveEventHandler,
    UnregisterEventHotKey, K_EVENT_CLASS_KEYBOARD, K_EVENT_HOTKEY_PRESSED,
    K_EVENT_PARAM_DIRECT_OBJECT, NO_ERR, SIG_PACE, TYPE_EVENT_HOTKEY_ID,
};

/// Live Carbon registrations. Dropping without `uninstall` leaks them until
/// process exit, which is harmless.
#[derive(Debug)]
pub struct HotkeyRegistration {
    handler: EventHandlerRef,
    hotkeys: Vec<EventHotKeyRef>,
}

impl HotkeyRegistration {
    pub fn registered(&self) -> usize {
        self.hotkeys.len()
    }

    /// Unregister all hotkeys and the handler. Idempotent.
    ///
    /// # Safety
    /// Main thread only.
    pub unsafe fn uninstall(&mut self) {
        for hk in self.hotkeys.drain(..) {
            let _ = UnregisterEventHotKey(hk);
        }
        if !self.handler.is_null() {
            let _ = RemoveEventHandler(self.handler);
            self.handler = std::ptr::null_mut();
        }
    }
}

/// Install the handler and register every binding. Failures are logged and
/// skipped so one taken chord does not disable the others.
///
/// # Safety
/// Main thread only.
pub unsafe fn install_hotkeys() -> Option<HotkeyRegistration> {
    let types = [EventTypeSpec {
        event_class: K_EVENT_CLASS_KEYBOARD,
        event_kind: K_EVENT_HOTKEY_PRESSED,
    }];
    let mut handler: EventHandlerRef = std::ptr::null_mut();
    let status = InstallEventHandler(
        GetApplicationEventTarget(),
        hotkey_event_handler,
        types.len() as u32,
        types.as_ptr(),
        std::ptr::null_mut(),
        &mut handler,
    );
    if status != NO_ERR {
        warn!(status, "InstallEventHandler failed, global hotkeys disabled");
        return None;
    }

    let mut hotkeys = Vec::with_capacity(HOTKEY_BINDINGS.len());
    for binding in HOTKEY_BINDINGS.iter() {
        let hk_id = EventHotKeyID {
            signature: SIG_PACE,
            id: binding.id,
        };
        let mut out: EventHotKeyRef = std::ptr::null_mut();
        let st = RegisterEventHotKey(
            binding.key_code,
            carbon_modifiers(binding.modifiers),
            hk_id,
            GetApplicationEventTarget(),
            0,
            &mut out,
        );
        if st != NO_ERR || out.is_null() {
            warn!(hotkey = %binding.display(), status = st, "RegisterEventHotKey failed");
        } else {
            debug!(hotkey = %binding.display(), "hotkey registered");
            hotkeys.push(out);
        }
    }
    Some(HotkeyRegistration { handler, hotkeys })
}

/// Called by Carbon when a registered chord is pressed. Must not panic.
extern "C" fn hotkey_event_handler(
    _call_ref: EventHandlerCallRef,
    event: EventRef,
    _user_data: *mut c_void,
) -> i32 {
    unsafe {
        if GetEventClass(event) != K_EVENT_CLASS_KEYBOARD
            || GetEventKind(event) != K_EVENT_HOTKEY_PRESSED
        {
            return NO_ERR;
        }
        let mut hot_id = EventHotKeyID {
            signature: 0,
            id: 0,
        };
        let status = GetEventParameter(
            event,
            K_EVENT_PARAM_DIRECT_OBJECT,
            TYPE_EVENT_HOTKEY_ID,
            std::ptr::null_mut(),
            std::mem::size_of::<EventHotKeyID>() as u32,
            std::ptr::null_mut(),
            &mut hot_id as *mut _ as *mut c_void,
        );
        if status == NO_ERR && hot_id.signature == SIG_PACE {
            if let Some(binding) = binding_by_id(hot_id.id) {
                publish(binding.event);
            }
        }
        NO_ERR
    }
}
