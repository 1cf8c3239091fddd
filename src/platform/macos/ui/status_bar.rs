//! Status bar (menu bar) item.
//!
//! The menu is rebuilt from `MenuModel` whenever the render state changes.
//! Each item's tag indexes the event table of the last build; the overlay
//! view is the target and publishes the event on selection.

use std::cell::RefCell;

use crate::events::AppEvent;
use crate::model::{MenuEntry, MenuModel};
use crate::platform::macos::ffi::bridge::{get_class, id, msg_send, nil, nsstring_id, sel, Sel, NO};

thread_local! {
    static MENU_EVENTS: RefCell<Vec<AppEvent>> = const { RefCell::new(Vec::new()) };
}

/// Event published by the item with `tag`, from the last build.
pub fn event_for_tag(tag: isize) -> Option<AppEvent> {
    let index = usize::try_from(tag).ok()?;
    MENU_EVENTS.with(|events| events.borrow().get(index).copied())
}

/// NSControlStateValueOn / Off
const STATE_ON: isize = 1;
const STATE_OFF: isize = 0;

/// # Safety
/// Main thread only.
pub unsafe fn install_status_item() -> id {
    let status_bar: id = msg_send![get_class("NSStatusBar"), systemStatusBar];
    // NSVariableStatusItemLength = -1.0
    let item: id = msg_send![status_bar, statusItemWithLength: -1.0f64];
    let _: id = msg_send![item, retain];

    let button: id = msg_send![item, button];
    if button != nil {
        let symbol: id = msg_send![
            get_class("NSImage"),
            imageWithSystemSymbolName: nsstring_id("eye"),
            accessibilityDescription: nsstring_id("Pace")
        ];
        if symbol != nil {
            let _: () = msg_send![button, setImage: symbol];
        } else {
            let _: () = msg_send![button, setTitle: nsstring_id("Pace")];
        }
    }
    item
}

/// Replace the status item's menu with one built from `model`.
///
/// # Safety
/// Main thread only; `target` must respond to `menuItemSelected:`.
pub unsafe fn rebuild_menu(status_item: id, model: &MenuModel, target: id) {
    let menu: id = msg_send![get_class("NSMenu"), alloc];
    let menu: id = msg_send![menu, init];
    let _: () = msg_send![menu, setAutoenablesItems: NO];

    let mut events = Vec::new();
    for entry in &model.entries {
        let item: id = match entry {
            MenuEntry::Separator => msg_send![get_class("NSMenuItem"), separatorItem],
            MenuEntry::Header(title) => {
                let header: id = msg_send![get_class("NSMenuItem"), alloc];
                let header: id = msg_send![
                    header,
                    initWithTitle: nsstring_id(title),
                    action: Option::<Sel>::None,
                    keyEquivalent: nsstring_id("")
                ];
                let _: () = msg_send![header, setEnabled: NO];
                header
            }
            MenuEntry::Item {
                title,
                event,
                checked,
                hotkey,
            } => {
                let label = match hotkey {
                    Some(chord) => format!("{title}    {chord}"),
                    None => title.clone(),
                };
                let mi: id = msg_send![get_class("NSMenuItem"), alloc];
                let mi: id = msg_send![
                    mi,
                    initWithTitle: nsstring_id(&label),
                    action: sel!(menuItemSelected:),
                    keyEquivalent: nsstring_id("")
                ];
                let _: () = msg_send![mi, setTarget: target];
                let _: () = msg_send![mi, setTag: events.len() as isize];
                let _: () = msg_send![mi, setState: if *checked { STATE_ON } else { STATE_OFF }];
                events.push(*event);
                mi
            }
        };
        let _: () = msg_send![menu, addItem: item];
    }

    MENU_EVENTS.with(|slot| *slot.borrow_mut() = events);
    let _: () = msg_send![status_item, setMenu: menu];
}
