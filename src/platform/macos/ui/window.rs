//! Borderless window creation shared by the overlay, focus and flash
//! windows.

use crate::platform::macos::ffi::bridge::{
    get_class, id, msg_send, nil, AnyClass, NSBackingStoreType, NSRect,
    NSWindowCollectionBehavior, NSWindowStyleMask, NO, YES,
};

/// NSFloatingWindowLevel
pub const OVERLAY_WINDOW_LEVEL: i64 = 3;
/// Above the overlay so the writing window covers it.
pub const FOCUS_WINDOW_LEVEL: i64 = OVERLAY_WINDOW_LEVEL + 1;
/// NSStatusWindowLevel
pub const FLASH_WINDOW_LEVEL: i64 = 25;

/// Borderless, clear window covering `frame`.
///
/// `click_through` windows ignore the mouse entirely.
///
/// # Safety
/// Main thread with a valid autorelease pool.
pub unsafe fn make_borderless_window(frame: NSRect, level: i64, click_through: bool) -> id {
    make_borderless_window_of(get_class("NSWindow"), frame, level, click_through)
}

/// Like [`make_borderless_window`] with an NSWindow subclass.
///
/// # Safety
/// `class` must be NSWindow or a subclass. Main thread only.
pub unsafe fn make_borderless_window_of(
    class: &AnyClass,
    frame: NSRect,
    level: i64,
    click_through: bool,
) -> id {
    let window: id = msg_send![class, alloc];
    let window: id = msg_send![
        window,
        initWithContentRect: frame,
        styleMask: NSWindowStyleMask::Borderless,
        backing: NSBackingStoreType::Buffered,
        defer: NO
    ];
    let _: () = msg_send![window, setReleasedWhenClosed: NO];
    let _: () = msg_send![window, setOpaque: NO];
    let clear: id = msg_send![get_class("NSColor"), clearColor];
    let _: () = msg_send![window, setBackgroundColor: clear];
    let _: () = msg_send![window, setHasShadow: NO];
    if click_through {
        let _: () = msg_send![window, setIgnoresMouseEvents: YES];
    }
    let _: () = msg_send![window, setLevel: level];

    let behavior = NSWindowCollectionBehavior::CanJoinAllSpaces
        | NSWindowCollectionBehavior::Stationary
        | NSWindowCollectionBehavior::FullScreenAuxiliary;
    let _: () = msg_send![window, setCollectionBehavior: behavior];
    window
}

/// Move `window` onto `frame` if it is not already there.
///
/// # Safety
/// `window` must be a valid NSWindow. Main thread only.
pub unsafe fn move_to_frame(window: id, frame: NSRect) {
    let current: NSRect = msg_send![window, frame];
    if current != frame {
        let _: () = msg_send![window, setFrame: frame, display: YES];
    }
}

/// # Safety
/// `window` must be a valid NSWindow. Main thread only.
pub unsafe fn set_window_shown(window: id, shown: bool) {
    let visible: bool = msg_send![window, isVisible];
    if shown && !visible {
        let _: () = msg_send![window, orderFrontRegardless];
    } else if !shown && visible {
        let _: () = msg_send![window, orderOut: nil];
    }
}
