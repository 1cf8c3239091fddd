//! The focus-writing window: full screen black with a single plain-text
//! editor in the middle. It is created once and hidden/shown, so whatever
//! was typed survives toggling.

use objc2::runtime::{AnyClass, AnyObject, Bool, ClassBuilder, Sel};
use objc2::sel;

use super::window::{make_borderless_window_of, move_to_frame, FOCUS_WINDOW_LEVEL};
use crate::platform::macos::ffi::bridge::{
    get_class, id, msg_send, nil, nsstring_id, NSApp, NSPoint, NSRect, NSSize, NO, YES,
};

const EDITOR_SIZE: (f64, f64) = (700.0, 450.0);
const PROMPT: &str = "Write a focused message";

/// Borderless windows refuse key status unless told otherwise.
unsafe fn key_window_class() -> &'static AnyClass {
    if let Some(cls) = AnyClass::get(c"PaceFocusWindow") {
        return cls;
    }
    let superclass = AnyClass::get(c"NSWindow").unwrap_or_else(|| panic!("NSWindow not found"));
    let mut builder = ClassBuilder::new(c"PaceFocusWindow", superclass)
        .unwrap_or_else(|| panic!("PaceFocusWindow already declared"));
    builder.add_method(
        sel!(canBecomeKeyWindow),
        can_become_key as unsafe extern "C-unwind" fn(_, _) -> _,
    );
    builder.register()
}

unsafe extern "C-unwind" fn can_become_key(_this: &AnyObject, _cmd: Sel) -> Bool {
    YES
}

/// Handle to the window and its editor.
#[derive(Debug)]
pub struct FocusWindow {
    window: id,
    editor: id,
}

impl FocusWindow {
    /// # Safety
    /// Main thread with a valid autorelease pool.
    pub unsafe fn new(frame: NSRect) -> Self {
        let window =
            make_borderless_window_of(key_window_class(), frame, FOCUS_WINDOW_LEVEL, false);

        let black: id = msg_send![get_class("NSColor"), blackColor];
        let _: () = msg_send![window, setBackgroundColor: black];
        let _: () = msg_send![window, setOpaque: YES];

        let content: id = msg_send![window, contentView];
        let w = frame.size.width;
        let h = frame.size.height;
        let editor_origin = NSPoint::new((w - EDITOR_SIZE.0) / 2.0, (h - EDITOR_SIZE.1) / 2.0);

        let label: id = msg_send![get_class("NSTextField"), labelWithString: nsstring_id(PROMPT)];
        let font: id = msg_send![get_class("NSFont"), systemFontOfSize: 13.0f64];
        let dim: id = msg_send![get_class("NSColor"), colorWithCalibratedWhite: 1.0f64, alpha: 0.4f64];
        let _: () = msg_send![label, setFont: font];
        let _: () = msg_send![label, setTextColor: dim];
        let label_frame = NSRect::new(
            NSPoint::new(editor_origin.x, editor_origin.y + EDITOR_SIZE.1 + 20.0),
            NSSize::new(EDITOR_SIZE.0, 20.0),
        );
        let _: () = msg_send![label, setFrame: label_frame];
        let _: () = msg_send![content, addSubview: label];

        let editor_frame = NSRect::new(editor_origin, NSSize::new(EDITOR_SIZE.0, EDITOR_SIZE.1));
        let scroll: id = msg_send![get_class("NSScrollView"), alloc];
        let scroll: id = msg_send![scroll, initWithFrame: editor_frame];
        let _: () = msg_send![scroll, setHasVerticalScroller: YES];
        let _: () = msg_send![scroll, setDrawsBackground: NO];

        let editor: id = msg_send![get_class("NSTextView"), alloc];
        let editor: id = msg_send![
            editor,
            initWithFrame: NSRect::new(NSPoint::new(0.0, 0.0), editor_frame.size)
        ];
        let white: id = msg_send![get_class("NSColor"), whiteColor];
        let mono: id = msg_send![
            get_class("NSFont"),
            monospacedSystemFontOfSize: 16.0f64,
            weight: 0.0f64
        ];
        let _: () = msg_send![editor, setBackgroundColor: black];
        let _: () = msg_send![editor, setTextColor: white];
        let _: () = msg_send![editor, setInsertionPointColor: white];
        let _: () = msg_send![editor, setFont: mono];
        let _: () = msg_send![editor, setRichText: NO];
        let _: () = msg_send![editor, setAllowsUndo: YES];
        let _: () = msg_send![editor, setHorizontallyResizable: NO];
        let _: () = msg_send![editor, setVerticallyResizable: YES];
        // NSViewWidthSizable
        let _: () = msg_send![editor, setAutoresizingMask: 2u64];

        let _: () = msg_send![scroll, setDocumentView: editor];
        let _: () = msg_send![content, addSubview: scroll];

        Self { window, editor }
    }

    /// Show (and focus the editor) or hide.
    ///
    /// # Safety
    /// Main thread only.
    pub unsafe fn set_shown(&self, shown: bool, frame: NSRect) {
        let visible: bool = msg_send![self.window, isVisible];
        if shown == visible {
            return;
        }
        if shown {
            move_to_frame(self.window, frame);
            let app: id = NSApp();
            let _: () = msg_send![app, activateIgnoringOtherApps: YES];
            let _: () = msg_send![self.window, makeKeyAndOrderFront: nil];
            let _: bool = msg_send![self.window, makeFirstResponder: self.editor];
        } else {
            let _: () = msg_send![self.window, orderOut: nil];
        }
    }
}
