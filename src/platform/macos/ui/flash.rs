//! Border pulse shown when the flash reminder fires.

use std::time::Instant;

use objc2::runtime::{AnyClass, AnyObject, ClassBuilder, Sel};
use objc2::sel;

use super::overlay::draw_border;
use super::window::{make_borderless_window, move_to_frame, set_window_shown, FLASH_WINDOW_LEVEL};
use crate::model::constants::{FLASH_BORDER_WIDTH, FLASH_PULSE_DURATION};
use crate::model::Rgba;
use crate::platform::macos::ffi::bridge::{id, msg_send, ObjectExt, NSPoint, NSRect, YES};

unsafe fn flash_view_class() -> &'static AnyClass {
    if let Some(cls) = AnyClass::get(c"PaceFlashView") {
        return cls;
    }
    let superclass = AnyClass::get(c"NSView").unwrap_or_else(|| panic!("NSView not found"));
    let mut builder = ClassBuilder::new(c"PaceFlashView", superclass)
        .unwrap_or_else(|| panic!("PaceFlashView already declared"));
    builder.add_ivar::<f64>(c"_colorR");
    builder.add_ivar::<f64>(c"_colorG");
    builder.add_ivar::<f64>(c"_colorB");
    builder.add_method(sel!(drawRect:), draw_rect as unsafe extern "C-unwind" fn(_, _, _));
    builder.register()
}

unsafe extern "C-unwind" fn draw_rect(this: &mut AnyObject, _cmd: Sel, _dirty: NSRect) {
    let color = Rgba::new(
        *this.load_ivar::<f64>("_colorR"),
        *this.load_ivar::<f64>("_colorG"),
        *this.load_ivar::<f64>("_colorB"),
        1.0,
    );
    let bounds: NSRect = msg_send![&*this, bounds];
    draw_border(bounds, FLASH_BORDER_WIDTH, color);
}

/// Click-through window that strokes the screen edge for one pulse.
#[derive(Debug)]
pub struct FlashBorder {
    window: id,
    view: id,
    until: Option<Instant>,
}

impl FlashBorder {
    /// # Safety
    /// Main thread with a valid autorelease pool.
    pub unsafe fn new(frame: NSRect) -> Self {
        let window = make_borderless_window(frame, FLASH_WINDOW_LEVEL, true);
        let view: id = msg_send![flash_view_class(), alloc];
        let view: id = msg_send![
            view,
            initWithFrame: NSRect::new(NSPoint::new(0.0, 0.0), frame.size)
        ];
        let _: () = msg_send![window, setContentView: view];
        Self {
            window,
            view,
            until: None,
        }
    }

    /// Start a pulse on `frame` in `color`.
    ///
    /// # Safety
    /// Main thread only.
    pub unsafe fn pulse(&mut self, frame: NSRect, color: Rgba, now: Instant) {
        move_to_frame(self.window, frame);
        let v = &mut *self.view;
        v.store_ivar::<f64>("_colorR", color.r);
        v.store_ivar::<f64>("_colorG", color.g);
        v.store_ivar::<f64>("_colorB", color.b);
        let _: () = msg_send![self.view, setNeedsDisplay: YES];
        set_window_shown(self.window, true);
        self.until = Some(now + FLASH_PULSE_DURATION);
    }

    /// Hide the border once the pulse is over.
    ///
    /// # Safety
    /// Main thread only.
    pub unsafe fn update(&mut self, now: Instant) {
        if self.until.is_some_and(|t| now >= t) {
            self.until = None;
            set_window_shown(self.window, false);
        }
    }
}
