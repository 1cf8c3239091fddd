//! Pointer sampling through AppKit. No accessibility permission needed.

use crate::model::{Point, Rect};
use crate::platform::macos::ffi::bridge::{get_class, id, msg_send, NSPoint, NSRect};
use crate::tracking::PointerSource;

/// Reads `+[NSEvent mouseLocation]` and `+[NSScreen screens]`.
#[derive(Debug, Default, Clone, Copy)]
pub struct CocoaPointerSource;

fn rect_from(r: NSRect) -> Rect {
    Rect::new(r.origin.x, r.origin.y, r.size.width, r.size.height)
}

impl PointerSource for CocoaPointerSource {
    fn position(&self) -> Option<Point> {
        let p: NSPoint = unsafe { msg_send![get_class("NSEvent"), mouseLocation] };
        (p.x.is_finite() && p.y.is_finite()).then(|| Point::new(p.x, p.y))
    }

    fn screens(&self) -> Vec<Rect> {
        unsafe {
            let screens: id = msg_send![get_class("NSScreen"), screens];
            let count: usize = msg_send![screens, count];
            (0..count)
                .map(|i| {
                    let s: id = msg_send![screens, objectAtIndex: i];
                    let f: NSRect = msg_send![s, frame];
                    rect_from(f)
                })
                .collect()
        }
    }
}
