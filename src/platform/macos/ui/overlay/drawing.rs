//! Painting helpers for the overlay and the flash border.

use objc2_core_foundation::CGFloat;

use crate::model::{MaskRegion, Rgba};
use crate::platform::macos::ffi::bridge::{get_class, id, msg_send, NSPoint, NSRect, NSSize};

/// NSWindingRuleEvenOdd
const EVEN_ODD: usize = 1;

fn ns_rect(r: crate::model::Rect) -> NSRect {
    NSRect::new(
        NSPoint::new(r.origin.x, r.origin.y),
        NSSize::new(r.size.width, r.size.height),
    )
}

/// # Safety
/// Main thread, inside a drawing context.
unsafe fn set_color(c: Rgba) {
    let color: id = msg_send![
        get_class("NSColor"),
        colorWithCalibratedRed: c.r,
        green: c.g,
        blue: c.b,
        alpha: c.a
    ];
    let _: () = msg_send![color, set];
}

/// Fill `bounds` with `fill`, leaving `mask` transparent.
///
/// # Safety
/// Main thread, inside `drawRect:`.
pub unsafe fn draw_overlay(bounds: NSRect, mask: Option<MaskRegion>, fill: Rgba) {
    let bezier = get_class("NSBezierPath");
    let path: id = msg_send![bezier, bezierPathWithRect: bounds];

    match mask {
        Some(MaskRegion::Rect(r)) => {
            let hole: id = msg_send![bezier, bezierPathWithRect: ns_rect(r)];
            let _: () = msg_send![path, appendBezierPath: hole];
        }
        Some(MaskRegion::Ellipse(r)) => {
            let hole: id = msg_send![bezier, bezierPathWithOvalInRect: ns_rect(r)];
            let _: () = msg_send![path, appendBezierPath: hole];
        }
        None => {}
    }
    let _: () = msg_send![path, setWindingRule: EVEN_ODD];

    set_color(fill);
    let _: () = msg_send![path, fill];
}

/// Stroke a border of `width` just inside `bounds`.
///
/// # Safety
/// Main thread, inside `drawRect:`.
pub unsafe fn draw_border(bounds: NSRect, width: CGFloat, color: Rgba) {
    let inset = NSRect::new(
        NSPoint::new(bounds.origin.x + width / 2.0, bounds.origin.y + width / 2.0),
        NSSize::new(bounds.size.width - width, bounds.size.height - width),
    );
    let path: id = msg_send![get_class("NSBezierPath"), bezierPathWithRect: inset];
    set_color(color);
    let _: () = msg_send![path, setLineWidth: width];
    let _: () = msg_send![path, stroke];
}
