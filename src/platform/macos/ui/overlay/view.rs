//! `PaceOverlayView`: the NSView subclass that paints the overlay.
//!
//! The view is flipped (top-left origin) so mask regions from
//! `model::resolve_mask` can be drawn without conversion. It holds the
//! last frame's mask and color in ivars; `drawRect:` reads only those and
//! never touches the controller.

use objc2::runtime::{AnyClass, AnyObject, Bool, ClassBuilder, Sel};
use objc2::sel;

use super::drawing::draw_overlay;
use crate::events::publish;
use crate::model::{MaskRegion, Rect, Rgba};
use crate::platform::macos::app;
use crate::platform::macos::ffi::bridge::{id, msg_send, ObjectExt, NSPoint, NSRect, NSSize, YES};
use crate::platform::macos::ui::status_bar::event_for_tag;

const MASK_NONE: i32 = 0;
const MASK_RECT: i32 = 1;
const MASK_ELLIPSE: i32 = 2;

/// Register the class on first use and create a view of `size`.
///
/// # Safety
/// Main thread only.
pub unsafe fn create_overlay_view(size: NSSize) -> id {
    let class_name = c"PaceOverlayView";
    let cls = match AnyClass::get(class_name) {
        Some(cls) => cls,
        None => register_class(),
    };

    let view: id = msg_send![cls, alloc];
    let frame = NSRect::new(NSPoint::new(0.0, 0.0), size);
    let view: id = msg_send![view, initWithFrame: frame];
    set_frame_state(view, false, None, Rgba::new(0.0, 0.0, 0.0, 1.0));
    view
}

unsafe fn register_class() -> &'static AnyClass {
    let superclass = AnyClass::get(c"NSView").unwrap_or_else(|| panic!("NSView not found"));
    let mut builder = ClassBuilder::new(c"PaceOverlayView", superclass)
        .unwrap_or_else(|| panic!("PaceOverlayView already declared"));

    builder.add_ivar::<u8>(c"_shown");
    builder.add_ivar::<i32>(c"_maskKind");
    builder.add_ivar::<f64>(c"_maskX");
    builder.add_ivar::<f64>(c"_maskY");
    builder.add_ivar::<f64>(c"_maskW");
    builder.add_ivar::<f64>(c"_maskH");
    builder.add_ivar::<f64>(c"_fillR");
    builder.add_ivar::<f64>(c"_fillG");
    builder.add_ivar::<f64>(c"_fillB");
    builder.add_ivar::<f64>(c"_fillA");

    builder.add_method(sel!(isFlipped), is_flipped as unsafe extern "C-unwind" fn(_, _) -> _);
    builder.add_method(sel!(drawRect:), draw_rect as unsafe extern "C-unwind" fn(_, _, _));
    builder.add_method(sel!(paceTick), pace_tick as unsafe extern "C-unwind" fn(_, _));
    builder.add_method(
        sel!(menuItemSelected:),
        menu_item_selected as unsafe extern "C-unwind" fn(_, _, _),
    );

    builder.register()
}

/// Store what the next `drawRect:` should paint and mark the view dirty.
///
/// # Safety
/// `view` must be a `PaceOverlayView`. Main thread only.
pub unsafe fn set_frame_state(view: id, shown: bool, mask: Option<MaskRegion>, fill: Rgba) {
    let v = &mut *view;
    v.store_ivar::<u8>("_shown", u8::from(shown));
    let (kind, r) = match mask {
        None => (MASK_NONE, Rect::new(0.0, 0.0, 0.0, 0.0)),
        Some(MaskRegion::Rect(r)) => (MASK_RECT, r),
        Some(MaskRegion::Ellipse(r)) => (MASK_ELLIPSE, r),
    };
    v.store_ivar::<i32>("_maskKind", kind);
    v.store_ivar::<f64>("_maskX", r.origin.x);
    v.store_ivar::<f64>("_maskY", r.origin.y);
    v.store_ivar::<f64>("_maskW", r.size.width);
    v.store_ivar::<f64>("_maskH", r.size.height);
    v.store_ivar::<f64>("_fillR", fill.r);
    v.store_ivar::<f64>("_fillG", fill.g);
    v.store_ivar::<f64>("_fillB", fill.b);
    v.store_ivar::<f64>("_fillA", fill.a);
    let _: () = msg_send![view, setNeedsDisplay: YES];
}

unsafe fn mask_from_ivars(v: &AnyObject) -> Option<MaskRegion> {
    let r = Rect::new(
        *v.load_ivar::<f64>("_maskX"),
        *v.load_ivar::<f64>("_maskY"),
        *v.load_ivar::<f64>("_maskW"),
        *v.load_ivar::<f64>("_maskH"),
    );
    match *v.load_ivar::<i32>("_maskKind") {
        MASK_RECT => Some(MaskRegion::Rect(r)),
        MASK_ELLIPSE => Some(MaskRegion::Ellipse(r)),
        _ => None,
    }
}

unsafe extern "C-unwind" fn is_flipped(_this: &AnyObject, _cmd: Sel) -> Bool {
    YES
}

unsafe extern "C-unwind" fn draw_rect(this: &mut AnyObject, _cmd: Sel, _dirty: NSRect) {
    if *this.load_ivar::<u8>("_shown") == 0 {
        return;
    }
    let fill = Rgba::new(
        *this.load_ivar::<f64>("_fillR"),
        *this.load_ivar::<f64>("_fillG"),
        *this.load_ivar::<f64>("_fillB"),
        *this.load_ivar::<f64>("_fillA"),
    );
    let bounds: NSRect = msg_send![&*this, bounds];
    draw_overlay(bounds, mask_from_ivars(this), fill);
}

unsafe extern "C-unwind" fn pace_tick(_this: &mut AnyObject, _cmd: Sel) {
    app::tick();
}

unsafe extern "C-unwind" fn menu_item_selected(_this: &mut AnyObject, _cmd: Sel, sender: id) {
    let tag: isize = msg_send![sender, tag];
    if let Some(event) = event_for_tag(tag) {
        publish(event);
    }
}
