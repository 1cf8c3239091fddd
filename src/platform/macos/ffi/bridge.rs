//! Thin helpers over `objc2` for dynamic message sending.
//!
//! The AppKit side of Pace talks to Cocoa through untyped `id` pointers and
//! `msg_send!`, with a few helpers for strings, classes and ivars.

#![allow(non_upper_case_globals)]
#![allow(non_camel_case_types)]

pub use objc2::runtime::{AnyClass, AnyObject, Bool, Sel};
pub use objc2::{msg_send, sel};
pub use objc2_app_kit::{
    NSApplicationActivationPolicy, NSBackingStoreType, NSWindowCollectionBehavior,
    NSWindowStyleMask,
};
pub use objc2_foundation::{NSPoint, NSRect, NSSize};

use objc2::encode::Encode;
use objc2::rc::Retained;
use objc2_foundation::NSString;

/// Objective-C object pointer.
pub type id = *mut AnyObject;

pub const nil: id = std::ptr::null_mut();

pub const YES: Bool = Bool::YES;
pub const NO: Bool = Bool::NO;

/// The shared NSApplication instance.
#[inline]
#[allow(non_snake_case)]
pub fn NSApp() -> id {
    unsafe { msg_send![get_class("NSApplication"), sharedApplication] }
}

/// Create an NSString and return it as a raw, retained `id`.
#[inline]
pub fn nsstring_id(s: &str) -> id {
    let ns = NSString::from_str(s);
    Retained::into_raw(ns) as id
}

/// Copy an NSString into a Rust `String`. `nil` yields `None`.
///
/// # Safety
/// `s` must be nil or a valid NSString.
pub unsafe fn string_from_id(s: id) -> Option<String> {
    if s.is_null() {
        return None;
    }
    let utf8: *const std::ffi::c_char = msg_send![s, UTF8String];
    if utf8.is_null() {
        return None;
    }
    Some(std::ffi::CStr::from_ptr(utf8).to_string_lossy().into_owned())
}

/// Look up a class by name. AppKit and Foundation classes always exist, so
/// a miss is a programming error.
#[inline]
pub fn get_class(name: &str) -> &'static AnyClass {
    let c_name = std::ffi::CString::new(name).unwrap_or_default();
    AnyClass::get(&c_name).unwrap_or_else(|| panic!("Class '{}' not found", name))
}

/// Instance variable access on dynamically declared classes.
pub trait ObjectExt {
    /// # Safety
    /// The ivar must exist and be of type `T`. Main thread only.
    unsafe fn load_ivar<T: Encode>(&self, name: &str) -> &T;

    /// # Safety
    /// The ivar must exist and be of type `T`. Main thread only.
    unsafe fn store_ivar<T: Encode>(&mut self, name: &str, value: T);
}

impl ObjectExt for AnyObject {
    unsafe fn load_ivar<T: Encode>(&self, name: &str) -> &T {
        let c_name = std::ffi::CString::new(name).unwrap_or_default();
        let ivar = self
            .class()
            .instance_variable(&c_name)
            .unwrap_or_else(|| panic!("ivar '{}' not found", name));
        ivar.load::<T>(self)
    }

    unsafe fn store_ivar<T: Encode>(&mut self, name: &str, value: T) {
        let c_name = std::ffi::CString::new(name).unwrap_or_default();
        let ivar = self
            .class()
            .instance_variable(&c_name)
            .unwrap_or_else(|| panic!("ivar '{}' not found", name));
        *ivar.load_mut::<T>(self) = value;
    }
}

/// Run a closure inside an autorelease pool.
#[inline]
pub fn autoreleasepool<R, F: FnOnce() -> R>(f: F) -> R {
    unsafe {
        let pool: id = msg_send![get_class("NSAutoreleasePool"), new];
        let result = f();
        let _: () = msg_send![pool, drain];
        result
    }
}
