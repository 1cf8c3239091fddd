//! `PreferenceStore` backed by NSUserDefaults.

use tracing::trace;

use crate::platform::macos::ffi::bridge::{get_class, id, msg_send, nil, nsstring_id, string_from_id};
use crate::storage::{PreferenceStore, StoreError};

/// The standard user defaults domain. Values of the wrong type read as
/// missing.
#[derive(Debug, Default, Clone, Copy)]
pub struct UserDefaultsStore;

impl UserDefaultsStore {
    pub fn standard() -> Self {
        Self
    }

    /// # Safety
    /// Main thread with a valid autorelease pool.
    unsafe fn defaults() -> id {
        msg_send![get_class("NSUserDefaults"), standardUserDefaults]
    }

    /// The stored object if it is an instance of `class`.
    ///
    /// # Safety
    /// Main thread with a valid autorelease pool.
    unsafe fn object_of(key: &str, class: &str) -> Option<id> {
        let obj: id = msg_send![Self::defaults(), objectForKey: nsstring_id(key)];
        if obj == nil {
            return None;
        }
        let matches: bool = msg_send![obj, isKindOfClass: get_class(class)];
        matches.then_some(obj)
    }
}

impl PreferenceStore for UserDefaultsStore {
    fn string(&self, key: &str) -> Option<String> {
        unsafe {
            let obj = Self::object_of(key, "NSString")?;
            string_from_id(obj)
        }
    }

    fn double(&self, key: &str) -> Option<f64> {
        unsafe {
            let obj = Self::object_of(key, "NSNumber")?;
            Some(msg_send![obj, doubleValue])
        }
    }

    fn bool(&self, key: &str) -> Option<bool> {
        unsafe {
            let obj = Self::object_of(key, "NSNumber")?;
            Some(msg_send![obj, boolValue])
        }
    }

    fn set_string(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        trace!(key, value, "user defaults write");
        unsafe {
            let _: () = msg_send![Self::defaults(), setObject: nsstring_id(value), forKey: nsstring_id(key)];
        }
        Ok(())
    }

    fn set_bool(&mut self, key: &str, value: bool) -> Result<(), StoreError> {
        trace!(key, value, "user defaults write");
        unsafe {
            let _: () = msg_send![Self::defaults(), setBool: value, forKey: nsstring_id(key)];
        }
        Ok(())
    }
}
