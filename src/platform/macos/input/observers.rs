//! Application lifecycle observers.

use block2::RcBlock;
use tracing::info;

use crate::events::{publish, AppEvent};
use crate::platform::macos::ffi::bridge::{get_class, id, msg_send, nil};

/// Observe `NSApplicationWillTerminateNotification`: publish `WillTerminate`
/// and run `on_terminate` so the event is handled before the process exits.
///
/// # Safety
/// Main thread with a valid autorelease pool.
pub unsafe fn install_termination_observer(on_terminate: fn()) {
    let center: id = msg_send![get_class("NSNotificationCenter"), defaultCenter];

    let block = RcBlock::new(move |_note: id| {
        info!("application terminating");
        publish(AppEvent::WillTerminate);
        on_terminate();
    });

    let name: id = msg_send![
        get_class("NSString"),
        stringWithUTF8String: c"NSApplicationWillTerminateNotification".as_ptr()
    ];
    let _: id =
        msg_send![center, addObserverForName: name, object: nil, queue: nil, usingBlock: &*block];
}
