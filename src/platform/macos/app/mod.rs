//! Main-thread runtime.
//!
//! The controller, tracker and window handles live in a `thread_local!`
//! owned by the main thread. AppKit callbacks reach it through
//! [`with_runtime`]; a callback that arrives while it is already borrowed
//! (re-entrancy from inside a frame) is skipped, and its events stay on the
//! bus for the next tick.

use std::cell::RefCell;
use std::time::Duration;

use tracing::{debug, warn};

use crate::analytics::AnalyticsSink;
use crate::app::{Flow, PaceController, RenderState, SystemClock};
use crate::platform::macos::ffi::bridge::{get_class, id, msg_send, nil, nsstring_id, sel, NSApp, YES};
use crate::platform::macos::handlers::{run_frame, shutdown};
use crate::platform::macos::input::{CocoaPointerSource, HotkeyRegistration};
use crate::platform::macos::storage::UserDefaultsStore;
use crate::platform::macos::ui::{FlashBorder, FocusWindow};
use crate::storage::PreferencesRepository;
use crate::tracking::CursorTracker;

/// Event pump cadence while tracking is stopped.
pub const IDLE_POLL_INTERVAL: Duration = Duration::from_millis(250);

pub type MacController =
    PaceController<PreferencesRepository<UserDefaultsStore>, Box<dyn AnalyticsSink>, SystemClock>;

/// Everything the main thread owns.
pub struct Runtime {
    pub controller: MacController,
    pub tracker: CursorTracker<CocoaPointerSource>,
    pub overlay_window: id,
    pub overlay_view: id,
    pub focus_window: FocusWindow,
    pub flash_border: FlashBorder,
    pub status_item: id,
    pub hotkeys: Option<HotkeyRegistration>,
    pub timer: id,
    pub timer_interval: Duration,
    pub last_render: Option<RenderState>,
}

thread_local! {
    static RUNTIME: RefCell<Option<Runtime>> = const { RefCell::new(None) };
}

pub fn install(runtime: Runtime) {
    RUNTIME.with(|slot| *slot.borrow_mut() = Some(runtime));
}

/// Run `f` against the runtime. `None` if it is not installed or busy.
pub fn with_runtime<R>(f: impl FnOnce(&mut Runtime) -> R) -> Option<R> {
    RUNTIME.with(|slot| match slot.try_borrow_mut() {
        Ok(mut guard) => guard.as_mut().map(f),
        Err(_) => {
            debug!("runtime busy, deferring");
            None
        }
    })
}

/// Timer callback.
pub fn tick() {
    if with_runtime(run_frame) == Some(Flow::Quit) {
        unsafe {
            let _: () = msg_send![NSApp(), terminate: nil];
        }
    }
}

/// Termination observer callback.
pub fn on_terminate() {
    if with_runtime(shutdown).is_none() {
        warn!("runtime unavailable at termination, session not closed");
    }
}

/// Repeating timer on the common run loop modes (keeps firing while a menu
/// is open) that sends `paceTick` to `target`.
///
/// # Safety
/// Main thread; `target` must respond to `paceTick`.
pub unsafe fn schedule_timer(target: id, interval: Duration) -> id {
    let timer: id = msg_send![
        get_class("NSTimer"),
        timerWithTimeInterval: interval.as_secs_f64(),
        target: target,
        selector: sel!(paceTick),
        userInfo: nil,
        repeats: YES
    ];
    let run_loop: id = msg_send![get_class("NSRunLoop"), currentRunLoop];
    let _: () = msg_send![run_loop, addTimer: timer, forMode: nsstring_id("kCFRunLoopCommonModes")];
    timer
}

impl Runtime {
    /// Replace the timer if the cadence changed.
    ///
    /// # Safety
    /// Main thread only.
    pub unsafe fn set_timer_interval(&mut self, interval: Duration) {
        if self.timer != nil && self.timer_interval == interval {
            return;
        }
        self.stop_timer();
        self.timer = schedule_timer(self.overlay_view, interval);
        self.timer_interval = interval;
        debug!(interval_ms = interval.as_millis() as u64, "timer rescheduled");
    }

    /// # Safety
    /// Main thread only.
    pub unsafe fn stop_timer(&mut self) {
        if self.timer != nil {
            let _: () = msg_send![self.timer, invalidate];
            self.timer = nil;
        }
    }
}
