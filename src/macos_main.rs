//! macOS entry point: builds the windows, the controller and the timers,
//! then hands control to the AppKit run loop.

use std::time::Duration;

use anyhow::{Context, Result};
use tracing::{info, warn};

use pace::analytics::{sink_for, AnalyticsCredentials};
use pace::app::{PaceController, SystemClock};
use pace::events::{publish, AppEvent};
use pace::platform::macos::app::{install, on_terminate, tick, Runtime};
use pace::platform::macos::ffi::bridge::{
    autoreleasepool, msg_send, nil, NSApp, NSApplicationActivationPolicy, NSPoint, NSRect, NSSize,
};
use pace::platform::macos::input::{install_hotkeys, install_termination_observer, CocoaPointerSource};
use pace::platform::macos::storage::UserDefaultsStore;
use pace::platform::macos::ui::window::{make_borderless_window, OVERLAY_WINDOW_LEVEL};
use pace::platform::macos::ui::{
    create_overlay_view, install_status_item, show_onboarding, FlashBorder, FocusWindow,
};
use pace::storage::{PreferencesRepository, SessionStore};
use pace::tracking::{CursorTracker, PointerSource};

pub fn run() -> Result<()> {
    autoreleasepool(|| unsafe { run_app() })
}

unsafe fn run_app() -> Result<()> {
    let app = NSApp();
    let _: bool = msg_send![app, setActivationPolicy: NSApplicationActivationPolicy::Accessory];

    let pointer = CocoaPointerSource;
    let main_screen = pointer
        .screens()
        .first()
        .copied()
        .context("no displays attached")?;
    let frame = NSRect::new(
        NSPoint::new(main_screen.origin.x, main_screen.origin.y),
        NSSize::new(main_screen.size.width, main_screen.size.height),
    );

    let mut repository = PreferencesRepository::new(UserDefaultsStore::standard());
    let distinct_id = repository
        .anonymous_id()
        .context("failed to store anonymous id")?;
    let sink = sink_for(AnalyticsCredentials::from_environment(), &distinct_id);
    let mut controller = PaceController::new(repository, sink, SystemClock);

    let overlay_window = make_borderless_window(frame, OVERLAY_WINDOW_LEVEL, true);
    let overlay_view = create_overlay_view(frame.size);
    let _: () = msg_send![overlay_window, setContentView: overlay_view];

    let hotkeys = install_hotkeys();
    if let Some(reg) = &hotkeys {
        info!(registered = reg.registered(), "global hotkeys installed");
    }

    let show_welcome = controller.start();

    install(Runtime {
        controller,
        tracker: CursorTracker::new(pointer),
        overlay_window,
        overlay_view,
        focus_window: FocusWindow::new(frame),
        flash_border: FlashBorder::new(frame),
        status_item: install_status_item(),
        hotkeys,
        timer: nil,
        timer_interval: Duration::ZERO,
        last_render: None,
    });
    install_termination_observer(on_terminate);

    if show_welcome {
        show_onboarding();
        publish(AppEvent::OnboardingCompleted);
    }

    // First frame builds the menu and schedules the timer
    tick();

    info!("pace running");
    let _: () = msg_send![app, run];
    warn!("run loop returned");
    Ok(())
}
