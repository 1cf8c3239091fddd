//! Per-frame dispatch: drain the bus into the controller, then bring every
//! window in line with the controller's `RenderState`.
//!
//! ```text
//! take_event() → PaceController::handle → render() → apply to AppKit
//! ```

use std::time::Instant;

use core_graphics::display::CGDisplay;
use tracing::{debug, trace};

use crate::app::{Flow, RenderState};
use crate::events::{take_event, AppEvent};
use crate::model::constants::TRACKING_INTERVAL;
use crate::model::{resolve_mask, Point, Rect};
use crate::platform::macos::app::{Runtime, IDLE_POLL_INTERVAL};
use crate::platform::macos::ffi::bridge::{msg_send, NSPoint, NSRect, NSSize};
use crate::platform::macos::ui::window::{move_to_frame, set_window_shown};
use crate::platform::macos::ui::{rebuild_menu, set_frame_state};
use crate::tracking::PointerSource;

fn ns_rect(r: Rect) -> NSRect {
    NSRect::new(
        NSPoint::new(r.origin.x, r.origin.y),
        NSSize::new(r.size.width, r.size.height),
    )
}

fn main_display_bounds() -> Rect {
    let b = CGDisplay::main().bounds();
    Rect::new(b.origin.x, b.origin.y, b.size.width, b.size.height)
}

/// Screen the overlay belongs on: where the cursor was last seen, else the
/// first NSScreen, else the main display as CoreGraphics reports it.
fn active_screen(rt: &Runtime) -> Rect {
    rt.tracker
        .current_screen()
        .or_else(|| rt.tracker.source().screens().first().copied())
        .unwrap_or_else(main_display_bounds)
}

/// Drain pending events, then tick, then redraw.
pub fn run_frame(rt: &mut Runtime) -> Flow {
    while let Some(event) = take_event() {
        if rt.controller.handle(event) == Flow::Quit {
            debug!("quit requested");
            return Flow::Quit;
        }
    }

    let now = Instant::now();
    if rt.controller.state().tracking_active() {
        rt.tracker.tick(now);
    }

    let screen = active_screen(rt);
    let render = rt.controller.render(Some(screen.size));

    unsafe {
        if rt.controller.poll_flash() {
            let color = render.configuration.background_style.foreground_color();
            rt.flash_border.pulse(ns_rect(screen), color, now);
        }
        rt.flash_border.update(now);
        apply_render(rt, &render, screen, now);
    }
    rt.last_render = Some(render);
    Flow::Continue
}

/// Push `render` into AppKit.
///
/// # Safety
/// Main thread only.
unsafe fn apply_render(rt: &mut Runtime, render: &RenderState, screen: Rect, now: Instant) {
    let menu_changed = rt
        .last_render
        .as_ref()
        .map_or(true, |last| last.menu != render.menu);
    if menu_changed {
        rebuild_menu(rt.status_item, &render.menu, rt.overlay_view);
    }

    let was_tracking = rt.last_render.as_ref().map(|r| r.tracking_active);
    if was_tracking != Some(render.tracking_active) {
        let interval = if render.tracking_active {
            TRACKING_INTERVAL
        } else {
            IDLE_POLL_INTERVAL
        };
        rt.set_timer_interval(interval);
        if !render.tracking_active {
            // Jump instead of easing from a stale position when resumed
            rt.tracker.reset();
        }
    }

    rt.focus_window
        .set_shown(render.focus_message_visible, ns_rect(screen));

    if !render.overlay_shown {
        set_window_shown(rt.overlay_window, false);
        return;
    }

    move_to_frame(rt.overlay_window, ns_rect(screen));
    let container = Rect::new(0.0, 0.0, screen.size.width, screen.size.height);
    let cursor = rt
        .tracker
        .displayed(now)
        .unwrap_or(Point::new(container.mid_x(), container.mid_y()));
    let mask = resolve_mask(
        render.configuration.mode,
        &render.geometry,
        cursor,
        container,
    );
    trace!(?mask, "frame");
    set_frame_state(
        rt.overlay_view,
        true,
        Some(mask),
        render.configuration.background_style.mask_color(),
    );
    set_window_shown(rt.overlay_window, true);
    let _: () = msg_send![rt.overlay_window, displayIfNeeded];
}

/// Close the session before the process exits.
pub fn shutdown(rt: &mut Runtime) {
    while let Some(event) = take_event() {
        if event != AppEvent::WillTerminate {
            // Already terminating, so a queued Quit has nothing left to do
            let _ = rt.controller.handle(event);
        }
    }
    rt.controller.handle(AppEvent::WillTerminate);
    unsafe {
        rt.stop_timer();
        if let Some(hotkeys) = rt.hotkeys.as_mut() {
            hotkeys.uninstall();
        }
    }
}
