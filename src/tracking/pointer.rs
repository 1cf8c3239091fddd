//! Pointer sampling and cursor tracking.
//!
//! `PointerSource` hides where the global pointer position comes from
//! (NSEvent on macOS, a fake in tests). `CursorTracker` turns samples into
//! top-left screen-local positions, drops sub-deadband jitter, animates the
//! displayed position and notifies subscribers on real changes.

use std::time::{Duration, Instant};

use tracing::trace;

use super::animation::EasedPoint;
use crate::model::constants::{REFERENCE_SCREEN_SIZE, TRACKING_DEADBAND, TRACKING_EASE_DURATION};
use crate::model::{Point, Rect};

/// Source of the global pointer position.
///
/// Positions and screen frames are in global bottom-left-origin coordinates
/// (AppKit's convention).
pub trait PointerSource {
    /// Current pointer position, if known.
    fn position(&self) -> Option<Point>;

    /// Frames of the attached displays, main display first.
    fn screens(&self) -> Vec<Rect>;
}

/// Frame to flip against: the screen under `p`, else the first screen,
/// else the reference resolution at the origin.
pub fn screen_for_point(screens: &[Rect], p: Point) -> Rect {
    screens
        .iter()
        .copied()
        .find(|s| s.contains(p))
        .or_else(|| screens.first().copied())
        .unwrap_or(Rect::new(
            0.0,
            0.0,
            REFERENCE_SCREEN_SIZE.0,
            REFERENCE_SCREEN_SIZE.1,
        ))
}

/// Convert a global bottom-left point into top-left coordinates local to
/// `frame`.
pub fn flip_to_top_left(global: Point, frame: Rect) -> Point {
    Point::new(global.x - frame.min_x(), frame.max_y() - global.y)
}

/// A position accepted by the tracker.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackedPosition {
    /// Top-left, screen-local target position.
    pub point: Point,
    /// Global frame of the screen the pointer is on.
    pub screen: Rect,
}

type Subscriber = Box<dyn FnMut(&TrackedPosition)>;

/// Polls a `PointerSource` and animates the displayed cursor position.
pub struct CursorTracker<P> {
    source: P,
    eased: Option<EasedPoint>,
    screen: Option<Rect>,
    deadband: f64,
    ease_duration: Duration,
    subscribers: Vec<Subscriber>,
}

impl<P: PointerSource> CursorTracker<P> {
    pub fn new(source: P) -> Self {
        Self {
            source,
            eased: None,
            screen: None,
            deadband: TRACKING_DEADBAND,
            ease_duration: TRACKING_EASE_DURATION,
            subscribers: Vec::new(),
        }
    }

    pub fn source(&self) -> &P {
        &self.source
    }

    /// Register a position-changed callback.
    pub fn subscribe(&mut self, f: impl FnMut(&TrackedPosition) + 'static) {
        self.subscribers.push(Box::new(f));
    }

    /// Sample the pointer once. Returns the new target if it moved past the
    /// deadband (or on the first sample, or when it changed screens).
    pub fn tick(&mut self, now: Instant) -> Option<TrackedPosition> {
        let global = self.source.position()?;
        let screens = self.source.screens();
        let screen = screen_for_point(&screens, global);
        let local = flip_to_top_left(global, screen);

        let same_screen = self.screen == Some(screen);
        match self.eased.as_mut() {
            Some(eased) if same_screen => {
                let target = eased.target();
                if (target.x - local.x).abs() < self.deadband
                    && (target.y - local.y).abs() < self.deadband
                {
                    return None;
                }
                eased.retarget(local, now, self.ease_duration);
            }
            // First sample or screen change: jump, nothing to ease from
            _ => self.eased = Some(EasedPoint::at_rest(local, now)),
        }
        self.screen = Some(screen);

        let tracked = TrackedPosition {
            point: local,
            screen,
        };
        trace!(x = local.x, y = local.y, "cursor moved");
        for sub in self.subscribers.iter_mut() {
            sub(&tracked);
        }
        Some(tracked)
    }

    /// Position to draw at `now` (top-left, screen-local).
    pub fn displayed(&self, now: Instant) -> Option<Point> {
        self.eased.map(|e| e.value_at(now))
    }

    /// Whether an animation is still running at `now`.
    pub fn is_animating(&self, now: Instant) -> bool {
        self.eased.is_some_and(|e| !e.is_settled(now))
    }

    /// Global frame of the screen the cursor was last seen on.
    pub fn current_screen(&self) -> Option<Rect> {
        self.screen
    }

    /// Forget the last position; the next tick jumps instead of easing.
    pub fn reset(&mut self) {
        self.eased = None;
        self.screen = None;
    }
}
