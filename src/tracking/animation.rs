//! Ease-out interpolation of the displayed cursor position.

use std::time::{Duration, Instant};

use crate::model::Point;

/// Cubic ease-out: fast start, gentle landing. `t` is clamped to [0, 1].
pub fn ease_out(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(3)
}

/// A point moving from `from` to `to` over `duration`, starting at `start`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EasedPoint {
    from: Point,
    to: Point,
    start: Instant,
    duration: Duration,
}

impl EasedPoint {
    /// A point at rest at `at`.
    pub fn at_rest(at: Point, now: Instant) -> Self {
        Self {
            from: at,
            to: at,
            start: now,
            duration: Duration::ZERO,
        }
    }

    /// Retarget towards `to`, starting from wherever the point is at `now`.
    pub fn retarget(&mut self, to: Point, now: Instant, duration: Duration) {
        self.from = self.value_at(now);
        self.to = to;
        self.start = now;
        self.duration = duration;
    }

    pub fn target(&self) -> Point {
        self.to
    }

    pub fn value_at(&self, now: Instant) -> Point {
        if self.duration.is_zero() {
            return self.to;
        }
        let elapsed = now.saturating_duration_since(self.start);
        let t = ease_out(elapsed.as_secs_f64() / self.duration.as_secs_f64());
        Point::new(
            self.from.x + (self.to.x - self.from.x) * t,
            self.from.y + (self.to.y - self.from.y) * t,
        )
    }

    pub fn is_settled(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.start) >= self.duration
    }
}
