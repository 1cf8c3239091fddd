//! Session bookkeeping for analytics: remembers when things started so that
//! the matching "ended" events can carry durations.

use std::time::Instant;

use tracing::debug;

use super::events::AnalyticsEvent;
use super::sink::AnalyticsSink;

fn seconds_since(start: Instant, now: Instant) -> f64 {
    now.saturating_duration_since(start).as_secs_f64()
}

/// Wraps a sink with the timers that durations are computed from.
#[derive(Debug)]
pub struct SessionTracker<S> {
    sink: S,
    session_start: Option<Instant>,
    current_mode: Option<(String, Instant)>,
    view_shown_at: Option<Instant>,
    focus_shown_at: Option<Instant>,
}

impl<S: AnalyticsSink> SessionTracker<S> {
    pub fn new(sink: S) -> Self {
        Self {
            sink,
            session_start: None,
            current_mode: None,
            view_shown_at: None,
            focus_shown_at: None,
        }
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    fn emit(&mut self, event: AnalyticsEvent) {
        debug!(event = event.name(), "tracking");
        self.sink.capture(&event);
    }

    pub fn app_opened(&mut self, is_new_user: bool, now: Instant) {
        self.session_start = Some(now);
        self.emit(AnalyticsEvent::AppOpened { is_new_user });
    }

    /// Emits `app_closed` only if a session was opened.
    pub fn app_closed(&mut self, now: Instant) {
        if let Some(start) = self.session_start.take() {
            self.emit(AnalyticsEvent::AppClosed {
                session_duration_seconds: seconds_since(start, now),
            });
        }
    }

    pub fn view_shown(&mut self, now: Instant) {
        self.view_shown_at = Some(now);
        self.emit(AnalyticsEvent::PaceViewShown);
    }

    pub fn view_hidden(&mut self, now: Instant) {
        let view_duration_seconds = self
            .view_shown_at
            .take()
            .map_or(0.0, |start| seconds_since(start, now));
        self.emit(AnalyticsEvent::PaceViewHidden {
            view_duration_seconds,
        });
    }

    /// Ends the running mode (if any) and starts `mode`.
    pub fn mode_activated(&mut self, mode: &str, size: &str, now: Instant) {
        self.mode_deactivated(now);
        self.current_mode = Some((mode.to_owned(), now));
        self.emit(AnalyticsEvent::ModeActivated {
            mode: mode.to_owned(),
            size: size.to_owned(),
        });
    }

    pub fn mode_deactivated(&mut self, now: Instant) {
        if let Some((mode, start)) = self.current_mode.take() {
            self.emit(AnalyticsEvent::ModeDeactivated {
                mode,
                duration_seconds: seconds_since(start, now),
            });
        }
    }

    pub fn current_mode(&self) -> Option<&str> {
        self.current_mode.as_ref().map(|(m, _)| m.as_str())
    }

    pub fn focus_shown(&mut self, now: Instant) {
        self.focus_shown_at = Some(now);
        self.emit(AnalyticsEvent::FocusModeShown);
    }

    pub fn focus_hidden(&mut self, now: Instant) {
        let duration_seconds = self
            .focus_shown_at
            .take()
            .map_or(0.0, |start| seconds_since(start, now));
        self.emit(AnalyticsEvent::FocusModeHidden { duration_seconds });
    }

    pub fn flash_toggled(&mut self, is_active: bool) {
        self.emit(AnalyticsEvent::FlashModeToggled { is_active });
    }

    pub fn flash_triggered(&mut self) {
        self.emit(AnalyticsEvent::FlashTriggered);
    }

    pub fn onboarding_completed(&mut self) {
        self.emit(AnalyticsEvent::OnboardingCompleted);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytics::sink::RecordingSink;
    use std::time::Duration;

    #[test]
    fn switching_modes_closes_previous_first() {
        let mut t = SessionTracker::new(RecordingSink::default());
        let t0 = Instant::now();
        t.mode_activated("circle", "M", t0);
        t.mode_activated("square", "M", t0 + Duration::from_secs(30));

        assert_eq!(
            t.sink().names(),
            vec!["mode_activated", "mode_deactivated", "mode_activated"]
        );
        assert_eq!(
            t.sink().events[1],
            AnalyticsEvent::ModeDeactivated {
                mode: "circle".into(),
                duration_seconds: 30.0
            }
        );
        assert_eq!(t.current_mode(), Some("square"));
    }

    #[test]
    fn durations_measure_from_shown() {
        let mut t = SessionTracker::new(RecordingSink::default());
        let t0 = Instant::now();
        t.view_shown(t0);
        t.view_hidden(t0 + Duration::from_secs(5));
        t.focus_shown(t0);
        t.focus_hidden(t0 + Duration::from_millis(1500));

        assert_eq!(
            t.sink().events[1],
            AnalyticsEvent::PaceViewHidden {
                view_duration_seconds: 5.0
            }
        );
        assert_eq!(
            t.sink().events[3],
            AnalyticsEvent::FocusModeHidden {
                duration_seconds: 1.5
            }
        );
    }

    #[test]
    fn close_without_open_is_silent() {
        let mut t = SessionTracker::new(RecordingSink::default());
        t.app_closed(Instant::now());
        assert!(t.sink().events.is_empty());

        let t0 = Instant::now();
        t.app_opened(true, t0);
        t.app_closed(t0 + Duration::from_secs(60));
        assert_eq!(t.sink().names(), vec!["app_opened", "app_closed"]);
    }
}
