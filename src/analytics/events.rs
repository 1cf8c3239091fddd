//! Analytics event names and properties.

use serde_json::{json, Map, Value};

/// Every event Pace reports.
#[derive(Debug, Clone, PartialEq)]
pub enum AnalyticsEvent {
    AppOpened { is_new_user: bool },
    AppClosed { session_duration_seconds: f64 },
    PaceViewShown,
    PaceViewHidden { view_duration_seconds: f64 },
    ModeActivated { mode: String, size: String },
    ModeDeactivated { mode: String, duration_seconds: f64 },
    FocusModeShown,
    FocusModeHidden { duration_seconds: f64 },
    FlashModeToggled { is_active: bool },
    FlashTriggered,
    OnboardingCompleted,
}

impl AnalyticsEvent {
    /// Wire name of the event.
    pub fn name(&self) -> &'static str {
        match self {
            AnalyticsEvent::AppOpened { .. } => "app_opened",
            AnalyticsEvent::AppClosed { .. } => "app_closed",
            AnalyticsEvent::PaceViewShown => "pace_view_shown",
            AnalyticsEvent::PaceViewHidden { .. } => "pace_view_hidden",
            AnalyticsEvent::ModeActivated { .. } => "mode_activated",
            AnalyticsEvent::ModeDeactivated { .. } => "mode_deactivated",
            AnalyticsEvent::FocusModeShown => "focus_mode_shown",
            AnalyticsEvent::FocusModeHidden { .. } => "focus_mode_hidden",
            AnalyticsEvent::FlashModeToggled { .. } => "flash_mode_toggled",
            AnalyticsEvent::FlashTriggered => "flash_triggered",
            AnalyticsEvent::OnboardingCompleted => "onboarding_completed",
        }
    }

    /// Event properties as a JSON object (empty for bare events).
    pub fn properties(&self) -> Map<String, Value> {
        let value = match self {
            AnalyticsEvent::AppOpened { is_new_user } => json!({ "is_new_user": is_new_user }),
            AnalyticsEvent::AppClosed {
                session_duration_seconds,
            } => json!({ "session_duration_seconds": session_duration_seconds }),
            AnalyticsEvent::PaceViewHidden {
                view_duration_seconds,
            } => json!({ "view_duration_seconds": view_duration_seconds }),
            AnalyticsEvent::ModeActivated { mode, size } => json!({ "mode": mode, "size": size }),
            AnalyticsEvent::ModeDeactivated {
                mode,
                duration_seconds,
            } => json!({ "mode": mode, "duration_seconds": duration_seconds }),
            AnalyticsEvent::FocusModeHidden { duration_seconds } => {
                json!({ "duration_seconds": duration_seconds })
            }
            AnalyticsEvent::FlashModeToggled { is_active } => json!({ "is_active": is_active }),
            AnalyticsEvent::PaceViewShown
            | AnalyticsEvent::FocusModeShown
            | AnalyticsEvent::FlashTriggered
            | AnalyticsEvent::OnboardingCompleted => json!({}),
        };
        match value {
            Value::Object(map) => map,
            _ => Map::new(),
        }
    }

    /// Events sent straight away instead of waiting for the next batch.
    pub fn is_urgent(&self) -> bool {
        matches!(
            self,
            AnalyticsEvent::AppOpened { .. }
                | AnalyticsEvent::PaceViewShown
                | AnalyticsEvent::ModeActivated { .. }
                | AnalyticsEvent::OnboardingCompleted
        )
    }
}
