//! Application events for inter-module communication.
//!
//! These events represent high-level application actions that can be
//! published by any module and handled by the controller.
//! This module is pure Rust with no FFI dependencies, making it fully testable.

use crate::model::{BackgroundStyle, FocusMode, FocusSize};

/// Application-level events for decoupled communication between modules.
///
/// Events flow from producers (hotkeys, status bar menu, observers) through
/// the EventBus to the dispatcher, which hands them to the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEvent {
    // === Settings ===
    /// Advance to the next focus mode (Ctrl+Opt+M)
    CycleMode,

    /// Advance to the next size (Ctrl+Opt+S)
    CycleSize,

    /// Advance to the next background style (Ctrl+Opt+B)
    CycleBackground,

    /// Pick a mode from the menu
    SelectMode(FocusMode),

    /// Pick a size from the menu
    SelectSize(FocusSize),

    /// Pick a background style from the menu
    SelectBackground(BackgroundStyle),

    // === Visibility ===
    /// Show or hide the overlay (menu)
    ToggleOverlay,

    /// Hide the overlay and stop tracking (Ctrl+Opt+O)
    TurnOff,

    /// Show or hide the focus-writing window (Ctrl+Opt+F)
    ToggleFocusMessage,

    /// Enable or disable the 25-minute flash reminder
    ToggleFlash,

    // === Lifecycle ===
    /// The onboarding flow was dismissed
    OnboardingCompleted,

    /// Quit from the status bar menu
    Quit,

    /// The application is about to terminate
    WillTerminate,
}

impl AppEvent {
    /// Returns true for events that change one of the three focus settings.
    pub fn changes_configuration(&self) -> bool {
        matches!(
            self,
            AppEvent::CycleMode
                | AppEvent::CycleSize
                | AppEvent::CycleBackground
                | AppEvent::SelectMode(_)
                | AppEvent::SelectSize(_)
                | AppEvent::SelectBackground(_)
        )
    }

    /// Returns a human-readable description of the event for debugging.
    pub fn description(&self) -> &'static str {
        match self {
            AppEvent::CycleMode => "Cycle focus mode",
            AppEvent::CycleSize => "Cycle focus size",
            AppEvent::CycleBackground => "Cycle background style",
            AppEvent::SelectMode(_) => "Select focus mode",
            AppEvent::SelectSize(_) => "Select focus size",
            AppEvent::SelectBackground(_) => "Select background style",
            AppEvent::ToggleOverlay => "Toggle overlay visibility",
            AppEvent::TurnOff => "Turn overlay off",
            AppEvent::ToggleFocusMessage => "Toggle focus message window",
            AppEvent::ToggleFlash => "Toggle flash reminder",
            AppEvent::OnboardingCompleted => "Onboarding completed",
            AppEvent::Quit => "Quit application",
            AppEvent::WillTerminate => "Application terminating",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configuration_events() {
        assert!(AppEvent::CycleMode.changes_configuration());
        assert!(AppEvent::SelectSize(FocusSize::Large).changes_configuration());
        assert!(AppEvent::SelectBackground(BackgroundStyle::White).changes_configuration());
        assert!(!AppEvent::ToggleOverlay.changes_configuration());
        assert!(!AppEvent::TurnOff.changes_configuration());
        assert!(!AppEvent::ToggleFocusMessage.changes_configuration());
    }

    #[test]
    fn test_event_equality() {
        assert_eq!(
            AppEvent::SelectMode(FocusMode::Square),
            AppEvent::SelectMode(FocusMode::Square)
        );
        assert_ne!(
            AppEvent::SelectMode(FocusMode::Square),
            AppEvent::SelectMode(FocusMode::Circle)
        );
    }

    #[test]
    fn test_event_debug() {
        let debug_str = format!("{:?}", AppEvent::SelectSize(FocusSize::Medium));
        assert_eq!(debug_str, "SelectSize(Medium)");
    }

    #[test]
    fn test_all_events_have_descriptions() {
        let events = [
            AppEvent::CycleMode,
            AppEvent::CycleSize,
            AppEvent::CycleBackground,
            AppEvent::SelectMode(FocusMode::Circle),
            AppEvent::SelectSize(FocusSize::Small),
            AppEvent::SelectBackground(BackgroundStyle::Black),
            AppEvent::ToggleOverlay,
            AppEvent::TurnOff,
            AppEvent::ToggleFocusMessage,
            AppEvent::ToggleFlash,
            AppEvent::OnboardingCompleted,
            AppEvent::Quit,
            AppEvent::WillTerminate,
        ];

        for event in events {
            assert!(!event.description().is_empty());
        }
    }
}
