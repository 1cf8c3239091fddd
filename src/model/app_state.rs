//! Application state (pure Rust, no FFI).
//!
//! Visibility bookkeeping for the overlay, the focus-writing window and the
//! flash reminder, plus the current focus configuration. Transitions here
//! have no side effects; `app::PaceController` adds persistence and
//! analytics on top.

use super::configuration::FocusConfiguration;
use super::focus::{BackgroundStyle, Cyclic, FocusMode, FocusSize};

/// Complete in-memory application state.
#[derive(Debug, Clone, PartialEq)]
pub struct AppState {
    /// Current focus settings.
    pub configuration: FocusConfiguration,
    /// The user-facing "Show Pace" toggle.
    pub overlay_visible: bool,
    /// Turned off via hotkey or menu: overlay hidden and tracking stopped.
    pub turned_off: bool,
    /// Focus-writing window shown; suspends the overlay while set.
    pub focus_message_visible: bool,
    /// 25-minute flash reminder enabled.
    pub flash_active: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(FocusConfiguration::default())
    }
}

impl AppState {
    /// Launch state: overlay shown with the loaded configuration.
    pub fn new(configuration: FocusConfiguration) -> Self {
        Self {
            configuration,
            overlay_visible: true,
            turned_off: false,
            focus_message_visible: false,
            flash_active: false,
        }
    }

    /// Whether the overlay is actually drawn right now.
    pub fn overlay_shown(&self) -> bool {
        self.overlay_visible && !self.turned_off && !self.focus_message_visible
    }

    /// Whether the pointer tracking timer should run.
    pub fn tracking_active(&self) -> bool {
        self.overlay_shown()
    }

    /// Make the overlay visible, lifting a turn-off. Returns true if the
    /// drawn state changed.
    pub fn ensure_visible(&mut self) -> bool {
        let was = self.overlay_shown();
        self.overlay_visible = true;
        self.turned_off = false;
        // A cycle is meant to be seen; close the writing window if open
        self.focus_message_visible = false;
        was != self.overlay_shown()
    }

    pub fn cycle_mode(&mut self) -> FocusMode {
        self.configuration.mode = self.configuration.mode.next();
        self.configuration.mode
    }

    pub fn cycle_size(&mut self) -> FocusSize {
        self.configuration.size = self.configuration.size.next();
        self.configuration.size
    }

    pub fn cycle_background(&mut self) -> BackgroundStyle {
        self.configuration.background_style = self.configuration.background_style.next();
        self.configuration.background_style
    }

    /// Flip the "Show Pace" toggle. Showing lifts a turn-off and closes the
    /// writing window, since either would keep the overlay suspended.
    pub fn toggle_overlay(&mut self) -> bool {
        if self.overlay_shown() {
            self.overlay_visible = false;
        } else {
            self.overlay_visible = true;
            self.turned_off = false;
            self.focus_message_visible = false;
        }
        self.overlay_visible
    }

    /// Hide everything: the overlay and the writing window.
    pub fn turn_off(&mut self) {
        self.turned_off = true;
        self.focus_message_visible = false;
    }

    pub fn toggle_focus_message(&mut self) -> bool {
        self.focus_message_visible = !self.focus_message_visible;
        self.focus_message_visible
    }

    pub fn toggle_flash(&mut self) -> bool {
        self.flash_active = !self.flash_active;
        self.flash_active
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn launch_state_shows_overlay() {
        let s = AppState::default();
        assert!(s.overlay_shown());
        assert!(s.tracking_active());
    }

    #[test]
    fn focus_message_suspends_and_restores_overlay() {
        let mut s = AppState::default();
        s.toggle_focus_message();
        assert!(!s.overlay_shown());
        assert!(s.overlay_visible);
        s.toggle_focus_message();
        assert!(s.overlay_shown());
    }

    #[test]
    fn hidden_overlay_stays_hidden_after_focus_message() {
        let mut s = AppState::default();
        s.toggle_overlay();
        s.toggle_focus_message();
        s.toggle_focus_message();
        assert!(!s.overlay_shown());
    }

    #[test]
    fn ensure_visible_lifts_turn_off() {
        let mut s = AppState::default();
        s.turn_off();
        assert!(!s.overlay_shown());
        assert!(s.ensure_visible());
        assert!(s.overlay_shown());
        assert!(!s.ensure_visible());
    }

    #[test]
    fn toggle_after_turn_off_shows() {
        let mut s = AppState::default();
        s.turn_off();
        assert!(s.toggle_overlay());
        assert!(s.overlay_shown());
    }

    #[test]
    fn show_from_focus_message_closes_it() {
        let mut s = AppState::default();
        s.toggle_focus_message();
        assert!(s.toggle_overlay());
        assert!(!s.focus_message_visible);
        assert!(s.overlay_shown());
    }

    #[test]
    fn turn_off_closes_focus_message() {
        let mut s = AppState::default();
        s.toggle_focus_message();
        s.turn_off();
        assert!(!s.focus_message_visible);
        assert!(!s.overlay_shown());
    }
}
