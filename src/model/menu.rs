//! Status bar menu model.
//!
//! The menu is regenerated from `AppState` on every change, so checkmarks
//! can never drift from the configuration.

use super::app_state::AppState;
use super::focus::{BackgroundStyle, Cyclic, FocusMode, FocusSize};
use super::hotkeys::binding_for_event;
use crate::events::AppEvent;

/// A single row of the status bar menu.
#[derive(Debug, Clone, PartialEq)]
pub enum MenuEntry {
    /// Clickable item.
    Item {
        title: String,
        event: AppEvent,
        checked: bool,
        /// Chord hint shown next to the title, if bound.
        hotkey: Option<String>,
    },
    /// Non-clickable section header.
    Header(String),
    Separator,
}

impl MenuEntry {
    fn item(title: impl Into<String>, event: AppEvent, checked: bool) -> Self {
        MenuEntry::Item {
            title: title.into(),
            event,
            checked,
            hotkey: binding_for_event(event).map(|b| b.display()),
        }
    }

    pub fn is_checked(&self) -> bool {
        matches!(self, MenuEntry::Item { checked: true, .. })
    }
}

/// Ordered menu contents.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MenuModel {
    pub entries: Vec<MenuEntry>,
}

impl MenuModel {
    pub fn render(state: &AppState) -> Self {
        let cfg = &state.configuration;
        let mut entries = Vec::new();

        let toggle_title = if state.overlay_shown() {
            "Hide Pace"
        } else {
            "Show Pace"
        };
        entries.push(MenuEntry::item(toggle_title, AppEvent::ToggleOverlay, false));
        entries.push(MenuEntry::Separator);

        entries.push(MenuEntry::Header(format!(
            "Mode ({})",
            binding_for_event(AppEvent::CycleMode)
                .map(|b| b.display())
                .unwrap_or_default()
        )));
        for mode in FocusMode::ALL {
            entries.push(MenuEntry::item(
                mode.label(),
                AppEvent::SelectMode(*mode),
                *mode == cfg.mode,
            ));
        }

        entries.push(MenuEntry::Header(format!(
            "Size ({})",
            binding_for_event(AppEvent::CycleSize)
                .map(|b| b.display())
                .unwrap_or_default()
        )));
        for size in FocusSize::ALL {
            entries.push(MenuEntry::item(
                size.label(),
                AppEvent::SelectSize(*size),
                *size == cfg.size,
            ));
        }

        entries.push(MenuEntry::Header(format!(
            "Background ({})",
            binding_for_event(AppEvent::CycleBackground)
                .map(|b| b.display())
                .unwrap_or_default()
        )));
        for style in BackgroundStyle::ALL {
            entries.push(MenuEntry::item(
                style.label(),
                AppEvent::SelectBackground(*style),
                *style == cfg.background_style,
            ));
        }

        entries.push(MenuEntry::Separator);
        entries.push(MenuEntry::item(
            "Focus Message",
            AppEvent::ToggleFocusMessage,
            state.focus_message_visible,
        ));
        entries.push(MenuEntry::item(
            "Flash Reminder (25 min)",
            AppEvent::ToggleFlash,
            state.flash_active,
        ));
        entries.push(MenuEntry::item("Turn Off", AppEvent::TurnOff, false));
        entries.push(MenuEntry::Separator);
        entries.push(MenuEntry::item("Quit Pace", AppEvent::Quit, false));

        Self { entries }
    }

    /// Items whose event matches `pred`.
    pub fn items_where<'a>(
        &'a self,
        pred: impl Fn(&AppEvent) -> bool + 'a,
    ) -> impl Iterator<Item = &'a MenuEntry> + 'a {
        self.entries
            .iter()
            .filter(move |e| matches!(e, MenuEntry::Item { event, .. } if pred(event)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::FocusConfiguration;

    #[test]
    fn one_checked_item_per_section() {
        let state = AppState::new(FocusConfiguration::new(
            FocusMode::Square,
            FocusSize::Large,
            BackgroundStyle::White,
        ));
        let menu = MenuModel::render(&state);

        let modes: Vec<_> = menu
            .items_where(|e| matches!(e, AppEvent::SelectMode(_)))
            .collect();
        assert_eq!(modes.len(), FocusMode::ALL.len());
        assert_eq!(modes.iter().filter(|e| e.is_checked()).count(), 1);

        let checked_size = menu
            .items_where(|e| matches!(e, AppEvent::SelectSize(_)))
            .find(|e| e.is_checked());
        assert!(matches!(
            checked_size,
            Some(MenuEntry::Item {
                event: AppEvent::SelectSize(FocusSize::Large),
                ..
            })
        ));

        let bgs = menu
            .items_where(|e| matches!(e, AppEvent::SelectBackground(_)))
            .filter(|e| e.is_checked())
            .count();
        assert_eq!(bgs, 1);
    }

    #[test]
    fn toggle_title_follows_visibility() {
        let mut state = AppState::default();
        let menu = MenuModel::render(&state);
        assert!(matches!(&menu.entries[0], MenuEntry::Item { title, .. } if title == "Hide Pace"));

        state.turn_off();
        let menu = MenuModel::render(&state);
        assert!(matches!(&menu.entries[0], MenuEntry::Item { title, .. } if title == "Show Pace"));
    }

    #[test]
    fn bound_items_carry_hotkey_hint() {
        let menu = MenuModel::render(&AppState::default());
        let turn_off = menu
            .items_where(|e| *e == AppEvent::TurnOff)
            .next()
            .cloned();
        assert!(matches!(
            turn_off,
            Some(MenuEntry::Item { hotkey: Some(ref h), .. }) if h == "⌃⌥O"
        ));
    }
}
