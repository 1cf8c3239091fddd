//! Controller behaviour through the public event API.

use std::rc::Rc;
use std::time::Duration;

use pace::analytics::{AnalyticsEvent, RecordingSink};
use pace::app::ManualClock;
use pace::model::constants::{FLASH_INTERVAL, PREF_FOCUS_MODE};
use pace::model::MenuEntry;
use pace::storage::{MemoryStore, PreferenceStore, PreferencesRepository};
use pace::{AppEvent, BackgroundStyle, FocusConfiguration, FocusMode, FocusSize, Flow, PaceController};

type TestController =
    PaceController<PreferencesRepository<MemoryStore>, RecordingSink, Rc<ManualClock>>;

fn started(store: MemoryStore) -> (TestController, Rc<ManualClock>) {
    let clock = Rc::new(ManualClock::new());
    let mut c = PaceController::new(
        PreferencesRepository::new(store),
        RecordingSink::default(),
        clock.clone(),
    );
    c.start();
    (c, clock)
}

fn events(c: &TestController) -> &[AnalyticsEvent] {
    &c.analytics().sink().events
}

#[test]
fn stored_configuration_is_restored() {
    let mut store = MemoryStore::new();
    store.insert(PREF_FOCUS_MODE, "square");
    let (c, _) = started(store);
    assert_eq!(c.configuration().mode, FocusMode::Square);
    assert_eq!(c.configuration().size, FocusSize::Small);
}

#[test]
fn cycling_while_turned_off_shows_the_overlay() {
    let (mut c, _) = started(MemoryStore::new());
    c.handle(AppEvent::TurnOff);
    let render = c.render(None);
    assert!(!render.overlay_shown);
    assert!(!render.tracking_active);

    c.handle(AppEvent::CycleMode);
    let render = c.render(None);
    assert!(render.overlay_shown);
    assert!(render.tracking_active);
    assert_eq!(render.configuration.mode, FocusMode::Rectangle);
}

#[test]
fn cycling_while_hidden_shows_the_overlay() {
    let (mut c, _) = started(MemoryStore::new());
    c.handle(AppEvent::ToggleOverlay);
    assert!(!c.render(None).overlay_shown);

    c.handle(AppEvent::CycleBackground);
    assert!(c.render(None).overlay_shown);
    assert_eq!(
        c.configuration().background_style,
        BackgroundStyle::BlackTranslucent
    );
}

#[test]
fn focus_message_suspends_and_restores_overlay() {
    let (mut c, _) = started(MemoryStore::new());
    c.handle(AppEvent::ToggleFocusMessage);
    let render = c.render(None);
    assert!(render.focus_message_visible);
    assert!(!render.overlay_shown);
    assert!(!render.tracking_active);

    c.handle(AppEvent::ToggleFocusMessage);
    let render = c.render(None);
    assert!(!render.focus_message_visible);
    assert!(render.overlay_shown);

    let names = c.analytics().sink().names();
    assert!(names.contains(&"focus_mode_shown"));
    assert!(names.contains(&"focus_mode_hidden"));
    assert!(!names.contains(&"pace_view_hidden"));
}

fn toggle_title(c: &TestController) -> String {
    match &c.render(None).menu.entries[0] {
        MenuEntry::Item { title, .. } => title.clone(),
        other => panic!("unexpected first entry {other:?}"),
    }
}

#[test]
fn show_pace_from_focus_message_closes_it() {
    let (mut c, _) = started(MemoryStore::new());
    c.handle(AppEvent::ToggleFocusMessage);
    assert_eq!(toggle_title(&c), "Show Pace");

    c.handle(AppEvent::ToggleOverlay);
    let render = c.render(None);
    assert!(render.overlay_shown);
    assert!(!render.focus_message_visible);
    assert_eq!(toggle_title(&c), "Hide Pace");
    assert_eq!(
        c.analytics().sink().names().last(),
        Some(&"focus_mode_hidden")
    );
}

#[test]
fn turn_off_closes_focus_message() {
    let (mut c, _) = started(MemoryStore::new());
    c.handle(AppEvent::ToggleFocusMessage);
    c.handle(AppEvent::TurnOff);
    let render = c.render(None);
    assert!(!render.overlay_shown);
    assert!(!render.focus_message_visible);

    let names = c.analytics().sink().names();
    assert!(names.ends_with(&["focus_mode_hidden", "pace_view_hidden"]));
}

#[test]
fn mode_change_reports_deactivation_first() {
    let (mut c, clock) = started(MemoryStore::new());
    clock.advance(Duration::from_secs(12));
    c.handle(AppEvent::SelectMode(FocusMode::Square));

    let tail = &events(&c)[events(&c).len() - 2..];
    assert_eq!(
        tail[0],
        AnalyticsEvent::ModeDeactivated {
            mode: "circle".into(),
            duration_seconds: 12.0,
        }
    );
    assert_eq!(
        tail[1],
        AnalyticsEvent::ModeActivated {
            mode: "square".into(),
            size: "M".into(),
        }
    );
}

#[test]
fn selecting_current_mode_does_not_report() {
    let (mut c, _) = started(MemoryStore::new());
    let before = events(&c).len();
    c.handle(AppEvent::SelectMode(FocusMode::Circle));
    assert_eq!(events(&c).len(), before);
}

#[test]
fn selection_is_persisted() {
    let (mut c, _) = started(MemoryStore::new());
    c.handle(AppEvent::SelectSize(FocusSize::Large));
    c.handle(AppEvent::SelectBackground(BackgroundStyle::White));
    let store = c.repository().store();
    assert_eq!(store.string("PaceFocusSize").as_deref(), Some("L"));
    assert_eq!(store.string("PaceBackgroundStyle").as_deref(), Some("white"));
    assert_eq!(
        *c.configuration(),
        FocusConfiguration::new(FocusMode::Circle, FocusSize::Large, BackgroundStyle::White)
    );
}

#[test]
fn menu_follows_selection() {
    let (mut c, _) = started(MemoryStore::new());
    c.handle(AppEvent::SelectMode(FocusMode::CenterColumn));
    let menu = c.render(None).menu;
    let checked: Vec<_> = menu
        .items_where(|e| matches!(e, AppEvent::SelectMode(_)))
        .filter(|e| e.is_checked())
        .collect();
    assert_eq!(checked.len(), 1);
    assert!(matches!(
        checked[0],
        MenuEntry::Item {
            event: AppEvent::SelectMode(FocusMode::CenterColumn),
            ..
        }
    ));
}

#[test]
fn flash_reminder_fires_once_per_interval() {
    let (mut c, clock) = started(MemoryStore::new());
    c.handle(AppEvent::ToggleFlash);
    assert!(!c.poll_flash());

    clock.advance(FLASH_INTERVAL);
    assert!(c.poll_flash());
    assert!(!c.poll_flash());

    c.handle(AppEvent::ToggleFlash);
    clock.advance(FLASH_INTERVAL * 2);
    assert!(!c.poll_flash());
}

#[test]
fn quit_then_terminate_closes_the_session() {
    let (mut c, clock) = started(MemoryStore::new());
    clock.advance(Duration::from_secs(90));
    assert_eq!(c.handle(AppEvent::Quit), Flow::Quit);
    assert_eq!(c.handle(AppEvent::WillTerminate), Flow::Continue);

    let last = events(&c).last().cloned();
    assert_eq!(
        last,
        Some(AnalyticsEvent::AppClosed {
            session_duration_seconds: 90.0
        })
    );
}
