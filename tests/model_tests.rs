//! Tests for the model and storage layers.

use pace::model::*;
use pace::storage::{
    ConfigurationRepository, JsonFileStore, MemoryStore, PreferenceStore, PreferencesRepository,
    SessionStore,
};

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-6
}

fn reference_screen() -> Size {
    Size::new(1920.0, 1080.0)
}

fn all_configurations() -> Vec<FocusConfiguration> {
    let mut out = Vec::new();
    for mode in FocusMode::ALL {
        for size in FocusSize::ALL {
            for style in BackgroundStyle::ALL {
                out.push(FocusConfiguration::new(*mode, *size, *style));
            }
        }
    }
    out
}

// === Cycling ===

#[test]
fn cycling_each_setting_returns_to_start() {
    for mode in FocusMode::ALL {
        let mut m = *mode;
        for _ in 0..FocusMode::ALL.len() {
            m = m.next();
        }
        assert_eq!(m, *mode);
    }
    for size in FocusSize::ALL {
        let mut s = *size;
        for _ in 0..FocusSize::ALL.len() {
            s = s.next();
        }
        assert_eq!(s, *size);
    }
    for style in BackgroundStyle::ALL {
        let mut b = *style;
        for _ in 0..BackgroundStyle::ALL.len() {
            b = b.next();
        }
        assert_eq!(b, *style);
    }
}

#[test]
fn mode_order_wraps_from_circle_to_rectangle() {
    assert_eq!(FocusMode::Rectangle.next(), FocusMode::CenterColumn);
    assert_eq!(FocusMode::CenterColumn.next(), FocusMode::Square);
    assert_eq!(FocusMode::Square.next(), FocusMode::Circle);
    assert_eq!(FocusMode::Circle.next(), FocusMode::Rectangle);
}

#[test]
fn cycle_next_with_unknown_value_lands_on_first() {
    assert_eq!(cycle_next(7, &[1, 2, 3]), 1);
}

// === Multipliers and geometry ===

#[test]
fn size_multipliers() {
    assert!(approx_eq(FocusSize::Small.multiplier(), 1.0));
    assert!(approx_eq(FocusSize::Medium.multiplier(), 1.5));
    assert!(approx_eq(FocusSize::Large.multiplier(), 2.25));
}

#[test]
fn medium_circle_on_reference_screen_is_810() {
    let g = FocusGeometry::derive(FocusSize::Medium, Some(reference_screen()));
    assert!(approx_eq(g.circle_diameter, 810.0));
}

#[test]
fn center_column_width_ignores_size() {
    for size in FocusSize::ALL {
        let g = FocusGeometry::derive(*size, Some(reference_screen()));
        assert!(approx_eq(g.center_column_size.width, 1344.0));
        assert!(approx_eq(
            g.center_column_size.height,
            BASE_RECTANGLE_HEIGHT * size.multiplier()
        ));
    }
}

#[test]
fn unknown_screen_uses_reference_resolution() {
    assert_eq!(
        FocusGeometry::derive(FocusSize::Large, None),
        FocusGeometry::derive(FocusSize::Large, Some(reference_screen()))
    );
}

#[test]
fn small_square_on_reference_screen() {
    let g = FocusGeometry::derive(FocusSize::Small, Some(reference_screen()));
    assert!(approx_eq(g.square_size.width, 576.0));
    assert!(approx_eq(g.square_size.height, 540.0));
}

#[test]
fn circle_mask_is_centered_on_cursor() {
    let g = FocusGeometry::derive(FocusSize::Medium, Some(reference_screen()));
    let mask = resolve_mask(
        FocusMode::Circle,
        &g,
        Point::new(100.0, 100.0),
        Rect::new(0.0, 0.0, 1920.0, 1080.0),
    );
    // Not clamped to the screen
    assert_eq!(
        mask,
        MaskRegion::Ellipse(Rect::new(-305.0, -305.0, 810.0, 810.0))
    );
}

// === Migration ===

#[test]
fn legacy_mode_table() {
    let cases = [
        (
            Some("small"),
            FocusConfiguration::new(FocusMode::Rectangle, FocusSize::Small, BackgroundStyle::Black),
        ),
        (
            Some("big"),
            FocusConfiguration::new(
                FocusMode::Rectangle,
                FocusSize::Medium,
                BackgroundStyle::Black,
            ),
        ),
        (Some("something-else"), FocusConfiguration::default()),
        (None, FocusConfiguration::default()),
    ];
    for (value, expected) in cases {
        assert_eq!(migrate_legacy_mode(value), expected, "legacy value {value:?}");
    }
}

#[test]
fn default_configuration_is_medium_black_circle() {
    let cfg = FocusConfiguration::default();
    assert_eq!(cfg.mode, FocusMode::Circle);
    assert_eq!(cfg.size, FocusSize::Medium);
    assert_eq!(cfg.background_style, BackgroundStyle::Black);
}

#[test]
fn legacy_mode_keeps_stored_background() {
    let mut store = MemoryStore::new();
    store.insert(PREF_FOCUS_MODE, "big");
    store.insert(PREF_BACKGROUND_STYLE, "white70");
    let cfg = PreferencesRepository::new(store).load();
    assert_eq!(
        cfg,
        FocusConfiguration::new(
            FocusMode::Rectangle,
            FocusSize::Medium,
            BackgroundStyle::WhiteTranslucent
        )
    );
}

// === Persistence ===

#[test]
fn memory_store_round_trips_every_configuration() {
    let mut repo = PreferencesRepository::new(MemoryStore::new());
    for cfg in all_configurations() {
        repo.save(&cfg).unwrap();
        assert_eq!(repo.load(), cfg);
    }
}

#[test]
fn json_store_round_trips_every_configuration_across_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("preferences.json");
    for cfg in all_configurations() {
        let mut repo = PreferencesRepository::new(JsonFileStore::open(&path));
        repo.save(&cfg).unwrap();
        let reopened = PreferencesRepository::new(JsonFileStore::open(&path));
        assert_eq!(reopened.load(), cfg);
    }
}

#[test]
fn json_store_ignores_malformed_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("preferences.json");
    std::fs::write(&path, "{ not json").unwrap();
    let repo = PreferencesRepository::new(JsonFileStore::open(&path));
    assert_eq!(repo.load(), FocusConfiguration::default());
}

#[test]
fn save_writes_all_three_keys() {
    let mut repo = PreferencesRepository::new(MemoryStore::new());
    repo.save(&FocusConfiguration::new(
        FocusMode::Square,
        FocusSize::Large,
        BackgroundStyle::White,
    ))
    .unwrap();
    let store = repo.store();
    assert_eq!(store.string(PREF_FOCUS_MODE).as_deref(), Some("square"));
    assert_eq!(store.string(PREF_FOCUS_SIZE).as_deref(), Some("L"));
    assert_eq!(store.string(PREF_BACKGROUND_STYLE).as_deref(), Some("white"));
}

#[test]
fn onboarding_flag_persists_in_json_store() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("preferences.json");
    {
        let mut repo = PreferencesRepository::new(JsonFileStore::open(&path));
        assert!(!repo.has_completed_onboarding());
        repo.mark_onboarding_completed().unwrap();
    }
    let repo = PreferencesRepository::new(JsonFileStore::open(&path));
    assert!(repo.has_completed_onboarding());
}

// === Menu ===

#[test]
fn menu_has_one_checked_item_per_section() {
    for cfg in all_configurations() {
        let menu = MenuModel::render(&AppState::new(cfg));
        let checked = |pred: fn(&pace::AppEvent) -> bool| {
            menu.items_where(pred).filter(|e| e.is_checked()).count()
        };
        assert_eq!(checked(|e| matches!(e, pace::AppEvent::SelectMode(_))), 1);
        assert_eq!(checked(|e| matches!(e, pace::AppEvent::SelectSize(_))), 1);
        assert_eq!(
            checked(|e| matches!(e, pace::AppEvent::SelectBackground(_))),
            1
        );
    }
}
