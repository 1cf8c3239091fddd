//! Focus configuration (pure Rust, no FFI).
//!
//! Holds the three user settings, resolves them from raw stored values
//! (including the legacy migration) and derives concrete geometry for a
//! given screen size.

use super::constants::*;
use super::focus::{BackgroundStyle, FocusMode, FocusSize};
use super::geometry::Size;

/// The three user-facing settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FocusConfiguration {
    pub mode: FocusMode,
    pub size: FocusSize,
    pub background_style: BackgroundStyle,
}

impl Default for FocusConfiguration {
    /// First-run configuration.
    fn default() -> Self {
        Self {
            mode: FocusMode::Circle,
            size: FocusSize::Medium,
            background_style: BackgroundStyle::Black,
        }
    }
}

/// Values as they were found in the preference store, before validation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawSettings {
    pub mode: Option<String>,
    pub size: Option<String>,
    pub background_style: Option<String>,
    pub legacy_band_height: Option<f64>,
}

impl FocusConfiguration {
    pub fn new(mode: FocusMode, size: FocusSize, background_style: BackgroundStyle) -> Self {
        Self {
            mode,
            size,
            background_style,
        }
    }

    /// Resolve stored values into a complete configuration. Never fails.
    ///
    /// A mode value that is not a current id is treated as the legacy
    /// single-field scheme. The result is not written back here; callers
    /// that want the migration to stick must save it.
    pub fn resolve(raw: &RawSettings) -> Self {
        let background_style = raw
            .background_style
            .as_deref()
            .and_then(BackgroundStyle::from_id)
            .unwrap_or(BackgroundStyle::Black);
        let stored_size = raw.size.as_deref().and_then(FocusSize::from_id);

        match raw.mode.as_deref() {
            Some(id) => match FocusMode::from_id(id) {
                Some(mode) => Self::new(
                    mode,
                    stored_size.unwrap_or(FocusSize::Small),
                    background_style,
                ),
                None => Self {
                    background_style,
                    ..migrate_legacy_mode(Some(id))
                },
            },
            None if raw.size.is_some() || raw.background_style.is_some() => Self::new(
                FocusMode::Rectangle,
                stored_size.unwrap_or(FocusSize::Small),
                background_style,
            ),
            None => match raw.legacy_band_height {
                Some(height) => migrate_legacy_band_height(height),
                None => Self::default(),
            },
        }
    }

    /// Geometry for this configuration on a screen of `screen` size.
    pub fn geometry(&self, screen: Option<Size>) -> FocusGeometry {
        FocusGeometry::derive(self.size, screen)
    }
}

/// Map a legacy mode value to the current model.
///
/// `"small"` and `"big"` were the two reading bands; anything else
/// (including nothing at all) becomes the first-run default.
pub fn migrate_legacy_mode(value: Option<&str>) -> FocusConfiguration {
    match value {
        Some(LEGACY_MODE_SMALL) => FocusConfiguration::new(
            FocusMode::Rectangle,
            FocusSize::Small,
            BackgroundStyle::Black,
        ),
        Some(LEGACY_MODE_BIG) => FocusConfiguration::new(
            FocusMode::Rectangle,
            FocusSize::Medium,
            BackgroundStyle::Black,
        ),
        _ => FocusConfiguration::default(),
    }
}

/// A stored band height without a mode means the old default band.
fn migrate_legacy_band_height(height: f64) -> FocusConfiguration {
    let size = if height <= BASE_RECTANGLE_HEIGHT {
        FocusSize::Small
    } else {
        FocusSize::Medium
    };
    FocusConfiguration::new(FocusMode::Rectangle, size, BackgroundStyle::Black)
}

/// Pixel geometry derived from a size and a screen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FocusGeometry {
    pub rectangle_height: f64,
    pub center_column_size: Size,
    pub square_size: Size,
    pub circle_diameter: f64,
}

impl FocusGeometry {
    pub fn derive(size: FocusSize, screen: Option<Size>) -> Self {
        let screen = screen.unwrap_or(Size::new(
            REFERENCE_SCREEN_SIZE.0,
            REFERENCE_SCREEN_SIZE.1,
        ));
        let m = size.multiplier();
        let band = BASE_RECTANGLE_HEIGHT * m;

        Self {
            rectangle_height: band,
            center_column_size: Size::new(screen.width * CENTER_COLUMN_WIDTH_FRACTION, band),
            square_size: Size::new(
                screen.width * SQUARE_WIDTH_FRACTION * m,
                screen.height * SQUARE_HEIGHT_FRACTION * m,
            ),
            circle_diameter: screen.height * CIRCLE_DIAMETER_FRACTION * m,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(mode: Option<&str>, size: Option<&str>, bg: Option<&str>) -> RawSettings {
        RawSettings {
            mode: mode.map(str::to_owned),
            size: size.map(str::to_owned),
            background_style: bg.map(str::to_owned),
            legacy_band_height: None,
        }
    }

    #[test]
    fn resolves_current_values() {
        let cfg = FocusConfiguration::resolve(&raw(Some("square"), Some("L"), Some("white70")));
        assert_eq!(
            cfg,
            FocusConfiguration::new(
                FocusMode::Square,
                FocusSize::Large,
                BackgroundStyle::WhiteTranslucent
            )
        );
    }

    #[test]
    fn corrupt_size_and_background_fall_back() {
        let cfg = FocusConfiguration::resolve(&raw(Some("circle"), Some("huge"), Some("plaid")));
        assert_eq!(cfg.size, FocusSize::Small);
        assert_eq!(cfg.background_style, BackgroundStyle::Black);
    }

    #[test]
    fn empty_store_is_first_run() {
        assert_eq!(
            FocusConfiguration::resolve(&RawSettings::default()),
            FocusConfiguration::default()
        );
    }

    #[test]
    fn missing_mode_with_other_keys_is_rectangle() {
        let cfg = FocusConfiguration::resolve(&raw(None, Some("M"), None));
        assert_eq!(cfg.mode, FocusMode::Rectangle);
        assert_eq!(cfg.size, FocusSize::Medium);
    }

    #[test]
    fn legacy_band_height_alone_migrates_to_band() {
        let mut r = RawSettings::default();
        r.legacy_band_height = Some(300.0);
        let cfg = FocusConfiguration::resolve(&r);
        assert_eq!(cfg.mode, FocusMode::Rectangle);
        assert_eq!(cfg.size, FocusSize::Medium);

        r.legacy_band_height = Some(200.0);
        assert_eq!(FocusConfiguration::resolve(&r).size, FocusSize::Small);
    }

    #[test]
    fn legacy_migration_keeps_stored_background() {
        let cfg = FocusConfiguration::resolve(&raw(Some("big"), None, Some("white")));
        assert_eq!(cfg.mode, FocusMode::Rectangle);
        assert_eq!(cfg.size, FocusSize::Medium);
        assert_eq!(cfg.background_style, BackgroundStyle::White);
    }

    #[test]
    fn geometry_falls_back_to_reference_screen() {
        let g = FocusGeometry::derive(FocusSize::Small, None);
        assert_eq!(g.center_column_size.width, 1920.0 * 0.7);
        assert_eq!(g.circle_diameter, 540.0);
    }
}
