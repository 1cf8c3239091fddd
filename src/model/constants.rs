//! Configuration constants and default values.
//!
//! This module contains all application constants including geometry bases,
//! NSUserDefaults keys, timing of the tracking loop and the flash reminder.

use std::time::Duration;

// === Geometry ===

/// Base height of the reading band (and of the center column) in points.
pub const BASE_RECTANGLE_HEIGHT: f64 = 200.0;

/// Center column width as a fraction of the screen width. Not size-scaled.
pub const CENTER_COLUMN_WIDTH_FRACTION: f64 = 0.7;

/// Square width as a fraction of the screen width.
pub const SQUARE_WIDTH_FRACTION: f64 = 0.3;

/// Square height as a fraction of the screen height.
pub const SQUARE_HEIGHT_FRACTION: f64 = 0.5;

/// Circle diameter as a fraction of the screen height.
pub const CIRCLE_DIAMETER_FRACTION: f64 = 0.5;

/// Reference resolution used when no display information is available.
pub const REFERENCE_SCREEN_SIZE: (f64, f64) = (1920.0, 1080.0);

// === Size multipliers ===

/// Multiplier for the small size.
pub const SMALL_MULTIPLIER: f64 = 1.0;

/// Multiplier for the medium size. Large is derived as its square.
pub const MEDIUM_MULTIPLIER: f64 = 1.5;

// === Background opacity ===

/// Alpha of the opaque background styles.
pub const OPAQUE_ALPHA: f64 = 1.0;

/// Alpha of the translucent background styles.
pub const TRANSLUCENT_ALPHA: f64 = 0.7;

// === NSUserDefaults Keys ===

/// Key for the focus mode id (also held the legacy "small"/"big" values).
pub const PREF_FOCUS_MODE: &str = "PaceFocusMode";

/// Key for the focus size id.
pub const PREF_FOCUS_SIZE: &str = "PaceFocusSize";

/// Key for the background style id.
pub const PREF_BACKGROUND_STYLE: &str = "PaceBackgroundStyle";

/// Legacy band height, read during migration only.
pub const PREF_LEGACY_BAND_HEIGHT: &str = "PaceBandHeight";

/// Onboarding completion flag.
pub const PREF_HAS_SEEN_ONBOARDING: &str = "hasSeenOnboarding";

/// Persistent anonymous analytics identifier.
pub const PREF_ANONYMOUS_ID: &str = "posthog_user_id";

// === Legacy values ===

/// Legacy mode value for the small reading band.
pub const LEGACY_MODE_SMALL: &str = "small";

/// Legacy mode value for the big reading band.
pub const LEGACY_MODE_BIG: &str = "big";

// === Tracking loop ===

/// Pointer sampling interval (~60 Hz).
pub const TRACKING_INTERVAL: Duration = Duration::from_micros(16_667);

/// Movements smaller than this (on both axes) are ignored.
pub const TRACKING_DEADBAND: f64 = 0.5;

/// Duration of the ease-out animation towards a new cursor position.
pub const TRACKING_EASE_DURATION: Duration = Duration::from_millis(120);

// === Flash reminder ===

/// Interval between flash reminders.
pub const FLASH_INTERVAL: Duration = Duration::from_secs(25 * 60);

/// How long a single flash pulse stays on screen.
pub const FLASH_PULSE_DURATION: Duration = Duration::from_secs(1);

/// Border width of the flash pulse in points.
pub const FLASH_BORDER_WIDTH: f64 = 12.0;

// === Analytics ===

/// Host used when no analytics host is configured.
pub const DEFAULT_ANALYTICS_HOST: &str = "https://us.i.posthog.com";

/// Config key for the analytics api key.
pub const CONFIG_ANALYTICS_API_KEY: &str = "POSTHOG_API_KEY";

/// Config key for the analytics host.
pub const CONFIG_ANALYTICS_HOST: &str = "POSTHOG_HOST";

/// Prefix applied to config keys when read from the environment.
pub const ENV_PREFIX: &str = "PACE_";

/// Directory (under the user config dir) holding `config.json` and the
/// preference file of non-macOS builds.
pub const APP_DIR: &str = "Pace";

/// File name of the static analytics config.
pub const CONFIG_FILENAME: &str = "config.json";

/// File name of the JSON preference store.
pub const PREFERENCES_FILENAME: &str = "preferences.json";

/// Environment variable selecting the log level.
pub const LOG_LEVEL_ENV: &str = "PACE_LOG";
