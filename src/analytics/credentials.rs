//! Analytics credential resolution.
//!
//! The api key and host come from one of two static sources: the
//! environment (primary) and `config.json` in the user config directory
//! (fallback). Placeholder values that were never substituted (`$(...)`)
//! are treated as missing.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::de::IgnoredAny;
use serde::Deserialize;
use tracing::{info, warn};

use crate::model::constants::*;

/// Anything that can answer a config key.
pub trait ConfigSource {
    fn value(&self, key: &str) -> Option<String>;
}

impl ConfigSource for HashMap<String, String> {
    fn value(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }
}

/// Reads `PACE_<KEY>` from the process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnvSource;

impl ConfigSource for EnvSource {
    fn value(&self, key: &str) -> Option<String> {
        std::env::var(format!("{ENV_PREFIX}{key}")).ok()
    }
}

/// Flat JSON object of string values.
#[derive(Debug, Clone, Default)]
pub struct JsonConfigSource {
    values: HashMap<String, String>,
}

impl JsonConfigSource {
    /// `<config dir>/Pace/config.json`.
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(APP_DIR)
            .join(CONFIG_FILENAME)
    }

    /// Load the file, or an empty source if it is missing or malformed.
    pub fn load(path: &Path) -> Self {
        let Ok(contents) = fs::read_to_string(path) else {
            return Self::default();
        };
        Self::parse(&contents).unwrap_or_else(|| {
            warn!(path = %path.display(), "config file is not a JSON object of strings, ignoring");
            Self::default()
        })
    }

    pub fn parse(contents: &str) -> Option<Self> {
        let entries: HashMap<String, ConfigEntry> = serde_json::from_str(contents).ok()?;
        let values = entries
            .into_iter()
            .filter_map(|(k, v)| match v {
                ConfigEntry::Text(s) => Some((k, s)),
                ConfigEntry::Other(_) => None,
            })
            .collect();
        Some(Self { values })
    }
}

/// One value of the config object. Non-string values are skipped.
#[derive(Deserialize)]
#[serde(untagged)]
enum ConfigEntry {
    Text(String),
    Other(IgnoredAny),
}

impl ConfigSource for JsonConfigSource {
    fn value(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }
}

fn usable(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_owned())
        .filter(|v| !v.is_empty() && !v.contains("$("))
}

/// Resolved api key and host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalyticsCredentials {
    pub api_key: String,
    pub host: String,
}

impl AnalyticsCredentials {
    /// Resolve from `primary`, then `fallback`. `None` without an api key;
    /// the host falls back to the default.
    pub fn resolve(primary: &dyn ConfigSource, fallback: &dyn ConfigSource) -> Option<Self> {
        let lookup = |key: &str| usable(primary.value(key)).or_else(|| usable(fallback.value(key)));

        let Some(api_key) = lookup(CONFIG_ANALYTICS_API_KEY) else {
            warn!("analytics api key not found, telemetry disabled");
            return None;
        };
        let host = lookup(CONFIG_ANALYTICS_HOST).unwrap_or_else(|| {
            info!(host = DEFAULT_ANALYTICS_HOST, "using default analytics host");
            DEFAULT_ANALYTICS_HOST.to_owned()
        });
        Some(Self { api_key, host })
    }

    /// Resolve from the environment and the default config file.
    pub fn from_environment() -> Option<Self> {
        let file = JsonConfigSource::load(&JsonConfigSource::default_path());
        Self::resolve(&EnvSource, &file)
    }

    /// First characters of the key, safe for logs.
    pub fn redacted_key(&self) -> String {
        let prefix: String = self.api_key.chars().take(10).collect();
        format!("{prefix}... (length: {})", self.api_key.chars().count())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn source(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn primary_wins_over_fallback() {
        let primary = source(&[("POSTHOG_API_KEY", "phc_primary")]);
        let fallback = source(&[
            ("POSTHOG_API_KEY", "phc_fallback"),
            ("POSTHOG_HOST", "https://eu.example.com"),
        ]);
        let creds = AnalyticsCredentials::resolve(&primary, &fallback).unwrap();
        assert_eq!(creds.api_key, "phc_primary");
        assert_eq!(creds.host, "https://eu.example.com");
    }

    #[test]
    fn unresolved_placeholder_is_skipped() {
        let primary = source(&[
            ("POSTHOG_API_KEY", "$(POSTHOG_API_KEY)"),
            ("POSTHOG_HOST", "$(POSTHOG_HOST)"),
        ]);
        let fallback = source(&[("POSTHOG_API_KEY", "phc_file")]);
        let creds = AnalyticsCredentials::resolve(&primary, &fallback).unwrap();
        assert_eq!(creds.api_key, "phc_file");
        assert_eq!(creds.host, DEFAULT_ANALYTICS_HOST);
    }

    #[test]
    fn missing_or_empty_key_disables_telemetry() {
        let empty = source(&[("POSTHOG_API_KEY", "  ")]);
        assert_eq!(AnalyticsCredentials::resolve(&empty, &HashMap::new()), None);
    }

    #[test]
    fn json_source_keeps_only_strings() {
        let src = JsonConfigSource::parse(r#"{"POSTHOG_API_KEY": "k", "n": 3}"#).unwrap();
        assert_eq!(src.value("POSTHOG_API_KEY").as_deref(), Some("k"));
        assert_eq!(src.value("n"), None);
        assert!(JsonConfigSource::parse("[1, 2]").is_none());
    }

    #[test]
    fn json_source_skips_nested_values() {
        let src = JsonConfigSource::parse(
            r#"{"POSTHOG_HOST": "https://eu.example.com", "extra": {"a": [1, null]}, "on": true}"#,
        )
        .unwrap();
        assert_eq!(src.value("POSTHOG_HOST").as_deref(), Some("https://eu.example.com"));
        assert_eq!(src.value("extra"), None);
        assert_eq!(src.value("on"), None);
        assert!(JsonConfigSource::parse("{ not json").is_none());
    }

    #[test]
    fn redacted_key_hides_tail() {
        let creds = AnalyticsCredentials {
            api_key: "phc_0123456789abcdef".into(),
            host: DEFAULT_ANALYTICS_HOST.into(),
        };
        assert_eq!(creds.redacted_key(), "phc_012345... (length: 20)");
    }
}
