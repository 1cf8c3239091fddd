//! Key-value preference stores.
//!
//! `PreferenceStore` is the seam between the repository and the backend:
//! NSUserDefaults on macOS (`platform::macos::storage`), a JSON file
//! elsewhere, and an in-memory map for tests. Every setter writes through
//! synchronously.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde_json::{Map, Value};
use tracing::{debug, warn};

use super::StoreError;
use crate::model::constants::{APP_DIR, PREFERENCES_FILENAME};

/// Minimal typed key-value store.
pub trait PreferenceStore {
    fn string(&self, key: &str) -> Option<String>;
    fn double(&self, key: &str) -> Option<f64>;
    fn bool(&self, key: &str) -> Option<bool>;

    fn set_string(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
    fn set_bool(&mut self, key: &str, value: bool) -> Result<(), StoreError>;
}

/// Volatile store used by tests and as a last resort.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MemoryStore {
    values: BTreeMap<String, Value>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed an arbitrary JSON value (e.g. a legacy number or a corrupt type).
    pub fn insert(&mut self, key: &str, value: impl Into<Value>) {
        self.values.insert(key.to_owned(), value.into());
    }

    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }
}

impl PreferenceStore for MemoryStore {
    fn string(&self, key: &str) -> Option<String> {
        self.values.get(key)?.as_str().map(str::to_owned)
    }

    fn double(&self, key: &str) -> Option<f64> {
        self.values.get(key)?.as_f64()
    }

    fn bool(&self, key: &str) -> Option<bool> {
        self.values.get(key)?.as_bool()
    }

    fn set_string(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.insert(key, value);
        Ok(())
    }

    fn set_bool(&mut self, key: &str, value: bool) -> Result<(), StoreError> {
        self.insert(key, value);
        Ok(())
    }
}

/// JSON object on disk, rewritten in full on every set.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    values: Map<String, Value>,
}

impl JsonFileStore {
    /// Default location: `<config dir>/Pace/preferences.json`.
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(APP_DIR)
            .join(PREFERENCES_FILENAME)
    }

    /// Open the store at `path`. A missing file is an empty store; an
    /// unreadable or malformed one is logged and treated as empty.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let values = match fs::read_to_string(&path) {
            Ok(contents) => match serde_json::from_str::<Value>(&contents) {
                Ok(Value::Object(map)) => map,
                Ok(_) => {
                    warn!(path = %path.display(), "preference file is not a JSON object, ignoring");
                    Map::new()
                }
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "malformed preference file, ignoring");
                    Map::new()
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "no preference file yet");
                Map::new()
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "cannot read preference file, ignoring");
                Map::new()
            }
        };
        Self { path, values }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn set_value(&mut self, key: &str, value: Value) -> Result<(), StoreError> {
        self.values.insert(key.to_owned(), value);
        self.flush()
    }

    fn flush(&self) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(&self.values)?;
        fs::write(&self.path, json)?;
        Ok(())
    }
}

impl PreferenceStore for JsonFileStore {
    fn string(&self, key: &str) -> Option<String> {
        self.values.get(key)?.as_str().map(str::to_owned)
    }

    fn double(&self, key: &str) -> Option<f64> {
        self.values.get(key)?.as_f64()
    }

    fn bool(&self, key: &str) -> Option<bool> {
        self.values.get(key)?.as_bool()
    }

    fn set_string(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.set_value(key, Value::from(value))
    }

    fn set_bool(&mut self, key: &str, value: bool) -> Result<(), StoreError> {
        self.set_value(key, Value::from(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_type_mismatch_reads_as_missing() {
        let mut store = MemoryStore::new();
        store.insert("k", 3.5);
        assert_eq!(store.string("k"), None);
        assert_eq!(store.double("k"), Some(3.5));
        assert_eq!(store.bool("k"), None);
    }

    #[test]
    fn json_store_writes_through() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("prefs.json");

        let mut store = JsonFileStore::open(&path);
        store.set_string("mode", "square").unwrap();
        store.set_bool("flag", true).unwrap();

        let reopened = JsonFileStore::open(&path);
        assert_eq!(reopened.string("mode").as_deref(), Some("square"));
        assert_eq!(reopened.bool("flag"), Some(true));
    }

    #[test]
    fn json_store_ignores_malformed_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.json");
        fs::write(&path, "{ not json").unwrap();

        let store = JsonFileStore::open(&path);
        assert_eq!(store.string("anything"), None);
    }
}
