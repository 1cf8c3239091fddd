//! Persistence of settings and session state.
//!
//! - [`preferences`]: the `PreferenceStore` trait plus in-memory and JSON
//!   file backends.
//! - [`repository`]: `ConfigurationRepository` / `SessionStore` on top of a
//!   store, including the legacy migration on load.

pub mod preferences;
pub mod repository;

pub use preferences::{JsonFileStore, MemoryStore, PreferenceStore};
pub use repository::{ConfigurationRepository, PreferencesRepository, SessionStore};

use thiserror::Error;

/// Failure to write a preference.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("preference file I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("preference serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),
}
