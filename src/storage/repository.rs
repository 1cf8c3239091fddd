//! Configuration and session persistence on top of a `PreferenceStore`.

use tracing::{debug, info};
use uuid::Uuid;

use super::preferences::PreferenceStore;
use super::StoreError;
use crate::model::constants::*;
use crate::model::{FocusConfiguration, FocusMode, RawSettings};

/// Load/save of the focus configuration.
pub trait ConfigurationRepository {
    /// Read and resolve the stored configuration. Never fails; missing or
    /// corrupt values fall back to defaults and legacy values are migrated
    /// (without writing the result back).
    fn load(&self) -> FocusConfiguration;

    /// Overwrite all three stored fields.
    fn save(&mut self, configuration: &FocusConfiguration) -> Result<(), StoreError>;
}

/// Onboarding flag and anonymous analytics id.
pub trait SessionStore {
    fn has_completed_onboarding(&self) -> bool;
    fn mark_onboarding_completed(&mut self) -> Result<(), StoreError>;

    /// Persistent anonymous id, generated and stored on first use.
    fn anonymous_id(&mut self) -> Result<String, StoreError>;
}

/// Repository backed by any `PreferenceStore`.
#[derive(Debug, Clone, Default)]
pub struct PreferencesRepository<S> {
    store: S,
}

impl<S: PreferenceStore> PreferencesRepository<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    /// Raw values as found in the store.
    pub fn raw_settings(&self) -> RawSettings {
        RawSettings {
            mode: self.store.string(PREF_FOCUS_MODE),
            size: self.store.string(PREF_FOCUS_SIZE),
            background_style: self.store.string(PREF_BACKGROUND_STYLE),
            legacy_band_height: self.store.double(PREF_LEGACY_BAND_HEIGHT),
        }
    }
}

impl<S: PreferenceStore> ConfigurationRepository for PreferencesRepository<S> {
    fn load(&self) -> FocusConfiguration {
        let raw = self.raw_settings();
        let cfg = FocusConfiguration::resolve(&raw);

        let legacy = matches!(raw.mode.as_deref(), Some(id) if FocusMode::from_id(id).is_none());
        if legacy {
            info!(
                legacy_mode = raw.mode.as_deref().unwrap_or_default(),
                mode = cfg.mode.id(),
                size = cfg.size.id(),
                "migrated legacy focus mode"
            );
        } else {
            debug!(
                mode = cfg.mode.id(),
                size = cfg.size.id(),
                background = cfg.background_style.id(),
                "loaded focus configuration"
            );
        }
        cfg
    }

    fn save(&mut self, configuration: &FocusConfiguration) -> Result<(), StoreError> {
        self.store
            .set_string(PREF_FOCUS_MODE, configuration.mode.id())?;
        self.store
            .set_string(PREF_FOCUS_SIZE, configuration.size.id())?;
        self.store
            .set_string(PREF_BACKGROUND_STYLE, configuration.background_style.id())?;
        Ok(())
    }
}

impl<S: PreferenceStore> SessionStore for PreferencesRepository<S> {
    fn has_completed_onboarding(&self) -> bool {
        self.store.bool(PREF_HAS_SEEN_ONBOARDING).unwrap_or(false)
    }

    fn mark_onboarding_completed(&mut self) -> Result<(), StoreError> {
        self.store.set_bool(PREF_HAS_SEEN_ONBOARDING, true)
    }

    fn anonymous_id(&mut self) -> Result<String, StoreError> {
        if let Some(id) = self.store.string(PREF_ANONYMOUS_ID).filter(|s| !s.is_empty()) {
            return Ok(id);
        }
        let id = Uuid::new_v4().to_string().to_uppercase();
        self.store.set_string(PREF_ANONYMOUS_ID, &id)?;
        info!(anonymous_id = %id, "generated anonymous id");
        Ok(id)
    }
}
