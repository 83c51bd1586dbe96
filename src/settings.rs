//! Connection settings persistence.
//!
//! Settings are a flat record stored as one JSON string under [`SETTINGS_KEY`].
//! The record is always read and written wholesale: a missing record is replaced
//! by the defaults as a whole, and saving never merges with what was stored before.

use serde::{Deserialize, Serialize};

use crate::errors::{SettingsError, StoreError};
use crate::storage::{read_json, report_corrupt_once, write_json};
use crate::traits::KeyValueStore;

/// Storage key of the settings record.
pub const SETTINGS_KEY: &str = "settings";

pub const DEFAULT_HOST: &str = "localhost";
pub const DEFAULT_PORT: u16 = 10973;

/// Connection settings for reaching the wallet's node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    pub host: String,
    pub port: u16,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

impl Settings {
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
        }
    }

    /// Base URL of the node these settings point at.
    pub fn node_url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }

    /// Checks that the settings can be used to reach a node.
    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.host.trim().is_empty() {
            return Err(SettingsError::EmptyHost);
        }
        if self.port == 0 {
            return Err(SettingsError::InvalidPort);
        }
        Ok(())
    }
}

/// Single source of truth for connection settings, backed by a key-value store.
pub struct SettingsStore<S> {
    storage: S,
}

impl<S: KeyValueStore> SettingsStore<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// Returns the hardcoded default settings.
    pub fn load_default() -> Settings {
        Settings::default()
    }

    /// Reads the stored settings.
    ///
    /// # Returns
    /// * `Ok(None)` - nothing has been saved yet
    /// * `Ok(Some(settings))` - the stored record
    /// * `Err(StoreError::CorruptPersistedState)` - the stored value is malformed
    pub fn load(&self) -> Result<Option<Settings>, StoreError> {
        read_json(&self.storage, SETTINGS_KEY)
    }

    /// Reads the stored settings, falling back to the defaults.
    ///
    /// A corrupt stored value is removed and reported once; the caller always
    /// receives a fully populated record.
    pub fn load_or_default(&mut self) -> Settings {
        match self.load() {
            Ok(Some(settings)) => settings,
            Ok(None) => {
                log::info!("No stored settings, using defaults");
                Self::load_default()
            }
            Err(e) => {
                report_corrupt_once(SETTINGS_KEY, &e);
                self.storage.remove(SETTINGS_KEY);
                if let Err(flush_err) = self.storage.flush() {
                    log::warn!("Failed to flush after discarding settings: {}", flush_err);
                }
                Self::load_default()
            }
        }
    }

    /// Overwrites the stored settings with `settings`.
    pub fn save(&mut self, settings: &Settings) -> Result<(), StoreError> {
        write_json(&mut self.storage, SETTINGS_KEY, settings)?;
        log::info!("Saved settings ({})", settings.node_url());
        Ok(())
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }
}
