//! Application-level coordination and workflow management.
//!
//! Handles startup hydration, saving connection settings, and the version-check
//! bookkeeping, keeping the wallet store and the local storage in step.

use chrono::{DateTime, Utc};

use alf_wallet::{
    Action, AppDataStore, FileStorage, KeyValueStore, MemoryStorage, SettingsStore,
    StateDispatcher, ThemeSettings, WalletState, VERSION_CHECK_INTERVAL,
};

use crate::app::AppState;

/// Coordinates application-level operations and workflows.
///
/// This struct is responsible for:
/// - Opening the wallet's local storage
/// - Hydrating the state store on startup
/// - Persisting connection settings edited in the UI
/// - Recording version checks
pub struct ApplicationCoordinator;

impl ApplicationCoordinator {
    /// Opens the durable local storage, or an in-memory one if that is not possible.
    pub fn open_storage() -> Box<dyn KeyValueStore> {
        match FileStorage::open_default() {
            Ok(Some(storage)) => {
                log::info!("Using local storage at {}", storage.path().display());
                Box::new(storage)
            }
            Ok(None) => {
                log::warn!("No config directory available, settings will not be persisted");
                Box::new(MemoryStorage::new())
            }
            Err(e) => {
                log::error!("Failed to open local storage: {}, settings will not be persisted", e);
                Box::new(MemoryStorage::new())
            }
        }
    }

    /// Builds the initial application state from storage.
    pub fn hydrate(storage: &mut dyn KeyValueStore, theme: ThemeSettings) -> AppState {
        let settings = SettingsStore::new(&mut *storage).load_or_default();
        let app_data = AppDataStore::new(&mut *storage).load_or_default();

        AppState::new(WalletState {
            theme,
            settings,
            app_data,
        })
    }

    /// Validates and saves the settings form.
    ///
    /// On success the store receives the new settings; on failure the error is
    /// shown and nothing is written.
    pub fn save_settings(state: &mut AppState, storage: &mut dyn KeyValueStore) {
        let settings = match state.settings_form.parse() {
            Ok(settings) => settings,
            Err(e) => {
                state.error_message = Some(format!("Invalid settings: {}", e));
                return;
            }
        };

        if let Err(e) = settings.validate() {
            state.error_message = Some(format!("Invalid settings: {}", e));
            return;
        }

        match SettingsStore::new(storage).save(&settings) {
            Ok(()) => {
                state.status_message = Some(format!("Connected to {}", settings.node_url()));
                state.error_message = None;
                state.store.dispatch(Action::SettingsChanged(settings));
                state.reset_settings_form();
            }
            Err(e) => {
                log::error!("Failed to save settings: {}", e);
                state.error_message = Some(format!("Error saving settings: {}", e));
            }
        }
    }

    /// Replaces the form buffers with the default settings. Nothing is saved.
    pub fn restore_default_settings(state: &mut AppState) {
        let defaults = SettingsStore::<MemoryStorage>::load_default();
        state.settings_form = crate::app::SettingsForm::from_settings(&defaults);
        state.error_message = None;
    }

    /// Records a version check at `now` if the last one is old enough.
    ///
    /// Returns true if a check was recorded.
    pub fn record_version_check_if_due(
        state: &mut AppState,
        storage: &mut dyn KeyValueStore,
        now: DateTime<Utc>,
    ) -> bool {
        if !state.wallet().app_data.is_version_check_due(now, VERSION_CHECK_INTERVAL) {
            return false;
        }

        state.store.dispatch(Action::VersionChecked(now));
        if let Err(e) = AppDataStore::new(storage).save(&state.wallet().app_data) {
            log::warn!("Failed to save app data: {}", e);
        }
        true
    }
}
