//! Centralized application state for the wallet shell.
//!
//! Wallet-wide state lives in the [`AppStore`]; this struct adds what only the
//! desktop shell needs: the settings form buffers and transient messages.

use alf_wallet::{AppStore, Settings, SettingsError, WalletState};

/// Text buffers behind the connection settings form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingsForm {
    pub host: String,
    pub port: String,
}

impl SettingsForm {
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            host: settings.host.clone(),
            port: settings.port.to_string(),
        }
    }

    /// Parses the buffers into settings. Does not validate the values.
    pub fn parse(&self) -> Result<Settings, SettingsError> {
        let port = self
            .port
            .trim()
            .parse::<u16>()
            .map_err(|_| SettingsError::UnparsablePort(self.port.trim().to_string()))?;
        Ok(Settings::new(self.host.trim(), port))
    }

    /// True if the buffers differ from `settings`.
    pub fn is_modified(&self, settings: &Settings) -> bool {
        *self != Self::from_settings(settings)
    }
}

/// Main application state.
pub struct AppState {
    /// Shared wallet state
    pub store: AppStore,

    /// Connection settings being edited
    pub settings_form: SettingsForm,

    /// Host preference reported by the OS (true = dark), if known
    pub system_dark: Option<bool>,

    /// Current error message to display (if any)
    pub error_message: Option<String>,

    /// Last successful operation to display (if any)
    pub status_message: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(WalletState::default())
    }
}

impl AppState {
    pub fn new(wallet: WalletState) -> Self {
        let settings_form = SettingsForm::from_settings(&wallet.settings);
        Self {
            store: AppStore::new(wallet),
            settings_form,
            system_dark: None,
            error_message: None,
            status_message: None,
        }
    }

    pub fn wallet(&self) -> &WalletState {
        self.store.state()
    }

    /// Discards unsaved edits in the settings form.
    pub fn reset_settings_form(&mut self) {
        self.settings_form = SettingsForm::from_settings(&self.store.state().settings);
    }
}
