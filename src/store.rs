//! Shared application state.
//!
//! The store holds the wallet-wide state the UI renders from. It is mutated only
//! by dispatching [`Action`]s; each action replaces the part of the state it
//! carries (last writer wins, nothing is merged).

use chrono::{DateTime, Utc};

use crate::app_data::AppData;
use crate::settings::Settings;
use crate::theme::ThemeSettings;
use crate::traits::StateDispatcher;

/// State mutations understood by [`AppStore`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    ThemeChanged(ThemeSettings),
    SettingsChanged(Settings),
    VersionChecked(DateTime<Utc>),
}

/// Wallet-wide state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WalletState {
    pub theme: ThemeSettings,
    pub settings: Settings,
    pub app_data: AppData,
}

/// In-process store for [`WalletState`].
#[derive(Debug, Default)]
pub struct AppStore {
    state: WalletState,
    dispatch_count: u64,
}

impl AppStore {
    pub fn new(state: WalletState) -> Self {
        Self {
            state,
            dispatch_count: 0,
        }
    }

    pub fn state(&self) -> &WalletState {
        &self.state
    }

    /// Number of actions dispatched since creation.
    pub fn dispatch_count(&self) -> u64 {
        self.dispatch_count
    }

    fn reduce(state: &mut WalletState, action: Action) {
        match action {
            Action::ThemeChanged(theme) => state.theme = theme,
            Action::SettingsChanged(settings) => state.settings = settings,
            Action::VersionChecked(at) => state.app_data.record_version_check(at),
        }
    }
}

impl StateDispatcher for AppStore {
    fn dispatch(&mut self, action: Action) {
        log::debug!("Dispatching {:?}", action);
        Self::reduce(&mut self.state, action);
        self.dispatch_count += 1;
    }
}
