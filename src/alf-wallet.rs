//! Alephium Wallet desktop shell
//!
//! This binary hosts the wallet's settings layer in an egui window:
//! - Connection settings form persisted to the wallet's local storage
//! - Theme selection applied to the native window and the shared state store
//! - OS light/dark changes followed when the "System" theme is selected
//! - Version-check bookkeeping shown in the status bar

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]
//!
//! The application is built with a modular architecture:
//! - `app/` - Application state and coordinators
//! - `ui/` - UI panel rendering
//! - `utils/` - Formatting helpers

use chrono::Utc;
use eframe::egui;

mod app;
mod ui;
mod utils;

use alf_wallet::{KeyValueStore, ThemeNotifier};
use app::{
    AppState, ApplicationCoordinator, SystemThemeListener, SystemThemeWatcher, ThemeCoordinator,
};
use ui::panel_manager::{PanelInteraction, PanelManager};

/// Main application entry point that initializes and launches the wallet window.
fn main() -> anyhow::Result<()> {
    env_logger::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([720.0, 420.0])
            .with_title("Alephium Wallet"),
        ..Default::default()
    };

    eframe::run_native(
        "Alephium Wallet",
        options,
        Box::new(|cc| Ok(Box::new(WalletApp::new(cc)))),
    )
    .map_err(|e| anyhow::anyhow!("Failed to start the wallet window: {}", e))
}

/// The wallet desktop application.
///
/// Delegates most functionality to coordinators:
/// - `ApplicationCoordinator` handles storage, settings and version checks
/// - `ThemeCoordinator` handles theme persistence and application
/// - `PanelManager` handles UI panel layout and rendering
struct WalletApp {
    /// Centralized application state
    state: AppState,
    /// Wallet local storage (settings and app data)
    storage: Box<dyn KeyValueStore>,
    /// Publishes OS theme changes
    system_theme_watcher: SystemThemeWatcher,
    /// Receives OS theme changes; unsubscribes when the app is dropped
    system_theme_listener: SystemThemeListener,
}

impl WalletApp {
    /// Creates the application with state hydrated from persistent storage.
    fn new(cc: &eframe::CreationContext) -> Self {
        let theme = ThemeCoordinator::load_theme_from_storage(cc.storage);
        cc.egui_ctx.set_theme(theme);

        let mut storage = ApplicationCoordinator::open_storage();
        let mut state = ApplicationCoordinator::hydrate(storage.as_mut(), theme);
        if ApplicationCoordinator::record_version_check_if_due(&mut state, storage.as_mut(), Utc::now()) {
            log::info!("Version check recorded");
        }

        let notifier = ThemeNotifier::new();
        let system_theme_listener = SystemThemeListener::subscribe(&notifier);

        Self {
            state,
            storage,
            system_theme_watcher: SystemThemeWatcher::new(notifier),
            system_theme_listener,
        }
    }

    /// Handles panel interactions by delegating to the coordinators.
    fn handle_panel_interaction(&mut self, interaction: PanelInteraction, ctx: &egui::Context) {
        match interaction {
            PanelInteraction::ThemeSelected(theme) => {
                ThemeCoordinator::switch_theme(ctx, &mut self.state, theme);
            }
            PanelInteraction::SaveSettingsRequested => {
                ApplicationCoordinator::save_settings(&mut self.state, self.storage.as_mut());
            }
            PanelInteraction::RestoreDefaultsRequested => {
                ApplicationCoordinator::restore_default_settings(&mut self.state);
            }
            PanelInteraction::DiscardSettingsRequested => {
                self.state.reset_settings_form();
                self.state.error_message = None;
            }
        }
    }
}

impl eframe::App for WalletApp {
    /// Called when the app is being shut down - ensures preferences are saved.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        ThemeCoordinator::save_theme_to_storage(storage, self.state.wallet().theme);
        if let Err(e) = self.storage.flush() {
            log::warn!("Failed to flush local storage: {}", e);
        }
    }

    /// Main update loop.
    ///
    /// 1. Pick up OS theme changes
    /// 2. Apply theme
    /// 3. Render all panels via PanelManager
    /// 4. Handle panel interactions
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.system_theme_watcher.poll(ctx);
        if let Some(host_theme) = self.system_theme_listener.latest() {
            self.state.system_dark = Some(host_theme == alf_wallet::ThemeSettings::Dark);
        }

        ThemeCoordinator::apply_current_theme(ctx, &self.state);

        if let Some(interaction) = PanelManager::render_all_panels(ctx, &mut self.state) {
            self.handle_panel_interaction(interaction, ctx);
        }
    }
}
