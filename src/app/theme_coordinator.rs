//! Theme management and persistence coordination.
//!
//! Handles theme selection, application, and persistent storage across sessions.

use alf_wallet::{NativeThemeCapability, ThemePalette, ThemeSettings, ThemeSwitchBridge};

use crate::app::AppState;

const THEME_KEY: &str = "theme_preference";

/// Native theme hook backed by the egui context.
pub struct EguiThemeCapability {
    ctx: egui::Context,
}

impl EguiThemeCapability {
    pub fn new(ctx: egui::Context) -> Self {
        Self { ctx }
    }
}

impl NativeThemeCapability for EguiThemeCapability {
    fn set_native_theme(&self, theme: ThemeSettings) {
        self.ctx.set_theme(theme);
    }
}

/// Coordinates theme management and persistence.
pub struct ThemeCoordinator;

impl ThemeCoordinator {
    /// Loads theme preference from persistent storage during application startup.
    ///
    /// Returns the stored theme if found and valid, otherwise the default.
    pub fn load_theme_from_storage(storage: Option<&dyn eframe::Storage>) -> ThemeSettings {
        let Some(stored) = storage.and_then(|s| s.get_string(THEME_KEY)) else {
            return ThemeSettings::default();
        };
        stored.parse().unwrap_or_else(|e| {
            log::warn!("{}, using default theme", e);
            ThemeSettings::default()
        })
    }

    /// Saves current theme preference to persistent storage.
    pub fn save_theme_to_storage(storage: &mut dyn eframe::Storage, theme: ThemeSettings) {
        storage.set_string(THEME_KEY, theme.as_str().to_string());
        storage.flush();
    }

    /// Switches the theme through the host and the state store.
    pub fn switch_theme(ctx: &egui::Context, state: &mut AppState, theme: ThemeSettings) {
        let native: Box<dyn NativeThemeCapability> = Box::new(EguiThemeCapability::new(ctx.clone()));
        ThemeSwitchBridge::new(Some(native), &mut state.store).switch_theme(theme);
        log::info!("Theme switched to {}", theme);
    }

    /// Applies the current theme to the egui context.
    ///
    /// Called every frame to ensure theme is correctly applied.
    pub fn apply_current_theme(ctx: &egui::Context, state: &AppState) {
        let resolved = state.wallet().theme.resolve(state.system_dark);
        let mut visuals = if resolved == ThemeSettings::Light {
            egui::Visuals::light()
        } else {
            egui::Visuals::dark()
        };

        ThemePalette::for_theme(resolved).apply(&mut visuals);
        ctx.set_visuals(visuals);
    }
}
