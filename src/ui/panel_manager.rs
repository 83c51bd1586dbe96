//! Panel orchestration and layout management.
//!
//! Coordinates the header, settings and status panels and forwards their
//! interactions to the application.

use alf_wallet::ThemeSettings;

use crate::app::AppState;
use crate::ui::{header, settings_panel, status_bar};

/// Result of panel interactions that need to be handled by the application coordinator.
pub enum PanelInteraction {
    /// User picked a theme
    ThemeSelected(ThemeSettings),
    /// User asked to save the settings form
    SaveSettingsRequested,
    /// User asked to fill the form with the defaults
    RestoreDefaultsRequested,
    /// User asked to drop unsaved edits
    DiscardSettingsRequested,
}

/// Manages the layout and rendering of all UI panels.
pub struct PanelManager;

impl PanelManager {
    /// Renders all panels in the application window.
    ///
    /// This is the main entry point for rendering the entire UI, called from
    /// the eframe::App::update() implementation.
    pub fn render_all_panels(ctx: &egui::Context, state: &mut AppState) -> Option<PanelInteraction> {
        let mut interaction: Option<PanelInteraction> = None;

        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            if let Some(header::HeaderInteraction::ThemeSelected(theme)) = header::render_header(ui, state) {
                interaction = Some(PanelInteraction::ThemeSelected(theme));
            }
        });

        egui::TopBottomPanel::bottom("status_panel").show(ctx, |ui| {
            status_bar::render_status_bar(ui, state);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::Frame::default().inner_margin(12.0).show(ui, |ui| {
                if let Some(panel_interaction) = settings_panel::render_settings_panel(ui, state) {
                    interaction = Some(match panel_interaction {
                        settings_panel::SettingsPanelInteraction::SaveRequested => {
                            PanelInteraction::SaveSettingsRequested
                        }
                        settings_panel::SettingsPanelInteraction::RestoreDefaultsRequested => {
                            PanelInteraction::RestoreDefaultsRequested
                        }
                        settings_panel::SettingsPanelInteraction::DiscardRequested => {
                            PanelInteraction::DiscardSettingsRequested
                        }
                    });
                }
            });
        });

        interaction
    }
}
