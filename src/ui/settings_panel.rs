//! Connection settings panel
//!
//! Form for editing the node host and port.

use eframe::egui;
use egui::RichText;

use alf_wallet::ThemePalette;

use crate::app::AppState;

/// Result of user interaction with the settings panel
pub enum SettingsPanelInteraction {
    SaveRequested,
    RestoreDefaultsRequested,
    DiscardRequested,
}

/// Renders the settings form
///
/// # Arguments
/// * `ui` - The egui UI context for drawing
/// * `state` - Mutable reference to application state (form buffers are edited in place)
pub fn render_settings_panel(ui: &mut egui::Ui, state: &mut AppState) -> Option<SettingsPanelInteraction> {
    let mut interaction = None;

    ui.heading("Node connection");
    ui.separator();

    egui::Grid::new("settings_grid")
        .num_columns(2)
        .spacing([12.0, 8.0])
        .show(ui, |ui| {
            ui.label("Host");
            ui.add(egui::TextEdit::singleline(&mut state.settings_form.host).desired_width(240.0));
            ui.end_row();

            ui.label("Port");
            let port_response = ui.add(egui::TextEdit::singleline(&mut state.settings_form.port).desired_width(80.0));
            if port_response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                interaction = Some(SettingsPanelInteraction::SaveRequested);
            }
            ui.end_row();
        });

    ui.add_space(8.0);

    let modified = state.settings_form.is_modified(&state.wallet().settings);
    ui.horizontal(|ui| {
        if ui.add_enabled(modified, egui::Button::new("Save")).clicked() {
            interaction = Some(SettingsPanelInteraction::SaveRequested);
        }
        if ui.add_enabled(modified, egui::Button::new("Discard")).clicked() {
            interaction = Some(SettingsPanelInteraction::DiscardRequested);
        }
        if ui.button("Restore defaults").clicked() {
            interaction = Some(SettingsPanelInteraction::RestoreDefaultsRequested);
        }
    });

    let palette = ThemePalette::for_theme(state.wallet().theme.resolve(state.system_dark));
    if let Some(err) = &state.error_message {
        ui.add_space(4.0);
        ui.colored_label(palette.alert, err);
    } else if let Some(msg) = &state.status_message {
        ui.add_space(4.0);
        ui.label(RichText::new(msg).color(palette.valid));
    }

    interaction
}
