//! Header panel UI rendering
//!
//! Handles the top bar with the wallet title and theme selector.

use eframe::egui;
use egui::RichText;

use alf_wallet::ThemeSettings;

use crate::app::AppState;

/// Result of user interaction with the header panel
pub enum HeaderInteraction {
    /// User picked a theme in the selector
    ThemeSelected(ThemeSettings),
}

/// Renders the application header
///
/// # Arguments
/// * `ui` - The egui UI context for drawing
/// * `state` - Reference to application state
///
/// # Returns
/// * `Option<HeaderInteraction>` - User interaction result
pub fn render_header(ui: &mut egui::Ui, state: &AppState) -> Option<HeaderInteraction> {
    let mut interaction = None;

    ui.horizontal(|ui| {
        ui.label(RichText::new("Alephium Wallet").heading().strong());

        // Push theme selector to the right
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let current_theme = state.wallet().theme;
            let mut selected = current_theme;
            egui::ComboBox::from_id_salt("theme_selector")
                .selected_text(selected.display_name())
                .show_ui(ui, |ui| {
                    for theme in ThemeSettings::ALL {
                        ui.selectable_value(&mut selected, theme, theme.display_name());
                    }
                });

            if selected != current_theme {
                interaction = Some(HeaderInteraction::ThemeSelected(selected));
            }

            ui.label("Theme:");
        });
    });

    interaction
}
