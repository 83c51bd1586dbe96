//! Status bar UI rendering
//!
//! Handles the bottom status bar displaying the node URL and version check time.

use chrono::Utc;
use eframe::egui;
use egui::RichText;

use alf_wallet::ThemePalette;

use crate::app::AppState;
use crate::utils::{format_elapsed, format_timestamp};

/// Renders the status panel at the bottom of the window
///
/// # Arguments
/// * `ui` - The egui UI context for drawing
/// * `state` - Reference to application state
pub fn render_status_bar(ui: &mut egui::Ui, state: &AppState) {
    let wallet = state.wallet();
    let checked_at = wallet.app_data.last_version_checked_at;
    let palette = ThemePalette::for_theme(wallet.theme.resolve(state.system_dark));

    ui.horizontal(|ui| {
        ui.label(RichText::new(format!("Node: {}", wallet.settings.node_url())).strong());
        ui.label(RichText::new("|").color(palette.text_dim));
        ui.label(RichText::new(format!("Theme: {}", wallet.theme.display_name())).strong());
        ui.label(RichText::new("|").color(palette.text_dim));
        ui.label(RichText::new(format!(
            "Last version check: {} ({})",
            format_timestamp(checked_at),
            format_elapsed(checked_at, Utc::now())
        )).color(palette.text_dim));
    });
}
