//! UI panel rendering subsystem
//!
//! This module contains all UI panel rendering logic for the wallet shell:
//! - Header panel (title, theme selector)
//! - Settings panel (node host and port form)
//! - Status bar (node URL, last version check)
//! - Panel manager (panel orchestration and layout)

pub mod header;
pub mod settings_panel;
pub mod status_bar;
pub mod panel_manager;
