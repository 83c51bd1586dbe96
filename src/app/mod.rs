//! Application-level modules for the wallet shell.
//!
//! This module contains the coordinators and the shell's application state.

mod app_state;
mod application_coordinator;
mod system_theme;
mod theme_coordinator;

pub use app_state::{AppState, SettingsForm};
pub use application_coordinator::ApplicationCoordinator;
pub use system_theme::{SystemThemeListener, SystemThemeWatcher};
pub use theme_coordinator::ThemeCoordinator;
