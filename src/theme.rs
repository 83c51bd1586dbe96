//! Theme selection and the wallet color palettes.
//!
//! [`ThemeSettings`] is what the user picks. `System` follows the host's light/dark
//! preference and is resolved to a concrete palette at draw time.
//!
//! # Examples
//!
//! ```
//! use alf_wallet::theme::{ThemePalette, ThemeSettings};
//!
//! let resolved = ThemeSettings::System.resolve(Some(false));
//! assert_eq!(resolved, ThemeSettings::Light);
//! let palette = ThemePalette::for_theme(resolved);
//! println!("Light background: {:?}", palette.background);
//! ```

use std::fmt;
use std::str::FromStr;

use egui::Color32;
use serde::{Deserialize, Serialize};

/// User-selected UI theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeSettings {
    Light,
    #[default]
    Dark,
    System,
}

impl ThemeSettings {
    pub const ALL: [ThemeSettings; 3] = [ThemeSettings::Light, ThemeSettings::Dark, ThemeSettings::System];

    pub fn as_str(self) -> &'static str {
        match self {
            ThemeSettings::Light => "light",
            ThemeSettings::Dark => "dark",
            ThemeSettings::System => "system",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            ThemeSettings::Light => "Light",
            ThemeSettings::Dark => "Dark",
            ThemeSettings::System => "System",
        }
    }

    /// Resolves `System` against the host preference.
    ///
    /// `system_dark` is `None` when the host does not report a preference, in
    /// which case dark is used. `Light` and `Dark` resolve to themselves.
    pub fn resolve(self, system_dark: Option<bool>) -> ThemeSettings {
        match self {
            ThemeSettings::System => match system_dark {
                Some(false) => ThemeSettings::Light,
                _ => ThemeSettings::Dark,
            },
            other => other,
        }
    }
}

impl fmt::Display for ThemeSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemeSettings {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(ThemeSettings::Light),
            "dark" => Ok(ThemeSettings::Dark),
            "system" => Ok(ThemeSettings::System),
            _ => Err(format!("Theme '{}' not found", s)),
        }
    }
}

impl From<ThemeSettings> for egui::ThemePreference {
    fn from(theme: ThemeSettings) -> Self {
        match theme {
            ThemeSettings::Light => egui::ThemePreference::Light,
            ThemeSettings::Dark => egui::ThemePreference::Dark,
            ThemeSettings::System => egui::ThemePreference::System,
        }
    }
}

/// Color palette covering the wallet UI
#[derive(Debug, Clone, PartialEq)]
pub struct ThemePalette {
    pub background: Color32,
    pub panel_background: Color32,
    pub extreme_background: Color32,

    pub text: Color32,
    pub text_dim: Color32,

    pub selection: Color32,
    pub hover: Color32,
    pub border: Color32,

    pub accent: Color32,
    pub valid: Color32,
    pub alert: Color32,
    pub warning: Color32,
}

impl ThemePalette {
    /// Palette for a concrete theme. `System` must be resolved first; it falls back to dark.
    pub fn for_theme(theme: ThemeSettings) -> Self {
        match theme {
            ThemeSettings::Light => light_palette(),
            ThemeSettings::Dark | ThemeSettings::System => dark_palette(),
        }
    }

    /// Applies this palette's colors to egui visuals
    pub fn apply(&self, visuals: &mut egui::Visuals) {
        visuals.panel_fill = self.panel_background;
        visuals.window_fill = self.background;
        visuals.extreme_bg_color = self.extreme_background;
        visuals.faint_bg_color = self.hover;

        visuals.override_text_color = Some(self.text);

        visuals.selection.bg_fill = self.selection;
        visuals.selection.stroke.color = self.accent;

        visuals.widgets.noninteractive.bg_fill = self.panel_background;
        visuals.widgets.noninteractive.bg_stroke.color = self.border;
        visuals.widgets.inactive.bg_fill = self.hover;
        visuals.widgets.hovered.bg_fill = self.hover;
        visuals.widgets.active.bg_fill = self.selection;

        visuals.hyperlink_color = self.accent;
        visuals.error_fg_color = self.alert;
        visuals.warn_fg_color = self.warning;
    }
}

fn light_palette() -> ThemePalette {
    ThemePalette {
        background: hex_to_color32("#ffffff"),
        panel_background: hex_to_color32("#f6f6f7"),
        extreme_background: hex_to_color32("#ffffff"),

        text: hex_to_color32("#1d1d1f"),
        text_dim: hex_to_color32("#7b7b80"),

        selection: hex_to_color32("#c9d9ff"),
        hover: hex_to_color32("#e8e8ea"),
        border: hex_to_color32("#d5d5d8"),

        accent: hex_to_color32("#3b7cff"),
        valid: hex_to_color32("#2fbd6c"),
        alert: hex_to_color32("#ed4a34"),
        warning: hex_to_color32("#ea9f2f"),
    }
}

fn dark_palette() -> ThemePalette {
    ThemePalette {
        background: hex_to_color32("#141416"),
        panel_background: hex_to_color32("#1b1b1f"),
        extreme_background: hex_to_color32("#0e0e10"),

        text: hex_to_color32("#f2f2f3"),
        text_dim: hex_to_color32("#9a9aa1"),

        selection: hex_to_color32("#2c3e66"),
        hover: hex_to_color32("#2a2a2f"),
        border: hex_to_color32("#3a3a40"),

        accent: hex_to_color32("#5e9bff"),
        valid: hex_to_color32("#3ed282"),
        alert: hex_to_color32("#ff5d51"),
        warning: hex_to_color32("#ffb445"),
    }
}

/// Converts a hex color string (like "#282a36") to Color32
pub fn hex_to_color32(hex: &str) -> Color32 {
    let hex = hex.trim_start_matches('#');

    if hex.len() == 6 {
        let r = u8::from_str_radix(&hex[0..2], 16).unwrap_or(0);
        let g = u8::from_str_radix(&hex[2..4], 16).unwrap_or(0);
        let b = u8::from_str_radix(&hex[4..6], 16).unwrap_or(0);
        Color32::from_rgb(r, g, b)
    } else {
        Color32::from_rgb(0, 0, 0) // Fallback to black
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialized_names() {
        assert_eq!(serde_json::to_string(&ThemeSettings::Dark).unwrap(), "\"dark\"");
        let parsed: ThemeSettings = serde_json::from_str("\"system\"").unwrap();
        assert_eq!(parsed, ThemeSettings::System);
    }

    #[test]
    fn test_from_str_matches_as_str() {
        for theme in ThemeSettings::ALL {
            assert_eq!(theme.as_str().parse::<ThemeSettings>(), Ok(theme));
        }
        assert!("purple".parse::<ThemeSettings>().is_err());
    }

    #[test]
    fn test_resolve_system() {
        assert_eq!(ThemeSettings::System.resolve(Some(true)), ThemeSettings::Dark);
        assert_eq!(ThemeSettings::System.resolve(Some(false)), ThemeSettings::Light);
        assert_eq!(ThemeSettings::System.resolve(None), ThemeSettings::Dark);
        assert_eq!(ThemeSettings::Light.resolve(Some(true)), ThemeSettings::Light);
    }

    #[test]
    fn test_hex_to_color32() {
        assert_eq!(hex_to_color32("#ff0080"), Color32::from_rgb(255, 0, 128));
        assert_eq!(hex_to_color32("bad"), Color32::from_rgb(0, 0, 0));
    }

    #[test]
    fn test_palettes_differ() {
        let light = ThemePalette::for_theme(ThemeSettings::Light);
        let dark = ThemePalette::for_theme(ThemeSettings::Dark);
        assert_ne!(light.background, dark.background);
        assert_eq!(ThemePalette::for_theme(ThemeSettings::System), dark);
    }

    #[test]
    fn test_status_colors_stand_out() {
        for theme in [ThemeSettings::Light, ThemeSettings::Dark] {
            let palette = ThemePalette::for_theme(theme);
            assert_ne!(palette.text_dim, palette.text);
            assert_ne!(palette.text_dim, palette.panel_background);
            assert_ne!(palette.valid, palette.alert);
        }
    }
}
