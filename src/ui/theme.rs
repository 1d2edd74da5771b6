//! Theme management and ANSI escape sequence generation.
//!
//! This module defines the color scheme system for the picker, supporting
//! both built-in themes (Catppuccin variants) and custom themes loaded from
//! TOML files, plus utilities for converting hex colors to ANSI escape
//! sequences.
//!
//! # Built-in Themes
//!
//! - `catppuccin-mocha`: Dark theme with warm tones (default)
//! - `catppuccin-latte`: Light theme with soft pastels
//! - `catppuccin-frappe`: Cool dark theme
//! - `catppuccin-macchiato`: Warm dark theme
//!
//! # TOML Format
//!
//! ```toml
//! name = "my-theme"
//!
//! [colors]
//! header_fg = "#cdd6f4"
//! cursor_fg = "#1e1e2e"
//! cursor_bg = "#f5c2e7"
//! tile_selected_fg = "#1e1e2e"
//! tile_selected_bg = "#cba6f7"
//! tile_default_fg = "#f9e2af"
//! text_normal = "#cdd6f4"
//! text_dim = "#6c7086"
//! border = "#45475a"
//! search_bar_border = "#f5c2e7"
//! empty_state_fg = "#89b4fa"
//! ```

use crate::domain::{GlyphpickError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Color scheme configuration for UI rendering.
///
/// Contains theme metadata and color definitions. Can be loaded from
/// built-in themes or custom TOML files.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Theme {
    /// Human-readable theme name.
    pub name: String,
    /// Color palette for all UI elements.
    pub colors: ThemeColors,
}

/// Color definitions for all UI elements.
///
/// All colors are specified as hex strings (e.g. "#cdd6f4").
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ThemeColors {
    /// Header text color.
    pub header_fg: String,
    /// Optional header background color.
    #[serde(default)]
    pub header_bg: Option<String>,

    /// Navigation cursor foreground color.
    pub cursor_fg: String,
    /// Navigation cursor background color.
    pub cursor_bg: String,

    /// Foreground for the tile matching the caller's current value.
    pub tile_selected_fg: String,
    /// Background for the tile matching the caller's current value.
    pub tile_selected_bg: String,

    /// Foreground for the tile matching the configured default symbol.
    pub tile_default_fg: String,

    /// Normal text color.
    pub text_normal: String,
    /// Dimmed text color (footer, secondary info).
    pub text_dim: String,

    /// Border and separator line color.
    pub border: String,

    /// Search bar border color.
    pub search_bar_border: String,

    /// Empty state message color.
    pub empty_state_fg: String,
}

impl Theme {
    /// Loads a built-in theme by name.
    ///
    /// Supported names: `catppuccin-mocha`, `catppuccin-latte`,
    /// `catppuccin-frappe`, `catppuccin-macchiato`. Returns `None` for
    /// unknown names.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let toml_str = match name {
            "catppuccin-mocha" => include_str!("../../themes/catppuccin-mocha.toml"),
            "catppuccin-latte" => include_str!("../../themes/catppuccin-latte.toml"),
            "catppuccin-frappe" => include_str!("../../themes/catppuccin-frappe.toml"),
            "catppuccin-macchiato" => include_str!("../../themes/catppuccin-macchiato.toml"),
            _ => return None,
        };

        toml::from_str(toml_str).ok()
    }

    /// Loads a theme from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`GlyphpickError::Theme`] if the file cannot be read or the
    /// TOML content cannot be parsed.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .map_err(|e| GlyphpickError::Theme(format!("failed to read theme file: {e}")))?;

        toml::from_str(&contents)
            .map_err(|e| GlyphpickError::Theme(format!("failed to parse theme TOML: {e}")))
    }

    /// Converts a hex color to an RGB tuple.
    ///
    /// Strips the `#` prefix if present. Returns white on parse errors so a
    /// bad color degrades visibly rather than panicking. Non-ASCII input is
    /// rejected before slicing: byte offsets into multi-byte characters would
    /// panic.
    fn hex_to_rgb(hex: &str) -> (u8, u8, u8) {
        let hex = hex.trim_start_matches('#').trim();

        if hex.len() != 6 || !hex.is_ascii() {
            return (255, 255, 255);
        }

        let r = u8::from_str_radix(&hex[0..2], 16).unwrap_or(255);
        let g = u8::from_str_radix(&hex[2..4], 16).unwrap_or(255);
        let b = u8::from_str_radix(&hex[4..6], 16).unwrap_or(255);

        (r, g, b)
    }

    /// Generates an ANSI 24-bit foreground color escape sequence.
    #[must_use]
    pub fn fg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[38;2;{r};{g};{b}m")
    }

    /// Generates an ANSI 24-bit background color escape sequence.
    #[must_use]
    pub fn bg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[48;2;{r};{g};{b}m")
    }

    /// Returns the ANSI bold escape sequence.
    #[must_use]
    pub const fn bold() -> &'static str {
        "\u{001b}[1m"
    }

    /// Returns the ANSI dim escape sequence.
    #[must_use]
    pub const fn dim() -> &'static str {
        "\u{001b}[2m"
    }

    /// Returns the ANSI reset escape sequence.
    #[must_use]
    pub const fn reset() -> &'static str {
        "\u{001b}[0m"
    }
}

impl Default for Theme {
    /// Returns the default theme (Catppuccin Mocha).
    ///
    /// # Panics
    ///
    /// Panics if the built-in theme fails to parse (should never occur).
    fn default() -> Self {
        Self::from_name("catppuccin-mocha")
            .expect("built-in catppuccin-mocha theme should always parse")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn all_builtin_themes_parse() {
        for name in [
            "catppuccin-mocha",
            "catppuccin-latte",
            "catppuccin-frappe",
            "catppuccin-macchiato",
        ] {
            let theme = Theme::from_name(name).expect("builtin theme parses");
            assert_eq!(theme.name, name);
        }
    }

    #[test]
    fn unknown_builtin_is_none() {
        assert!(Theme::from_name("solarized-disco").is_none());
    }

    #[test]
    fn theme_loads_from_toml_file() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        write!(
            file,
            r##"
name = "test-theme"

[colors]
header_fg = "#ffffff"
cursor_fg = "#000000"
cursor_bg = "#ff00ff"
tile_selected_fg = "#000000"
tile_selected_bg = "#00ff00"
tile_default_fg = "#ffff00"
text_normal = "#ffffff"
text_dim = "#888888"
border = "#444444"
search_bar_border = "#ff00ff"
empty_state_fg = "#0000ff"
"##
        )
        .unwrap();
        file.flush().unwrap();

        let theme = Theme::from_file(file.path()).expect("theme parses");
        assert_eq!(theme.name, "test-theme");
        assert_eq!(theme.colors.tile_default_fg, "#ffff00");
        assert!(theme.colors.header_bg.is_none());
    }

    #[test]
    fn missing_theme_file_errors() {
        assert!(Theme::from_file("/no/such/theme.toml").is_err());
    }

    #[test]
    fn hex_colors_become_ansi_sequences() {
        assert_eq!(Theme::fg("#ff0000"), "\u{001b}[38;2;255;0;0m");
        assert_eq!(Theme::bg("00ff00"), "\u{001b}[48;2;0;255;0m");
        // Malformed input degrades to white.
        assert_eq!(Theme::fg("zzz"), "\u{001b}[38;2;255;255;255m");
    }

    #[test]
    fn multibyte_hex_degrades_to_white_without_panicking() {
        // "€abc" is six bytes but not six ASCII hex digits.
        assert_eq!(Theme::fg("€abc"), "\u{001b}[38;2;255;255;255m");
        assert_eq!(Theme::bg("#€abc"), "\u{001b}[48;2;255;255;255m");
        assert_eq!(Theme::fg("ééé"), "\u{001b}[38;2;255;255;255m");
    }
}
