//! Glyphpick: a modal symbol picker plugin for Zellij.
//!
//! Glyphpick presents a searchable grid of symbol identifiers in a floating
//! pane. Another pane (or script) opens the picker over a Zellij CLI pipe,
//! optionally handing it the current selection; the user browses or filters
//! the catalogue and activates a tile, and the picker replies with exactly
//! that identifier before closing itself. Cancelling replies with nothing, so
//! the caller's value stays as it was.
//!
//! # Architecture
//!
//! The crate follows a layered architecture pattern:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Zellij Plugin Shim (main.rs)                       │  ← Entry point, pipe I/O
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← Session state machine
//! │  - Event handling                                   │  ← Filtering, navigation
//! │  - Session resolution                               │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                               │
//! ┌───────────────────┐       ┌───────────────────┐
//! │ UI Layer (ui/)    │       │ Catalogue Layer   │
//! │ - Tile grid       │       │ (catalogue/)      │
//! │ - Theming         │       │ - Bundled symbols │
//! │ - Components      │       │ - File loading    │
//! └───────────────────┘       └───────────────────┘
//!         │                               │
//! ┌─────────────────────────────────────────────────────┐
//! │  Infrastructure & Domain Layers                     │
//! │  - Sandbox paths (infrastructure/)                  │
//! │  - Error types (domain/error)                       │
//! │  - Symbol model (domain/symbol)                     │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │  ← Optional
//! │  - OpenTelemetry tracing                            │
//! │  - File-based OTLP export                           │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`app`]: Session state machine with event/action model
//! - [`catalogue`]: Bundled and file-based symbol catalogues
//! - [`domain`]: Core domain types (`SymbolGroup`, errors)
//! - [`infrastructure`]: Sandbox path utilities
//! - [`ui`]: Terminal rendering with theme support
//! - [`observability`]: OpenTelemetry tracing
//!
//! # Configuration
//!
//! The plugin is configured via Zellij's plugin configuration:
//!
//! ```kdl
//! pane {
//!     plugin location="file:/path/to/glyphpick.wasm" {
//!         symbol "folder"
//!         default_symbol "trash"
//!         symbol_file "~/my-symbols.txt"
//!         group_name "My Symbols"
//!         layout "compact"
//!         theme "catppuccin-mocha"
//!         trace_level "info"
//!     }
//! }
//! ```
//!
//! # Session Lifecycle
//!
//! 1. **Load** (`main.rs`): parse configuration, initialize tracing, build
//!    `AppState` with the bundled (or pending file) catalogue
//! 2. **Pipe open**: the caller's CLI pipe is blocked and its current
//!    selection recorded for tile highlighting
//! 3. **Interaction**: browse, filter, move the cursor
//! 4. **Resolution**: pick / accept default → reply the identifier on the
//!    pipe; cancel → reply nothing; either way unblock the pipe and close
//!
//! # Example
//!
//! ```rust
//! use glyphpick::{handle_event, initialize, Config, Event};
//!
//! let config = Config::default();
//! let mut state = initialize(&config);
//!
//! // The caller hands over its current value, then the user picks a tile.
//! handle_event(&mut state, Event::SetCurrentSymbol("folder".to_string())).unwrap();
//! let (_, actions) = handle_event(&mut state, Event::Activate).unwrap();
//! assert!(!actions.is_empty());
//! ```

#![allow(clippy::multiple_crate_versions)]

pub mod app;
pub mod catalogue;
pub mod domain;
pub mod infrastructure;
pub mod observability;
pub mod ui;

pub use app::{handle_event, Action, AppState, Event, InputMode, Resolution, SearchFocus};
pub use domain::{GlyphpickError, Result, SymbolGroup};
pub use ui::{GridLayout, Theme};

use std::collections::BTreeMap;

/// Plugin configuration parsed from Zellij's configuration system.
///
/// Values arrive via Zellij's KDL layout configuration (or the CLI pipe
/// launch arguments) as a string map.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// The caller's current symbol identifier, used for tile highlighting.
    ///
    /// Usually delivered over the pipe payload instead; this option covers
    /// static layouts. Default: empty (no tile highlighted).
    pub symbol: String,

    /// Identifier offered by the one-key default action. Empty disables the
    /// action.
    pub default_symbol: String,

    /// Path to a custom symbol file (one identifier per line). When set, the
    /// bundled catalogue is replaced after filesystem permission is granted.
    pub symbol_file: Option<String>,

    /// Display name for a custom symbol catalogue. Default: `"Symbols"`.
    pub group_name: Option<String>,

    /// Grid layout name: `normal`, `compact`, or `wide`. Default: `normal`.
    pub layout: Option<String>,

    /// Built-in theme name. Options: `catppuccin-mocha`, `catppuccin-latte`,
    /// `catppuccin-frappe`, `catppuccin-macchiato`. Ignored if `theme_file`
    /// is set.
    pub theme_name: Option<String>,

    /// Path to a custom TOML theme file. Takes precedence over `theme_name`.
    pub theme_file: Option<String>,

    /// Tracing level for OpenTelemetry spans. Options: `trace`, `debug`,
    /// `info`, `warn`, `error`. Default: `"info"`.
    pub trace_level: Option<String>,
}

impl Config {
    /// Parses configuration from Zellij's configuration map.
    ///
    /// Missing keys fall back to defaults; invalid values are resolved with
    /// fallbacks later (theme and layout resolution log and degrade rather
    /// than fail).
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use glyphpick::Config;
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("default_symbol".to_string(), "trash".to_string());
    /// map.insert("layout".to_string(), "compact".to_string());
    ///
    /// let config = Config::from_zellij(&map);
    /// assert_eq!(config.default_symbol, "trash");
    /// assert_eq!(config.layout.as_deref(), Some("compact"));
    /// ```
    #[must_use]
    pub fn from_zellij(config: &BTreeMap<String, String>) -> Self {
        Self {
            symbol: config.get("symbol").cloned().unwrap_or_default(),
            default_symbol: config.get("default_symbol").cloned().unwrap_or_default(),
            symbol_file: config.get("symbol_file").cloned(),
            group_name: config.get("group_name").cloned(),
            layout: config.get("layout").cloned(),
            theme_name: config.get("theme").cloned(),
            theme_file: config.get("theme_file").cloned(),
            trace_level: config.get("trace_level").cloned(),
        }
    }

    /// Display name for the active catalogue.
    #[must_use]
    pub fn resolved_group_name(&self) -> String {
        self.group_name
            .clone()
            .unwrap_or_else(|| "Symbols".to_string())
    }
}

/// Initializes a picker session from configuration.
///
/// Resolves the theme (file, then name, then default), the grid layout, and
/// the starting catalogue. With `symbol_file` set the catalogue starts empty
/// under the configured group name; the runtime shim loads the file once
/// filesystem permission is granted. Otherwise the bundled catalogue is used
/// immediately.
///
/// # Example
///
/// ```rust
/// use glyphpick::{initialize, Config};
///
/// let state = initialize(&Config::default());
/// assert_eq!(state.group.name, "Symbols");
/// assert!(!state.group.symbols.is_empty());
/// ```
pub fn initialize(config: &Config) -> AppState {
    tracing::debug!("initializing glyphpick plugin");

    let theme = config.theme_file.as_ref().map_or_else(
        || {
            config.theme_name.as_ref().map_or_else(
                Theme::default,
                |theme_name| {
                    Theme::from_name(theme_name).unwrap_or_else(|| {
                        tracing::debug!(theme_name = %theme_name, "unknown theme, using default");
                        Theme::default()
                    })
                },
            )
        },
        |theme_file| {
            Theme::from_file(theme_file).unwrap_or_else(|e| {
                tracing::debug!(theme_file = %theme_file, error = %e, "failed to load theme file, using default");
                Theme::default()
            })
        },
    );

    let layout = config.layout.as_ref().map_or_else(GridLayout::default, |name| {
        GridLayout::from_name(name).unwrap_or_else(|| {
            tracing::debug!(layout = %name, "unknown layout, using default");
            GridLayout::default()
        })
    });

    let group = if config.symbol_file.is_some() {
        // Loaded by the shim once FullHdAccess is granted.
        SymbolGroup::new(config.resolved_group_name(), vec![])
    } else {
        catalogue::default_symbols()
    };

    AppState::new(
        group,
        config.symbol.clone(),
        config.default_symbol.clone(),
        theme,
        layout,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_uses_bundled_catalogue() {
        let state = initialize(&Config::default());
        assert_eq!(state.group.name, "Symbols");
        assert_eq!(state.group.symbols.len(), 4014);
    }

    #[test]
    fn symbol_file_defers_catalogue_loading() {
        let config = Config {
            symbol_file: Some("~/custom.txt".to_string()),
            group_name: Some("Custom".to_string()),
            ..Default::default()
        };
        let state = initialize(&config);
        assert_eq!(state.group.name, "Custom");
        assert!(state.group.is_empty());
    }

    #[test]
    fn config_parses_from_zellij_map() {
        let mut map = BTreeMap::new();
        map.insert("symbol".to_string(), "folder".to_string());
        map.insert("default_symbol".to_string(), "trash".to_string());
        map.insert("theme".to_string(), "catppuccin-latte".to_string());

        let config = Config::from_zellij(&map);
        assert_eq!(config.symbol, "folder");
        assert_eq!(config.default_symbol, "trash");
        assert_eq!(config.theme_name.as_deref(), Some("catppuccin-latte"));
        assert!(config.symbol_file.is_none());
    }

    #[test]
    fn unknown_theme_and_layout_fall_back() {
        let config = Config {
            theme_name: Some("nonexistent".to_string()),
            layout: Some("gigantic".to_string()),
            ..Default::default()
        };
        let state = initialize(&config);
        assert_eq!(state.theme.name, "catppuccin-mocha");
        assert_eq!(state.layout, GridLayout::default());
    }

    #[test]
    fn initial_state_carries_configured_values() {
        let config = Config {
            symbol: "folder".to_string(),
            default_symbol: "trash".to_string(),
            ..Default::default()
        };
        let state = initialize(&config);
        assert_eq!(state.current_symbol, "folder");
        assert!(state.has_default());
    }
}
