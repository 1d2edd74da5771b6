//! View model types representing renderable UI state.
//!
//! This module defines immutable view models computed from application state.
//! View models are created via `AppState::compute_viewmodel()` and consumed
//! by the renderer; they contain no business logic, only display-ready data
//! such as pre-truncated tile names and derived tile states.

/// Complete UI view model for rendering.
///
/// Contains the visible window of the tile grid plus surrounding chrome
/// (header, footer, optional search bar or empty-state message).
#[derive(Debug, Clone)]
pub struct UIViewModel {
    /// Visible tile rows, outer vector = grid rows, inner = tiles per row.
    pub tile_rows: Vec<Vec<TileView>>,

    /// Header information (catalogue name, counts).
    pub header: HeaderInfo,

    /// Footer information (keybinding hints).
    pub footer: FooterInfo,

    /// Optional empty state message (when nothing matches or the catalogue
    /// is empty).
    pub empty_state: Option<EmptyState>,

    /// Optional search bar information (when in search mode).
    pub search_bar: Option<SearchBarInfo>,
}

/// Visual state of a symbol tile.
///
/// Derived purely from the externally-owned current value and the configured
/// default — never from local interaction state. The navigation cursor is
/// tracked separately on [`TileView::is_cursor`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TileState {
    /// Tile matches the caller's current symbol value.
    Selected,

    /// Tile matches the configured default symbol (and is not the current
    /// value).
    IsDefault,

    /// Everything else.
    Normal,
}

/// Display information for a single symbol tile.
#[derive(Debug, Clone)]
pub struct TileView {
    /// Symbol identifier, pre-truncated to the tile width.
    pub name: String,

    /// Derived visual state (selected / is-default / normal).
    pub state: TileState,

    /// Whether the navigation cursor sits on this tile.
    pub is_cursor: bool,
}

/// Header display information.
#[derive(Debug, Clone)]
pub struct HeaderInfo {
    /// Title text to display in the header.
    pub title: String,
}

/// Footer display information.
#[derive(Debug, Clone)]
pub struct FooterInfo {
    /// Keybinding help text.
    pub keybindings: String,
}

/// Empty state message display information.
#[derive(Debug, Clone)]
pub struct EmptyState {
    /// Primary message (e.g. "No symbols match").
    pub message: String,

    /// Secondary explanatory text.
    pub subtitle: String,
}

/// Search bar display information.
#[derive(Debug, Clone)]
pub struct SearchBarInfo {
    /// Current search query text.
    pub query: String,
}
