//! Input mode and session phase state types.
//!
//! This module defines the state machine enums that control user interaction
//! modes and describe how far a picker session has progressed. Input modes
//! determine which keybindings are active; the session phase is the coarse
//! lifecycle view of the picker (browsing, filtering, resolved).

/// Focus state within search mode.
///
/// Determines whether search input is being typed or the filtered grid is
/// being navigated. Controls which keybindings are active during search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchFocus {
    /// User is typing in the search input field.
    ///
    /// Accepts character input, backspace, and enter (activates the cursor
    /// tile).
    Typing,

    /// User is navigating the filtered tile grid.
    ///
    /// Accepts hjkl/arrows for movement, enter to activate, and / to return
    /// to typing.
    Navigating,
}

/// Current input handling mode.
///
/// Controls which keybindings are active and how user input is processed.
/// Determines the displayed footer text and whether the search bar renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Default navigation mode.
    ///
    /// Available keybindings: hjkl/arrows (navigate), / (search), enter
    /// (pick), d (accept default, when configured), esc/q (cancel).
    Normal,

    /// Active search mode with focus state.
    ///
    /// Contains a [`SearchFocus`] variant indicating whether the user is
    /// typing or navigating results.
    Search(SearchFocus),
}

/// Observable phase of a picker session.
///
/// Derived from state rather than stored: the session is `Resolved` once a
/// resolution is recorded, `Filtering` while the search query is non-empty,
/// and `Browsing` otherwise. `Resolved` is terminal — no event observable
/// after it changes state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickerPhase {
    /// Initial phase: full catalogue visible, search empty.
    Browsing,

    /// Search text is non-empty; the displayed set is the filtered catalogue.
    Filtering,

    /// Terminal phase: a tile was picked, the default was accepted, or the
    /// session was cancelled.
    Resolved,
}
