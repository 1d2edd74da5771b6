//! Event handling and state transition logic.
//!
//! This module contains the central event dispatcher that processes semantic
//! input events and transforms application state. Key events are translated
//! into [`Event`] values by the runtime shim; this keeps the handler free of
//! terminal key types and directly testable.
//!
//! # Return Value
//!
//! `handle_event` returns `(should_render, actions)`:
//! - `should_render`: whether the UI needs re-rendering
//! - `actions`: side effects for the runtime to execute (at most one
//!   [`Action::Resolve`] per session)
//!
//! Once a session is resolved every subsequent event is a no-op: the state
//! records the resolution and the handler short-circuits before any matching.

use crate::app::actions::{Action, Resolution};
use crate::app::modes::{InputMode, SearchFocus};
use crate::app::state::AppState;
use crate::domain::{Result, SymbolGroup};

/// Semantic input events, decoupled from terminal key codes.
///
/// The runtime shim maps raw key presses to these based on the current input
/// mode; catalogue and selection updates arrive from the plugin lifecycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Move the cursor one grid row up.
    CursorUp,
    /// Move the cursor one grid row down.
    CursorDown,
    /// Move the cursor one tile left (wraps).
    CursorLeft,
    /// Move the cursor one tile right (wraps).
    CursorRight,

    /// Activate the tile under the cursor.
    Activate,
    /// Accept the configured default symbol.
    AcceptDefault,
    /// Cancel the session without writing anything back.
    Cancel,

    /// Enter search mode with the input field focused.
    SearchMode,
    /// Move focus back to the search input field.
    FocusSearchBar,
    /// Move focus from the search input to the result grid.
    FocusResults,
    /// Leave search mode, clearing the query.
    ExitSearch,

    /// A character typed into the search field.
    Char(char),
    /// Delete the last character of the search query.
    Backspace,

    /// The caller piped a new current selection value.
    SetCurrentSymbol(String),
    /// A catalogue finished loading from a file.
    CatalogueLoaded {
        /// The freshly loaded symbol group.
        group: SymbolGroup,
    },
}

/// Processes an event and updates application state.
///
/// Returns whether a re-render is needed and any actions for the runtime to
/// execute.
///
/// # Errors
///
/// Currently infallible; the `Result` return keeps the signature stable as
/// handlers grow effectful steps.
pub fn handle_event(state: &mut AppState, event: Event) -> Result<(bool, Vec<Action>)> {
    // A resolved session ignores everything.
    if state.resolution.is_some() {
        return Ok((false, vec![]));
    }

    let result = match event {
        Event::CursorUp => {
            state.move_cursor_up();
            (true, vec![])
        }
        Event::CursorDown => {
            state.move_cursor_down();
            (true, vec![])
        }
        Event::CursorLeft => {
            state.move_cursor_left();
            (true, vec![])
        }
        Event::CursorRight => {
            state.move_cursor_right();
            (true, vec![])
        }

        Event::Activate => handle_activate(state),
        Event::AcceptDefault => handle_accept_default(state),

        Event::Cancel => {
            tracing::debug!("session cancelled");
            let resolution = Resolution::Cancelled;
            state.resolution = Some(resolution.clone());
            (true, vec![Action::Resolve(resolution)])
        }

        Event::SearchMode | Event::FocusSearchBar => {
            state.input_mode = InputMode::Search(SearchFocus::Typing);
            (true, vec![])
        }
        Event::FocusResults => {
            state.input_mode = InputMode::Search(SearchFocus::Navigating);
            (true, vec![])
        }
        Event::ExitSearch => {
            exit_search(state);
            (true, vec![])
        }

        Event::Char(c) => {
            if matches!(state.input_mode, InputMode::Search(SearchFocus::Typing)) {
                state.search_query.push(c);
                state.apply_search_filter();
                (true, vec![])
            } else {
                (false, vec![])
            }
        }
        Event::Backspace => {
            if matches!(state.input_mode, InputMode::Search(SearchFocus::Typing)) {
                state.search_query.pop();
                state.apply_search_filter();
                (true, vec![])
            } else {
                (false, vec![])
            }
        }

        Event::SetCurrentSymbol(symbol) => {
            tracing::debug!(symbol = %symbol, "current selection updated by caller");
            state.current_symbol = symbol;
            (true, vec![])
        }
        Event::CatalogueLoaded { group } => {
            tracing::info!(
                name = %group.name,
                symbols = group.symbols.len(),
                "catalogue loaded"
            );
            state.group = group;
            state.cursor = 0;
            state.apply_search_filter();
            (true, vec![])
        }
    };

    Ok(result)
}

/// Activates the tile under the cursor.
///
/// Writes back exactly that tile's identifier and ends the session. With an
/// empty filtered list there is nothing to activate: in search mode this
/// drops back to browsing instead, elsewhere it is a no-op.
fn handle_activate(state: &mut AppState) -> (bool, Vec<Action>) {
    match state.selected_symbol().cloned() {
        Some(symbol) => {
            tracing::debug!(symbol = %symbol, "tile activated");
            let resolution = Resolution::Picked(symbol);
            state.resolution = Some(resolution.clone());
            (true, vec![Action::Resolve(resolution)])
        }
        None => {
            if matches!(state.input_mode, InputMode::Search(_)) {
                exit_search(state);
                (true, vec![])
            } else {
                (false, vec![])
            }
        }
    }
}

/// Accepts the configured default symbol.
///
/// No-op when no default is configured; availability never depends on the
/// cursor or the filter.
fn handle_accept_default(state: &mut AppState) -> (bool, Vec<Action>) {
    if !state.has_default() {
        return (false, vec![]);
    }

    let symbol = state.default_symbol.clone();
    tracing::debug!(symbol = %symbol, "default accepted");
    let resolution = Resolution::DefaultAccepted(symbol);
    state.resolution = Some(resolution.clone());
    (true, vec![Action::Resolve(resolution)])
}

/// Leaves search mode and restores the unfiltered catalogue.
fn exit_search(state: &mut AppState) {
    state.input_mode = InputMode::Normal;
    state.search_query.clear();
    state.apply_search_filter();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::layout::GridLayout;
    use crate::ui::theme::Theme;

    fn state_with(symbols: &[&str], current: &str, default: &str) -> AppState {
        AppState::new(
            SymbolGroup::new("Test", symbols.iter().map(|s| (*s).to_string()).collect()),
            current.to_string(),
            default.to_string(),
            Theme::default(),
            GridLayout::default(),
        )
    }

    #[test]
    fn activate_writes_exactly_the_cursor_tile() {
        let mut state = state_with(&["folder", "trash", "star"], "", "");
        state.cursor = 1;

        let (_, actions) = handle_event(&mut state, Event::Activate).unwrap();
        assert_eq!(
            actions,
            vec![Action::Resolve(Resolution::Picked("trash".into()))]
        );
        assert_eq!(state.resolution, Some(Resolution::Picked("trash".into())));
    }

    #[test]
    fn resolved_session_ignores_further_events() {
        let mut state = state_with(&["folder", "trash"], "", "");
        handle_event(&mut state, Event::Activate).unwrap();

        for event in [
            Event::CursorRight,
            Event::Activate,
            Event::Cancel,
            Event::Char('x'),
        ] {
            let (render, actions) = handle_event(&mut state, event).unwrap();
            assert!(!render);
            assert!(actions.is_empty());
        }
        assert_eq!(state.resolution, Some(Resolution::Picked("folder".into())));
    }

    #[test]
    fn accept_default_delivers_configured_symbol() {
        let mut state = state_with(&["folder", "trash"], "folder", "trash");
        state.cursor = 0; // cursor elsewhere; default wins regardless

        let (_, actions) = handle_event(&mut state, Event::AcceptDefault).unwrap();
        assert_eq!(
            actions,
            vec![Action::Resolve(Resolution::DefaultAccepted("trash".into()))]
        );
    }

    #[test]
    fn accept_default_is_noop_without_default() {
        let mut state = state_with(&["folder"], "", "");
        let (render, actions) = handle_event(&mut state, Event::AcceptDefault).unwrap();
        assert!(!render);
        assert!(actions.is_empty());
        assert!(state.resolution.is_none());
    }

    #[test]
    fn cancel_resolves_without_a_value() {
        let mut state = state_with(&["folder"], "star", "");
        let (_, actions) = handle_event(&mut state, Event::Cancel).unwrap();
        assert_eq!(actions, vec![Action::Resolve(Resolution::Cancelled)]);
        // The caller's value is untouched.
        assert_eq!(state.current_symbol, "star");
    }

    #[test]
    fn typing_filters_and_backspace_restores() {
        let mut state = state_with(&["trash", "folder", "trash.fill"], "", "");
        handle_event(&mut state, Event::SearchMode).unwrap();
        handle_event(&mut state, Event::Char('t')).unwrap();
        handle_event(&mut state, Event::Char('r')).unwrap();
        assert_eq!(state.filtered_symbols, vec!["trash", "trash.fill"]);

        handle_event(&mut state, Event::Backspace).unwrap();
        handle_event(&mut state, Event::Backspace).unwrap();
        assert_eq!(state.filtered_symbols.len(), 3);
    }

    #[test]
    fn chars_are_ignored_outside_typing_focus() {
        let mut state = state_with(&["trash", "folder"], "", "");
        let (render, _) = handle_event(&mut state, Event::Char('t')).unwrap();
        assert!(!render);
        assert!(state.search_query.is_empty());

        handle_event(&mut state, Event::SearchMode).unwrap();
        handle_event(&mut state, Event::FocusResults).unwrap();
        handle_event(&mut state, Event::Char('t')).unwrap();
        assert!(state.search_query.is_empty());
    }

    #[test]
    fn exit_search_clears_query_and_restores_catalogue() {
        let mut state = state_with(&["trash", "folder"], "", "");
        handle_event(&mut state, Event::SearchMode).unwrap();
        handle_event(&mut state, Event::Char('z')).unwrap();
        assert!(state.filtered_symbols.is_empty());

        handle_event(&mut state, Event::ExitSearch).unwrap();
        assert_eq!(state.input_mode, InputMode::Normal);
        assert!(state.search_query.is_empty());
        assert_eq!(state.filtered_symbols.len(), 2);
    }

    #[test]
    fn activate_on_empty_results_exits_search() {
        let mut state = state_with(&["trash"], "", "");
        handle_event(&mut state, Event::SearchMode).unwrap();
        handle_event(&mut state, Event::Char('z')).unwrap();

        let (_, actions) = handle_event(&mut state, Event::Activate).unwrap();
        assert!(actions.is_empty());
        assert_eq!(state.input_mode, InputMode::Normal);
        assert!(state.resolution.is_none());
    }

    #[test]
    fn catalogue_load_replaces_group_and_resets_cursor() {
        let mut state = state_with(&[], "", "");
        state.cursor = 5;

        let group = SymbolGroup::new("Custom", vec!["a".into(), "b".into()]);
        handle_event(&mut state, Event::CatalogueLoaded { group }).unwrap();
        assert_eq!(state.cursor, 0);
        assert_eq!(state.group.name, "Custom");
        assert_eq!(state.filtered_symbols.len(), 2);
    }

    #[test]
    fn piped_selection_updates_highlight_source() {
        let mut state = state_with(&["folder", "trash"], "folder", "");
        handle_event(&mut state, Event::SetCurrentSymbol("trash".into())).unwrap();
        assert_eq!(state.current_symbol, "trash");
    }
}
