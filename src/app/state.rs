//! Application state management and view model computation.
//!
//! This module defines [`AppState`], the state container for one picker
//! session, along with filtering, cursor management, and UI view model
//! generation. A session is created per presentation and thrown away once it
//! resolves; nothing here persists.
//!
//! # State Components
//!
//! - **Catalogue**: the active [`SymbolGroup`] for this session
//! - **Filtered symbols**: subset after applying the search query
//! - **Cursor**: navigation position within the filtered grid
//! - **Current symbol**: the caller-owned value, read only for highlighting
//! - **Default symbol**: optional one-key fallback, immutable per session
//! - **Resolution**: recorded once, making the session terminal
//!
//! # View Model Computation
//!
//! `compute_viewmodel` transforms a state snapshot into a renderable grid
//! window: tiles chunked into rows, the visible row window centered on the
//! cursor, and each tile's visual state derived from the caller's current
//! value and the configured default.

use crate::app::actions::Resolution;
use crate::app::modes::{InputMode, PickerPhase, SearchFocus};
use crate::domain::SymbolGroup;
use crate::ui::helpers::truncate_name;
use crate::ui::layout::GridLayout;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{
    EmptyState, FooterInfo, HeaderInfo, SearchBarInfo, TileState, TileView, UIViewModel,
};

/// State container for one picker session.
///
/// Mutated by the event handler in response to user input; view models are
/// computed on demand from snapshots. The caller's selection value is never
/// mutated here — it is read for tile highlighting, and the final write-back
/// happens in the runtime shim when the session resolves.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The active catalogue for this session.
    pub group: SymbolGroup,

    /// Symbols matching the current search query, in catalogue order.
    ///
    /// Recomputed from the full catalogue by `apply_search_filter()` on
    /// every query change. Equal to `group.symbols` when the query is empty.
    pub filtered_symbols: Vec<String>,

    /// Zero-based cursor index within `filtered_symbols`.
    ///
    /// Clamped to valid bounds by `apply_search_filter()`.
    pub cursor: usize,

    /// Current input handling mode.
    pub input_mode: InputMode,

    /// Current search query string.
    pub search_query: String,

    /// The externally-owned selection value, as received from the caller.
    ///
    /// Read for tile highlighting only. The caller remains the single source
    /// of truth; this copy is refreshed whenever the caller pipes a new
    /// value, never forked locally.
    pub current_symbol: String,

    /// The configured default symbol. Empty string means "no default" and
    /// disables the default-accept action.
    pub default_symbol: String,

    /// Color scheme for UI rendering.
    pub theme: Theme,

    /// Tile sizing constants, resolved once at startup.
    pub layout: GridLayout,

    /// Grid column count from the most recent render, used for row-wise
    /// cursor movement. Updated by `update_grid()`.
    pub grid_columns: usize,

    /// Session outcome. `Some` makes the session terminal: every later event
    /// is ignored.
    pub resolution: Option<Resolution>,
}

impl AppState {
    /// Creates state for a new picker session.
    ///
    /// The filtered list starts as the full catalogue (empty query) and the
    /// cursor at the first tile.
    #[must_use]
    pub fn new(
        group: SymbolGroup,
        current_symbol: String,
        default_symbol: String,
        theme: Theme,
        layout: GridLayout,
    ) -> Self {
        let filtered_symbols = group.symbols.clone();
        Self {
            group,
            filtered_symbols,
            cursor: 0,
            input_mode: InputMode::Normal,
            search_query: String::new(),
            current_symbol,
            default_symbol,
            theme,
            layout,
            grid_columns: 1,
            resolution: None,
        }
    }

    /// Observable phase of the session, derived from state.
    #[must_use]
    pub fn phase(&self) -> PickerPhase {
        if self.resolution.is_some() {
            PickerPhase::Resolved
        } else if self.search_query.is_empty() {
            PickerPhase::Browsing
        } else {
            PickerPhase::Filtering
        }
    }

    /// Whether a default symbol is configured for this session.
    #[must_use]
    pub fn has_default(&self) -> bool {
        !self.default_symbol.is_empty()
    }

    /// Recomputes the filtered list from the full catalogue.
    ///
    /// Case-insensitive substring containment against the search query,
    /// catalogue order preserved. An empty query short-circuits to the full
    /// catalogue. No ranking, no fuzzy matching, no index — the list is
    /// rebuilt on every keystroke, which is plenty fast for a few thousand
    /// entries. The cursor is clamped to the new bounds afterwards.
    pub fn apply_search_filter(&mut self) {
        let _span = tracing::debug_span!(
            "apply_search_filter",
            total_symbols = self.group.symbols.len(),
            query_len = self.search_query.len(),
        )
        .entered();

        if self.search_query.is_empty() {
            self.filtered_symbols = self.group.symbols.clone();
        } else {
            let needle = self.search_query.to_lowercase();
            self.filtered_symbols = self
                .group
                .symbols
                .iter()
                .filter(|symbol| symbol.to_lowercase().contains(&needle))
                .cloned()
                .collect();
        }

        if self.filtered_symbols.is_empty() {
            self.cursor = 0;
        } else {
            self.cursor = self.cursor.min(self.filtered_symbols.len() - 1);
        }

        tracing::debug!(
            filtered_count = self.filtered_symbols.len(),
            "search filter applied"
        );
    }

    /// Moves the cursor one grid row down. Clamps at the bottom.
    pub fn move_cursor_down(&mut self) {
        let next = self.cursor + self.grid_columns.max(1);
        if next < self.filtered_symbols.len() {
            self.cursor = next;
        }
    }

    /// Moves the cursor one grid row up. Clamps at the top.
    pub fn move_cursor_up(&mut self) {
        let step = self.grid_columns.max(1);
        if self.cursor >= step {
            self.cursor -= step;
        }
    }

    /// Moves the cursor one tile left, wrapping to the last tile from the
    /// first.
    pub fn move_cursor_left(&mut self) {
        if self.filtered_symbols.is_empty() {
            return;
        }
        if self.cursor == 0 {
            self.cursor = self.filtered_symbols.len() - 1;
        } else {
            self.cursor -= 1;
        }
    }

    /// Moves the cursor one tile right, wrapping to the first tile from the
    /// last.
    pub fn move_cursor_right(&mut self) {
        if self.filtered_symbols.is_empty() {
            return;
        }
        self.cursor = (self.cursor + 1) % self.filtered_symbols.len();
    }

    /// Returns the symbol under the cursor, if any.
    #[must_use]
    pub fn selected_symbol(&self) -> Option<&String> {
        self.filtered_symbols.get(self.cursor)
    }

    /// Records the grid column count for the given terminal width.
    ///
    /// Called by the runtime shim on every render so that row-wise cursor
    /// movement tracks the actual grid shape.
    pub fn update_grid(&mut self, cols: usize) {
        self.grid_columns = self.layout.columns_for(cols);
    }

    /// Derives the visual state of one tile.
    ///
    /// A pure function of the caller's current value and the configured
    /// default — local interaction state (cursor, search) plays no part.
    #[must_use]
    pub fn tile_state(&self, symbol: &str) -> TileState {
        if !self.current_symbol.is_empty() && symbol == self.current_symbol {
            TileState::Selected
        } else if self.has_default() && symbol == self.default_symbol {
            TileState::IsDefault
        } else {
            TileState::Normal
        }
    }

    /// Computes a renderable view model from current state and terminal
    /// dimensions.
    ///
    /// Chunks the filtered list into grid rows, windows the rows around the
    /// cursor so it stays visible, and derives per-tile display state.
    #[must_use]
    pub fn compute_viewmodel(&self, rows: usize, cols: usize) -> UIViewModel {
        let columns = self.layout.columns_for(cols);

        if self.filtered_symbols.is_empty() {
            return UIViewModel {
                tile_rows: vec![],
                header: self.compute_header(),
                footer: self.compute_footer(),
                empty_state: Some(self.compute_empty_state()),
                search_bar: self.compute_search_bar(),
            };
        }

        let available_rows = self.calculate_available_rows(rows);
        let total_rows = self.filtered_symbols.len().div_ceil(columns);
        let cursor_row = self.cursor / columns;

        let mut visible_start = cursor_row.saturating_sub(available_rows / 2);
        let visible_end = (visible_start + available_rows).min(total_rows);

        let actual_count = visible_end - visible_start;
        if actual_count < available_rows && total_rows >= available_rows {
            visible_start = visible_end.saturating_sub(available_rows);
        }

        let tile_rows = (visible_start..visible_end)
            .map(|grid_row| {
                let row_start = grid_row * columns;
                let row_end = (row_start + columns).min(self.filtered_symbols.len());
                self.filtered_symbols[row_start..row_end]
                    .iter()
                    .enumerate()
                    .map(|(offset, symbol)| TileView {
                        name: truncate_name(symbol, self.layout.tile_width),
                        state: self.tile_state(symbol),
                        is_cursor: row_start + offset == self.cursor,
                    })
                    .collect()
            })
            .collect();

        UIViewModel {
            tile_rows,
            header: self.compute_header(),
            footer: self.compute_footer(),
            empty_state: None,
            search_bar: self.compute_search_bar(),
        }
    }

    /// Header title: catalogue name plus visible/total counts.
    fn compute_header(&self) -> HeaderInfo {
        HeaderInfo {
            title: format!(
                " {} ({}/{}) ",
                self.group.name,
                self.filtered_symbols.len(),
                self.group.symbols.len()
            ),
        }
    }

    /// Footer keybinding hints for the current mode.
    ///
    /// The default-accept hint only appears when a default is configured.
    fn compute_footer(&self) -> FooterInfo {
        let keybindings = match self.input_mode {
            InputMode::Search(SearchFocus::Typing) => {
                "esc: exit search  enter: pick  tab: navigate results  type to filter".to_string()
            }
            InputMode::Search(SearchFocus::Navigating) => {
                "esc: exit search  /: edit query  hjkl: navigate  enter: pick".to_string()
            }
            InputMode::Normal if self.has_default() => {
                "hjkl/arrows: navigate  /: search  enter: pick  d: default  esc: cancel"
                    .to_string()
            }
            InputMode::Normal => {
                "hjkl/arrows: navigate  /: search  enter: pick  esc: cancel".to_string()
            }
        };

        FooterInfo { keybindings }
    }

    /// Empty state message: distinguishes an empty catalogue from an empty
    /// match set.
    fn compute_empty_state(&self) -> EmptyState {
        if self.group.is_empty() {
            EmptyState {
                message: "Symbol catalogue is empty".to_string(),
                subtitle: "Check the symbol_file path in your plugin configuration".to_string(),
            }
        } else {
            EmptyState {
                message: "No symbols match".to_string(),
                subtitle: "Press esc to clear the search".to_string(),
            }
        }
    }

    /// Search bar state if in search mode.
    fn compute_search_bar(&self) -> Option<SearchBarInfo> {
        if matches!(self.input_mode, InputMode::Search(_)) {
            Some(SearchBarInfo {
                query: self.search_query.clone(),
            })
        } else {
            None
        }
    }

    /// Grid rows available after subtracting UI chrome.
    ///
    /// Accounts for the blank top line, header, borders, footer, and the
    /// search box when active. Always at least one row.
    const fn calculate_available_rows(&self, total_rows: usize) -> usize {
        let chrome = match self.input_mode {
            InputMode::Normal => 6,
            InputMode::Search(_) => 9,
        };
        let available = total_rows.saturating_sub(chrome);
        if available == 0 {
            1
        } else {
            available
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state_with(symbols: &[&str]) -> AppState {
        AppState::new(
            SymbolGroup::new("Test", symbols.iter().map(|s| (*s).to_string()).collect()),
            String::new(),
            String::new(),
            Theme::default(),
            GridLayout::default(),
        )
    }

    #[test]
    fn empty_query_shows_full_catalogue_in_order() {
        let mut state = state_with(&["b", "a", "a", "c"]);
        state.apply_search_filter();
        assert_eq!(state.filtered_symbols, vec!["b", "a", "a", "c"]);
    }

    #[test]
    fn filter_is_case_insensitive_substring() {
        let mut state = state_with(&["Trash", "trash.slash", "folder", "arrow.trash"]);
        state.search_query = "TRASH".to_string();
        state.apply_search_filter();
        assert_eq!(
            state.filtered_symbols,
            vec!["Trash", "trash.slash", "arrow.trash"]
        );
    }

    #[test]
    fn filter_matches_exactly_the_containment_predicate() {
        let symbols = ["star", "star.fill", "heart", "staroflife"];
        let mut state = state_with(&symbols);
        state.search_query = "star".to_string();
        state.apply_search_filter();

        let expected: Vec<String> = symbols
            .iter()
            .filter(|s| s.to_lowercase().contains("star"))
            .map(|s| (*s).to_string())
            .collect();
        assert_eq!(state.filtered_symbols, expected);
    }

    #[test]
    fn cursor_is_clamped_when_filter_shrinks_results() {
        let mut state = state_with(&["a", "b", "c", "ab"]);
        state.cursor = 3;
        state.search_query = "a".to_string();
        state.apply_search_filter();
        // Two matches remain ("a", "ab"); cursor clamps to the last.
        assert_eq!(state.cursor, 1);
    }

    #[test]
    fn cursor_moves_by_grid_rows_and_clamps() {
        let mut state = state_with(&["a", "b", "c", "d", "e"]);
        state.grid_columns = 2;

        state.move_cursor_down();
        assert_eq!(state.cursor, 2);
        state.move_cursor_down();
        assert_eq!(state.cursor, 4);
        state.move_cursor_down(); // would pass the end
        assert_eq!(state.cursor, 4);

        state.move_cursor_up();
        assert_eq!(state.cursor, 2);
        state.move_cursor_up();
        state.move_cursor_up(); // already at top row
        assert_eq!(state.cursor, 0);
    }

    #[test]
    fn cursor_wraps_horizontally() {
        let mut state = state_with(&["a", "b", "c"]);
        state.move_cursor_left();
        assert_eq!(state.cursor, 2);
        state.move_cursor_right();
        assert_eq!(state.cursor, 0);
    }

    #[test]
    fn tile_state_derives_from_current_and_default_only() {
        let mut state = state_with(&["folder", "trash", "star"]);
        state.current_symbol = "folder".to_string();
        state.default_symbol = "trash".to_string();

        assert_eq!(state.tile_state("folder"), TileState::Selected);
        assert_eq!(state.tile_state("trash"), TileState::IsDefault);
        assert_eq!(state.tile_state("star"), TileState::Normal);
    }

    #[test]
    fn current_beats_default_when_equal() {
        let mut state = state_with(&["trash"]);
        state.current_symbol = "trash".to_string();
        state.default_symbol = "trash".to_string();
        assert_eq!(state.tile_state("trash"), TileState::Selected);
    }

    #[test]
    fn empty_current_symbol_never_marks_selected() {
        let state = state_with(&["folder"]);
        assert_eq!(state.tile_state("folder"), TileState::Normal);
    }

    #[test]
    fn phase_tracks_query_and_resolution() {
        let mut state = state_with(&["a"]);
        assert_eq!(state.phase(), PickerPhase::Browsing);

        state.search_query = "a".to_string();
        assert_eq!(state.phase(), PickerPhase::Filtering);

        state.resolution = Some(Resolution::Cancelled);
        assert_eq!(state.phase(), PickerPhase::Resolved);
    }

    #[test]
    fn viewmodel_windows_rows_around_cursor() {
        let symbols: Vec<String> = (0..100).map(|i| format!("sym.{i}")).collect();
        let state = AppState::new(
            SymbolGroup::new("Big", symbols),
            String::new(),
            String::new(),
            Theme::default(),
            GridLayout::default(),
        );
        // 80 cols → 2 columns with the normal layout; 24 rows → 18 grid rows.
        let vm = state.compute_viewmodel(24, 80);
        assert!(vm.empty_state.is_none());
        assert_eq!(vm.tile_rows.len(), 18);
        assert!(vm.tile_rows.iter().all(|r| r.len() <= 2));
        assert!(vm.tile_rows[0][0].is_cursor);
    }

    #[test]
    fn viewmodel_keeps_cursor_visible_at_list_end() {
        let symbols: Vec<String> = (0..100).map(|i| format!("sym.{i}")).collect();
        let mut state = AppState::new(
            SymbolGroup::new("Big", symbols),
            String::new(),
            String::new(),
            Theme::default(),
            GridLayout::default(),
        );
        state.cursor = 99;
        let vm = state.compute_viewmodel(24, 80);
        let cursor_tiles: usize = vm
            .tile_rows
            .iter()
            .flatten()
            .filter(|t| t.is_cursor)
            .count();
        assert_eq!(cursor_tiles, 1);
    }

    #[test]
    fn viewmodel_reports_empty_states_distinctly() {
        let mut state = state_with(&[]);
        let vm = state.compute_viewmodel(24, 80);
        assert_eq!(
            vm.empty_state.unwrap().message,
            "Symbol catalogue is empty"
        );

        state = state_with(&["folder"]);
        state.search_query = "zzz".to_string();
        state.apply_search_filter();
        let vm = state.compute_viewmodel(24, 80);
        assert_eq!(vm.empty_state.unwrap().message, "No symbols match");
    }

    #[test]
    fn header_counts_filtered_and_total() {
        let mut state = state_with(&["a", "ab", "b"]);
        state.search_query = "a".to_string();
        state.apply_search_filter();
        let vm = state.compute_viewmodel(24, 80);
        assert_eq!(vm.header.title, " Test (2/3) ");
    }

    #[test]
    fn footer_offers_default_only_when_configured() {
        let mut state = state_with(&["a"]);
        let vm = state.compute_viewmodel(24, 80);
        assert!(!vm.footer.keybindings.contains("d: default"));

        state.default_symbol = "trash".to_string();
        let vm = state.compute_viewmodel(24, 80);
        assert!(vm.footer.keybindings.contains("d: default"));
    }
}
