//! Top-level rendering coordinator.
//!
//! Entry point for drawing one frame: compute a view model snapshot from
//! application state, then delegate to the mode-specific component layout
//! (normal, search, or empty state).

use crate::app::AppState;
use crate::ui::components;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::UIViewModel;

/// Renders the picker UI to stdout.
///
/// Prints ANSI-styled output with explicit cursor positioning; does not clear
/// the screen (the host redraws the pane around each render).
pub fn render(state: &AppState, rows: usize, cols: usize) {
    let viewmodel = state.compute_viewmodel(rows, cols);

    render_viewmodel(&viewmodel, state, &state.theme, rows, cols);
}

/// Renders a view model with mode-specific layout.
///
/// An empty state replaces the grid entirely; otherwise the search bar's
/// presence picks between search and normal layouts.
fn render_viewmodel(vm: &UIViewModel, state: &AppState, theme: &Theme, rows: usize, cols: usize) {
    if let Some(empty) = &vm.empty_state {
        components::render_empty_state(empty, theme, cols);
        return;
    }

    if let Some(search) = &vm.search_bar {
        components::render_search_mode(vm, search, theme, state.layout, cols, rows);
    } else {
        components::render_normal_mode(vm, theme, state.layout, cols, rows);
    }
}
