//! Composable UI component renderers.
//!
//! Each component renders one part of the interface with `print!` and ANSI
//! positioning:
//!
//! - [`header`]: catalogue name and symbol counts
//! - [`footer`]: keybinding hints for the current mode
//! - [`search`]: bordered query input box
//! - [`grid`]: the symbol tile grid
//! - [`empty`]: centered empty-state message
//!
//! Two high-level layout functions compose them: [`render_normal_mode`]
//! (header + grid + footer) and [`render_search_mode`], which inserts the
//! 3-line search box between header and grid.

mod empty;
mod footer;
mod grid;
mod header;
mod search;

pub use empty::render_empty_state;

use crate::ui::helpers::position_cursor;
use crate::ui::layout::GridLayout;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{SearchBarInfo, UIViewModel};

use footer::render_footer;
use grid::render_grid_rows;
use header::render_header;
use search::render_search_bar;

/// Renders a horizontal border line at the specified row.
///
/// Returns the next available row position.
fn render_border(row: usize, color: &str, cols: usize) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::fg(color));
    print!("{}", "─".repeat(cols));
    print!("{}", Theme::reset());
    row + 1
}

/// Renders the normal mode layout (no search bar).
///
/// Layout structure:
/// ```text
/// [blank line]
/// [Header]
/// [Border]
/// [Grid rows]
/// [Border]
/// [Footer]
/// ```
pub fn render_normal_mode(
    vm: &UIViewModel,
    theme: &Theme,
    layout: GridLayout,
    cols: usize,
    rows: usize,
) {
    let mut current_row = 2; // row 1 stays blank

    current_row = render_header(current_row, &vm.header, theme, cols);
    current_row = render_border(current_row, &theme.colors.border, cols);
    let _current_row = render_grid_rows(current_row, &vm.tile_rows, theme, layout);

    let footer_start = rows.saturating_sub(1);
    let border_row = footer_start.saturating_sub(1);

    render_border(border_row, &theme.colors.border, cols);
    render_footer(footer_start, &vm.footer, theme, cols);
}

/// Renders the search mode layout (with search bar).
///
/// Same as normal mode with the 3-line search box between the header border
/// and the grid.
pub fn render_search_mode(
    vm: &UIViewModel,
    search: &SearchBarInfo,
    theme: &Theme,
    layout: GridLayout,
    cols: usize,
    rows: usize,
) {
    let mut current_row = 2;

    current_row = render_header(current_row, &vm.header, theme, cols);
    current_row = render_border(current_row, &theme.colors.border, cols);
    current_row = render_search_bar(current_row, search, theme, cols);
    let _current_row = render_grid_rows(current_row, &vm.tile_rows, theme, layout);

    let footer_start = rows.saturating_sub(1);
    let border_row = footer_start.saturating_sub(1);

    render_border(border_row, &theme.colors.border, cols);
    render_footer(footer_start, &vm.footer, theme, cols);
}
