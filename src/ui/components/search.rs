//! Search bar component renderer.
//!
//! Renders the query input as a 3-line bordered box above the symbol grid.

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::SearchBarInfo;

/// Horizontal margin for the search box (spaces on left and right).
const SEARCH_BOX_MARGIN: usize = 5;

/// Renders the search input box starting at the specified row.
///
/// Layout:
///
/// ```text
/// [margin] ┌─────────────┐ [margin]
/// [margin] │ Filter: ... │ [margin]
/// [margin] └─────────────┘ [margin]
/// ```
///
/// Borders use the theme's `search_bar_border` color, the query text uses
/// `text_normal`. Returns the next available row (row + 3).
pub fn render_search_bar(row: usize, search: &SearchBarInfo, theme: &Theme, cols: usize) -> usize {
    let box_width = cols.saturating_sub(SEARCH_BOX_MARGIN * 2);
    let inner_width = box_width.saturating_sub(2);

    position_cursor(row, 1);
    print!("{}", " ".repeat(SEARCH_BOX_MARGIN));
    print!("{}", Theme::fg(&theme.colors.search_bar_border));
    print!("┌{}┐", "─".repeat(inner_width));
    print!("{}", Theme::reset());

    let search_text = format!(" Filter: {}", search.query);
    let padding = inner_width.saturating_sub(search_text.chars().count());

    position_cursor(row + 1, 1);
    print!("{}", " ".repeat(SEARCH_BOX_MARGIN));
    print!("{}", Theme::fg(&theme.colors.search_bar_border));
    print!("│");
    print!("{}", Theme::fg(&theme.colors.text_normal));
    print!("{search_text}");
    print!("{}", " ".repeat(padding));
    print!("{}", Theme::fg(&theme.colors.search_bar_border));
    print!("│");
    print!("{}", Theme::reset());

    position_cursor(row + 2, 1);
    print!("{}", " ".repeat(SEARCH_BOX_MARGIN));
    print!("{}", Theme::fg(&theme.colors.search_bar_border));
    print!("└{}┘", "─".repeat(inner_width));
    print!("{}", Theme::reset());

    row + 3
}
