//! Footer component renderer.

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::FooterInfo;

/// Renders the footer help bar at the specified row.
///
/// Keybinding hints are centered and dimmed; text longer than the terminal
/// width is truncated to avoid wrapping. Returns the next available row.
pub fn render_footer(row: usize, footer: &FooterInfo, theme: &Theme, cols: usize) -> usize {
    let help_text: String = footer.keybindings.chars().take(cols).collect();
    let text_len = help_text.chars().count();
    let padding = (cols.saturating_sub(text_len)) / 2;

    position_cursor(row, 1);
    print!("{}", Theme::fg(&theme.colors.text_dim));
    print!("{}", " ".repeat(padding));
    print!("{help_text}");
    print!("{}", " ".repeat(cols.saturating_sub(padding + text_len)));
    print!("{}", Theme::reset());
    row + 1
}
