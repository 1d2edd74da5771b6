//! Symbol grid component renderer.
//!
//! Renders the visible window of symbol tiles as fixed-width cells arranged
//! in rows. Each tile carries a derived visual state (selected, default,
//! normal) plus a cursor flag; styling precedence is cursor, then selected,
//! then default.

use crate::ui::helpers::position_cursor;
use crate::ui::layout::{GridLayout, GRID_MARGIN};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{TileState, TileView};

/// Renders all visible grid rows starting at the specified row.
///
/// Returns the next available row position (row + number of tile rows).
pub fn render_grid_rows(
    row: usize,
    tile_rows: &[Vec<TileView>],
    theme: &Theme,
    layout: GridLayout,
) -> usize {
    let mut current_row = row;
    for tiles in tile_rows {
        render_grid_row(current_row, tiles, theme, layout);
        current_row += 1;
    }
    current_row
}

/// Renders a single row of tiles.
///
/// Each tile is padded to `layout.tile_width` so background highlights form a
/// uniform cell, with `layout.gap` spaces between cells.
///
/// # Styling Precedence
///
/// 1. Cursor (navigation position): `cursor_fg` on `cursor_bg`
/// 2. Selected (matches the caller's current value): `tile_selected_fg` on
///    `tile_selected_bg`
/// 3. Default (matches the configured default): `tile_default_fg`, bold
/// 4. Normal: `text_normal`
fn render_grid_row(row: usize, tiles: &[TileView], theme: &Theme, layout: GridLayout) {
    position_cursor(row, 1);
    print!("{}", " ".repeat(GRID_MARGIN));

    for tile in tiles {
        render_tile(tile, theme, layout.tile_width);
        print!("{}", " ".repeat(layout.gap));
    }
}

fn render_tile(tile: &TileView, theme: &Theme, tile_width: usize) {
    if tile.is_cursor {
        print!("{}", Theme::fg(&theme.colors.cursor_fg));
        print!("{}", Theme::bg(&theme.colors.cursor_bg));
    } else {
        match tile.state {
            TileState::Selected => {
                print!("{}", Theme::fg(&theme.colors.tile_selected_fg));
                print!("{}", Theme::bg(&theme.colors.tile_selected_bg));
            }
            TileState::IsDefault => {
                print!("{}", Theme::bold());
                print!("{}", Theme::fg(&theme.colors.tile_default_fg));
            }
            TileState::Normal => {
                print!("{}", Theme::fg(&theme.colors.text_normal));
            }
        }
    }

    let name_len = tile.name.chars().count();
    print!("{}", tile.name);
    print!("{}", " ".repeat(tile_width.saturating_sub(name_len)));
    print!("{}", Theme::reset());
}
