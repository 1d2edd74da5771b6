//! Grid layout tables resolved from configuration.
//!
//! The original picker adapted tile sizes per platform at compile time; here
//! the same constants live in a small table keyed by a `layout` configuration
//! value and are resolved once at startup. Column count is derived from the
//! terminal width at render time, so the grid stays responsive without any
//! per-platform conditionals in rendering code.

/// Horizontal margin reserved at the left and right edges of the grid.
pub const GRID_MARGIN: usize = 2;

/// Tile sizing constants for the symbol grid.
///
/// `tile_width` is the character width of one tile cell (symbol name plus
/// padding); `gap` is the spacing between adjacent tiles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridLayout {
    /// Width of one tile cell in character columns.
    pub tile_width: usize,
    /// Spacing between adjacent tiles in character columns.
    pub gap: usize,
}

impl GridLayout {
    /// Resolves a layout by configuration name.
    ///
    /// Supported names: `normal`, `compact`, `wide`. Returns `None` for
    /// unknown names so the caller can fall back to the default with a log
    /// line.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "normal" => Some(Self {
                tile_width: 24,
                gap: 2,
            }),
            "compact" => Some(Self {
                tile_width: 16,
                gap: 1,
            }),
            "wide" => Some(Self {
                tile_width: 32,
                gap: 3,
            }),
            _ => None,
        }
    }

    /// Number of grid columns that fit in a terminal of the given width.
    ///
    /// Always at least 1, even on absurdly narrow terminals.
    #[must_use]
    pub fn columns_for(&self, cols: usize) -> usize {
        let usable = cols.saturating_sub(GRID_MARGIN * 2);
        (usable / (self.tile_width + self.gap)).max(1)
    }
}

impl Default for GridLayout {
    fn default() -> Self {
        Self::from_name("normal").expect("normal layout is always defined")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn named_layouts_resolve() {
        assert_eq!(GridLayout::from_name("compact").unwrap().tile_width, 16);
        assert_eq!(GridLayout::from_name("wide").unwrap().gap, 3);
        assert!(GridLayout::from_name("retina").is_none());
    }

    #[test]
    fn default_is_normal() {
        assert_eq!(GridLayout::default(), GridLayout::from_name("normal").unwrap());
    }

    #[test]
    fn column_count_tracks_terminal_width() {
        let layout = GridLayout::default();
        // 80 cols: 76 usable / 26 per tile = 2
        assert_eq!(layout.columns_for(80), 2);
        assert_eq!(layout.columns_for(160), 6);
    }

    #[test]
    fn narrow_terminal_still_gets_one_column() {
        let layout = GridLayout::default();
        assert_eq!(layout.columns_for(10), 1);
        assert_eq!(layout.columns_for(0), 1);
    }
}
