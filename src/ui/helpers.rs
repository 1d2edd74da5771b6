//! Shared rendering utilities.

/// Positions the cursor at a specific row and column.
///
/// Uses the ANSI escape sequence `\u{1b}[{row};{col}H`. Coordinates are
/// 1-indexed (row 1 = first row, col 1 = first column).
pub fn position_cursor(row: usize, col: usize) {
    print!("\u{1b}[{row};{col}H");
}

/// Truncates a symbol name to fit a tile cell, appending `…` when shortened.
///
/// Operates on characters, not bytes, so multi-byte identifiers cannot be
/// split mid-codepoint.
#[must_use]
pub fn truncate_name(name: &str, max_width: usize) -> String {
    if name.chars().count() <= max_width {
        return name.to_string();
    }

    let keep = max_width.saturating_sub(1);
    let mut truncated: String = name.chars().take(keep).collect();
    truncated.push('…');
    truncated
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_names_pass_through() {
        assert_eq!(truncate_name("trash", 16), "trash");
    }

    #[test]
    fn long_names_are_truncated_with_ellipsis() {
        assert_eq!(
            truncate_name("square.and.arrow.up.trianglebadge.exclamationmark", 16),
            "square.and.arro…"
        );
    }

    #[test]
    fn exact_width_is_not_truncated() {
        assert_eq!(truncate_name("abcdefgh", 8), "abcdefgh");
    }
}
