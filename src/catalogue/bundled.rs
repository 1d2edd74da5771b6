//! The bundled default symbol catalogue.
//!
//! The full catalogue ships inside the binary via `include_str!`, so the
//! default picker works with no filesystem access at all — important in the
//! Zellij WASM sandbox, where host paths need explicit permission grants.

use crate::domain::SymbolGroup;

/// Raw newline-delimited catalogue resource, one identifier per line.
const BUNDLED_SYMBOLS: &str = include_str!("../../assets/symbols.txt");

/// Name given to the bundled catalogue.
const BUNDLED_NAME: &str = "Symbols";

/// Returns the bundled default catalogue.
///
/// The group is named `"Symbols"` and contains every identifier from the
/// compiled-in resource, in resource order. Blank lines are skipped.
///
/// Parsing happens on each call; the resource is a few tens of kilobytes and
/// the picker calls this once per session, so there is nothing to cache.
///
/// # Examples
///
/// ```
/// use glyphpick::catalogue::default_symbols;
///
/// let group = default_symbols();
/// assert_eq!(group.name, "Symbols");
/// assert!(!group.symbols.is_empty());
/// ```
#[must_use]
pub fn default_symbols() -> SymbolGroup {
    let symbols = BUNDLED_SYMBOLS
        .lines()
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect();

    SymbolGroup::new(BUNDLED_NAME, symbols)
}

#[cfg(test)]
mod tests {
    use super::*;

    // Guards against packaging corruption of the bundled resource.
    #[test]
    fn bundled_catalogue_has_expected_shape() {
        let group = default_symbols();
        assert_eq!(group.name, "Symbols");
        assert_eq!(group.symbols.len(), 4014);
    }

    #[test]
    fn bundled_catalogue_has_no_blank_entries() {
        let group = default_symbols();
        assert!(group.symbols.iter().all(|s| !s.is_empty()));
    }

    #[test]
    fn bundled_catalogue_contains_common_identifiers() {
        let group = default_symbols();
        assert!(group.symbols.iter().any(|s| s == "trash"));
        assert!(group.symbols.iter().any(|s| s == "folder"));
    }
}
