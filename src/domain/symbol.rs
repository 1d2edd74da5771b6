//! Symbol catalogue domain model.
//!
//! This module defines [`SymbolGroup`], a named, ordered collection of symbol
//! identifiers that the picker presents to the user. A symbol is just a string
//! naming a glyph in whatever icon set the caller cares about; the picker
//! attaches no meaning to it beyond equality comparison for highlighting.

use serde::{Deserialize, Serialize};

/// A named, ordered collection of symbol identifiers.
///
/// Insertion order is preserved and duplicates are permitted — the picker
/// displays exactly what it is given. No validation (uniqueness, format) is
/// performed on entries.
///
/// Groups are constructed either from an explicit list via [`SymbolGroup::new`]
/// or from a newline-delimited text file via
/// [`crate::catalogue::load_file`]. The bundled default catalogue is exposed
/// as [`crate::catalogue::default_symbols`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SymbolGroup {
    /// Human-readable catalogue name, shown in the picker header.
    pub name: String,
    /// Symbol identifiers in display order.
    pub symbols: Vec<String>,
}

impl SymbolGroup {
    /// Creates a group from an explicit list of symbol identifiers.
    ///
    /// Useful for small custom sets tailored to a specific use case. The list
    /// is taken as-is: order preserved, duplicates kept.
    ///
    /// # Examples
    ///
    /// ```
    /// use glyphpick::domain::SymbolGroup;
    ///
    /// let group = SymbolGroup::new("Files", vec![
    ///     "folder".to_string(),
    ///     "doc".to_string(),
    ///     "trash".to_string(),
    /// ]);
    /// assert_eq!(group.name, "Files");
    /// assert_eq!(group.symbols.len(), 3);
    /// ```
    #[must_use]
    pub fn new(name: impl Into<String>, symbols: Vec<String>) -> Self {
        Self {
            name: name.into(),
            symbols,
        }
    }

    /// Returns `true` when the group contains no symbols.
    ///
    /// An empty group is a legal state — it is what a failed catalogue file
    /// load degrades to.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_list_preserves_length_and_name() {
        let group = SymbolGroup::new(
            "Custom1",
            vec![
                "trash".to_string(),
                "folder".to_string(),
                "tray".to_string(),
                "clipboard".to_string(),
                "list.bullet".to_string(),
            ],
        );
        assert_eq!(group.name, "Custom1");
        assert_eq!(group.symbols.len(), 5);
    }

    #[test]
    fn explicit_list_preserves_order_and_duplicates() {
        let group = SymbolGroup::new(
            "Dupes",
            vec![
                "star".to_string(),
                "heart".to_string(),
                "star".to_string(),
            ],
        );
        assert_eq!(group.symbols, vec!["star", "heart", "star"]);
    }

    #[test]
    fn empty_group_is_empty() {
        let group = SymbolGroup::new("Empty", vec![]);
        assert!(group.is_empty());
    }
}
