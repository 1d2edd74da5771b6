//! Newline-delimited catalogue file loading.
//!
//! User-supplied catalogues are plain text files with one symbol identifier
//! per line — no escaping, no comments, no header. Files are read once,
//! synchronously, at session start.

use crate::domain::SymbolGroup;
use crate::infrastructure::paths::expand_tilde;

/// Loads a catalogue from a newline-delimited text file.
///
/// Tilde-prefixed paths are expanded for the Zellij sandbox (`~` → `/host`).
/// Blank lines are skipped; everything else is taken verbatim, order
/// preserved, duplicates kept.
///
/// # Failure policy
///
/// Fails softly: if the file cannot be read for any reason the returned group
/// has the given name and an empty symbol list. The failure is logged at
/// debug level and never propagated.
///
/// # Examples
///
/// ```
/// use glyphpick::catalogue::load_file;
///
/// let group = load_file("DoesNotExist", "/nonexistent/symbols.txt");
/// assert_eq!(group.name, "DoesNotExist");
/// assert!(group.symbols.is_empty());
/// ```
#[must_use]
pub fn load_file(name: impl Into<String>, path: &str) -> SymbolGroup {
    let name = name.into();
    let expanded = expand_tilde(path);

    let symbols = match std::fs::read_to_string(&expanded) {
        Ok(content) => content
            .lines()
            .filter(|line| !line.is_empty())
            .map(String::from)
            .collect(),
        Err(e) => {
            tracing::debug!(path = %expanded, error = %e, "catalogue file unreadable, using empty list");
            Vec::new()
        }
    };

    SymbolGroup::new(name, symbols)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn missing_file_yields_empty_group_without_error() {
        let group = load_file("DoesNotExist", "/definitely/not/a/real/path.txt");
        assert_eq!(group.name, "DoesNotExist");
        assert_eq!(group.symbols.len(), 0);
    }

    #[test]
    fn file_entries_are_loaded_in_order() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        writeln!(file, "pencil").unwrap();
        writeln!(file, "trash").unwrap();
        writeln!(file, "pencil").unwrap();
        file.flush().unwrap();

        let group = load_file("Custom", file.path().to_str().unwrap());
        assert_eq!(group.symbols, vec!["pencil", "trash", "pencil"]);
    }

    #[test]
    fn blank_lines_are_skipped() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        write!(file, "star\n\nheart\n\n").unwrap();
        file.flush().unwrap();

        let group = load_file("Custom", file.path().to_str().unwrap());
        assert_eq!(group.symbols, vec!["star", "heart"]);
    }
}
