//! Path utilities for the Zellij sandbox environment.
//!
//! Zellij plugins see the host filesystem mounted under `/host`. These
//! helpers handle tilde expansion against that mount and locate the plugin's
//! data directory.

use std::path::PathBuf;

/// Returns the data directory for glyphpick trace output.
///
/// Resolves to `/host/.local/share/zellij/glyphpick` in the sandbox. `/host`
/// points at the cwd of the last focused terminal (or where Zellij was
/// started), so from a home-directory terminal this is
/// `~/.local/share/zellij/glyphpick`.
#[must_use]
pub fn get_data_dir() -> PathBuf {
    PathBuf::from("/host/.local/share/zellij").join("glyphpick")
}

/// Expands tilde paths to the `/host` mount.
///
/// `~/symbols.txt` becomes `/host/symbols.txt`; absolute paths pass through
/// unchanged.
#[must_use]
pub fn expand_tilde(path: &str) -> String {
    if path.starts_with("~/") {
        path.replacen('~', "/host", 1)
    } else if path == "~" {
        "/host".to_string()
    } else {
        path.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tilde_maps_to_host_mount() {
        assert_eq!(expand_tilde("~/symbols.txt"), "/host/symbols.txt");
        assert_eq!(expand_tilde("~"), "/host");
    }

    #[test]
    fn absolute_and_relative_paths_pass_through() {
        assert_eq!(expand_tilde("/etc/symbols.txt"), "/etc/symbols.txt");
        assert_eq!(expand_tilde("symbols.txt"), "symbols.txt");
    }

    #[test]
    fn data_dir_lives_under_host_mount() {
        assert_eq!(
            get_data_dir().to_str().unwrap(),
            "/host/.local/share/zellij/glyphpick"
        );
    }
}
