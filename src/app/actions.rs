//! Actions representing side effects to be executed by the plugin runtime.
//!
//! This module defines the [`Action`] type, which represents imperative
//! commands produced by the event handler after processing user input.
//! Actions bridge pure state transformations and effectful operations —
//! here, replying to the caller and dismissing the pane.
//!
//! The picker emits exactly one action per session: the terminal
//! [`Action::Resolve`], carrying the session outcome. Everything before that
//! point is pure state mutation plus re-render.

/// Outcome of a picker session.
///
/// Exactly one resolution is produced per session. The runtime translates it
/// into at most one write-back to the caller: `Picked` and `DefaultAccepted`
/// carry the identifier to deliver; `Cancelled` delivers nothing, leaving the
/// caller's value untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// The user activated a tile; its identifier becomes the chosen value.
    Picked(String),

    /// The user accepted the configured default symbol.
    DefaultAccepted(String),

    /// The user cancelled; no value is written back.
    Cancelled,
}

impl Resolution {
    /// Returns the identifier to write back, if this resolution carries one.
    #[must_use]
    pub fn chosen(&self) -> Option<&str> {
        match self {
            Self::Picked(s) | Self::DefaultAccepted(s) => Some(s),
            Self::Cancelled => None,
        }
    }
}

/// Commands representing side effects to be executed by the plugin runtime.
///
/// Produced by the event handler, executed by the runtime shim in `main.rs`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Ends the session: deliver the resolution to the caller (write-back on
    /// pick/default, nothing on cancel) and close the pane.
    Resolve(Resolution),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chosen_value_follows_resolution_kind() {
        assert_eq!(Resolution::Picked("star".into()).chosen(), Some("star"));
        assert_eq!(
            Resolution::DefaultAccepted("trash".into()).chosen(),
            Some("trash")
        );
        assert_eq!(Resolution::Cancelled.chosen(), None);
    }
}
