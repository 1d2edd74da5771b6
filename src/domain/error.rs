//! Error types for the Glyphpick plugin.
//!
//! This module defines the centralized error type [`GlyphpickError`] and a type
//! alias [`Result`] for convenient error handling throughout the plugin. All
//! errors are implemented using the `thiserror` crate for automatic `Error`
//! trait implementation.
//!
//! Note that the one failure mode users actually hit — a missing or unreadable
//! catalogue file — is deliberately NOT surfaced as an error: the catalogue
//! degrades to an empty list instead (see [`crate::catalogue`]).

use thiserror::Error;

/// The main error type for Glyphpick plugin operations.
///
/// Covers the fallible paths the plugin actually has: theme handling and raw
/// I/O. Catalogue loading degrades softly and never reaches this type.
///
/// # Examples
///
/// ```
/// use glyphpick::domain::GlyphpickError;
///
/// fn load_theme() -> Result<(), GlyphpickError> {
///     Err(GlyphpickError::Theme("unreadable theme file".to_string()))
/// }
/// ```
#[derive(Debug, Error)]
pub enum GlyphpickError {
    /// Filesystem or I/O operation failed.
    ///
    /// Wraps errors from standard library I/O operations. Automatically
    /// converts from `std::io::Error` using the `#[from]` attribute.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Theme parsing or application failed.
    ///
    /// Occurs when the plugin cannot parse or apply the configured theme.
    #[error("Theme error: {0}")]
    Theme(String),
}

/// A specialized `Result` type for Glyphpick operations.
///
/// This is a type alias for `std::result::Result<T, GlyphpickError>` that
/// simplifies function signatures throughout the codebase.
pub type Result<T> = std::result::Result<T, GlyphpickError>;
