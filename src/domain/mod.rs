//! Domain layer for the Glyphpick plugin.
//!
//! This module contains the core domain types for the picker, independent of
//! Zellij-specific APIs or rendering concerns. Business rules (what a symbol
//! catalogue is, what can go wrong) live here; everything else depends on it.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`symbol`]: Symbol catalogue domain model
//!
//! # Examples
//!
//! ```
//! use glyphpick::domain::SymbolGroup;
//!
//! let group = SymbolGroup::new("Custom", vec!["trash".to_string(), "folder".to_string()]);
//! assert_eq!(group.symbols.len(), 2);
//! ```

pub mod error;
pub mod symbol;

pub use error::{GlyphpickError, Result};
pub use symbol::SymbolGroup;
