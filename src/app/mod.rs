//! Application layer: state, events, and session resolution.
//!
//! This module owns one picker session from presentation to resolution. The
//! runtime shim translates raw key presses into semantic [`Event`]s, the
//! handler mutates [`AppState`] and emits [`Action`]s, and the UI layer
//! computes view models from state snapshots.

pub mod actions;
pub mod handler;
pub mod modes;
pub mod state;

pub use actions::{Action, Resolution};
pub use handler::{handle_event, Event};
pub use modes::{InputMode, PickerPhase, SearchFocus};
pub use state::AppState;
