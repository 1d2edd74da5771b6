//! User interface rendering layer with component-based architecture.
//!
//! This module orchestrates the terminal UI, transforming view models into
//! ANSI-styled output through composable rendering components. It provides
//! theme support and a responsive tile grid whose column count tracks the
//! terminal width.
//!
//! # Architecture
//!
//! The UI layer follows a declarative rendering model:
//!
//! ```text
//! AppState → compute_viewmodel → UIViewModel → render → ANSI Output
//! ```
//!
//! # Modules
//!
//! - [`viewmodel`]: View model types representing renderable UI state
//! - [`renderer`]: Top-level rendering coordinator
//! - [`components`]: Composable UI component renderers
//! - [`layout`]: Tile sizing tables and column derivation
//! - [`helpers`]: Shared rendering utilities
//! - [`theme`]: Color schemes and ANSI escape sequence generation

pub mod components;
pub mod helpers;
pub mod layout;
pub mod renderer;
pub mod theme;
pub mod viewmodel;

pub use layout::GridLayout;
pub use renderer::render;
pub use theme::Theme;
pub use viewmodel::{
    EmptyState, FooterInfo, HeaderInfo, SearchBarInfo, TileState, TileView, UIViewModel,
};
