//! Catalogue layer providing the symbol lists the picker browses.
//!
//! This module replaces persistence with the two catalogue sources the picker
//! supports: a bundled default list compiled into the binary, and optional
//! user-supplied text files read once at session start. There is no write
//! path — catalogues are plain immutable data for the lifetime of a session.
//!
//! # Failure policy
//!
//! Loading a catalogue file fails softly: a missing or unreadable file yields
//! a group with the requested name and an empty symbol list, logged at debug
//! level. No error reaches the caller. This is the right behavior for an
//! optional user enhancement, though it also means a corrupted install of the
//! bundled resource would go unreported; the bundled list is compiled in with
//! `include_str!` precisely so that failure mode cannot occur at runtime.
//!
//! # Modules
//!
//! - [`bundled`]: The compiled-in default catalogue
//! - [`file`]: Newline-delimited catalogue file loading

pub mod bundled;
pub mod file;

pub use bundled::default_symbols;
pub use file::load_file;
