//! Zellij plugin wrapper and entry point.
//!
//! Thin integration layer between the glyphpick library and the Zellij plugin
//! system. It implements the `ZellijPlugin` trait, translates raw key presses
//! into semantic library events, and owns the CLI pipe session that carries
//! the caller's selection.
//!
//! # Pipe Protocol
//!
//! The picker is driven over a named Zellij CLI pipe (`glyphpick`):
//!
//! ```text
//! zellij pipe --name glyphpick -- "folder"
//! ```
//!
//! 1. The pipe opens with the caller's current identifier as payload; input
//!    is blocked so the caller waits.
//! 2. The user picks a tile (or accepts the default): exactly that identifier
//!    is written to the pipe's output, the pipe is unblocked, and the pane
//!    closes.
//! 3. Cancelling writes nothing before unblocking, so the caller keeps its
//!    previous value.
//!
//! # Keybindings
//!
//! Global (all modes):
//! - `Ctrl+n`: Move down one row
//! - `Ctrl+p`: Move up one row
//!
//! In normal mode:
//! - `h`/`j`/`k`/`l` or arrows: Move cursor
//! - `Enter`: Pick the tile under the cursor
//! - `d`: Accept the configured default symbol
//! - `/`: Enter search mode
//! - `Esc`/`q`: Cancel
//!
//! In search mode (typing):
//! - Printable characters: Extend the query
//! - `Backspace`: Shrink the query
//! - `Tab`: Move focus to the result grid
//! - `Enter`: Pick the tile under the cursor
//! - `Esc`: Exit search, clearing the query
//!
//! In search mode (navigating results):
//! - `h`/`j`/`k`/`l` or arrows: Move cursor
//! - `/`: Return focus to the query input
//! - `Enter`: Pick
//! - `Esc`: Exit search

#![allow(clippy::multiple_crate_versions)]

use std::collections::BTreeMap;
use zellij_tile::prelude::*;

use glyphpick::{handle_event, Action, Config, Event, InputMode, Resolution, SearchFocus};

register_plugin!(State);

/// Name of the CLI pipe the picker listens on.
const PIPE_NAME: &str = "glyphpick";

/// Plugin state wrapper.
///
/// Wraps the library's `AppState` with Zellij-specific concerns: the blocked
/// reply pipe and the pending custom catalogue load.
struct State {
    /// Core application state from the library layer.
    app: glyphpick::AppState,

    /// CLI pipe id to reply on when the session resolves.
    reply_pipe: Option<String>,

    /// Custom symbol file to load once filesystem permission is granted.
    symbol_file: Option<String>,

    /// Display name for the custom catalogue.
    group_name: String,
}

impl Default for State {
    fn default() -> Self {
        let default_config = Config::default();
        Self {
            app: glyphpick::initialize(&default_config),
            reply_pipe: None,
            symbol_file: None,
            group_name: default_config.resolved_group_name(),
        }
    }
}

impl ZellijPlugin for State {
    /// Initializes the plugin on load.
    ///
    /// Parses configuration, initializes tracing, builds the session state,
    /// and subscribes to events. `FullHdAccess` is only requested when a
    /// custom symbol file is configured; the bundled catalogue needs no
    /// permissions at all.
    fn load(&mut self, configuration: BTreeMap<String, String>) {
        let config = Config::from_zellij(&configuration);
        glyphpick::observability::init_tracing(&config);

        let span = tracing::debug_span!("plugin_load");
        let _guard = span.entered();

        tracing::debug!(symbol_file = ?config.symbol_file, "parsed configuration");
        self.app = glyphpick::initialize(&config);
        self.symbol_file.clone_from(&config.symbol_file);
        self.group_name = config.resolved_group_name();

        if self.symbol_file.is_some() {
            tracing::debug!("requesting filesystem permission for custom catalogue");
            request_permission(&[PermissionType::FullHdAccess]);
        }

        subscribe(&[EventType::Key, EventType::PermissionRequestResult]);

        tracing::debug!("plugin load complete");
    }

    /// Handles incoming Zellij events.
    ///
    /// Translates key presses into library events, delegates to
    /// `handle_event`, and executes resulting actions. Returns `true` if the
    /// UI should re-render.
    fn update(&mut self, event: zellij_tile::prelude::Event) -> bool {
        let event_name = Self::get_event_name(&event);
        let span = tracing::debug_span!("plugin_update_event", event_type = %event_name);
        let _guard = span.entered();

        let our_event = match event {
            zellij_tile::prelude::Event::Key(ref key) => match self.map_key_event(key) {
                Some(event) => event,
                None => return false,
            },
            zellij_tile::prelude::Event::PermissionRequestResult(status) => {
                return self.handle_permission_result(status);
            }
            _ => return false,
        };

        match handle_event(&mut self.app, our_event) {
            Ok((should_render, actions)) => {
                for action in actions {
                    self.execute_action(&action);
                }
                should_render
            }
            Err(e) => {
                tracing::debug!(error = %e, "error handling event");
                false
            }
        }
    }

    /// Handles pipe messages addressed to the picker.
    ///
    /// A CLI pipe named `glyphpick` opens a session: its input is blocked so
    /// the caller waits for the reply, its id is stored for the eventual
    /// write-back, and a payload (the caller's current identifier) refreshes
    /// tile highlighting.
    fn pipe(&mut self, pipe_message: PipeMessage) -> bool {
        if pipe_message.name != PIPE_NAME {
            tracing::debug!(name = %pipe_message.name, "ignoring unrelated pipe message");
            return false;
        }

        if let PipeSource::Cli(pipe_id) = &pipe_message.source {
            tracing::debug!(pipe_id = %pipe_id, "picker session opened over cli pipe");
            block_cli_pipe_input(pipe_id);
            if let Some(stale) = self.begin_pipe_session(pipe_id) {
                // A new caller supersedes the pending session; the previous
                // caller gets a cancel-style empty reply instead of hanging.
                tracing::warn!(pipe_id = %stale, "superseded by a new caller, releasing previous pipe");
                unblock_cli_pipe_input(&stale);
            }
        }

        if let Some(payload) = pipe_message.payload {
            let symbol = payload.trim().to_string();
            match handle_event(&mut self.app, Event::SetCurrentSymbol(symbol)) {
                Ok((should_render, _)) => return should_render,
                Err(e) => {
                    tracing::debug!(error = %e, "error handling pipe payload");
                    return false;
                }
            }
        }

        true
    }

    /// Renders the picker UI.
    ///
    /// Records the grid shape for row-wise cursor movement, then delegates to
    /// the library's rendering layer.
    fn render(&mut self, rows: usize, cols: usize) {
        self.app.update_grid(cols);
        glyphpick::ui::render(&self.app, rows, cols);
    }
}

impl State {
    /// Records the pipe id the session will reply on.
    ///
    /// Returns the previously stored id when a different pipe supersedes a
    /// pending session, so the caller can unblock it. A repeated message from
    /// the same pipe keeps the session as is and returns `None`.
    fn begin_pipe_session(&mut self, pipe_id: &str) -> Option<String> {
        if self.reply_pipe.as_deref() == Some(pipe_id) {
            return None;
        }
        self.reply_pipe.replace(pipe_id.to_string())
    }

    /// Gets a string name for a Zellij event for tracing.
    fn get_event_name(event: &zellij_tile::prelude::Event) -> String {
        match event {
            zellij_tile::prelude::Event::Key(key) => format!("Key({:?})", key.bare_key),
            zellij_tile::prelude::Event::PermissionRequestResult(..) => {
                "PermissionRequestResult".to_string()
            }
            _ => "Other".to_string(),
        }
    }

    /// Maps keyboard events to application events based on the input mode.
    fn map_key_event(&self, key: &KeyWithModifier) -> Option<Event> {
        tracing::debug!(bare_key = ?key.bare_key, "key event");

        if key.bare_key == BareKey::Char('n') && key.has_modifiers(&[KeyModifier::Ctrl]) {
            return Some(Event::CursorDown);
        }
        if key.bare_key == BareKey::Char('p') && key.has_modifiers(&[KeyModifier::Ctrl]) {
            return Some(Event::CursorUp);
        }

        let typing = self.app.input_mode == InputMode::Search(SearchFocus::Typing);

        Some(match key.bare_key {
            BareKey::Down => Event::CursorDown,
            BareKey::Up => Event::CursorUp,
            BareKey::Left => Event::CursorLeft,
            BareKey::Right => Event::CursorRight,

            BareKey::Char('j') if !typing => Event::CursorDown,
            BareKey::Char('k') if !typing => Event::CursorUp,
            BareKey::Char('h') if !typing => Event::CursorLeft,
            BareKey::Char('l') if !typing => Event::CursorRight,

            BareKey::Enter => Event::Activate,
            BareKey::Char('d') if self.app.input_mode == InputMode::Normal => {
                Event::AcceptDefault
            }
            BareKey::Char('q') if self.app.input_mode == InputMode::Normal => Event::Cancel,

            BareKey::Char('/') => match self.app.input_mode {
                InputMode::Normal => Event::SearchMode,
                InputMode::Search(_) => Event::FocusSearchBar,
            },
            BareKey::Tab if typing => Event::FocusResults,

            BareKey::Esc => match self.app.input_mode {
                InputMode::Search(_) => Event::ExitSearch,
                InputMode::Normal => Event::Cancel,
            },

            BareKey::Backspace => Event::Backspace,
            BareKey::Char(c) if typing => Event::Char(c),
            _ => return None,
        })
    }

    /// Loads the custom catalogue once filesystem permission is granted.
    fn handle_permission_result(&mut self, status: PermissionStatus) -> bool {
        match status {
            PermissionStatus::Granted => {
                let Some(path) = self.symbol_file.clone() else {
                    return false;
                };
                tracing::debug!(path = %path, "permission granted, loading symbol file");
                let group = glyphpick::catalogue::load_file(self.group_name.clone(), &path);
                match handle_event(&mut self.app, Event::CatalogueLoaded { group }) {
                    Ok((should_render, _)) => should_render,
                    Err(e) => {
                        tracing::debug!(error = %e, "error handling catalogue load");
                        false
                    }
                }
            }
            PermissionStatus::Denied => {
                tracing::warn!("filesystem permission denied, custom catalogue unavailable");
                false
            }
        }
    }

    /// Executes an action returned from event handling.
    ///
    /// `Resolve` is the only action: write the chosen identifier to the
    /// blocked pipe (nothing on cancel), unblock it, and close the pane.
    #[tracing::instrument(level = "debug", skip(self))]
    fn execute_action(&mut self, action: &Action) {
        match action {
            Action::Resolve(resolution) => {
                match self.reply_pipe.take() {
                    Some(pipe_id) => {
                        if let Some(chosen) = resolution.chosen() {
                            tracing::debug!(pipe_id = %pipe_id, symbol = %chosen, "replying with chosen symbol");
                            cli_pipe_output(&pipe_id, chosen);
                        } else {
                            tracing::debug!(pipe_id = %pipe_id, "cancelled, replying with nothing");
                        }
                        unblock_cli_pipe_input(&pipe_id);
                    }
                    None => {
                        if matches!(
                            resolution,
                            Resolution::Picked(_) | Resolution::DefaultAccepted(_)
                        ) {
                            tracing::warn!("session resolved without an open pipe, dropping reply");
                        }
                    }
                }
                close_self();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_pipe_starts_a_session_without_releasing_anything() {
        let mut state = State::default();
        assert_eq!(state.begin_pipe_session("pipe-1"), None);
        assert_eq!(state.reply_pipe.as_deref(), Some("pipe-1"));
    }

    #[test]
    fn new_pipe_supersedes_pending_session_and_yields_stale_id() {
        let mut state = State::default();
        state.begin_pipe_session("pipe-1");

        let stale = state.begin_pipe_session("pipe-2");
        assert_eq!(stale.as_deref(), Some("pipe-1"));
        assert_eq!(state.reply_pipe.as_deref(), Some("pipe-2"));
    }

    #[test]
    fn repeated_messages_from_same_pipe_keep_the_session() {
        let mut state = State::default();
        state.begin_pipe_session("pipe-1");

        assert_eq!(state.begin_pipe_session("pipe-1"), None);
        assert_eq!(state.reply_pipe.as_deref(), Some("pipe-1"));
    }
}
