//! Application state and main event loop.
//!
//! This module implements The Elm Architecture (TEA):
//! - [`Model`]: The complete application state
//! - [`Message`]: All possible events and actions
//! - [`update`]: Pure function for state transitions
//! - [`App::run`]: Main event loop with rendering
//!
//! Anything that touches the world outside the terminal (file dialogs, disk
//! writes, window pinning, preference storage) happens in
//! `App::handle_message_side_effects`, driven by the same messages.

mod effects;
mod event_loop;
mod input;
mod model;
mod update;

pub use model::{ClosePhase, Model, PendingAction, ToastLevel, UnsavedChoice};
pub use update::{Message, update};

use std::path::PathBuf;

use crate::prefs::PreferenceStore;
use crate::shell::HostShell;

/// Main application struct that owns the host ports and runs the event loop.
pub struct App {
    shell: Box<dyn HostShell>,
    prefs: Box<dyn PreferenceStore>,
    initial_file: Option<PathBuf>,
    start_with_preview: bool,
}

impl App {
    /// Create a new application over the given host shell and preferences.
    pub fn new(shell: Box<dyn HostShell>, prefs: Box<dyn PreferenceStore>) -> Self {
        Self {
            shell,
            prefs,
            initial_file: None,
            start_with_preview: false,
        }
    }

    /// Load a file at startup instead of beginning with an empty document.
    #[must_use]
    pub fn with_file(mut self, path: Option<PathBuf>) -> Self {
        self.initial_file = path;
        self
    }

    /// Start with the preview pane visible.
    #[must_use]
    pub const fn with_preview(mut self, visible: bool) -> Self {
        self.start_with_preview = visible;
        self
    }
}
