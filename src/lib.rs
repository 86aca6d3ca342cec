// Only allow lints that are either transitive-dependency noise or
// genuinely opinionated style choices that don't indicate real issues.
#![allow(
    // Transitive dependency version mismatches we can't control
    clippy::multiple_crate_versions,
    // module_name_repetitions is pure style preference
    clippy::module_name_repetitions
)]

//! # Markdown Air
//!
//! A minimal terminal markdown editor with live preview.
//!
//! mdair edits one markdown document at a time with:
//! - A plain-text editing pane backed by a rope
//! - A live-rendered preview pane (toggle with Ctrl+P)
//! - Native open/save dialogs
//! - An unsaved-changes guard on open and close
//!
//! ## Architecture
//!
//! mdair uses The Elm Architecture (TEA) pattern:
//! - **Model**: Application state
//! - **Message**: Events and actions
//! - **Update**: Pure state transitions
//! - **View**: Render to terminal
//!
//! ## Modules
//!
//! - [`app`]: Main application loop and state
//! - [`document`]: Document record and dirty tracking
//! - [`editor`]: Rope-backed text buffer
//! - [`preview`]: Markdown rendering for the preview pane
//! - [`shell`]: Host dialogs, disk I/O, and window pinning
//! - [`prefs`]: Persisted preferences
//! - [`ui`]: Terminal UI components

pub mod app;
pub mod document;
pub mod editor;
pub mod prefs;
pub mod preview;
pub mod shell;
pub mod ui;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::app::{App, Message, Model};
    pub use crate::document::DocumentState;
    pub use crate::editor::EditorBuffer;
    pub use crate::preview::Preview;
}
