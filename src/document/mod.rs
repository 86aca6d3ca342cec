//! Document state: the single record describing what the editor holds.
//!
//! [`DocumentState`] tracks the in-memory buffer, the snapshot from the last
//! successful save, and the flags the UI projects (preview visibility,
//! always-on-top). The dirty flag is derived from the content/snapshot pair
//! and is recomputed inside every mutator; the fields are private so the
//! mutators below are the only way to move the record.

use std::path::{Path, PathBuf};

/// Name shown for a document that has never been saved.
pub const UNTITLED_NAME: &str = "Untitled.md";

/// In-memory state of the current document plus UI toggles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentState {
    /// Backing file; `None` until the first successful open or save.
    current_path: Option<PathBuf>,
    /// Current text buffer.
    content: String,
    /// Snapshot of `content` at the last successful save.
    saved_content: String,
    /// Always exactly `content != saved_content`.
    dirty: bool,
    /// Whether the preview pane is visible.
    pub preview_on: bool,
    /// Mirrors the host window's pin state; persisted across sessions.
    pub always_on_top: bool,
}

impl DocumentState {
    /// Create the startup state: empty, clean, never saved.
    pub const fn new(always_on_top: bool) -> Self {
        Self {
            current_path: None,
            content: String::new(),
            saved_content: String::new(),
            dirty: false,
            preview_on: false,
            always_on_top,
        }
    }

    /// Replace the buffer with `text` and recompute dirtiness.
    pub fn set_editor_content(&mut self, text: String) {
        self.content = text;
        self.dirty = self.content != self.saved_content;
    }

    /// Adopt a freshly loaded file: path set, buffer clean.
    pub fn set_opened_file(&mut self, path: PathBuf, text: String) {
        self.current_path = Some(path);
        self.saved_content.clone_from(&text);
        self.content = text;
        self.dirty = false;
    }

    /// Record that the current buffer has been persisted.
    pub fn mark_saved(&mut self) {
        self.saved_content.clone_from(&self.content);
        self.dirty = false;
    }

    /// Adopt a path chosen by a save-as dialog, then mark saved.
    pub fn set_saved_as(&mut self, path: PathBuf) {
        self.current_path = Some(path);
        self.mark_saved();
    }

    pub fn current_path(&self) -> Option<&Path> {
        self.current_path.as_deref()
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub const fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Display name of the backing file, or [`UNTITLED_NAME`].
    pub fn file_name(&self) -> String {
        self.current_path
            .as_deref()
            .and_then(Path::file_name)
            .map_or_else(
                || UNTITLED_NAME.to_string(),
                |name| name.to_string_lossy().into_owned(),
            )
    }

    /// Full path for the status line, or [`UNTITLED_NAME`].
    pub fn display_path(&self) -> String {
        self.current_path
            .as_deref()
            .map_or_else(|| UNTITLED_NAME.to_string(), |p| p.display().to_string())
    }
}

impl Default for DocumentState {
    fn default() -> Self {
        Self::new(false)
    }
}
