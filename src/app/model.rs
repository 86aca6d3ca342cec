use std::path::PathBuf;
use std::time::{Duration, Instant};

use crate::document::DocumentState;
use crate::editor::EditorBuffer;
use crate::preview::{self, Preview};

/// Application name used in the window title.
pub(super) const APP_TITLE: &str = "Markdown Air";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Info,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
struct Toast {
    level: ToastLevel,
    message: String,
    expires_at: Instant,
}

/// Progress of the close handshake.
///
/// The close request, the unsaved-changes dialog, and the final teardown are
/// separate steps; this phase keeps repeated close signals from stacking
/// dialogs or tearing down twice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ClosePhase {
    /// No close in progress.
    #[default]
    Idle,
    /// The unsaved-changes dialog is up for a close request.
    ConfirmPending,
    /// Teardown committed; the event loop exits after this frame.
    Closing,
}

/// What the unsaved-changes dialog was raised for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PendingAction {
    /// User asked to open another file over a dirty document.
    Open,
    /// User asked to close the application with a dirty document.
    Close,
}

/// Answer given to the unsaved-changes dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnsavedChoice {
    /// Save first, then continue with the pending action.
    Save,
    /// Drop the unsaved changes and continue.
    Discard,
    /// Abort the pending action.
    Cancel,
}

/// The complete application state.
///
/// All state lives here - no global or scattered state.
pub struct Model {
    /// Document record: path, content, dirty flag, UI toggles
    pub state: DocumentState,
    /// The editor text buffer
    pub buffer: EditorBuffer,
    /// Rendered preview; refreshed after every edit while the pane is visible
    pub preview: Preview,
    /// First visible line of the editor pane
    pub editor_scroll_offset: usize,
    /// Unsaved-changes dialog, if raised
    pub dialog: Option<PendingAction>,
    /// Close handshake phase
    pub close_phase: ClosePhase,
    /// Modal error message; dismissed by any key
    pub alert: Option<String>,
    toast: Option<Toast>,
    /// Whether the app should quit
    pub should_quit: bool,
    /// Terminal width in columns
    pub width: u16,
    /// Terminal height in rows
    pub height: u16,
}

impl std::fmt::Debug for Model {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Model")
            .field("path", &self.state.current_path().map(PathBuf::from))
            .field("dirty", &self.state.is_dirty())
            .field("close_phase", &self.close_phase)
            .field("dialog", &self.dialog)
            .finish_non_exhaustive()
    }
}

impl Model {
    /// Create a new model for the given document state.
    pub fn new(state: DocumentState, terminal_size: (u16, u16)) -> Self {
        let buffer = EditorBuffer::from_text(state.content());
        let preview = if state.preview_on {
            preview::render(state.content())
        } else {
            Preview::default()
        };
        Self {
            state,
            buffer,
            preview,
            editor_scroll_offset: 0,
            dialog: None,
            close_phase: ClosePhase::Idle,
            alert: None,
            toast: None,
            should_quit: false,
            width: terminal_size.0,
            height: terminal_size.1,
        }
    }

    /// Pull the buffer text into the document record and refresh the preview.
    ///
    /// Called after every buffer edit; this is the only place editor text
    /// flows into [`DocumentState`].
    pub fn sync_document(&mut self) {
        self.state.set_editor_content(self.buffer.text());
        if self.state.preview_on {
            self.refresh_preview();
        }
    }

    /// Re-render the preview from the current document content.
    pub fn refresh_preview(&mut self) {
        self.preview = preview::render(self.state.content());
    }

    /// Replace the whole document with a freshly opened file.
    pub fn adopt_opened_file(&mut self, path: PathBuf, content: String) {
        self.buffer = EditorBuffer::from_text(&content);
        self.state.set_opened_file(path, content);
        self.editor_scroll_offset = 0;
        if self.state.preview_on {
            self.refresh_preview();
        }
    }

    /// Title for the terminal window: `* name - Markdown Air` when dirty.
    pub fn window_title(&self) -> String {
        let marker = if self.state.is_dirty() { "* " } else { "" };
        format!("{}{} - {}", marker, self.state.file_name(), APP_TITLE)
    }

    /// Rows available to the editor pane (everything above the status bar).
    pub fn editor_visible_height(&self) -> usize {
        let toast_rows = u16::from(self.toast.is_some());
        usize::from(self.height.saturating_sub(1 + toast_rows))
    }

    /// Scroll the editor pane so the cursor line is on screen.
    pub fn ensure_cursor_visible(&mut self) {
        let cursor_line = self.buffer.cursor().line;
        let visible_height = self.editor_visible_height();
        if visible_height == 0 {
            self.editor_scroll_offset = cursor_line;
            return;
        }

        if cursor_line < self.editor_scroll_offset {
            self.editor_scroll_offset = cursor_line;
        } else if cursor_line >= self.editor_scroll_offset + visible_height {
            self.editor_scroll_offset = cursor_line + 1 - visible_height;
        }
    }

    pub(crate) fn show_toast(&mut self, level: ToastLevel, message: impl Into<String>) {
        self.toast = Some(Toast {
            level,
            message: message.into(),
            expires_at: Instant::now() + Duration::from_secs(4),
        });
    }

    pub(super) fn expire_toast(&mut self, now: Instant) -> bool {
        if self
            .toast
            .as_ref()
            .is_some_and(|toast| toast.expires_at <= now)
        {
            self.toast = None;
            return true;
        }
        false
    }

    pub fn active_toast(&self) -> Option<(&str, ToastLevel)> {
        self.toast
            .as_ref()
            .map(|toast| (toast.message.as_str(), toast.level))
    }
}

// Implement Default for Model to allow std::mem::take
impl Default for Model {
    fn default() -> Self {
        Self::new(DocumentState::default(), (80, 24))
    }
}
