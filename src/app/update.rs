use crate::app::Model;
use crate::app::model::{ClosePhase, PendingAction, UnsavedChoice};
use crate::editor::Direction;

/// All possible events and actions in the application.
///
/// These represent user input, system events, and internal actions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    // Editor
    /// Insert a character at the cursor
    InsertChar(char),
    /// Insert a block of text at the cursor (bracketed paste)
    InsertText(String),
    /// Delete character before cursor (Backspace)
    DeleteBack,
    /// Delete character at cursor (Delete)
    DeleteForward,
    /// Split line at cursor (Enter)
    SplitLine,
    /// Move cursor in a direction
    MoveCursor(Direction),
    /// Move cursor to beginning of line (Home)
    MoveHome,
    /// Move cursor to end of line (End)
    MoveEnd,
    /// Move cursor one word left (Ctrl+Left)
    MoveWordLeft,
    /// Move cursor one word right (Ctrl+Right)
    MoveWordRight,
    /// Move cursor to start of buffer (Ctrl+Home)
    MoveToStart,
    /// Move cursor to end of buffer (Ctrl+End)
    MoveToEnd,
    /// Scroll editor viewport up by n lines
    ScrollUp(usize),
    /// Scroll editor viewport down by n lines
    ScrollDown(usize),

    // View
    /// Toggle preview pane visibility
    TogglePreview,

    // File and window (resolved in `handle_message_side_effects`)
    /// Open a file via the host dialog
    OpenFile,
    /// Save to the current path, or fall through to save-as
    Save,
    /// Save under a new path via the host dialog
    SaveAs,
    /// Toggle the always-on-top window pin
    TogglePin,
    /// Answer the unsaved-changes dialog
    DialogChoice(UnsavedChoice),

    // Application
    /// Host asked us to close (Ctrl+Q / Ctrl+W)
    CloseRequested,
    /// Dismiss the modal alert
    DismissAlert,
    /// Terminal resized
    Resize(u16, u16),
}

/// Pure function that updates the model based on a message.
///
/// This is the core of TEA - all state transitions happen here.
/// Messages that need the host shell are no-ops here and are handled in
/// `App::handle_message_side_effects` after the update pass.
pub fn update(mut model: Model, msg: Message) -> Model {
    match msg {
        // Editor
        Message::InsertChar(ch) => {
            model.buffer.insert_char(ch);
            model.sync_document();
            model.ensure_cursor_visible();
        }
        Message::InsertText(text) => {
            model.buffer.insert_str(&text);
            model.sync_document();
            model.ensure_cursor_visible();
        }
        Message::DeleteBack => {
            if model.buffer.delete_back() {
                model.sync_document();
            }
            model.ensure_cursor_visible();
        }
        Message::DeleteForward => {
            if model.buffer.delete_forward() {
                model.sync_document();
            }
        }
        Message::SplitLine => {
            model.buffer.split_line();
            model.sync_document();
            model.ensure_cursor_visible();
        }
        Message::MoveCursor(dir) => {
            model.buffer.move_cursor(dir);
            model.ensure_cursor_visible();
        }
        Message::MoveHome => {
            model.buffer.move_home();
            model.ensure_cursor_visible();
        }
        Message::MoveEnd => {
            model.buffer.move_end();
            model.ensure_cursor_visible();
        }
        Message::MoveWordLeft => {
            model.buffer.move_word_left();
            model.ensure_cursor_visible();
        }
        Message::MoveWordRight => {
            model.buffer.move_word_right();
            model.ensure_cursor_visible();
        }
        Message::MoveToStart => {
            model.buffer.move_to_start();
            model.ensure_cursor_visible();
        }
        Message::MoveToEnd => {
            model.buffer.move_to_end();
            model.ensure_cursor_visible();
        }
        Message::ScrollUp(n) => {
            model.editor_scroll_offset = model.editor_scroll_offset.saturating_sub(n);
        }
        Message::ScrollDown(n) => {
            let max = model.buffer.line_count().saturating_sub(1);
            model.editor_scroll_offset = (model.editor_scroll_offset + n).min(max);
        }

        // View
        Message::TogglePreview => {
            model.state.preview_on = !model.state.preview_on;
            if model.state.preview_on {
                model.refresh_preview();
            }
        }

        // Application
        Message::CloseRequested => {
            // A second close signal while confirming or tearing down is
            // dropped; teardown happens at most once.
            if model.close_phase == ClosePhase::Idle {
                if model.state.is_dirty() {
                    model.close_phase = ClosePhase::ConfirmPending;
                    model.dialog = Some(PendingAction::Close);
                } else {
                    model.close_phase = ClosePhase::Closing;
                    model.should_quit = true;
                }
            }
        }
        Message::DismissAlert => {
            model.alert = None;
        }
        Message::Resize(width, height) => {
            model.width = width;
            model.height = height;
            model.ensure_cursor_visible();
        }

        // Shell-backed messages; resolved in effects.
        Message::OpenFile
        | Message::Save
        | Message::SaveAs
        | Message::TogglePin
        | Message::DialogChoice(_) => {}
    }
    model
}
