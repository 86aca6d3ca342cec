use std::path::PathBuf;

use crate::app::model::{ClosePhase, PendingAction, UnsavedChoice};
use crate::app::{App, Message, Model, ToastLevel};
use crate::prefs::ALWAYS_ON_TOP_KEY;

/// Result of a save attempt, for deciding whether a pending action proceeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SaveOutcome {
    Saved,
    Cancelled,
    Failed,
}

impl App {
    /// Run the host-shell side of a message after the pure update pass.
    pub(super) fn handle_message_side_effects(&mut self, model: &mut Model, msg: &Message) {
        match msg {
            Message::OpenFile => self.open_document(model),
            Message::Save => {
                let _ = self.save_document(model);
            }
            Message::SaveAs => {
                let _ = self.save_document_as(model);
            }
            Message::TogglePin => {
                let target = !model.state.always_on_top;
                self.apply_pin(model, target);
            }
            Message::DialogChoice(choice) => self.resolve_dialog(model, *choice),
            _ => {}
        }
    }

    /// Read the persisted always-on-top preference and apply it to the
    /// window. Failures at startup are logged, not surfaced; the preference
    /// itself is kept so the toggle reflects the user's last choice.
    pub(super) fn apply_startup_pin(&mut self, model: &mut Model) {
        let stored = self
            .prefs
            .get(ALWAYS_ON_TOP_KEY)
            .is_some_and(|value| value == "true");
        model.state.always_on_top = stored;
        if stored {
            if let Err(err) = self.shell.set_always_on_top(true) {
                tracing::warn!("always-on-top unavailable at startup: {err}");
            }
        }
    }

    /// Open a file via the host dialog. A dirty document raises the
    /// unsaved-changes dialog first; the open continues once it resolves.
    fn open_document(&mut self, model: &mut Model) {
        if model.dialog.is_some() || model.alert.is_some() {
            return;
        }
        if model.state.is_dirty() {
            model.dialog = Some(PendingAction::Open);
            return;
        }
        self.run_open_dialog(model);
    }

    fn run_open_dialog(&mut self, model: &mut Model) {
        match self.shell.open_file() {
            Ok(Some(opened)) => {
                let name = opened
                    .path
                    .file_name()
                    .map_or_else(String::new, |n| n.to_string_lossy().into_owned());
                model.adopt_opened_file(opened.path, opened.content);
                model.show_toast(ToastLevel::Info, format!("Opened {name}"));
            }
            // User cancelled the picker; nothing changes.
            Ok(None) => {}
            Err(err) => {
                model.alert = Some(err.to_string());
            }
        }
    }

    /// Save to the current path, falling through to save-as for a document
    /// that has never been saved.
    fn save_document(&mut self, model: &mut Model) -> SaveOutcome {
        let Some(path) = model.state.current_path().map(PathBuf::from) else {
            return self.save_document_as(model);
        };
        match self.shell.save_file(&path, model.state.content()) {
            Ok(()) => {
                model.state.mark_saved();
                model.show_toast(ToastLevel::Info, format!("Saved {}", model.state.file_name()));
                SaveOutcome::Saved
            }
            Err(err) => {
                model.alert = Some(err.to_string());
                SaveOutcome::Failed
            }
        }
    }

    /// Save under a new path picked by the host dialog, seeded from the
    /// current path when there is one.
    fn save_document_as(&mut self, model: &mut Model) -> SaveOutcome {
        let suggested = model.state.current_path().map(PathBuf::from);
        match self
            .shell
            .save_file_as(model.state.content(), suggested.as_deref())
        {
            Ok(Some(path)) => {
                model.state.set_saved_as(path);
                model.show_toast(ToastLevel::Info, format!("Saved {}", model.state.file_name()));
                SaveOutcome::Saved
            }
            Ok(None) => SaveOutcome::Cancelled,
            Err(err) => {
                model.alert = Some(err.to_string());
                SaveOutcome::Failed
            }
        }
    }

    /// Resolve the unsaved-changes dialog with the user's choice.
    fn resolve_dialog(&mut self, model: &mut Model, choice: UnsavedChoice) {
        let Some(action) = model.dialog else {
            return;
        };
        match choice {
            UnsavedChoice::Cancel => {
                model.dialog = None;
                self.abort_pending(model, action);
            }
            UnsavedChoice::Discard => {
                model.dialog = None;
                self.proceed_pending(model, action);
            }
            UnsavedChoice::Save => {
                match self.save_document(model) {
                    SaveOutcome::Saved => {
                        model.dialog = None;
                        self.proceed_pending(model, action);
                    }
                    // Backing out of the save dialog backs out of the whole
                    // action; a failed save leaves the alert up instead.
                    SaveOutcome::Cancelled | SaveOutcome::Failed => {
                        model.dialog = None;
                        self.abort_pending(model, action);
                    }
                }
            }
        }
    }

    fn proceed_pending(&mut self, model: &mut Model, action: PendingAction) {
        match action {
            PendingAction::Close => {
                model.close_phase = ClosePhase::Closing;
                model.should_quit = true;
            }
            PendingAction::Open => self.run_open_dialog(model),
        }
    }

    fn abort_pending(&mut self, model: &mut Model, action: PendingAction) {
        let _ = self;
        if action == PendingAction::Close {
            model.close_phase = ClosePhase::Idle;
        }
    }

    /// Ask the host to pin or unpin the window. State and the persisted
    /// preference only move on success; a refused pin leaves the toggle
    /// where it was and reports why.
    fn apply_pin(&mut self, model: &mut Model, enabled: bool) {
        match self.shell.set_always_on_top(enabled) {
            Ok(()) => {
                model.state.always_on_top = enabled;
                let value = if enabled { "true" } else { "false" };
                if let Err(err) = self.prefs.set(ALWAYS_ON_TOP_KEY, value) {
                    model.show_toast(ToastLevel::Warning, format!("Preference not saved: {err}"));
                }
            }
            Err(err) => {
                model.alert = Some(err.to_string());
            }
        }
    }
}
