//! Host shell: file dialogs, disk I/O, and window pinning.
//!
//! Everything that leaves the process goes through [`HostShell`], so the
//! application logic can be driven in tests with a scripted stand-in. The
//! production implementation is [`DesktopShell`], which opens native dialogs
//! via `rfd` and reads/writes files directly.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Default file name offered by the save-as dialog for unsaved documents.
const UNTITLED_FILE_NAME: &str = "untitled.md";

/// A file picked by the open dialog, with its content already loaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpenedFile {
    pub path: PathBuf,
    pub content: String,
}

/// Failures surfaced by the host shell.
#[derive(Debug, Error)]
pub enum ShellError {
    #[error("Failed to read file {path}: {source}")]
    ReadFile {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to write file {path}: {source}")]
    WriteFile {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to update window state: {0}")]
    WindowState(String),
    #[error("{0}")]
    Backend(String),
}

/// Operations the application asks of the surrounding desktop environment.
///
/// All dialog calls block until the user answers; `Ok(None)` from the pickers
/// means the user cancelled, which is never an error.
pub trait HostShell {
    /// Show an open dialog and load the chosen file.
    fn open_file(&self) -> Result<Option<OpenedFile>, ShellError>;

    /// Write `content` to an already-known `path`.
    fn save_file(&self, path: &Path, content: &str) -> Result<(), ShellError>;

    /// Show a save dialog seeded from `suggested`, then write `content` to
    /// the chosen path. Returns the final path on success.
    fn save_file_as(
        &self,
        content: &str,
        suggested: Option<&Path>,
    ) -> Result<Option<PathBuf>, ShellError>;

    /// Pin or unpin the window above others.
    fn set_always_on_top(&self, enabled: bool) -> Result<(), ShellError>;
}

/// Native implementation backed by `rfd` dialogs and `std::fs`.
#[derive(Debug, Default)]
pub struct DesktopShell;

impl HostShell for DesktopShell {
    fn open_file(&self) -> Result<Option<OpenedFile>, ShellError> {
        let picked = rfd::FileDialog::new()
            .add_filter("Markdown", &["md", "markdown"])
            .pick_file();

        let Some(path) = picked else {
            return Ok(None);
        };

        let content = fs::read_to_string(&path).map_err(|source| ShellError::ReadFile {
            path: path.clone(),
            source,
        })?;
        Ok(Some(OpenedFile { path, content }))
    }

    fn save_file(&self, path: &Path, content: &str) -> Result<(), ShellError> {
        fs::write(path, content).map_err(|source| ShellError::WriteFile {
            path: path.to_path_buf(),
            source,
        })
    }

    fn save_file_as(
        &self,
        content: &str,
        suggested: Option<&Path>,
    ) -> Result<Option<PathBuf>, ShellError> {
        let mut dialog = rfd::FileDialog::new().add_filter("Markdown", &["md"]);
        dialog = match suggested {
            Some(path) => seed_dialog_path(dialog, path),
            None => dialog.set_file_name(UNTITLED_FILE_NAME),
        };

        let Some(raw_path) = dialog.save_file() else {
            return Ok(None);
        };

        let final_path = enforce_md_extension(raw_path);
        fs::write(&final_path, content).map_err(|source| ShellError::WriteFile {
            path: final_path.clone(),
            source,
        })?;
        Ok(Some(final_path))
    }

    fn set_always_on_top(&self, _enabled: bool) -> Result<(), ShellError> {
        // Terminal emulators own their stacking order; there is no portable
        // way to pin the window from inside the process.
        Err(ShellError::WindowState(
            "window pinning is not available in this environment".to_string(),
        ))
    }
}

/// Point a save dialog at the directory and file name of `path`.
fn seed_dialog_path(dialog: rfd::FileDialog, path: &Path) -> rfd::FileDialog {
    let dialog = match path.parent() {
        Some(parent) => dialog.set_directory(parent),
        None => dialog,
    };
    match path.file_name() {
        Some(file_name) => dialog.set_file_name(file_name.to_string_lossy().as_ref()),
        None => dialog,
    }
}

/// Ensure a user-chosen save path ends in `.md` (case-insensitive).
fn enforce_md_extension(mut path: PathBuf) -> PathBuf {
    let has_md_extension = path
        .extension()
        .and_then(|value| value.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("md"));

    if !has_md_extension {
        path.set_extension("md");
    }
    path
}

#[cfg(test)]
pub mod mock {
    //! Scripted shell for driving the application in tests.

    use std::cell::{Cell, RefCell};
    use std::path::{Path, PathBuf};

    use super::{HostShell, OpenedFile, ShellError};

    /// Test double whose responses are set up front and whose calls are
    /// recorded for later assertions.
    #[derive(Debug)]
    pub struct MockShell {
        open_response: RefCell<Result<Option<OpenedFile>, String>>,
        save_response: RefCell<Result<(), String>>,
        save_as_response: RefCell<Result<Option<PathBuf>, String>>,
        pin_response: RefCell<Result<(), String>>,
        pub open_calls: Cell<usize>,
        pub save_as_calls: Cell<usize>,
        /// `(path, content)` of every `save_file` call, in order.
        pub saved: RefCell<Vec<(PathBuf, String)>>,
        /// `enabled` argument of every `set_always_on_top` call, in order.
        pub pin_calls: RefCell<Vec<bool>>,
    }

    impl MockShell {
        pub fn new() -> Self {
            Self {
                open_response: RefCell::new(Ok(None)),
                save_response: RefCell::new(Ok(())),
                save_as_response: RefCell::new(Ok(None)),
                pin_response: RefCell::new(Ok(())),
                open_calls: Cell::new(0),
                save_as_calls: Cell::new(0),
                saved: RefCell::new(Vec::new()),
                pin_calls: RefCell::new(Vec::new()),
            }
        }

        pub fn with_open_file(self, path: &str, content: &str) -> Self {
            *self.open_response.borrow_mut() = Ok(Some(OpenedFile {
                path: PathBuf::from(path),
                content: content.to_string(),
            }));
            self
        }

        pub fn with_open_error(self, message: &str) -> Self {
            *self.open_response.borrow_mut() = Err(message.to_string());
            self
        }

        pub fn with_save_error(self, message: &str) -> Self {
            *self.save_response.borrow_mut() = Err(message.to_string());
            self
        }

        pub fn with_save_as_path(self, path: &str) -> Self {
            *self.save_as_response.borrow_mut() = Ok(Some(PathBuf::from(path)));
            self
        }

        pub fn with_save_as_error(self, message: &str) -> Self {
            *self.save_as_response.borrow_mut() = Err(message.to_string());
            self
        }

        pub fn with_pin_error(self, message: &str) -> Self {
            *self.pin_response.borrow_mut() = Err(message.to_string());
            self
        }
    }

    // Tests hand the app a clone and keep one to inspect recorded calls.
    impl HostShell for std::rc::Rc<MockShell> {
        fn open_file(&self) -> Result<Option<OpenedFile>, ShellError> {
            (**self).open_file()
        }

        fn save_file(&self, path: &Path, content: &str) -> Result<(), ShellError> {
            (**self).save_file(path, content)
        }

        fn save_file_as(
            &self,
            content: &str,
            suggested: Option<&Path>,
        ) -> Result<Option<PathBuf>, ShellError> {
            (**self).save_file_as(content, suggested)
        }

        fn set_always_on_top(&self, enabled: bool) -> Result<(), ShellError> {
            (**self).set_always_on_top(enabled)
        }
    }

    impl HostShell for MockShell {
        fn open_file(&self) -> Result<Option<OpenedFile>, ShellError> {
            self.open_calls.set(self.open_calls.get() + 1);
            self.open_response
                .borrow()
                .clone()
                .map_err(ShellError::Backend)
        }

        fn save_file(&self, path: &Path, content: &str) -> Result<(), ShellError> {
            let result = self
                .save_response
                .borrow()
                .clone()
                .map_err(ShellError::Backend);
            if result.is_ok() {
                self.saved
                    .borrow_mut()
                    .push((path.to_path_buf(), content.to_string()));
            }
            result
        }

        fn save_file_as(
            &self,
            _content: &str,
            _suggested: Option<&Path>,
        ) -> Result<Option<PathBuf>, ShellError> {
            self.save_as_calls.set(self.save_as_calls.get() + 1);
            self.save_as_response
                .borrow()
                .clone()
                .map_err(ShellError::Backend)
        }

        fn set_always_on_top(&self, enabled: bool) -> Result<(), ShellError> {
            self.pin_calls.borrow_mut().push(enabled);
            self.pin_response
                .borrow()
                .clone()
                .map_err(ShellError::Backend)
        }
    }
}
