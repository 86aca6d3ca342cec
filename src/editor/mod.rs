//! Rope-backed text buffer for the editor pane.
//!
//! The buffer only moves text and the cursor around; dirtiness lives in
//! [`crate::document::DocumentState`], which is synced after every edit.

mod buffer;

pub use buffer::{Cursor, Direction, EditorBuffer};
