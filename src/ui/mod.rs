//! Terminal UI components.
//!
//! This module contains all UI-related code including:
//! - [`render`]: Frame layout and the editor/preview panes
//! - [`style`]: Theming and colors
//! - overlays: the unsaved-changes dialog and the modal alert

pub mod style;

mod overlays;
mod render;
mod status;

pub use render::{render, split_main_columns};

pub const EDITOR_WIDTH_PERCENT: u16 = 50;
pub const PREVIEW_WIDTH_PERCENT: u16 = 50;

#[cfg(test)]
mod tests;
