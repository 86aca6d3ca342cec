use super::*;
use crate::app::{Message, Model, PendingAction, ToastLevel, update};
use crate::document::DocumentState;
use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use std::path::PathBuf;

fn test_model() -> Model {
    Model::new(DocumentState::new(false), (80, 24))
}

fn render_to_buffer(model: &Model) -> Buffer {
    let backend = TestBackend::new(80, 24);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal.draw(|frame| render(model, frame)).unwrap();
    terminal.backend().buffer().clone()
}

fn buffer_text(buffer: &Buffer) -> String {
    buffer.content().iter().map(|c| c.symbol()).collect()
}

#[test]
fn test_status_bar_shows_untitled_for_new_document() {
    let model = test_model();
    let content = buffer_text(&render_to_buffer(&model));
    assert!(content.contains("Untitled.md"));
    assert!(!content.contains("(unsaved)"));
}

#[test]
fn test_status_bar_marks_unsaved_changes() {
    let model = update(test_model(), Message::InsertChar('a'));
    let content = buffer_text(&render_to_buffer(&model));
    assert!(content.contains("Untitled.md (unsaved)"));
}

#[test]
fn test_status_bar_shows_full_path_and_cursor() {
    let mut model = test_model();
    model.adopt_opened_file(PathBuf::from("/home/me/todo.md"), "alpha".to_string());
    let model = update(model, Message::MoveEnd);
    let content = buffer_text(&render_to_buffer(&model));
    assert!(content.contains("/home/me/todo.md"));
    assert!(content.contains("Ln 1, Col 6"));
}

#[test]
fn test_status_bar_shows_pin_and_preview_indicators() {
    let mut model = test_model();
    model.state.always_on_top = true;
    model.state.preview_on = true;
    model.refresh_preview();
    let content = buffer_text(&render_to_buffer(&model));
    assert!(content.contains("[pinned]"));
    assert!(content.contains("[preview]"));
}

#[test]
fn test_editor_pane_shows_text_and_line_numbers() {
    let model = update(test_model(), Message::InsertText("hello\nworld".to_string()));
    let buffer = render_to_buffer(&model);
    let content = buffer_text(&buffer);
    assert!(content.contains("hello"));
    assert!(content.contains("world"));
    // Gutter renders 1-based line numbers
    assert!(content.contains("1 hello"));
    assert!(content.contains("2 world"));
}

#[test]
fn test_preview_pane_hidden_by_default() {
    let model = update(test_model(), Message::InsertText("# Big Title".to_string()));
    let content = buffer_text(&render_to_buffer(&model));
    // Editor shows the raw source; no second copy from a preview pane.
    assert_eq!(content.matches("Big Title").count(), 1);
}

#[test]
fn test_preview_pane_renders_beside_editor() {
    let model = update(test_model(), Message::InsertText("# Big Title".to_string()));
    let model = update(model, Message::TogglePreview);
    let content = buffer_text(&render_to_buffer(&model));
    // Raw source on the left, rendered heading on the right.
    assert_eq!(content.matches("Big Title").count(), 2);
}

#[test]
fn test_dialog_overlay_lists_choices() {
    let mut model = update(test_model(), Message::InsertChar('x'));
    model.dialog = Some(PendingAction::Close);
    let content = buffer_text(&render_to_buffer(&model));
    assert!(content.contains("Unsaved Changes"));
    assert!(content.contains("unsaved changes"));
    assert!(content.contains("Save"));
    assert!(content.contains("Discard"));
    assert!(content.contains("Cancel"));
}

#[test]
fn test_dialog_overlay_names_the_pending_action() {
    let mut model = update(test_model(), Message::InsertChar('x'));
    model.dialog = Some(PendingAction::Open);
    let content = buffer_text(&render_to_buffer(&model));
    assert!(content.contains("opening another file"));
}

#[test]
fn test_alert_overlay_shows_message() {
    let mut model = test_model();
    model.alert = Some("disk full".to_string());
    let content = buffer_text(&render_to_buffer(&model));
    assert!(content.contains("Error"));
    assert!(content.contains("disk full"));
    assert!(content.contains("press any key"));
}

#[test]
fn test_toast_bar_renders_above_status() {
    let mut model = test_model();
    model.show_toast(ToastLevel::Info, "Saved notes.md");
    let content = buffer_text(&render_to_buffer(&model));
    assert!(content.contains("[info] Saved notes.md"));
}

#[test]
fn test_render_is_deterministic() {
    let model = update(
        test_model(),
        Message::InsertText("# Title\n\nbody *em* text".to_string()),
    );
    let model = update(model, Message::TogglePreview);
    let first = render_to_buffer(&model);
    let second = render_to_buffer(&model);
    assert_eq!(first, second);
}

#[test]
fn test_split_main_columns_halves_width() {
    let area = ratatui::layout::Rect::new(0, 0, 80, 24);
    let chunks = split_main_columns(area);
    assert_eq!(chunks.len(), 2);
    assert_eq!(chunks[0].width + chunks[1].width, 80);
    assert!(chunks[0].width.abs_diff(chunks[1].width) <= 1);
}
