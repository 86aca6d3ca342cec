use ratatui::prelude::*;
use ratatui::widgets::{Clear, Paragraph};

use crate::app::Model;

use super::{EDITOR_WIDTH_PERCENT, PREVIEW_WIDTH_PERCENT, overlays, status};

pub fn split_main_columns(area: Rect) -> std::rc::Rc<[Rect]> {
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(EDITOR_WIDTH_PERCENT),
            Constraint::Percentage(PREVIEW_WIDTH_PERCENT),
        ])
        .split(area)
}

/// Render the complete UI.
pub fn render(model: &Model, frame: &mut Frame) {
    let area = frame.area();

    let toast_active = model.active_toast().is_some();
    let footer_rows = 1 + u16::from(toast_active);
    let main_area = Rect {
        height: area.height.saturating_sub(footer_rows),
        ..area
    };
    let toast_area = Rect {
        y: area.y + area.height.saturating_sub(1 + u16::from(toast_active)),
        height: 1,
        ..area
    };
    let status_area = Rect {
        y: area.y + area.height.saturating_sub(1),
        height: 1,
        ..area
    };

    if model.state.preview_on {
        let chunks = split_main_columns(main_area);
        render_editor(model, frame, chunks[0]);
        render_preview(model, frame, chunks[1]);
    } else {
        render_editor(model, frame, main_area);
    }

    if toast_active {
        status::render_toast_bar(model, frame, toast_area);
    }
    status::render_status_bar(model, frame, status_area);

    // Modal layers are painted last: dialog below alert.
    if model.dialog.is_some() {
        overlays::render_dialog_overlay(model, frame, area);
    }
    if model.alert.is_some() {
        overlays::render_alert_overlay(model, frame, area);
    }
}

fn render_editor(model: &Model, frame: &mut Frame, area: Rect) {
    let total_lines = model.buffer.line_count();
    let gutter_width = line_number_width(total_lines);

    let visible_height = area.height as usize;
    let start = model.editor_scroll_offset;
    let end = (start + visible_height).min(total_lines);
    let cursor = model.buffer.cursor();

    let mut content: Vec<Line> = Vec::new();
    for line_idx in start..end {
        let line_text = model.buffer.line_at(line_idx).unwrap_or_default();
        let line_num = format!("{:>width$} ", line_idx + 1, width = gutter_width as usize);

        let mut spans = vec![Span::styled(line_num, Style::default().fg(Color::DarkGray))];

        if line_idx == cursor.line {
            // Split line at cursor position for cursor rendering
            let col = cursor.col.min(line_text.len());
            let cursor_end = line_text[col..]
                .chars()
                .next()
                .map_or(col, |c| col + c.len_utf8());
            let before = &line_text[..col];
            let cursor_char = if col < line_text.len() {
                &line_text[col..cursor_end]
            } else {
                " "
            };
            let after = &line_text[cursor_end.min(line_text.len())..];

            if !before.is_empty() {
                spans.push(Span::raw(before.to_string()));
            }
            spans.push(Span::styled(
                cursor_char.to_string(),
                Style::default().bg(Color::White).fg(Color::Black),
            ));
            if !after.is_empty() {
                spans.push(Span::raw(after.to_string()));
            }
        } else {
            spans.push(Span::raw(line_text));
        }

        content.push(Line::from(spans));
    }

    frame.render_widget(Clear, area);
    frame.render_widget(Paragraph::new(content), area);
}

fn render_preview(model: &Model, frame: &mut Frame, area: Rect) {
    let visible_height = area.height as usize;
    let start = preview_scroll_offset(model, visible_height);
    let end = (start + visible_height).min(model.preview.line_count());

    let mut content: Vec<Line> = Vec::new();
    for line in &model.preview.lines()[start..end] {
        let line_style = super::style::style_for_line_type(line.kind());
        let styled_spans = line
            .spans()
            .iter()
            .map(|span| {
                Span::styled(
                    span.text().to_string(),
                    super::style::style_for_inline(line_style, span.style()),
                )
            })
            .collect::<Vec<_>>();
        content.push(Line::from(styled_spans));
    }

    frame.render_widget(Clear, area);
    frame.render_widget(Paragraph::new(content), area);
}

/// Preview pane scroll, tracking the editor's position proportionally.
fn preview_scroll_offset(model: &Model, visible_height: usize) -> usize {
    let editor_max = model
        .buffer
        .line_count()
        .saturating_sub(model.editor_visible_height());
    let preview_max = model.preview.line_count().saturating_sub(visible_height);
    if editor_max == 0 || preview_max == 0 {
        return 0;
    }
    (model.editor_scroll_offset.min(editor_max) * preview_max) / editor_max
}

/// Calculate the width needed for line numbers.
pub const fn line_number_width(total_lines: usize) -> u16 {
    if total_lines < 10 {
        1
    } else if total_lines < 100 {
        2
    } else if total_lines < 1_000 {
        3
    } else if total_lines < 10_000 {
        4
    } else if total_lines < 100_000 {
        5
    } else {
        6
    }
}
