use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

use crate::app::Model;

pub fn render_status_bar(model: &Model, frame: &mut Frame, area: Rect) {
    let unsaved = if model.state.is_dirty() {
        " (unsaved)"
    } else {
        ""
    };

    let cursor = model.buffer.cursor();
    let line_text = model.buffer.line_at(cursor.line).unwrap_or_default();
    let col = line_text
        .get(..cursor.col.min(line_text.len()))
        .map_or(cursor.col, |prefix| prefix.chars().count());

    let pin_indicator = if model.state.always_on_top {
        " [pinned]"
    } else {
        ""
    };
    let preview_indicator = if model.state.preview_on {
        " [preview]"
    } else {
        ""
    };

    let status = format!(
        " {}{}  Ln {}, Col {}{}{}",
        model.state.display_path(),
        unsaved,
        cursor.line + 1,
        col + 1,
        pin_indicator,
        preview_indicator,
    );

    let status_bar =
        Paragraph::new(status).style(Style::default().bg(Color::DarkGray).fg(Color::White));

    frame.render_widget(status_bar, area);
}

pub fn render_toast_bar(model: &Model, frame: &mut Frame, area: Rect) {
    let Some((message, level)) = model.active_toast() else {
        return;
    };
    let (prefix, style) = match level {
        crate::app::ToastLevel::Info => (
            "[info]",
            Style::default().bg(Color::DarkGray).fg(Color::White),
        ),
        crate::app::ToastLevel::Warning => (
            "[warn]",
            Style::default().bg(Color::Yellow).fg(Color::Black),
        ),
        crate::app::ToastLevel::Error => {
            ("[error]", Style::default().bg(Color::Red).fg(Color::White))
        }
    };
    let toast = Paragraph::new(format!("{prefix} {message}")).style(style);
    frame.render_widget(toast, area);
}
