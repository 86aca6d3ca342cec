use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Padding, Paragraph, Wrap};

use crate::app::{Model, PendingAction};

pub fn render_dialog_overlay(model: &Model, frame: &mut Frame, area: Rect) {
    let Some(action) = model.dialog else {
        return;
    };

    let popup_width = area.width.saturating_sub(16).clamp(40, 60);
    let popup = centered_popup_rect(popup_width, 9, area);

    let verb = match action {
        PendingAction::Open => "opening another file",
        PendingAction::Close => "closing",
    };
    let key_style = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD);

    let lines = vec![
        Line::raw(format!(
            "{} has unsaved changes.",
            model.state.file_name()
        )),
        Line::raw(format!("Save before {verb}?")),
        Line::raw(""),
        Line::from(vec![Span::styled("  s", key_style), Span::raw("  Save")]),
        Line::from(vec![Span::styled("  d", key_style), Span::raw("  Discard")]),
        Line::from(vec![
            Span::styled("  c", key_style),
            Span::raw(" / Esc  Cancel"),
        ]),
    ];

    let block = Block::default()
        .title("Unsaved Changes")
        .borders(Borders::ALL)
        .padding(Padding::uniform(1))
        .style(Style::default().bg(Color::Black).fg(Color::White));
    frame.render_widget(Clear, popup);
    frame.render_widget(Paragraph::new(lines).block(block), popup);
}

pub fn render_alert_overlay(model: &Model, frame: &mut Frame, area: Rect) {
    let Some(message) = model.alert.as_deref() else {
        return;
    };

    let popup_width = area.width.saturating_sub(16).clamp(40, 70);
    let popup = centered_popup_rect(popup_width, 8, area);

    let mut lines = vec![Line::raw(message.to_string()), Line::raw("")];
    lines.push(Line::styled(
        "press any key to dismiss",
        Style::default().fg(Color::Indexed(245)),
    ));

    let block = Block::default()
        .title("Error")
        .borders(Borders::ALL)
        .padding(Padding::uniform(1))
        .style(Style::default().bg(Color::Black).fg(Color::Red));
    frame.render_widget(Clear, popup);
    frame.render_widget(
        Paragraph::new(lines).wrap(Wrap { trim: false }).block(block),
        popup,
    );
}

pub(super) fn centered_popup_rect(width: u16, height: u16, area: Rect) -> Rect {
    let w = width.min(area.width);
    let h = height.min(area.height);
    let x = area.x + (area.width.saturating_sub(w) / 2);
    let y = area.y + (area.height.saturating_sub(h) / 2);
    Rect::new(x, y, w, h)
}
