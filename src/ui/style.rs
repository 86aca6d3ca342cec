//! Theming and colors.

use ratatui::style::{Color, Modifier, Style};

use crate::preview::{InlineStyle, LineType};

/// Base style for a rendered preview line.
pub fn style_for_line_type(line_type: LineType) -> Style {
    match line_type {
        // Headings - bold with distinct colors per level
        LineType::Heading(1) => Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
        LineType::Heading(2) => Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD),
        LineType::Heading(3) => Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
        LineType::Heading(4) => Style::default()
            .fg(Color::Blue)
            .add_modifier(Modifier::BOLD),
        LineType::Heading(5) => Style::default()
            .fg(Color::Magenta)
            .add_modifier(Modifier::BOLD),
        LineType::Heading(_) => Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),

        LineType::CodeBlock => Style::default().fg(Color::Yellow),
        LineType::BlockQuote => Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::ITALIC),
        LineType::HorizontalRule => Style::default().fg(Color::DarkGray),
        LineType::Paragraph | LineType::ListItem(_) | LineType::Empty => Style::default(),
    }
}

/// Combine a line's base style with a span's inline flags.
pub fn style_for_inline(base: Style, inline: InlineStyle) -> Style {
    let mut style = base;
    if inline.strong {
        style = style.add_modifier(Modifier::BOLD);
    }
    if inline.emphasis {
        style = style.add_modifier(Modifier::ITALIC);
    }
    if inline.strikethrough {
        style = style.add_modifier(Modifier::CROSSED_OUT);
    }
    if inline.code {
        style = style.fg(Color::Yellow);
    }
    if inline.link {
        style = style.fg(Color::Blue).add_modifier(Modifier::UNDERLINED);
    }
    style
}
