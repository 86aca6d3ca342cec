use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};

use crate::app::model::UnsavedChoice;
use crate::app::{App, Message, Model};
use crate::editor::Direction;

use super::event_loop::ResizeDebouncer;

/// Lines scrolled by PageUp/PageDown.
const PAGE_LINES: usize = 20;

impl App {
    pub(super) fn handle_event(
        event: &Event,
        model: &Model,
        now_ms: u64,
        resize_debouncer: &mut ResizeDebouncer,
    ) -> Option<Message> {
        match event {
            Event::Key(key) => Self::handle_key(*key, model),
            Event::Paste(text) if model.alert.is_none() && model.dialog.is_none() => {
                Some(Message::InsertText(text.clone()))
            }
            Event::Resize(w, h) => {
                resize_debouncer.queue(*w, *h, now_ms);
                None
            }
            _ => None,
        }
    }

    pub(super) fn handle_key(key: KeyEvent, model: &Model) -> Option<Message> {
        // Modal layers eat all input: alert first, then the dialog.
        if model.alert.is_some() {
            return Some(Message::DismissAlert);
        }

        if model.dialog.is_some() {
            return match key.code {
                KeyCode::Char('s') => Some(Message::DialogChoice(UnsavedChoice::Save)),
                KeyCode::Char('d') => Some(Message::DialogChoice(UnsavedChoice::Discard)),
                KeyCode::Char('c') | KeyCode::Esc => {
                    Some(Message::DialogChoice(UnsavedChoice::Cancel))
                }
                _ => None,
            };
        }

        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return match key.code {
                KeyCode::Char('s' | 'S') if key.modifiers.contains(KeyModifiers::SHIFT) => {
                    Some(Message::SaveAs)
                }
                KeyCode::Char('s') => Some(Message::Save),
                KeyCode::Char('o') => Some(Message::OpenFile),
                KeyCode::Char('p') => Some(Message::TogglePreview),
                KeyCode::Char('t') => Some(Message::TogglePin),
                KeyCode::Char('q' | 'w') => Some(Message::CloseRequested),
                KeyCode::Left => Some(Message::MoveWordLeft),
                KeyCode::Right => Some(Message::MoveWordRight),
                KeyCode::Home => Some(Message::MoveToStart),
                KeyCode::End => Some(Message::MoveToEnd),
                _ => None,
            };
        }

        // Plain editing keys
        match key.code {
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::ALT) => {
                Some(Message::InsertChar(c))
            }
            KeyCode::Enter => Some(Message::SplitLine),
            KeyCode::Backspace => Some(Message::DeleteBack),
            KeyCode::Delete => Some(Message::DeleteForward),
            KeyCode::Left => Some(Message::MoveCursor(Direction::Left)),
            KeyCode::Right => Some(Message::MoveCursor(Direction::Right)),
            KeyCode::Up => Some(Message::MoveCursor(Direction::Up)),
            KeyCode::Down => Some(Message::MoveCursor(Direction::Down)),
            KeyCode::Home => Some(Message::MoveHome),
            KeyCode::End => Some(Message::MoveEnd),
            KeyCode::PageUp => Some(Message::ScrollUp(PAGE_LINES)),
            KeyCode::PageDown => Some(Message::ScrollDown(PAGE_LINES)),
            _ => None,
        }
    }
}
