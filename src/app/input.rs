use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::Rect;

use crate::app::model::{Mode, Model};
use crate::app::update::{Message, Motion};
use crate::app::App;
use crate::editor::Direction;
use crate::format::Marker;
use crate::ui::{ToolbarAction, editor_position_at, screen_layout, toolbar_action_at};

/// Lines moved per mouse wheel notch.
const WHEEL_LINES: usize = 3;

impl App {
    pub(super) fn handle_event(event: &Event, model: &Model) -> Option<Message> {
        match event {
            Event::Key(key) if key.kind != KeyEventKind::Release => Self::handle_key(*key, model),
            Event::Mouse(mouse) => Self::handle_mouse(*mouse, model),
            Event::Paste(text) if model.mode == Mode::Editing => {
                Some(Message::Paste(text.replace("\r\n", "\n")))
            }
            Event::Resize(w, h) => Some(Message::Resize(*w, *h)),
            _ => None,
        }
    }

    pub(super) fn handle_key(key: KeyEvent, model: &Model) -> Option<Message> {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        let alt = key.modifiers.contains(KeyModifiers::ALT);
        let shift = key.modifiers.contains(KeyModifiers::SHIFT);

        // Shared by both modes
        match key.code {
            KeyCode::Char('q') if ctrl => return Some(Message::Quit),
            KeyCode::Char('s') if ctrl => return Some(Message::Save),
            KeyCode::Char('e') if ctrl => return Some(Message::ToggleMode),
            KeyCode::F(n) => {
                return function_key_marker(model, n).map(Message::Format);
            }
            KeyCode::Char(c) if alt && !ctrl => {
                return alt_shortcut_marker(model, c).map(Message::Format);
            }
            _ => {}
        }

        match model.mode {
            Mode::Preview => Self::handle_preview_key(key, model),
            Mode::Editing => Self::handle_editing_key(key, model, ctrl, shift),
        }
    }

    fn handle_preview_key(key: KeyEvent, model: &Model) -> Option<Message> {
        match key.code {
            KeyCode::Char('e' | 'i') | KeyCode::Enter => Some(Message::EnterEditing),
            KeyCode::Char('q') => Some(Message::Quit),
            KeyCode::Char('j') | KeyCode::Down => Some(Message::ScrollDown(1)),
            KeyCode::Char('k') | KeyCode::Up => Some(Message::ScrollUp(1)),
            KeyCode::PageDown | KeyCode::Char(' ') => {
                Some(Message::ScrollDown(model.content_rows().max(1)))
            }
            KeyCode::PageUp => Some(Message::ScrollUp(model.content_rows().max(1))),
            _ => None,
        }
    }

    fn handle_editing_key(key: KeyEvent, model: &Model, ctrl: bool, shift: bool) -> Option<Message> {
        let motion = match key.code {
            KeyCode::Left if ctrl => Some(Motion::WordLeft),
            KeyCode::Right if ctrl => Some(Motion::WordRight),
            KeyCode::Home if ctrl => Some(Motion::BufferStart),
            KeyCode::End if ctrl => Some(Motion::BufferEnd),
            KeyCode::Left => Some(Motion::Step(Direction::Left)),
            KeyCode::Right => Some(Motion::Step(Direction::Right)),
            KeyCode::Up => Some(Motion::Step(Direction::Up)),
            KeyCode::Down => Some(Motion::Step(Direction::Down)),
            KeyCode::Home => Some(Motion::LineStart),
            KeyCode::End => Some(Motion::LineEnd),
            _ => None,
        };
        if let Some(motion) = motion {
            return Some(if shift {
                Message::Select(motion)
            } else {
                Message::Move(motion)
            });
        }

        match key.code {
            KeyCode::Esc => Some(Message::Done),
            KeyCode::Char('a') if ctrl => Some(Message::SelectAll),
            KeyCode::Char('l') if ctrl => Some(Message::SelectLine),
            KeyCode::Enter => Some(Message::InsertNewline),
            KeyCode::Backspace => Some(Message::DeleteBack),
            KeyCode::Delete => Some(Message::DeleteForward),
            KeyCode::PageDown => Some(Message::ScrollDown(model.content_rows().max(1))),
            KeyCode::PageUp => Some(Message::ScrollUp(model.content_rows().max(1))),
            KeyCode::Char(c) if !ctrl => Some(Message::InsertChar(c)),
            _ => None,
        }
    }

    pub(super) fn handle_mouse(mouse: MouseEvent, model: &Model) -> Option<Message> {
        let area = Rect::new(0, 0, model.width, model.height);
        let layout = screen_layout(model, area);

        match mouse.kind {
            MouseEventKind::ScrollDown => Some(Message::ScrollDown(WHEEL_LINES)),
            MouseEventKind::ScrollUp => Some(Message::ScrollUp(WHEEL_LINES)),
            MouseEventKind::Down(MouseButton::Left) => {
                if layout.toolbar.is_some_and(|bar| mouse.row == bar.y) {
                    return toolbar_action_at(model, mouse.column).map(|action| match action {
                        ToolbarAction::Format(marker) => Message::Format(marker),
                        ToolbarAction::Done => Message::Done,
                        ToolbarAction::Edit => Message::EnterEditing,
                    });
                }
                if model.mode != Mode::Editing {
                    return None;
                }
                editor_position_at(model, layout.content, mouse.column, mouse.row)
                    .map(|(line, col)| Message::Move(Motion::To(line, col)))
            }
            MouseEventKind::Drag(MouseButton::Left) if model.mode == Mode::Editing => {
                editor_position_at(model, layout.content, mouse.column, mouse.row)
                    .map(|(line, col)| Message::Select(Motion::To(line, col)))
            }
            _ => None,
        }
    }
}

/// F1..F5 map to the toolbar's markers in order.
fn function_key_marker(model: &Model, n: u8) -> Option<Marker> {
    let index = usize::from(n.checked_sub(1)?);
    model.markers().get(index).copied()
}

fn alt_shortcut_marker(model: &Model, c: char) -> Option<Marker> {
    let marker = match c.to_ascii_lowercase() {
        'b' => Marker::Bold,
        'i' => Marker::Italic,
        's' => Marker::Strikethrough,
        'h' => Marker::Heading,
        'l' => Marker::BulletList,
        _ => return None,
    };
    model.markers().contains(&marker).then_some(marker)
}
