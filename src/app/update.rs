use crate::app::model::{Mode, Model, ToastLevel};
use crate::editor::{Direction, EditorBuffer};
use crate::format::Marker;

/// A cursor motion inside the editor buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Motion {
    Step(Direction),
    LineStart,
    LineEnd,
    WordLeft,
    WordRight,
    BufferStart,
    BufferEnd,
    /// Absolute `(line, char column)`, e.g. from a mouse click
    To(usize, usize),
}

impl Motion {
    fn run(self, buf: &mut EditorBuffer) {
        match self {
            Self::Step(dir) => buf.move_cursor(dir),
            Self::LineStart => buf.move_home(),
            Self::LineEnd => buf.move_end(),
            Self::WordLeft => buf.move_word_left(),
            Self::WordRight => buf.move_word_right(),
            Self::BufferStart => buf.move_to_start(),
            Self::BufferEnd => buf.move_to_end(),
            Self::To(line, col) => {
                let idx = buf.char_idx_at(line, col);
                buf.move_to_char(idx);
            }
        }
    }
}

/// All possible events and actions in the application.
///
/// These represent user input, system events, and internal actions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    // Formatting
    /// Apply a toolbar marker to the selection
    Format(Marker),

    // Mode
    /// Switch to editing (strips the preview)
    EnterEditing,
    /// Switch to preview (renders the buffer)
    EnterPreview,
    /// Flip between editing and preview
    ToggleMode,
    /// Toolbar "Done": release focus and show the preview
    Done,

    // Editing
    /// Insert a character at the cursor, replacing any selection
    InsertChar(char),
    /// Insert pasted text, replacing any selection
    Paste(String),
    /// Split line at cursor (Enter)
    InsertNewline,
    /// Delete selection or character before cursor (Backspace)
    DeleteBack,
    /// Delete selection or character at cursor (Delete)
    DeleteForward,
    /// Move the cursor, dropping the selection
    Move(Motion),
    /// Move the cursor, extending the selection
    Select(Motion),
    /// Select the whole buffer
    SelectAll,
    /// Select the cursor's line
    SelectLine,
    /// Drop the selection
    ClearSelection,

    // Navigation
    /// Scroll the active pane up by n lines
    ScrollUp(usize),
    /// Scroll the active pane down by n lines
    ScrollDown(usize),

    // File
    /// Write the buffer to disk
    Save,

    // Window
    /// Terminal resized
    Resize(u16, u16),
    /// Redraw screen
    Redraw,

    // Application
    /// Quit the application
    Quit,
}

/// Pure function that updates the model based on a message.
///
/// All state transitions happen here. Side effects (saving, focus changes)
/// are left to the event loop.
pub fn update(mut model: Model, msg: Message) -> Model {
    // Save preserves the quit flag so Ctrl+S can complete a pending quit.
    if !matches!(msg, Message::Quit | Message::Save) {
        model.quit_confirmed = false;
    }

    match msg {
        Message::Format(marker) => {
            model.apply_format(marker);
            ensure_cursor_visible(&mut model);
        }

        Message::EnterEditing => model.enter_editing(),
        Message::EnterPreview | Message::Done => model.enter_preview(),
        Message::ToggleMode => match model.mode {
            Mode::Editing => model.enter_preview(),
            Mode::Preview => model.enter_editing(),
        },

        Message::InsertChar(_)
        | Message::Paste(_)
        | Message::InsertNewline
        | Message::DeleteBack
        | Message::DeleteForward
        | Message::Move(_)
        | Message::Select(_)
        | Message::SelectAll
        | Message::SelectLine
        | Message::ClearSelection
            if model.mode != Mode::Editing =>
        {
            tracing::trace!(?msg, "editing message ignored in preview");
        }

        Message::InsertChar(ch) => {
            model.buffer.insert_char(ch);
            ensure_cursor_visible(&mut model);
        }
        Message::Paste(text) => {
            model.buffer.insert_str(&text);
            ensure_cursor_visible(&mut model);
        }
        Message::InsertNewline => {
            model.buffer.split_line();
            ensure_cursor_visible(&mut model);
        }
        Message::DeleteBack => {
            model.buffer.delete_back();
            ensure_cursor_visible(&mut model);
        }
        Message::DeleteForward => {
            model.buffer.delete_forward();
        }
        Message::Move(motion) => {
            motion.run(&mut model.buffer);
            model.buffer.clear_selection();
            ensure_cursor_visible(&mut model);
        }
        Message::Select(motion) => {
            model.buffer.extend_selection(|buf| motion.run(buf));
            ensure_cursor_visible(&mut model);
        }
        Message::SelectAll => {
            model.buffer.select_all();
            ensure_cursor_visible(&mut model);
        }
        Message::SelectLine => model.buffer.select_line(),
        Message::ClearSelection => model.buffer.clear_selection(),

        Message::ScrollUp(n) => match model.mode {
            Mode::Editing => {
                model.editor_scroll_offset = model.editor_scroll_offset.saturating_sub(n);
            }
            Mode::Preview => {
                model.preview_scroll_offset = model.preview_scroll_offset.saturating_sub(n);
            }
        },
        Message::ScrollDown(n) => match model.mode {
            Mode::Editing => {
                let max = model.buffer.line_count().saturating_sub(1);
                model.editor_scroll_offset = (model.editor_scroll_offset + n).min(max);
            }
            Mode::Preview => {
                let max = model
                    .preview
                    .as_ref()
                    .map_or(0, |p| p.line_count().saturating_sub(1));
                model.preview_scroll_offset = (model.preview_scroll_offset + n).min(max);
            }
        },

        // Save: handled in the event loop (side effect)
        // Redraw: no state change needed
        Message::Save | Message::Redraw => {}

        Message::Resize(width, height) => {
            model.width = width;
            model.height = height;
            ensure_cursor_visible(&mut model);
        }

        Message::Quit => {
            if model.is_dirty() && !model.quit_confirmed {
                model.show_toast(
                    ToastLevel::Warning,
                    "Unsaved changes! Press Ctrl+Q again to quit, or Ctrl+S to save",
                );
                model.quit_confirmed = true;
            } else {
                model.should_quit = true;
            }
        }
    }
    model
}

/// Ensure the editor cursor line is visible in the viewport.
fn ensure_cursor_visible(model: &mut Model) {
    let cursor_line = model.buffer.cursor().line;
    let visible_height = model.content_rows();
    if visible_height == 0 {
        model.editor_scroll_offset = cursor_line;
        return;
    }

    if cursor_line < model.editor_scroll_offset {
        model.editor_scroll_offset = cursor_line;
    } else if cursor_line >= model.editor_scroll_offset + visible_height {
        model.editor_scroll_offset = cursor_line + 1 - visible_height;
    }
}
