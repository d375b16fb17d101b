use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use tempfile::tempdir;

use crate::editor::{Direction, TextSurface};
use crate::format::{Edit, Formatter, Marker};
use crate::preview::{MarkdownRenderer, StyledLine, StyledSpan, StyledText};
use crate::selection::SelectionRange;

use super::{App, FocusRequest, Message, Mode, Model, Motion, ToastLevel, load_text, update};

fn create_test_model(text: &str) -> Model {
    let mut model = Model::new(text, (80, 24));
    model.apply_pending_focus();
    model
}

fn select(model: Model, location: usize, length: usize) -> Model {
    let mut model = model;
    model.buffer.set_selection(SelectionRange::new(location, length));
    model
}

fn key(code: KeyCode) -> Event {
    Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

fn key_with(code: KeyCode, modifiers: KeyModifiers) -> Event {
    Event::Key(KeyEvent::new(code, modifiers))
}

fn click(column: u16, row: u16) -> Event {
    Event::Mouse(MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column,
        row,
        modifiers: KeyModifiers::NONE,
    })
}

// --- Formatting through the shell ---

#[test]
fn test_bold_then_bold_again_restores_text() {
    let model = select(create_test_model("Hello world"), 0, 11);

    let model = update(model, Message::Format(Marker::Bold));
    assert_eq!(model.buffer.text(), "**Hello world**");
    assert_eq!(model.buffer.selection(), SelectionRange::new(0, 15));

    let model = update(model, Message::Format(Marker::Bold));
    assert_eq!(model.buffer.text(), "Hello world");
    assert_eq!(model.buffer.selection(), SelectionRange::new(0, 11));
}

#[test]
fn test_heading_twice_double_prefixes() {
    let model = select(create_test_model("Title"), 0, 5);
    let model = update(model, Message::Format(Marker::Heading));
    assert_eq!(model.buffer.selection(), SelectionRange::new(0, 7));
    let model = update(model, Message::Format(Marker::Heading));
    assert_eq!(model.buffer.text(), "# # Title");
}

#[test]
fn test_list_over_selected_lines() {
    let model = select(create_test_model("intro\na\n\nb\nend"), 6, 4);
    let model = update(model, Message::Format(Marker::BulletList));
    assert_eq!(model.buffer.text(), "intro\n- a\n\n- b\nend");
    assert!(model.is_dirty());
}

#[test]
fn test_list_over_bulleted_lines_stays_clean() {
    let model = select(create_test_model("- a\n- b"), 0, 7);
    let model = update(model, Message::Format(Marker::BulletList));
    assert_eq!(model.buffer.text(), "- a\n- b");
    assert!(!model.is_dirty());
}

#[test]
fn test_format_with_caret_is_noop() {
    let model = create_test_model("Hello");
    let model = update(model, Message::Move(Motion::BufferEnd));
    let model = update(model, Message::Format(Marker::Italic));
    assert_eq!(model.buffer.text(), "Hello");
    assert!(!model.is_dirty());
}

#[test]
fn test_format_in_preview_is_guarded() {
    let model = select(create_test_model("Hello"), 0, 5);
    let model = update(model, Message::EnterPreview);
    let model = update(model, Message::Format(Marker::Bold));
    assert_eq!(model.buffer.text(), "Hello");
    assert_eq!(model.mode, Mode::Preview);
    let (_, level) = model.active_toast().unwrap();
    assert_eq!(level, ToastLevel::Info);
}

struct ShoutFormatter;

impl Formatter for ShoutFormatter {
    fn format(&self, _marker: Marker, text: &str, range: SelectionRange) -> Option<Edit> {
        let upper = text.to_uppercase();
        (upper != text).then(|| Edit {
            text: upper,
            replaced: range,
        })
    }

    fn markers(&self) -> &[Marker] {
        &[Marker::Bold]
    }
}

#[test]
fn test_injected_formatter_is_used() {
    let model = create_test_model("quiet").with_formatter(Box::new(ShoutFormatter));
    let model = select(model, 0, 5);
    let model = update(model, Message::Format(Marker::Bold));
    assert_eq!(model.buffer.text(), "QUIET");
    assert_eq!(model.markers(), &[Marker::Bold]);
}

// --- Mode switching and focus ---

struct FixedRenderer;

impl MarkdownRenderer for FixedRenderer {
    fn render(&self, _text: &str) -> StyledText {
        StyledText::new(vec![StyledLine::new(
            crate::preview::BlockStyle::Paragraph,
            vec![StyledSpan::plain("rendered")],
        )])
    }
}

#[test]
fn test_enter_preview_renders_and_queues_release() {
    let model = create_test_model("# Title").with_renderer(Box::new(FixedRenderer));
    let model = update(model, Message::EnterPreview);
    assert_eq!(model.mode, Mode::Preview);
    assert_eq!(model.preview.as_ref().map(StyledText::line_count), Some(1));
    assert_eq!(model.pending_focus(), Some(FocusRequest::Release));
    // focus is still held until the event loop applies the request
    assert!(model.buffer.has_focus());
}

#[test]
fn test_enter_editing_drops_preview_and_shows_source() {
    let model = create_test_model("> ~~old~~ **new**");
    let model = update(model, Message::EnterPreview);
    let mut model = update(model, Message::EnterEditing);
    assert_eq!(model.mode, Mode::Editing);
    assert!(model.preview.is_none());
    assert_eq!(model.buffer.text(), "> ~~old~~ **new**");
    assert_eq!(model.pending_focus(), Some(FocusRequest::Acquire));
    assert!(!model.is_dirty());
    // stripped rendering is "old new": markup and quote styling gone
    assert_eq!(
        model.active_toast(),
        Some(("Editing source (2 rendered words)", ToastLevel::Info))
    );

    assert!(model.apply_pending_focus());
    assert!(model.buffer.has_focus());
    assert!(!model.apply_pending_focus());
}

#[test]
fn test_done_releases_focus_on_next_iteration() {
    let model = create_test_model("text");
    let mut model = update(model, Message::Done);
    assert_eq!(model.mode, Mode::Preview);
    assert!(model.buffer.has_focus());
    model.apply_pending_focus();
    assert!(!model.buffer.has_focus());
}

#[test]
fn test_toggle_mode_round_trip() {
    let model = create_test_model("text");
    let model = update(model, Message::ToggleMode);
    assert_eq!(model.mode, Mode::Preview);
    let model = update(model, Message::ToggleMode);
    assert_eq!(model.mode, Mode::Editing);
}

#[test]
fn test_enter_editing_without_preview_shows_no_toast() {
    let model = update(create_test_model("text"), Message::EnterEditing);
    assert_eq!(model.mode, Mode::Editing);
    assert!(model.active_toast().is_none());
}

#[test]
fn test_new_model_queues_focus_acquire() {
    let model = Model::new("", (80, 24));
    assert_eq!(model.pending_focus(), Some(FocusRequest::Acquire));
    assert!(!model.buffer.has_focus());
}

#[test]
fn test_editing_messages_ignored_in_preview() {
    let model = update(create_test_model("abc"), Message::EnterPreview);
    let model = update(model, Message::InsertChar('x'));
    let model = update(model, Message::SelectAll);
    assert_eq!(model.buffer.text(), "abc");
    assert!(!model.buffer.has_selection());
}

// --- Editing ---

#[test]
fn test_typing_replaces_selection() {
    let model = select(create_test_model("Hello world"), 6, 5);
    let model = update(model, Message::InsertChar('W'));
    assert_eq!(model.buffer.text(), "Hello W");
}

#[test]
fn test_shift_motion_extends_selection() {
    let model = create_test_model("abcdef");
    let model = update(model, Message::Select(Motion::Step(Direction::Right)));
    let model = update(model, Message::Select(Motion::Step(Direction::Right)));
    assert_eq!(model.buffer.selection(), SelectionRange::new(0, 2));
    let model = update(model, Message::Move(Motion::Step(Direction::Right)));
    assert!(!model.buffer.has_selection());
}

#[test]
fn test_select_all_then_bold() {
    let model = update(create_test_model("  spaced  "), Message::SelectAll);
    let model = update(model, Message::Format(Marker::Bold));
    assert_eq!(model.buffer.text(), "**spaced**");
}

#[test]
fn test_scroll_follows_cursor() {
    let text = (0..100).map(|i| format!("line {i}")).collect::<Vec<_>>().join("\n");
    let model = create_test_model(&text);
    let model = update(model, Message::Move(Motion::BufferEnd));
    let rows = model.content_rows();
    assert_eq!(model.editor_scroll_offset, 100 - rows);
    let model = update(model, Message::Move(Motion::BufferStart));
    assert_eq!(model.editor_scroll_offset, 0);
}

// --- Quit and save ---

#[test]
fn test_quit_clean_exits_immediately() {
    let model = update(create_test_model("x"), Message::Quit);
    assert!(model.should_quit);
}

#[test]
fn test_quit_dirty_requires_confirmation() {
    let model = update(create_test_model("x"), Message::InsertChar('y'));
    let model = update(model, Message::Quit);
    assert!(!model.should_quit);
    assert!(model.quit_confirmed);
    let model = update(model, Message::Quit);
    assert!(model.should_quit);
}

#[test]
fn test_quit_confirmation_resets_on_other_action() {
    let model = update(create_test_model("x"), Message::InsertChar('y'));
    let model = update(model, Message::Quit);
    let model = update(model, Message::Move(Motion::LineStart));
    assert!(!model.quit_confirmed);
}

#[test]
fn test_save_writes_file_and_marks_clean() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("draft.md");
    let model = create_test_model("Title").with_file_path(Some(path.clone()));
    let model = select(model, 0, 5);
    let mut model = update(model, Message::Format(Marker::Heading));
    assert!(model.is_dirty());

    App::dispatch(&mut model, Message::Save);
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "# Title");
    assert!(!model.is_dirty());
    assert_eq!(model.active_toast().map(|(_, l)| l), Some(ToastLevel::Info));
}

#[test]
fn test_save_without_path_reports_error() {
    let mut model = update(create_test_model("x"), Message::InsertChar('y'));
    App::dispatch(&mut model, Message::Save);
    assert!(model.is_dirty());
    assert_eq!(model.active_toast().map(|(_, l)| l), Some(ToastLevel::Error));
}

#[test]
fn test_save_completes_pending_quit() {
    let dir = tempdir().unwrap();
    let model = create_test_model("x").with_file_path(Some(dir.path().join("a.md")));
    let mut model = update(model, Message::InsertChar('y'));
    App::dispatch(&mut model, Message::Quit);
    App::dispatch(&mut model, Message::Save);
    assert!(model.should_quit);
}

#[test]
fn test_load_text_missing_file_is_empty() {
    let dir = tempdir().unwrap();
    assert_eq!(load_text(&dir.path().join("new.md")).unwrap(), "");
    let path = dir.path().join("old.md");
    std::fs::write(&path, "# Old").unwrap();
    assert_eq!(load_text(&path).unwrap(), "# Old");
}

// --- Input mapping ---

#[test]
fn test_function_keys_map_to_markers() {
    let model = create_test_model("x");
    assert_eq!(
        App::handle_event(&key(KeyCode::F(1)), &model),
        Some(Message::Format(Marker::Bold))
    );
    assert_eq!(
        App::handle_event(&key(KeyCode::F(5)), &model),
        Some(Message::Format(Marker::BulletList))
    );
    assert_eq!(App::handle_event(&key(KeyCode::F(6)), &model), None);
}

#[test]
fn test_alt_shortcuts_map_to_markers() {
    let model = create_test_model("x");
    assert_eq!(
        App::handle_event(&key_with(KeyCode::Char('s'), KeyModifiers::ALT), &model),
        Some(Message::Format(Marker::Strikethrough))
    );
    assert_eq!(
        App::handle_event(&key_with(KeyCode::Char('h'), KeyModifiers::ALT), &model),
        Some(Message::Format(Marker::Heading))
    );
}

#[test]
fn test_escape_is_done_while_editing() {
    let model = create_test_model("x");
    assert_eq!(App::handle_event(&key(KeyCode::Esc), &model), Some(Message::Done));
}

#[test]
fn test_shift_arrow_selects() {
    let model = create_test_model("x");
    assert_eq!(
        App::handle_event(&key_with(KeyCode::Right, KeyModifiers::SHIFT), &model),
        Some(Message::Select(Motion::Step(Direction::Right)))
    );
    assert_eq!(
        App::handle_event(
            &key_with(KeyCode::Left, KeyModifiers::SHIFT | KeyModifiers::CONTROL),
            &model
        ),
        Some(Message::Select(Motion::WordLeft))
    );
}

#[test]
fn test_preview_keys_start_editing() {
    let model = update(create_test_model("x"), Message::EnterPreview);
    for code in [KeyCode::Char('e'), KeyCode::Char('i'), KeyCode::Enter] {
        assert_eq!(
            App::handle_event(&key(code), &model),
            Some(Message::EnterEditing)
        );
    }
}

#[test]
fn test_plain_chars_insert_while_editing() {
    let model = create_test_model("x");
    assert_eq!(
        App::handle_event(&key(KeyCode::Char('e')), &model),
        Some(Message::InsertChar('e'))
    );
    assert_eq!(
        App::handle_event(&key_with(KeyCode::Char('a'), KeyModifiers::CONTROL), &model),
        Some(Message::SelectAll)
    );
}

#[test]
fn test_paste_replaces_selection_and_normalizes_crlf() {
    let model = select(create_test_model("one two"), 4, 3);
    let msg = App::handle_event(&Event::Paste("a\r\nb".to_string()), &model);
    assert_eq!(msg, Some(Message::Paste("a\nb".to_string())));

    let model = update(model, Message::Paste("a\nb".to_string()));
    assert_eq!(model.buffer.text(), "one a\nb");
    assert!(model.is_dirty());
}

#[test]
fn test_paste_ignored_in_preview() {
    let mut model = create_test_model("x");
    model.enter_preview();
    assert_eq!(App::handle_event(&Event::Paste("y".to_string()), &model), None);
}

#[test]
fn test_toolbar_click_dispatches_format() {
    let model = create_test_model("x");
    // " B " occupies columns 0..3, " I " 4..7
    assert_eq!(
        App::handle_event(&click(1, 0), &model),
        Some(Message::Format(Marker::Bold))
    );
    assert_eq!(
        App::handle_event(&click(5, 0), &model),
        Some(Message::Format(Marker::Italic))
    );
}

#[test]
fn test_toolbar_done_and_edit_buttons() {
    let model = create_test_model("x");
    let done_col = crate::ui::toolbar_buttons(model.markers(), Mode::Editing)[5].x + 1;
    assert_eq!(App::handle_event(&click(done_col, 0), &model), Some(Message::Done));

    let model = update(model, Message::Done);
    let edit_col = crate::ui::toolbar_buttons(model.markers(), Mode::Preview)[5].x + 1;
    assert_eq!(
        App::handle_event(&click(edit_col, 0), &model),
        Some(Message::EnterEditing)
    );
}

#[test]
fn test_click_in_editor_moves_cursor() {
    let model = create_test_model("hello\nworld");
    // row 0 is the toolbar, gutter is "1 " (two columns)
    assert_eq!(
        App::handle_event(&click(5, 2), &model),
        Some(Message::Move(Motion::To(1, 3)))
    );
    let model = update(model, Message::Move(Motion::To(1, 3)));
    assert_eq!(model.buffer.cursor_char_idx(), 9);
}

#[test]
fn test_click_without_toolbar_targets_first_line() {
    let mut model = create_test_model("hello\nworld");
    model.toolbar_visible = false;
    assert_eq!(
        App::handle_event(&click(2, 0), &model),
        Some(Message::Move(Motion::To(0, 0)))
    );
}
