use ropey::Rope;

use crate::selection::SelectionRange;

use super::surface::TextSurface;

/// Cursor position in the editor buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor {
    /// Zero-based line index.
    pub line: usize,
    /// Zero-based column (byte offset within the line).
    pub col: usize,
    /// Remembered column for vertical movement (sticky column).
    col_memory: usize,
}

impl Cursor {
    /// Create a cursor at line 0, column 0.
    pub const fn new() -> Self {
        Self {
            line: 0,
            col: 0,
            col_memory: 0,
        }
    }

    /// Create a cursor at a specific position.
    pub const fn at(line: usize, col: usize) -> Self {
        Self {
            line,
            col,
            col_memory: col,
        }
    }

    /// Update column and reset column memory to match.
    const fn set_col(&mut self, col: usize) {
        self.col = col;
        self.col_memory = col;
    }
}

impl Default for Cursor {
    fn default() -> Self {
        Self::new()
    }
}

/// Direction for cursor movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// The editable document text, backed by a rope.
///
/// Tracks a cursor plus an optional selection anchor. The selection runs
/// from the anchor to the cursor, in whichever order they fall.
pub struct EditorBuffer {
    rope: Rope,
    cursor: Cursor,
    /// Char index where the current selection started.
    anchor: Option<usize>,
    dirty: bool,
    focused: bool,
}

impl EditorBuffer {
    /// Create a new buffer from a string.
    pub fn from_text(text: &str) -> Self {
        Self {
            rope: Rope::from_str(text),
            cursor: Cursor::new(),
            anchor: None,
            dirty: false,
            focused: false,
        }
    }

    /// Create an empty buffer.
    pub fn empty() -> Self {
        Self::from_text("")
    }

    /// The current cursor position.
    pub const fn cursor(&self) -> Cursor {
        self.cursor
    }

    /// Whether the buffer has been modified since creation or last save.
    pub const fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Mark the buffer as clean (e.g., after saving).
    pub const fn mark_clean(&mut self) {
        self.dirty = false;
    }

    /// Total number of lines in the buffer.
    pub fn line_count(&self) -> usize {
        self.rope.len_lines()
    }

    /// Total number of chars in the buffer.
    pub fn char_count(&self) -> usize {
        self.rope.len_chars()
    }

    /// Get the content of a line (without trailing newline).
    pub fn line_at(&self, line_idx: usize) -> Option<String> {
        if line_idx >= self.rope.len_lines() {
            return None;
        }
        let line = self.rope.line(line_idx);
        let s = line.to_string();
        // Strip trailing newline if present
        Some(s.trim_end_matches('\n').trim_end_matches('\r').to_string())
    }

    /// Length of a line in bytes (without trailing newline).
    pub fn line_len(&self, line_idx: usize) -> usize {
        self.line_at(line_idx).map_or(0, |s| s.len())
    }

    /// Char index of the first char on `line_idx`.
    pub fn line_start_char(&self, line_idx: usize) -> usize {
        self.rope
            .line_to_char(line_idx.min(self.rope.len_lines().saturating_sub(1)))
    }

    /// The full text content of the buffer.
    pub fn text(&self) -> String {
        self.rope.to_string()
    }

    /// Char index of the cursor.
    pub fn cursor_char_idx(&self) -> usize {
        let line_start = self.rope.line_to_char(self.cursor.line);
        let line = self.rope.line(self.cursor.line);
        let line_str: String = line.chars().collect();
        // Convert byte offset to char offset within the line
        let byte_col = self.cursor.col.min(line_str.len());
        let char_offset = line_str[..byte_col].chars().count();
        line_start + char_offset
    }

    /// Char index for a `(line, char column)` position, clamped to the line.
    pub fn char_idx_at(&self, line: usize, char_col: usize) -> usize {
        let line = line.min(self.line_count().saturating_sub(1));
        let len = self.line_at(line).map_or(0, |s| s.chars().count());
        self.rope.line_to_char(line) + char_col.min(len)
    }

    // --- Selection ---

    /// The current selection; a caret at the cursor when nothing is selected.
    pub fn selection(&self) -> SelectionRange {
        let cursor = self.cursor_char_idx();
        self.anchor.map_or_else(
            || SelectionRange::caret(cursor),
            |anchor| SelectionRange::between(anchor, cursor),
        )
    }

    /// Whether a non-empty span is selected.
    pub fn has_selection(&self) -> bool {
        !self.selection().is_empty()
    }

    /// Select `range`, clamped to the buffer. The cursor lands at its end.
    pub fn select(&mut self, range: SelectionRange) {
        let range = range.clamp_to(self.char_count());
        let end = range.location + range.length;
        self.set_cursor_char(end);
        self.anchor = (!range.is_empty()).then_some(range.location);
    }

    /// Drop the selection, keeping the cursor where it is.
    pub const fn clear_selection(&mut self) {
        self.anchor = None;
    }

    /// Select the whole buffer.
    pub fn select_all(&mut self) {
        self.select(SelectionRange::new(0, self.char_count()));
    }

    /// Select the cursor's line, without its line break.
    pub fn select_line(&mut self) {
        let start = self.rope.line_to_char(self.cursor.line);
        let len = self
            .line_at(self.cursor.line)
            .map_or(0, |s| s.chars().count());
        self.select(SelectionRange::new(start, len));
    }

    /// Run a cursor motion while keeping (or starting) the selection anchor.
    pub fn extend_selection(&mut self, motion: impl FnOnce(&mut Self)) {
        let anchor = self.anchor.unwrap_or_else(|| self.cursor_char_idx());
        motion(self);
        self.anchor = Some(anchor);
    }

    /// Delete the selected span. Returns `true` if anything was removed.
    pub fn delete_selection(&mut self) -> bool {
        let selection = self.selection();
        self.anchor = None;
        if selection.is_empty() {
            return false;
        }
        let start = selection.location;
        self.rope.remove(start..start + selection.length);
        self.set_cursor_char(start);
        self.dirty = true;
        true
    }

    /// Replace the entire content, dropping the selection.
    ///
    /// The cursor keeps its char offset where possible.
    pub fn replace_text(&mut self, text: &str) {
        if self.rope == text {
            return;
        }
        let cursor = self.cursor_char_idx();
        self.rope = Rope::from_str(text);
        self.anchor = None;
        self.set_cursor_char(cursor);
        self.dirty = true;
    }

    // --- Editing ---

    /// Insert a character at the cursor position, replacing any selection.
    pub fn insert_char(&mut self, ch: char) {
        self.delete_selection();
        let char_idx = self.cursor_char_idx();
        self.rope.insert_char(char_idx, ch);
        self.cursor.set_col(self.cursor.col + ch.len_utf8());
        self.dirty = true;
    }

    /// Insert a string at the cursor position, replacing any selection.
    pub fn insert_str(&mut self, s: &str) {
        if s.is_empty() {
            return;
        }
        self.delete_selection();
        let char_idx = self.cursor_char_idx();
        self.rope.insert(char_idx, s);
        self.set_cursor_char(char_idx + s.chars().count());
        self.dirty = true;
    }

    /// Split the current line at the cursor (Enter key).
    pub fn split_line(&mut self) {
        self.delete_selection();
        let char_idx = self.cursor_char_idx();
        self.rope.insert_char(char_idx, '\n');
        self.cursor.line += 1;
        self.cursor.set_col(0);
        self.dirty = true;
    }

    /// Delete the selection, or the character before the cursor (Backspace).
    ///
    /// Returns `true` if anything was deleted.
    pub fn delete_back(&mut self) -> bool {
        if self.delete_selection() {
            return true;
        }
        let char_idx = self.cursor_char_idx();
        if char_idx == 0 {
            return false;
        }
        self.rope.remove(char_idx - 1..char_idx);
        self.set_cursor_char(char_idx - 1);
        self.dirty = true;
        true
    }

    /// Delete the selection, or the character at the cursor (Delete key).
    ///
    /// Returns `true` if anything was deleted.
    pub fn delete_forward(&mut self) -> bool {
        if self.delete_selection() {
            return true;
        }
        let char_idx = self.cursor_char_idx();
        if char_idx >= self.char_count() {
            return false;
        }
        self.rope.remove(char_idx..=char_idx);
        self.dirty = true;
        true
    }

    // --- Cursor movement (each clears the selection) ---

    /// Move the cursor in the given direction.
    pub fn move_cursor(&mut self, direction: Direction) {
        self.anchor = None;
        match direction {
            Direction::Left => self.move_left(),
            Direction::Right => self.move_right(),
            Direction::Up => self.move_up(),
            Direction::Down => self.move_down(),
        }
    }

    /// Move cursor to the beginning of the line (Home).
    pub const fn move_home(&mut self) {
        self.anchor = None;
        self.cursor.set_col(0);
    }

    /// Move cursor to the end of the line (End).
    pub fn move_end(&mut self) {
        self.anchor = None;
        let len = self.line_len(self.cursor.line);
        self.cursor.set_col(len);
    }

    /// Move cursor one word to the left (Ctrl+Left).
    pub fn move_word_left(&mut self) {
        self.anchor = None;
        if self.cursor.col == 0 {
            if self.cursor.line > 0 {
                self.cursor.line -= 1;
                self.cursor.set_col(self.line_len(self.cursor.line));
            }
            return;
        }

        let line = self.line_at(self.cursor.line).unwrap_or_default();
        let before = &line[..self.cursor.col];
        let trimmed = before.trim_end();

        if trimmed.is_empty() {
            self.cursor.set_col(0);
            return;
        }

        let pos = trimmed
            .rfind(|c: char| !c.is_alphanumeric() && c != '_')
            .map_or(0, |i| i + trimmed[i..].chars().next().map_or(1, char::len_utf8));
        self.cursor.set_col(pos);
    }

    /// Move cursor one word to the right (Ctrl+Right).
    pub fn move_word_right(&mut self) {
        self.anchor = None;
        let line_len = self.line_len(self.cursor.line);

        if self.cursor.col >= line_len {
            if self.cursor.line + 1 < self.line_count() {
                self.cursor.line += 1;
                self.cursor.set_col(0);
            }
            return;
        }

        let line = self.line_at(self.cursor.line).unwrap_or_default();
        let after = &line[self.cursor.col..];

        let word_end = after
            .find(|c: char| !c.is_alphanumeric() && c != '_')
            .unwrap_or(after.len());

        let rest = &after[word_end..];
        let space_end = rest
            .find(|c: char| c.is_alphanumeric() || c == '_')
            .unwrap_or(rest.len());

        self.cursor.set_col(self.cursor.col + word_end + space_end);
    }

    /// Move cursor to a specific line and byte column.
    pub fn move_to(&mut self, line: usize, col: usize) {
        self.anchor = None;
        let max_line = self.line_count().saturating_sub(1);
        self.cursor.line = line.min(max_line);
        let line_text = self.line_at(self.cursor.line).unwrap_or_default();
        let mut col = col.min(line_text.len());
        while !line_text.is_char_boundary(col) {
            col -= 1;
        }
        self.cursor.set_col(col);
    }

    /// Move cursor to the start of the buffer (Ctrl+Home).
    pub const fn move_to_start(&mut self) {
        self.anchor = None;
        self.cursor.line = 0;
        self.cursor.set_col(0);
    }

    /// Move cursor to the end of the buffer (Ctrl+End).
    pub fn move_to_end(&mut self) {
        self.anchor = None;
        let last_line = self.line_count().saturating_sub(1);
        self.cursor.line = last_line;
        self.cursor.set_col(self.line_len(last_line));
    }

    /// Place the cursor at a char index, clearing the selection.
    pub fn move_to_char(&mut self, char_idx: usize) {
        self.anchor = None;
        self.set_cursor_char(char_idx);
    }

    // --- Private helpers ---

    /// Put the cursor on the char index `idx`, clamped to the buffer.
    fn set_cursor_char(&mut self, idx: usize) {
        let idx = idx.min(self.rope.len_chars());
        let line = self.rope.char_to_line(idx);
        let col = self.rope.char_to_byte(idx) - self.rope.line_to_byte(line);
        self.cursor.line = line;
        self.cursor.set_col(col);
    }

    fn move_left(&mut self) {
        if self.cursor.col > 0 {
            let line = self.line_at(self.cursor.line).unwrap_or_default();
            let before = &line[..self.cursor.col];
            let prev_char_len = before.chars().next_back().map_or(1, char::len_utf8);
            self.cursor.set_col(self.cursor.col - prev_char_len);
        } else if self.cursor.line > 0 {
            self.cursor.line -= 1;
            self.cursor.set_col(self.line_len(self.cursor.line));
        }
    }

    fn move_right(&mut self) {
        let line_len = self.line_len(self.cursor.line);
        if self.cursor.col < line_len {
            let line = self.line_at(self.cursor.line).unwrap_or_default();
            let next_char_len = line[self.cursor.col..]
                .chars()
                .next()
                .map_or(1, char::len_utf8);
            self.cursor.set_col(self.cursor.col + next_char_len);
        } else if self.cursor.line + 1 < self.line_count() {
            self.cursor.line += 1;
            self.cursor.set_col(0);
        }
    }

    fn move_up(&mut self) {
        if self.cursor.line > 0 {
            self.cursor.line -= 1;
            self.clamp_to_col_memory();
        }
    }

    fn move_down(&mut self) {
        if self.cursor.line + 1 < self.line_count() {
            self.cursor.line += 1;
            self.clamp_to_col_memory();
        }
    }

    fn clamp_to_col_memory(&mut self) {
        let line = self.line_at(self.cursor.line).unwrap_or_default();
        let mut col = self.cursor.col_memory.min(line.len());
        while !line.is_char_boundary(col) {
            col -= 1;
        }
        self.cursor.col = col;
    }
}

impl TextSurface for EditorBuffer {
    fn text(&self) -> String {
        Self::text(self)
    }

    fn selection(&self) -> SelectionRange {
        Self::selection(self)
    }

    fn set_text(&mut self, text: &str) {
        self.replace_text(text);
    }

    fn set_selection(&mut self, range: SelectionRange) {
        self.select(range);
    }

    fn request_focus(&mut self) {
        self.focused = true;
    }

    fn release_focus(&mut self) {
        self.focused = false;
    }

    fn has_focus(&self) -> bool {
        self.focused
    }
}

impl std::fmt::Debug for EditorBuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EditorBuffer")
            .field(
                "rope",
                &format_args!("Rope({} lines)", self.rope.len_lines()),
            )
            .field("cursor", &self.cursor)
            .field("anchor", &self.anchor)
            .field("dirty", &self.dirty)
            .field("focused", &self.focused)
            .finish()
    }
}
