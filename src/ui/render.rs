use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Padding, Paragraph};
use unicode_width::UnicodeWidthChar;

use crate::app::{Mode, Model};
use crate::editor::TextSurface;
use crate::preview::{BlockStyle, StyledLine};

use super::{DOCUMENT_LEFT_PADDING, status, toolbar};

/// Screen regions, top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenLayout {
    pub toolbar: Option<Rect>,
    pub content: Rect,
    pub toast: Option<Rect>,
    pub status: Rect,
}

/// Split `area` into toolbar, content, toast and status rows.
pub fn screen_layout(model: &Model, area: Rect) -> ScreenLayout {
    let toolbar_rows = u16::from(model.toolbar_visible);
    let toast_rows = u16::from(model.active_toast().is_some());
    let footer_rows = 1 + toast_rows;

    let toolbar = model.toolbar_visible.then_some(Rect { height: 1, ..area });
    let content = Rect {
        y: area.y + toolbar_rows.min(area.height),
        height: area.height.saturating_sub(toolbar_rows + footer_rows),
        ..area
    };
    let toast = (toast_rows > 0).then_some(Rect {
        y: area.y + area.height.saturating_sub(2),
        height: 1,
        ..area
    });
    let status = Rect {
        y: area.y + area.height.saturating_sub(1),
        height: 1,
        ..area
    };
    ScreenLayout {
        toolbar,
        content,
        toast,
        status,
    }
}

/// Render the complete UI.
pub fn render(model: &Model, frame: &mut Frame) {
    let layout = screen_layout(model, frame.area());

    if let Some(area) = layout.toolbar {
        toolbar::render_toolbar(model, frame, area);
    }
    frame.render_widget(Clear, layout.content);
    match model.mode {
        Mode::Editing => render_editor(model, frame, layout.content),
        Mode::Preview => render_preview(model, frame, layout.content),
    }
    if let Some(area) = layout.toast {
        status::render_toast_bar(model, frame, area);
    }
    status::render_status_bar(model, frame, layout.status);
}

fn render_editor(model: &Model, frame: &mut Frame, area: Rect) {
    let buf = &model.buffer;
    let theme = &model.theme;

    let total_lines = buf.line_count();
    let gutter_width = line_number_width(total_lines);

    let visible_height = area.height as usize;
    let start = model.editor_scroll_offset;
    let end = (start + visible_height).min(total_lines);
    let selection = buf.selection();
    let cursor_idx = buf.has_focus().then(|| buf.cursor_char_idx());
    let cursor_style = Style::default().bg(Color::White).fg(Color::Black);

    let mut content: Vec<Line> = Vec::new();
    for line_idx in start..end {
        let line_text = buf.line_at(line_idx).unwrap_or_default();
        let line_start = buf.line_start_char(line_idx);
        let line_num = format!("{:>width$} ", line_idx + 1, width = gutter_width as usize);

        let mut spans = vec![Span::styled(line_num, theme.gutter)];
        let mut run = String::new();
        let mut run_style = Style::default();
        let mut char_count = 0;
        for (offset, ch) in line_text.chars().enumerate() {
            let idx = line_start + offset;
            let style = if cursor_idx == Some(idx) {
                cursor_style
            } else if selection.contains(idx) {
                theme.selection
            } else {
                Style::default()
            };
            if style != run_style && !run.is_empty() {
                spans.push(Span::styled(std::mem::take(&mut run), run_style));
            }
            run_style = style;
            run.push(ch);
            char_count = offset + 1;
        }
        if !run.is_empty() {
            spans.push(Span::styled(run, run_style));
        }
        // Cursor past the last char, and the selected line break.
        let eol = line_start + char_count;
        if cursor_idx == Some(eol) {
            spans.push(Span::styled(" ", cursor_style));
        } else if selection.contains(eol) && line_idx + 1 < total_lines {
            spans.push(Span::styled(" ", theme.selection));
        }

        content.push(Line::from(spans));
    }

    frame.render_widget(Paragraph::new(content), area);
}

fn render_preview(model: &Model, frame: &mut Frame, area: Rect) {
    let Some(styled) = &model.preview else {
        return;
    };
    let block = Block::default()
        .borders(Borders::NONE)
        .padding(Padding::left(DOCUMENT_LEFT_PADDING));
    let inner_width = block.inner(area).width as usize;

    let content: Vec<Line> = styled
        .lines()
        .iter()
        .skip(model.preview_scroll_offset)
        .take(area.height as usize)
        .map(|line| preview_line(model, line, inner_width))
        .collect();

    frame.render_widget(Paragraph::new(content).block(block), area);
}

fn preview_line(model: &Model, line: &StyledLine, width: usize) -> Line<'static> {
    let theme = &model.theme;
    let mut spans = Vec::new();
    if line.quote_depth > 0 {
        spans.push(Span::styled("│ ".repeat(line.quote_depth), theme.quote));
    }
    let base = theme.block(line.block);
    if line.block == BlockStyle::Rule {
        let rule_width = width.saturating_sub(2 * line.quote_depth);
        spans.push(Span::styled("─".repeat(rule_width), base));
    } else {
        spans.extend(
            line.spans
                .iter()
                .map(|span| Span::styled(span.text.clone(), theme.inline(base, span.style))),
        );
    }
    Line::from(spans)
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

/// Map a screen cell inside the editor pane to `(line, char column)`.
///
/// Clicks right of a line's end land on its last column; clicks in the
/// gutter land on column zero.
pub fn editor_position_at(
    model: &Model,
    area: Rect,
    column: u16,
    row: u16,
) -> Option<(usize, usize)> {
    if row < area.y || row >= area.y + area.height || column < area.x {
        return None;
    }
    let line = model.editor_scroll_offset + usize::from(row - area.y);
    if line >= model.buffer.line_count() {
        let last = model.buffer.line_count().saturating_sub(1);
        let len = model.buffer.line_at(last).map_or(0, |s| s.chars().count());
        return Some((last, len));
    }
    let gutter = line_number_width(model.buffer.line_count()) + 1;
    let target = usize::from((column - area.x).saturating_sub(gutter));
    let text = model.buffer.line_at(line).unwrap_or_default();

    let mut x = 0;
    for (col, ch) in text.chars().enumerate() {
        let w = ch.width().unwrap_or(0);
        if target < x + w.max(1) {
            return Some((line, col));
        }
        x += w;
    }
    Some((line, text.chars().count()))
}
