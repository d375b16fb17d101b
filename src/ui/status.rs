use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

use crate::app::{Mode, Model, ToastLevel};

fn display_name(model: &Model) -> String {
    model
        .file_path
        .as_deref()
        .and_then(std::path::Path::file_name)
        .map_or_else(|| "untitled".to_string(), |s| s.to_string_lossy().to_string())
}

pub fn render_status_bar(model: &Model, frame: &mut Frame, area: Rect) {
    let filename = display_name(model);
    let dirty_indicator = if model.is_dirty() { " [modified]" } else { "" };

    let status = match model.mode {
        Mode::Editing => {
            let c = model.buffer.cursor();
            let col = model.buffer.cursor_char_idx() - model.buffer.line_start_char(c.line);
            let selection = model.buffer.selection();
            let selection_info = if selection.is_empty() {
                String::new()
            } else {
                format!("  Sel {} chars", selection.length)
            };
            format!(
                " EDIT  {filename}{dirty_indicator}  Ln {}, Col {}{selection_info}  F1-F5:format  Esc:done  Ctrl+S:save",
                c.line + 1,
                col + 1
            )
        }
        Mode::Preview => {
            let total = model.preview.as_ref().map_or(0, |p| p.line_count());
            format!(
                " PREVIEW  {filename}{dirty_indicator}  Line {}/{}  e:edit  Ctrl+Q:quit",
                (model.preview_scroll_offset + 1).min(total.max(1)),
                total
            )
        }
    };

    let style = match model.mode {
        Mode::Editing => Style::default().bg(Color::Magenta).fg(Color::White),
        Mode::Preview => Style::default()
            .bg(model.theme.status_bg)
            .fg(model.theme.status_fg),
    };
    frame.render_widget(Paragraph::new(status).style(style), area);
}

pub fn render_toast_bar(model: &Model, frame: &mut Frame, area: Rect) {
    let Some((message, level)) = model.active_toast() else {
        return;
    };
    let (prefix, style) = match level {
        ToastLevel::Info => (
            "[info]",
            Style::default().bg(Color::DarkGray).fg(Color::White),
        ),
        ToastLevel::Warning => (
            "[warn]",
            Style::default().bg(Color::Yellow).fg(Color::Black),
        ),
        ToastLevel::Error => ("[error]", Style::default().bg(Color::Red).fg(Color::White)),
    };
    let toast = Paragraph::new(format!("{prefix} {message}")).style(style);
    frame.render_widget(toast, area);
}
