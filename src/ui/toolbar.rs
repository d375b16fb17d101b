//! The formatting toolbar row.
//!
//! Buttons are built from the marker list the model's formatter offers,
//! followed by a mode button ("Done" while editing, "Edit" in preview).

use ratatui::prelude::*;
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

use crate::app::{Mode, Model};
use crate::format::Marker;

/// Gap between adjacent buttons, in columns.
const BUTTON_GAP: u16 = 1;

/// What pressing a toolbar button does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolbarAction {
    Format(Marker),
    Done,
    Edit,
}

/// One laid-out toolbar button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolbarButton {
    pub action: ToolbarAction,
    pub label: String,
    /// Column offset from the toolbar's left edge
    pub x: u16,
    pub width: u16,
}

impl ToolbarButton {
    pub const fn contains(&self, column: u16) -> bool {
        column >= self.x && column < self.x + self.width
    }
}

/// Lay out the toolbar buttons left to right.
pub fn toolbar_buttons(markers: &[Marker], mode: Mode) -> Vec<ToolbarButton> {
    let mode_action = match mode {
        Mode::Editing => (ToolbarAction::Done, "Done".to_string()),
        Mode::Preview => (ToolbarAction::Edit, "Edit".to_string()),
    };
    let entries = markers
        .iter()
        .map(|&m| (ToolbarAction::Format(m), m.label().to_string()))
        .chain(std::iter::once(mode_action));

    let mut x = 0;
    let mut buttons = Vec::new();
    for (action, label) in entries {
        let label = format!(" {label} ");
        let width = u16::try_from(label.width()).unwrap_or(u16::MAX);
        buttons.push(ToolbarButton {
            action,
            label,
            x,
            width,
        });
        x = x.saturating_add(width + BUTTON_GAP);
    }
    buttons
}

/// The action under `column`, if any.
pub fn toolbar_action_at(model: &Model, column: u16) -> Option<ToolbarAction> {
    toolbar_buttons(model.markers(), model.mode)
        .into_iter()
        .find(|button| button.contains(column))
        .map(|button| button.action)
}

pub(super) fn render_toolbar(model: &Model, frame: &mut Frame, area: Rect) {
    let theme = &model.theme;
    let mut spans = Vec::new();
    for button in toolbar_buttons(model.markers(), model.mode) {
        let mut style = theme.button;
        if model.mode == Mode::Preview && matches!(button.action, ToolbarAction::Format(_)) {
            style = style.add_modifier(Modifier::DIM);
        }
        if let ToolbarAction::Format(marker) = button.action {
            style = style.patch(marker_glyph_style(marker));
        }
        if !spans.is_empty() {
            spans.push(Span::raw(" ".repeat(usize::from(BUTTON_GAP))));
        }
        spans.push(Span::styled(button.label, style));
    }
    let bar = Paragraph::new(Line::from(spans))
        .style(Style::default().bg(theme.status_bg).fg(theme.status_fg));
    frame.render_widget(bar, area);
}

/// Show each formatting glyph the way its marker renders.
const fn marker_glyph_style(marker: Marker) -> Style {
    match marker {
        Marker::Bold => Style::new().add_modifier(Modifier::BOLD),
        Marker::Italic => Style::new().add_modifier(Modifier::ITALIC),
        Marker::Strikethrough => Style::new().add_modifier(Modifier::CROSSED_OUT),
        Marker::Heading | Marker::BulletList => Style::new(),
    }
}
