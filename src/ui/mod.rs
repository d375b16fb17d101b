//! Terminal UI components.
//!
//! This module contains all UI-related code including:
//! - [`style`]: Theming and colors
//! - the formatting toolbar, editor and preview panes, status and toast bars

pub mod style;

mod render;
mod status;
mod toolbar;

pub use render::{ScreenLayout, editor_position_at, line_number_width, render, screen_layout};
pub use toolbar::{ToolbarAction, ToolbarButton, toolbar_action_at, toolbar_buttons};

pub const DOCUMENT_LEFT_PADDING: u16 = 2;
