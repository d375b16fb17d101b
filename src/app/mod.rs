//! Application state and main event loop.
//!
//! This module implements The Elm Architecture (TEA):
//! - [`Model`]: The complete application state
//! - [`Message`]: All possible events and actions
//! - [`update`]: Pure function for state transitions
//! - [`App::run`]: Main event loop with rendering
//!
//! Focus changes requested by a transition are queued on the model and
//! applied by the event loop on its next iteration.

mod event_loop;
mod input;
mod model;
mod update;

pub use model::{FocusRequest, Mode, Model, ToastLevel, load_text};
pub use update::{Message, Motion, update};

use std::path::PathBuf;

use crate::ui::style::Theme;

/// Main application struct that owns the terminal and runs the event loop.
pub struct App {
    file_path: Option<PathBuf>,
    start_in_preview: bool,
    toolbar_visible: bool,
    theme: Theme,
}

impl App {
    /// Create a new application, optionally backed by a file.
    pub fn new(file_path: Option<PathBuf>) -> Self {
        Self {
            file_path,
            start_in_preview: false,
            toolbar_visible: true,
            theme: Theme::default(),
        }
    }

    /// Open in preview mode instead of editing.
    pub const fn with_preview(mut self, enabled: bool) -> Self {
        self.start_in_preview = enabled;
        self
    }

    /// Show or hide the formatting toolbar row.
    pub const fn with_toolbar_visible(mut self, visible: bool) -> Self {
        self.toolbar_visible = visible;
        self
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }
}

#[cfg(test)]
mod tests;
