use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use anyhow::{Context, Result, bail};

use crate::editor::{EditorBuffer, TextSurface};
use crate::format::{Formatter, MarkdownFormatter, Marker};
use crate::preview::{ComrakRenderer, MarkdownRenderer, StyledText, strip_presentation_only};
use crate::ui::style::Theme;

/// Which face of the document is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Raw markdown source, editable.
    Editing,
    /// Rendered, read-only.
    Preview,
}

/// A focus change waiting for the next event-loop iteration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusRequest {
    Acquire,
    Release,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Info,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
struct Toast {
    level: ToastLevel,
    message: String,
    expires_at: Instant,
}

/// The complete application state.
///
/// All state lives here - no global or scattered state. The formatting
/// engine and the preview renderer are injected so the shell never
/// depends on a concrete implementation.
pub struct Model {
    /// The document text with cursor and selection
    pub buffer: EditorBuffer,
    /// Current mode
    pub mode: Mode,
    /// Rendered document while in preview
    pub preview: Option<StyledText>,
    formatter: Box<dyn Formatter>,
    renderer: Box<dyn MarkdownRenderer>,
    pending_focus: Option<FocusRequest>,
    toast: Option<Toast>,
    /// File the buffer is saved to, if any
    pub file_path: Option<PathBuf>,
    /// Colors for the preview, toolbar and status bar
    pub theme: Theme,
    /// Whether the formatting toolbar row is drawn
    pub toolbar_visible: bool,
    /// Whether the app should quit
    pub should_quit: bool,
    /// Set after first quit attempt with unsaved changes; allows second quit to proceed
    pub quit_confirmed: bool,
    /// Line index of the first visible editor line
    pub editor_scroll_offset: usize,
    /// Line index of the first visible preview line
    pub preview_scroll_offset: usize,
    /// Terminal width in columns
    pub width: u16,
    /// Terminal height in rows
    pub height: u16,
}

impl std::fmt::Debug for Model {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Model")
            .field("mode", &self.mode)
            .field("file_path", &self.file_path)
            .field("buffer", &self.buffer)
            .field("pending_focus", &self.pending_focus)
            .finish_non_exhaustive()
    }
}

impl Model {
    /// Create a model in editing mode holding `text`.
    ///
    /// Focus is not taken immediately; an acquisition is queued for the
    /// event loop.
    pub fn new(text: &str, terminal_size: (u16, u16)) -> Self {
        Self {
            buffer: EditorBuffer::from_text(text),
            mode: Mode::Editing,
            preview: None,
            formatter: Box::new(MarkdownFormatter),
            renderer: Box::new(ComrakRenderer),
            pending_focus: Some(FocusRequest::Acquire),
            toast: None,
            file_path: None,
            theme: Theme::default(),
            toolbar_visible: true,
            should_quit: false,
            quit_confirmed: false,
            editor_scroll_offset: 0,
            preview_scroll_offset: 0,
            width: terminal_size.0,
            height: terminal_size.1,
        }
    }

    pub fn with_formatter(mut self, formatter: Box<dyn Formatter>) -> Self {
        self.formatter = formatter;
        self
    }

    pub fn with_renderer(mut self, renderer: Box<dyn MarkdownRenderer>) -> Self {
        self.renderer = renderer;
        self
    }

    pub fn with_file_path(mut self, path: Option<PathBuf>) -> Self {
        self.file_path = path;
        self
    }

    /// Markers offered on the toolbar, in order.
    pub fn markers(&self) -> &[Marker] {
        self.formatter.markers()
    }

    pub fn is_dirty(&self) -> bool {
        self.buffer.is_dirty()
    }

    /// Rows available to the editor or preview pane.
    pub fn content_rows(&self) -> usize {
        let chrome = 1 + u16::from(self.toolbar_visible) + u16::from(self.toast.is_some());
        usize::from(self.height.saturating_sub(chrome))
    }

    /// Switch to preview: render the current text and queue a focus release.
    pub(super) fn enter_preview(&mut self) {
        if self.mode == Mode::Preview {
            return;
        }
        let styled = self.renderer.render(&self.buffer.text());
        tracing::debug!(lines = styled.line_count(), "entered preview");
        self.preview = Some(styled);
        self.preview_scroll_offset = 0;
        self.mode = Mode::Preview;
        self.pending_focus = Some(FocusRequest::Release);
    }

    /// Switch to editing: drop the rendered presentation and queue focus.
    ///
    /// The preview is stripped exactly once here; its plain text feeds the
    /// rendered word count shown on return to the source. The editor itself
    /// always draws the buffer.
    pub(super) fn enter_editing(&mut self) {
        if self.mode == Mode::Editing {
            return;
        }
        if let Some(styled) = self.preview.take() {
            let plain = strip_presentation_only(&styled);
            let words = plain.split_whitespace().count();
            tracing::debug!(
                words,
                source_chars = self.buffer.char_count(),
                "stripped preview presentation"
            );
            self.show_toast(ToastLevel::Info, format!("Editing source ({words} rendered words)"));
        }
        self.mode = Mode::Editing;
        self.pending_focus = Some(FocusRequest::Acquire);
    }

    /// Run `marker` over the current selection.
    ///
    /// On success the new text is installed and the replacement span is
    /// selected, so invoking the same marker again toggles it back.
    pub(super) fn apply_format(&mut self, marker: Marker) {
        if self.mode != Mode::Editing {
            tracing::debug!(marker = marker.name(), "formatting ignored outside editing");
            self.show_toast(ToastLevel::Info, "Formatting is only available while editing");
            return;
        }
        let text = TextSurface::text(&self.buffer);
        let range = TextSurface::selection(&self.buffer);
        let Some(edit) = self.formatter.format(marker, &text, range) else {
            tracing::debug!(marker = marker.name(), %range, "formatting was a no-op");
            return;
        };
        tracing::info!(marker = marker.name(), %range, replaced = %edit.replaced, "applied formatting");
        self.buffer.set_text(&edit.text);
        self.buffer.set_selection(edit.replaced);
    }

    pub const fn pending_focus(&self) -> Option<FocusRequest> {
        self.pending_focus
    }

    /// Apply a queued focus change. Called by the event loop before it
    /// reads the next event, never from inside `update`.
    pub fn apply_pending_focus(&mut self) -> bool {
        let Some(request) = self.pending_focus.take() else {
            return false;
        };
        match request {
            FocusRequest::Acquire => self.buffer.request_focus(),
            FocusRequest::Release => self.buffer.release_focus(),
        }
        tracing::trace!(?request, "applied focus request");
        true
    }

    /// Write the buffer to its file and mark it clean.
    ///
    /// # Errors
    ///
    /// Fails when the model has no file path or the write fails.
    pub fn save(&mut self) -> Result<PathBuf> {
        let Some(path) = self.file_path.clone() else {
            bail!("No file name; start markdraft with a FILE argument to save");
        };
        std::fs::write(&path, self.buffer.text())
            .with_context(|| format!("Failed to write {}", path.display()))?;
        self.buffer.mark_clean();
        tracing::info!(path = %path.display(), "saved");
        Ok(path)
    }

    pub(super) fn show_toast(&mut self, level: ToastLevel, message: impl Into<String>) {
        self.toast = Some(Toast {
            level,
            message: message.into(),
            expires_at: Instant::now() + Duration::from_secs(4),
        });
    }

    pub(super) fn expire_toast(&mut self, now: Instant) -> bool {
        if self
            .toast
            .as_ref()
            .is_some_and(|toast| toast.expires_at <= now)
        {
            self.toast = None;
            return true;
        }
        false
    }

    pub fn active_toast(&self) -> Option<(&str, ToastLevel)> {
        self.toast
            .as_ref()
            .map(|toast| (toast.message.as_str(), toast.level))
    }
}

impl Default for Model {
    fn default() -> Self {
        Self::new("", (80, 24))
    }
}

/// Read the initial document text; a missing file starts empty.
///
/// # Errors
///
/// Fails when the file exists but cannot be read as UTF-8 text.
pub fn load_text(path: &Path) -> Result<String> {
    if !path.exists() {
        tracing::info!(path = %path.display(), "new file");
        return Ok(String::new());
    }
    std::fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}
