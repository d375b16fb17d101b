use std::io::stdout;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event;
use crossterm::event::{
    DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
};
use crossterm::execute;
use ratatui::DefaultTerminal;

use crate::app::model::{Model, ToastLevel, load_text};
use crate::app::{App, Message, update};

impl App {
    /// Run the main event loop.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, the terminal cannot be
    /// initialized, or the event loop hits an I/O failure.
    pub fn run(&mut self) -> Result<()> {
        let text = match &self.file_path {
            Some(path) => load_text(path)?,
            None => String::new(),
        };

        let mut terminal = ratatui::try_init()
            .context("Failed to initialize terminal; markdraft requires an interactive terminal")?;
        let size = terminal.size()?;

        let mut model = Model::new(&text, (size.width, size.height))
            .with_file_path(self.file_path.clone());
        model.theme = self.theme.clone();
        model.toolbar_visible = self.toolbar_visible;
        if self.start_in_preview {
            model = update(model, Message::EnterPreview);
        }
        tracing::info!(
            file = ?self.file_path,
            chars = model.buffer.char_count(),
            mode = ?model.mode,
            "starting"
        );

        let result = execute!(stdout(), EnableMouseCapture, EnableBracketedPaste)
            .context("Failed to enable mouse capture")
            .and_then(|()| Self::event_loop(&mut terminal, &mut model));

        let _ = execute!(stdout(), DisableBracketedPaste, DisableMouseCapture);
        ratatui::restore();

        result
    }

    fn event_loop(terminal: &mut DefaultTerminal, model: &mut Model) -> Result<()> {
        let mut needs_render = true;

        loop {
            // Focus changes queued by the previous update land here, before
            // the next event is read.
            if model.apply_pending_focus() {
                needs_render = true;
            }

            if model.expire_toast(Instant::now()) {
                needs_render = true;
            }

            if needs_render {
                terminal.draw(|frame| crate::ui::render(model, frame))?;
                needs_render = false;
            }

            if model.should_quit {
                break;
            }

            let poll_ms = if model.active_toast().is_some() { 100 } else { 250 };
            if event::poll(Duration::from_millis(poll_ms))? {
                let msg = Self::handle_event(&event::read()?, model);
                if let Some(msg) = msg {
                    Self::dispatch(model, msg);
                    needs_render = true;
                }

                // Coalesce key repeat bursts into a single render.
                while event::poll(Duration::from_millis(0))? {
                    if let Some(msg) = Self::handle_event(&event::read()?, model) {
                        Self::dispatch(model, msg);
                        needs_render = true;
                    }
                    if model.pending_focus().is_some() {
                        break;
                    }
                }
            }
        }
        Ok(())
    }

    /// Run one message through `update`, then its side effects.
    pub(super) fn dispatch(model: &mut Model, msg: Message) {
        tracing::trace!(?msg, "message");
        let side_msg = msg.clone();
        *model = update(std::mem::take(model), msg);
        Self::handle_message_side_effects(model, &side_msg);
    }

    pub(super) fn handle_message_side_effects(model: &mut Model, msg: &Message) {
        if msg != &Message::Save {
            return;
        }
        match model.save() {
            Ok(path) => {
                let name = path.file_name().map_or_else(
                    || path.display().to_string(),
                    |n| n.to_string_lossy().to_string(),
                );
                model.show_toast(ToastLevel::Info, format!("Saved {name}"));
                if model.quit_confirmed {
                    model.should_quit = true;
                }
            }
            Err(err) => {
                tracing::warn!(error = %err, "save failed");
                model.show_toast(ToastLevel::Error, format!("Save failed: {err:#}"));
            }
        }
    }
}
