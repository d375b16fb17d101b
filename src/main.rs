//! Markdraft - A terminal markdown drafting surface.
//!
//! # Usage
//!
//! ```bash
//! markdraft notes.md
//! markdraft --preview README.md
//! markdraft --no-toolbar --theme light draft.md
//! ```

use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use tracing_subscriber::EnvFilter;

use markdraft::app::App;
use markdraft::config::{
    ConfigFlags, ThemeMode, clear_config_flags, global_config_path, load_config_flags,
    local_override_path, parse_flag_tokens, save_config_flags,
};
use markdraft::ui::style::Theme;

/// A terminal markdown drafting surface with a formatting toolbar
#[derive(Parser, Debug)]
#[command(name = "markdraft", version, about, long_about = None)]
struct Cli {
    /// Markdown file to edit (created on first save if missing)
    #[arg(value_name = "FILE")]
    file: Option<PathBuf>,

    /// Open in preview mode
    #[arg(long)]
    preview: bool,

    /// Hide the formatting toolbar row
    #[arg(long)]
    no_toolbar: bool,

    /// Color theme for the preview and toolbar
    #[arg(long, value_enum, default_value = "auto")]
    theme: ThemeMode,

    /// Write logs to a file (the terminal is owned by the UI)
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Save current command-line flags as defaults
    #[arg(long)]
    save: bool,

    /// Clear saved defaults
    #[arg(long)]
    clear: bool,
}

// Query the terminal background using OSC 11.
// We talk to /dev/tty so the terminal responds even when stdout is piped.
#[cfg(not(unix))]
fn query_terminal_background() -> std::io::Result<Option<(u8, u8, u8)>> {
    Ok(None)
}

#[cfg(unix)]
fn query_terminal_background() -> std::io::Result<Option<(u8, u8, u8)>> {
    use std::io::{Read, Write};
    use std::sync::mpsc;

    let (tx, rx) = mpsc::channel();

    let mut io = std::fs::OpenOptions::new()
        .read(true)
        .write(true)
        .open("/dev/tty")?;
    let reader = io.try_clone()?;

    // OSC 11 query: ESC ] 11 ; ? BEL
    io.write_all(b"\x1b]11;?\x07")?;
    io.flush()?;

    std::thread::spawn(move || {
        let mut reader = reader;
        let mut buf = [0u8; 256];
        let mut collected: Vec<u8> = Vec::new();
        loop {
            match reader.read(&mut buf) {
                Ok(0) => continue,
                Ok(n) => {
                    collected.extend_from_slice(&buf[..n]);
                    if collected.contains(&b'\x07') || collected.windows(2).any(|w| w == b"\x1b\\")
                    {
                        let _ = tx.send(collected);
                        break;
                    }
                }
                Err(_) => break,
            }
        }
    });

    let reply = rx
        .recv_timeout(Duration::from_millis(75))
        .map(|bytes| String::from_utf8_lossy(&bytes).into_owned())
        .ok();
    Ok(reply.as_deref().and_then(parse_osc11_reply))
}

fn is_light_rgb(r: u8, g: u8, b: u8) -> bool {
    let luma = 0.0722_f32.mul_add(
        f32::from(b),
        0.2126_f32.mul_add(f32::from(r), 0.7152 * f32::from(g)),
    );
    luma >= 140.0
}

/// Ask the terminal for its background, falling back to `COLORFGBG`.
fn detect_theme() -> Theme {
    let _raw = enable_raw_mode();
    let result = query_terminal_background();
    let _ = disable_raw_mode();
    match result.ok().flatten() {
        Some((r, g, b)) if is_light_rgb(r, g, b) => Theme::light(),
        Some(_) => Theme::dark(),
        None => Theme::detect(),
    }
}

fn parse_osc11_reply(reply: &str) -> Option<(u8, u8, u8)> {
    // Expect: ESC ] 11 ; rgb:RRRR/GGGG/BBBB BEL or ST
    let start = reply.find("rgb:")?;
    let data = &reply[start + 4..];
    let mut parts = data.split(['/', '\x07', '\x1b']);
    let r = parts.next()?;
    let g = parts.next()?;
    let b = parts.next()?;
    Some((
        parse_osc_component(r)?,
        parse_osc_component(g)?,
        parse_osc_component(b)?,
    ))
}

fn parse_osc_component(s: &str) -> Option<u8> {
    let hex = s.trim();
    if hex.len() >= 4 {
        let v = u16::from_str_radix(hex.get(..4)?, 16).ok()?;
        u8::try_from(v >> 8).ok()
    } else if hex.len() == 2 {
        u8::from_str_radix(hex, 16).ok()
    } else {
        None
    }
}

/// Logs go to stderr at WARN, or to `log_file` at INFO.
fn init_logging(log_file: Option<&Path>) -> Result<()> {
    match log_file {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create log file {}", path.display()))?;
            tracing_subscriber::fmt()
                .with_env_filter(
                    EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()),
                )
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .init();
        }
        None => {
            tracing_subscriber::fmt()
                .with_env_filter(
                    EnvFilter::from_default_env().add_directive(tracing::Level::WARN.into()),
                )
                .init();
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    let raw_args = std::env::args().collect::<Vec<_>>();
    let cli = Cli::parse();
    let global_path = global_config_path();
    let local_path = local_override_path();
    let cli_flags = parse_flag_tokens(&raw_args);

    if cli.clear {
        clear_config_flags(&global_path)?;
    }
    if cli.save {
        save_config_flags(&global_path, &cli_flags)?;
    }

    let file_flags = if cli.clear {
        ConfigFlags::default()
    } else {
        let global_flags = load_config_flags(&global_path)?;
        let local_flags = load_config_flags(&local_path)?;
        global_flags.union(&local_flags)
    };
    let effective = file_flags.union(&cli_flags);

    init_logging(effective.log_file.as_deref())?;
    tracing::debug!(?effective, "resolved flags");

    let theme = match effective.theme.unwrap_or(ThemeMode::Auto) {
        ThemeMode::Auto => detect_theme(),
        ThemeMode::Light => Theme::light(),
        ThemeMode::Dark => Theme::dark(),
    };

    if let Some(path) = &cli.file
        && path.is_dir()
    {
        anyhow::bail!("Not a file: {}", path.display());
    }

    let mut app = App::new(cli.file)
        .with_preview(effective.preview)
        .with_toolbar_visible(!effective.no_toolbar)
        .with_theme(theme);

    app.run().context("Application error")
}
