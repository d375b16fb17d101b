use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::ValueEnum;

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeMode {
    Auto,
    Light,
    Dark,
}

impl ThemeMode {
    fn parse(value: &str) -> Option<Self> {
        <Self as ValueEnum>::from_str(value, true).ok()
    }

    const fn as_str(self) -> &'static str {
        match self {
            Self::Auto => "auto",
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ConfigFlags {
    pub preview: bool,
    pub no_toolbar: bool,
    pub theme: Option<ThemeMode>,
    pub log_file: Option<PathBuf>,
}

impl ConfigFlags {
    pub fn union(&self, other: &Self) -> Self {
        Self {
            preview: self.preview || other.preview,
            no_toolbar: self.no_toolbar || other.no_toolbar,
            theme: other.theme.or(self.theme),
            log_file: other.log_file.clone().or_else(|| self.log_file.clone()),
        }
    }

    /// One flag per line, in the form `parse_flag_tokens` reads back.
    fn to_lines(&self) -> Vec<String> {
        [(self.preview, "--preview"), (self.no_toolbar, "--no-toolbar")]
            .into_iter()
            .filter_map(|(on, flag)| on.then(|| flag.to_string()))
            .chain(self.theme.map(|theme| format!("--theme {}", theme.as_str())))
            .chain(
                self.log_file
                    .as_ref()
                    .map(|path| format!("--log-file {}", path.display())),
            )
            .collect()
    }
}

/// Platform config file: `$XDG_CONFIG_HOME/markdraft/config` (or the
/// macOS / Windows equivalent), falling back to the local file.
pub fn global_config_path() -> PathBuf {
    config_home().map_or_else(local_override_path, |dir| dir.join("markdraft").join("config"))
}

fn config_home() -> Option<PathBuf> {
    let var = |name: &str| std::env::var_os(name).map(PathBuf::from);
    if cfg!(target_os = "windows") {
        var("APPDATA")
    } else if cfg!(target_os = "macos") {
        var("HOME").map(|home| home.join("Library").join("Application Support"))
    } else {
        var("XDG_CONFIG_HOME").or_else(|| var("HOME").map(|home| home.join(".config")))
    }
}

pub fn local_override_path() -> PathBuf {
    PathBuf::from(".markdraftrc")
}

/// Read a flag file. Missing files are empty; `#` starts a comment line.
pub fn load_config_flags(path: &Path) -> Result<ConfigFlags> {
    if !path.exists() {
        return Ok(ConfigFlags::default());
    }
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config {}", path.display()))?;
    let tokens = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.starts_with('#'))
        .flat_map(str::split_whitespace)
        .map(ToOwned::to_owned)
        .collect::<Vec<_>>();
    Ok(parse_flag_tokens(&tokens))
}

pub fn save_config_flags(path: &Path, flags: &ConfigFlags) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create config dir {}", parent.display()))?;
    }
    let mut content = String::from("# markdraft defaults (saved with --save)\n");
    for line in flags.to_lines() {
        content.push_str(&line);
        content.push('\n');
    }
    fs::write(path, content).with_context(|| format!("Failed to write config {}", path.display()))
}

pub fn clear_config_flags(path: &Path) -> Result<()> {
    if path.exists() {
        fs::remove_file(path).with_context(|| format!("Failed to remove {}", path.display()))?;
    }
    Ok(())
}

/// Pick the config flags out of an argument list, ignoring anything else.
///
/// Valued flags accept both `--flag value` and `--flag=value`.
pub fn parse_flag_tokens(tokens: &[String]) -> ConfigFlags {
    let mut flags = ConfigFlags::default();
    let mut tokens = tokens.iter().map(String::as_str);
    while let Some(token) = tokens.next() {
        let (name, inline) = token
            .split_once('=')
            .map_or((token, None), |(name, value)| (name, Some(value)));
        match name {
            "--preview" => flags.preview = true,
            "--no-toolbar" => flags.no_toolbar = true,
            "--theme" => {
                flags.theme = inline.or_else(|| tokens.next()).and_then(ThemeMode::parse);
            }
            "--log-file" => {
                flags.log_file = inline.or_else(|| tokens.next()).map(PathBuf::from);
            }
            _ => {}
        }
    }
    flags
}
