//! Theming and color definitions.
//!
//! Maps the preview renderer's block and span attributes onto terminal
//! styles. Uses ANSI colors that adapt to the terminal's color palette.

use ratatui::style::{Color, Modifier, Style};

use crate::preview::{BlockStyle, SpanStyle};

/// Theme configuration for the entire application.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Heading level 1 style
    pub h1: Style,
    /// Heading level 2 style
    pub h2: Style,
    /// Heading level 3 style
    pub h3: Style,
    /// Heading level 4+ style
    pub h4: Style,
    /// Code block style
    pub code: Style,
    /// Inline code style
    pub inline_code: Style,
    /// Block quote gutter style
    pub quote: Style,
    /// Link style
    pub link: Style,
    /// Emphasis (italic) style
    pub emphasis: Style,
    /// Strong (bold) style
    pub strong: Style,
    /// Strikethrough style
    pub strikethrough: Style,
    /// Table row style
    pub table: Style,
    /// Horizontal rule style
    pub hr: Style,
    /// Selected text in the editor
    pub selection: Style,
    /// Line number gutter in the editor
    pub gutter: Style,
    /// Toolbar button style
    pub button: Style,
    /// Status bar background
    pub status_bg: Color,
    /// Status bar foreground
    pub status_fg: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            h1: Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            h2: Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
            h3: Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
            h4: Style::default()
                .fg(Color::Blue)
                .add_modifier(Modifier::BOLD),
            code: Style::default().fg(Color::Indexed(245)),
            inline_code: Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            quote: Style::default().fg(Color::Blue),
            link: Style::default()
                .fg(Color::LightBlue)
                .add_modifier(Modifier::UNDERLINED),
            emphasis: Style::default().add_modifier(Modifier::ITALIC),
            strong: Style::default().add_modifier(Modifier::BOLD),
            strikethrough: Style::default().add_modifier(Modifier::CROSSED_OUT),
            table: Style::default().fg(Color::Indexed(250)),
            hr: Style::default().fg(Color::Indexed(240)),
            selection: Style::default().bg(Color::Indexed(24)).fg(Color::White),
            gutter: Style::default().fg(Color::DarkGray),
            button: Style::default().bg(Color::Blue).fg(Color::White),
            status_bg: Color::Indexed(236), // Dark gray that works on both
            status_fg: Color::Indexed(252), // Light gray
        }
    }
}

impl Theme {
    /// Create a theme optimized for dark terminals.
    pub fn dark() -> Self {
        Self::default()
    }

    /// Create a theme optimized for light terminals.
    pub fn light() -> Self {
        Self {
            h1: Style::default()
                .fg(Color::Indexed(31)) // Darker cyan
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            h2: Style::default()
                .fg(Color::Indexed(28)) // Darker green
                .add_modifier(Modifier::BOLD),
            h3: Style::default()
                .fg(Color::Indexed(136)) // Darker yellow/olive
                .add_modifier(Modifier::BOLD),
            h4: Style::default()
                .fg(Color::Indexed(25)) // Darker blue
                .add_modifier(Modifier::BOLD),
            code: Style::default().fg(Color::Indexed(240)),
            inline_code: Style::default()
                .fg(Color::Indexed(124)) // Darker red
                .add_modifier(Modifier::BOLD),
            quote: Style::default().fg(Color::Indexed(25)),
            link: Style::default()
                .fg(Color::Indexed(25))
                .add_modifier(Modifier::UNDERLINED),
            emphasis: Style::default().add_modifier(Modifier::ITALIC),
            strong: Style::default().add_modifier(Modifier::BOLD),
            strikethrough: Style::default().add_modifier(Modifier::CROSSED_OUT),
            table: Style::default().fg(Color::Indexed(238)),
            hr: Style::default().fg(Color::Indexed(245)),
            selection: Style::default().bg(Color::Indexed(153)).fg(Color::Black),
            gutter: Style::default().fg(Color::Indexed(245)),
            button: Style::default().bg(Color::Indexed(25)).fg(Color::White),
            status_bg: Color::Indexed(252),
            status_fg: Color::Indexed(235),
        }
    }

    /// Pick a theme from the `COLORFGBG` convention (`"fg;bg"`).
    ///
    /// Falls back to the dark theme when the variable is missing.
    pub fn detect() -> Self {
        if is_light_colorfgbg(std::env::var("COLORFGBG").ok().as_deref()) {
            Self::light()
        } else {
            Self::dark()
        }
    }

    /// Style for a whole preview line.
    pub const fn block(&self, block: BlockStyle) -> Style {
        match block {
            BlockStyle::Heading(1) => self.h1,
            BlockStyle::Heading(2) => self.h2,
            BlockStyle::Heading(3) => self.h3,
            BlockStyle::Heading(_) => self.h4,
            BlockStyle::Code => self.code,
            BlockStyle::Table => self.table,
            BlockStyle::Rule => self.hr,
            BlockStyle::Blank | BlockStyle::Paragraph | BlockStyle::ListItem => Style::new(),
        }
    }

    /// Style for an inline span, merged with its line's base style.
    pub fn inline(&self, base: Style, span: SpanStyle) -> Style {
        if span.is_plain() {
            return base;
        }
        let mut style = base;
        if span.italic {
            style = style.patch(self.emphasis);
        }
        if span.bold {
            style = style.patch(self.strong);
        }
        if span.strikethrough {
            style = style.patch(self.strikethrough);
        }
        if span.link {
            style = style.patch(self.link);
        }
        if span.code {
            style = style.patch(self.inline_code);
        }
        style
    }
}

fn is_light_colorfgbg(value: Option<&str>) -> bool {
    value
        .and_then(|v| v.rsplit(';').next())
        .and_then(|bg| bg.trim().parse::<u8>().ok())
        .is_some_and(|bg| bg == 7 || bg >= 9)
}
