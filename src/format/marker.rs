use std::fmt;

/// How a marker's token is placed around or before the selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerKind {
    /// Token wraps the trimmed selection on both sides and toggles.
    Wrapper,
    /// Token is inserted once before the selection.
    Prefix,
    /// Token is added at the start of every non-blank selected line.
    LinePrefix,
}

/// The closed set of formatting operations offered by the toolbar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Marker {
    Bold,
    Italic,
    Strikethrough,
    Heading,
    BulletList,
}

impl Marker {
    /// All markers in toolbar order.
    pub const ALL: [Self; 5] = [
        Self::Bold,
        Self::Italic,
        Self::Strikethrough,
        Self::Heading,
        Self::BulletList,
    ];

    /// The literal markdown inserted (or removed) by this marker.
    pub const fn token(self) -> &'static str {
        match self {
            Self::Bold => "**",
            Self::Italic => "_",
            Self::Strikethrough => "~~",
            Self::Heading => "# ",
            Self::BulletList => "- ",
        }
    }

    pub const fn kind(self) -> MarkerKind {
        match self {
            Self::Bold | Self::Italic | Self::Strikethrough => MarkerKind::Wrapper,
            Self::Heading => MarkerKind::Prefix,
            Self::BulletList => MarkerKind::LinePrefix,
        }
    }

    /// Short glyph shown on the toolbar button.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Bold => "B",
            Self::Italic => "I",
            Self::Strikethrough => "S",
            Self::Heading => "H",
            Self::BulletList => "•",
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Bold => "bold",
            Self::Italic => "italic",
            Self::Strikethrough => "strikethrough",
            Self::Heading => "heading",
            Self::BulletList => "bullet list",
        }
    }
}

impl fmt::Display for Marker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
