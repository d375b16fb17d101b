//! Styled output of the preview renderer.

/// Inline attributes carried by a span.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SpanStyle {
    pub bold: bool,
    pub italic: bool,
    pub strikethrough: bool,
    pub code: bool,
    pub link: bool,
}

impl SpanStyle {
    pub const fn is_plain(&self) -> bool {
        !(self.bold || self.italic || self.strikethrough || self.code || self.link)
    }
}

/// A run of text sharing one [`SpanStyle`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyledSpan {
    pub text: String,
    pub style: SpanStyle,
}

impl StyledSpan {
    pub fn new(text: impl Into<String>, style: SpanStyle) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }

    pub fn plain(text: impl Into<String>) -> Self {
        Self::new(text, SpanStyle::default())
    }
}

/// Block-level styling of a rendered line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockStyle {
    Blank,
    Paragraph,
    Heading(u8),
    ListItem,
    Code,
    Table,
    Rule,
}

/// One display line of the preview.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyledLine {
    pub block: BlockStyle,
    /// Block-quote nesting; drawn as a gutter, not part of the text.
    pub quote_depth: usize,
    pub spans: Vec<StyledSpan>,
}

impl StyledLine {
    pub const fn new(block: BlockStyle, spans: Vec<StyledSpan>) -> Self {
        Self {
            block,
            quote_depth: 0,
            spans,
        }
    }

    pub const fn blank() -> Self {
        Self::new(BlockStyle::Blank, Vec::new())
    }

    /// The line's text with every attribute dropped.
    pub fn plain_text(&self) -> String {
        self.spans.iter().map(|span| span.text.as_str()).collect()
    }
}

/// A rendered markdown document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyledText {
    lines: Vec<StyledLine>,
}

impl StyledText {
    pub const fn new(lines: Vec<StyledLine>) -> Self {
        Self { lines }
    }

    pub fn lines(&self) -> &[StyledLine] {
        &self.lines
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}
