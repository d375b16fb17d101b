//! Preview rendering.
//!
//! The editor hands the whole document text to a [`MarkdownRenderer`] when
//! it enters preview mode and gets back [`StyledText`]. When editing resumes,
//! [`strip_presentation_only`] drops everything the renderer added so the
//! editing surface only ever shows the literal source.

mod renderer;
mod styled;

pub use renderer::ComrakRenderer;
pub use styled::{BlockStyle, SpanStyle, StyledLine, StyledSpan, StyledText};

/// Turns markdown source into a styled, read-only representation.
pub trait MarkdownRenderer {
    fn render(&self, text: &str) -> StyledText;
}

/// Drop every renderer-added attribute and return the bare text.
///
/// Inline styles (including strikethrough) and block styling (headings,
/// quote gutters, code and table blocks) are all discarded.
pub fn strip_presentation_only(styled: &StyledText) -> String {
    styled
        .lines()
        .iter()
        .map(StyledLine::plain_text)
        .collect::<Vec<_>>()
        .join("\n")
}
