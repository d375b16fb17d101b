//! Selection-scoped markdown formatting.
//!
//! Every operation is a pure function of (document text, selection,
//! marker) that returns the new document text. Operations never fail:
//! a caret selection or a range that does not fit the text leaves the
//! input unchanged.
//!
//! - [`toggle_wrapper`]: bold / italic / strikethrough, applied or removed
//! - [`apply_heading`]: additive `"# "` prefix
//! - [`apply_list`]: idempotent `"- "` prefix on each non-blank line

mod block;
mod inline;
mod marker;

use std::ops::Range;

use crate::selection::SelectionRange;

pub use block::{apply_heading, apply_heading_edit, apply_list, apply_list_edit};
pub use inline::{toggle_wrapper, toggle_wrapper_edit};
pub use marker::{Marker, MarkerKind};

/// Result of a formatting operation that changed the text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edit {
    /// The complete new document text.
    pub text: String,
    /// Where the replacement sits in `text`.
    pub replaced: SelectionRange,
}

impl Edit {
    /// Replace the byte span `span` of `text` with `replacement`.
    ///
    /// `location` is the char offset of `span.start`.
    fn splice(text: &str, span: Range<usize>, location: usize, replacement: &str) -> Self {
        let mut out = String::with_capacity(text.len() - span.len() + replacement.len());
        out.push_str(&text[..span.start]);
        out.push_str(replacement);
        out.push_str(&text[span.end..]);
        Self {
            text: out,
            replaced: SelectionRange::new(location, replacement.chars().count()),
        }
    }
}

/// Validate `range` against `text`, logging why it was rejected.
fn resolve_for(op: &str, text: &str, range: SelectionRange) -> Option<Range<usize>> {
    match range.resolve(text) {
        Ok(span) => Some(span),
        Err(err) => {
            tracing::debug!(op, %range, %err, "formatting skipped");
            None
        }
    }
}

/// Apply `marker` to the selection, returning the new document text.
pub fn apply(marker: Marker, text: &str, range: SelectionRange) -> String {
    apply_edit(marker, text, range).map_or_else(|| text.to_string(), |edit| edit.text)
}

/// Apply `marker` to the selection, or `None` when it is a no-op.
pub fn apply_edit(marker: Marker, text: &str, range: SelectionRange) -> Option<Edit> {
    match marker.kind() {
        MarkerKind::Wrapper => toggle_wrapper_edit(text, range, marker.token()),
        MarkerKind::Prefix => apply_heading_edit(text, range),
        MarkerKind::LinePrefix => apply_list_edit(text, range),
    }
}

/// The formatting engine as seen by the editor shell.
///
/// The shell holds a `Box<dyn Formatter>` and never calls the free
/// functions directly, so alternative engines can be swapped in.
pub trait Formatter {
    /// Apply `marker` to `range` of `text`. `None` means nothing changed.
    fn format(&self, marker: Marker, text: &str, range: SelectionRange) -> Option<Edit>;

    /// Markers this engine offers, in toolbar order.
    fn markers(&self) -> &[Marker] {
        &Marker::ALL
    }
}

/// The standard markdown formatting engine.
#[derive(Debug, Clone, Copy, Default)]
pub struct MarkdownFormatter;

impl Formatter for MarkdownFormatter {
    fn format(&self, marker: Marker, text: &str, range: SelectionRange) -> Option<Edit> {
        apply_edit(marker, text, range)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_dispatches_by_marker() {
        let range = SelectionRange::new(0, 3);
        assert_eq!(apply(Marker::Bold, "abc", range), "**abc**");
        assert_eq!(apply(Marker::Italic, "abc", range), "_abc_");
        assert_eq!(apply(Marker::Strikethrough, "abc", range), "~~abc~~");
        assert_eq!(apply(Marker::Heading, "abc", range), "# abc");
        assert_eq!(apply(Marker::BulletList, "abc", range), "- abc");
    }

    #[test]
    fn test_every_marker_is_noop_on_caret() {
        for marker in Marker::ALL {
            assert_eq!(apply(marker, "some text", SelectionRange::caret(4)), "some text");
            assert!(apply_edit(marker, "some text", SelectionRange::caret(4)).is_none());
        }
    }

    #[test]
    fn test_every_marker_is_noop_on_empty_text() {
        for marker in Marker::ALL {
            assert_eq!(apply(marker, "", SelectionRange::new(0, 1)), "");
        }
    }

    #[test]
    fn test_splice_keeps_surrounding_text() {
        let edit = Edit::splice("héllo wörld", 7..13, 6, "WORLD");
        assert_eq!(edit.text, "héllo WORLD");
        assert_eq!(edit.replaced, SelectionRange::new(6, 5));
    }

    #[test]
    fn test_markdown_formatter_offers_all_markers() {
        let formatter = MarkdownFormatter;
        assert_eq!(formatter.markers(), &Marker::ALL);
        let edit = formatter
            .format(Marker::Bold, "hi", SelectionRange::new(0, 2))
            .unwrap();
        assert_eq!(edit.text, "**hi**");
    }
}
