//! Selection model shared by the text surface and the formatting engine.
//!
//! A selection is an offset + length pair counted in Unicode scalar values
//! (`char`s), the same unit the rope-backed editor buffer indexes by.

use std::fmt;
use std::ops::Range;

use thiserror::Error;

/// The user's highlighted span inside the document text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct SelectionRange {
    /// Char offset of the first selected character.
    pub location: usize,
    /// Number of selected chars. Zero means a bare caret.
    pub length: usize,
}

/// Why a selection cannot be applied to a given text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RangeError {
    #[error("selection is a caret with no span")]
    Empty,
    #[error("selection end overflows")]
    Overflow,
    #[error("selection ends at {end} but the text has {len} chars")]
    OutOfBounds { end: usize, len: usize },
}

impl SelectionRange {
    pub const fn new(location: usize, length: usize) -> Self {
        Self { location, length }
    }

    /// A zero-length selection at `location`.
    pub const fn caret(location: usize) -> Self {
        Self::new(location, 0)
    }

    /// Build a selection from two char offsets in either order.
    pub const fn between(a: usize, b: usize) -> Self {
        if a <= b {
            Self::new(a, b - a)
        } else {
            Self::new(b, a - b)
        }
    }

    pub const fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// Whether the char at `idx` lies inside the selected span.
    pub const fn contains(&self, idx: usize) -> bool {
        match self.end() {
            Some(end) => idx >= self.location && idx < end,
            None => idx >= self.location,
        }
    }

    /// Exclusive end offset, or `None` when it does not fit in `usize`.
    pub const fn end(&self) -> Option<usize> {
        self.location.checked_add(self.length)
    }

    /// Map the selection onto a byte range of `text`.
    ///
    /// The range is validated against the text before any slicing happens.
    ///
    /// # Errors
    ///
    /// Returns [`RangeError::Empty`] for a caret, [`RangeError::Overflow`]
    /// when `location + length` overflows, and [`RangeError::OutOfBounds`]
    /// when the span reaches past the end of `text`.
    pub fn resolve(&self, text: &str) -> Result<Range<usize>, RangeError> {
        if self.is_empty() {
            return Err(RangeError::Empty);
        }
        let end = self.end().ok_or(RangeError::Overflow)?;
        let len = text.chars().count();
        if end > len {
            return Err(RangeError::OutOfBounds { end, len });
        }
        Ok(char_to_byte(text, self.location)..char_to_byte(text, end))
    }

    /// Clamp the selection so it fits inside a text of `len` chars.
    pub fn clamp_to(&self, len: usize) -> Self {
        let location = self.location.min(len);
        let end = self.end().unwrap_or(usize::MAX).min(len);
        Self::new(location, end - location)
    }
}

impl fmt::Display for SelectionRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}+{}", self.location, self.length)
    }
}

/// Byte offset of the char at `char_idx`, or `text.len()` past the end.
pub(crate) fn char_to_byte(text: &str, char_idx: usize) -> usize {
    text.char_indices()
        .nth(char_idx)
        .map_or(text.len(), |(byte, _)| byte)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_ascii_range() {
        let range = SelectionRange::new(6, 5);
        assert_eq!(range.resolve("Hello world"), Ok(6..11));
    }

    #[test]
    fn test_resolve_counts_chars_not_bytes() {
        // 'é' is two bytes
        let range = SelectionRange::new(3, 2);
        let span = range.resolve("café au lait").unwrap();
        assert_eq!(&"café au lait"[span], "é ");
    }

    #[test]
    fn test_resolve_rejects_caret() {
        assert_eq!(
            SelectionRange::caret(2).resolve("hello"),
            Err(RangeError::Empty)
        );
    }

    #[test]
    fn test_resolve_rejects_range_past_end() {
        assert_eq!(
            SelectionRange::new(3, 4).resolve("hello"),
            Err(RangeError::OutOfBounds { end: 7, len: 5 })
        );
    }

    #[test]
    fn test_resolve_rejects_overflow() {
        assert_eq!(
            SelectionRange::new(usize::MAX, 2).resolve("hello"),
            Err(RangeError::Overflow)
        );
    }

    #[test]
    fn test_resolve_whole_text() {
        assert_eq!(SelectionRange::new(0, 5).resolve("hello"), Ok(0..5));
    }

    #[test]
    fn test_between_orders_offsets() {
        assert_eq!(SelectionRange::between(7, 2), SelectionRange::new(2, 5));
        assert_eq!(SelectionRange::between(2, 7), SelectionRange::new(2, 5));
    }

    #[test]
    fn test_clamp_to_shrinks_span() {
        assert_eq!(
            SelectionRange::new(3, 10).clamp_to(5),
            SelectionRange::new(3, 2)
        );
        assert_eq!(SelectionRange::new(9, 1).clamp_to(5), SelectionRange::caret(5));
    }

    #[test]
    fn test_contains_is_half_open() {
        let range = SelectionRange::new(2, 3);
        assert!(!range.contains(1));
        assert!(range.contains(2));
        assert!(range.contains(4));
        assert!(!range.contains(5));
        assert!(!SelectionRange::caret(2).contains(2));
    }

    #[test]
    fn test_display_format() {
        assert_eq!(SelectionRange::new(4, 2).to_string(), "4+2");
    }
}
