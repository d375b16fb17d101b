use crate::selection::SelectionRange;

/// An editable text view as the formatting shell sees it.
///
/// Holds the edit buffer, reports the current selection, and accepts a
/// full-text replace. Focus is a flag the host toggles; acquiring it is
/// deferred by the event loop rather than done inline.
pub trait TextSurface {
    fn text(&self) -> String;

    fn selection(&self) -> SelectionRange;

    /// Replace the whole buffer. Implementations drop the selection.
    fn set_text(&mut self, text: &str);

    /// Select `range`; out-of-bounds ranges are clamped.
    fn set_selection(&mut self, range: SelectionRange);

    fn request_focus(&mut self);

    fn release_focus(&mut self);

    fn has_focus(&self) -> bool;
}
