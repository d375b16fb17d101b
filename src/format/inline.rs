//! Inline wrapper toggle for bold, italic and strikethrough.

use crate::selection::SelectionRange;

use super::{Edit, resolve_for};

/// Wrap the trimmed selection in `wrapper`, or unwrap it when it is already
/// wrapped. Returns `text` unchanged when the selection cannot be applied.
pub fn toggle_wrapper(text: &str, range: SelectionRange, wrapper: &str) -> String {
    toggle_wrapper_edit(text, range, wrapper).map_or_else(|| text.to_string(), |edit| edit.text)
}

/// Like [`toggle_wrapper`], but also reports where the replacement landed.
///
/// Whitespace around the trimmed core of the selection is dropped from the
/// replaced span in both directions.
pub fn toggle_wrapper_edit(text: &str, range: SelectionRange, wrapper: &str) -> Option<Edit> {
    if wrapper.is_empty() {
        return None;
    }
    let span = resolve_for("toggle_wrapper", text, range)?;
    let core = text[span.clone()].trim();

    let replacement = match unwrap(core, wrapper) {
        Some(inner) => {
            tracing::debug!(%range, wrapper, "removing wrapper");
            inner.to_string()
        }
        None => {
            tracing::debug!(%range, wrapper, "applying wrapper");
            format!("{wrapper}{core}{wrapper}")
        }
    };
    Some(Edit::splice(text, span, range.location, &replacement))
}

/// Strip one `wrapper` from each end of `core`.
///
/// The prefix and suffix must not share characters, so `"**"` is not
/// considered bold-wrapped.
fn unwrap<'a>(core: &'a str, wrapper: &str) -> Option<&'a str> {
    if core.chars().count() < 2 * wrapper.chars().count() {
        return None;
    }
    core.strip_prefix(wrapper)?.strip_suffix(wrapper)
}
