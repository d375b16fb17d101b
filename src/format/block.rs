//! Block-level markers: heading prefix and bullet list.

use std::borrow::Cow;

use crate::selection::SelectionRange;

use super::{Edit, resolve_for};

const HEADING_PREFIX: &str = "# ";
const BULLET_PREFIX: &str = "- ";

/// Insert `"# "` before the first selected character.
///
/// Always additive: applying it to an existing heading nests another prefix.
pub fn apply_heading(text: &str, range: SelectionRange) -> String {
    apply_heading_edit(text, range).map_or_else(|| text.to_string(), |edit| edit.text)
}

/// Like [`apply_heading`], returning the span the prefixed text occupies.
pub fn apply_heading_edit(text: &str, range: SelectionRange) -> Option<Edit> {
    let span = resolve_for("apply_heading", text, range)?;
    let replacement = format!("{HEADING_PREFIX}{}", &text[span.clone()]);
    Some(Edit::splice(text, span, range.location, &replacement))
}

/// Prefix every non-blank selected line with `"- "`.
///
/// Lines break at any Unicode newline (`\n`, `\r`, `\r\n`, VT, FF, NEL,
/// U+2028, U+2029). Breaks are rejoined as `\n`, except `\r\n` which is
/// kept. Lines that already carry the prefix are left alone, so repeated
/// application never nests bullets. Blank lines are kept verbatim.
pub fn apply_list(text: &str, range: SelectionRange) -> String {
    apply_list_edit(text, range).map_or_else(|| text.to_string(), |edit| edit.text)
}

/// Like [`apply_list`], returning the span the bulleted lines occupy.
pub fn apply_list_edit(text: &str, range: SelectionRange) -> Option<Edit> {
    let span = resolve_for("apply_list", text, range)?;
    let mut replacement = String::with_capacity(span.len() + BULLET_PREFIX.len());
    for (line, line_break) in split_lines(&text[span.clone()]) {
        replacement.push_str(&bullet_line(line));
        match line_break {
            "" => {}
            "\r\n" => replacement.push_str("\r\n"),
            _ => replacement.push('\n'),
        }
    }
    Some(Edit::splice(text, span, range.location, &replacement))
}

const fn is_line_break(ch: char) -> bool {
    matches!(
        ch,
        '\n' | '\r' | '\u{0B}' | '\u{0C}' | '\u{85}' | '\u{2028}' | '\u{2029}'
    )
}

/// Split into `(line, break)` pairs; the last line has an empty break.
fn split_lines(text: &str) -> Vec<(&str, &str)> {
    let mut lines = Vec::new();
    let mut start = 0;
    let mut chars = text.char_indices().peekable();
    while let Some((idx, ch)) = chars.next() {
        if !is_line_break(ch) {
            continue;
        }
        let mut end = idx + ch.len_utf8();
        if ch == '\r' && chars.next_if(|&(_, next)| next == '\n').is_some() {
            end += 1;
        }
        lines.push((&text[start..idx], &text[idx..end]));
        start = end;
    }
    lines.push((&text[start..], ""));
    lines
}

fn bullet_line(line: &str) -> Cow<'_, str> {
    if line.trim().is_empty() || line.starts_with(BULLET_PREFIX) {
        Cow::Borrowed(line)
    } else {
        Cow::Owned(format!("{BULLET_PREFIX}{line}"))
    }
}
