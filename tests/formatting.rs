use markdraft::format::{
    Marker, apply, apply_heading, apply_list, apply_list_edit, toggle_wrapper, toggle_wrapper_edit,
};
use markdraft::selection::SelectionRange;

fn range(location: usize, length: usize) -> SelectionRange {
    SelectionRange::new(location, length)
}

#[test]
fn test_bold_toggle_scenario() {
    let bolded = toggle_wrapper("Hello world", range(0, 11), "**");
    assert_eq!(bolded, "**Hello world**");
    assert_eq!(toggle_wrapper(&bolded, range(0, 15), "**"), "Hello world");
}

#[test]
fn test_heading_scenario_double_prefix() {
    let once = apply_heading("Title", range(0, 5));
    assert_eq!(once, "# Title");
    assert_eq!(apply_heading(&once, range(0, 7)), "# # Title");
}

#[test]
fn test_strikethrough_removal_edge_case() {
    assert_eq!(toggle_wrapper("~~x~~", range(0, 5), "~~"), "x");
}

#[test]
fn test_overlapping_wrapper_is_applied_not_removed() {
    assert_eq!(toggle_wrapper("**", range(0, 2), "**"), "******");
    assert_eq!(toggle_wrapper("~~~", range(0, 3), "~~"), "~~~~~~~");
}

#[test]
fn test_list_preserves_blank_line() {
    assert_eq!(apply_list("a\n\nb", range(0, 4)), "- a\n\n- b");
}

#[test]
fn test_list_keeps_whitespace_only_line_verbatim() {
    assert_eq!(apply_list("a\n  \nb", range(0, 6)), "- a\n  \n- b");
}

#[test]
fn test_list_does_not_remove_existing_bullets() {
    assert_eq!(apply_list("- a\nb", range(0, 5)), "- a\n- b");
}

#[test]
fn test_wrapper_drops_outer_whitespace_of_selection() {
    assert_eq!(toggle_wrapper("say  hi  now", range(3, 6), "_"), "say_hi_now");
}

#[test]
fn test_wrapper_inside_longer_text() {
    assert_eq!(toggle_wrapper("a big cat", range(2, 3), "**"), "a **big** cat");
}

#[test]
fn test_offsets_count_chars() {
    // "é" is two bytes; offsets are in chars
    assert_eq!(toggle_wrapper("café au lait", range(0, 4), "_"), "_café_ au lait");
    assert_eq!(apply_heading("ñandú", range(0, 5)), "# ñandú");
}

#[test]
fn test_invalid_range_is_noop_for_every_marker() {
    for marker in Marker::ALL {
        assert_eq!(apply(marker, "short", range(3, 10)), "short");
        assert_eq!(apply(marker, "short", range(usize::MAX, 2)), "short");
        assert_eq!(apply(marker, "", range(0, 1)), "");
    }
}

#[test]
fn test_crlf_lines_keep_their_endings() {
    assert_eq!(apply_list("a\r\nb", range(0, 4)), "- a\r\n- b");
}

mod property_tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn caret_selection_is_noop(
            text in "[a-zé \\n*_~#-]{0,40}",
            at in 0..45usize,
        ) {
            for marker in Marker::ALL {
                prop_assert_eq!(apply(marker, &text, SelectionRange::caret(at)), text.clone());
            }
        }

        #[test]
        fn out_of_bounds_selection_is_noop(
            text in "[a-z \\n]{0,20}",
            extra in 1..10usize,
        ) {
            let len = text.chars().count();
            for marker in Marker::ALL {
                prop_assert_eq!(apply(marker, &text, range(0, len + extra)), text.clone());
            }
        }

        #[test]
        fn wrapper_round_trip_restores_text(
            before in "[a-z ]{0,10}",
            core in "[a-zé0-9]([a-zé0-9 ]{0,10}[a-zé0-9])?",
            after in "[a-z ]{0,10}",
            marker in prop::sample::select(vec![Marker::Bold, Marker::Italic, Marker::Strikethrough]),
        ) {
            let text = format!("{before}{core}{after}");
            let selected = range(before.chars().count(), core.chars().count());
            let wrapper = marker.token();

            let edit = toggle_wrapper_edit(&text, selected, wrapper).unwrap();
            prop_assert_eq!(&edit.text, &format!("{before}{wrapper}{core}{wrapper}{after}"));

            let restored = toggle_wrapper(&edit.text, edit.replaced, wrapper);
            prop_assert_eq!(restored, text);
        }

        #[test]
        fn list_application_is_idempotent(
            lines in prop::collection::vec("[a-z -]{0,8}", 1..6),
        ) {
            let text = lines.join("\n");
            let len = text.chars().count();
            prop_assume!(len > 0);

            let first = apply_list_edit(&text, range(0, len)).unwrap();
            let second = apply_list(&first.text, first.replaced);
            prop_assert_eq!(second, first.text);
        }

        #[test]
        fn list_keeps_line_count(
            lines in prop::collection::vec("[a-z ]{0,8}", 1..6),
        ) {
            let text = lines.join("\n");
            let len = text.chars().count();
            prop_assume!(len > 0);

            let listed = apply_list(&text, range(0, len));
            prop_assert_eq!(listed.split('\n').count(), lines.len());
            for (out, original) in listed.split('\n').zip(&lines) {
                if original.trim().is_empty() {
                    prop_assert_eq!(out, original.as_str());
                } else {
                    prop_assert!(out.starts_with("- "));
                }
            }
        }

        #[test]
        fn heading_always_adds_one_prefix(
            text in "[a-z #]{1,20}",
        ) {
            let len = text.chars().count();
            let out = apply_heading(&text, range(0, len));
            prop_assert_eq!(out, format!("# {text}"));
        }
    }
}
