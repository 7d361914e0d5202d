//! Delimiter presence detection.

use crate::editor::Editor;
use crate::position::{Position, Selection};

/// Returns `true` if `prefix` sits right before the selection and `suffix` right after it.
///
/// Windows that would reach outside the document yield `false`.
pub fn is_present_outside<E: Editor + ?Sized>(
    editor: &E,
    selection: &Selection,
    prefix: &str,
    suffix: &str,
) -> bool {
    let start = editor.pos_to_offset(selection.from());
    let end = editor.pos_to_offset(selection.to());
    let prefix_len = prefix.chars().count();
    let suffix_len = suffix.chars().count();

    if start < prefix_len || end + suffix_len > editor.len_chars() {
        return false;
    }

    editor.slice(start - prefix_len, start) == prefix
        && editor.slice(end, end + suffix_len) == suffix
}

/// Returns `true` if the line above `anchor` starts with `prefix` and the line below `head`
/// starts with `suffix`.
///
/// A block touching the first or last line has no room for fences and yields `false`.
pub fn is_block_present<E: Editor + ?Sized>(
    editor: &E,
    anchor: Position,
    head: Position,
    prefix: &str,
    suffix: &str,
) -> bool {
    if anchor.line == 0 || head.line >= editor.last_line() {
        return false;
    }
    editor.line(anchor.line - 1).starts_with(prefix)
        && editor.line(head.line + 1).starts_with(suffix)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TextBuffer;

    fn sel(l1: usize, c1: usize, l2: usize, c2: usize) -> Selection {
        Selection::new(Position::new(l1, c1), Position::new(l2, c2))
    }

    #[test]
    fn test_detects_wrapped_inner_text() {
        let buf = TextBuffer::new("The <mark>cat</mark> sat");
        assert!(is_present_outside(&buf, &sel(0, 10, 0, 13), "<mark>", "</mark>"));
        assert!(is_present_outside(&buf, &sel(0, 13, 0, 10), "<mark>", "</mark>"));
        assert!(!is_present_outside(&buf, &sel(0, 10, 0, 12), "<mark>", "</mark>"));
    }

    #[test]
    fn test_window_outside_document_is_false() {
        let buf = TextBuffer::new("**a**");
        assert!(!is_present_outside(&buf, &sel(0, 0, 0, 1), "**", "**"));
        assert!(!is_present_outside(&buf, &sel(0, 4, 0, 5), "**", "**"));
        assert!(is_present_outside(&buf, &sel(0, 2, 0, 3), "**", "**"));
    }

    #[test]
    fn test_empty_delimiters_match_trivially() {
        let buf = TextBuffer::new("#tag");
        assert!(is_present_outside(&buf, &sel(0, 1, 0, 4), "#", ""));
    }

    #[test]
    fn test_block_present() {
        let buf = TextBuffer::new("```rust\nfn a() {}\n```\n");
        assert!(is_block_present(
            &buf,
            Position::new(1, 0),
            Position::new(1, 9),
            "```",
            "```"
        ));
    }

    #[test]
    fn test_block_at_document_edges_is_absent() {
        let buf = TextBuffer::new("```\ncode\n```");
        assert!(!is_block_present(
            &buf,
            Position::new(0, 0),
            Position::new(1, 4),
            "```",
            "```"
        ));
        assert!(!is_block_present(
            &buf,
            Position::new(1, 0),
            Position::new(2, 3),
            "```",
            "```"
        ));
    }
}
