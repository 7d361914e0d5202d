//! Expanding a selection to the token(s) under it.

use painter_lang::{MarkupSpec, TokenRule, TrimTables};

use crate::detect::is_present_outside;
use crate::editor::Editor;
use crate::offsets::to_position;
use crate::position::{Position, Selection};
use crate::trim::trim;
use crate::words::non_whitespace_run;

/// Result of [`expand`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Expansion {
    /// Expanded and trimmed selection to wrap.
    pub selection: Selection,
    /// Selection after the first trim, before growing to tokens.
    pub original: Selection,
}

/// The token touching `pos`, or an empty range at `pos` when there is none.
pub fn token_at<E: Editor + ?Sized>(editor: &E, pos: Position, spec: &MarkupSpec) -> Selection {
    match spec.token_rule {
        TokenRule::Word => {
            let offset = editor.pos_to_offset(pos);
            match editor.word_at(offset) {
                Some((start, end)) => {
                    Selection::new(editor.offset_to_pos(start), editor.offset_to_pos(end))
                }
                None => Selection::caret(pos),
            }
        }
        // Whitespace includes newlines, so the run never leaves the line.
        TokenRule::NonWhitespace => {
            let chars: Vec<char> = editor.line(pos.line).chars().collect();
            let (start, end) = non_whitespace_run(&chars, pos.column);
            Selection::new(Position::new(pos.line, start), Position::new(pos.line, end))
        }
    }
}

/// Trim `selection`, grow it to whole tokens, trim again, then absorb adjacent syntax from
/// the expand-when-outside table.
pub fn expand<E: Editor + ?Sized>(
    editor: &E,
    selection: &Selection,
    spec: &MarkupSpec,
    tables: &TrimTables,
) -> Expansion {
    let original = trim(editor, selection, spec, tables);

    // An empty cursor already between the delimiters is left alone, otherwise tokens like a
    // lone `_` would be captured.
    if original.is_empty() && is_present_outside(editor, &original, &spec.prefix, &spec.suffix) {
        return Expansion {
            selection: original,
            original,
        };
    }

    let (from, to) = (original.from(), original.to());
    let first = token_at(editor, from, spec);
    let mut last = token_at(editor, to, spec);

    // Segmenters may attribute the character right after a word (CJK in particular) to the
    // next token; the token ending one column earlier is the one the selection meant.
    if from != to && to.column > 0 {
        let inner = token_at(editor, Position::new(to.line, to.column - 1), spec);
        if inner != last {
            last = inner;
        }
    }

    let grown = Selection::new(first.from(), last.to().max(first.from()));
    let mut selection = trim(editor, &grown, spec, tables);

    for pair in &tables.expand_when_outside {
        // A command must stay able to remove the syntax it creates.
        if pair.left == spec.prefix || pair.right == spec.suffix {
            continue;
        }
        if !is_present_outside(editor, &selection, &pair.left, &pair.right) {
            continue;
        }
        let start =
            editor.pos_to_offset(selection.from()) as isize - pair.left.chars().count() as isize;
        let mut end =
            editor.pos_to_offset(selection.to()) as isize + pair.right.chars().count() as isize;
        if pair.trim_last_space {
            end -= 1;
        }
        selection = Selection::new(to_position(editor, start), to_position(editor, end));
    }

    Expansion {
        selection,
        original,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TextBuffer;

    fn expanded(text: &str, from: Position, to: Position, spec: &MarkupSpec) -> String {
        let buf = TextBuffer::new(text);
        let out = expand(
            &buf,
            &Selection::new(from, to),
            spec,
            &TrimTables::default(),
        );
        buf.range_text(out.selection.from(), out.selection.to())
    }

    fn caret(text: &str, column: usize, spec: &MarkupSpec) -> String {
        let pos = Position::new(0, column);
        expanded(text, pos, pos, spec)
    }

    #[test]
    fn test_caret_expands_to_word() {
        let mark = MarkupSpec::mark_with_class("hltr-r");
        assert_eq!(caret("The cat sat", 5, &mark), "cat");
        assert_eq!(caret("The cat sat", 4, &mark), "cat");
        assert_eq!(caret("The cat sat", 7, &mark), "cat");
    }

    #[test]
    fn test_caret_in_whitespace_stays_empty() {
        assert_eq!(caret("a   b", 2, &MarkupSpec::bold()), "");
    }

    #[test]
    fn test_partial_selection_snaps_to_words() {
        let got = expanded(
            "hello brave world",
            Position::new(0, 2),
            Position::new(0, 8),
            &MarkupSpec::bold(),
        );
        assert_eq!(got, "hello brave");
    }

    #[test]
    fn test_selection_ending_on_word_end_keeps_word() {
        let got = expanded(
            "你好世界",
            Position::new(0, 1),
            Position::new(0, 2),
            &MarkupSpec::bold(),
        );
        assert_eq!(got, "好");
    }

    #[test]
    fn test_code_uses_non_whitespace_runs() {
        assert_eq!(caret("run ls-la/x now", 6, &MarkupSpec::code()), "ls-la/x");
        assert_eq!(caret("f(a.b) z", 3, &MarkupSpec::math()), "f(a.b)");
    }

    #[test]
    fn test_absorbs_wikilink_brackets() {
        assert_eq!(caret("see [[Page]] now", 8, &MarkupSpec::bold()), "[[Page]]");
    }

    #[test]
    fn test_does_not_absorb_own_syntax() {
        // The wikilink command must be able to see its own brackets outside the word.
        assert_eq!(caret("see [[Page]] now", 8, &MarkupSpec::wikilink()), "Page");
    }

    #[test]
    fn test_absorbs_tag_and_quotes() {
        assert_eq!(caret("a #tag b", 4, &MarkupSpec::bold()), "#tag");
        assert_eq!(caret("say \"hi\" ok", 6, &MarkupSpec::bold()), "\"hi\"");
    }

    #[test]
    fn test_inline_field_gives_back_separator_space() {
        assert_eq!(caret("key: value", 1, &MarkupSpec::bold()), "key:");
    }

    #[test]
    fn test_bracketed_empty_caret_is_not_expanded() {
        let buf = TextBuffer::new("a **** b");
        let pos = Position::new(0, 4);
        let out = expand(
            &buf,
            &Selection::caret(pos),
            &MarkupSpec::bold(),
            &TrimTables::default(),
        );
        assert_eq!(out.selection, Selection::caret(pos));
        assert_eq!(out.original, Selection::caret(pos));
    }

    #[test]
    fn test_original_is_first_trim() {
        let buf = TextBuffer::new(" The cat ");
        let out = expand(
            &buf,
            &Selection::new(Position::new(0, 0), Position::new(0, 6)),
            &MarkupSpec::bold(),
            &TrimTables::default(),
        );
        assert_eq!(
            out.original,
            Selection::new(Position::new(0, 1), Position::new(0, 6))
        );
        assert_eq!(buf.range_text(out.selection.from(), out.selection.to()), "The cat");
    }
}
