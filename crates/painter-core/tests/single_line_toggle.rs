use painter_core::{
    CursorRole, Editor, MarkupSpec, Position, Selection, TextBuffer, ToggleOptions, TokenRule,
    apply_or_remove_markup,
};
use pretty_assertions::assert_eq;

fn mark() -> MarkupSpec {
    MarkupSpec::inline("<mark>", "</mark>")
}

fn toggle(buf: &mut TextBuffer, spec: &MarkupSpec) {
    apply_or_remove_markup(buf, spec, ToggleOptions::default()).unwrap();
}

#[test]
fn test_apply_to_selected_word() {
    let mut buf =
        TextBuffer::new("The cat sat").with_selection(Position::new(0, 4), Position::new(0, 7));
    let options = ToggleOptions {
        move_cursor_to_end: true,
        ..ToggleOptions::default()
    };
    apply_or_remove_markup(&mut buf, &mark(), options).unwrap();

    assert_eq!(buf.text(), "The <mark>cat</mark> sat");
    assert_eq!(buf.cursor(CursorRole::Head), Position::new(0, 20));
}

#[test]
fn test_undo_inner_selection() {
    let mut buf = TextBuffer::new("The <mark>cat</mark> sat")
        .with_selection(Position::new(0, 10), Position::new(0, 13));
    toggle(&mut buf, &mark());

    assert_eq!(buf.text(), "The cat sat");
    assert_eq!(
        buf.selection(),
        Selection::new(Position::new(0, 4), Position::new(0, 7))
    );
}

#[test]
fn test_empty_selection_expands_then_wraps() {
    let mut buf =
        TextBuffer::new("The cat sat").with_selection(Position::new(0, 5), Position::new(0, 5));
    toggle(&mut buf, &mark());

    assert_eq!(buf.text(), "The <mark>cat</mark> sat");
    // The caret keeps its place relative to the text.
    assert_eq!(buf.selection(), Selection::caret(Position::new(0, 11)));
}

#[test]
fn test_caret_in_whitespace_inserts_empty_markup() {
    let mut buf = TextBuffer::new("a  b").with_selection(Position::new(0, 2), Position::new(0, 2));
    toggle(&mut buf, &MarkupSpec::bold());

    assert_eq!(buf.text(), "a **** b");
    assert_eq!(buf.selection(), Selection::caret(Position::new(0, 4)));

    // Between the inserted delimiters the caret does not expand; toggling removes them.
    toggle(&mut buf, &MarkupSpec::bold());
    assert_eq!(buf.text(), "a  b");
}

#[test]
fn test_selection_is_trimmed_before_wrapping() {
    let mut buf = TextBuffer::new("- [ ] buy milk ^blk1")
        .with_selection(Position::new(0, 0), Position::new(0, 20));
    toggle(&mut buf, &MarkupSpec::bold());

    assert_eq!(buf.text(), "- [ ] **buy milk** ^blk1");
}

#[test]
fn test_reselecting_wrapped_text_unwraps() {
    let mut buf =
        TextBuffer::new("say **hi** now").with_selection(Position::new(0, 4), Position::new(0, 10));
    toggle(&mut buf, &MarkupSpec::bold());

    assert_eq!(buf.text(), "say hi now");
}

#[test]
fn test_inline_code_wraps_whitespace_delimited_token() {
    let mut buf = TextBuffer::new("run cargo-fmt --all now")
        .with_selection(Position::new(0, 6), Position::new(0, 6));
    toggle(&mut buf, &MarkupSpec::code());

    assert_eq!(buf.text(), "run `cargo-fmt` --all now");
}

#[test]
fn test_custom_padded_span_markup_round_trip() {
    let spec = MarkupSpec::inline("{{", "}}")
        .with_token_rule(TokenRule::NonWhitespace)
        .with_inner_padding(true);
    let mut buf = TextBuffer::new("run cargo-fmt now")
        .with_selection(Position::new(0, 6), Position::new(0, 6));

    toggle(&mut buf, &spec);
    assert_eq!(buf.text(), "run {{ cargo-fmt }} now");
    assert_eq!(buf.selection(), Selection::caret(Position::new(0, 9)));

    toggle(&mut buf, &spec);
    assert_eq!(buf.text(), "run cargo-fmt now");
}

#[test]
fn test_wikilink_toggle_round_trip() {
    let mut buf =
        TextBuffer::new("see Page now").with_selection(Position::new(0, 6), Position::new(0, 6));
    toggle(&mut buf, &MarkupSpec::wikilink());
    assert_eq!(buf.text(), "see [[Page]] now");

    toggle(&mut buf, &MarkupSpec::wikilink());
    assert_eq!(buf.text(), "see Page now");
}

#[test]
fn test_bold_absorbs_adjacent_wikilink() {
    let mut buf = TextBuffer::new("see [[Page]] now")
        .with_selection(Position::new(0, 8), Position::new(0, 8));
    toggle(&mut buf, &MarkupSpec::bold());

    assert_eq!(buf.text(), "see **[[Page]]** now");
}

#[test]
fn test_without_expansion_empty_selection_inserts_at_caret() {
    let options = ToggleOptions {
        expand_empty_selection: false,
        move_cursor_to_end: false,
    };
    let mut buf = TextBuffer::new("word").with_selection(Position::new(0, 2), Position::new(0, 2));
    apply_or_remove_markup(&mut buf, &MarkupSpec::italic(), options).unwrap();

    assert_eq!(buf.text(), "wo**rd");
    assert_eq!(buf.selection(), Selection::caret(Position::new(0, 3)));
}

#[test]
fn test_cjk_selection() {
    let mut buf = TextBuffer::new("你好世界").with_selection(Position::new(0, 1), Position::new(0, 2));
    toggle(&mut buf, &MarkupSpec::highlight());

    assert_eq!(buf.text(), "你==好==世界");
}
