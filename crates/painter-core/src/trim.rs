//! Selection trimming.
//!
//! Shrinks a selection past leading and trailing tokens (whitespace, quotes, list and heading
//! markers, the target markup itself) so that markup lands on the semantic content only.

use std::sync::LazyLock;

use painter_lang::{MarkupSpec, TrimTables};
use regex::Regex;

use crate::editor::Editor;
use crate::position::Selection;

// Block reference at the very end of a selection, e.g. " ^abc123".
static BLOCK_ID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r" \^[A-Za-z0-9_]+$").expect("block id pattern is valid"));

/// Leading and trailing tokens in effect for `spec`.
///
/// Block-capable markup only trims its own delimiters; everything else uses the tables plus
/// the delimiters, so an already wrapped selection trims its markup before re-expansion.
pub fn trim_tokens<'a>(
    spec: &'a MarkupSpec,
    tables: &'a TrimTables,
) -> (Vec<&'a str>, Vec<&'a str>) {
    let (mut before, mut after): (Vec<&str>, Vec<&str>) = if spec.is_multi_line() {
        (vec![spec.prefix.as_str()], vec![spec.suffix.as_str()])
    } else {
        let mut before: Vec<&str> = tables.before.iter().map(String::as_str).collect();
        let mut after: Vec<&str> = tables.after.iter().map(String::as_str).collect();
        if !spec.suffix.is_empty() {
            before.push(&spec.prefix);
            after.push(&spec.suffix);
        }
        (before, after)
    };
    before.retain(|t| !t.is_empty());
    after.retain(|t| !t.is_empty());
    (before, after)
}

/// Trim `text`, returning the number of leading characters dropped and the kept text.
pub fn trim_text<'t>(text: &'t str, before: &[&str], after: &[&str]) -> (usize, &'t str) {
    let mut skipped = 0;
    let mut rest = text;

    loop {
        loop {
            let mut stripped = false;
            for token in before {
                if let Some(r) = rest.strip_prefix(token) {
                    skipped += token.chars().count();
                    rest = r;
                    stripped = true;
                }
            }
            if !stripped || rest.is_empty() {
                break;
            }
        }

        loop {
            let mut stripped = false;
            for token in after {
                if let Some(r) = rest.strip_suffix(token) {
                    rest = r;
                    stripped = true;
                }
            }
            if !stripped || rest.is_empty() {
                break;
            }
        }

        // Dropping a block id can expose another trailing token.
        match BLOCK_ID.find(rest) {
            Some(m) if !rest.is_empty() => rest = &rest[..m.start()],
            _ => break,
        }
    }

    (skipped, rest)
}

/// Shrink `selection` to its semantic content. The result is a forward selection.
pub fn trim<E: Editor + ?Sized>(
    editor: &E,
    selection: &Selection,
    spec: &MarkupSpec,
    tables: &TrimTables,
) -> Selection {
    let (before, after) = trim_tokens(spec, tables);
    let start = editor.pos_to_offset(selection.from());
    let end = editor.pos_to_offset(selection.to());
    let text = editor.slice(start, end);

    let (skipped, kept) = trim_text(&text, &before, &after);
    let new_start = start + skipped;
    Selection::new(
        editor.offset_to_pos(new_start),
        editor.offset_to_pos(new_start + kept.chars().count()),
    )
}
