//! Unwrapping HTML elements inside the selection.
//!
//! Used by the erase/clear command to strip `<mark>` (or any other simple selector) from the
//! selected text while keeping the content of each removed element.

use std::ops::Range;
use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::editor::Editor;
use crate::error::MarkupError;

static TAG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"<(/?)([A-Za-z][A-Za-z0-9-]*)([^>]*)>").expect("tag pattern is valid")
});

static CLASS_ATTR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)\bclass\s*=\s*(?:"([^"]*)"|'([^']*)'|([^\s"'>/]+))"#)
        .expect("class attribute pattern is valid")
});

const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source", "track",
    "wbr",
];

/// A simple CSS selector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selector {
    /// `*`
    Any,
    /// `tag`
    Tag(String),
    /// `.class`
    Class(String),
    /// `tag.class`
    TagClass(String, String),
}

fn is_tag_name(s: &str) -> bool {
    let mut chars = s.chars();
    chars.next().is_some_and(|c| c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '-')
}

fn is_class_name(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| c.is_alphanumeric() || c == '-' || c == '_')
}

impl Selector {
    /// Parse `tag`, `.class`, `tag.class` or `*`.
    pub fn parse(input: &str) -> Result<Self, MarkupError> {
        let s = input.trim();
        let invalid = || MarkupError::InvalidSelector(input.to_string());

        if s == "*" {
            return Ok(Self::Any);
        }
        match s.split_once('.') {
            Some(("", class)) if is_class_name(class) => Ok(Self::Class(class.to_string())),
            Some((tag, class)) if is_tag_name(tag) && is_class_name(class) => {
                Ok(Self::TagClass(tag.to_ascii_lowercase(), class.to_string()))
            }
            None if is_tag_name(s) => Ok(Self::Tag(s.to_ascii_lowercase())),
            _ => Err(invalid()),
        }
    }

    /// Returns `true` if an element named `tag` with `classes` matches.
    pub fn matches(&self, tag: &str, classes: &[&str]) -> bool {
        match self {
            Self::Any => true,
            Self::Tag(name) => name == tag,
            Self::Class(class) => classes.contains(&class.as_str()),
            Self::TagClass(name, class) => name == tag && classes.contains(&class.as_str()),
        }
    }

    fn names_tag(&self, tag: &str) -> bool {
        match self {
            Self::Any => true,
            Self::Tag(name) | Self::TagClass(name, _) => name == tag,
            Self::Class(_) => false,
        }
    }
}

fn class_list(attrs: &str) -> Vec<&str> {
    CLASS_ATTR
        .captures(attrs)
        .and_then(|caps| caps.get(1).or_else(|| caps.get(2)).or_else(|| caps.get(3)))
        .map(|m| m.as_str().split_whitespace().collect())
        .unwrap_or_default()
}

struct OpenTag {
    name: String,
    range: Range<usize>,
    matched: bool,
}

/// Remove the tags of every element in `text` matching one of `selectors`, keeping their
/// content. Returns `None` if no element matches.
pub fn strip_matching(text: &str, selectors: &[Selector]) -> Option<String> {
    let mut stack: Vec<OpenTag> = Vec::new();
    let mut removals: Vec<Range<usize>> = Vec::new();
    let mut matched_any = false;

    for caps in TAG.captures_iter(text) {
        let Some(whole) = caps.get(0) else { continue };
        let closing = !caps[1].is_empty();
        let name = caps[2].to_ascii_lowercase();
        let attrs = &caps[3];

        if closing {
            match stack.iter().rposition(|open| open.name == name) {
                Some(index) => {
                    for unclosed in stack.drain(index + 1..) {
                        if unclosed.matched {
                            removals.push(unclosed.range);
                        }
                    }
                    if let Some(open) = stack.pop()
                        && open.matched
                    {
                        removals.push(open.range);
                        removals.push(whole.range());
                    }
                }
                None => {
                    if selectors.iter().any(|s| s.names_tag(&name)) {
                        removals.push(whole.range());
                    }
                }
            }
            continue;
        }

        let classes = class_list(attrs);
        let matched = selectors.iter().any(|s| s.matches(&name, &classes));
        matched_any |= matched;

        if attrs.trim_end().ends_with('/') || VOID_ELEMENTS.contains(&name.as_str()) {
            if matched {
                removals.push(whole.range());
            }
            continue;
        }
        stack.push(OpenTag {
            name,
            range: whole.range(),
            matched,
        });
    }

    if !matched_any {
        return None;
    }
    removals.extend(stack.into_iter().filter(|open| open.matched).map(|open| open.range));
    removals.sort_by_key(|r| r.start);

    let mut out = String::with_capacity(text.len());
    let mut cursor = 0;
    for range in removals {
        out.push_str(&text[cursor..range.start]);
        cursor = range.end;
    }
    out.push_str(&text[cursor..]);
    Some(out)
}

/// Unwrap every element in the main selection that matches one of `selectors`.
///
/// Returns `Ok(false)` without touching the editor if nothing is selected or nothing
/// matches. With `preserve_selection`, the unwrapped text is selected again in the direction
/// of the original selection.
pub fn erase_markup_matching<E, S>(
    editor: &mut E,
    selectors: &[S],
    preserve_selection: bool,
) -> Result<bool, MarkupError>
where
    E: Editor + ?Sized,
    S: AsRef<str>,
{
    let selectors = selectors
        .iter()
        .map(|s| Selector::parse(s.as_ref()))
        .collect::<Result<Vec<_>, _>>()?;

    if !editor.something_selected() {
        return Ok(false);
    }

    let selection = editor.selection();
    let text = editor.selection_text();
    let Some(replacement) = strip_matching(&text, &selectors) else {
        debug!("nothing to erase in selection");
        return Ok(false);
    };

    editor.replace_selection(&replacement);
    if !editor.has_focus() {
        editor.focus();
    }
    if preserve_selection {
        let from = selection.from();
        let to = editor.offset_to_pos(editor.pos_to_offset(from) + replacement.chars().count());
        if selection.is_reversed() {
            editor.set_selection(to, from);
        } else {
            editor.set_selection(from, to);
        }
    }
    debug!(removed = text.chars().count() - replacement.chars().count(), "erased markup");
    Ok(true)
}
