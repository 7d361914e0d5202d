#![warn(missing_docs)]
//! `painter-lang` - data-driven markup configuration for `painter-core`.
//!
//! This crate intentionally stays lightweight and does **not** know about editors, selections or
//! offsets. It provides small structs that hosts can use to describe the delimiters a toggle
//! command inserts, the tokens stripped from selection boundaries, and the highlighter palette
//! that produces `<mark>` delimiters.

use serde::{Deserialize, Serialize};

pub mod highlight;
mod tables;

pub use highlight::{HighlightCommand, HighlighterMethod, HighlighterSettings, HighlighterStyle};
pub use tables::{ExpandPair, TrimTables};

/// Suffix sentinel that asks the engine to build a Markdown link from the clipboard.
pub const LINK_SUFFIX_SENTINEL: &str = "]()";

/// How the token under an empty cursor is found.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TokenRule {
    /// Use the host's word-boundary definition.
    #[default]
    Word,
    /// Take the run of non-whitespace characters touching the cursor (inline code, inline math).
    NonWhitespace,
}

/// Delimiters placed on their own lines when a multi-line selection is wrapped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockFence {
    /// Opening fence line content (e.g. ```` ``` ````).
    pub open: String,
    /// Closing fence line content.
    pub close: String,
    /// Park the caret after the opening fence so a language tag can be typed.
    #[serde(default)]
    pub info_string: bool,
}

impl BlockFence {
    /// Create a fence without an info string.
    pub fn new(open: impl Into<String>, close: impl Into<String>) -> Self {
        Self {
            open: open.into(),
            close: close.into(),
            info_string: false,
        }
    }

    /// Create a fence that leaves the caret after the opening marker.
    pub fn with_info_string(open: impl Into<String>, close: impl Into<String>) -> Self {
        Self {
            info_string: true,
            ..Self::new(open, close)
        }
    }
}

/// Whether a delimiter pair changes shape when wrapping several lines.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MarkupKind {
    /// Inline markup: a multi-line selection is wrapped line by line.
    #[default]
    Inline,
    /// Block-capable markup: a multi-line selection is wrapped by fence lines.
    MultiLine(BlockFence),
}

/// A prefix/suffix pair plus the policy knobs the engine needs to toggle it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarkupSpec {
    /// Text inserted before the selection.
    pub prefix: String,
    /// Text inserted after the selection.
    pub suffix: String,
    /// Inline or block-capable.
    #[serde(default)]
    pub kind: MarkupKind,
    /// Tokenizer used when expanding an empty selection.
    #[serde(default)]
    pub token_rule: TokenRule,
    /// Insert a space on each side of the wrapped text (comment markers).
    #[serde(default)]
    pub pad_inner: bool,
}

impl MarkupSpec {
    /// Create a spec, inferring kind, token rule and padding from well-known markers.
    ///
    /// - `` ` `` becomes inline code that promotes to a ```` ``` ```` fence
    /// - `$` becomes inline math that promotes to a `$$` block
    /// - `%%` and `<!--` are padded comments that keep their own markers as fences
    ///
    /// Anything else is plain inline markup.
    pub fn new(prefix: impl Into<String>, suffix: impl Into<String>) -> Self {
        let prefix = prefix.into();
        let suffix = suffix.into();
        match prefix.as_str() {
            "`" => Self {
                kind: MarkupKind::MultiLine(BlockFence::with_info_string("```", "```")),
                token_rule: TokenRule::NonWhitespace,
                ..Self::inline(prefix, suffix)
            },
            "$" => Self {
                kind: MarkupKind::MultiLine(BlockFence::new("$$", "$$")),
                token_rule: TokenRule::NonWhitespace,
                ..Self::inline(prefix, suffix)
            },
            "%%" | "<!--" => {
                let fence = BlockFence::new(prefix.clone(), suffix.clone());
                Self {
                    kind: MarkupKind::MultiLine(fence),
                    pad_inner: true,
                    ..Self::inline(prefix, suffix)
                }
            }
            _ => Self::inline(prefix, suffix),
        }
    }

    /// Create plain inline markup with no inference.
    pub fn inline(prefix: impl Into<String>, suffix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            suffix: suffix.into(),
            kind: MarkupKind::Inline,
            token_rule: TokenRule::Word,
            pad_inner: false,
        }
    }

    /// `**bold**`
    pub fn bold() -> Self {
        Self::new("**", "**")
    }

    /// `*italic*`
    pub fn italic() -> Self {
        Self::new("*", "*")
    }

    /// `~~strikethrough~~`
    pub fn strikethrough() -> Self {
        Self::new("~~", "~~")
    }

    /// `==highlight==`
    pub fn highlight() -> Self {
        Self::new("==", "==")
    }

    /// `<u>underline</u>`
    pub fn underline() -> Self {
        Self::new("<u>", "</u>")
    }

    /// Inline code, fenced code block for multiple lines.
    pub fn code() -> Self {
        Self::new("`", "`")
    }

    /// Inline math, `$$` block for multiple lines.
    pub fn math() -> Self {
        Self::new("$", "$")
    }

    /// `%% comment %%`
    pub fn comment() -> Self {
        Self::new("%%", "%%")
    }

    /// `<!-- comment -->`
    pub fn html_comment() -> Self {
        Self::new("<!--", "-->")
    }

    /// `[[wikilink]]`
    pub fn wikilink() -> Self {
        Self::new("[[", "]]")
    }

    /// Markdown link; the suffix is the clipboard sentinel [`LINK_SUFFIX_SENTINEL`].
    pub fn link() -> Self {
        Self::new("[", LINK_SUFFIX_SENTINEL)
    }

    /// `<mark class="...">` with the given class.
    pub fn mark_with_class(class: &str) -> Self {
        Self::inline(format!("<mark class=\"{class}\">"), "</mark>")
    }

    /// `<mark style="...">` with the given inline CSS declaration.
    pub fn mark_with_style(declaration: &str) -> Self {
        Self::inline(format!("<mark style=\"{declaration}\">"), "</mark>")
    }

    /// Override the kind.
    pub fn with_kind(mut self, kind: MarkupKind) -> Self {
        self.kind = kind;
        self
    }

    /// Override the token rule.
    pub fn with_token_rule(mut self, token_rule: TokenRule) -> Self {
        self.token_rule = token_rule;
        self
    }

    /// Override inner padding.
    pub fn with_inner_padding(mut self, pad_inner: bool) -> Self {
        self.pad_inner = pad_inner;
        self
    }

    /// Returns `true` if a multi-line selection is wrapped with fence lines.
    pub fn is_multi_line(&self) -> bool {
        matches!(self.kind, MarkupKind::MultiLine(_))
    }

    /// The block fence, if this markup is block-capable.
    pub fn fence(&self) -> Option<&BlockFence> {
        match &self.kind {
            MarkupKind::MultiLine(fence) => Some(fence),
            MarkupKind::Inline => None,
        }
    }

    /// Returns `true` if the suffix asks for a clipboard link.
    pub fn wants_clipboard_link(&self) -> bool {
        self.suffix == LINK_SUFFIX_SENTINEL
    }

    /// Prefix length in characters.
    pub fn prefix_len(&self) -> usize {
        self.prefix.chars().count()
    }

    /// Suffix length in characters.
    pub fn suffix_len(&self) -> usize {
        self.suffix.chars().count()
    }
}
