#![warn(missing_docs)]
//! Painter Core - Headless Markup Toggling Engine
//!
//! # Overview
//!
//! `painter-core` wraps and unwraps text markup (`**bold**`, `<mark>` highlights, code spans and
//! fences, comments, links) around the selections of an editor it does not own. The host
//! exposes its editing surface through the [`Editor`] trait; the engine decides per cursor
//! whether the markup is already present and either removes it or inserts it.
//!
//! # Core Features
//!
//! - **Trimming**: selections shrink past whitespace, list/heading markers, quotes and block ids
//! - **Expansion**: empty selections grow to the word (or code span) under the caret
//! - **Multi-line**: inline markup is applied per line, block markup is fenced
//! - **Multi-cursor**: later cursors are recalibrated against edits made for earlier ones
//! - **Links**: a URL on the clipboard turns link markup into `[text](url)` or `![text](url)`
//! - **Erase**: matching HTML elements are unwrapped from the selection
//!
//! # Architecture Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │  MarkupEngine / erase_markup_matching       │  ← Public API
//! ├─────────────────────────────────────────────┤
//! │  Shift Log (multi-cursor recalibration)     │
//! ├─────────────────────────────────────────────┤
//! │  Expander → Trimmer → Presence Detector     │  ← Selection shaping
//! ├─────────────────────────────────────────────┤
//! │  Offset Utilities (clamped conversion)      │
//! ├─────────────────────────────────────────────┤
//! │  Editor trait  (TextBuffer: rope-backed)    │  ← Host surface
//! └─────────────────────────────────────────────┘
//! ```
//!
//! # Quick Start
//!
//! ```rust
//! use painter_core::{
//!     Editor, MarkupSpec, Position, TextBuffer, ToggleOptions, apply_or_remove_markup,
//! };
//!
//! let mut buffer = TextBuffer::new("The cat sat")
//!     .with_selection(Position::new(0, 5), Position::new(0, 5));
//!
//! let spec = MarkupSpec::inline("<mark>", "</mark>");
//! apply_or_remove_markup(&mut buffer, &spec, ToggleOptions::default()).unwrap();
//! assert_eq!(buffer.text(), "The <mark>cat</mark> sat");
//!
//! // Toggling again from inside the word removes it.
//! apply_or_remove_markup(&mut buffer, &spec, ToggleOptions::default()).unwrap();
//! assert_eq!(buffer.text(), "The cat sat");
//! assert!(buffer.has_focus());
//! ```
//!
//! # Module Description
//!
//! - [`editor`] - the host capability consumed by everything else
//! - [`buffer`] - rope-backed reference [`Editor`]
//! - [`offsets`] - clamped position/offset conversion
//! - [`detect`] - delimiter presence around a selection or block
//! - [`trim`] - selection trimming
//! - [`expand`] - token expansion
//! - [`recalibrate`] - multi-cursor shift log
//! - [`engine`] - apply/undo across cursors
//! - [`link`] - clipboard URL links
//! - [`erase`] - unwrapping elements by selector
//!
//! # Coordinates
//!
//! Lines and columns are zero-based; columns and offsets count Unicode scalar values.

pub mod buffer;
pub mod detect;
pub mod editor;
pub mod engine;
pub mod erase;
pub mod error;
pub mod expand;
pub mod link;
pub mod offsets;
pub mod position;
pub mod recalibrate;
pub mod trim;
mod words;

pub use buffer::TextBuffer;
pub use detect::{is_block_present, is_present_outside};
pub use editor::Editor;
pub use engine::{MarkupEngine, ToggleOptions, apply_or_remove_markup, delete_line};
pub use erase::{Selector, erase_markup_matching, strip_matching};
pub use error::{ClipboardError, MarkupError};
pub use expand::{Expansion, expand, token_at};
pub use link::{Clipboard, IMAGE_EXTENSIONS, resolve_link_markup};
pub use offsets::{clamp_offset, nudge_cursor, to_offset, to_position};
pub use position::{CursorRole, Position, Selection};
pub use recalibrate::{ContentShift, LineShift, ShiftLog};
pub use trim::{trim, trim_text, trim_tokens};

pub use painter_lang::{
    BlockFence, ExpandPair, HighlightCommand, HighlighterMethod, HighlighterSettings,
    HighlighterStyle, LINK_SUFFIX_SENTINEL, MarkupKind, MarkupSpec, TokenRule, TrimTables,
};
