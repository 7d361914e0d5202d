//! Rope-backed [`Editor`] implementation.
//!
//! `TextBuffer` is the reference host used by tests, benchmarks and hosts that do not have an
//! editing surface of their own. It stores text in a [`ropey::Rope`] (O(log N) line access and
//! editing) next to an ordered list of selections.

use crate::editor::Editor;
use crate::position::{Position, Selection};
use ropey::Rope;

/// A text document with multi-cursor selection state.
#[derive(Debug, Clone)]
pub struct TextBuffer {
    rope: Rope,
    selections: Vec<Selection>,
    focused: bool,
}

impl TextBuffer {
    /// Create a focused buffer with a caret at the document start.
    pub fn new(text: &str) -> Self {
        Self {
            rope: Rope::from_str(text),
            selections: vec![Selection::caret(Position::default())],
            focused: true,
        }
    }

    /// Builder: set a single selection.
    pub fn with_selection(mut self, anchor: Position, head: Position) -> Self {
        self.set_selection(anchor, head);
        self
    }

    /// Builder: set several selections (host order is kept).
    pub fn with_selections(mut self, selections: Vec<Selection>) -> Self {
        self.set_selections(selections);
        self
    }

    /// Builder: set focus state.
    pub fn with_focus(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    /// Get complete text.
    pub fn text(&self) -> String {
        self.rope.to_string()
    }

    /// Get total line count
    pub fn line_count(&self) -> usize {
        self.rope.len_lines()
    }

    fn line_len(&self, line: usize) -> usize {
        let start = self.rope.line_to_char(line);
        if line + 1 < self.rope.len_lines() {
            self.rope.line_to_char(line + 1) - start - 1 // -1 for newline
        } else {
            self.rope.len_chars() - start
        }
    }

    fn clamp_position(&self, pos: Position) -> Position {
        let line = pos.line.min(self.last_line());
        Position::new(line, pos.column.min(self.line_len(line)))
    }

    fn map_offset(offset: usize, start: usize, end: usize, inserted: usize) -> usize {
        if offset <= start {
            offset
        } else if offset >= end {
            offset - (end - start) + inserted
        } else {
            start + inserted
        }
    }
}

impl Default for TextBuffer {
    fn default() -> Self {
        Self::new("")
    }
}

impl Editor for TextBuffer {
    fn len_chars(&self) -> usize {
        self.rope.len_chars()
    }

    fn last_line(&self) -> usize {
        self.rope.len_lines().saturating_sub(1)
    }

    fn line(&self, line: usize) -> String {
        if line >= self.rope.len_lines() {
            return String::new();
        }
        let mut text = self.rope.line(line).to_string();
        if text.ends_with('\n') {
            text.pop();
        }
        text
    }

    fn pos_to_offset(&self, pos: Position) -> usize {
        if pos.line >= self.rope.len_lines() {
            return self.rope.len_chars();
        }
        self.rope.line_to_char(pos.line) + pos.column.min(self.line_len(pos.line))
    }

    fn offset_to_pos(&self, offset: usize) -> Position {
        let offset = offset.min(self.rope.len_chars());
        let line = self.rope.char_to_line(offset);
        Position::new(line, offset - self.rope.line_to_char(line))
    }

    fn range_text(&self, from: Position, to: Position) -> String {
        let a = self.pos_to_offset(from);
        let b = self.pos_to_offset(to);
        let (start, end) = if a <= b { (a, b) } else { (b, a) };
        self.rope.slice(start..end).to_string()
    }

    fn selections(&self) -> Vec<Selection> {
        self.selections.clone()
    }

    fn set_selections(&mut self, selections: Vec<Selection>) {
        let clamped: Vec<Selection> = selections
            .into_iter()
            .map(|s| Selection::new(self.clamp_position(s.anchor), self.clamp_position(s.head)))
            .collect();
        self.selections = if clamped.is_empty() {
            vec![Selection::caret(Position::default())]
        } else {
            clamped
        };
    }

    fn replace_range(&mut self, text: &str, from: Position, to: Position) {
        let a = self.pos_to_offset(from);
        let b = self.pos_to_offset(to);
        let (start, end) = if a <= b { (a, b) } else { (b, a) };
        let inserted = text.chars().count();

        let mapped: Vec<(usize, usize)> = self
            .selections
            .iter()
            .map(|s| {
                (
                    Self::map_offset(self.pos_to_offset(s.anchor), start, end, inserted),
                    Self::map_offset(self.pos_to_offset(s.head), start, end, inserted),
                )
            })
            .collect();

        if start < end {
            self.rope.remove(start..end);
        }
        if !text.is_empty() {
            self.rope.insert(start, text);
        }

        self.selections = mapped
            .into_iter()
            .map(|(anchor, head)| {
                Selection::new(self.offset_to_pos(anchor), self.offset_to_pos(head))
            })
            .collect();
    }

    fn has_focus(&self) -> bool {
        self.focused
    }

    fn focus(&mut self) {
        self.focused = true;
    }
}
