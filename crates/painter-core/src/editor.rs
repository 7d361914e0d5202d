//! The host editing surface consumed by the engine.
//!
//! Hosts implement the required methods once per editor flavour; everything else has a
//! provided implementation in terms of them. All offsets are character offsets.

use crate::position::{CursorRole, Position, Selection};
use crate::words;

/// Abstract editor capability.
pub trait Editor {
    /// Total document length in characters.
    fn len_chars(&self) -> usize;

    /// Index of the last line.
    fn last_line(&self) -> usize;

    /// Text of `line` without its newline. Out-of-range lines are empty.
    fn line(&self, line: usize) -> String;

    /// Convert a position to a character offset (clamped to the document).
    fn pos_to_offset(&self, pos: Position) -> usize;

    /// Convert a character offset to a position (clamped to the document).
    fn offset_to_pos(&self, offset: usize) -> Position;

    /// Text between two positions, in document order.
    fn range_text(&self, from: Position, to: Position) -> String;

    /// All selections, in host order. Never empty.
    fn selections(&self) -> Vec<Selection>;

    /// Replace every selection.
    fn set_selections(&mut self, selections: Vec<Selection>);

    /// Replace the text between `from` and `to` with `text`.
    fn replace_range(&mut self, text: &str, from: Position, to: Position);

    /// Whether the editor currently has input focus.
    fn has_focus(&self) -> bool;

    /// Request input focus.
    fn focus(&mut self) {}

    /// The main selection.
    fn selection(&self) -> Selection {
        self.selections()
            .first()
            .copied()
            .unwrap_or_else(|| Selection::caret(Position::default()))
    }

    /// A cursor of the main selection.
    fn cursor(&self, role: CursorRole) -> Position {
        role.of(&self.selection())
    }

    /// Text of the main selection.
    fn selection_text(&self) -> String {
        let sel = self.selection();
        self.range_text(sel.from(), sel.to())
    }

    /// Whether any text is selected.
    fn something_selected(&self) -> bool {
        self.selections().iter().any(|s| !s.is_empty())
    }

    /// Replace all selections with a single one.
    fn set_selection(&mut self, anchor: Position, head: Position) {
        self.set_selections(vec![Selection::new(anchor, head)]);
    }

    /// Replace all selections with a caret.
    fn set_cursor(&mut self, pos: Position) {
        self.set_selection(pos, pos);
    }

    /// Replace the main selection's text and leave a caret after the inserted text.
    fn replace_selection(&mut self, text: &str) {
        let sel = self.selection();
        let start = self.pos_to_offset(sel.from());
        self.replace_range(text, sel.from(), sel.to());
        let caret = self.offset_to_pos(start + text.chars().count());
        self.set_cursor(caret);
    }

    /// Text between two character offsets.
    fn slice(&self, start: usize, end: usize) -> String {
        self.range_text(self.offset_to_pos(start), self.offset_to_pos(end))
    }

    /// Character range of the word touching `offset`, if any.
    ///
    /// The default uses Unicode word boundaries (UAX #29) within the offset's line.
    fn word_at(&self, offset: usize) -> Option<(usize, usize)> {
        let pos = self.offset_to_pos(offset);
        let line_start = offset.saturating_sub(pos.column);
        words::word_range_in_line(&self.line(pos.line), pos.column)
            .map(|(start, end)| (line_start + start, line_start + end))
    }
}
