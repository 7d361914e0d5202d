//! Positions, selections and cursor roles.

use std::cmp::Ordering;

/// Position coordinates (line and column numbers)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Position {
    /// Zero-based logical line index.
    pub line: usize,
    /// Zero-based column in characters within the logical line.
    pub column: usize,
}

impl Position {
    /// Create a new logical position.
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }

    /// Same line, column moved by `delta` (saturating at column 0).
    pub fn shifted(self, delta: isize) -> Self {
        Self {
            line: self.line,
            column: self.column.saturating_add_signed(delta),
        }
    }
}

impl Ord for Position {
    fn cmp(&self, other: &Self) -> Ordering {
        self.line
            .cmp(&other.line)
            .then_with(|| self.column.cmp(&other.column))
    }
}

impl PartialOrd for Position {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Selection range.
///
/// `head` may precede `anchor`; use [`Selection::from`] and [`Selection::to`] when document
/// order matters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Selection {
    /// Where the selection started.
    pub anchor: Position,
    /// Where the selection currently ends.
    pub head: Position,
}

impl Selection {
    /// Create a selection.
    pub fn new(anchor: Position, head: Position) -> Self {
        Self { anchor, head }
    }

    /// An empty selection (caret) at `pos`.
    pub fn caret(pos: Position) -> Self {
        Self::new(pos, pos)
    }

    /// Earlier endpoint in document order.
    pub fn from(&self) -> Position {
        self.anchor.min(self.head)
    }

    /// Later endpoint in document order.
    pub fn to(&self) -> Position {
        self.anchor.max(self.head)
    }

    /// Returns `true` if anchor and head coincide.
    pub fn is_empty(&self) -> bool {
        self.anchor == self.head
    }

    /// Returns `true` if both endpoints sit on the same line.
    pub fn is_single_line(&self) -> bool {
        self.anchor.line == self.head.line
    }

    /// Returns `true` if the selection runs backwards.
    pub fn is_reversed(&self) -> bool {
        self.head < self.anchor
    }

    /// Forward copy of this selection (`anchor = from`, `head = to`).
    pub fn normalized(&self) -> Self {
        Self::new(self.from(), self.to())
    }
}

impl From<Position> for Selection {
    fn from(pos: Position) -> Self {
        Self::caret(pos)
    }
}

/// Which end of the current selection a cursor query refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorRole {
    /// Earlier endpoint in document order.
    From,
    /// Later endpoint in document order.
    To,
    /// Moving end.
    Head,
    /// Fixed end.
    Anchor,
}

impl CursorRole {
    /// Resolve the role against a selection.
    pub fn of(self, selection: &Selection) -> Position {
        match self {
            CursorRole::From => selection.from(),
            CursorRole::To => selection.to(),
            CursorRole::Head => selection.head,
            CursorRole::Anchor => selection.anchor,
        }
    }
}
