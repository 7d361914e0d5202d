//! Multi-cursor recalibration.
//!
//! While one toggle walks the host's cursors, every edit appends the column displacement it
//! caused on the affected line, and block edits append the lines they inserted or removed.
//! Cursors processed later replay the log in order and move accordingly.

use crate::position::{Position, Selection};

/// A net column displacement on one line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContentShift {
    /// Line the edit happened on.
    pub line: usize,
    /// Characters inserted (positive) or removed (negative).
    pub shift: isize,
}

/// Lines inserted (positive) or removed (negative) at `from_line`.
///
/// Every position on `from_line` or below moves by `lines`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineShift {
    /// First line that moves.
    pub from_line: usize,
    /// Line count delta.
    pub lines: isize,
}

impl LineShift {
    fn apply(&self, pos: Position) -> Position {
        if pos.line < self.from_line {
            return pos;
        }
        let line = (pos.line as isize + self.lines).max(0) as usize;
        Position::new(line, pos.column)
    }
}

/// Append-only shift records for one multi-cursor operation.
#[derive(Debug, Clone, Default)]
pub struct ShiftLog {
    shifts: Vec<ContentShift>,
    // Each line shift remembers how many column shifts preceded it.
    line_shifts: Vec<(usize, LineShift)>,
}

impl ShiftLog {
    /// Create an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a shift on `line`.
    pub fn record(&mut self, line: usize, shift: isize) {
        self.shifts.push(ContentShift { line, shift });
    }

    /// Record `lines` lines inserted or removed at `from_line`.
    pub fn record_lines(&mut self, from_line: usize, lines: isize) {
        self.line_shifts.push((self.shifts.len(), LineShift { from_line, lines }));
    }

    /// Replay the log against `pos`, oldest record first.
    ///
    /// Column shifts apply when they were recorded on the line `pos` is on at that point of
    /// the replay; line shifts move it down or up.
    pub fn recalibrate(&self, pos: Position) -> Position {
        let shift_column = |pos: Position, change: &ContentShift| {
            if change.line == pos.line {
                pos.shifted(change.shift)
            } else {
                pos
            }
        };

        let mut pos = pos;
        let mut replayed = 0;
        for (before, lines) in &self.line_shifts {
            pos = self.shifts[replayed..*before].iter().fold(pos, shift_column);
            replayed = *before;
            pos = lines.apply(pos);
        }
        self.shifts[replayed..].iter().fold(pos, shift_column)
    }

    /// Recalibrate both ends of a selection.
    pub fn recalibrate_selection(&self, selection: &Selection) -> Selection {
        Selection::new(
            self.recalibrate(selection.anchor),
            self.recalibrate(selection.head),
        )
    }

    /// Recorded column shifts, oldest first.
    pub fn shifts(&self) -> &[ContentShift] {
        &self.shifts
    }

    /// Recorded line shifts, oldest first.
    pub fn line_shifts(&self) -> impl Iterator<Item = &LineShift> {
        self.line_shifts.iter().map(|(_, lines)| lines)
    }

    /// Returns `true` if nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.shifts.is_empty() && self.line_shifts.is_empty()
    }

    /// Drop all records.
    pub fn clear(&mut self) {
        self.shifts.clear();
        self.line_shifts.clear();
    }
}
