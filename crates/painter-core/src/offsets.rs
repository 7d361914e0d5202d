//! Position/offset conversion that never fails.
//!
//! Offsets are signed so that callers can do `start - prefix_len` style arithmetic freely;
//! anything outside `[0, len_chars]` is clamped before conversion.

use crate::editor::Editor;
use crate::position::Position;

/// Convert a position to a character offset.
pub fn to_offset<E: Editor + ?Sized>(editor: &E, pos: Position) -> usize {
    editor.pos_to_offset(pos)
}

/// Convert a (possibly out-of-range) character offset to a position, clamping first.
pub fn to_position<E: Editor + ?Sized>(editor: &E, offset: isize) -> Position {
    editor.offset_to_pos(clamp_offset(editor, offset))
}

/// Clamp a signed offset to `[0, len_chars]`.
pub fn clamp_offset<E: Editor + ?Sized>(editor: &E, offset: isize) -> usize {
    let len = editor.len_chars();
    if offset <= 0 {
        0
    } else {
        (offset as usize).min(len)
    }
}

/// Move a cursor of the main selection by `columns` and `lines`, collapsing the selection.
pub fn nudge_cursor<E: Editor + ?Sized>(
    editor: &mut E,
    role: crate::CursorRole,
    columns: isize,
    lines: isize,
) {
    let pos = editor.cursor(role);
    let line = pos.line.saturating_add_signed(lines).min(editor.last_line());
    let target = Position::new(line, pos.column.saturating_add_signed(columns));
    let target = to_position(editor, editor.pos_to_offset(target) as isize);
    editor.set_cursor(target);
}
