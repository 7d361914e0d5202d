//! Applying and removing markup across every cursor.
//!
//! A toggle walks the host's selections in host order. Each one is recalibrated against the
//! edits made for earlier cursors, trimmed, and then handled by one of three strategies:
//!
//! - single line: wrap or unwrap the (expanded) selection
//! - several lines of inline markup: wrap or unwrap each non-empty line independently
//! - several lines of block-capable markup: add or remove fence lines around the block

use painter_lang::{BlockFence, MarkupSpec, TrimTables};
use tracing::{debug, warn};

use crate::detect::{is_block_present, is_present_outside};
use crate::editor::Editor;
use crate::error::MarkupError;
use crate::expand::expand;
use crate::link::{Clipboard, resolve_link_markup};
use crate::position::{Position, Selection};
use crate::recalibrate::ShiftLog;
use crate::trim::trim;

/// Caller-controlled toggle behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToggleOptions {
    /// Grow selections to whole tokens before toggling.
    pub expand_empty_selection: bool,
    /// After a single-line toggle, leave a caret right after the edited span instead of
    /// restoring the selection relative to the text.
    pub move_cursor_to_end: bool,
}

impl Default for ToggleOptions {
    fn default() -> Self {
        Self {
            expand_empty_selection: true,
            move_cursor_to_end: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LineMode {
    Single,
    PerLine,
}

/// Stateful toggler bound to one editor.
pub struct MarkupEngine<'a, E: Editor + ?Sized> {
    editor: &'a mut E,
    tables: TrimTables,
    clipboard: Option<&'a mut dyn Clipboard>,
    shifts: ShiftLog,
}

impl<'a, E: Editor + ?Sized> MarkupEngine<'a, E> {
    /// Create an engine with the Markdown trim tables and no clipboard.
    pub fn new(editor: &'a mut E) -> Self {
        Self {
            editor,
            tables: TrimTables::default(),
            clipboard: None,
            shifts: ShiftLog::new(),
        }
    }

    /// Builder: use other trim tables.
    pub fn with_tables(mut self, tables: TrimTables) -> Self {
        self.tables = tables;
        self
    }

    /// Builder: attach a clipboard for link markup.
    pub fn with_clipboard(mut self, clipboard: &'a mut dyn Clipboard) -> Self {
        self.clipboard = Some(clipboard);
        self
    }

    /// Shifts recorded by the most recent toggle.
    pub fn shift_log(&self) -> &ShiftLog {
        &self.shifts
    }

    /// The underlying editor.
    pub fn editor(&self) -> &E {
        &*self.editor
    }

    /// Toggle `spec` at every cursor.
    ///
    /// Fails only when the editor has no focus, in which case nothing is changed.
    pub fn toggle(&mut self, spec: &MarkupSpec, options: ToggleOptions) -> Result<(), MarkupError> {
        if !self.editor.has_focus() {
            warn!(prefix = %spec.prefix, "markup toggle aborted: editor has no focus");
            return Err(MarkupError::EditorNotFocused);
        }

        // One clipboard read per toggle, before any cursor is touched.
        let spec = match self.clipboard.as_deref_mut() {
            Some(clipboard) if spec.wants_clipboard_link() => resolve_link_markup(spec, clipboard),
            _ => spec.clone(),
        };

        let selections = self.editor.selections();
        debug!(
            cursors = selections.len(),
            prefix = %spec.prefix,
            suffix = %spec.suffix,
            "toggling markup"
        );
        self.shifts.clear();

        for selection in selections {
            let selection = self.shifts.recalibrate_selection(&selection);
            self.select(selection);

            // Keeps triple-click selections (which end on the next line) single-line.
            let selection = trim(&*self.editor, &selection, &spec, &self.tables);
            self.select(selection);

            if selection.is_single_line() {
                let original = self.expand_or_keep(selection, &spec, options);
                self.apply_markup(&spec, original, LineMode::Single, options);
            } else if let Some(fence) = spec.fence() {
                debug!(open = %fence.open, "block toggle");
                self.toggle_block(fence);
            } else {
                debug!("per-line toggle");
                self.toggle_each_line(&spec, options);
            }
        }

        Ok(())
    }

    fn select(&mut self, selection: Selection) {
        self.editor.set_selection(selection.anchor, selection.head);
    }

    /// Select what should be wrapped and return the pre-expansion selection.
    fn expand_or_keep(
        &mut self,
        selection: Selection,
        spec: &MarkupSpec,
        options: ToggleOptions,
    ) -> Selection {
        if !options.expand_empty_selection {
            return selection;
        }
        let expansion = expand(&*self.editor, &selection, spec, &self.tables);
        self.select(expansion.selection);
        expansion.original
    }

    /// Toggle `spec` around the editor's current selection, returning the net change in
    /// document length.
    fn apply_markup(
        &mut self,
        spec: &MarkupSpec,
        original: Selection,
        mode: LineMode,
        options: ToggleOptions,
    ) -> isize {
        let current = self.editor.selection();
        if mode == LineMode::PerLine && current.is_empty() {
            return 0;
        }

        let start = self.editor.pos_to_offset(current.from());
        let end = self.editor.pos_to_offset(current.to());
        let inner = self.editor.slice(start, end);
        let inner_len = inner.chars().count();
        let mut anchor = original.anchor;
        let mut head = original.head;

        let (delta, edited_end) = match self.present_delimiters(spec, &current) {
            Some((prefix_len, suffix_len)) => {
                let from = self.editor.offset_to_pos(start - prefix_len);
                let to = self.editor.offset_to_pos(end + suffix_len);
                self.editor.replace_range(&inner, from, to);

                let (pre, suf) = (prefix_len as isize, suffix_len as isize);
                self.shifts.record(anchor.line, -pre);
                self.shifts.record(head.line, -suf);
                anchor = anchor.shifted(-pre);
                head = head.shifted(-pre);
                debug!(line = anchor.line, "removed markup");
                (-(pre + suf), start - prefix_len + inner_len)
            }
            None => {
                let (text, pre, suf) = if spec.pad_inner {
                    (
                        format!("{} {inner} {}", spec.prefix, spec.suffix),
                        spec.prefix_len() + 1,
                        spec.suffix_len() + 1,
                    )
                } else {
                    (
                        format!("{}{inner}{}", spec.prefix, spec.suffix),
                        spec.prefix_len(),
                        spec.suffix_len(),
                    )
                };
                self.editor.replace_range(&text, current.from(), current.to());

                let (pre, suf) = (pre as isize, suf as isize);
                self.shifts.record(anchor.line, pre);
                self.shifts.record(head.line, suf);
                anchor = anchor.shifted(pre);
                head = head.shifted(pre);
                debug!(line = anchor.line, "applied markup");
                (pre + suf, start + text.chars().count())
            }
        };

        if mode == LineMode::Single {
            if options.move_cursor_to_end {
                let caret = self.editor.offset_to_pos(edited_end);
                self.editor.set_cursor(caret);
            } else {
                self.editor.set_selection(anchor, head);
            }
        }

        delta
    }

    /// Delimiter lengths to remove if `spec` already wraps `selection`.
    fn present_delimiters(
        &self,
        spec: &MarkupSpec,
        selection: &Selection,
    ) -> Option<(usize, usize)> {
        if spec.pad_inner {
            let padded_prefix = format!("{} ", spec.prefix);
            let padded_suffix = format!(" {}", spec.suffix);
            if is_present_outside(&*self.editor, selection, &padded_prefix, &padded_suffix) {
                return Some((spec.prefix_len() + 1, spec.suffix_len() + 1));
            }
        }
        is_present_outside(&*self.editor, selection, &spec.prefix, &spec.suffix)
            .then(|| (spec.prefix_len(), spec.suffix_len()))
    }

    fn toggle_each_line(&mut self, spec: &MarkupSpec, options: ToggleOptions) {
        let selection = self.editor.selection();
        let mut pointer = self.editor.pos_to_offset(selection.from()) as isize;
        let text = self.editor.range_text(selection.from(), selection.to());

        for line in text.split('\n') {
            let len = line.chars().count() as isize;
            let start = pointer.max(0) as usize;
            let line_selection = Selection::new(
                self.editor.offset_to_pos(start),
                self.editor.offset_to_pos(start + len as usize),
            );
            let line_selection = trim(&*self.editor, &line_selection, spec, &self.tables);
            self.select(line_selection);

            let original = self.expand_or_keep(line_selection, spec, options);
            let delta = self.apply_markup(spec, original, LineMode::PerLine, options);
            pointer += len + 1 + delta;
        }
    }

    fn toggle_block(&mut self, fence: &BlockFence) {
        let selection = self.editor.selection();
        let anchor = Position::new(selection.from().line, 0);
        let head_line = selection.to().line;
        let head = Position::new(head_line, self.editor.line(head_line).chars().count());

        if is_block_present(&*self.editor, anchor, head, &fence.open, &fence.close) {
            delete_line(&mut *self.editor, anchor.line - 1);
            self.shifts.record_lines(anchor.line, -1);
            // The closing fence moved up with the opening fence gone.
            delete_line(&mut *self.editor, head.line);
            self.shifts.record_lines(head.line + 1, -1);
            let first = anchor.line - 1;
            let last = head.line - 1;
            let end = Position::new(last, self.editor.line(last).chars().count());
            self.editor.set_selection(Position::new(first, 0), end);
            debug!(first, last, "removed block fence");
            return;
        }

        self.editor
            .replace_range(&format!("{}\n", fence.open), anchor, anchor);
        self.shifts.record_lines(anchor.line, 1);
        let head = Position::new(head.line + 1, head.column);
        self.editor
            .replace_range(&format!("\n{}", fence.close), head, head);
        self.shifts.record_lines(head.line + 1, 1);

        let caret = if fence.info_string {
            Position::new(anchor.line, fence.open.chars().count())
        } else {
            Position::new(head.line + 1, fence.close.chars().count())
        };
        self.editor.set_cursor(caret);
        debug!(first = anchor.line, last = head.line, "added block fence");
    }
}

/// Toggle `spec` at every cursor of `editor`, with the Markdown trim tables and no clipboard.
pub fn apply_or_remove_markup<E: Editor + ?Sized>(
    editor: &mut E,
    spec: &MarkupSpec,
    options: ToggleOptions,
) -> Result<(), MarkupError> {
    MarkupEngine::new(editor).toggle(spec, options)
}

/// Delete `line` including one adjacent newline.
///
/// A line that is not the last takes its own newline with it; the last line takes the
/// preceding one. Out-of-range lines are ignored.
pub fn delete_line<E: Editor + ?Sized>(editor: &mut E, line: usize) {
    let last = editor.last_line();
    if line > last {
        return;
    }
    let line_end = Position::new(line, editor.line(line).chars().count());
    if line < last {
        editor.replace_range("", Position::new(line, 0), Position::new(line + 1, 0));
    } else if line > 0 {
        let prev_end = Position::new(line - 1, editor.line(line - 1).chars().count());
        editor.replace_range("", prev_end, line_end);
    } else {
        editor.replace_range("", Position::new(0, 0), line_end);
    }
}
