// Chunk: docs/chunks/text_buffer - Bounded text buffer engine

//! TextBuffer is the engine behind one limited text field.
//!
//! It owns the logical content (a gap buffer), the reflow [`Layout`] derived
//! from it, the current selection in display coordinates, and the composition
//! gate. The host drives it with [`EditIntent`]s and applies the returned
//! [`EngineResult`] verbatim.
//!
//! Every edit follows the same path:
//!
//! 1. convert the host selection from display to logical offsets
//! 2. splice the logical content
//! 3. enforce the limits (truncate mode only)
//! 4. reflow
//! 5. convert the caret back to display offsets

use crate::composition::Composition;
use crate::config::LimiterConfig;
use crate::edit::{EditIntent, EngineResult};
use crate::error::{ConfigError, EditError};
use crate::gap_buffer::GapBuffer;
use crate::grapheme::{grapheme_boundary_left, grapheme_boundary_right};
use crate::limits::{LimitPolicy, LimitSignal, OverflowMode};
use crate::reflow::{Layout, SOFT_BREAK_MARKER};
use crate::types::{LogicalOffset, Selection};

/// A bounded, soft-wrapping text buffer.
#[derive(Debug, Clone)]
pub struct TextBuffer {
    buffer: GapBuffer,
    layout: Layout,
    /// Always within `0..=layout.display_len()`.
    selection: Selection,
    config: LimiterConfig,
    policy: LimitPolicy,
    composition: Composition,
    /// Validity carried by the last returned result. A new field is valid.
    last_valid: bool,
}

impl TextBuffer {
    /// Creates an empty buffer.
    pub fn new(config: LimiterConfig) -> Result<Self, ConfigError> {
        Self::with_content(config, "")
    }

    /// Creates a buffer holding the host's initial value.
    ///
    /// The value is normalized like inserted text. In truncate mode anything
    /// beyond the limits is dropped; in signal mode it is kept and the first
    /// result reports it. The caret starts at the end.
    pub fn with_content(config: LimiterConfig, initial: &str) -> Result<Self, ConfigError> {
        let policy = config.to_policy()?;
        let buffer = GapBuffer::from_chars(normalize_input(initial).chars());
        let layout = Layout::reflow(buffer.chars(), policy.max_line_width());
        let mut this = Self {
            buffer,
            layout,
            selection: Selection::default(),
            config,
            policy,
            composition: Composition::Idle,
            last_valid: true,
        };
        this.enforce_limits();
        this.reflow();
        this.selection = Selection::caret(this.layout.display_len());
        Ok(this)
    }

    // ==================== Accessors ====================

    pub fn config(&self) -> &LimiterConfig {
        &self.config
    }

    /// The reflow layout of the current content.
    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    /// The logical content, without soft breaks.
    pub fn content(&self) -> String {
        self.buffer.to_string()
    }

    /// The content as the host displays it, U+2028 at every soft break.
    pub fn displayed_content(&self) -> String {
        self.layout.displayed_string()
    }

    /// Selection after the last edit, in display coordinates.
    pub fn selection(&self) -> Selection {
        self.selection
    }

    /// Logical text covered by `selection` (display coordinates). Soft breaks
    /// inside it are not part of the result.
    pub fn selected_text(&self, selection: Selection) -> String {
        let selection = selection.clamp(self.layout.display_len());
        let start = self.layout.to_logical(selection.start).get();
        let end = self.layout.to_logical(selection.end).get();
        self.buffer.slice(start, end)
    }

    /// Logical length in chars.
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Returns true if the content is within every limit.
    pub fn is_within_limits(&self) -> bool {
        self.policy.permits(self.layout.measure())
    }

    /// The current state as a result, without editing anything.
    ///
    /// `limit_signal.changed` compares against the last result an edit
    /// returned.
    pub fn snapshot(&self) -> EngineResult {
        let signal = self.signal_for(self.is_within_limits());
        self.result(signal, None)
    }

    // ==================== Composition ====================
    // Chunk: docs/chunks/composition_gate - IME composition state machine

    pub fn is_composing(&self) -> bool {
        self.composition.is_active()
    }

    /// Starts an IME composition. The committed text will replace `selection`.
    pub fn begin_composition(&mut self, selection: Selection) {
        let anchor = selection.clamp(self.layout.display_len());
        tracing::debug!(start = %anchor.start, end = %anchor.end, "composition started");
        self.composition.begin(anchor);
    }

    /// Records the host's current preedit text. The content is not touched.
    pub fn update_composition(&mut self, preedit: &str) {
        self.composition.update(preedit);
    }

    pub fn preedit(&self) -> Option<&str> {
        self.composition.preedit()
    }

    /// Abandons the composition without inserting anything.
    pub fn cancel_composition(&mut self) {
        if self.composition.finish().is_some() {
            tracing::debug!("composition cancelled");
        }
    }

    // ==================== Mutations ====================

    /// Applies one edit with the host's current selection.
    ///
    /// `cursor` is in display coordinates and is clamped to the displayed
    /// content. While composing, only [`EditIntent::CompositionCommit`] is
    /// accepted; it inserts at the selection captured when composition began
    /// and ignores `cursor`.
    pub fn apply_edit(
        &mut self,
        intent: EditIntent,
        cursor: Selection,
    ) -> Result<EngineResult, EditError> {
        if self.composition.is_active() && !matches!(intent, EditIntent::CompositionCommit(_)) {
            tracing::warn!(intent = intent.name(), "edit rejected during composition");
            return Err(EditError::CompositionActive {
                intent: intent.name(),
            });
        }

        let cursor = match intent {
            EditIntent::CompositionCommit(_) => self.composition.finish().unwrap_or(cursor),
            _ => cursor,
        };
        let cursor = cursor.clamp(self.layout.display_len());
        let start = self.layout.to_logical(cursor.start).get();
        let end = self.layout.to_logical(cursor.end).get();
        let name = intent.name();

        let mut cut_text = None;
        let caret = match intent {
            EditIntent::Insert(text) | EditIntent::CompositionCommit(text) => {
                self.insert(start, end, &text)
            }
            EditIntent::DeleteBackward => {
                if cursor.is_collapsed() {
                    let chars = self.chars();
                    let from = grapheme_boundary_left(&chars, start);
                    self.buffer.splice(from, start, "");
                    from
                } else {
                    self.buffer.splice(start, end, "");
                    start
                }
            }
            EditIntent::DeleteForward => {
                if cursor.is_collapsed() {
                    let chars = self.chars();
                    let to = grapheme_boundary_right(&chars, start);
                    self.buffer.splice(start, to, "");
                } else {
                    self.buffer.splice(start, end, "");
                }
                start
            }
            EditIntent::Cut => {
                let removed = self.buffer.splice(start, end, "");
                if !removed.is_empty() {
                    cut_text = Some(removed);
                }
                start
            }
        };

        self.enforce_limits();
        self.reflow();
        let caret = caret.min(self.buffer.len());
        self.selection = Selection::caret(self.layout.to_display(LogicalOffset::new(caret)).get());

        let valid = self.is_within_limits();
        let signal = self.signal_for(valid);
        self.last_valid = valid;

        tracing::debug!(
            intent = name,
            logical_len = self.buffer.len(),
            lines = self.layout.line_count(),
            cursor = %self.selection.start,
            valid,
            "edit applied"
        );

        Ok(self.result(signal, cut_text))
    }

    /// Replaces the whole content, e.g. when the host resets the field's
    /// value. Any open composition is abandoned and the caret moves to the
    /// end.
    pub fn set_content(&mut self, text: &str) -> EngineResult {
        self.composition = Composition::Idle;
        self.buffer = GapBuffer::from_chars(normalize_input(text).chars());
        self.enforce_limits();
        self.reflow();
        self.selection = Selection::caret(self.layout.display_len());

        let valid = self.is_within_limits();
        let signal = self.signal_for(valid);
        self.last_valid = valid;
        tracing::debug!(logical_len = self.buffer.len(), valid, "content replaced");
        self.result(signal, None)
    }

    /// Inserts `text` over the logical range `[start, end)` and returns the
    /// caret after it. In truncate mode only the longest fitting prefix of
    /// `text` goes in.
    fn insert(&mut self, start: usize, end: usize, text: &str) -> usize {
        let mut inserted: Vec<char> = normalize_input(text).chars().collect();

        if self.policy.mode() == OverflowMode::Truncate && !inserted.is_empty() {
            let chars = self.chars();
            let keep = self.policy.fitting_insert_len(
                &chars[..start],
                &inserted,
                &chars[end.min(chars.len())..],
            );
            if keep < inserted.len() {
                tracing::debug!(
                    requested = inserted.len(),
                    kept = keep,
                    "insert truncated to fit limits"
                );
                inserted.truncate(keep);
            }
        }

        let replacement: String = inserted.iter().collect();
        self.buffer.splice(start, end, &replacement);
        start + inserted.len()
    }

    /// In truncate mode, drops trailing content until the buffer fits.
    fn enforce_limits(&mut self) {
        if self.policy.mode() != OverflowMode::Truncate {
            return;
        }
        let chars = self.chars();
        let keep = self.policy.longest_fitting_prefix(&chars);
        if keep < chars.len() {
            tracing::debug!(
                len = chars.len(),
                kept = keep,
                "content truncated to fit limits"
            );
            self.buffer.truncate(keep);
        }
    }

    fn reflow(&mut self) {
        self.layout = Layout::reflow(self.buffer.chars(), self.policy.max_line_width());
        self.assert_layout_consistent();
    }

    fn chars(&self) -> Vec<char> {
        self.buffer.chars().collect()
    }

    fn signal_for(&self, valid: bool) -> Option<LimitSignal> {
        match self.policy.mode() {
            OverflowMode::Truncate => None,
            OverflowMode::Signal => Some(LimitSignal {
                valid,
                changed: valid != self.last_valid,
            }),
        }
    }

    fn result(&self, limit_signal: Option<LimitSignal>, cut_text: Option<String>) -> EngineResult {
        EngineResult {
            displayed_content: self.layout.displayed_string(),
            cursor_start: self.selection.start,
            cursor_end: self.selection.end,
            limit_signal,
            cut_text,
        }
    }

    // ==================== Validation ====================

    #[cfg(debug_assertions)]
    fn assert_layout_consistent(&self) {
        debug_assert_eq!(
            self.layout.logical_len(),
            self.buffer.len(),
            "layout out of sync with content"
        );
    }

    #[cfg(not(debug_assertions))]
    fn assert_layout_consistent(&self) {}
}

/// Normalizes text arriving from the host: CRLF and lone CR become `\n`, and
/// the soft-break marker is removed so it can never enter the content.
pub fn normalize_input(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();
    while let Some(ch) = chars.next() {
        match ch {
            '\r' => {
                if chars.peek() == Some(&'\n') {
                    chars.next();
                }
                out.push('\n');
            }
            SOFT_BREAK_MARKER => {}
            _ => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::DisplayOffset;

    fn config(max_line: usize, total: usize, lines: Option<usize>, truncate: bool) -> LimiterConfig {
        LimiterConfig {
            max_total_length: total,
            max_line_length: max_line,
            max_lines: lines,
            auto_truncate: truncate,
        }
    }

    /// Truncating buffer with generous totals and the given line width.
    fn wrapping(max_line: usize, content: &str) -> TextBuffer {
        TextBuffer::with_content(config(max_line, 1000, None, true), content).unwrap()
    }

    fn apply(buf: &mut TextBuffer, intent: EditIntent, sel: Selection) -> EngineResult {
        buf.apply_edit(intent, sel).unwrap()
    }

    fn insert(text: &str) -> EditIntent {
        EditIntent::Insert(text.to_string())
    }

    // ==================== Construction ====================

    #[test]
    fn test_new_is_empty() {
        let buf = TextBuffer::new(LimiterConfig::default()).unwrap();
        assert!(buf.is_empty());
        assert_eq!(buf.displayed_content(), "");
        assert_eq!(buf.selection(), Selection::caret(0));
    }

    #[test]
    fn test_new_rejects_invalid_config() {
        let err = TextBuffer::new(config(1, 10, None, true)).unwrap_err();
        assert_eq!(err, ConfigError::LineLengthTooSmall { max_line_length: 1 });
    }

    #[test]
    fn test_with_content_wraps_and_places_caret_at_end() {
        let buf = wrapping(4, "ABCDE");
        assert_eq!(buf.displayed_content(), "ABCD\u{2028}E");
        assert_eq!(buf.selection(), Selection::caret(6));
    }

    #[test]
    fn test_with_content_truncates_in_truncate_mode() {
        let buf = TextBuffer::with_content(config(80, 3, None, true), "ABCDE").unwrap();
        assert_eq!(buf.content(), "ABC");
    }

    #[test]
    fn test_with_content_keeps_overflow_in_signal_mode() {
        let buf = TextBuffer::with_content(config(80, 3, None, false), "ABCDE").unwrap();
        assert_eq!(buf.content(), "ABCDE");
        let snap = buf.snapshot();
        assert_eq!(
            snap.limit_signal,
            Some(LimitSignal {
                valid: false,
                changed: true
            })
        );
    }

    // ==================== Insert ====================

    #[test]
    fn test_insert_into_empty() {
        let mut buf = wrapping(80, "");
        let result = apply(&mut buf, insert("hello"), Selection::caret(0));
        assert_eq!(result.displayed_content, "hello");
        assert_eq!(result.cursor_start, DisplayOffset::new(5));
        assert_eq!(result.cursor_end, DisplayOffset::new(5));
        assert_eq!(result.limit_signal, None);
    }

    #[test]
    fn test_insert_replaces_selection() {
        let mut buf = wrapping(80, "ABCDE");
        let result = apply(&mut buf, insert("x"), Selection::new(1, 3));
        assert_eq!(buf.content(), "AxDE");
        assert_eq!(result.selection(), Selection::caret(2));
    }

    #[test]
    fn test_insert_typed_one_at_a_time_wraps() {
        let mut buf = wrapping(4, "");
        let mut sel = Selection::caret(0);
        for ch in "ABCDE".chars() {
            sel = apply(&mut buf, insert(&ch.to_string()), sel).selection();
        }
        assert_eq!(buf.content(), "ABCDE");
        assert_eq!(buf.displayed_content(), "ABCD\u{2028}E");
        assert_eq!(sel, Selection::caret(6));
    }

    #[test]
    fn test_insert_strips_markers_and_normalizes_line_endings() {
        let mut buf = wrapping(80, "");
        apply(&mut buf, insert("a\u{2028}b\r\nc\rd"), Selection::caret(0));
        assert_eq!(buf.content(), "ab\nc\nd");
    }

    #[test]
    fn test_empty_insert_is_noop() {
        let mut buf = wrapping(4, "ABCDE");
        let result = apply(&mut buf, insert(""), Selection::caret(2));
        assert_eq!(buf.content(), "ABCDE");
        assert_eq!(result.selection(), Selection::caret(2));
    }

    #[test]
    fn test_cursor_past_end_is_clamped() {
        let mut buf = wrapping(80, "ab");
        let result = apply(&mut buf, insert("c"), Selection::new(99, 50));
        assert_eq!(buf.content(), "abc");
        assert_eq!(result.selection(), Selection::caret(3));
    }

    // ==================== Delete ====================

    #[test]
    fn test_delete_backward_collapsed() {
        let mut buf = wrapping(80, "ABCD");
        let result = apply(&mut buf, EditIntent::DeleteBackward, Selection::caret(2));
        assert_eq!(buf.content(), "ACD");
        assert_eq!(result.selection(), Selection::caret(1));
    }

    #[test]
    fn test_delete_backward_at_start_is_noop() {
        let mut buf = wrapping(80, "AB");
        let result = apply(&mut buf, EditIntent::DeleteBackward, Selection::caret(0));
        assert_eq!(buf.content(), "AB");
        assert_eq!(result.selection(), Selection::caret(0));
    }

    #[test]
    fn test_delete_forward_collapsed_and_at_end() {
        let mut buf = wrapping(80, "ABCD");
        apply(&mut buf, EditIntent::DeleteForward, Selection::caret(1));
        assert_eq!(buf.content(), "ACD");

        let result = apply(&mut buf, EditIntent::DeleteForward, Selection::caret(3));
        assert_eq!(buf.content(), "ACD");
        assert_eq!(result.selection(), Selection::caret(3));
    }

    #[test]
    fn test_delete_selection_either_direction() {
        let mut buf = wrapping(80, "ABCDE");
        apply(&mut buf, EditIntent::DeleteForward, Selection::new(1, 3));
        assert_eq!(buf.content(), "ADE");

        let result = apply(&mut buf, EditIntent::DeleteBackward, Selection::new(0, 2));
        assert_eq!(buf.content(), "E");
        assert_eq!(result.selection(), Selection::caret(0));
    }

    #[test]
    fn test_delete_backward_next_to_soft_break_removes_real_char() {
        // "ABCD⏎E": both sides of the marker map to logical 4.
        for caret in [4, 5] {
            let mut buf = wrapping(4, "ABCDE");
            let result = apply(&mut buf, EditIntent::DeleteBackward, Selection::caret(caret));
            assert_eq!(buf.content(), "ABCE");
            assert_eq!(result.displayed_content, "ABCE");
            assert_eq!(result.selection(), Selection::caret(3));
        }
    }

    #[test]
    fn test_delete_forward_before_soft_break_removes_wrapped_char() {
        let mut buf = wrapping(4, "ABCDE");
        let result = apply(&mut buf, EditIntent::DeleteForward, Selection::caret(4));
        assert_eq!(buf.content(), "ABCD");
        assert_eq!(result.selection(), Selection::caret(4));
    }

    #[test]
    fn test_selection_over_marker_only_deletes_nothing() {
        let mut buf = wrapping(4, "ABCDE");
        apply(&mut buf, EditIntent::DeleteBackward, Selection::new(4, 5));
        assert_eq!(buf.content(), "ABCDE");
    }

    #[test]
    fn test_delete_removes_whole_grapheme() {
        let mut buf = wrapping(80, "e\u{0301}x");
        let result = apply(&mut buf, EditIntent::DeleteBackward, Selection::caret(2));
        assert_eq!(buf.content(), "x");
        assert_eq!(result.selection(), Selection::caret(0));

        let mut buf = wrapping(80, "e\u{0301}x");
        apply(&mut buf, EditIntent::DeleteForward, Selection::caret(0));
        assert_eq!(buf.content(), "x");
    }

    // ==================== Cut ====================

    #[test]
    fn test_cut_returns_removed_text() {
        let mut buf = wrapping(80, "ABCDE");
        let result = apply(&mut buf, EditIntent::Cut, Selection::new(1, 3));
        assert_eq!(buf.content(), "ADE");
        assert_eq!(result.cut_text.as_deref(), Some("BC"));
        assert_eq!(result.selection(), Selection::caret(1));
    }

    #[test]
    fn test_cut_across_soft_break_returns_logical_text() {
        let mut buf = wrapping(4, "ABCDEF");
        assert_eq!(buf.displayed_content(), "ABCD\u{2028}EF");
        let result = apply(&mut buf, EditIntent::Cut, Selection::new(3, 6));
        assert_eq!(result.cut_text.as_deref(), Some("DE"));
        assert_eq!(buf.content(), "ABCF");
    }

    #[test]
    fn test_selected_text_skips_soft_breaks() {
        let buf = wrapping(4, "ABCDEF");
        assert_eq!(buf.selected_text(Selection::new(2, 7)), "CDEF");
        assert_eq!(buf.selected_text(Selection::caret(3)), "");
    }

    #[test]
    fn test_cut_empty_selection_is_noop() {
        let mut buf = wrapping(80, "ABC");
        let result = apply(&mut buf, EditIntent::Cut, Selection::caret(1));
        assert_eq!(buf.content(), "ABC");
        assert_eq!(result.cut_text, None);
    }

    // ==================== Limits ====================

    #[test]
    fn test_truncate_drops_excess_insert() {
        let mut buf = TextBuffer::new(config(80, 5, None, true)).unwrap();
        let result = apply(&mut buf, insert("ABCDEFG"), Selection::caret(0));
        assert_eq!(buf.content(), "ABCDE");
        assert_eq!(result.selection(), Selection::caret(5));
        assert_eq!(result.limit_signal, None);
    }

    #[test]
    fn test_truncate_keeps_text_after_insertion_point() {
        let mut buf = TextBuffer::with_content(config(80, 5, None, true), "ABCD").unwrap();
        let result = apply(&mut buf, insert("xyz"), Selection::caret(2));
        assert_eq!(buf.content(), "ABxCD");
        assert_eq!(result.selection(), Selection::caret(3));
    }

    #[test]
    fn test_truncate_by_line_count() {
        let mut buf = TextBuffer::new(config(4, 100, Some(2), true)).unwrap();
        apply(&mut buf, insert("ABCDEFGHIJ"), Selection::caret(0));
        assert_eq!(buf.content(), "ABCDEFGH");
        assert_eq!(buf.displayed_content(), "ABCD\u{2028}EFGH");
    }

    #[test]
    fn test_truncate_full_width_counts_double() {
        let mut buf = TextBuffer::new(config(80, 5, None, true)).unwrap();
        apply(&mut buf, insert("中文字"), Selection::caret(0));
        assert_eq!(buf.content(), "中文");
    }

    #[test]
    fn test_signal_reports_changes_only_once() {
        let mut buf = TextBuffer::new(config(80, 5, None, false)).unwrap();

        let r = apply(&mut buf, insert("ABCDEF"), Selection::caret(0));
        assert_eq!(buf.content(), "ABCDEF");
        assert_eq!(r.limit_signal, Some(LimitSignal { valid: false, changed: true }));

        let r = apply(&mut buf, insert("G"), r.selection());
        assert_eq!(r.limit_signal, Some(LimitSignal { valid: false, changed: false }));

        let r = apply(&mut buf, EditIntent::DeleteBackward, r.selection());
        assert_eq!(r.limit_signal, Some(LimitSignal { valid: false, changed: false }));

        let r = apply(&mut buf, EditIntent::DeleteBackward, r.selection());
        assert_eq!(buf.content(), "ABCDE");
        assert_eq!(r.limit_signal, Some(LimitSignal { valid: true, changed: true }));
    }

    // ==================== Composition ====================

    #[test]
    fn test_edits_rejected_while_composing() {
        let mut buf = wrapping(80, "ABCD");
        buf.begin_composition(Selection::caret(2));
        for intent in [
            insert("x"),
            EditIntent::DeleteBackward,
            EditIntent::DeleteForward,
            EditIntent::Cut,
        ] {
            let name = intent.name();
            assert_eq!(
                buf.apply_edit(intent, Selection::caret(2)),
                Err(EditError::CompositionActive { intent: name })
            );
        }
        assert_eq!(buf.content(), "ABCD");
        assert!(buf.is_composing());
    }

    #[test]
    fn test_commit_inserts_at_composition_anchor() {
        let mut buf = wrapping(80, "ABCD");
        buf.begin_composition(Selection::caret(2));
        buf.update_composition("zhong");
        assert_eq!(buf.preedit(), Some("zhong"));

        let result = apply(
            &mut buf,
            EditIntent::CompositionCommit("中".to_string()),
            Selection::caret(99),
        );
        assert_eq!(buf.content(), "AB中CD");
        assert_eq!(result.selection(), Selection::caret(3));
        assert!(!buf.is_composing());
    }

    #[test]
    fn test_commit_while_idle_uses_cursor() {
        let mut buf = wrapping(80, "AB");
        apply(&mut buf, EditIntent::CompositionCommit("x".into()), Selection::caret(1));
        assert_eq!(buf.content(), "AxB");
    }

    #[test]
    fn test_cancel_composition_reopens_edits() {
        let mut buf = wrapping(80, "AB");
        buf.begin_composition(Selection::caret(1));
        buf.cancel_composition();
        assert!(!buf.is_composing());
        apply(&mut buf, EditIntent::DeleteBackward, Selection::caret(1));
        assert_eq!(buf.content(), "B");
    }

    // ==================== Content reset ====================

    #[test]
    fn test_set_content_moves_caret_to_end_and_ends_composition() {
        let mut buf = wrapping(4, "x");
        buf.begin_composition(Selection::caret(0));
        let result = buf.set_content("ABCDE");
        assert_eq!(result.displayed_content, "ABCD\u{2028}E");
        assert_eq!(result.selection(), Selection::caret(6));
        assert!(!buf.is_composing());
    }

    #[test]
    fn test_snapshot_does_not_mutate() {
        let buf = wrapping(4, "ABCDE");
        let snap = buf.snapshot();
        assert_eq!(snap.displayed_content, "ABCD\u{2028}E");
        assert_eq!(snap.cut_text, None);
        assert_eq!(buf.content(), "ABCDE");
    }

    // ==================== Normalization ====================

    #[test]
    fn test_normalize_input() {
        assert_eq!(normalize_input("a\r\nb"), "a\nb");
        assert_eq!(normalize_input("a\rb"), "a\nb");
        assert_eq!(normalize_input("\r\r\n"), "\n\n");
        assert_eq!(normalize_input("x\u{2028}y"), "xy");
        assert_eq!(normalize_input("中\n"), "中\n");
    }
}
