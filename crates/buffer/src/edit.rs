// Chunk: docs/chunks/text_buffer - Edit intents and engine results

use crate::limits::LimitSignal;
use crate::types::{DisplayOffset, Selection};

/// One discrete edit requested by the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditIntent {
    /// Replace the selection with text. Enter is `Insert("\n")`.
    Insert(String),
    /// Delete the selection, or one grapheme cluster before the caret.
    DeleteBackward,
    /// Delete the selection, or one grapheme cluster after the caret.
    DeleteForward,
    /// Delete the selection and hand the removed text back.
    Cut,
    /// End an IME composition and insert its final text.
    CompositionCommit(String),
}

impl EditIntent {
    /// Short name used in logs and errors.
    pub fn name(&self) -> &'static str {
        match self {
            EditIntent::Insert(_) => "Insert",
            EditIntent::DeleteBackward => "DeleteBackward",
            EditIntent::DeleteForward => "DeleteForward",
            EditIntent::Cut => "Cut",
            EditIntent::CompositionCommit(_) => "CompositionCommit",
        }
    }
}

/// The authoritative state after an edit, for the host to apply verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineResult {
    /// Logical content with U+2028 at every soft break.
    pub displayed_content: String,
    pub cursor_start: DisplayOffset,
    pub cursor_end: DisplayOffset,
    /// Present on every result when overflow is signalled rather than
    /// truncated.
    pub limit_signal: Option<LimitSignal>,
    /// Text removed by a `Cut`, if it removed anything.
    pub cut_text: Option<String>,
}

impl EngineResult {
    pub fn selection(&self) -> Selection {
        Selection {
            start: self.cursor_start,
            end: self.cursor_end,
        }
    }

    /// False only when a limit is signalled as exceeded.
    pub fn is_valid(&self) -> bool {
        self.limit_signal.map_or(true, |signal| signal.valid)
    }
}
