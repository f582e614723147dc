// Chunk: docs/chunks/composition_gate - IME composition state machine

//! IME composition gate.
//!
//! While the host's input method is composing, the preedit text lives in the
//! host's native control, not in the engine. The engine only remembers where
//! the composition started so the committed text lands there, and refuses
//! every other edit until the composition ends.

use crate::types::Selection;

/// Whether an IME composition is open.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Composition {
    #[default]
    Idle,
    Composing {
        /// Selection at the moment composition started.
        anchor: Selection,
        /// Latest preedit text reported by the host. Never part of the content.
        preedit: String,
    },
}

impl Composition {
    pub fn is_active(&self) -> bool {
        matches!(self, Composition::Composing { .. })
    }

    /// Opens a composition at `anchor`. A composition that is already open
    /// keeps its original anchor.
    pub fn begin(&mut self, anchor: Selection) {
        if !self.is_active() {
            *self = Composition::Composing {
                anchor,
                preedit: String::new(),
            };
        }
    }

    /// Records the preedit text. Ignored when idle.
    pub fn update(&mut self, text: &str) {
        if let Composition::Composing { preedit, .. } = self {
            preedit.clear();
            preedit.push_str(text);
        }
    }

    /// Closes the composition, returning its anchor if one was open.
    pub fn finish(&mut self) -> Option<Selection> {
        match std::mem::take(self) {
            Composition::Composing { anchor, .. } => Some(anchor),
            Composition::Idle => None,
        }
    }

    /// Current preedit text, if composing.
    pub fn preedit(&self) -> Option<&str> {
        match self {
            Composition::Composing { preedit, .. } => Some(preedit),
            Composition::Idle => None,
        }
    }
}
