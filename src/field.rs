// Chunk: docs/chunks/field_adapter - Host event to edit intent adapter
//!
//! Limited field adapter.
//!
//! A host text control owns the native widget; this adapter owns the engine.
//! For every [`HostEvent`] it decides whether the engine takes over (the host
//! must then suppress its native default and write back the returned value
//! and selection) or whether the native control keeps handling it.
//!
//! Key resolution is a stateless pure function: (modifiers, key) → command.

use textarea_limiter_buffer::{
    ConfigError, EditIntent, EngineResult, LimiterConfig, Selection, TextBuffer,
};
use textarea_limiter_input::{HostEvent, Key, KeyEvent};

/// Whether the field took over an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Handled {
    /// The engine handled it; suppress the native default.
    Yes,
    /// Let the native control handle it.
    No,
}

/// State the host writes back into its control after a handled event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldUpdate {
    /// New control value, soft breaks rendered as U+2028.
    pub value: String,
    pub selection: Selection,
    /// New validity, present only when it changed.
    pub validity: Option<bool>,
    /// Text to place on the clipboard after a cut.
    pub cut_text: Option<String>,
}

impl From<EngineResult> for FieldUpdate {
    fn from(result: EngineResult) -> Self {
        let selection = result.selection();
        Self {
            value: result.displayed_content,
            selection,
            validity: result
                .limit_signal
                .filter(|signal| signal.changed)
                .map(|signal| signal.valid),
            cut_text: result.cut_text,
        }
    }
}

/// Outcome of one host event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldResponse {
    pub handled: Handled,
    /// `None` when the control needs no update.
    pub update: Option<FieldUpdate>,
}

impl FieldResponse {
    fn ignored() -> Self {
        Self {
            handled: Handled::No,
            update: None,
        }
    }

    fn applied(result: EngineResult) -> Self {
        Self {
            handled: Handled::Yes,
            update: Some(result.into()),
        }
    }
}

/// What a key press means to the field.
#[derive(Debug, Clone, PartialEq)]
enum Command {
    Edit(EditIntent),
    /// Ctrl/Cmd+Backspace and Ctrl/Cmd+Delete: removes a selection but never
    /// a character next to a bare caret.
    DeleteSelection,
    /// Undo/redo chords: the native history does not know about soft breaks,
    /// so the control is reset to the engine's state instead.
    Resync,
}

/// Resolves a key event to a command.
///
/// Arrow and navigation keys resolve to nothing: the native control moves the
/// caret and reports it through a selection change.
fn resolve_command(event: &KeyEvent) -> Option<Command> {
    let mods = &event.modifiers;

    match &event.key {
        Key::Backspace | Key::Delete if mods.is_chord() => Some(Command::DeleteSelection),
        Key::Backspace => Some(Command::Edit(EditIntent::DeleteBackward)),
        Key::Delete => Some(Command::Edit(EditIntent::DeleteForward)),

        // Return and Shift+Return insert a user newline
        Key::Return if !mods.is_chord() => Some(Command::Edit(EditIntent::Insert("\n".into()))),

        Key::Tab if !mods.is_chord() => Some(Command::Edit(EditIntent::Insert("\t".into()))),

        // Printable characters (no Command/Control modifier)
        Key::Char(ch) if !mods.is_chord() => {
            Some(Command::Edit(EditIntent::Insert(ch.to_string())))
        }

        // Undo / redo
        Key::Char('z' | 'Z' | 'y' | 'Y') if mods.is_chord() => Some(Command::Resync),

        _ => None,
    }
}

/// A text control bound to a bounded text buffer.
#[derive(Debug)]
pub struct LimitedField {
    buffer: TextBuffer,
    /// The host's selection as last reported, in display offsets.
    selection: Selection,
}

impl LimitedField {
    pub fn new(config: LimiterConfig) -> Result<Self, ConfigError> {
        Self::with_value(config, "")
    }

    /// Binds a field that starts with `value`.
    pub fn with_value(config: LimiterConfig, value: &str) -> Result<Self, ConfigError> {
        let buffer = TextBuffer::with_content(config, value)?;
        let selection = buffer.selection();
        Ok(Self { buffer, selection })
    }

    pub fn buffer(&self) -> &TextBuffer {
        &self.buffer
    }

    /// Selection the adapter will use for the next edit.
    pub fn selection(&self) -> Selection {
        self.selection
    }

    /// Host-initiated value reset, e.g. a form control being written to.
    pub fn set_value(&mut self, value: &str) -> FieldUpdate {
        let update = FieldUpdate::from(self.buffer.set_content(value));
        self.selection = update.selection;
        update
    }

    /// Current state, for a host that needs to redraw from scratch.
    pub fn snapshot(&self) -> FieldUpdate {
        self.buffer.snapshot().into()
    }

    /// Handles one host event.
    pub fn handle_event(&mut self, event: HostEvent) -> FieldResponse {
        let composing = self.buffer.is_composing();

        match event {
            HostEvent::SelectionChange { start, end } => {
                // The selection wanders over the preedit text while composing.
                if !composing {
                    self.selection =
                        Selection::new(start, end).clamp(self.buffer.layout().display_len());
                }
                FieldResponse::ignored()
            }

            // Keys typed into the input method belong to it.
            HostEvent::Key(_) | HostEvent::Text(_) | HostEvent::Cut if composing => {
                FieldResponse::ignored()
            }

            HostEvent::Key(key) => match resolve_command(&key) {
                Some(Command::Edit(intent)) => self.apply(intent),
                Some(Command::DeleteSelection) if !self.selection.is_collapsed() => {
                    self.apply(EditIntent::DeleteBackward)
                }
                Some(Command::DeleteSelection | Command::Resync) => {
                    tracing::debug!(?key, "chord suppressed");
                    FieldResponse {
                        handled: Handled::Yes,
                        update: Some(self.snapshot()),
                    }
                }
                None => FieldResponse::ignored(),
            },

            HostEvent::Text(text) => self.apply(EditIntent::Insert(text)),

            HostEvent::Cut => {
                if self.selection.is_collapsed() {
                    return FieldResponse::ignored();
                }
                self.apply(EditIntent::Cut)
            }

            HostEvent::CompositionStart => {
                self.buffer.begin_composition(self.selection);
                FieldResponse::ignored()
            }

            HostEvent::CompositionUpdate(preedit) => {
                self.buffer.update_composition(&preedit);
                FieldResponse::ignored()
            }

            HostEvent::CompositionEnd(text) => self.apply(EditIntent::CompositionCommit(text)),
        }
    }

    fn apply(&mut self, intent: EditIntent) -> FieldResponse {
        match self.buffer.apply_edit(intent, self.selection) {
            Ok(result) => {
                self.selection = result.selection();
                FieldResponse::applied(result)
            }
            Err(err) => {
                tracing::warn!(%err, "host event dropped");
                FieldResponse::ignored()
            }
        }
    }
}
