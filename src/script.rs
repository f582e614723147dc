// Chunk: docs/chunks/replay_driver - Scripted host event replay
//!
//! Headless replay of host events.
//!
//! A script is a JSON document describing what a user did in a text control:
//!
//! ```json
//! {
//!   "config": { "maxLineLength": 4, "autoTruncate": true },
//!   "initial": "AB",
//!   "steps": [
//!     { "type": "type", "text": "CDE" },
//!     { "type": "select", "start": 1, "end": 3 },
//!     { "type": "cut" },
//!     { "type": "key", "key": "Backspace" },
//!     { "type": "key", "key": "z", "ctrl": true },
//!     { "type": "compositionStart" },
//!     { "type": "compositionUpdate", "data": "ni" },
//!     { "type": "compositionEnd", "data": "你" },
//!     { "type": "paste", "text": "line\nbreak" },
//!     { "type": "setValue", "value": "reset" }
//!   ]
//! }
//! ```
//!
//! Replaying drives a [`LimitedField`] and yields one [`StepReport`] per step.

use serde::{Deserialize, Serialize};
use textarea_limiter_buffer::{LimiterConfig, SOFT_BREAK_MARKER};
use textarea_limiter_input::{HostEvent, Key, KeyEvent, Modifiers};

use crate::field::{FieldUpdate, Handled, LimitedField};

/// A recorded editing session.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Script {
    /// Field limits; the replay driver may override them.
    #[serde(default)]
    pub config: Option<LimiterConfig>,
    /// Value the field starts with.
    #[serde(default)]
    pub initial: String,
    pub steps: Vec<Step>,
}

/// One user action.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Step {
    /// A single key press.
    Key {
        key: KeyName,
        #[serde(default)]
        ctrl: bool,
        #[serde(default)]
        meta: bool,
        #[serde(default)]
        shift: bool,
        #[serde(default)]
        alt: bool,
    },
    /// Types `text` one key press per char; `\n` presses Return.
    Type { text: String },
    /// Text arriving in one piece.
    Paste { text: String },
    Cut,
    Select { start: usize, end: usize },
    CompositionStart,
    CompositionUpdate { data: String },
    CompositionEnd { data: String },
    /// The host overwrites the field's value.
    SetValue { value: String },
}

/// A key named the way DOM `KeyboardEvent.key` names it.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(try_from = "String")]
pub struct KeyName(pub Key);

impl TryFrom<String> for KeyName {
    type Error = String;

    fn try_from(name: String) -> Result<Self, Self::Error> {
        let key = match name.as_str() {
            "Backspace" => Key::Backspace,
            "Delete" => Key::Delete,
            "Enter" => Key::Return,
            "Tab" => Key::Tab,
            "ArrowLeft" => Key::Left,
            "ArrowRight" => Key::Right,
            "ArrowUp" => Key::Up,
            "ArrowDown" => Key::Down,
            "Home" => Key::Home,
            "End" => Key::End,
            "Escape" => Key::Escape,
            _ => {
                let mut chars = name.chars();
                match (chars.next(), chars.next()) {
                    (Some(ch), None) => Key::Char(ch),
                    _ => return Err(format!("unknown key name {name:?}")),
                }
            }
        };
        Ok(KeyName(key))
    }
}

/// What the host does for one step.
#[derive(Debug, Clone, PartialEq)]
enum Action {
    Event(HostEvent),
    SetValue(String),
}

impl Step {
    fn into_actions(self) -> Vec<Action> {
        match self {
            Step::Key {
                key,
                ctrl,
                meta,
                shift,
                alt,
            } => {
                let modifiers = Modifiers {
                    shift,
                    command: meta,
                    option: alt,
                    control: ctrl,
                };
                vec![Action::Event(HostEvent::Key(KeyEvent::new(key.0, modifiers)))]
            }
            Step::Type { text } => text
                .chars()
                .map(|ch| {
                    let key = if ch == '\n' { Key::Return } else { Key::Char(ch) };
                    Action::Event(HostEvent::Key(KeyEvent::plain(key)))
                })
                .collect(),
            Step::Paste { text } => vec![Action::Event(HostEvent::Text(text))],
            Step::Cut => vec![Action::Event(HostEvent::Cut)],
            Step::Select { start, end } => {
                vec![Action::Event(HostEvent::SelectionChange { start, end })]
            }
            Step::CompositionStart => vec![Action::Event(HostEvent::CompositionStart)],
            Step::CompositionUpdate { data } => {
                vec![Action::Event(HostEvent::CompositionUpdate(data))]
            }
            Step::CompositionEnd { data } => vec![Action::Event(HostEvent::CompositionEnd(data))],
            Step::SetValue { value } => vec![Action::SetValue(value)],
        }
    }
}

/// Field state after one step, as printed by the replay driver.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StepReport {
    pub step: usize,
    /// True if any event of the step was taken over by the engine.
    pub handled: bool,
    /// Visual lines; a line ending in a soft break is not distinguished here.
    pub lines: Vec<String>,
    /// Displayed value, soft breaks rendered as U+2028.
    pub value: String,
    pub selection_start: usize,
    pub selection_end: usize,
    pub composing: bool,
    /// Present when validity changed during the step.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub valid: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cut_text: Option<String>,
}

impl StepReport {
    fn new(step: usize, field: &LimitedField) -> Self {
        let value = field.buffer().displayed_content();
        let selection = field.selection();
        Self {
            step,
            handled: false,
            lines: value
                .split(['\n', SOFT_BREAK_MARKER])
                .map(str::to_string)
                .collect(),
            value,
            selection_start: selection.start.get(),
            selection_end: selection.end.get(),
            composing: field.buffer().is_composing(),
            valid: None,
            cut_text: None,
        }
    }

    fn absorb(&mut self, update: FieldUpdate) {
        if update.validity.is_some() {
            self.valid = update.validity;
        }
        if update.cut_text.is_some() {
            self.cut_text = update.cut_text;
        }
    }
}

/// Replays `steps` against `field`, returning one report per step.
pub fn replay(field: &mut LimitedField, steps: Vec<Step>) -> Vec<StepReport> {
    steps
        .into_iter()
        .enumerate()
        .map(|(index, step)| {
            let mut handled = false;
            let mut updates = Vec::new();
            for action in step.into_actions() {
                match action {
                    Action::Event(event) => {
                        let response = field.handle_event(event);
                        handled |= response.handled == Handled::Yes;
                        updates.extend(response.update);
                    }
                    Action::SetValue(value) => {
                        handled = true;
                        updates.push(field.set_value(&value));
                    }
                }
            }

            let mut report = StepReport::new(index, field);
            report.handled = handled;
            for update in updates {
                report.absorb(update);
            }
            tracing::trace!(step = index, value = %report.value, "step replayed");
            report
        })
        .collect()
}
