// Chunk: docs/chunks/host_input_types - Shared host input types crate
//!
//! Input event types a host text control delivers to a limited field.
//!
//! These types abstract over the host's native event objects (DOM keyboard,
//! input, clipboard, composition and selection events, or their equivalents
//! in other toolkits) and provide a plain Rust interface. The crate has no
//! dependencies so any host binding can use it.

/// A keyboard event.
#[derive(Debug, Clone, PartialEq)]
pub struct KeyEvent {
    /// The key that was pressed
    pub key: Key,
    /// Modifier keys held during the event
    pub modifiers: Modifiers,
}

impl KeyEvent {
    /// Creates a new KeyEvent with the given key and modifiers.
    pub fn new(key: Key, modifiers: Modifiers) -> Self {
        Self { key, modifiers }
    }

    /// Creates a KeyEvent for a key with no modifiers.
    pub fn plain(key: Key) -> Self {
        Self {
            key,
            modifiers: Modifiers::default(),
        }
    }

    /// Creates a KeyEvent for a single character with no modifiers.
    pub fn char(ch: char) -> Self {
        Self::plain(Key::Char(ch))
    }

    /// Creates a KeyEvent for a character with Control held.
    pub fn ctrl(ch: char) -> Self {
        Self {
            key: Key::Char(ch),
            modifiers: Modifiers {
                control: true,
                ..Default::default()
            },
        }
    }
}

/// Modifier keys that can be held during a key event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Modifiers {
    /// Shift key
    pub shift: bool,
    /// Command key (Cmd/⌘, or the platform "meta" key)
    pub command: bool,
    /// Option key (Alt/⌥)
    pub option: bool,
    /// Control key (Ctrl/⌃)
    pub control: bool,
}

impl Modifiers {
    /// Returns true if no modifier keys are held.
    pub fn is_empty(&self) -> bool {
        !self.shift && !self.command && !self.option && !self.control
    }

    /// Returns true if Command or Control is held, i.e. the key is a
    /// shortcut chord rather than text.
    pub fn is_chord(&self) -> bool {
        self.command || self.control
    }
}

/// Keys that can be pressed.
#[derive(Debug, Clone, PartialEq)]
pub enum Key {
    /// A printable character (already accounts for shift state)
    Char(char),
    /// Backspace / Delete backward
    Backspace,
    /// Forward delete
    Delete,
    /// Return / Enter
    Return,
    /// Tab key
    Tab,
    /// Left arrow
    Left,
    /// Right arrow
    Right,
    /// Up arrow
    Up,
    /// Down arrow
    Down,
    /// Home key
    Home,
    /// End key
    End,
    /// Escape key
    Escape,
}

/// Everything a host control reports to a limited field.
#[derive(Debug, Clone, PartialEq)]
pub enum HostEvent {
    /// A key went down.
    Key(KeyEvent),
    /// Text arrived outside a key press (paste, drop, autocomplete).
    Text(String),
    /// The user cut the current selection.
    Cut,
    /// An input method started composing.
    CompositionStart,
    /// The input method's preedit text changed.
    CompositionUpdate(String),
    /// The input method committed its final text.
    CompositionEnd(String),
    /// The host's selection moved, in displayed-content offsets.
    SelectionChange { start: usize, end: usize },
}

impl HostEvent {
    /// Returns true for the composition lifecycle events.
    pub fn is_composition(&self) -> bool {
        matches!(
            self,
            HostEvent::CompositionStart
                | HostEvent::CompositionUpdate(_)
                | HostEvent::CompositionEnd(_)
        )
    }
}
