// Chunk: docs/chunks/text_buffer - Logical text store with gap buffer backing
// Chunk: docs/chunks/coordinate_spaces - Logical vs display index types

//! Index and cursor types shared by the engine.
//!
//! The engine works in two index spaces:
//!
//! - [`LogicalOffset`] counts characters of the logical content (what the user
//!   typed, no soft breaks).
//! - [`DisplayOffset`] counts characters of the displayed content (logical
//!   content with a soft-break marker wherever the reflow pass wrapped a line).
//!
//! Both count Unicode scalar values. Converting between them is only possible
//! through a reflow [`Layout`](crate::Layout).

use std::fmt;

/// Offset into the logical (marker-free) content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct LogicalOffset(usize);

impl LogicalOffset {
    pub const fn new(offset: usize) -> Self {
        Self(offset)
    }

    pub const fn get(self) -> usize {
        self.0
    }
}

/// Offset into the displayed content (soft-break markers included).
///
/// This is the coordinate space the host's selection range lives in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct DisplayOffset(usize);

impl DisplayOffset {
    pub const fn new(offset: usize) -> Self {
        Self(offset)
    }

    pub const fn get(self) -> usize {
        self.0
    }
}

impl fmt::Display for DisplayOffset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A selection range in display coordinates, always in document order.
///
/// A collapsed selection (`start == end`) is a plain caret.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Selection {
    pub start: DisplayOffset,
    pub end: DisplayOffset,
}

impl Selection {
    /// Creates a selection from two display offsets in either order.
    pub fn new(a: usize, b: usize) -> Self {
        let (start, end) = if a <= b { (a, b) } else { (b, a) };
        Self {
            start: DisplayOffset::new(start),
            end: DisplayOffset::new(end),
        }
    }

    /// Creates a collapsed selection (caret) at `at`.
    pub fn caret(at: usize) -> Self {
        Self::new(at, at)
    }

    pub fn is_collapsed(&self) -> bool {
        self.start == self.end
    }

    /// Clamps both ends to `len`, preserving document order.
    pub fn clamp(self, len: usize) -> Self {
        Self::new(self.start.get().min(len), self.end.get().min(len))
    }
}

/// Position of a display offset as (visual line, column), both 0-indexed.
///
/// Visual lines are separated by user newlines and by soft breaks alike.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Position {
    pub line: usize,
    pub col: usize,
}

impl Position {
    pub fn new(line: usize, col: usize) -> Self {
        Self { line, col }
    }
}

impl PartialOrd for Position {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Position {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        match self.line.cmp(&other.line) {
            std::cmp::Ordering::Equal => self.col.cmp(&other.col),
            ord => ord,
        }
    }
}
