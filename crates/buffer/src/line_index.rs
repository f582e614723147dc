// Chunk: docs/chunks/coordinate_spaces - Logical vs display index types

//! Visual line index: the bridge between logical and display offsets.
//!
//! For every visual line the index records where the line starts in both
//! coordinate spaces. Inside one visual line the two spaces advance in
//! lockstep, so every conversion is a binary search for the containing line
//! followed by one subtraction:
//!
//! ```text
//! logical: A B C D | E         soft break before E (logical 4)
//! display: A B C D ⏎ E         line 1 starts at logical 4, display 5
//! ```
//!
//! A logical offset equal to a soft-break position belongs to the line after
//! the break, so a caret in front of `E` is displayed after the marker.

use crate::types::{DisplayOffset, LogicalOffset, Position};

/// Start of one visual line in both coordinate spaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct LineStart {
    pub logical: usize,
    pub display: usize,
}

/// Sorted visual line starts. `starts[0]` is always `(0, 0)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct LineIndex {
    starts: Vec<LineStart>,
}

impl LineIndex {
    /// Creates an index with a single empty line.
    pub fn new() -> Self {
        Self {
            starts: vec![LineStart {
                logical: 0,
                display: 0,
            }],
        }
    }

    /// Records the start of the next visual line.
    ///
    /// Starts must be pushed in increasing order.
    pub fn push(&mut self, logical: usize, display: usize) {
        debug_assert!(self
            .starts
            .last()
            .map_or(true, |s| s.logical <= logical && s.display < display));
        self.starts.push(LineStart { logical, display });
    }

    /// Number of visual lines. Always at least 1.
    pub fn line_count(&self) -> usize {
        self.starts.len()
    }

    pub fn line_start(&self, line: usize) -> Option<LineStart> {
        self.starts.get(line).copied()
    }

    /// Returns the visual line containing logical `offset`.
    fn line_at_logical(&self, offset: usize) -> usize {
        self.starts
            .partition_point(|s| s.logical <= offset)
            .saturating_sub(1)
    }

    /// Returns the visual line containing display `offset`.
    fn line_at_display(&self, offset: usize) -> usize {
        self.starts
            .partition_point(|s| s.display <= offset)
            .saturating_sub(1)
    }

    pub fn to_display(&self, offset: LogicalOffset) -> DisplayOffset {
        let start = self.starts[self.line_at_logical(offset.get())];
        DisplayOffset::new(start.display + (offset.get() - start.logical))
    }

    pub fn to_logical(&self, offset: DisplayOffset) -> LogicalOffset {
        let start = self.starts[self.line_at_display(offset.get())];
        LogicalOffset::new(start.logical + (offset.get() - start.display))
    }

    pub fn position(&self, offset: DisplayOffset) -> Position {
        let line = self.line_at_display(offset.get());
        Position::new(line, offset.get() - self.starts[line].display)
    }
}

impl Default for LineIndex {
    fn default() -> Self {
        Self::new()
    }
}
