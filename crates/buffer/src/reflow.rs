// Chunk: docs/chunks/soft_wrap_reflow - Width-bounded soft wrapping of logical content
//!
//! Reflow pass: derives the displayed form of the logical content.
//!
//! The content is scanned left to right with a running width counter for the
//! current visual line:
//!
//! ```text
//! '\n'                              → user break, counter = 0
//! counter > 0 && counter + w > max  → soft break before the char, counter = 0
//! otherwise                         → place the char, counter += w
//! ```
//!
//! A soft break is only ever emitted in front of a character that does not fit,
//! so it never trails the content and never precedes a user newline. The
//! result is a [`Layout`]: the visual lines as structural tokens plus the
//! [`LineIndex`] that converts between logical and display offsets. Nothing
//! outside this module converts between the two spaces.

use crate::line_index::LineIndex;
use crate::types::{DisplayOffset, LogicalOffset, Position};
use crate::width::width_of;

/// Code point used when a soft break is rendered into a string (U+2028).
pub const SOFT_BREAK_MARKER: char = '\u{2028}';

/// How a visual line ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineBreak {
    /// A newline the user typed; part of the logical content.
    User,
    /// A wrap point inserted by the reflow pass; display-only.
    Soft,
}

/// One visual line of the displayed content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisualLine {
    /// Logical offset of the first character.
    pub start: LogicalOffset,
    /// Characters of the line, without its terminator.
    pub text: String,
    /// Summed display width of `text`.
    pub width: usize,
    /// `None` for the last line.
    pub terminator: Option<LineBreak>,
}

impl VisualLine {
    fn empty(start: usize) -> Self {
        Self {
            start: LogicalOffset::new(start),
            text: String::new(),
            width: 0,
            terminator: None,
        }
    }

    /// Number of characters in the line, excluding the terminator.
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }
}

/// Width and line totals of a piece of content, as the reflow pass sees it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Measure {
    /// Width of every character except newlines.
    pub total_width: usize,
    /// Visual line count: user newlines + soft breaks + 1.
    pub lines: usize,
}

/// Streaming width counter shared by [`Layout::reflow`] and [`measure`].
#[derive(Debug, Clone, Copy)]
struct Wrapper {
    max_line_width: usize,
    line_width: usize,
}

/// What the wrapper decided for one character.
enum Step {
    UserBreak,
    SoftBreakThenPlace(usize),
    Place(usize),
}

impl Wrapper {
    fn new(max_line_width: usize) -> Self {
        Self {
            max_line_width,
            line_width: 0,
        }
    }

    fn step(&mut self, ch: char) -> Step {
        if ch == '\n' {
            self.line_width = 0;
            return Step::UserBreak;
        }
        let w = width_of(ch);
        if self.line_width > 0 && self.line_width + w > self.max_line_width {
            self.line_width = w;
            Step::SoftBreakThenPlace(w)
        } else {
            self.line_width += w;
            Step::Place(w)
        }
    }
}

impl Measure {
    fn empty() -> Self {
        Self {
            total_width: 0,
            lines: 1,
        }
    }

    fn apply(&mut self, step: &Step) {
        match *step {
            Step::UserBreak => self.lines += 1,
            Step::SoftBreakThenPlace(w) => {
                self.lines += 1;
                self.total_width += w;
            }
            Step::Place(w) => self.total_width += w,
        }
    }
}

/// Measures `chars` without building a layout.
pub fn measure<I>(chars: I, max_line_width: usize) -> Measure
where
    I: IntoIterator<Item = char>,
{
    let mut wrapper = Wrapper::new(max_line_width);
    let mut m = Measure::empty();
    for ch in chars {
        m.apply(&wrapper.step(ch));
    }
    m
}

/// Returns the length of the longest prefix of `chars` whose totals satisfy
/// `within`.
///
/// The wrap is greedy and left to right, so the totals of a prefix are
/// exactly the totals of the first lines of the full layout and only grow as
/// the prefix is extended. One pass is enough.
pub fn longest_prefix<I, F>(chars: I, max_line_width: usize, mut within: F) -> usize
where
    I: IntoIterator<Item = char>,
    F: FnMut(Measure) -> bool,
{
    let mut wrapper = Wrapper::new(max_line_width);
    let mut m = Measure::empty();
    let mut len = 0;
    for ch in chars {
        m.apply(&wrapper.step(ch));
        if !within(m) {
            break;
        }
        len += 1;
    }
    len
}

/// The displayed form of the logical content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    lines: Vec<VisualLine>,
    index: LineIndex,
    logical_len: usize,
    total_width: usize,
    soft_breaks: usize,
}

impl Layout {
    /// Runs the reflow pass over `chars`.
    pub fn reflow<I>(chars: I, max_line_width: usize) -> Self
    where
        I: IntoIterator<Item = char>,
    {
        let mut wrapper = Wrapper::new(max_line_width);
        let mut lines = vec![VisualLine::empty(0)];
        let mut index = LineIndex::new();
        let mut logical = 0;
        let mut display = 0;
        let mut total_width = 0;
        let mut soft_breaks = 0;

        for ch in chars {
            let step = wrapper.step(ch);
            let current = lines.len() - 1;
            match step {
                Step::UserBreak => {
                    lines[current].terminator = Some(LineBreak::User);
                    logical += 1;
                    display += 1;
                    lines.push(VisualLine::empty(logical));
                    index.push(logical, display);
                    continue;
                }
                Step::SoftBreakThenPlace(_) => {
                    lines[current].terminator = Some(LineBreak::Soft);
                    display += 1;
                    soft_breaks += 1;
                    lines.push(VisualLine::empty(logical));
                    index.push(logical, display);
                }
                Step::Place(_) => {}
            }

            let w = match step {
                Step::SoftBreakThenPlace(w) | Step::Place(w) => w,
                Step::UserBreak => 0,
            };
            if let Some(line) = lines.last_mut() {
                line.text.push(ch);
                line.width += w;
            }
            total_width += w;
            logical += 1;
            display += 1;
        }

        debug_assert_eq!(index.line_count(), lines.len());
        tracing::trace!(
            lines = lines.len(),
            soft_breaks,
            logical_len = logical,
            "reflow"
        );

        Self {
            lines,
            index,
            logical_len: logical,
            total_width,
            soft_breaks,
        }
    }

    pub fn lines(&self) -> &[VisualLine] {
        &self.lines
    }

    /// Visual line count: user newlines + soft breaks + 1.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    pub fn soft_break_count(&self) -> usize {
        self.soft_breaks
    }

    /// Summed width of the content, newlines excluded.
    pub fn total_width(&self) -> usize {
        self.total_width
    }

    pub fn logical_len(&self) -> usize {
        self.logical_len
    }

    /// Length of the displayed content (logical length + one per soft break).
    pub fn display_len(&self) -> usize {
        self.logical_len + self.soft_breaks
    }

    pub fn measure(&self) -> Measure {
        Measure {
            total_width: self.total_width,
            lines: self.line_count(),
        }
    }

    /// Converts a logical offset to the display offset anchored to the same
    /// character. Offsets past the end clamp to the end.
    pub fn to_display(&self, offset: LogicalOffset) -> DisplayOffset {
        let clamped = LogicalOffset::new(offset.get().min(self.logical_len));
        self.index.to_display(clamped)
    }

    /// Converts a display offset to a logical offset. A display offset on
    /// either side of a soft marker maps to the character after it.
    pub fn to_logical(&self, offset: DisplayOffset) -> LogicalOffset {
        let clamped = DisplayOffset::new(offset.get().min(self.display_len()));
        self.index.to_logical(clamped)
    }

    /// Visual (line, column) of a display offset.
    pub fn position(&self, offset: DisplayOffset) -> Position {
        let clamped = DisplayOffset::new(offset.get().min(self.display_len()));
        self.index.position(clamped)
    }

    /// Display offset where visual `line` starts, if it exists.
    pub fn line_display_start(&self, line: usize) -> Option<DisplayOffset> {
        self.index
            .line_start(line)
            .map(|start| DisplayOffset::new(start.display))
    }

    /// Renders the displayed content, soft breaks as [`SOFT_BREAK_MARKER`].
    pub fn displayed_string(&self) -> String {
        self.render(SOFT_BREAK_MARKER)
    }

    /// Renders the displayed content with soft breaks as `soft`.
    pub fn render(&self, soft: char) -> String {
        let mut out = String::with_capacity(self.display_len());
        for line in &self.lines {
            out.push_str(&line.text);
            match line.terminator {
                Some(LineBreak::User) => out.push('\n'),
                Some(LineBreak::Soft) => out.push(soft),
                None => {}
            }
        }
        out
    }

    /// The logical content, reassembled from the visual lines.
    pub fn logical_string(&self) -> String {
        let mut out = String::with_capacity(self.logical_len);
        for line in &self.lines {
            out.push_str(&line.text);
            if line.terminator == Some(LineBreak::User) {
                out.push('\n');
            }
        }
        out
    }
}

/// Removes every soft-break marker from `s`.
pub fn strip_markers(s: &str) -> String {
    s.chars().filter(|&ch| ch != SOFT_BREAK_MARKER).collect()
}
