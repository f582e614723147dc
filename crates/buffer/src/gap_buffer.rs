// Chunk: docs/chunks/text_buffer - Logical text store with gap buffer backing

//! Gap buffer storage for the logical content.
//!
//! Every edit the engine performs is a splice at a single logical offset, so
//! the gap is parked at the edit point: removing the replaced range shrinks
//! the post-gap side, inserting the replacement fills the gap. Moving the gap
//! is O(distance), which stays small because a user edits where they typed.

const INITIAL_GAP_SIZE: usize = 64;
const GAP_GROWTH_FACTOR: usize = 2;

/// Character storage with a movable gap.
///
/// Layout is `[pre-gap content | gap | post-gap content]`. Offsets in the
/// public API are logical: they ignore the gap entirely.
#[derive(Debug, Clone)]
pub struct GapBuffer {
    data: Vec<char>,
    gap_start: usize,
    gap_end: usize,
}

impl GapBuffer {
    pub fn new() -> Self {
        Self {
            data: vec!['\0'; INITIAL_GAP_SIZE],
            gap_start: 0,
            gap_end: INITIAL_GAP_SIZE,
        }
    }

    /// Creates a buffer holding `chars`, with the gap at the end.
    pub fn from_chars<I>(chars: I) -> Self
    where
        I: IntoIterator<Item = char>,
    {
        let text: String = chars.into_iter().collect();
        let mut buffer = Self::new();
        buffer.splice(0, 0, &text);
        buffer
    }

    /// Logical length (excluding the gap).
    pub fn len(&self) -> usize {
        self.data.len() - self.gap_len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn gap_len(&self) -> usize {
        self.gap_end - self.gap_start
    }

    /// Moves the gap so it starts at logical `pos` (clamped to the length).
    fn move_gap_to(&mut self, pos: usize) {
        let pos = pos.min(self.len());

        if pos < self.gap_start {
            let shift = self.gap_start - pos;
            self.data.copy_within(pos..self.gap_start, self.gap_end - shift);
            self.gap_start = pos;
            self.gap_end -= shift;
        } else if pos > self.gap_start {
            let shift = pos - self.gap_start;
            self.data
                .copy_within(self.gap_end..self.gap_end + shift, self.gap_start);
            self.gap_start += shift;
            self.gap_end += shift;
        }
    }

    /// Grows the gap in place to at least `min_size`; the gap position is kept.
    fn ensure_gap(&mut self, min_size: usize) {
        if self.gap_len() >= min_size {
            return;
        }

        let needed = min_size - self.gap_len();
        let growth = needed.max(self.data.len() * GAP_GROWTH_FACTOR);

        let old_len = self.data.len();
        let post_gap_len = old_len - self.gap_end;
        let new_size = old_len + growth;
        self.data.resize(new_size, '\0');

        if post_gap_len > 0 {
            self.data
                .copy_within(self.gap_end..old_len, new_size - post_gap_len);
        }
        self.gap_end = new_size - post_gap_len;
    }

    /// Replaces the logical range `[start, end)` with `replacement`.
    ///
    /// Both bounds are clamped to the content length; a reversed range is
    /// treated as empty. Returns the removed text.
    pub fn splice(&mut self, start: usize, end: usize, replacement: &str) -> String {
        let start = start.min(self.len());
        let end = end.clamp(start, self.len());

        self.move_gap_to(start);

        // Widening the gap over [start, end) removes that range.
        let removed: String = self.data[self.gap_end..self.gap_end + (end - start)]
            .iter()
            .collect();
        self.gap_end += end - start;

        let count = replacement.chars().count();
        self.ensure_gap(count);
        for ch in replacement.chars() {
            self.data[self.gap_start] = ch;
            self.gap_start += 1;
        }

        removed
    }

    /// Drops everything from logical `len` onwards.
    pub fn truncate(&mut self, len: usize) {
        let len = len.min(self.len());
        let tail = self.len() - len;
        if tail == 0 {
            return;
        }
        self.move_gap_to(len);
        self.gap_end += tail;
    }

    pub fn chars(&self) -> impl Iterator<Item = char> + '_ {
        self.data[..self.gap_start]
            .iter()
            .chain(self.data[self.gap_end..].iter())
            .copied()
    }

    /// Returns the logical range `[start, end)` as a String (clamped).
    pub fn slice(&self, start: usize, end: usize) -> String {
        let end = end.min(self.len());
        if start >= end {
            return String::new();
        }
        self.chars().skip(start).take(end - start).collect()
    }
}

impl Default for GapBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for GapBuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for ch in self.chars() {
            write!(f, "{}", ch)?;
        }
        Ok(())
    }
}
