// Chunk: docs/chunks/limit_policy - Total width and line count limits

//! Limit policy: total width and visual line count.
//!
//! Two independent checks run after every reflow:
//!
//! - total width of all characters (newlines excluded) `<= max_total_width`
//! - visual lines (user newlines + soft breaks + 1) `<= max_lines`, if set
//!
//! What happens on a violation depends on [`OverflowMode`]. In `Truncate` mode
//! the engine never lets the buffer exceed the limits; in `Signal` mode the
//! buffer keeps what the user attempted and the host receives a
//! [`LimitSignal`].

use crate::reflow::{longest_prefix, measure, Measure};

/// Reaction to content that exceeds the limits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverflowMode {
    /// Silently drop input beyond the limit.
    Truncate,
    /// Keep the attempted content and report `valid: false`.
    Signal,
}

/// Validity report handed to the host in `Signal` mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LimitSignal {
    pub valid: bool,
    /// Validity differs from the previous report.
    pub changed: bool,
}

/// The configured limits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LimitPolicy {
    max_total_width: usize,
    max_line_width: usize,
    max_lines: Option<usize>,
    mode: OverflowMode,
}

impl LimitPolicy {
    pub fn new(
        max_total_width: usize,
        max_line_width: usize,
        max_lines: Option<usize>,
        mode: OverflowMode,
    ) -> Self {
        Self {
            max_total_width,
            max_line_width,
            max_lines,
            mode,
        }
    }

    pub fn mode(&self) -> OverflowMode {
        self.mode
    }

    pub fn max_line_width(&self) -> usize {
        self.max_line_width
    }

    /// Returns true if content with these totals is within every limit.
    pub fn permits(&self, m: Measure) -> bool {
        m.total_width <= self.max_total_width && self.max_lines.map_or(true, |max| m.lines <= max)
    }

    /// Returns the length of the longest prefix of `chars` within the limits.
    pub fn longest_fitting_prefix(&self, chars: &[char]) -> usize {
        longest_prefix(chars.iter().copied(), self.max_line_width, |m| self.permits(m))
    }

    /// Returns how many leading characters of `inserted` can go between
    /// `before` and `after` without breaking the limits.
    ///
    /// Binary search over the accepted length: the text after the insertion
    /// point is re-wrapped for every candidate, so there is no single pass.
    pub fn fitting_insert_len(&self, before: &[char], inserted: &[char], after: &[char]) -> usize {
        let fits = |n: usize| {
            let chars = before
                .iter()
                .chain(&inserted[..n])
                .chain(after)
                .copied();
            self.permits(measure(chars, self.max_line_width))
        };

        if inserted.is_empty() || fits(inserted.len()) {
            return inserted.len();
        }
        let (mut lo, mut hi) = (0, inserted.len() - 1);
        while lo < hi {
            let mid = lo + (hi - lo + 1) / 2;
            if fits(mid) {
                lo = mid;
            } else {
                hi = mid - 1;
            }
        }
        lo
    }
}
