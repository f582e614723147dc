// Chunk: docs/chunks/display_width - Half-width / full-width classification

//! Display-width classification.
//!
//! Line and total limits are counted in width units rather than characters:
//! a half-width glyph occupies one unit, a full-width glyph two. The rule is a
//! fixed code-point test, not a font measurement:
//!
//! ```text
//! U+0000..=U+007F  (ASCII)                      → 1
//! U+FF61..=U+FF9F  (half-width katakana/punct)  → 1
//! everything else                               → 2
//! ```

/// Width class of a single character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharWidth {
    Half,
    Full,
}

impl CharWidth {
    /// Classifies `ch`.
    #[inline]
    pub fn of(ch: char) -> Self {
        let cp = ch as u32;
        if cp <= 0x7F || (0xFF61..=0xFF9F).contains(&cp) {
            CharWidth::Half
        } else {
            CharWidth::Full
        }
    }

    /// Number of width units this class occupies.
    #[inline]
    pub fn units(self) -> usize {
        match self {
            CharWidth::Half => 1,
            CharWidth::Full => 2,
        }
    }
}

/// Returns the display width of `ch` in units (1 or 2).
#[inline]
pub fn width_of(ch: char) -> usize {
    CharWidth::of(ch).units()
}

/// Returns the summed width of every character in `s` except newlines.
///
/// Newlines are line structure, not content, and never count towards limits.
pub fn str_width(s: &str) -> usize {
    s.chars().filter(|&ch| ch != '\n').map(width_of).sum()
}
