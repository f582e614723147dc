// Chunk: docs/chunks/grapheme_cluster_awareness - Grapheme cluster boundary helpers

//! Grapheme cluster boundaries over the logical content.
//!
//! The engine stores `char`s, but a collapsed delete removes what the user
//! perceives as one character: a combining sequence (`e` + U+0301), a ZWJ
//! emoji family, or a regional indicator pair. Boundaries are found with
//! [`GraphemeCursor`] on the extended grapheme rules.
//!
//! Every function takes and returns char offsets; byte offsets stay inside
//! this module.

use unicode_segmentation::GraphemeCursor;

/// Converts a char offset into a byte offset of `s` (clamped to the end).
fn byte_offset(s: &str, char_offset: usize) -> usize {
    s.char_indices()
        .nth(char_offset)
        .map_or(s.len(), |(byte, _)| byte)
}

fn char_offset(s: &str, byte_offset: usize) -> usize {
    s[..byte_offset].chars().count()
}

/// Returns the char offset of the grapheme boundary before `offset`.
///
/// Returns 0 at the start of the content. An offset inside a cluster moves to
/// that cluster's start.
pub fn grapheme_boundary_left(chars: &[char], offset: usize) -> usize {
    let offset = offset.min(chars.len());
    if offset == 0 {
        return 0;
    }

    // An ASCII char after another ASCII char is a cluster of its own (CR LF
    // aside). A non-ASCII char before it may be a prepend that joins it.
    let prev = chars[offset - 1];
    let before_is_ascii = offset < 2 || chars[offset - 2].is_ascii();
    if prev.is_ascii() && prev != '\n' && before_is_ascii {
        return offset - 1;
    }

    let s: String = chars.iter().collect();
    let mut cursor = GraphemeCursor::new(byte_offset(&s, offset), s.len(), true);
    match cursor.prev_boundary(&s, 0) {
        Ok(Some(byte)) => char_offset(&s, byte),
        Ok(None) => 0,
        // The whole content is one chunk, so this never asks for more.
        Err(_) => offset - 1,
    }
}

/// Returns the char offset of the grapheme boundary after `offset`.
///
/// Returns `chars.len()` at or past the end.
pub fn grapheme_boundary_right(chars: &[char], offset: usize) -> usize {
    if offset >= chars.len() {
        return chars.len();
    }

    let current = chars[offset];
    let next_is_ascii = chars.get(offset + 1).map_or(true, |ch| ch.is_ascii());
    if current.is_ascii() && current != '\r' && next_is_ascii {
        return offset + 1;
    }

    let s: String = chars.iter().collect();
    let mut cursor = GraphemeCursor::new(byte_offset(&s, offset), s.len(), true);
    match cursor.next_boundary(&s, 0) {
        Ok(Some(byte)) => char_offset(&s, byte),
        Ok(None) => chars.len(),
        Err(_) => offset + 1,
    }
}

/// Returns true if `offset` falls between two grapheme clusters.
///
/// Both ends of the content are boundaries.
pub fn is_grapheme_boundary(chars: &[char], offset: usize) -> bool {
    if offset == 0 || offset >= chars.len() {
        return true;
    }
    let s: String = chars.iter().collect();
    let mut cursor = GraphemeCursor::new(byte_offset(&s, offset), s.len(), true);
    cursor.is_boundary(&s, 0).unwrap_or(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    // ==================== ASCII ====================

    #[test]
    fn test_ascii_boundaries() {
        let c = chars("hello");
        assert_eq!(grapheme_boundary_left(&c, 0), 0);
        assert_eq!(grapheme_boundary_left(&c, 3), 2);
        assert_eq!(grapheme_boundary_right(&c, 0), 1);
        assert_eq!(grapheme_boundary_right(&c, 5), 5);
        assert_eq!(grapheme_boundary_right(&c, 9), 5);
    }

    #[test]
    fn test_newlines_are_single_clusters() {
        let c = chars("a\n\nb");
        assert_eq!(grapheme_boundary_left(&c, 3), 2);
        assert_eq!(grapheme_boundary_right(&c, 1), 2);
    }

    // ==================== Combining marks ====================

    #[test]
    fn test_combining_sequence_is_one_cluster() {
        // "e" + COMBINING ACUTE ACCENT, then "x"
        let c = chars("e\u{0301}x");
        assert_eq!(grapheme_boundary_left(&c, 2), 0);
        assert_eq!(grapheme_boundary_right(&c, 0), 2);
        assert!(!is_grapheme_boundary(&c, 1));
        assert!(is_grapheme_boundary(&c, 2));
    }

    #[test]
    fn test_prepend_joins_following_ascii() {
        // ARABIC NUMBER SIGN prepends to the digit after it.
        let c = chars("\u{0600}1x");
        assert_eq!(grapheme_boundary_left(&c, 2), 0);
        assert_eq!(grapheme_boundary_right(&c, 0), 2);
        assert_eq!(grapheme_boundary_left(&c, 3), 2);
    }

    // ==================== Emoji ====================

    #[test]
    fn test_zwj_family_is_one_cluster() {
        let c = chars("a\u{1F468}\u{200D}\u{1F469}\u{200D}\u{1F467}b");
        assert_eq!(c.len(), 7);
        assert_eq!(grapheme_boundary_left(&c, 6), 1);
        assert_eq!(grapheme_boundary_right(&c, 1), 6);
    }

    #[test]
    fn test_regional_indicator_pair() {
        // U+1F1EF U+1F1F5 (flag of Japan)
        let c = chars("\u{1F1EF}\u{1F1F5}");
        assert_eq!(grapheme_boundary_left(&c, 2), 0);
        assert_eq!(grapheme_boundary_right(&c, 0), 2);
    }

    #[test]
    fn test_offset_inside_cluster_moves_to_its_edges() {
        let c = chars("e\u{0301}");
        assert_eq!(grapheme_boundary_left(&c, 1), 0);
        assert_eq!(grapheme_boundary_right(&c, 1), 2);
    }

    #[test]
    fn test_cjk_chars_are_single_clusters() {
        let c = chars("中文字");
        assert_eq!(grapheme_boundary_left(&c, 2), 1);
        assert_eq!(grapheme_boundary_right(&c, 1), 2);
    }
}
