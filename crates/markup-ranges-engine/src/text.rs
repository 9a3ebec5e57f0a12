//! Char-offset helpers over `&str`.
//!
//! Range positions count `char`s while Rust strings index bytes. These
//! helpers translate between the two and clamp to the end of the string, so
//! a range running past the text yields a shorter slice rather than a panic.

use crate::range::Range;

/// Number of chars in `text`.
pub fn char_len(text: &str) -> usize {
    text.chars().count()
}

/// Byte index of the char at `offset`, or `text.len()` past the end.
pub fn byte_offset(text: &str, offset: usize) -> usize {
    text.char_indices()
        .nth(offset)
        .map_or(text.len(), |(idx, _)| idx)
}

/// The text covered by `range`.
pub fn slice<'a, P>(text: &'a str, range: &Range<P>) -> &'a str {
    let start = byte_offset(text, range.offset);
    let end = byte_offset(text, range.end());
    &text[start..end]
}

/// A copy of `text` with the chars covered by `range` replaced.
pub fn splice<P>(text: &str, range: &Range<P>, replacement: &str) -> String {
    let start = byte_offset(text, range.offset);
    let end = byte_offset(text, range.end());
    let mut out = String::with_capacity(text.len() - (end - start) + replacement.len());
    out.push_str(&text[..start]);
    out.push_str(replacement);
    out.push_str(&text[end..]);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn char_len_counts_scalars() {
        assert_eq!(char_len("héllo"), 5);
        assert_eq!(char_len(""), 0);
    }

    #[test]
    fn byte_offset_clamps() {
        assert_eq!(byte_offset("héllo", 0), 0);
        assert_eq!(byte_offset("héllo", 2), 3);
        assert_eq!(byte_offset("héllo", 5), 6);
        assert_eq!(byte_offset("héllo", 50), 6);
    }

    #[test]
    fn slice_partial_range() {
        assert_eq!(slice("hello world", &Range::at(6, 5)), "world");
        assert_eq!(slice("héllo", &Range::at(1, 2)), "él");
    }

    #[test]
    fn slice_past_end_is_clamped() {
        assert_eq!(slice("abc", &Range::at(1, 10)), "bc");
        assert_eq!(slice("abc", &Range::at(7, 2)), "");
    }

    #[test]
    fn splice_replaces_range() {
        assert_eq!(splice("Hello World", &Range::at(0, 5), "HELLO"), "HELLO World");
        assert_eq!(splice("ab", &Range::at(1, 0), "--"), "a--b");
        assert_eq!(splice("héllo", &Range::at(1, 1), "e"), "hello");
    }

    #[test]
    fn splice_past_end_appends() {
        assert_eq!(splice("abc", &Range::at(9, 1), "!"), "abc!");
    }
}
