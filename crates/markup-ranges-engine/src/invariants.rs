use crate::{error::RangeError, range::Range, text};

/// Validates that every range ends within `text`.
pub fn check_bounds<P>(text: &str, ranges: &[Range<P>]) -> Result<(), RangeError> {
    let text_len = text::char_len(text);
    match ranges.iter().find(|r| r.end() > text_len) {
        Some(r) => Err(RangeError::OutOfBounds {
            offset: r.offset,
            end: r.end(),
            text_len,
        }),
        None => Ok(()),
    }
}

/// True if `ranges` are sorted by offset and every pair either coincides or
/// is disjoint.
///
/// This is the shape [`linearize`](crate::linearize) aims for; chains of
/// three or more crossing ranges can still leave overlaps behind.
pub fn is_linear<P>(ranges: &[Range<P>]) -> bool {
    ranges.windows(2).all(|w| w[0].offset <= w[1].offset)
        && ranges.iter().enumerate().all(|(i, a)| {
            ranges[i + 1..]
                .iter()
                .all(|b| a.coincides_with(b) || a.end() <= b.offset || b.end() <= a.offset)
        })
}
