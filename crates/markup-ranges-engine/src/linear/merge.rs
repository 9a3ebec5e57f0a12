use crate::{
    linear::{compact, find_by_offset, linearize, sort},
    range::Range,
    text,
};

/// Linearizes `ranges`, then folds each run of coincident ranges into one.
///
/// `combine(current, previous)` is called with the range being visited and
/// the one already kept at the same position; its result replaces both.
pub fn merge<P, F>(ranges: &[Range<P>], mut combine: F) -> Vec<Range<P>>
where
    P: Clone,
    F: FnMut(&Range<P>, &Range<P>) -> Range<P>,
{
    let mut result: Vec<Range<P>> = Vec::new();

    for range in linearize(ranges) {
        match result.pop() {
            Some(last) if range.coincides_with(&last) => result.push(combine(&range, &last)),
            Some(last) => result.extend([last, range]),
            None => result.push(range),
        }
    }

    compact(result)
}

/// Adds a range carrying `props` for every run of `text` not covered by `ranges`.
///
/// `ranges` should already be linear. The result holds the original ranges
/// plus the gap ranges, sorted by offset.
pub fn fill<P: Clone>(text: &str, ranges: &[Range<P>], props: P) -> Vec<Range<P>> {
    let mut filled = Vec::new();
    let mut gap_start = 0;
    let mut gap_length = 0;

    let flush = |start: usize, length: usize, filled: &mut Vec<Range<P>>| {
        if length > 0 {
            filled.push(Range::new(start, length, props.clone()));
        }
    };

    for i in 0..text::char_len(text) {
        if find_by_offset(ranges, i).is_some() {
            flush(gap_start, gap_length, &mut filled);
            gap_start = i + 1;
            gap_length = 0;
        } else {
            gap_length += 1;
        }
    }
    flush(gap_start, gap_length, &mut filled);

    filled.extend_from_slice(ranges);
    sort(&filled)
}
