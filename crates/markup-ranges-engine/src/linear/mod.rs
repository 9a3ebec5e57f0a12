//! # Linearization
//!
//! Markup languages need ranges that do not cross. Ranges coming from rich
//! text editors cross freely, so this module turns a set of possibly
//! overlapping ranges into an ordered sequence where each pair either
//! coincides or is disjoint, keeping every original payload.
//!
//! ## Modules
//!
//! - **`collapse`**: splits two crossing ranges into four tiling pieces
//! - **`merge`**: combines coincident ranges and fills uncovered gaps
//!
//! All functions take borrowed input and return fresh lists.

pub mod collapse;
pub mod merge;

pub use collapse::collapse;
pub use merge::{fill, merge};

use crate::range::Range;

/// Stable sort by offset.
pub fn sort<P: Clone>(ranges: &[Range<P>]) -> Vec<Range<P>> {
    let mut sorted = ranges.to_vec();
    sorted.sort_by_key(|r| r.offset);
    sorted
}

/// Stable sort by length, shortest first.
pub fn sort_by_length<P: Clone>(ranges: &[Range<P>]) -> Vec<Range<P>> {
    let mut sorted = ranges.to_vec();
    sorted.sort_by_key(|r| r.length);
    sorted
}

/// Drops zero-length ranges.
pub fn compact<P>(ranges: Vec<Range<P>>) -> Vec<Range<P>> {
    ranges.into_iter().filter(|r| !r.is_empty()).collect()
}

pub fn move_ranges_by<P: Clone>(ranges: &[Range<P>], delta: isize) -> Vec<Range<P>> {
    ranges.iter().map(|r| r.move_by(delta)).collect()
}

/// First range, in list order, containing `offset`.
pub fn find_by_offset<P>(ranges: &[Range<P>], offset: usize) -> Option<&Range<P>> {
    ranges.iter().find(|r| r.contains(offset))
}

/// Turns crossing ranges into a linear sequence.
///
/// Ranges are sorted by offset and scanned once. When a range collapses with
/// the last one placed, that last range is replaced by the four pieces of
/// their [`collapse`]. Coincident ranges are not collapsed and pass through;
/// use [`merge`] to combine them. Zero-length pieces are compacted away.
pub fn linearize<P: Clone>(ranges: &[Range<P>]) -> Vec<Range<P>> {
    let mut result: Vec<Range<P>> = Vec::with_capacity(ranges.len());

    for range in sort(ranges) {
        match result.pop() {
            Some(last) if last.collapses_with(&range) => {
                result.extend(collapse(&last, &range));
            }
            Some(last) => result.extend([last, range]),
            None => result.push(range),
        }
    }

    compact(result)
}
