use crate::range::Range;

/// Splits two crossing ranges into four pieces.
///
/// Expects `a.offset <= b.offset`. The pieces are, in order:
/// 1. `a` before `b` starts
/// 2. `a` inside the overlap
/// 3. `b` inside the overlap (same interval as 2)
/// 4. `b` after `a` ends
///
/// Pieces 1 and 2 sum to `a.length`, pieces 3 and 4 to `b.length`, whenever
/// `b` ends at or after `a`. Any piece may be empty. When `b` lies inside `a`
/// the overlap is `a`'s tail and piece 4 is empty.
pub fn collapse<P: Clone>(a: &Range<P>, b: &Range<P>) -> [Range<P>; 4] {
    let overlap_offset = b.offset;
    let overlap_length = a.end().saturating_sub(b.offset);
    let overlap_end = overlap_offset + overlap_length;

    [
        a.move_to(a.offset, b.offset.saturating_sub(a.offset)),
        a.move_to(overlap_offset, overlap_length),
        b.move_to(overlap_offset, overlap_length),
        b.move_to(overlap_end, b.end().saturating_sub(overlap_end)),
    ]
}
