//! Pure comparisons and derivations over pairs of ranges.
//!
//! Every check works across payload types, so a styled range can be compared
//! against an applied edit without converting either.

use super::Range;

impl<P> Range<P> {
    /// True if `offset` lies in `[self.offset, self.end())`.
    pub fn contains(&self, offset: usize) -> bool {
        offset >= self.offset && offset < self.end()
    }

    /// True if both the start and the end of `other` are contained as points.
    ///
    /// Because the end is tested as a point against a half-open interval, a
    /// range never contains another range that ends where it ends.
    pub fn contains_range<Q>(&self, other: &Range<Q>) -> bool {
        self.contains(other.offset) && self.contains(other.end())
    }

    /// True if `self` starts inside `other`.
    pub fn starts_in<Q>(&self, other: &Range<Q>) -> bool {
        other.contains(self.offset)
    }

    /// Compares starts only; overlap is ignored.
    pub fn is_before<Q>(&self, other: &Range<Q>) -> bool {
        self.offset < other.offset
    }

    /// True if `self` starts at or after the end of `other`.
    pub fn is_after<Q>(&self, other: &Range<Q>) -> bool {
        self.offset >= other.end()
    }

    /// Same offset and same length, payload ignored.
    pub fn coincides_with<Q>(&self, other: &Range<Q>) -> bool {
        self.offset == other.offset && self.length == other.length
    }

    /// True if the two ranges overlap but are distinguishable.
    pub fn collapses_with<Q>(&self, other: &Range<Q>) -> bool {
        (self.starts_in(other) || other.starts_in(self)) && !self.coincides_with(other)
    }
}

impl<P: Clone> Range<P> {
    /// A range at a new position carrying the same payload.
    pub fn move_to(&self, offset: usize, length: usize) -> Self {
        Self::new(offset, length, self.props.clone())
    }

    /// Shifts the offset by `delta`, saturating at zero.
    pub fn move_by(&self, delta: isize) -> Self {
        self.move_to(self.offset.saturating_add_signed(delta), self.length)
    }

    /// Grows (or shrinks, for a negative `delta`) the length, saturating at zero.
    pub fn enlarge(&self, delta: isize) -> Self {
        self.move_to(self.offset, self.length.saturating_add_signed(delta))
    }
}
