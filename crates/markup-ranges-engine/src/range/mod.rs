//! # Range Value Type
//!
//! A [`Range`] is a half-open interval `[offset, offset + length)` over a text
//! plus a payload `P`. Ranges are values: every derived range (moved,
//! enlarged, collapsed) is a fresh copy, never a mutation of the input.

pub mod geometry;

use serde::{Deserialize, Serialize};

use crate::error::RangeError;

/// A span over a text with an attached payload.
///
/// `PartialEq` compares the payload as well; use
/// [`coincides_with`](Range::coincides_with) to compare positions only.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Range<P = ()> {
    /// Inclusive start position (in chars).
    pub offset: usize,
    /// Number of chars covered. Zero-length ranges are dropped by compaction.
    pub length: usize,
    /// Arbitrary payload carried through every operation.
    pub props: P,
}

impl<P> Range<P> {
    /// Builds a range; explicit `offset`/`length` always win over anything in `props`.
    pub fn new(offset: usize, length: usize, props: P) -> Self {
        Self {
            offset,
            length,
            props,
        }
    }

    /// Builds a range from raw, possibly negative, positions.
    pub fn try_new(offset: i64, length: i64, props: P) -> Result<Self, RangeError> {
        if offset < 0 {
            return Err(RangeError::NegativeOffset { offset });
        }
        if length < 0 {
            return Err(RangeError::NegativeLength { length });
        }
        Ok(Self::new(offset as usize, length as usize, props))
    }

    /// Exclusive end position.
    #[must_use]
    pub fn end(&self) -> usize {
        self.offset + self.length
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// Same position, different payload.
    pub fn with_props<Q>(&self, props: Q) -> Range<Q> {
        Range::new(self.offset, self.length, props)
    }

    pub fn map_props<Q>(self, f: impl FnOnce(P) -> Q) -> Range<Q> {
        Range::new(self.offset, self.length, f(self.props))
    }
}

impl Range {
    /// A payload-less range.
    pub fn at(offset: usize, length: usize) -> Self {
        Self::new(offset, length, ())
    }
}

impl<P> From<std::ops::Range<usize>> for Range<P>
where
    P: Default,
{
    fn from(r: std::ops::Range<usize>) -> Self {
        Self::new(r.start, r.end.saturating_sub(r.start), P::default())
    }
}
