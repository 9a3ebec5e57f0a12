use thiserror::Error;

/// Errors raised at the boundary where raw offsets become [`Range`](crate::Range)s.
///
/// Operations on well-formed ranges never fail; these only come from
/// [`Range::try_new`](crate::Range::try_new) and [`check_bounds`](crate::check_bounds).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RangeError {
    #[error("Range offset must be non-negative, got {offset}")]
    NegativeOffset { offset: i64 },

    #[error("Range length must be non-negative, got {length}")]
    NegativeLength { length: i64 },

    #[error("Range [{offset}, {end}) exceeds text length {text_len}")]
    OutOfBounds {
        offset: usize,
        end: usize,
        text_len: usize,
    },
}
