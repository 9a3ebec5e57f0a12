//! # Range Algebra for Annotated Text
//!
//! Ranges are `offset + length` spans over a string carrying an arbitrary
//! payload (style sets, entity data, replacement text). This crate compares,
//! normalizes and recombines overlapping ranges, then applies ordered,
//! length-changing transformations keyed by those ranges to a single string.
//!
//! ## Modules
//!
//! - **`range`**: `Range<P>` value type and its geometry (containment,
//!   ordering, collapsing, moving)
//! - **`linear`**: linearization of crossing ranges, `merge` of coincident
//!   ranges and `fill` of uncovered gaps
//! - **`remap`**: recomputes a range's position against a history of applied
//!   edits
//! - **`reduce`**: the `Reducer` that applies transformations shortest-first
//! - **`invariants`**: bounds and linearity checks
//! - **`text`**: char-offset slicing helpers
//!
//! ## Usage Pattern
//!
//! ```rust
//! use markup_ranges_engine::{Range, reduce_text};
//!
//! let out = reduce_text("ab", vec![Range::at(0, 1), Range::at(1, 1)], |t, _| {
//!     format!("[{t}]")
//! });
//! assert_eq!(out, "[a][b]");
//! ```
//!
//! Offsets count `char`s. They are abstract positions and make no attempt to
//! respect grapheme clusters.

pub mod error;
pub mod invariants;
pub mod linear;
pub mod range;
pub mod reduce;
pub mod remap;
pub mod text;

pub use error::RangeError;
pub use invariants::{check_bounds, is_linear};
pub use linear::{
    collapse, compact, fill, find_by_offset, linearize, merge, move_ranges_by, sort,
    sort_by_length,
};
pub use range::Range;
pub use reduce::{Groups, Reducer, reduce_text};
pub use remap::{Applied, AppliedRange, Relation, Remapped, relative_to, remap};
