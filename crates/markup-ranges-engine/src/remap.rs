//! # Position Remapping
//!
//! After a transformation replaces the text under a range, every range that
//! has not been processed yet may point at the wrong place. An
//! [`AppliedRange`] records one such replacement (position in the working
//! text at the time it was applied, plus the new text). [`remap`] folds a
//! range through a history of applied ranges to find where it points now.

use serde::{Deserialize, Serialize};

use crate::{range::Range, text};

/// Payload of an applied edit: the text substituted for the range.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Applied {
    pub value: String,
}

pub type AppliedRange = Range<Applied>;

impl Range<Applied> {
    /// Net change in text length introduced by this edit.
    pub fn change(&self) -> isize {
        text::char_len(&self.props.value) as isize - self.length as isize
    }
}

/// How a range sits relative to one applied edit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Relation {
    /// The edit happened strictly inside the range: the range grows.
    Encloses,
    /// The range starts before the edit: unaffected.
    Before,
    /// The edit happened entirely earlier in the text: the range shifts.
    After,
    /// Both start at the same offset: treated as `Encloses`.
    SharedStart,
    /// Partial overlap matching none of the above: the range is left as is.
    Straddles,
}

impl Relation {
    /// Classifies `current` against `edit`, first matching rule wins.
    pub fn of<P, Q>(current: &Range<P>, edit: &Range<Q>) -> Self {
        if current.contains_range(edit) {
            Relation::Encloses
        } else if current.is_before(edit) {
            Relation::Before
        } else if current.is_after(edit) {
            Relation::After
        } else if current.offset == edit.offset {
            Relation::SharedStart
        } else {
            Relation::Straddles
        }
    }
}

/// Result of [`remap`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Remapped<P> {
    pub range: Range<P>,
    /// Number of edits that fell into [`Relation::Straddles`].
    pub straddled: usize,
}

/// Folds `start` through `applied`, in order.
pub fn remap<P: Clone>(start: &Range<P>, applied: &[AppliedRange]) -> Remapped<P> {
    applied.iter().fold(
        Remapped {
            range: start.clone(),
            straddled: 0,
        },
        |mut acc, edit| {
            match Relation::of(&acc.range, edit) {
                Relation::Encloses | Relation::SharedStart => {
                    acc.range = acc.range.enlarge(edit.change());
                }
                Relation::After => acc.range = acc.range.move_by(edit.change()),
                Relation::Before => {}
                Relation::Straddles => acc.straddled += 1,
            }
            acc
        },
    )
}

/// Where `start` points after every edit in `applied`.
pub fn relative_to<P: Clone>(start: &Range<P>, applied: &[AppliedRange]) -> Range<P> {
    remap(start, applied).range
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    fn edit(offset: usize, length: usize, value: &str) -> AppliedRange {
        Range::new(
            offset,
            length,
            Applied {
                value: value.to_string(),
            },
        )
    }

    #[test]
    fn change_counts_chars() {
        assert_eq!(edit(0, 1, "[a]").change(), 2);
        assert_eq!(edit(0, 4, "").change(), -4);
        assert_eq!(edit(0, 1, "é").change(), 0);
    }

    #[rstest]
    #[case(Range::at(0, 10), Range::at(2, 3), Relation::Encloses)]
    #[case(Range::at(0, 2), Range::at(5, 1), Relation::Before)]
    #[case(Range::at(0, 10), Range::at(5, 5), Relation::Before)] // shares the end
    #[case(Range::at(5, 2), Range::at(0, 5), Relation::After)]
    #[case(Range::at(2, 2), Range::at(2, 2), Relation::SharedStart)]
    #[case(Range::at(2, 1), Range::at(2, 6), Relation::SharedStart)]
    #[case(Range::at(3, 4), Range::at(1, 4), Relation::Straddles)]
    fn classifies_relation(#[case] current: Range, #[case] edit: Range, #[case] expected: Relation) {
        assert_eq!(Relation::of(&current, &edit), expected);
    }

    #[test]
    fn enclosing_range_grows() {
        let r = relative_to(&Range::at(0, 10), &[edit(2, 3, "xxxxxxx")]);
        assert_eq!(r, Range::at(0, 14));
    }

    #[test]
    fn later_range_shifts() {
        let r = relative_to(&Range::at(1, 1), &[edit(0, 1, "[a]")]);
        assert_eq!(r, Range::at(3, 1));
    }

    #[test]
    fn earlier_range_is_untouched() {
        let r = relative_to(&Range::at(0, 2), &[edit(4, 2, "")]);
        assert_eq!(r, Range::at(0, 2));
    }

    #[test]
    fn shared_start_grows() {
        let r = relative_to(&Range::at(2, 2), &[edit(2, 2, "<b>cd</b>")]);
        assert_eq!(r, Range::at(2, 9));
    }

    #[test]
    fn straddling_edit_is_ignored_and_counted() {
        let remapped = remap(&Range::at(3, 4), &[edit(1, 4, "....!")]);
        assert_eq!(remapped.range, Range::at(3, 4));
        assert_eq!(remapped.straddled, 1);
    }

    #[test]
    fn folds_edits_in_order() {
        let applied = vec![edit(0, 1, "[a]"), edit(3, 1, "[b]")];
        let r = relative_to(&Range::new(2, 1, "c"), &applied);
        assert_eq!(r, Range::new(6, 1, "c"));
    }

    #[test]
    fn applied_ranges_serialize() {
        let applied = vec![edit(0, 1, "[a]"), edit(3, 1, "")];
        let serialized = toml::to_string(&Log { applied: applied.clone() }).unwrap();
        let back: Log = toml::from_str(&serialized).unwrap();
        assert_eq!(back.applied, applied);
    }

    #[derive(Serialize, Deserialize)]
    struct Log {
        applied: Vec<AppliedRange>,
    }

    #[test]
    fn no_history_is_identity() {
        let r = Range::new(4, 2, "x");
        assert_eq!(relative_to(&r, &[]), r);
    }
}
