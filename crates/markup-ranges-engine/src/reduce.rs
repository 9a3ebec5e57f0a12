//! # Text Reducer
//!
//! Applies per-range transformations to one string in a single consistent
//! pass. Groups are processed in order; inside a group the ranges are
//! linearized and applied shortest first, so inner ranges are transformed
//! before the outer ranges that contain them. Every range is remapped against
//! all edits applied so far (across groups) before its text is extracted.
//!
//! The fold state is the [`Reducer`]: working text plus applied edits. Each
//! step consumes it and returns the next one.

use crate::{
    linear::{linearize, sort_by_length},
    range::Range,
    remap::{Applied, AppliedRange, Remapped, remap},
    text,
};

/// Either a single list of ranges or an ordered list of groups.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Groups<P> {
    One(Vec<Range<P>>),
    Many(Vec<Vec<Range<P>>>),
}

impl<P> Groups<P> {
    /// Normalizes to the list-of-groups form.
    pub fn into_vec(self) -> Vec<Vec<Range<P>>> {
        match self {
            Groups::One(ranges) => vec![ranges],
            Groups::Many(groups) => groups,
        }
    }
}

impl<P> From<Range<P>> for Groups<P> {
    fn from(range: Range<P>) -> Self {
        Groups::One(vec![range])
    }
}

impl<P> From<Vec<Range<P>>> for Groups<P> {
    fn from(ranges: Vec<Range<P>>) -> Self {
        Groups::One(ranges)
    }
}

impl<P: Clone> From<&[Range<P>]> for Groups<P> {
    fn from(ranges: &[Range<P>]) -> Self {
        Groups::One(ranges.to_vec())
    }
}

impl<P> From<Vec<Vec<Range<P>>>> for Groups<P> {
    fn from(groups: Vec<Vec<Range<P>>>) -> Self {
        Groups::Many(groups)
    }
}

/// Working text and the history of edits applied to it.
#[derive(Debug, Clone, Default)]
pub struct Reducer {
    text: String,
    applied: Vec<AppliedRange>,
    straddled: usize,
}

impl Reducer {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            applied: Vec::new(),
            straddled: 0,
        }
    }

    /// Current working text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Edits applied so far, in application order, in the coordinates of the
    /// text at the time each was applied.
    pub fn applied(&self) -> &[AppliedRange] {
        &self.applied
    }

    /// How many remapping steps hit a partial overlap that could not be
    /// resolved.
    pub fn straddled(&self) -> usize {
        self.straddled
    }

    /// Remaps `range`, transforms the text it now covers and splices the
    /// result into the working text.
    pub fn apply<P, F>(mut self, range: &Range<P>, f: &mut F) -> Self
    where
        P: Clone,
        F: FnMut(&str, &Range<P>) -> String,
    {
        let Remapped { range, straddled } = remap(range, &self.applied);
        if straddled > 0 {
            log::debug!(
                "range [{}, {}) straddles {straddled} applied edit(s); position left unchanged",
                range.offset,
                range.end()
            );
            self.straddled += straddled;
        }

        let replacement = f(text::slice(&self.text, &range), &range);
        log::trace!(
            "replacing [{}, {}) with {} chars",
            range.offset,
            range.end(),
            text::char_len(&replacement)
        );

        self.text = text::splice(&self.text, &range, &replacement);
        self.applied.push(range.with_props(Applied { value: replacement }));
        self
    }

    /// Linearizes `ranges` and applies them shortest first.
    pub fn apply_group<P, F>(self, ranges: &[Range<P>], f: &mut F) -> Self
    where
        P: Clone,
        F: FnMut(&str, &Range<P>) -> String,
    {
        sort_by_length(&linearize(ranges))
            .iter()
            .fold(self, |reducer, range| reducer.apply(range, &mut *f))
    }

    pub fn finish(self) -> String {
        self.text
    }
}

/// Applies `f` to the text under every range of every group.
///
/// `f` receives the current text under the remapped range and the remapped
/// range itself; its result replaces that text.
pub fn reduce_text<P, G, F>(text: &str, groups: G, mut f: F) -> String
where
    P: Clone,
    G: Into<Groups<P>>,
    F: FnMut(&str, &Range<P>) -> String,
{
    groups
        .into()
        .into_vec()
        .iter()
        .fold(Reducer::new(text), |reducer, group| {
            reducer.apply_group(group, &mut f)
        })
        .finish()
}
