//! Turns styled ranges into marked-up text.
//!
//! Pipeline: merge coincident ranges (union of their styles), fill uncovered
//! text with unstyled ranges, then one reducer pass that escapes each piece
//! of raw text and wraps it in the markup of its styles.

use std::borrow::Cow;
use std::collections::BTreeSet;

use markup_ranges_config::{Config, Escape};
use markup_ranges_engine::{Range, fill, is_linear, merge, reduce_text, text};

use crate::document::Styles;

fn union(current: &Range<Styles>, previous: &Range<Styles>) -> Range<Styles> {
    current.with_props(current.props.union(&previous.props).cloned().collect())
}

/// Partition of `text` into styled and unstyled segments.
pub fn segments(text: &str, ranges: &[Range<Styles>]) -> Vec<Range<Styles>> {
    let merged = merge(ranges, union);
    if !is_linear(&merged) {
        log::warn!("style ranges still overlap after merging; markup may be malformed");
    }
    fill(text, &merged, Styles::new())
}

fn escape(t: &str, escape: Escape) -> Cow<'_, str> {
    match escape {
        Escape::None => Cow::Borrowed(t),
        Escape::Html => html_escape::encode_text(t),
    }
}

fn wrap(t: &str, styles: &Styles, config: &Config) -> String {
    let markups: Vec<_> = styles.iter().filter_map(|s| config.markup(s)).collect();
    let mut out = String::with_capacity(t.len());
    for m in &markups {
        out.push_str(&m.open);
    }
    out.push_str(t);
    for m in markups.iter().rev() {
        out.push_str(&m.close);
    }
    out
}

pub fn render(text: &str, ranges: &[Range<Styles>], config: &Config) -> String {
    let unknown: BTreeSet<&str> = ranges
        .iter()
        .flat_map(|r| r.props.iter())
        .filter(|s| config.markup(s).is_none())
        .map(String::as_str)
        .collect();
    for style in unknown {
        log::warn!("no markup configured for style '{style}'; leaving it unwrapped");
    }

    let segments = segments(text, ranges);
    log::debug!("rendering {} segments", segments.len());

    reduce_text(text, segments, |t, r: &Range<Styles>| {
        wrap(&escape(t, config.escape), &r.props, config)
    })
}

/// One line per segment: position, styles and the covered text.
pub fn describe(text: &str, segments: &[Range<Styles>]) -> String {
    segments
        .iter()
        .map(|r| {
            let styles = r.props.iter().cloned().collect::<Vec<_>>().join(",");
            format!(
                "{}..{}  [{}]  {:?}",
                r.offset,
                r.end(),
                styles,
                text::slice(text, r)
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}
