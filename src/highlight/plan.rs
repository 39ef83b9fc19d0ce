// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Rendering plans: text split into plain and emphasized segments.
//!
//! All highlight terms are folded into one case-insensitive alternation and
//! the text is split on its matches, keeping the matched text as its own
//! segment. Every matched span equals one of the terms ignoring case, so it
//! is emphasized; everything in between is plain.
//!
//! # Overlapping terms
//!
//! Terms are tried longest first (stable for equal lengths). Combined with
//! leftmost-first matching that gives leftmost-longest: with terms `fire` and
//! `firewall`, the text `firewall` is one emphasized segment, never `fire` +
//! `wall`.
//!
//! # Invariants
//!
//! - Concatenating segment contents gives back the input text exactly.
//! - No segment is empty, except the single plain segment of an empty text.
//! - Adjacent plain segments never occur.

use crate::types::Segment;
use std::ops::Range;

#[cfg(feature = "regex")]
use regex::RegexBuilder;

/// Split `text` into segments, emphasizing every case-insensitive occurrence of any term.
///
/// # Example
///
/// ```
/// use udd::{build_rendering_plan, Segment};
///
/// let plan = build_rendering_plan("a fire broke out", &["fire"]);
/// assert_eq!(
///     plan,
///     vec![
///         Segment::plain("a "),
///         Segment::emphasized("fire"),
///         Segment::plain(" broke out"),
///     ]
/// );
/// ```
pub fn build_rendering_plan<S: AsRef<str>>(text: &str, highlights: &[S]) -> Vec<Segment> {
    let terms = ordered_terms(highlights);
    if terms.is_empty() {
        return vec![Segment::plain(text)];
    }

    let spans = find_matches(text, &terms);
    log::debug!(
        "rendering plan: {} terms matched {} spans",
        terms.len(),
        spans.len()
    );
    split_on(text, &spans)
}

/// Concatenate segment contents. For any plan this is the original text.
pub fn plan_text(plan: &[Segment]) -> String {
    plan.iter().map(|s| s.content.as_str()).collect()
}

/// Number of emphasized segments in a plan.
pub fn emphasized_count(plan: &[Segment]) -> usize {
    plan.iter().filter(|s| s.emphasized).count()
}

/// Non-empty terms, longest first, ties kept in their original order.
fn ordered_terms<S: AsRef<str>>(highlights: &[S]) -> Vec<&str> {
    let mut terms: Vec<&str> = highlights
        .iter()
        .map(AsRef::as_ref)
        .filter(|t| !t.is_empty())
        .collect();
    terms.sort_by_key(|t| std::cmp::Reverse(t.chars().count()));
    terms
}

#[cfg(feature = "regex")]
fn find_matches(text: &str, terms: &[&str]) -> Vec<Range<usize>> {
    let pattern = terms
        .iter()
        .map(|t| regex::escape(t))
        .collect::<Vec<_>>()
        .join("|");

    match RegexBuilder::new(&pattern).case_insensitive(true).build() {
        Ok(re) => re.find_iter(text).map(|m| m.range()).collect(),
        Err(e) => {
            // Only reachable when the compiled alternation exceeds the size limit.
            log::warn!("highlight pattern rejected ({}), using scan matcher", e);
            super::scan::find_matches(text, terms)
        }
    }
}

#[cfg(not(feature = "regex"))]
fn find_matches(text: &str, terms: &[&str]) -> Vec<Range<usize>> {
    super::scan::find_matches(text, terms)
}

fn split_on(text: &str, spans: &[Range<usize>]) -> Vec<Segment> {
    if spans.is_empty() {
        return vec![Segment::plain(text)];
    }

    let mut segments = Vec::with_capacity(spans.len() * 2 + 1);
    let mut last = 0;
    for span in spans {
        if span.start > last {
            segments.push(Segment::plain(&text[last..span.start]));
        }
        segments.push(Segment::emphasized(&text[span.clone()]));
        last = span.end;
    }
    if last < text.len() {
        segments.push(Segment::plain(&text[last..]));
    }
    segments
}
