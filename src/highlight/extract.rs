// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Pull emphasized terms out of backend highlight snippets.
//!
//! The backend wraps matched terms in `<em>...</em>`. Markers are matched
//! case-insensitively and the capture is non-greedy, so
//! `<em>a</em> and <em>b</em>` yields `a` and `b`, not one long capture.
//! A capture never spans a newline.

use super::set::HighlightSet;
use std::collections::HashMap;

#[cfg(feature = "regex")]
use regex::Regex;
#[cfg(feature = "regex")]
use std::sync::OnceLock;

/// Collect every emphasized term from every snippet, deduplicated in first-seen order.
///
/// # Example
///
/// ```
/// use udd::extract_emphasized;
///
/// let set = extract_emphasized(["a <em>fire</em> started near the <em>depot</em>"]);
/// assert_eq!(set.as_slice(), ["fire", "depot"]);
/// ```
pub fn extract_emphasized<I, S>(snippets: I) -> HighlightSet
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut set = HighlightSet::new();
    for snippet in snippets {
        for capture in emphasized_in(snippet.as_ref()) {
            set.insert(capture);
        }
    }
    set
}

/// Highlight terms for one field of a search hit. Absent field means no highlights.
pub fn highlights_for(highlights: &HashMap<String, Vec<String>>, field: &str) -> HighlightSet {
    highlights
        .get(field)
        .map(extract_emphasized)
        .unwrap_or_default()
}

#[cfg(feature = "regex")]
fn em_tag() -> &'static Regex {
    static EM_TAG: OnceLock<Regex> = OnceLock::new();
    // Literal pattern, cannot fail to compile.
    EM_TAG.get_or_init(|| Regex::new(r"(?i)<em>(.*?)</em>").unwrap())
}

#[cfg(feature = "regex")]
fn emphasized_in(snippet: &str) -> Vec<&str> {
    em_tag()
        .captures_iter(snippet)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str())
        .collect()
}

/// Marker scan used when the `regex` feature is off.
///
/// ASCII lowercasing keeps byte offsets stable, so positions found in the
/// folded copy slice the original snippet directly.
#[cfg(not(feature = "regex"))]
fn emphasized_in(snippet: &str) -> Vec<&str> {
    const OPEN: &str = "<em>";
    const CLOSE: &str = "</em>";

    let folded = snippet.to_ascii_lowercase();
    let mut captures = Vec::new();
    let mut from = 0;

    while let Some(open) = folded[from..].find(OPEN).map(|i| i + from) {
        let inner_start = open + OPEN.len();
        match folded[inner_start..].find(CLOSE).map(|i| i + inner_start) {
            Some(close) if !snippet[inner_start..close].contains('\n') => {
                captures.push(&snippet[inner_start..close]);
                from = close + CLOSE.len();
            }
            Some(_) => from = open + 1,
            None => break,
        }
    }

    captures
}
