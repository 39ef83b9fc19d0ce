// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Explicit left-to-right matcher for highlight terms.
//!
//! Walks the text one character boundary at a time and, at each position,
//! tries the terms in the order given. The first term that matches wins and
//! the walk resumes after it. Characters compare under simple case folding,
//! so fed terms sorted longest-first this produces the same spans as the
//! case-insensitive alternation in `plan`.
//!
//! This is the engine when the crate is built without `regex`, the fallback
//! when a term set is too large to compile, and the oracle the property
//! tests compare the regex engine against.

use std::ops::Range;

/// Non-overlapping byte spans of `text` matching any term, case-insensitively.
///
/// Empty terms never match. Spans are ascending and always on char boundaries.
pub fn find_matches(text: &str, terms: &[&str]) -> Vec<Range<usize>> {
    let mut spans = Vec::new();
    let mut pos = 0;

    while pos < text.len() {
        let rest = &text[pos..];
        let hit = terms
            .iter()
            .filter(|term| !term.is_empty())
            .find_map(|term| match_len(rest, term));

        match hit {
            Some(len) => {
                spans.push(pos..pos + len);
                pos += len;
            }
            None => pos += rest.chars().next().map_or(1, char::len_utf8),
        }
    }

    spans
}

/// Byte length of the prefix of `haystack` equal to `term` ignoring case, if any.
fn match_len(haystack: &str, term: &str) -> Option<usize> {
    let mut hay = haystack.char_indices();
    for tc in term.chars() {
        let (_, hc) = hay.next()?;
        if !chars_eq_ignore_case(tc, hc) {
            return None;
        }
    }
    Some(hay.next().map_or(haystack.len(), |(i, _)| i))
}

#[inline]
fn chars_eq_ignore_case(a: char, b: char) -> bool {
    a == b || simple_fold(a) == simple_fold(b)
}

/// Canonical member of `c`'s simple case-folding class, the equivalence the
/// regex engine's case-insensitive mode uses. `ſ`, `s` and `S` fold together,
/// as do `ς`, `σ` and `Σ`. Multi-char mappings (`ß` to `SS`) are not
/// simple folds and leave the char as is.
fn simple_fold(c: char) -> char {
    // Dotless i upper-cases to I but only folds to i under Turkic rules.
    if c == 'ı' {
        return c;
    }
    let upper = single(c.to_uppercase()).unwrap_or(c);
    single(upper.to_lowercase()).unwrap_or(upper)
}

fn single(mut chars: impl Iterator<Item = char>) -> Option<char> {
    let c = chars.next()?;
    chars.next().is_none().then_some(c)
}
