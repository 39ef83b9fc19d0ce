// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for rendering plans.
//!
//! Arbitrary text and terms, including regex metacharacters and multi-byte
//! characters. The plan must always reassemble the text and agree with the
//! scan matcher on ASCII input.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use udd::highlight::scan;
use udd::{build_rendering_plan, Segment};

#[derive(Debug, Arbitrary)]
struct Input {
    text: String,
    terms: Vec<String>,
}

fuzz_target!(|input: Input| {
    // Cap sizes to avoid timeouts on huge alternations
    let text = &input.text[..floor_char_boundary(&input.text, 2000)];
    let terms: Vec<&str> = input
        .terms
        .iter()
        .take(16)
        .map(|t| &t[..floor_char_boundary(t, 32)])
        .collect();

    let plan = build_rendering_plan(text, &terms);

    // INVARIANT 1: segments reassemble the input
    let joined: String = plan.iter().map(|s| s.content.as_str()).collect();
    assert_eq!(joined, text);

    // INVARIANT 2: no empty segments except the lone one for empty text
    if text.is_empty() {
        assert_eq!(plan, vec![Segment::plain("")]);
    } else {
        assert!(plan.iter().all(|s| !s.content.is_empty()));
    }

    // INVARIANT 3: same spans as the scan matcher on ASCII
    if text.is_ascii() && terms.iter().all(|t| t.is_ascii()) {
        let mut ordered: Vec<&str> = terms.iter().copied().filter(|t| !t.is_empty()).collect();
        ordered.sort_by_key(|t| std::cmp::Reverse(t.len()));
        let expected = scan::find_matches(text, &ordered);

        let mut spans = Vec::new();
        let mut offset = 0;
        for segment in &plan {
            if segment.emphasized {
                spans.push(offset..offset + segment.content.len());
            }
            offset += segment.content.len();
        }
        assert_eq!(spans, expected);
    }
});

fn floor_char_boundary(s: &str, max: usize) -> usize {
    if s.len() <= max {
        return s.len();
    }
    (0..=max).rev().find(|&i| s.is_char_boundary(i)).unwrap_or(0)
}
