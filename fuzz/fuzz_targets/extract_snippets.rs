// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for highlight extraction.
//!
//! Snippets come from the backend, but a misbehaving proxy can send anything.

#![no_main]

use libfuzzer_sys::fuzz_target;
use udd::extract_emphasized;

fuzz_target!(|snippets: Vec<String>| {
    let set = extract_emphasized(&snippets);

    // INVARIANT 1: no duplicates
    let mut seen = std::collections::HashSet::new();
    for term in &set {
        assert!(seen.insert(term.as_str()), "duplicate term {:?}", term);
    }

    // INVARIANT 2: captured terms never span a line
    for term in &set {
        assert!(!term.contains('\n'));
    }

    // INVARIANT 3: every term occurs in some snippet
    for term in &set {
        assert!(snippets.iter().any(|s| s.contains(term.as_str())));
    }
});
