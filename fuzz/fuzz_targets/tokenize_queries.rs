// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for the boolean expression tokenizer.
//!
//! Whatever lands in the search box, tokenizing must not panic and must not
//! lose or invent words.

#![no_main]

use libfuzzer_sys::fuzz_target;
use udd::{tokenize, Operator};

fuzz_target!(|input: &str| {
    let tokens = tokenize(input);

    // INVARIANT 1: blank input has no tokens
    if input.trim().is_empty() {
        assert!(tokens.is_empty());
    }

    // INVARIANT 2: no blank tokens, operators upper-cased
    for token in &tokens {
        assert!(!token.trim().is_empty(), "blank token from {:?}", input);
        if let Some(op) = Operator::parse_keyword(token) {
            assert_eq!(token, op.as_str());
        }
    }

    // INVARIANT 3: words survive in order
    let expected = input
        .split_whitespace()
        .map(|w| match Operator::parse_keyword(w) {
            Some(op) => op.as_str().to_string(),
            None => w.to_string(),
        })
        .collect::<Vec<_>>()
        .join(" ");
    assert_eq!(tokens.join(" "), expected);
});
