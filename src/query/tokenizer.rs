// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Boolean expression tokenizer.
//!
//! Splits free text like `name:Ivan NOT surname:Mrsulja OR education:"PhD"`
//! into the ordered token list the backend's boolean search consumes. The
//! tokenizer is purely syntactic: unbalanced quotes, leading or repeated
//! operators all pass through untouched and the backend decides what they mean.
//!
//! # Rules
//!
//! 1. Whitespace runs separate parts.
//! 2. `AND` / `OR` / `NOT` (any case) become operator tokens.
//! 3. A part containing `:` opens a `field:value` term. The value keeps
//!    absorbing following parts until one is an operator or contains a colon.
//! 4. Anything else is a bare word.

use super::token::{Operator, Token};

/// Tokenize into typed tokens.
pub fn lex(input: &str) -> Vec<Token> {
    let parts: Vec<&str> = input.split_whitespace().collect();
    let mut tokens = Vec::new();
    let mut i = 0;

    while i < parts.len() {
        let part = parts[i];

        if let Some(op) = Operator::parse_keyword(part) {
            tokens.push(Token::Operator(op));
            i += 1;
        } else if let Some((field, first)) = part.split_once(':') {
            let mut value_parts = vec![first];
            i += 1;
            while i < parts.len() && !ends_value(parts[i]) {
                value_parts.push(parts[i]);
                i += 1;
            }
            tokens.push(Token::Term {
                field: field.to_string(),
                value: value_parts.join(" "),
            });
        } else {
            tokens.push(Token::Word(part.to_string()));
            i += 1;
        }
    }

    tokens
}

/// Tokenize into the wire form sent to `POST /search/bool`.
///
/// # Example
///
/// ```
/// use udd::tokenize;
///
/// let tokens = tokenize("name:Ivan and city:Novi Sad");
/// assert_eq!(tokens, vec!["name:Ivan", "AND", "city:Novi Sad"]);
/// ```
pub fn tokenize(input: &str) -> Vec<String> {
    let tokens: Vec<String> = lex(input).into_iter().map(String::from).collect();
    log::debug!("tokenized boolean expression into {} tokens", tokens.len());
    tokens
}

/// A following part stops a value capture if it is an operator or starts a new term.
#[inline]
fn ends_value(part: &str) -> bool {
    Operator::parse_keyword(part).is_some() || part.contains(':')
}
