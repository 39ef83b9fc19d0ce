// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Boolean search expressions.
//!
//! - `token`: the `Operator` / `Token` model
//! - `tokenizer`: `lex` and `tokenize`
//!
//! `BoolQuery` is the request body the backend expects for boolean search.

mod token;
mod tokenizer;

pub use token::{Operator, Token};
pub use tokenizer::{lex, tokenize};

use serde::{Deserialize, Serialize};

/// Body of `POST /search/bool`: `{"expression": ["name:Ivan", "AND", ...]}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoolQuery {
    pub expression: Vec<String>,
}

impl BoolQuery {
    /// Tokenize a typed expression into a request body.
    pub fn parse(input: &str) -> Self {
        BoolQuery {
            expression: tokenize(input),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.expression.is_empty()
    }
}
