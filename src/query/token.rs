// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Token model for boolean search expressions.

use std::fmt;

/// Boolean operator keyword. Matched case-insensitively, always rendered upper-case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    And,
    Or,
    Not,
}

impl Operator {
    /// Recognize an operator keyword regardless of case (`and`, `And`, `AND`).
    pub fn parse_keyword(word: &str) -> Option<Self> {
        if word.eq_ignore_ascii_case("AND") {
            Some(Operator::And)
        } else if word.eq_ignore_ascii_case("OR") {
            Some(Operator::Or)
        } else if word.eq_ignore_ascii_case("NOT") {
            Some(Operator::Not)
        } else {
            None
        }
    }

    /// Canonical upper-case spelling sent to the backend.
    pub fn as_str(self) -> &'static str {
        match self {
            Operator::And => "AND",
            Operator::Or => "OR",
            Operator::Not => "NOT",
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One unit of a tokenized boolean expression.
///
/// The `Display` form is the wire form: operators upper-cased, terms as
/// `field:value` with the value exactly as typed (quotes included), bare
/// words unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Token {
    Operator(Operator),
    /// `field:value`. The value may span several words and may be empty.
    Term { field: String, value: String },
    /// A word with no colon that is not an operator.
    Word(String),
}

impl Token {
    pub fn is_operator(&self) -> bool {
        matches!(self, Token::Operator(_))
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Operator(op) => write!(f, "{}", op),
            Token::Term { field, value } => write!(f, "{}:{}", field, value),
            Token::Word(word) => f.write_str(word),
        }
    }
}

impl From<Token> for String {
    fn from(token: Token) -> Self {
        token.to_string()
    }
}
