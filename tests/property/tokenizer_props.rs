//! Tokenizer invariants.

use proptest::prelude::*;
use udd::{lex, tokenize, Operator, Token};

/// Parts a user might type: operators in any case, bare words, field terms.
fn part_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        prop::sample::select(vec!["and", "AND", "Or", "not", "NoT"]).prop_map(String::from),
        prop::string::string_regex("[a-zA-Z0-9\"]{1,8}").unwrap(),
        prop::string::string_regex("[a-zA-Z]{1,8}:[a-zA-Z0-9:]{0,6}").unwrap(),
    ]
}

fn expression_strategy() -> impl Strategy<Value = String> {
    (
        prop::collection::vec(part_strategy(), 0..12),
        prop::collection::vec(prop::sample::select(vec![" ", "  ", "\t", " \n "]), 12),
    )
        .prop_map(|(parts, gaps)| {
            parts
                .iter()
                .zip(gaps.iter())
                .map(|(part, gap)| format!("{}{}", gap, part))
                .collect()
        })
}

proptest! {
    /// Tokens rejoined with single spaces equal the input words rejoined the
    /// same way, with operators upper-cased. Nothing is dropped or reordered.
    #[test]
    fn prop_tokens_preserve_words(input in expression_strategy()) {
        let expected = input
            .split_whitespace()
            .map(|w| match Operator::parse_keyword(w) {
                Some(op) => op.as_str().to_string(),
                None => w.to_string(),
            })
            .collect::<Vec<_>>()
            .join(" ");
        prop_assert_eq!(tokenize(&input).join(" "), expected);
    }

    /// No token is blank, and every operator token is upper case.
    #[test]
    fn prop_tokens_well_formed(input in expression_strategy()) {
        for token in tokenize(&input) {
            prop_assert!(!token.trim().is_empty());
            if let Some(op) = Operator::parse_keyword(&token) {
                prop_assert_eq!(token.as_str(), op.as_str());
            }
        }
    }

    /// Values never contain an operator word or a colon-bearing word after
    /// their first part.
    #[test]
    fn prop_values_stop_at_boundaries(input in expression_strategy()) {
        for token in lex(&input) {
            if let Token::Term { value, .. } = token {
                for word in value.split(' ').skip(1) {
                    prop_assert!(Operator::parse_keyword(word).is_none());
                    prop_assert!(!word.contains(':'));
                }
            }
        }
    }

    /// Whitespace-only input has no tokens.
    #[test]
    fn prop_blank_input(input in "[ \t\n]{0,10}") {
        prop_assert!(tokenize(&input).is_empty());
    }
}
