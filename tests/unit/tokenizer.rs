//! Tokenizer behaviour on realistic search-page input.

use crate::common::REFERENCE_EXPRESSION;
use udd::{lex, tokenize, BoolQuery, Operator, Token};

#[test]
fn reference_expression() {
    assert_eq!(
        tokenize(REFERENCE_EXPRESSION),
        vec![
            "employeeName:Ivan",
            "AND",
            "organizationName:ACME",
            "OR",
            "NOT",
            "incidentDescriptionEn:server room fire",
        ]
    );
}

#[test]
fn lowercase_operators_are_normalized() {
    assert_eq!(
        tokenize("a:1 and b:2 or not c:3"),
        vec!["a:1", "AND", "b:2", "OR", "NOT", "c:3"]
    );
}

#[test]
fn mixed_case_operators_are_normalized() {
    assert_eq!(tokenize("a:1 aNd b:2 Or c:3"), vec!["a:1", "AND", "b:2", "OR", "c:3"]);
}

#[test]
fn operator_words_inside_values_still_split() {
    // A value never absorbs an operator word, even one meant literally.
    assert_eq!(
        tokenize("incidentDescriptionEn:fire and smoke"),
        vec!["incidentDescriptionEn:fire", "AND", "smoke"]
    );
}

#[test]
fn value_stops_at_next_field() {
    assert_eq!(
        tokenize("employeeName:Ivan Petrovic address:Novi Sad"),
        vec!["employeeName:Ivan Petrovic", "address:Novi Sad"]
    );
}

#[test]
fn irregular_whitespace_is_collapsed() {
    assert_eq!(
        tokenize("  employeeName:Ivan \t  Petrovic\n AND   x:y  "),
        vec!["employeeName:Ivan Petrovic", "AND", "x:y"]
    );
}

#[test]
fn blank_input_has_no_tokens() {
    assert!(tokenize("").is_empty());
    assert!(tokenize(" \t\n ").is_empty());
}

#[test]
fn bare_words_pass_through() {
    assert_eq!(tokenize("fire AND flood"), vec!["fire", "AND", "flood"]);
}

#[test]
fn leading_operator_is_kept() {
    assert_eq!(tokenize("NOT severity:low"), vec!["NOT", "severity:low"]);
}

#[test]
fn field_with_empty_value() {
    assert_eq!(tokenize("employeeName: Ivan"), vec!["employeeName: Ivan"]);
    assert_eq!(tokenize("employeeName:"), vec!["employeeName:"]);
}

#[test]
fn only_first_colon_splits() {
    let tokens = lex("time:12:30 later");
    assert_eq!(
        tokens,
        vec![Token::Term {
            field: "time".to_string(),
            value: "12:30 later".to_string(),
        }]
    );
}

#[test]
fn lex_exposes_structure() {
    let tokens = lex("a:1 OR b");
    assert_eq!(tokens[1], Token::Operator(Operator::Or));
    assert!(tokens[1].is_operator());
    assert_eq!(tokens[2], Token::Word("b".to_string()));
}

#[test]
fn bool_query_body() {
    let query = BoolQuery::parse("a:1 and b:2");
    let body = serde_json::to_value(&query).unwrap();
    assert_eq!(body, serde_json::json!({ "expression": ["a:1", "AND", "b:2"] }));
}

#[test]
fn blank_bool_query_is_empty() {
    assert!(BoolQuery::parse("   ").is_empty());
}
