// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Insertion-ordered set of highlight terms.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Deduplicated highlight terms in first-seen order.
///
/// Equality is exact string equality: `Fire` and `fire` are distinct terms.
/// Deserializing from a JSON array drops duplicates the same way `insert` does.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct HighlightSet {
    terms: Vec<String>,
    seen: HashSet<String>,
}

impl HighlightSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a term. Returns `false` if it was already present.
    pub fn insert(&mut self, term: impl Into<String>) -> bool {
        let term = term.into();
        if self.seen.contains(&term) {
            return false;
        }
        self.seen.insert(term.clone());
        self.terms.push(term);
        true
    }

    pub fn contains(&self, term: &str) -> bool {
        self.seen.contains(term)
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.terms.iter()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.terms
    }
}

impl PartialEq for HighlightSet {
    fn eq(&self, other: &Self) -> bool {
        self.terms == other.terms
    }
}

impl Eq for HighlightSet {}

impl<S: Into<String>> FromIterator<S> for HighlightSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = HighlightSet::new();
        set.extend(iter);
        set
    }
}

impl<S: Into<String>> Extend<S> for HighlightSet {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for term in iter {
            self.insert(term);
        }
    }
}

impl IntoIterator for HighlightSet {
    type Item = String;
    type IntoIter = std::vec::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.terms.into_iter()
    }
}

impl<'a> IntoIterator for &'a HighlightSet {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.terms.iter()
    }
}

impl From<Vec<String>> for HighlightSet {
    fn from(terms: Vec<String>) -> Self {
        terms.into_iter().collect()
    }
}

impl From<HighlightSet> for Vec<String> {
    fn from(set: HighlightSet) -> Self {
        set.terms
    }
}
