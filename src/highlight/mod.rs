// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Highlight rendering for search results.
//!
//! The backend returns, per field, snippets with matched terms wrapped in
//! `<em>`. Rendering a field is two steps:
//!
//! 1. `extract_emphasized`: snippets → `HighlightSet` of literal terms
//! 2. `build_rendering_plan`: full field text + terms → `Vec<Segment>`
//!
//! The snippets are fragments; the plan marks every occurrence of the terms
//! in the complete field text, not just the ones the backend quoted.

mod extract;
mod plan;
pub mod scan;
mod set;

pub use extract::{extract_emphasized, highlights_for};
pub use plan::{build_rendering_plan, emphasized_count, plan_text};
pub use set::HighlightSet;

use crate::types::Segment;
use std::collections::HashMap;

/// Rendering plan for one field of a search hit.
///
/// `field` is the wire name the backend uses as the highlight key, e.g.
/// `incidentDescriptionEn`.
pub fn highlight_field(
    text: &str,
    highlights: &HashMap<String, Vec<String>>,
    field: &str,
) -> Vec<Segment> {
    let terms = highlights_for(highlights, field);
    build_rendering_plan(text, terms.as_slice())
}
