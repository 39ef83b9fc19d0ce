//! Shared test utilities and fixtures.

#![allow(dead_code)]

use udd::Segment;

// Re-export canonical fixtures from udd::testing
pub use udd::testing::{make_hit, make_incident, make_parsed};

/// The expression from the search page's placeholder text.
pub const REFERENCE_EXPRESSION: &str =
    "employeeName:Ivan AND organizationName:ACME OR NOT incidentDescriptionEn:server room fire";

/// Compact `(content, emphasized)` view of a plan for assertions.
pub fn pairs(plan: &[Segment]) -> Vec<(&str, bool)> {
    plan.iter()
        .map(|s| (s.content.as_str(), s.emphasized))
        .collect()
}

/// Assert the structural invariants every rendering plan must satisfy.
pub fn assert_plan_well_formed(text: &str, plan: &[Segment]) {
    let joined: String = plan.iter().map(|s| s.content.as_str()).collect();
    assert_eq!(joined, text, "plan does not reassemble the input");

    if text.is_empty() {
        assert_eq!(plan, [Segment::plain("")]);
        return;
    }
    for segment in plan {
        assert!(!segment.content.is_empty(), "empty segment in {:?}", plan);
    }
    for pair in plan.windows(2) {
        assert!(
            pair[0].emphasized || pair[1].emphasized,
            "adjacent plain segments in {:?}",
            plan
        );
    }
}
