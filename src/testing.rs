//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical fixtures to avoid duplication.

#![doc(hidden)]

use crate::types::{Incident, Location, ParsedDocument, SearchHit};
use std::collections::HashMap;

/// Create an incident with the given id and English description.
pub fn make_incident(id: &str, description_en: &str) -> Incident {
    Incident {
        id: id.to_string(),
        filename: format!("{}.pdf", id),
        employee_name: "Ivan Petrovic".to_string(),
        organization_name: "ACME".to_string(),
        affected_organization_name: "Globex".to_string(),
        incident_severity: "high".to_string(),
        location: Some(Location {
            lat: 45.2671,
            lon: 19.8335,
        }),
        incident_description_sr: String::new(),
        incident_description_en: description_en.to_string(),
    }
}

/// Create a search hit whose `incidentDescriptionEn` carries the given snippets.
pub fn make_hit(id: &str, description_en: &str, snippets: &[&str]) -> SearchHit {
    let mut highlights = HashMap::new();
    if !snippets.is_empty() {
        highlights.insert(
            "incidentDescriptionEn".to_string(),
            snippets.iter().map(|s| s.to_string()).collect(),
        );
    }
    SearchHit {
        index: make_incident(id, description_en),
        highlights,
    }
}

/// Create a parsed document as the backend returns it after `/parse`.
pub fn make_parsed(filename: &str) -> ParsedDocument {
    ParsedDocument {
        filename: filename.to_string(),
        employee_name: "Ana Jovanovic".to_string(),
        organization_name: "ACME".to_string(),
        affected_organization_name: "Globex".to_string(),
        incident_severity: "medium".to_string(),
        address: "Bulevar oslobodjenja 1, Novi Sad".to_string(),
        incident_description: "Unauthorized access to the server room".to_string(),
    }
}
