//! Backend document shapes.

use crate::common::{make_incident, make_parsed};
use udd::{FieldError, SearchFilters, SearchHit};

#[test]
fn parsed_document_wire_names() {
    let doc = make_parsed("report.pdf");
    let json = serde_json::to_value(&doc).unwrap();
    assert_eq!(json["employeeName"], "Ana Jovanovic");
    assert_eq!(json["affectedOrganizationName"], "Globex");
    assert_eq!(json["incidentDescription"], "Unauthorized access to the server room");
}

#[test]
fn edits_update_fields() {
    let mut doc = make_parsed("report.pdf");
    doc.apply_edit("incidentSeverity=high").unwrap();
    doc.apply_edit("address=Trg slobode 1, Novi Sad").unwrap();
    assert_eq!(doc.incident_severity, "high");
    assert_eq!(doc.address, "Trg slobode 1, Novi Sad");
}

#[test]
fn edit_value_may_contain_equals() {
    let mut doc = make_parsed("report.pdf");
    doc.apply_edit("incidentDescription=a=b").unwrap();
    assert_eq!(doc.incident_description, "a=b");
}

#[test]
fn bad_edits_are_rejected() {
    let mut doc = make_parsed("report.pdf");
    assert_eq!(
        doc.apply_edit("severity=high"),
        Err(FieldError::Unknown("severity".to_string()))
    );
    assert_eq!(
        doc.apply_edit("incidentSeverity"),
        Err(FieldError::Malformed("incidentSeverity".to_string()))
    );
}

#[test]
fn hit_without_highlights_deserializes() {
    let incident = make_incident("7", "Flooded basement");
    let json = serde_json::json!({ "index": incident });
    let hit: SearchHit = serde_json::from_value(json).unwrap();
    assert!(hit.highlights.is_empty());
    assert_eq!(hit.index.incident_description_en, "Flooded basement");
}

#[test]
fn incident_location_round_trips_as_lat_lon() {
    let incident = make_incident("7", "x");
    let json = serde_json::to_value(&incident).unwrap();
    assert_eq!(json["location"]["lat"], 45.2671);
    assert_eq!(json["incidentDescriptionEn"], "x");
}

#[test]
fn filters_skip_empty_values() {
    let filters = SearchFilters {
        employee_name: "Ivan".to_string(),
        distance: "10km".to_string(),
        address: "Novi Sad".to_string(),
        ..Default::default()
    };
    assert_eq!(
        filters.query_pairs(),
        vec![
            ("employeeName", "Ivan".to_string()),
            ("address", "Novi Sad".to_string()),
            ("distance", "10km".to_string()),
        ]
    );
    assert!(SearchFilters::default().is_empty());
}
