// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Data model shared by the highlight renderer and the backend client.
//!
//! The backend speaks camelCase JSON. Field names below are the Rust
//! spellings; the serde attributes keep the wire names intact.
//!
//! | Rust Type        | Wire shape                                   | Used by                    |
//! |------------------|----------------------------------------------|----------------------------|
//! | `Segment`        | `{"content": "...", "emphasized": true}`     | rendering plans            |
//! | `Credentials`    | `{"username", "password"}`                   | sign-in / sign-up          |
//! | `ParsedDocument` | parsed PDF fields                            | `/parse` result, `/index`  |
//! | `Incident`       | indexed document                             | search hits                |
//! | `SearchHit`      | `{"index": Incident, "highlights": {...}}`   | all search endpoints       |
//! | `SearchFilters`  | query string of `GET /search`                | structured search          |

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;

// =============================================================================
// RENDERING PLAN
// =============================================================================

/// One piece of a rendering plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Segment {
    pub content: String,
    pub emphasized: bool,
}

impl Segment {
    pub fn plain(content: impl Into<String>) -> Self {
        Segment {
            content: content.into(),
            emphasized: false,
        }
    }

    pub fn emphasized(content: impl Into<String>) -> Self {
        Segment {
            content: content.into(),
            emphasized: true,
        }
    }
}

// =============================================================================
// BACKEND DOCUMENTS
// =============================================================================

/// Username and password for `/auth/signin` and `/auth/signup`.
#[derive(Clone, Serialize, Deserialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"***")
            .finish()
    }
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum FieldError {
    #[error("Unknown field '{0}'")]
    Unknown(String),
    #[error("Expected field=value, got '{0}'")]
    Malformed(String),
}

/// Fields the backend extracted from an uploaded PDF.
///
/// Returned by `POST /parse`, reviewed and possibly edited by the user, then
/// sent back as-is to `POST /index`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ParsedDocument {
    pub filename: String,
    pub employee_name: String,
    pub organization_name: String,
    pub affected_organization_name: String,
    pub incident_severity: String,
    pub address: String,
    pub incident_description: String,
}

impl ParsedDocument {
    /// Wire names of the editable fields, in display order.
    pub const FIELDS: [&'static str; 7] = [
        "filename",
        "employeeName",
        "organizationName",
        "affectedOrganizationName",
        "incidentSeverity",
        "address",
        "incidentDescription",
    ];

    /// `(wire name, value)` pairs in display order.
    pub fn fields(&self) -> [(&'static str, &str); 7] {
        [
            ("filename", self.filename.as_str()),
            ("employeeName", self.employee_name.as_str()),
            ("organizationName", self.organization_name.as_str()),
            ("affectedOrganizationName", self.affected_organization_name.as_str()),
            ("incidentSeverity", self.incident_severity.as_str()),
            ("address", self.address.as_str()),
            ("incidentDescription", self.incident_description.as_str()),
        ]
    }

    /// Overwrite one field by its wire name.
    pub fn set_field(&mut self, name: &str, value: impl Into<String>) -> Result<(), FieldError> {
        let slot = match name {
            "filename" => &mut self.filename,
            "employeeName" => &mut self.employee_name,
            "organizationName" => &mut self.organization_name,
            "affectedOrganizationName" => &mut self.affected_organization_name,
            "incidentSeverity" => &mut self.incident_severity,
            "address" => &mut self.address,
            "incidentDescription" => &mut self.incident_description,
            _ => return Err(FieldError::Unknown(name.to_string())),
        };
        *slot = value.into();
        Ok(())
    }

    /// Apply an edit written as `field=value`. The value may contain `=`.
    pub fn apply_edit(&mut self, edit: &str) -> Result<(), FieldError> {
        let (name, value) = edit
            .split_once('=')
            .ok_or_else(|| FieldError::Malformed(edit.to_string()))?;
        self.set_field(name.trim(), value)
    }
}

/// Geo point of an incident address.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub lat: f64,
    pub lon: f64,
}

/// An indexed incident as returned by the search endpoints.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Incident {
    pub id: String,
    pub filename: String,
    pub employee_name: String,
    pub organization_name: String,
    pub affected_organization_name: String,
    pub incident_severity: String,
    pub location: Option<Location>,
    pub incident_description_sr: String,
    pub incident_description_en: String,
}

/// One search result: the incident plus per-field `<em>` snippets.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchHit {
    pub index: Incident,
    #[serde(default)]
    pub highlights: HashMap<String, Vec<String>>,
}

/// Structured search filters for `GET /search`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SearchFilters {
    pub employee_name: String,
    pub incident_severity: String,
    pub organization_name: String,
    pub affected_organization_name: String,
    pub incident_description: String,
    pub address: String,
    pub distance: String,
    pub knn: bool,
}

impl SearchFilters {
    /// Query parameters to send. Empty strings and an unset `knn` are left out.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let text = [
            ("employeeName", &self.employee_name),
            ("incidentSeverity", &self.incident_severity),
            ("organizationName", &self.organization_name),
            ("affectedOrganizationName", &self.affected_organization_name),
            ("incidentDescription", &self.incident_description),
            ("address", &self.address),
            ("distance", &self.distance),
        ];

        let mut pairs: Vec<(&'static str, String)> = text
            .into_iter()
            .filter(|(_, value)| !value.is_empty())
            .map(|(name, value)| (name, value.clone()))
            .collect();
        if self.knn {
            pairs.push(("knn", "true".to_string()));
        }
        pairs
    }

    /// True when no filter would be sent.
    pub fn is_empty(&self) -> bool {
        self.query_pairs().is_empty()
    }
}
