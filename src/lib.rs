// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Incident document search toolkit.
//!
//! The text-processing core behind the incident search front-end, plus a
//! client for the search backend.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐                          ┌──────────────┐
//! │  query      │  "name:Ivan NOT x:y" ──▶ │  client      │──▶ POST /search/bool
//! │ (tokenize)  │  ["name:Ivan","NOT",..]  │ (reqwest)    │◀── [SearchHit]
//! └─────────────┘                          └──────────────┘
//!                                                 │ highlights: {field: ["<em>..</em>"]}
//!                                                 ▼
//! ┌────────────────────────────────────────────────────────┐
//! │  highlight                                             │
//! │  extract_emphasized ──▶ HighlightSet ──▶               │
//! │  build_rendering_plan(text, terms) ──▶ [Segment]       │
//! └────────────────────────────────────────────────────────┘
//! ```
//!
//! The core (`query`, `highlight`) is pure and infallible: malformed
//! expressions and missing highlight data degrade to pass-through output.
//!
//! # Features
//!
//! | Feature  | Default | Adds                                             |
//! |----------|---------|--------------------------------------------------|
//! | `client` | yes     | backend client, session store, `udd` binary      |
//! | `regex`  | yes     | regex-backed matching (scan matcher otherwise)   |
//! | `wasm`   | no      | `wasm-bindgen` exports for browser front-ends    |
//!
//! # Usage
//!
//! ```
//! use udd::{build_rendering_plan, extract_emphasized, tokenize, Segment};
//!
//! let tokens = tokenize("name:Ivan and severity:high");
//! assert_eq!(tokens, vec!["name:Ivan", "AND", "severity:high"]);
//!
//! let terms = extract_emphasized(["a <em>fire</em> started"]);
//! let plan = build_rendering_plan("a fire broke out", terms.as_slice());
//! assert_eq!(plan[1], Segment::emphasized("fire"));
//! ```

pub mod highlight;
pub mod query;
pub mod testing;
pub mod types;

#[cfg(feature = "client")]
pub mod client;

#[cfg(feature = "wasm")]
mod wasm;

// Re-exports for public API
pub use highlight::{
    build_rendering_plan, emphasized_count, extract_emphasized, highlight_field, highlights_for,
    plan_text, HighlightSet,
};
pub use query::{lex, tokenize, BoolQuery, Operator, Token};
pub use types::{
    Credentials, FieldError, Incident, Location, ParsedDocument, SearchFilters, SearchHit,
    Segment,
};

#[cfg(feature = "client")]
pub use client::{Client, ClientError, Config, Session, SessionError, SessionStore};
