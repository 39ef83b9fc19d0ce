// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! WebAssembly bindings for browser front-ends.
//!
//! Exposes the tokenizer and the highlight renderer to JavaScript:
//!
//! ```js
//! import init, { tokenize, extractEmphasized, buildRenderingPlan } from "udd";
//!
//! const tokens = tokenize('name:Ivan NOT surname:Mrsulja');
//! const terms = extractEmphasized(hit.highlights.incidentDescriptionEn ?? []);
//! const plan = buildRenderingPlan(hit.index.incidentDescriptionEn, terms);
//! // plan: [{ content: "a ", emphasized: false }, { content: "fire", emphasized: true }, ...]
//! ```

use crate::highlight::{build_rendering_plan, extract_emphasized};
use crate::query;
use serde_wasm_bindgen::{from_value, to_value};
use wasm_bindgen::prelude::*;

/// Tokenize a boolean expression into an array of token strings.
#[wasm_bindgen]
pub fn tokenize(input: &str) -> Result<JsValue, JsValue> {
    to_value(&query::tokenize(input)).map_err(|e| e.to_string().into())
}

/// Build the `{"expression": [...]}` body for the boolean search endpoint.
#[wasm_bindgen(js_name = boolQuery)]
pub fn bool_query(input: &str) -> Result<JsValue, JsValue> {
    to_value(&query::BoolQuery::parse(input)).map_err(|e| e.to_string().into())
}

/// Extract emphasized terms from an array of highlight snippets.
#[wasm_bindgen(js_name = extractEmphasized)]
pub fn extract_emphasized_js(snippets: JsValue) -> Result<JsValue, JsValue> {
    let snippets: Vec<String> = from_value(snippets).map_err(|e| e.to_string())?;
    to_value(&extract_emphasized(&snippets)).map_err(|e| e.to_string().into())
}

/// Split text into `{content, emphasized}` segments for the given terms.
#[wasm_bindgen(js_name = buildRenderingPlan)]
pub fn build_rendering_plan_js(text: &str, highlights: JsValue) -> Result<JsValue, JsValue> {
    let highlights: Vec<String> = if highlights.is_undefined() || highlights.is_null() {
        Vec::new()
    } else {
        from_value(highlights).map_err(|e| e.to_string())?
    };
    to_value(&build_rendering_plan(text, &highlights)).map_err(|e| e.to_string().into())
}
