//! WASM bindings for opening-hours-core.
//!
//! Exposes rendering and grouping as `#[wasm_bindgen]` functions. Rules cross
//! the boundary as a JSON array string in the same shape the `ohfmt` CLI
//! reads; groups come back as a JSON array of rule arrays.
//!
//! ## Build process
//!
//! ```sh
//! cargo build -p opening-hours-wasm --target wasm32-unknown-unknown --release
//! wasm-bindgen --target nodejs --out-dir packages/opening-hours-js/wasm/ \
//!   target/wasm32-unknown-unknown/release/opening_hours_wasm.wasm
//! ```

use opening_hours_core::{get_mergeable_rules, render_rules, rules_from_json, RenderMode};
use wasm_bindgen::prelude::*;

fn to_js_error(e: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&e.to_string())
}

fn render_json(rules_json: &str, mode: RenderMode) -> Result<String, JsValue> {
    let rules = rules_from_json(rules_json).map_err(to_js_error)?;
    Ok(render_rules(&rules, mode))
}

/// Render a JSON rule list as a canonical opening_hours string.
///
/// Throws a JS error if the input is not a valid rule list.
#[wasm_bindgen(js_name = rulesToOpeningHoursString)]
pub fn rules_to_opening_hours_string(rules_json: &str) -> Result<String, JsValue> {
    render_json(rules_json, RenderMode::Canonical)
}

/// Render a JSON rule list in the annotated debug form.
///
/// Throws a JS error if the input is not a valid rule list.
#[wasm_bindgen(js_name = rulesToOpeningHoursDebugString)]
pub fn rules_to_opening_hours_debug_string(rules_json: &str) -> Result<String, JsValue> {
    render_json(rules_json, RenderMode::Debug)
}

/// Group a JSON rule list into mergeable rules.
///
/// Returns a JSON array of rule arrays, or throws a JS error if the input is
/// not a valid rule list.
#[wasm_bindgen(js_name = getMergeableRules)]
pub fn get_mergeable_rules_json(rules_json: &str) -> Result<String, JsValue> {
    let rules = rules_from_json(rules_json).map_err(to_js_error)?;
    let groups = get_mergeable_rules(&rules);
    serde_json::to_string(&groups).map_err(to_js_error)
}
