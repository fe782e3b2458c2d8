//! WASM bindings for receipt composition
//!
//! This crate provides a JavaScript-friendly API for the layout editor's
//! live preview:
//! - Composing a receipt from a layout registry and a data object
//! - Composing straight from JSON text (editor text areas)
//! - The embedded layout JSON Schema
//!
//! # Example (JavaScript)
//!
//! ```javascript
//! import init, { buildReceipt, buildReceiptJson, layoutSchema } from 'receipt-wasm';
//!
//! await init();
//!
//! const { elements, warnings } = buildReceipt('receipt', layouts, sale);
//!
//! // Or straight from the editor text areas
//! const output = JSON.parse(buildReceiptJson('receipt', layoutsText, saleText));
//! ```

use receipt_template::{ComposeOptions, Receipt};
use serde::Serialize;
use wasm_bindgen::prelude::*;

// Initialize panic hook for better error messages in browser console
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

/// Compose a receipt from JS objects
///
/// @param name - Layout name to compose
/// @param registry - Object mapping layout names to `{ rows: [...] }`
/// @param data - Data object for placeholders and iterators
/// @param options - Optional `{ emptyValuePolicy, maxDepth, detectCycles }`
/// @returns `{ elements, warnings }`
#[wasm_bindgen(js_name = buildReceipt)]
pub fn build_receipt(
    name: &str,
    registry: JsValue,
    data: JsValue,
    options: JsValue,
) -> Result<JsValue, JsValue> {
    let registry: receipt_template::LayoutRegistry = serde_wasm_bindgen::from_value(registry)?;
    let data: serde_json::Value = serde_wasm_bindgen::from_value(data)?;
    let options: ComposeOptions = if options.is_undefined() || options.is_null() {
        ComposeOptions::default()
    } else {
        serde_wasm_bindgen::from_value(options)?
    };

    let receipt = receipt_template::build_receipt_with(name, &registry, &data, options)
        .map_err(|e| JsValue::from_str(&e.to_string()))?;
    report_warnings(&receipt);

    receipt
        .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .map_err(JsValue::from)
}

/// Compose a receipt from JSON text
///
/// @param name - Layout name to compose
/// @param registryJson - Layout registry JSON
/// @param dataJson - Data JSON
/// @returns `{ elements, warnings }` as JSON text
#[wasm_bindgen(js_name = buildReceiptJson)]
pub fn build_receipt_json(
    name: &str,
    registry_json: &str,
    data_json: &str,
) -> Result<String, JsValue> {
    let receipt = compose_from_json(name, registry_json, data_json, None)
        .map_err(|e| JsValue::from_str(&e.to_string()))?;
    report_warnings(&receipt);

    serde_json::to_string(&receipt).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Plain-text preview of a composed receipt
///
/// @param name - Layout name to compose
/// @param registryJson - Layout registry JSON
/// @param dataJson - Data JSON
/// @returns One line per element
#[wasm_bindgen(js_name = previewText)]
pub fn preview_text(name: &str, registry_json: &str, data_json: &str) -> Result<String, JsValue> {
    compose_from_json(name, registry_json, data_json, None)
        .map(|receipt| receipt.to_plain_text())
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Layout JSON Schema for editor validation
#[wasm_bindgen(js_name = layoutSchema)]
pub fn layout_schema() -> String {
    receipt_template::LAYOUT_SCHEMA.to_string()
}

/// Compose a receipt from JSON text without touching JS values
pub fn compose_from_json(
    name: &str,
    registry_json: &str,
    data_json: &str,
    options_json: Option<&str>,
) -> receipt_template::Result<Receipt> {
    let registry = receipt_template::parse_registry(registry_json)?;
    let data: serde_json::Value = serde_json::from_str(data_json)?;
    let options = match options_json {
        Some(json) => serde_json::from_str(json)?,
        None => ComposeOptions::default(),
    };

    receipt_template::build_receipt_with(name, &registry, &data, options)
}

/// Messages for the warnings worth showing in the browser console
pub fn console_messages(receipt: &Receipt) -> Vec<String> {
    receipt
        .warnings
        .iter()
        .filter(|w| w.is_reportable())
        .map(ToString::to_string)
        .collect()
}

/// Forward reportable warnings to the browser console
fn report_warnings(receipt: &Receipt) {
    if !cfg!(target_arch = "wasm32") {
        return;
    }
    for message in console_messages(receipt) {
        web_sys::console::warn_1(&JsValue::from_str(&message));
    }
}
