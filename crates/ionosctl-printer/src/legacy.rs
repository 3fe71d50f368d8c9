//! Compatibility envelope for the `json` output format.
//!
//! Older releases always printed list responses as `{"items": [...]}`. The
//! `json` format keeps that contract; `api-json` prints the payload as is.

use serde_json::{json, Value};

/// Rewrites a payload into the legacy `json` output shape.
///
/// Non-array payloads pass through unchanged. For arrays:
///
/// - if any element is an object with an `items` array, the `items` of all
///   such elements are concatenated (multi-page responses);
/// - otherwise every element except objects carrying a `properties` key is
///   kept.
///
/// Either way the result is wrapped as `{"items": [...]}`.
pub fn legacy_envelope(raw: Value) -> Value {
    let elements = match raw {
        Value::Array(elements) => elements,
        other => return other,
    };

    let mut paged = false;
    let mut items = Vec::new();
    for element in &elements {
        if let Some(Value::Array(page)) = element.get("items") {
            paged = true;
            items.extend(page.iter().cloned());
        }
    }

    if !paged {
        items = elements
            .into_iter()
            .filter(|e| !matches!(e, Value::Object(map) if map.contains_key("properties")))
            .collect();
    }

    json!({ "items": items })
}
