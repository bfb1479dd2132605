// src/extract.rs
//
// The generative-language API has shipped several response shapes across
// endpoint versions and does not guarantee a fixed schema. Rather than pin a
// typed response struct to one shape, we traverse the decoded
// `serde_json::Value` tree and try the known shapes in priority order,
// falling back to stringifying whatever we got so no data is ever dropped.

use serde_json::Value;

/// Pull the human-readable text out of a variably-shaped response body.
///
/// Returns `None` only when the body itself is JSON null; for any other
/// input the worst case is the whole body rendered as compact JSON.
pub fn extract_text(body: &Value) -> Option<String> {
    if body.is_null() {
        return None;
    }

    // 1) candidates -> [{ content: { parts: [{ text }] } }], or the first
    //    candidate carrying "text"/"message" directly
    if let Some(candidates) = field(body, "candidates").and_then(Value::as_array) {
        if let Some(first) = candidates.first() {
            if first.is_object() {
                if let Some(text) = field(first, "content")
                    .filter(|c| c.is_object())
                    .and_then(|c| first_part_text(c))
                {
                    return Some(text);
                }
                if let Some(text) = field(first, "text") {
                    return Some(stringify(text));
                }
                if let Some(msg) = field(first, "message") {
                    return Some(stringify(msg));
                }
            }
            // fallback: the first candidate whole
            return Some(stringify(first));
        }
    }

    // 2) outputs -> [{ content: [{ parts: [{ text }] }] }]
    if let Some(outputs) = field(body, "outputs").and_then(Value::as_array) {
        if let Some(first) = outputs.first() {
            if first.is_object() {
                if let Some(content) = field(first, "content").and_then(Value::as_array) {
                    if let Some(c0) = content.first().filter(|c| c.is_object()) {
                        if let Some(text) = first_part_text(c0) {
                            return Some(text);
                        }
                        if let Some(text) = field(c0, "text") {
                            return Some(stringify(text));
                        }
                    }
                }
                if let Some(text) = field(first, "text") {
                    return Some(stringify(text));
                }
                if let Some(msg) = field(first, "message") {
                    return Some(stringify(msg));
                }
            }
            return Some(stringify(first));
        }
    }

    // 3) top-level "content", either an object with parts or a list of them
    if let Some(content) = field(body, "content") {
        if content.is_object() {
            if let Some(text) = first_part_text(content) {
                return Some(text);
            }
        } else if let Some(items) = content.as_array() {
            if let Some(first) = items.first() {
                if first.is_object() && field(first, "parts").is_some_and(Value::is_array) {
                    if let Some(text) = first_part_text(first) {
                        return Some(text);
                    }
                } else {
                    return Some(stringify(first));
                }
            }
        }
    }

    // 4) common simple keys
    if let Some(text) = field(body, "text") {
        return Some(stringify(text));
    }
    if let Some(msg) = field(body, "message") {
        return Some(stringify(msg));
    }

    // final fallback
    Some(stringify(body))
}

/// Field lookup that treats JSON null the same as a missing key.
fn field<'a>(value: &'a Value, key: &str) -> Option<&'a Value> {
    value.get(key).filter(|v| !v.is_null())
}

/// `container.parts[0].text`, if that whole chain is present.
fn first_part_text(container: &Value) -> Option<String> {
    field(container, "parts")
        .and_then(Value::as_array)
        .and_then(|parts| parts.first())
        .filter(|p| p.is_object())
        .and_then(|p| field(p, "text"))
        .map(stringify)
}

/// JSON strings render as their contents; everything else as compact JSON.
fn stringify(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
