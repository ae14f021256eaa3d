//! qs-style flattening of structured data into `key=value` pairs.
//!
//! Nested objects become `parent[child]`, arrays become `parent[index]`.
//! `null` encodes as an empty value.
//!
//! Query strings follow different rules, see [`query_params`].

use serde_json::{Map, Value};
use url::form_urlencoded;

/// Encodes `data` as an `&`-joined, percent-encoded `key=value` string.
pub fn encode(data: &Map<String, Value>) -> String {
    let mut serializer = form_urlencoded::Serializer::new(String::new());
    for (key, value) in pairs(data) {
        serializer.append_pair(&key, &value);
    }
    serializer.finish()
}

/// Flattens `data` into unencoded key/value pairs, in the map's iteration order.
pub fn pairs(data: &Map<String, Value>) -> Vec<(String, String)> {
    let mut out = Vec::new();
    for (key, value) in data {
        flatten(key.clone(), value, &mut out);
    }
    out
}

/// Query parameters for a GET call: `null` is dropped, arrays repeat as `key[]`,
/// and nested objects are sent as JSON text.
pub fn query_params(data: &Map<String, Value>) -> Vec<(String, String)> {
    let mut out = Vec::new();
    for (key, value) in data {
        match value {
            Value::Null => {}
            Value::Array(items) => {
                let key = format!("{key}[]");
                out.extend(
                    items
                        .iter()
                        .filter_map(param_value)
                        .map(|item| (key.clone(), item)),
                );
            }
            other => out.extend(param_value(other).map(|item| (key.clone(), item))),
        }
    }
    out
}

fn param_value(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

fn flatten(prefix: String, value: &Value, out: &mut Vec<(String, String)>) {
    match value {
        Value::Object(map) => {
            for (key, nested) in map {
                flatten(format!("{prefix}[{key}]"), nested, out);
            }
        }
        Value::Array(items) => {
            for (index, nested) in items.iter().enumerate() {
                flatten(format!("{prefix}[{index}]"), nested, out);
            }
        }
        Value::Null => out.push((prefix, String::new())),
        Value::String(s) => out.push((prefix, s.clone())),
        Value::Bool(b) => out.push((prefix, b.to_string())),
        Value::Number(n) => out.push((prefix, n.to_string())),
    }
}
