use serde_json::{Map, Value};

use crate::config::ErrorCatalog;
use crate::request_executor::normalized_error::NormalizedError;

/// Spellings of the convention's failure flag, checked in this order.
const ERROR_FLAGS: [&str; 2] = ["hasError", "HasError"];
const ERROR_CODE_FIELDS: [&str; 2] = ["errorCode", "ErrorCode"];
const MESSAGE_FIELDS: [&str; 2] = ["message", "Message"];

/// The response shapes the executor knows how to interpret.
#[derive(Debug, PartialEq)]
pub enum ResponseShape<'a> {
    /// A pod service reply: an object carrying a failure flag.
    Convention {
        failed: bool,
        fields: &'a Map<String, Value>,
    },
    /// Anything else; handed back untouched.
    Opaque,
}

impl<'a> ResponseShape<'a> {
    pub fn classify(payload: &'a Value) -> Self {
        let Some(fields) = payload.as_object() else {
            return ResponseShape::Opaque;
        };

        ERROR_FLAGS
            .iter()
            .find_map(|flag| fields.get(*flag))
            .map(|flag| ResponseShape::Convention {
                failed: is_truthy(flag),
                fields,
            })
            .unwrap_or(ResponseShape::Opaque)
    }
}

/// Builds the error a failed convention response reports. Lowercase fields win over
/// capitalized ones; missing or unusable fields fall back to the unexpected error.
pub fn convention_error(
    fields: &Map<String, Value>,
    raw: Value,
    catalog: &ErrorCatalog,
) -> NormalizedError {
    let code = first_present(fields, &ERROR_CODE_FIELDS)
        .and_then(as_code)
        .unwrap_or(catalog.unexpected.code);

    let message = first_present(fields, &MESSAGE_FIELDS)
        .map(|value| match value {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        })
        .unwrap_or_else(|| catalog.unexpected.message.to_string());

    NormalizedError::new(code, message, Some(raw))
}

fn first_present<'a>(fields: &'a Map<String, Value>, names: &[&str]) -> Option<&'a Value> {
    names
        .iter()
        .filter_map(|name| fields.get(*name))
        .find(|value| !value.is_null())
}

fn as_code(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().filter(|f| f.fract() == 0.0).map(|f| f as i64)),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
