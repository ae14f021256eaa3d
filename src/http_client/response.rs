use bytes::Bytes;
use serde_json::Value;

use crate::http_client::request::RequestHeaders;

#[derive(Debug, Clone, PartialEq)]
pub struct Response {
    pub status: u16,
    pub status_text: String,
    pub headers: RequestHeaders,
    pub data: Value,
}

/// The remote side of a failed call: it answered, but not with a 2xx.
#[derive(Debug, Clone, PartialEq)]
pub struct ErrorResponse {
    pub status: Option<u16>,
    pub status_text: Option<String>,
    pub data: Value,
}

/// Decodes a body as JSON when it parses, as text otherwise. Empty bodies are `null`.
pub fn decode_payload(body: &Bytes) -> Value {
    if body.is_empty() {
        return Value::Null;
    }

    serde_json::from_slice(body)
        .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(body).into_owned()))
}
