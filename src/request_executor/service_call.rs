use serde_json::Value;

use crate::http_client::request::{RequestHeaders, RequestMethod};

/// Everything a caller supplies for one call to a pod service.
#[derive(Debug, Clone, PartialEq)]
pub struct ServiceCall {
    pub base_url: String,
    pub api_path: String,
    pub method: RequestMethod,
    pub headers: Option<RequestHeaders>,
    pub data: Option<Value>,
    /// Form-encode the body even without a form `Content-Type` header.
    pub use_url_encoded_body: bool,
    pub url_trailing_segment: Option<String>,
}

impl ServiceCall {
    pub fn new(
        base_url: impl Into<String>,
        api_path: impl Into<String>,
        method: RequestMethod,
    ) -> Self {
        Self {
            base_url: base_url.into(),
            api_path: api_path.into(),
            method,
            headers: None,
            data: None,
            use_url_encoded_body: false,
            url_trailing_segment: None,
        }
    }

    pub fn headers(mut self, headers: RequestHeaders) -> Self {
        self.headers = Some(headers);
        self
    }

    pub fn data(mut self, data: Value) -> Self {
        self.data = Some(data);
        self
    }

    pub fn url_encoded(mut self, use_url_encoded_body: bool) -> Self {
        self.use_url_encoded_body = use_url_encoded_body;
        self
    }

    pub fn url_trailing_segment(mut self, segment: impl Into<String>) -> Self {
        self.url_trailing_segment = Some(segment.into());
        self
    }
}
