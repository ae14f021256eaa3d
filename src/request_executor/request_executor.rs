use std::sync::Arc;

use serde_json::Value;
use tracing::{info, warn};

use crate::config::ErrorCatalog;
use crate::http_client::{
    error::Error,
    http_client::HttpClient,
    request::{Request, RequestBody, RequestMethod},
    reqwest_http_client::ReqwestHttpClient,
    response::ErrorResponse,
};
use crate::query_string;
use crate::request_executor::{
    normalized_error::NormalizedError,
    response_shape::{ResponseShape, convention_error},
    service_call::ServiceCall,
    url,
};

/// Performs calls to pod services and reports every failure as a [`NormalizedError`].
#[derive(Clone)]
pub struct RequestExecutor {
    client: Arc<dyn HttpClient>,
    errors: ErrorCatalog,
}

impl RequestExecutor {
    pub fn new(client: Arc<dyn HttpClient>) -> Self {
        Self {
            client,
            errors: ErrorCatalog::default(),
        }
    }

    pub fn with_error_catalog(mut self, errors: ErrorCatalog) -> Self {
        self.errors = errors;
        self
    }

    /// Resolves to the response payload, untouched, unless the call failed.
    pub async fn execute(&self, call: ServiceCall) -> Result<Value, NormalizedError> {
        let request = build_request(call);
        info!("Calling {} {}", request.method, request.url);

        match self.client.execute(request).await {
            Ok(response) => self.interpret_payload(response.data),
            Err(error) => {
                let normalized = self.interpret_failure(error);
                warn!("Call failed: {normalized}");
                Err(normalized)
            }
        }
    }

    fn interpret_payload(&self, payload: Value) -> Result<Value, NormalizedError> {
        if let ResponseShape::Convention {
            failed: true,
            fields,
        } = ResponseShape::classify(&payload)
        {
            let error = convention_error(fields, payload.clone(), &self.errors);
            warn!("Service reported an error: {error}");
            return Err(error);
        }

        Ok(payload)
    }

    fn interpret_failure(&self, error: Error) -> NormalizedError {
        match error {
            Error::Response(response) => self.remote_error(response),
            Error::Network(_) | Error::Timeout => self.errors.connection.into(),
            Error::InvalidRequest(_) => self.errors.unexpected.into(),
        }
    }

    fn remote_error(&self, response: ErrorResponse) -> NormalizedError {
        let code = response
            .status
            .filter(|status| *status != 0)
            .map(i64::from)
            .unwrap_or(self.errors.unexpected.code);

        let message = body_message(&response.data)
            .or(response.status_text.filter(|text| !text.is_empty()))
            .unwrap_or_else(|| self.errors.unexpected.message.to_string());

        NormalizedError::new(code, message, None)
    }
}

impl Default for RequestExecutor {
    fn default() -> Self {
        Self::new(Arc::new(ReqwestHttpClient::default()))
    }
}

/// Assembles the outbound request: joined URL, caller headers, and `data` placed as
/// query params (GET), a form body, or a JSON body. Only object `data` is sent.
pub fn build_request(call: ServiceCall) -> Request {
    let url = url::assemble(
        &call.base_url,
        &call.api_path,
        call.url_trailing_segment.as_deref(),
    );

    let mut params = None;
    let mut body = None;

    if let Some(Value::Object(data)) = call.data {
        let form_header = call
            .headers
            .as_ref()
            .is_some_and(|headers| headers.is_form_urlencoded());

        if call.method == RequestMethod::Get {
            params = Some(query_string::query_params(&data));
        } else if form_header || call.use_url_encoded_body {
            body = Some(RequestBody::Form(query_string::encode(&data)));
        } else {
            body = Some(RequestBody::Json(Value::Object(data)));
        }
    }

    Request {
        method: call.method,
        url,
        headers: call.headers,
        params,
        body,
    }
}

/// A non-empty error body as message text. JSON bodies are rendered back to JSON.
fn body_message(data: &Value) -> Option<String> {
    match data {
        Value::Null | Value::Bool(false) => None,
        Value::String(s) if s.is_empty() => None,
        Value::String(s) => Some(s.clone()),
        Value::Number(n) if n.as_f64() == Some(0.0) => None,
        other => Some(other.to_string()),
    }
}
