use async_trait::async_trait;
use bytes::Bytes;
use http::{HeaderMap, HeaderName, HeaderValue, header};
use tracing::{debug, warn};

use crate::http_client::{
    error::{Error, HttpClientErrorChecker},
    http_client::HttpClient,
    request::{APPLICATION_JSON, FORM_URLENCODED, Request, RequestBody, RequestHeaders, RequestMethod},
    response::{ErrorResponse, Response, decode_payload},
};

#[derive(Clone)]
pub struct ReqwestHttpClient {
    client: reqwest::Client,
}

impl ReqwestHttpClient {
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }
}

impl Default for ReqwestHttpClient {
    fn default() -> Self {
        Self {
            client: reqwest::Client::builder()
                .timeout(std::time::Duration::from_secs(30))
                .build()
                .expect("Failed to build reqwest client"),
        }
    }
}

#[async_trait]
impl HttpClient for ReqwestHttpClient {
    async fn execute(&self, request: Request) -> Result<Response, Error> {
        debug!("Sending {:#?}", request);

        let mut headers: HeaderMap = request.headers.unwrap_or_default().into();

        let mut request_builder = self.client.request(request.method.into(), request.url);

        if let Some(params) = request.params {
            request_builder = request_builder.query(&params);
        }

        match request.body {
            Some(RequestBody::Json(value)) => {
                let body =
                    serde_json::to_vec(&value).map_err(|e| Error::InvalidRequest(e.to_string()))?;
                default_content_type(&mut headers, APPLICATION_JSON);
                request_builder = request_builder.body(body);
            }
            Some(RequestBody::Form(encoded)) => {
                default_content_type(&mut headers, FORM_URLENCODED);
                request_builder = request_builder.body(encoded);
            }
            None => {}
        }

        let reqwest_response = request_builder
            .headers(headers)
            .send()
            .await
            .map_err(Error::from)?;

        let status = reqwest_response.status();
        let status_text = status.canonical_reason().unwrap_or_default().to_string();
        let headers: RequestHeaders = reqwest_response.headers().into();

        // A body cut short still leaves a non-2xx status worth reporting.
        let body = match reqwest_response.bytes().await {
            Ok(body) => body,
            Err(e) if status.is_success() => return Err(Error::Network(e.to_string())),
            Err(e) => {
                warn!("Failed to read {} response body: {e}", status.as_u16());
                Bytes::new()
            }
        };
        let data = decode_payload(&body);

        if !status.is_success() {
            return Err(Error::Response(ErrorResponse {
                status: Some(status.as_u16()),
                status_text: Some(status_text).filter(|s| !s.is_empty()),
                data,
            }));
        }

        Ok(Response {
            status: status.as_u16(),
            status_text,
            headers,
            data,
        })
    }
}

fn default_content_type(headers: &mut HeaderMap, value: &'static str) {
    if !headers.contains_key(header::CONTENT_TYPE) {
        headers.insert(header::CONTENT_TYPE, HeaderValue::from_static(value));
    }
}

impl HttpClientErrorChecker for reqwest::Error {
    fn is_timeout(&self) -> bool {
        self.is_timeout()
    }

    fn is_connect(&self) -> bool {
        self.is_connect()
    }

    fn is_request(&self) -> bool {
        self.is_request()
    }

    fn error_string(&self) -> String {
        self.to_string()
    }
}

impl<T: HttpClientErrorChecker> From<T> for Error {
    fn from(err: T) -> Self {
        if err.is_timeout() {
            Error::Timeout
        } else if err.is_connect() || err.is_request() {
            Error::Network(err.error_string())
        } else {
            Error::InvalidRequest(err.error_string())
        }
    }
}

impl From<&HeaderMap> for RequestHeaders {
    fn from(headers: &HeaderMap) -> Self {
        headers
            .iter()
            .filter_map(|(k, v)| v.to_str().ok().map(|val| (k.to_string(), val.to_string())))
            .collect()
    }
}

impl From<RequestHeaders> for HeaderMap {
    fn from(h: RequestHeaders) -> Self {
        let mut header_map = HeaderMap::new();
        for (k, v) in h.iter() {
            if let (Ok(name), Ok(value)) = (
                HeaderName::from_bytes(k.as_bytes()),
                HeaderValue::from_str(v),
            ) {
                header_map.insert(name, value);
            }
        }
        header_map
    }
}

impl From<RequestMethod> for reqwest::Method {
    fn from(value: RequestMethod) -> Self {
        match value {
            RequestMethod::Get => reqwest::Method::GET,
            RequestMethod::Post => reqwest::Method::POST,
            RequestMethod::Put => reqwest::Method::PUT,
            RequestMethod::Delete => reqwest::Method::DELETE,
            RequestMethod::Patch => reqwest::Method::PATCH,
            RequestMethod::Head => reqwest::Method::HEAD,
            RequestMethod::Options => reqwest::Method::OPTIONS,
            RequestMethod::Other(method) => method,
        }
    }
}
