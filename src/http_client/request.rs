use std::{
    collections::HashMap,
    fmt::{self, Display},
    ops::{Deref, DerefMut},
    str::FromStr,
};

use serde_json::Value;

pub const CONTENT_TYPE: &str = "Content-Type";
pub const FORM_URLENCODED: &str = "application/x-www-form-urlencoded";
pub const APPLICATION_JSON: &str = "application/json";

/// A fully assembled outbound request, handed to an [`HttpClient`].
///
/// [`HttpClient`]: crate::http_client::http_client::HttpClient
#[derive(Debug, Clone, PartialEq)]
pub struct Request {
    pub method: RequestMethod,
    pub url: String,
    pub headers: Option<RequestHeaders>,
    pub params: Option<Vec<(String, String)>>,
    pub body: Option<RequestBody>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum RequestBody {
    Json(Value),
    Form(String),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RequestHeaders(pub HashMap<String, String>);

impl RequestHeaders {
    /// Looks a header up ignoring the case of its name.
    pub fn get_ignore_case(&self, name: &str) -> Option<&String> {
        self.0
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v)
    }

    pub fn content_type(&self) -> Option<&String> {
        self.get_ignore_case(CONTENT_TYPE)
    }

    pub fn is_form_urlencoded(&self) -> bool {
        self.content_type()
            .is_some_and(|v| v.eq_ignore_ascii_case(FORM_URLENCODED))
    }
}

impl Deref for RequestHeaders {
    type Target = HashMap<String, String>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for RequestHeaders {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl<const N: usize> From<[(String, String); N]> for RequestHeaders {
    fn from(arr: [(String, String); N]) -> Self {
        let map = arr.into_iter().collect();
        RequestHeaders(map)
    }
}

impl FromIterator<(String, String)> for RequestHeaders {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        RequestHeaders(iter.into_iter().collect())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestMethod {
    Get,
    Post,
    Put,
    Delete,
    Patch,
    Head,
    Options,
    /// Any other valid method token, e.g. `PURGE` or `PROPFIND`.
    Other(http::Method),
}

impl Display for RequestMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            RequestMethod::Get => "GET",
            RequestMethod::Post => "POST",
            RequestMethod::Put => "PUT",
            RequestMethod::Delete => "DELETE",
            RequestMethod::Patch => "PATCH",
            RequestMethod::Head => "HEAD",
            RequestMethod::Options => "OPTIONS",
            RequestMethod::Other(method) => method.as_str(),
        };
        write!(f, "{}", s)
    }
}

impl FromStr for RequestMethod {
    type Err = RequestError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.to_ascii_uppercase();
        match upper.as_str() {
            "GET" => Ok(RequestMethod::Get),
            "POST" => Ok(RequestMethod::Post),
            "PUT" => Ok(RequestMethod::Put),
            "DELETE" => Ok(RequestMethod::Delete),
            "PATCH" => Ok(RequestMethod::Patch),
            "HEAD" => Ok(RequestMethod::Head),
            "OPTIONS" => Ok(RequestMethod::Options),
            _ => http::Method::from_bytes(upper.as_bytes())
                .map(RequestMethod::Other)
                .map_err(|_| RequestError::UnsupportedMethod(s.to_string())),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum RequestError {
    #[error("HTTP method {0} is not supported")]
    UnsupportedMethod(String),
}
