use serde::Serialize;
use serde_json::Value;

use crate::config::ErrorDescriptor;

/// The one shape every failed call is reported in.
#[derive(Debug, Clone, PartialEq, Serialize, thiserror::Error)]
#[error("{message} (code {code})")]
pub struct NormalizedError {
    code: i64,
    message: String,
    raw: Option<Value>,
}

impl NormalizedError {
    pub fn new(code: i64, message: impl Into<String>, raw: Option<Value>) -> Self {
        Self {
            code,
            message: message.into(),
            raw,
        }
    }

    pub fn code(&self) -> i64 {
        self.code
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// The payload a convention response failed with, if that is where the error came from.
    pub fn raw(&self) -> Option<&Value> {
        self.raw.as_ref()
    }
}

impl From<ErrorDescriptor> for NormalizedError {
    fn from(descriptor: ErrorDescriptor) -> Self {
        Self::new(descriptor.code, descriptor.message, None)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::config::CONNECTION_ERROR;
    use crate::request_executor::normalized_error::NormalizedError;

    #[test]
    fn serializes_to_code_message_raw() {
        let error = NormalizedError::new(21, "Token invalid", Some(json!({"hasError": true})));

        assert_eq!(
            serde_json::to_value(&error).unwrap(),
            json!({"code": 21, "message": "Token invalid", "raw": {"hasError": true}})
        );
    }

    #[test]
    fn builds_from_fixed_descriptor() {
        let error = NormalizedError::from(CONNECTION_ERROR);

        assert_eq!(error.code(), 889);
        assert_eq!(error.message(), "Connection Error Occurred.");
        assert_eq!(error.raw(), None);
        assert_eq!(error.to_string(), "Connection Error Occurred. (code 889)");
    }
}
