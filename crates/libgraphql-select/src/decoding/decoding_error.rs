use std::error::Error;
use std::sync::Arc;

/// Failure to reconstruct a typed value out of a response.
///
/// Raised for malformed payloads, missing or mistyped fields, and failures
/// returned by caller-supplied mapping functions.
#[derive(Clone, Debug, thiserror::Error)]
#[error("Cannot decode response: {message}")]
pub struct DecodingError {
    message: String,
    #[source]
    source: Option<Arc<dyn Error + Send + Sync>>,
}
impl DecodingError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            source: None,
        }
    }

    /// Wrap an underlying error as the cause of this `DecodingError`.
    pub fn with_source(
        message: impl Into<String>,
        source: impl Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            message: message.into(),
            source: Some(Arc::new(source)),
        }
    }

    pub fn message(&self) -> &str {
        self.message.as_str()
    }
}
impl std::cmp::PartialEq for DecodingError {
    fn eq(&self, other: &Self) -> bool {
        self.message == other.message
    }
}
impl std::convert::From<serde_json::Error> for DecodingError {
    fn from(value: serde_json::Error) -> Self {
        Self::with_source(format!("Invalid JSON: {value}"), value)
    }
}
