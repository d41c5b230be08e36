//! Error types for JSON:API decoding.

use thiserror::Error;

/// Errors that can occur when decoding or inspecting a document.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum JsonApiError {
    /// The response body was empty.
    #[error("empty response body")]
    EmptyBody,

    /// The body is not a valid JSON:API document.
    #[error("invalid JSON:API document: {0}")]
    Decode(String),

    /// A single resource was expected but `data` was an array or null.
    #[error("expected a single resource in document data")]
    ExpectedSingle,
}

impl From<serde_json::Error> for JsonApiError {
    fn from(err: serde_json::Error) -> Self {
        JsonApiError::Decode(err.to_string())
    }
}
