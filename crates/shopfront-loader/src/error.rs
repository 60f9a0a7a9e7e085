//! Catalog load error types.

use thiserror::Error;

/// Errors that can occur while loading the catalog.
///
/// A load is never retried; the message is shown to the user until the next
/// load starts.
#[derive(Error, Debug)]
pub enum LoadError {
    /// Failed to send the request.
    #[error("Request failed: {0}")]
    RequestError(String),

    /// Invalid URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Non-success HTTP status.
    #[error("Network response was not ok (HTTP {status})")]
    HttpError { status: u16 },

    /// Failed to parse response body.
    #[error("Failed to parse response: {0}")]
    ParseError(String),

    /// Body parsed but has no `products` array.
    #[error("Invalid data structure")]
    InvalidShape,

    /// Failed to read a local catalog file.
    #[error("Failed to read {path}: {message}")]
    Io { path: String, message: String },
}

impl From<serde_json::Error> for LoadError {
    fn from(e: serde_json::Error) -> Self {
        LoadError::ParseError(e.to_string())
    }
}

impl From<reqwest::Error> for LoadError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_builder() {
            LoadError::InvalidUrl(e.to_string())
        } else {
            LoadError::RequestError(e.to_string())
        }
    }
}
