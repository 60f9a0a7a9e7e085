//! HTTP response handling.

use std::collections::HashMap;

use crate::LoadError;

/// An HTTP response.
#[derive(Debug, Clone)]
pub struct Response {
    /// The HTTP status code.
    pub status: u16,
    /// The response headers.
    pub headers: HashMap<String, String>,
    /// The response body.
    pub body: Vec<u8>,
}

impl Response {
    /// Create a new response.
    pub fn new(status: u16, headers: HashMap<String, String>, body: Vec<u8>) -> Self {
        Self {
            status,
            headers,
            body,
        }
    }

    /// Check if the response was successful (2xx status).
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Get the raw response body.
    pub fn bytes(&self) -> &[u8] {
        &self.body
    }

    /// Turn a non-2xx status into an error.
    pub fn error_for_status(self) -> Result<Self, LoadError> {
        if self.is_success() {
            Ok(self)
        } else {
            Err(LoadError::HttpError {
                status: self.status,
            })
        }
    }
}
