//! Catalog loader for Shopfront.
//!
//! Fetches the whole product collection in one request and hands it to the
//! query engine. Failures are reported, never retried.
//!
//! # Example
//!
//! ```rust,ignore
//! use shopfront_loader::CatalogLoader;
//! use shopfront_catalog::session::BrowseSession;
//!
//! let loader = CatalogLoader::http("http://localhost:5000");
//! let mut session = BrowseSession::new();
//! loader.load_into(&mut session).await;
//!
//! if let Some(message) = session.error() {
//!     eprintln!("Error: {}", message);
//! }
//! ```

mod error;
mod loader;
mod request;
mod response;
mod transport;

use std::collections::HashMap;
use std::sync::Arc;

pub use error::LoadError;
pub use loader::{parse_catalog, CatalogLoader, CatalogSource, DEFAULT_BASE_URL, DEFAULT_LIMIT};
pub use request::Request;
pub use response::Response;
pub use transport::{HttpTransport, Transport};

/// HTTP client for making outbound requests.
///
/// A thin wrapper that prefixes a base URL, adds default headers and
/// delegates to a [`Transport`].
#[derive(Clone)]
pub struct FetchClient {
    base_url: Option<String>,
    default_headers: HashMap<String, String>,
    transport: Arc<dyn Transport>,
}

impl FetchClient {
    /// Create a client on top of a custom transport.
    pub fn with_transport(transport: Arc<dyn Transport>) -> Self {
        Self {
            base_url: None,
            default_headers: HashMap::new(),
            transport,
        }
    }

    /// Create a client with a base URL that will be prepended to all requests.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Add a default header that will be included in all requests.
    pub fn with_default_header(
        mut self,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        self.default_headers.insert(key.into(), value.into());
        self
    }

    /// Create a GET request.
    pub fn get(&self, url: impl Into<String>) -> Request {
        let url = url.into();
        let full_url = match &self.base_url {
            Some(base) => {
                if url.starts_with("http://") || url.starts_with("https://") {
                    url
                } else {
                    format!("{}{}", base.trim_end_matches('/'), url)
                }
            }
            None => url,
        };

        let mut request = Request::get(full_url);
        for (key, value) in &self.default_headers {
            request = request.header(key.clone(), value.clone());
        }
        request
    }

    /// Send the request and return the response.
    pub async fn send(&self, request: &Request) -> Result<Response, LoadError> {
        self.transport.send(request).await
    }
}

impl std::fmt::Debug for FetchClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FetchClient")
            .field("base_url", &self.base_url)
            .field("default_headers", &self.default_headers)
            .finish_non_exhaustive()
    }
}

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{CatalogLoader, CatalogSource, FetchClient, LoadError, Response};
}
