//! One-shot catalog loading.

use std::path::PathBuf;
use std::sync::Arc;

use serde_json::Value;
use shopfront_catalog::catalog::Product;
use shopfront_catalog::session::BrowseSession;
use tracing::{debug, info};

use crate::{FetchClient, HttpTransport, LoadError, Transport};

/// Default catalog API.
pub const DEFAULT_BASE_URL: &str = "http://localhost:5000";

/// Page size requested from the API. The server pages by default, so the
/// loader asks for everything in one page.
pub const DEFAULT_LIMIT: usize = 1000;

/// Where the catalog comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogSource {
    /// `GET {base_url}/products?page=1&limit={limit}`.
    Http { base_url: String, limit: usize },
    /// A local file holding the same JSON payload.
    File(PathBuf),
}

impl CatalogSource {
    /// Short description for logs and messages.
    pub fn describe(&self) -> String {
        match self {
            CatalogSource::Http { base_url, .. } => base_url.clone(),
            CatalogSource::File(path) => path.display().to_string(),
        }
    }
}

/// Loads the full catalog in a single call.
#[derive(Clone)]
pub struct CatalogLoader {
    source: CatalogSource,
    transport: Arc<dyn Transport>,
}

impl CatalogLoader {
    /// Load from the catalog API at `base_url`.
    pub fn http(base_url: impl Into<String>) -> Self {
        Self::new(CatalogSource::Http {
            base_url: base_url.into(),
            limit: DEFAULT_LIMIT,
        })
    }

    /// Load from a local JSON file.
    pub fn file(path: impl Into<PathBuf>) -> Self {
        Self::new(CatalogSource::File(path.into()))
    }

    /// Load from `source` using the default HTTP transport.
    pub fn new(source: CatalogSource) -> Self {
        Self {
            source,
            transport: Arc::new(HttpTransport::new()),
        }
    }

    /// Override the requested page size (HTTP sources only).
    pub fn with_limit(mut self, new_limit: usize) -> Self {
        if let CatalogSource::Http { limit, .. } = &mut self.source {
            *limit = new_limit;
        }
        self
    }

    /// Use a custom transport for HTTP sources.
    pub fn with_transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.transport = transport;
        self
    }

    pub fn source(&self) -> &CatalogSource {
        &self.source
    }

    /// Fetch and parse the catalog.
    pub async fn load(&self) -> Result<Vec<Product>, LoadError> {
        let products = match &self.source {
            CatalogSource::Http { base_url, limit } => self.fetch(base_url, *limit).await?,
            CatalogSource::File(path) => {
                let body = tokio::fs::read(path).await.map_err(|e| LoadError::Io {
                    path: path.display().to_string(),
                    message: e.to_string(),
                })?;
                parse_catalog(&body)?
            }
        };

        info!(
            source = %self.source.describe(),
            products = products.len(),
            "catalog fetched"
        );
        Ok(products)
    }

    async fn fetch(&self, base_url: &str, limit: usize) -> Result<Vec<Product>, LoadError> {
        let client = FetchClient::with_transport(Arc::clone(&self.transport))
            .with_base_url(base_url)
            .with_default_header("Accept", "application/json");

        let request = client.get("/products").query("page", 1).query("limit", limit);
        debug!(url = %request.url(), "requesting catalog");

        let response = client.send(&request).await?.error_for_status()?;
        parse_catalog(response.bytes())
    }

    /// Run a load against a session: mark it loading, then apply the result.
    pub async fn load_into(&self, session: &mut BrowseSession) {
        session.begin_load();
        let result = self.load().await;
        session.finish_load(result);
    }
}

impl std::fmt::Debug for CatalogLoader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CatalogLoader")
            .field("source", &self.source)
            .finish_non_exhaustive()
    }
}

/// Parse a catalog payload of the form `{ "products": [ ... ] }`.
pub fn parse_catalog(body: &[u8]) -> Result<Vec<Product>, LoadError> {
    let mut payload: Value = serde_json::from_slice(body)?;
    let products = payload
        .get_mut("products")
        .map(Value::take)
        .filter(Value::is_array)
        .ok_or(LoadError::InvalidShape)?;

    Ok(serde_json::from_value(products)?)
}
