//! Catalog error types.

use thiserror::Error;

/// Errors that can occur when interpreting browse parameters.
///
/// Filtering, sorting and paginating never fail; only parsing user-supplied
/// labels does.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// Unknown sort option label.
    #[error("Unknown sort option: {0}")]
    UnknownSortOption(String),

    /// Unknown price range label.
    #[error("Unknown price range: {0}")]
    UnknownPriceRange(String),

    /// Page number outside of `1..=total_pages`.
    #[error("Page {page} out of range (1..={total_pages})")]
    PageOutOfRange { page: usize, total_pages: usize },

    /// Invalid timestamp in a product record.
    #[error("Invalid timestamp: {0}")]
    InvalidTimestamp(String),
}
