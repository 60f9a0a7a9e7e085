//! In-memory catalog query engine for Shopfront.
//!
//! This crate turns a loaded product catalog plus the user's selections into
//! the exact page of records to display:
//!
//! - **Catalog**: product records and facet derivation (distinct brands,
//!   categories)
//! - **Search**: filter predicates, price buckets, sorting, pagination
//! - **Session**: the display layer's state, re-running the pipeline on every
//!   parameter change
//!
//! # Example
//!
//! ```rust,ignore
//! use shopfront_catalog::prelude::*;
//!
//! let mut session = BrowseSession::with_catalog(products);
//! session.set_brand(Some("Acme".to_string()));
//! session.set_sort(SortOption::PriceAsc);
//!
//! for product in session.page_items() {
//!     println!("{} ${:.2}", product.name, product.price);
//! }
//! println!("page {} of {}", session.page(), session.total_pages());
//! ```

pub mod catalog;
pub mod error;
pub mod search;
pub mod session;

pub use error::CatalogError;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CatalogError;

    // Catalog
    pub use crate::catalog::{derive_facets, CatalogFacets, Facet, FacetValue, Product};

    // Search
    pub use crate::search::{
        price_buckets, recompute, search, Filter, Pagination, PriceBucket, PriceRange,
        SearchQuery, SearchResults, SortOption, PAGE_SIZE,
    };

    // Session
    pub use crate::session::{BrowseSession, BrowseView};
}
