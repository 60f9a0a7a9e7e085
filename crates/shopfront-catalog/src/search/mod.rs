//! Search module.
//!
//! Contains the query parameters, filter predicates, price buckets, the
//! filter/sort/paginate pipeline and pagination.

mod filter;
mod pipeline;
mod price;
mod query;
mod results;

pub use filter::Filter;
pub use pipeline::{filter_indices, recompute, search, sort_indices, Recomputed};
pub use price::{price_buckets, PriceBucket, PriceRange};
pub use query::{SearchQuery, SortOption};
pub use results::{total_pages, Pagination, SearchResults, PAGE_SIZE};
