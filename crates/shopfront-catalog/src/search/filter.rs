//! Search filter predicates.

use serde::{Deserialize, Serialize};

use crate::catalog::Product;
use crate::search::PriceRange;

/// A single active predicate.
///
/// A record passes a query when it matches every filter in it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum Filter {
    /// Case-insensitive substring of the product name. Holds the lower-cased
    /// needle.
    Text(String),
    /// Exact brand match.
    Brand(String),
    /// Exact category match.
    Category(String),
    /// Price bucket, bounds inclusive.
    PriceRange(PriceRange),
}

impl Filter {
    /// Create a text search filter. Returns `None` for empty text.
    pub fn text(query: &str) -> Option<Self> {
        (!query.is_empty()).then(|| Filter::Text(query.to_lowercase()))
    }

    /// Create a brand filter. Returns `None` for an empty brand.
    pub fn brand(brand: &str) -> Option<Self> {
        (!brand.is_empty()).then(|| Filter::Brand(brand.to_string()))
    }

    /// Create a category filter. Returns `None` for an empty category.
    pub fn category(category: &str) -> Option<Self> {
        (!category.is_empty()).then(|| Filter::Category(category.to_string()))
    }

    /// Create a price range filter. Returns `None` for [`PriceRange::All`].
    pub fn price_range(range: PriceRange) -> Option<Self> {
        (!range.is_all()).then_some(Filter::PriceRange(range))
    }

    /// Check whether a product satisfies this predicate.
    pub fn matches(&self, product: &Product) -> bool {
        match self {
            Filter::Text(needle) => product.name.to_lowercase().contains(needle.as_str()),
            Filter::Brand(brand) => product.brand == *brand,
            Filter::Category(category) => product.category == *category,
            Filter::PriceRange(range) => range.contains(product.price),
        }
    }
}
