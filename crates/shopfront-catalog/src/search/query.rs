//! Search query parameters.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::catalog::Product;
use crate::error::CatalogError;
use crate::search::{Filter, PriceRange};

/// Sort options for search results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum SortOption {
    /// Sort by price, low to high.
    #[default]
    #[serde(rename = "PriceLowToHigh")]
    PriceAsc,
    /// Sort by price, high to low.
    #[serde(rename = "PriceHighToLow")]
    PriceDesc,
    /// Sort by creation time, newest first.
    #[serde(rename = "DateNewest")]
    Newest,
}

impl SortOption {
    /// Every option, in display order.
    pub const ALL: [SortOption; 3] = [SortOption::PriceAsc, SortOption::PriceDesc, SortOption::Newest];

    pub fn display_name(&self) -> &'static str {
        match self {
            SortOption::PriceAsc => "Price: Low to High",
            SortOption::PriceDesc => "Price: High to Low",
            SortOption::Newest => "Date Added: Newest First",
        }
    }

    /// Short form used on the command line.
    pub fn slug(&self) -> &'static str {
        match self {
            SortOption::PriceAsc => "price-asc",
            SortOption::PriceDesc => "price-desc",
            SortOption::Newest => "newest",
        }
    }

    /// Value used by the catalog UI for this option.
    pub fn key(&self) -> &'static str {
        match self {
            SortOption::PriceAsc => "PriceLowToHigh",
            SortOption::PriceDesc => "PriceHighToLow",
            SortOption::Newest => "DateNewest",
        }
    }

    /// Compare two products under this ordering.
    pub fn compare(&self, a: &Product, b: &Product) -> Ordering {
        match self {
            SortOption::PriceAsc => a.price.total_cmp(&b.price),
            SortOption::PriceDesc => b.price.total_cmp(&a.price),
            SortOption::Newest => b.created_at.cmp(&a.created_at),
        }
    }
}

impl fmt::Display for SortOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for SortOption {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        SortOption::ALL
            .into_iter()
            .find(|o| o.key() == s || o.slug().eq_ignore_ascii_case(s))
            .ok_or_else(|| CatalogError::UnknownSortOption(s.to_string()))
    }
}

/// The combined search, filter, sort and page selections.
///
/// Empty search text, brand or category means "no filter".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchQuery {
    /// Substring searched in product names.
    pub search: String,
    /// Selected brand.
    pub brand: Option<String>,
    /// Selected category.
    pub category: Option<String>,
    /// Selected price range.
    pub price_range: PriceRange,
    /// Sort option.
    pub sort: SortOption,
    /// Current page (1-indexed).
    pub page: usize,
}

impl Default for SearchQuery {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchQuery {
    /// Create a new search query with no filters.
    pub fn new() -> Self {
        Self {
            search: String::new(),
            brand: None,
            category: None,
            price_range: PriceRange::All,
            sort: SortOption::default(),
            page: 1,
        }
    }

    /// Set the search text.
    pub fn with_search(mut self, q: impl Into<String>) -> Self {
        self.search = q.into();
        self
    }

    /// Select a brand.
    pub fn with_brand(mut self, brand: impl Into<String>) -> Self {
        self.brand = Some(brand.into());
        self
    }

    /// Select a category.
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Select a price range.
    pub fn with_price_range(mut self, range: PriceRange) -> Self {
        self.price_range = range;
        self
    }

    /// Set sort option.
    pub fn with_sort(mut self, sort: SortOption) -> Self {
        self.sort = sort;
        self
    }

    /// Set the requested page.
    pub fn with_page(mut self, page: usize) -> Self {
        self.page = page.max(1);
        self
    }

    /// The active predicates of this query.
    pub fn filters(&self) -> Vec<Filter> {
        [
            Filter::text(&self.search),
            self.brand.as_deref().and_then(Filter::brand),
            self.category.as_deref().and_then(Filter::category),
            Filter::price_range(self.price_range),
        ]
        .into_iter()
        .flatten()
        .collect()
    }

    /// Check whether two queries select the same records in the same order,
    /// ignoring the page.
    pub fn same_selection(&self, other: &SearchQuery) -> bool {
        self.search == other.search
            && self.brand == other.brand
            && self.category == other.category
            && self.price_range == other.price_range
            && self.sort == other.sort
    }
}
