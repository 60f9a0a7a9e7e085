//! The filter → sort → paginate pipeline.
//!
//! Every function here is stateless. Results refer to catalog records by
//! position, so the catalog itself is never copied or reordered.

use crate::catalog::Product;
use crate::search::{Filter, Pagination, SearchQuery, SearchResults, SortOption};

/// Positions of the records matching every filter, in catalog order.
pub fn filter_indices(catalog: &[Product], filters: &[Filter]) -> Vec<usize> {
    catalog
        .iter()
        .enumerate()
        .filter(|(_, product)| filters.iter().all(|f| f.matches(product)))
        .map(|(idx, _)| idx)
        .collect()
}

/// Order record positions by `sort`.
///
/// The sort is stable: records with equal keys keep their catalog order.
pub fn sort_indices(catalog: &[Product], indices: &mut [usize], sort: SortOption) {
    indices.sort_by(|&a, &b| sort.compare(&catalog[a], &catalog[b]).then(a.cmp(&b)));
}

/// Filtered, sorted positions plus pagination for a query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recomputed {
    /// Matching record positions in display order.
    pub matches: Vec<usize>,
    /// Pagination over `matches`, with the query's page clamped.
    pub pagination: Pagination,
}

impl Recomputed {
    /// Positions on the current page.
    pub fn page_indices(&self) -> &[usize] {
        self.pagination.slice(&self.matches)
    }

    /// Records on the current page.
    pub fn page_items<'a>(&self, catalog: &'a [Product]) -> Vec<&'a Product> {
        self.page_indices().iter().map(|&idx| &catalog[idx]).collect()
    }
}

impl Default for Recomputed {
    fn default() -> Self {
        Self {
            matches: Vec::new(),
            pagination: Pagination::default(),
        }
    }
}

/// Run the pipeline: filter, then sort, then derive the page count and clamp
/// the requested page.
pub fn recompute(catalog: &[Product], query: &SearchQuery) -> Recomputed {
    let mut matches = filter_indices(catalog, &query.filters());
    sort_indices(catalog, &mut matches, query.sort);
    let pagination = Pagination::with_page_size(query.page, matches.len());

    Recomputed { matches, pagination }
}

/// Run a query and return the current page's records.
pub fn search<'a>(catalog: &'a [Product], query: &SearchQuery) -> SearchResults<&'a Product> {
    let recomputed = recompute(catalog, query);
    SearchResults::new(recomputed.page_items(catalog), recomputed.pagination)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::PriceRange;
    use chrono::{Duration, TimeZone, Utc};

    fn catalog() -> Vec<Product> {
        let base = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        vec![
            Product::new("Red Shoe", "A", "Shoes", 40.0, base),
            Product::new("Blue Shoe", "B", "Shoes", 120.0, base + Duration::days(2)),
            Product::new("Red Hat", "A", "Hats", 20.0, base + Duration::days(1)),
        ]
    }

    fn names(items: &[&Product]) -> Vec<String> {
        items.iter().map(|p| p.name.clone()).collect()
    }

    #[test]
    fn test_filter_keeps_catalog_order() {
        let catalog = catalog();
        let filters = vec![Filter::text("red").unwrap()];
        assert_eq!(filter_indices(&catalog, &filters), vec![0, 2]);
    }

    #[test]
    fn test_no_filters_keeps_everything() {
        let catalog = catalog();
        assert_eq!(filter_indices(&catalog, &[]), vec![0, 1, 2]);
    }

    #[test]
    fn test_brand_then_price_asc() {
        let catalog = catalog();
        let query = SearchQuery::new().with_brand("A").with_sort(SortOption::PriceAsc);
        let results = search(&catalog, &query);
        assert_eq!(names(&results.items), vec!["Red Hat", "Red Shoe"]);
    }

    #[test]
    fn test_price_bucket() {
        let catalog = catalog();
        let filters = Filter::price_range(PriceRange::UpTo50).into_iter().collect::<Vec<_>>();
        assert_eq!(filter_indices(&catalog, &filters), vec![0, 2]);
    }

    #[test]
    fn test_newest_first() {
        let catalog = catalog();
        let query = SearchQuery::new().with_sort(SortOption::Newest);
        let results = search(&catalog, &query);
        assert_eq!(names(&results.items), vec!["Blue Shoe", "Red Hat", "Red Shoe"]);
    }

    #[test]
    fn test_ties_keep_catalog_order() {
        let at = Utc::now();
        let catalog = vec![
            Product::new("first", "A", "X", 10.0, at),
            Product::new("cheap", "A", "X", 5.0, at),
            Product::new("second", "A", "X", 10.0, at),
            Product::new("third", "A", "X", 10.0, at),
        ];

        let mut indices = vec![0, 1, 2, 3];
        sort_indices(&catalog, &mut indices, SortOption::PriceDesc);
        assert_eq!(indices, vec![0, 2, 3, 1]);

        let mut indices = vec![0, 1, 2, 3];
        sort_indices(&catalog, &mut indices, SortOption::Newest);
        assert_eq!(indices, vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_catalog_not_mutated() {
        let catalog = catalog();
        let before = catalog.clone();
        let _ = search(&catalog, &SearchQuery::new().with_sort(SortOption::PriceDesc));
        assert_eq!(catalog, before);
    }

    #[test]
    fn test_empty_catalog() {
        let results = search(&[], &SearchQuery::new().with_search("x").with_page(4));
        assert!(results.is_empty());
        assert_eq!(results.pagination.total_pages, 1);
        assert_eq!(results.pagination.page, 1);
    }

    #[test]
    fn test_requested_page_is_clamped() {
        let catalog = catalog();
        let recomputed = recompute(&catalog, &SearchQuery::new().with_page(7));
        assert_eq!(recomputed.pagination.page, 1);
        assert_eq!(recomputed.page_indices().len(), 3);
    }
}
