//! Browse session state owned by the display layer.
//!
//! A [`BrowseSession`] holds the loaded catalog, the derived facets, the
//! current [`SearchQuery`] and the last [`Recomputed`] view. Every mutation
//! re-runs the stateless pipeline once before returning, so the view read
//! afterwards always matches the parameters.

use std::fmt;
use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::catalog::{derive_facets, CatalogFacets, Product};
use crate::error::CatalogError;
use crate::search::{
    price_buckets, recompute, Pagination, PriceBucket, PriceRange, Recomputed, SearchQuery,
    SortOption,
};

/// Catalog, parameters and derived view for one user.
#[derive(Debug, Clone)]
pub struct BrowseSession {
    catalog: Arc<[Product]>,
    facets: CatalogFacets,
    query: SearchQuery,
    view: Recomputed,
    loading: bool,
    error: Option<String>,
}

impl Default for BrowseSession {
    fn default() -> Self {
        Self::new()
    }
}

impl BrowseSession {
    /// Create an empty session with nothing loaded.
    pub fn new() -> Self {
        Self {
            catalog: Arc::from(Vec::new()),
            facets: CatalogFacets::default(),
            query: SearchQuery::new(),
            view: Recomputed::default(),
            loading: false,
            error: None,
        }
    }

    /// Create a session from an already-loaded catalog.
    pub fn with_catalog(products: Vec<Product>) -> Self {
        let mut session = Self::new();
        session.replace_catalog(products);
        session
    }

    /// Mark a load as in flight. Clears any previous load error.
    pub fn begin_load(&mut self) {
        self.loading = true;
        self.error = None;
    }

    /// Apply the outcome of a catalog load.
    ///
    /// On failure the previous catalog and view are kept and the error
    /// message is stored until the next load starts.
    pub fn finish_load<E: fmt::Display>(&mut self, result: Result<Vec<Product>, E>) {
        self.loading = false;
        match result {
            Ok(products) => self.replace_catalog(products),
            Err(e) => {
                let message = e.to_string();
                warn!(error = %message, "catalog load failed");
                self.error = Some(message);
            }
        }
    }

    fn replace_catalog(&mut self, products: Vec<Product>) {
        self.catalog = Arc::from(products);
        self.facets = derive_facets(&self.catalog);
        self.error = None;
        info!(
            products = self.catalog.len(),
            brands = self.facets.brands.len(),
            categories = self.facets.categories.len(),
            "catalog loaded"
        );
        self.refresh();
    }

    /// Recompute filter and page count, then reset to page 1.
    fn refresh(&mut self) {
        self.query.page = 1;
        self.view = recompute(&self.catalog, &self.query);
        debug!(
            matches = self.view.matches.len(),
            total_pages = self.view.pagination.total_pages,
            "view recomputed"
        );
    }

    fn update(&mut self, apply: impl FnOnce(&mut SearchQuery)) {
        let before = self.query.clone();
        apply(&mut self.query);
        if !self.query.same_selection(&before) {
            self.refresh();
        }
    }

    /// Set the search text.
    pub fn set_search(&mut self, search: impl Into<String>) {
        let search = search.into();
        self.update(|q| q.search = search);
    }

    /// Select a brand; `None` or an empty string clears the filter.
    pub fn set_brand(&mut self, brand: Option<String>) {
        self.update(|q| q.brand = brand.filter(|b| !b.is_empty()));
    }

    /// Select a category; `None` or an empty string clears the filter.
    pub fn set_category(&mut self, category: Option<String>) {
        self.update(|q| q.category = category.filter(|c| !c.is_empty()));
    }

    /// Select a price range.
    pub fn set_price_range(&mut self, range: PriceRange) {
        self.update(|q| q.price_range = range);
    }

    /// Select a sort option.
    pub fn set_sort(&mut self, sort: SortOption) {
        self.update(|q| q.sort = sort);
    }

    fn move_to(&mut self, pagination: Pagination) {
        self.query.page = pagination.page;
        self.view.pagination = pagination;
    }

    /// Go to the previous page, stopping at 1.
    pub fn previous_page(&mut self) {
        let prev = self.view.pagination.prev();
        self.move_to(prev);
    }

    /// Go to the next page, stopping at the last page.
    pub fn next_page(&mut self) {
        let next = self.view.pagination.next();
        self.move_to(next);
    }

    /// Jump to a page number from the page selector.
    pub fn select_page(&mut self, page: usize) -> Result<(), CatalogError> {
        let pagination = self.view.pagination;
        if !pagination.contains_page(page) {
            return Err(CatalogError::PageOutOfRange {
                page,
                total_pages: pagination.total_pages,
            });
        }
        self.move_to(pagination.at_page(page));
        Ok(())
    }

    /// The loaded catalog.
    pub fn catalog(&self) -> &[Product] {
        &self.catalog
    }

    /// Facets of the loaded catalog.
    pub fn facets(&self) -> &CatalogFacets {
        &self.facets
    }

    /// The fixed price bucket list.
    pub fn price_buckets(&self) -> Vec<PriceBucket> {
        price_buckets()
    }

    /// Current parameters.
    pub fn query(&self) -> &SearchQuery {
        &self.query
    }

    /// Pagination of the current view.
    pub fn pagination(&self) -> &Pagination {
        &self.view.pagination
    }

    /// Current page (1-indexed).
    pub fn page(&self) -> usize {
        self.view.pagination.page
    }

    /// Total number of pages (at least 1).
    pub fn total_pages(&self) -> usize {
        self.view.pagination.total_pages
    }

    /// Number of records matching the current filters.
    pub fn match_count(&self) -> usize {
        self.view.matches.len()
    }

    /// Records on the current page.
    pub fn page_items(&self) -> Vec<&Product> {
        self.view.page_items(&self.catalog)
    }

    /// Check whether the current filters match nothing.
    pub fn is_empty_result(&self) -> bool {
        self.view.matches.is_empty()
    }

    /// Whether a load is in flight.
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Message of the last failed load.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Snapshot of everything the display layer renders.
    pub fn view(&self) -> BrowseView<'_> {
        BrowseView {
            items: self.page_items(),
            pagination: self.view.pagination,
            query: &self.query,
            facets: &self.facets,
            price_buckets: self.price_buckets(),
            loading: self.loading,
            error: self.error.as_deref(),
        }
    }
}

/// A render-ready snapshot of a [`BrowseSession`].
#[derive(Debug, Clone, Serialize)]
pub struct BrowseView<'a> {
    pub items: Vec<&'a Product>,
    pub pagination: Pagination,
    pub query: &'a SearchQuery,
    pub facets: &'a CatalogFacets,
    pub price_buckets: Vec<PriceBucket>,
    pub loading: bool,
    pub error: Option<&'a str>,
}
