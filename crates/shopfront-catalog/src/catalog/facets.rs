//! Facet derivation.
//!
//! Facets are the distinct brand and category values offered as filter
//! choices. They are derived once per catalog load and never change until the
//! next load.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::catalog::Product;

/// A single facet value.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FacetValue {
    /// The value.
    pub value: String,
    /// Number of catalog records with this value.
    pub count: usize,
}

/// A facet for filtering.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Facet {
    /// Facet name (e.g., "Brand", "Category").
    pub name: String,
    /// Distinct values in first-seen order.
    pub values: Vec<FacetValue>,
}

impl Facet {
    /// Create an empty terms facet.
    pub fn terms(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            values: Vec::new(),
        }
    }

    /// Build a facet from a sequence of raw values.
    ///
    /// Keeps first-seen order and drops duplicates.
    pub fn from_values<'a>(name: impl Into<String>, raw: impl IntoIterator<Item = &'a str>) -> Self {
        let mut facet = Self::terms(name);
        let mut positions: HashMap<&'a str, usize> = HashMap::new();

        for value in raw {
            match positions.get(value) {
                Some(&idx) => facet.values[idx].count += 1,
                None => {
                    positions.insert(value, facet.values.len());
                    facet.values.push(FacetValue {
                        value: value.to_string(),
                        count: 1,
                    });
                }
            }
        }

        facet
    }

    /// Iterate over the distinct values.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.values.iter().map(|v| v.value.as_str())
    }

    /// Check if a value is offered by this facet.
    pub fn contains(&self, value: &str) -> bool {
        self.values.iter().any(|v| v.value == value)
    }

    /// Number of distinct values.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if empty.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Brand and category facets of a loaded catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CatalogFacets {
    pub brands: Facet,
    pub categories: Facet,
}

impl Default for CatalogFacets {
    fn default() -> Self {
        Self {
            brands: Facet::terms("Brand"),
            categories: Facet::terms("Category"),
        }
    }
}

/// Derive brand and category facets from the full catalog.
pub fn derive_facets(catalog: &[Product]) -> CatalogFacets {
    CatalogFacets {
        brands: Facet::from_values("Brand", catalog.iter().map(|p| p.brand.as_str())),
        categories: Facet::from_values("Category", catalog.iter().map(|p| p.category.as_str())),
    }
}
