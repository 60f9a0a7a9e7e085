//! Product catalog module.
//!
//! Contains the product record type and facet derivation.

mod facets;
mod product;

pub use facets::{derive_facets, CatalogFacets, Facet, FacetValue};
pub use product::{parse_timestamp, Product};
