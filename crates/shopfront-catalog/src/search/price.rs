//! Fixed price range buckets.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CatalogError;

/// A selectable price range.
///
/// The list is fixed; `All` disables price filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum PriceRange {
    #[default]
    #[serde(rename = "All")]
    All,
    #[serde(rename = "$0 - $50")]
    UpTo50,
    #[serde(rename = "$50 - $100")]
    From50To100,
    #[serde(rename = "$100 - $200")]
    From100To200,
    #[serde(rename = "$200+")]
    From200,
}

impl PriceRange {
    /// Every range, in display order.
    pub const ALL: [PriceRange; 5] = [
        PriceRange::All,
        PriceRange::UpTo50,
        PriceRange::From50To100,
        PriceRange::From100To200,
        PriceRange::From200,
    ];

    /// Display label.
    pub fn label(&self) -> &'static str {
        match self {
            PriceRange::All => "All",
            PriceRange::UpTo50 => "$0 - $50",
            PriceRange::From50To100 => "$50 - $100",
            PriceRange::From100To200 => "$100 - $200",
            PriceRange::From200 => "$200+",
        }
    }

    /// Short form used on the command line.
    pub fn slug(&self) -> &'static str {
        match self {
            PriceRange::All => "all",
            PriceRange::UpTo50 => "0-50",
            PriceRange::From50To100 => "50-100",
            PriceRange::From100To200 => "100-200",
            PriceRange::From200 => "200+",
        }
    }

    /// Lower bound and optional upper bound (`None` = unbounded).
    pub fn bounds(&self) -> (f64, Option<f64>) {
        match self {
            PriceRange::All => (0.0, None),
            PriceRange::UpTo50 => (0.0, Some(50.0)),
            PriceRange::From50To100 => (50.0, Some(100.0)),
            PriceRange::From100To200 => (100.0, Some(200.0)),
            PriceRange::From200 => (200.0, None),
        }
    }

    /// Whether this range filters anything.
    pub fn is_all(&self) -> bool {
        matches!(self, PriceRange::All)
    }

    /// Check a price against the range. Both ends are inclusive.
    pub fn contains(&self, price: f64) -> bool {
        if self.is_all() {
            return true;
        }
        let (min, max) = self.bounds();
        price >= min && max.map_or(true, |max| price <= max)
    }

    /// The bucket description handed to the display layer.
    pub fn bucket(&self) -> PriceBucket {
        let (min, max) = self.bounds();
        PriceBucket {
            range: *self,
            label: self.label(),
            min,
            max,
        }
    }
}

impl fmt::Display for PriceRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for PriceRange {
    type Err = CatalogError;

    /// Accepts either the display label or the short form.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        PriceRange::ALL
            .into_iter()
            .find(|r| r.label() == s || r.slug().eq_ignore_ascii_case(s))
            .ok_or_else(|| CatalogError::UnknownPriceRange(s.to_string()))
    }
}

/// A named price interval as shown in the filter list.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PriceBucket {
    pub range: PriceRange,
    pub label: &'static str,
    pub min: f64,
    pub max: Option<f64>,
}

/// The fixed list of price buckets.
pub fn price_buckets() -> Vec<PriceBucket> {
    PriceRange::ALL.iter().map(PriceRange::bucket).collect()
}
