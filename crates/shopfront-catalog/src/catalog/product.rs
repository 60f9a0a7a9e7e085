//! Product records as delivered by the catalog API.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::CatalogError;

/// A product in the catalog.
///
/// Records are immutable once loaded and have no explicit id; a product is
/// identified by its position in the loaded sequence.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Product name.
    #[serde(rename = "Product Name")]
    pub name: String,
    /// Brand name (faceted, matched exactly).
    #[serde(rename = "Brand Name")]
    pub brand: String,
    /// Category (faceted, matched exactly).
    #[serde(rename = "Category")]
    pub category: String,
    /// Human-friendly category label, when the API provides one.
    #[serde(
        rename = "Category Name",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub category_name: Option<String>,
    /// Unit price.
    #[serde(rename = "Price")]
    pub price: f64,
    /// Free-form description.
    #[serde(rename = "Description", default)]
    pub description: String,
    /// Image URL.
    #[serde(rename = "Product Image", default)]
    pub image: String,
    /// Average rating in stars.
    #[serde(rename = "Ratings", default)]
    pub rating: f64,
    /// Creation timestamp.
    #[serde(
        rename = "Product Creation Date and Time",
        deserialize_with = "deserialize_timestamp"
    )]
    pub created_at: DateTime<Utc>,
}

impl Product {
    /// Create a product with the faceted fields set and the rest empty.
    pub fn new(
        name: impl Into<String>,
        brand: impl Into<String>,
        category: impl Into<String>,
        price: f64,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            name: name.into(),
            brand: brand.into(),
            category: category.into(),
            category_name: None,
            price,
            description: String::new(),
            image: String::new(),
            rating: 0.0,
            created_at,
        }
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the image URL.
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = image.into();
        self
    }

    /// Set the rating.
    pub fn with_rating(mut self, rating: f64) -> Self {
        self.rating = rating;
        self
    }

    /// Label to show for the category (falls back to the raw category).
    pub fn category_label(&self) -> &str {
        self.category_name.as_deref().unwrap_or(&self.category)
    }
}

/// Parse a creation timestamp.
///
/// Accepts RFC 3339, naive date-times (read as UTC) and bare dates.
pub fn parse_timestamp(raw: &str) -> Result<DateTime<Utc>, CatalogError> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Ok(dt.with_timezone(&Utc));
    }

    const NAIVE_FORMATS: [&str; 3] = [
        "%Y-%m-%dT%H:%M:%S%.f",
        "%Y-%m-%d %H:%M:%S%.f",
        "%Y-%m-%d %H:%M",
    ];
    for format in NAIVE_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
            return Ok(naive.and_utc());
        }
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
        .ok_or_else(|| CatalogError::InvalidTimestamp(raw.to_string()))
}

fn deserialize_timestamp<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_timestamp(&raw).map_err(serde::de::Error::custom)
}
