//! Terminal rendering of a browse view.

use std::fmt::Write as _;

use chrono::{DateTime, Utc};
use console::style;
use shopfront_catalog::prelude::*;

use crate::config::DisplayConfig;

/// Format a price with two decimals.
pub fn format_price(price: f64, symbol: &str) -> String {
    format!("{}{:.2}", symbol, price)
}

/// Format a timestamp, falling back to RFC 3339 for an invalid format string.
pub fn format_timestamp(at: &DateTime<Utc>, format: &str) -> String {
    let mut out = String::new();
    if write!(out, "{}", at.format(format)).is_err() {
        return at.to_rfc3339();
    }
    out
}

/// Lines describing a single product card.
pub fn render_product(product: &Product, display: &DisplayConfig) -> Vec<String> {
    let mut lines = vec![style(&product.name).bold().to_string()];
    if !product.image.is_empty() {
        lines.push(format!("  Image: {}", product.image));
    }
    if !product.description.is_empty() {
        lines.push(format!("  Description: {}", product.description));
    }
    lines.push(format!(
        "  Price: {}",
        format_price(product.price, &display.currency_symbol)
    ));
    lines.push(format!("  Category: {}", product.category_label()));
    lines.push(format!("  Brand: {}", product.brand));
    lines.push(format!("  Ratings: {} stars", product.rating));
    lines.push(format!(
        "  Created: {}",
        format_timestamp(&product.created_at, &display.date_format)
    ));
    lines
}

/// One-line page selector, e.g. `‹ Prev  1 [2] 3  Next ›`.
pub fn render_pager(pagination: &Pagination) -> String {
    let prev = if pagination.has_prev {
        style("‹ Prev").to_string()
    } else {
        style("‹ Prev").dim().to_string()
    };
    let next = if pagination.has_next {
        style("Next ›").to_string()
    } else {
        style("Next ›").dim().to_string()
    };

    let pages = pagination
        .page_numbers()
        .into_iter()
        .map(|n| {
            if n == pagination.page {
                style(format!("[{}]", n)).green().bold().to_string()
            } else {
                n.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(" ");

    format!("{}  {}  {}", prev, pages, next)
}

/// "Showing 13-24 of 25 products".
pub fn render_summary(pagination: &Pagination) -> String {
    format!(
        "Showing {}-{} of {} products",
        pagination.start_item(),
        pagination.end_item(),
        pagination.total
    )
}

/// Render the whole page: cards, summary and pager.
pub fn render_page(view: &BrowseView<'_>, display: &DisplayConfig) -> String {
    let mut out = Vec::new();

    if let Some(error) = view.error {
        out.push(style(format!("Error: {}", error)).red().to_string());
    }

    if view.loading {
        out.push("Loading products...".to_string());
        return out.join("\n");
    }

    if view.items.is_empty() {
        out.push("No products found".to_string());
    } else {
        for product in &view.items {
            out.extend(render_product(product, display));
            out.push(String::new());
        }
        out.push(render_summary(&view.pagination));
    }

    out.push(render_pager(&view.pagination));
    out.join("\n")
}

/// Lines listing facets with counts and the price buckets.
pub fn render_facets(facets: &CatalogFacets, buckets: &[PriceBucket]) -> Vec<String> {
    let mut lines = Vec::new();
    for facet in [&facets.brands, &facets.categories] {
        lines.push(style(&facet.name).bold().to_string());
        if facet.is_empty() {
            lines.push("  (none)".to_string());
        }
        for value in &facet.values {
            lines.push(format!("  {} ({})", value.value, value.count));
        }
    }

    lines.push(style("Price").bold().to_string());
    for bucket in buckets {
        lines.push(format!("  {}  [{}]", bucket.label, bucket.range.slug()));
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn plain(s: &str) -> String {
        console::strip_ansi_codes(s).to_string()
    }

    fn products(count: usize) -> Vec<Product> {
        let at = Utc.with_ymd_and_hms(2024, 6, 1, 9, 30, 0).unwrap();
        (0..count)
            .map(|i| Product::new(format!("Item {i}"), "A", "X", i as f64 + 0.5, at))
            .collect()
    }

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(40.0, "$"), "$40.00");
        assert_eq!(format_price(19.999, "€"), "€20.00");
    }

    #[test]
    fn test_format_timestamp_fallback() {
        let at = Utc.with_ymd_and_hms(2024, 2, 3, 4, 5, 0).unwrap();
        assert_eq!(format_timestamp(&at, "%d/%m/%Y"), "03/02/2024");
        assert_eq!(format_timestamp(&at, "%Q"), "2024-02-03T04:05:00+00:00");
    }

    #[test]
    fn test_render_product() {
        let product = Product::new("Red Hat", "A", "Hats", 20.0, Utc.with_ymd_and_hms(2024, 2, 3, 4, 5, 0).unwrap())
            .with_rating(4.5)
            .with_description("Wool")
            .with_image("https://img.example.com/hat.png");
        let lines: Vec<String> = render_product(&product, &DisplayConfig::default())
            .iter()
            .map(|l| plain(l))
            .collect();

        assert_eq!(lines[0], "Red Hat");
        assert!(lines.contains(&"  Image: https://img.example.com/hat.png".to_string()));
        assert!(lines.contains(&"  Description: Wool".to_string()));
        assert!(lines.contains(&"  Price: $20.00".to_string()));
        assert!(lines.contains(&"  Ratings: 4.5 stars".to_string()));
        assert!(lines.contains(&"  Created: 2024-02-03 04:05".to_string()));
    }

    #[test]
    fn test_render_pager() {
        let pager = plain(&render_pager(&Pagination::with_page_size(2, 30)));
        assert_eq!(pager, "‹ Prev  1 [2] 3  Next ›");
    }

    #[test]
    fn test_render_summary() {
        let summary = render_summary(&Pagination::with_page_size(2, 25));
        assert_eq!(summary, "Showing 13-24 of 25 products");
    }

    #[test]
    fn test_render_empty_page() {
        let session = BrowseSession::new();
        let text = plain(&render_page(&session.view(), &DisplayConfig::default()));
        assert!(text.contains("No products found"));
        assert!(text.contains("[1]"));
    }

    #[test]
    fn test_render_full_page() {
        let mut session = BrowseSession::with_catalog(products(14));
        session.next_page();
        let text = plain(&render_page(&session.view(), &DisplayConfig::default()));
        assert!(text.contains("Item 12"));
        assert!(text.contains("Item 13"));
        assert!(!text.contains("Item 11\n"));
        assert!(text.contains("Showing 13-14 of 14 products"));
    }

    #[test]
    fn test_render_error() {
        let mut session = BrowseSession::new();
        session.finish_load(Err("Invalid data structure"));
        let text = plain(&render_page(&session.view(), &DisplayConfig::default()));
        assert!(text.starts_with("Error: Invalid data structure"));
    }

    #[test]
    fn test_render_facets() {
        let facets = derive_facets(&products(3));
        let lines: Vec<String> = render_facets(&facets, &price_buckets())
            .iter()
            .map(|l| plain(l))
            .collect();
        assert_eq!(lines[0], "Brand");
        assert_eq!(lines[1], "  A (3)");
        assert!(lines.contains(&"  $0 - $50  [0-50]".to_string()));
    }
}
