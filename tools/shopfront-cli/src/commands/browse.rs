//! Browse the catalog: filter, sort and page.

use anyhow::Result;
use serde::Serialize;
use shopfront_catalog::prelude::*;
use tracing::debug;

use super::{load_session, BrowseArgs};
use crate::context::Context;
use crate::render::render_page;

/// Run the browse command.
pub async fn run(args: BrowseArgs, ctx: &Context) -> Result<()> {
    let mut session = load_session(&args.source, ctx).await?;

    let warnings = apply(&args, &mut session)?;
    for warning in &warnings {
        ctx.output.warn(warning);
    }
    debug!(
        matches = session.match_count(),
        page = session.page(),
        total_pages = session.total_pages(),
        "browse parameters applied"
    );

    if ctx.output.is_json() {
        ctx.output.json(&BrowseReport {
            view: session.view(),
            warnings,
        });
    } else {
        ctx.output.line(&render_page(&session.view(), &ctx.config.display));
    }

    Ok(())
}

/// JSON output: the view plus any warnings raised while applying arguments.
#[derive(Serialize)]
struct BrowseReport<'a> {
    #[serde(flatten)]
    view: BrowseView<'a>,
    warnings: Vec<String>,
}

/// Apply the arguments to the session: filters, then sort, then page.
///
/// Returns warnings for selections that cannot match or pages that do not exist.
pub fn apply(args: &BrowseArgs, session: &mut BrowseSession) -> Result<Vec<String>, CatalogError> {
    let mut warnings = Vec::new();

    if let Some(search) = &args.search {
        session.set_search(search.as_str());
    }
    if let Some(brand) = &args.brand {
        if !brand.is_empty() && !session.facets().brands.contains(brand) {
            warnings.push(format!("Unknown brand '{}'", brand));
        }
        session.set_brand(Some(brand.clone()));
    }
    if let Some(category) = &args.category {
        if !category.is_empty() && !session.facets().categories.contains(category) {
            warnings.push(format!("Unknown category '{}'", category));
        }
        session.set_category(Some(category.clone()));
    }
    if let Some(range) = args.price {
        session.set_price_range(range);
    }
    if let Some(sort) = args.sort {
        session.set_sort(sort);
    }

    let page = session.pagination().at_page(args.page).page;
    if page != args.page {
        warnings.push(format!(
            "Page {} out of range (1..={}), showing page {}",
            args.page,
            session.total_pages(),
            page
        ));
    }
    session.select_page(page)?;

    Ok(warnings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn session() -> BrowseSession {
        let at = |d| Utc.with_ymd_and_hms(2024, 5, d, 0, 0, 0).unwrap();
        let mut products = vec![
            Product::new("Red Shoe", "A", "Shoes", 40.0, at(1)),
            Product::new("Blue Shoe", "B", "Shoes", 120.0, at(2)),
            Product::new("Red Hat", "A", "Hats", 20.0, at(3)),
        ];
        for i in 0..20 {
            products.push(Product::new(format!("Sock {i}"), "C", "Socks", 5.0, at(4)));
        }
        BrowseSession::with_catalog(products)
    }

    fn args() -> BrowseArgs {
        BrowseArgs {
            page: 1,
            ..Default::default()
        }
    }

    fn names(session: &BrowseSession) -> Vec<String> {
        session.page_items().iter().map(|p| p.name.clone()).collect()
    }

    #[test]
    fn test_apply_filters_and_sort() {
        let mut session = session();
        let args = BrowseArgs {
            brand: Some("A".into()),
            sort: Some(SortOption::PriceDesc),
            ..args()
        };
        assert!(apply(&args, &mut session).unwrap().is_empty());
        assert_eq!(names(&session), vec!["Red Shoe", "Red Hat"]);
    }

    #[test]
    fn test_apply_page_after_filters() {
        let mut session = session();
        let args = BrowseArgs {
            category: Some("Socks".into()),
            page: 2,
            ..args()
        };
        assert!(apply(&args, &mut session).unwrap().is_empty());
        assert_eq!(session.page(), 2);
        assert_eq!(session.page_items().len(), 8);
    }

    #[test]
    fn test_out_of_range_page_falls_back() {
        let mut session = session();
        let warnings = apply(&BrowseArgs { page: 9, ..args() }, &mut session).unwrap();
        assert_eq!(warnings, vec!["Page 9 out of range (1..=2), showing page 2"]);
        assert_eq!(session.page(), 2);

        let warnings = apply(&BrowseArgs { page: 0, ..args() }, &mut session).unwrap();
        assert_eq!(warnings, vec!["Page 0 out of range (1..=2), showing page 1"]);
        assert_eq!(session.page(), 1);
    }

    #[test]
    fn test_unknown_brand_warns_and_filters() {
        let mut session = session();
        let args = BrowseArgs {
            brand: Some("Z".into()),
            ..args()
        };
        assert_eq!(apply(&args, &mut session).unwrap(), vec!["Unknown brand 'Z'"]);
        assert!(session.is_empty_result());
    }

    #[test]
    fn test_price_bucket_and_search() {
        let mut session = session();
        let args = BrowseArgs {
            search: Some("red".into()),
            price: Some(PriceRange::UpTo50),
            ..args()
        };
        apply(&args, &mut session).unwrap();
        assert_eq!(names(&session), vec!["Red Hat", "Red Shoe"]);
    }

    #[test]
    fn test_json_report_carries_warnings() {
        let mut session = session();
        let args = BrowseArgs {
            brand: Some("Z".into()),
            page: 4,
            ..args()
        };
        let warnings = apply(&args, &mut session).unwrap();
        let report = serde_json::to_value(BrowseReport {
            view: session.view(),
            warnings,
        })
        .unwrap();

        assert_eq!(report["warnings"].as_array().unwrap().len(), 2);
        assert_eq!(report["warnings"][0], "Unknown brand 'Z'");
        assert_eq!(report["items"].as_array().unwrap().len(), 0);
        assert_eq!(report["pagination"]["page"], 1);
    }
}
