//! Browse session scenarios.

use chrono::{Duration, TimeZone, Utc};
use shopfront_catalog::prelude::*;

fn three_products() -> Vec<Product> {
    let base = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
    vec![
        Product::new("Red Shoe", "A", "Shoes", 40.0, base),
        Product::new("Blue Shoe", "B", "Shoes", 120.0, base + Duration::hours(1)),
        Product::new("Red Hat", "A", "Hats", 20.0, base + Duration::hours(2)),
    ]
}

fn many(count: usize) -> Vec<Product> {
    let base = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    (0..count)
        .map(|i| {
            let brand = if i % 2 == 0 { "Even" } else { "Odd" };
            Product::new(format!("Widget {i}"), brand, "Tools", (i * 7 % 50) as f64, base + Duration::minutes(i as i64))
        })
        .collect()
}

fn names(session: &BrowseSession) -> Vec<String> {
    session.page_items().iter().map(|p| p.name.clone()).collect()
}

#[test]
fn brand_filter_sorted_by_price() {
    let mut session = BrowseSession::with_catalog(three_products());
    session.set_brand(Some("A".to_string()));
    session.set_sort(SortOption::PriceAsc);

    assert_eq!(names(&session), vec!["Red Hat", "Red Shoe"]);
}

#[test]
fn cheapest_bucket_keeps_both_cheap_items() {
    let mut session = BrowseSession::with_catalog(three_products());
    session.set_price_range(PriceRange::UpTo50);

    let mut found = names(&session);
    found.sort();
    assert_eq!(found, vec!["Red Hat", "Red Shoe"]);
    assert_eq!(session.match_count(), 2);
}

#[test]
fn twenty_five_records_make_three_pages() {
    let mut session = BrowseSession::with_catalog(many(25));
    assert_eq!(session.total_pages(), 3);

    session.select_page(3).unwrap();
    assert_eq!(session.page_items().len(), 1);
}

#[test]
fn failed_first_load_leaves_empty_state() {
    let mut session = BrowseSession::new();
    session.begin_load();
    session.finish_load(Err("Network response was not ok"));

    assert_eq!(session.error(), Some("Network response was not ok"));
    assert!(!session.is_loading());
    assert!(session.page_items().is_empty());
    assert_eq!(session.total_pages(), 1);
    assert!(session.facets().brands.is_empty());
    assert!(session.facets().categories.is_empty());
}

#[test]
fn every_parameter_change_resets_page() {
    let changes: Vec<Box<dyn Fn(&mut BrowseSession)>> = vec![
        Box::new(|s| s.set_search("widget 1")),
        Box::new(|s| s.set_brand(Some("Even".to_string()))),
        Box::new(|s| s.set_category(Some("Tools".to_string()))),
        Box::new(|s| s.set_price_range(PriceRange::UpTo50)),
        Box::new(|s| s.set_sort(SortOption::Newest)),
    ];

    for change in changes {
        let mut session = BrowseSession::with_catalog(many(40));
        session.select_page(3).unwrap();
        assert_eq!(session.page(), 3);

        change(&mut session);
        assert_eq!(session.page(), 1);
        assert_eq!(session.query().page, 1);
        assert!(session.pagination().contains_page(session.page()));
    }
}

#[test]
fn shrinking_filter_recomputes_total_pages() {
    let mut session = BrowseSession::with_catalog(many(40));
    session.next_page();
    session.next_page();
    assert_eq!(session.total_pages(), 4);

    session.set_search("widget 3");
    // "Widget 3" and "Widget 30".."Widget 39"
    assert_eq!(session.match_count(), 11);
    assert_eq!(session.total_pages(), 1);
    assert_eq!(session.page(), 1);
}

#[test]
fn no_results_is_not_an_error() {
    let mut session = BrowseSession::with_catalog(three_products());
    session.set_search("umbrella");

    assert!(session.is_empty_result());
    assert!(session.page_items().is_empty());
    assert_eq!(session.error(), None);
    assert_eq!(session.total_pages(), 1);
}

#[test]
fn facets_survive_filtering() {
    let mut session = BrowseSession::with_catalog(three_products());
    session.set_brand(Some("B".to_string()));

    let brands: Vec<_> = session.facets().brands.iter().collect();
    assert_eq!(brands, vec!["A", "B"]);
    let categories: Vec<_> = session.facets().categories.iter().collect();
    assert_eq!(categories, vec!["Shoes", "Hats"]);
}

#[test]
fn reload_replaces_catalog_and_facets() {
    let mut session = BrowseSession::with_catalog(three_products());
    session.set_category(Some("Tools".to_string()));
    assert!(session.is_empty_result());

    session.begin_load();
    session.finish_load::<String>(Ok(many(13)));

    assert_eq!(session.match_count(), 13);
    assert_eq!(session.total_pages(), 2);
    assert_eq!(session.facets().brands.iter().collect::<Vec<_>>(), vec!["Even", "Odd"]);
}

#[test]
fn clearing_brand_restores_all_records() {
    let mut session = BrowseSession::with_catalog(three_products());
    session.set_brand(Some("A".to_string()));
    assert_eq!(session.match_count(), 2);

    session.set_brand(None);
    assert_eq!(session.match_count(), 3);
}
