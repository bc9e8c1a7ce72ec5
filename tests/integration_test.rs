//! Integration tests for facetnav
//!
//! These tests drive the public API end-to-end: snapshot loading, category
//! navigation, debounced range commits, the result window and config files.

use async_trait::async_trait;
use facetnav::category::{Category, CategoryTrail, resolve_selected_path};
use facetnav::config::NavConfig;
use facetnav::query::{MapTokens, QueryState};
use facetnav::range::{RangeDebouncer, RangeDomain, RangeFacetOption, parse_active, parse_domain};
use facetnav::window::{
    FetchError, FetchRequest, FetchedPage, MergeOutcome, PageFetcher, Product, Record,
    ResultWindow,
};
use facetnav::{NavError, SearchContext};
use std::fs;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tempfile::TempDir;

/// Root > Category > Shoes, as the backend returns it
fn shoes_tree() -> Category {
    Category::new("1", "Root").with_children(vec![
        Category::new("2", "Category")
            .with_selected(true)
            .with_children(vec![
                Category::new("3", "Shoes").with_selected(true),
                Category::new("4", "Shirts"),
            ]),
    ])
}

fn products(range: std::ops::Range<usize>) -> Vec<Product> {
    range.map(|i| Product::new(format!("p{i}"), "")).collect()
}

/// Fetcher that counts calls and serves any range from a virtual catalog
#[derive(Default)]
struct CountingFetcher {
    calls: AtomicUsize,
}

#[async_trait]
impl PageFetcher<Product> for CountingFetcher {
    async fn fetch_more(&self, request: &FetchRequest) -> Result<FetchedPage<Product>, FetchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(FetchedPage::new(products(request.from..request.to + 1)))
    }
}

#[test]
fn test_end_to_end_unselect_restores_root() {
    let root = shoes_tree();
    let path = resolve_selected_path(&root);
    let names: Vec<&str> = path.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["Root", "Category", "Shoes"]);

    let removed: Vec<&str> = path
        .unselect(1)
        .unwrap()
        .iter()
        .map(|c| c.name.as_str())
        .collect();
    assert_eq!(removed, vec!["Category", "Shoes"]);

    let next = path.apply_unselect(1).unwrap();
    let after = resolve_selected_path(&next);
    assert_eq!(after.len(), 1);
    assert_eq!(after.root().name, "Root");
}

#[test]
fn test_trail_intents_from_snapshot() {
    let json = serde_json::json!({
        "searchQuery": {"variables": {"query": "shoes", "map": "ft,c,c"}},
        "facets": {"categoriesTrees": [shoes_tree()]}
    });
    let ctx: SearchContext = serde_json::from_value(json).unwrap();
    let root = ctx.category_root().unwrap();
    let state = ctx.query_state();

    let trail = CategoryTrail::new(root, &state.map_tokens(), false);
    assert!(trail.shows_root_close());

    let intent = trail.click_root().unwrap().unwrap();
    let removed: Vec<&str> = intent.facets_to_remove.iter().map(|f| f.id.as_str()).collect();
    assert_eq!(removed, vec!["1", "2", "3"]);

    let shallow = CategoryTrail::new(root, &MapTokens::parse("c"), true);
    assert_eq!(shallow.click_root().unwrap(), None);
}

#[test]
fn test_price_range_parsing() {
    let options = vec![
        RangeFacetOption::new("de-100-a-200"),
        RangeFacetOption::new("de-50-a-150"),
    ];
    let domain = parse_domain(&options).unwrap();
    assert_eq!(domain, RangeDomain { min: 50, max: 200 });

    assert_eq!(parse_active(Some("120 TO 180"), domain).as_array(), [120, 180]);
    assert_eq!(parse_active(Some("10 TO 500"), domain).as_array(), [10, 500]);
    assert_eq!(parse_active(None, domain).as_array(), [50, 200]);

    assert!(parse_domain(&[RangeFacetOption::new("cheap")]).is_none());
}

#[tokio::test(start_paused = true)]
async fn test_debounced_commit_updates_query_state() {
    let state = Arc::new(Mutex::new(QueryState {
        query: Some("shoes".to_string()),
        page: Some(4),
        ..Default::default()
    }));
    let mut debouncer = RangeDebouncer::with_default_period(Arc::clone(&state));

    for high in [90, 100, 110, 120] {
        debouncer.push(10, high);
        tokio::time::sleep(Duration::from_millis(200)).await;
    }
    assert_eq!(state.lock().unwrap().price_range, None);

    tokio::time::sleep(Duration::from_millis(400)).await;

    let state = state.lock().unwrap();
    assert_eq!(state.price_range.as_deref(), Some("10 TO 120"));
    assert_eq!(state.page, None);
    assert_eq!(state.query.as_deref(), Some("shoes"));
}

#[tokio::test]
async fn test_double_trigger_issues_one_request() {
    let fetcher = CountingFetcher::default();
    let mut window = ResultWindow::builder()
        .records(products(20..30))
        .records_filtered(100)
        .max_items_per_page(10)
        .page(3)
        .build()
        .unwrap();

    let first = window.begin_fetch_previous();
    let second = window.begin_fetch_previous();
    assert!(second.is_none());

    let ticket = first.unwrap();
    let result = fetcher.fetch_more(ticket.request()).await;
    assert_eq!(window.complete(ticket, result), MergeOutcome::Merged { added: 10 });
    assert_eq!(fetcher.calls.load(Ordering::SeqCst), 1);

    let ids: Vec<&str> = window.records().iter().map(Record::record_id).collect();
    let mut unique = ids.clone();
    unique.sort_unstable();
    unique.dedup();
    assert_eq!(unique.len(), ids.len());
    assert_eq!(window.from(), 10);
}

#[tokio::test]
async fn test_window_from_snapshot_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("ctx.json");
    let json = serde_json::json!({
        "searchQuery": {
            "data": {"productSearch": {"products": products(10..20), "recordsFiltered": 25}},
            "variables": {"map": "c"}
        },
        "maxItemsPerPage": 10,
        "page": 2
    });
    fs::write(&path, json.to_string()).unwrap();

    let ctx = SearchContext::from_path(&path).unwrap();
    let mut window = ctx.result_window(NavConfig::default().max_items_per_page).unwrap();
    assert_eq!((window.from(), window.to()), (10, 20));

    let fetcher = CountingFetcher::default();
    window.fetch_previous(&fetcher).await;
    window.fetch_next(&fetcher).await;

    assert_eq!((window.from(), window.to()), (0, 25));
    assert_eq!(window.records().len(), 25);
    assert_eq!(window.fetch_next(&fetcher).await, MergeOutcome::Skipped);
}

#[test]
fn test_missing_snapshot_is_io_error() {
    let temp_dir = TempDir::new().unwrap();
    let result = SearchContext::from_path(temp_dir.path().join("nope.json"));
    assert!(matches!(result, Err(NavError::IoError(_))));
}

#[test]
fn test_config_file_roundtrip() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("facetnav").join("config.toml");

    let config = NavConfig {
        debounce_ms: 300,
        ..Default::default()
    };
    config.save_to(&path).unwrap();

    let loaded = NavConfig::load_from(&path).unwrap();
    assert_eq!(loaded.debounce(), Duration::from_millis(300));
    assert_eq!(loaded.disclosure, config.disclosure);
}
