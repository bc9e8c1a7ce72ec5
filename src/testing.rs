//! Testing utilities for facetnav
//!
//! Tree builders, a recording `QueryMutator` and a scripted `PageFetcher`.
//!
//! Only available when compiled with `cfg(test)`.

use crate::category::{Category, SelectedPath};
use crate::query::{QueryMutator, QueryPatch};
use crate::window::{
    FetchError, FetchRequest, FetchedPage, PageFetcher, Product, Record, StaticCatalogFetcher,
};
use async_trait::async_trait;
use std::ops::Range;
use std::sync::Mutex;

/// `Root > Category > Shoes` selected, with `Sneakers` and `Boots` below
///
/// ```text
/// Root (root)
/// ├── Category (category) *
/// │   ├── Shoes (shoes) *
/// │   │   ├── Sneakers (sneakers)
/// │   │   └── Boots (boots)
/// │   └── Shirts (shirts)
/// └── Toys (toys)
/// ```
#[must_use]
pub fn shoes_tree() -> Category {
    Category::new("root", "Root").with_children(vec![
        Category::new("category", "Category")
            .with_selected(true)
            .with_children(vec![
                Category::new("shoes", "Shoes")
                    .with_selected(true)
                    .with_children(vec![
                        Category::new("sneakers", "Sneakers"),
                        Category::new("boots", "Boots"),
                    ]),
                Category::new("shirts", "Shirts"),
            ]),
        Category::new("toys", "Toys"),
    ])
}

/// Display names along a path
#[must_use]
pub fn names<'a>(path: &SelectedPath<'a>) -> Vec<&'a str> {
    path.iter().map(|c| c.name.as_str()).collect()
}

/// Products `p{i}` for every `i` in `range`
#[must_use]
pub fn products(range: Range<usize>) -> Vec<Product> {
    range
        .map(|i| Product::new(format!("p{i}"), format!("Product {i}")))
        .collect()
}

/// Record ids in order
#[must_use]
pub fn ids<R: Record>(records: &[R]) -> Vec<String> {
    records.iter().map(|r| r.record_id().to_string()).collect()
}

/// `QueryMutator` that records every patch it receives
#[derive(Debug, Default)]
pub struct RecordingMutator {
    patches: Mutex<Vec<QueryPatch>>,
}

impl RecordingMutator {
    /// Patches received so far
    ///
    /// # Panics
    /// Panics if the lock is poisoned.
    #[must_use]
    pub fn patches(&self) -> Vec<QueryPatch> {
        self.patches.lock().unwrap().clone()
    }
}

impl QueryMutator for RecordingMutator {
    fn set_query(&self, patch: QueryPatch) {
        self.patches.lock().unwrap().push(patch);
    }
}

/// `PageFetcher` serving a fixed catalog (or a fixed failure) and logging requests
pub struct MockFetcher {
    catalog: StaticCatalogFetcher<Product>,
    failure: Option<String>,
    requests: Mutex<Vec<FetchRequest>>,
}

impl MockFetcher {
    #[must_use]
    pub fn with_catalog(records: Vec<Product>) -> Self {
        Self {
            catalog: StaticCatalogFetcher::new(records),
            failure: None,
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Fetcher whose every call fails with `message`
    #[must_use]
    pub fn failing(message: &str) -> Self {
        Self {
            failure: Some(message.to_string()),
            ..Self::with_catalog(Vec::new())
        }
    }

    /// Requests received so far
    ///
    /// # Panics
    /// Panics if the lock is poisoned.
    #[must_use]
    pub fn requests(&self) -> Vec<FetchRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl PageFetcher<Product> for MockFetcher {
    async fn fetch_more(&self, request: &FetchRequest) -> Result<FetchedPage<Product>, FetchError> {
        self.requests.lock().unwrap().push(request.clone());

        match &self.failure {
            Some(message) => Err(FetchError::Backend(message.clone())),
            None => self.catalog.fetch_more(request).await,
        }
    }
}
