//! Page fetch capability
//!
//! The window never talks to a backend itself. Hosts inject a `PageFetcher`
//! that resolves a `FetchRequest` (filter variables plus an inclusive item
//! index range) into a page of records. This keeps the pagination and merge
//! logic testable without a network.

use crate::query::FilterVars;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Record with a stable identity used for de-duplication
pub trait Record {
    fn record_id(&self) -> &str;
}

/// Product record as returned by the search backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub product_id: String,
    #[serde(default)]
    pub product_name: String,
    /// Fields this engine does not interpret
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl Product {
    #[must_use]
    pub fn new(product_id: impl Into<String>, product_name: impl Into<String>) -> Self {
        Self {
            product_id: product_id.into(),
            product_name: product_name.into(),
            extra: serde_json::Map::new(),
        }
    }
}

impl Record for Product {
    fn record_id(&self) -> &str {
        &self.product_id
    }
}

/// Variables of one `fetchMore` call
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FetchRequest {
    #[serde(flatten)]
    pub filters: FilterVars,
    /// First requested item index
    pub from: usize,
    /// Last requested item index (inclusive)
    pub to: usize,
}

impl FetchRequest {
    /// Number of items covered by the request
    #[must_use]
    pub const fn len(&self) -> usize {
        (self.to + 1).saturating_sub(self.from)
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.to < self.from
    }
}

/// Page returned by a fetcher
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FetchedPage<R> {
    pub products: Vec<R>,
    /// Updated total, when the backend reports one
    #[serde(default)]
    pub records_filtered: Option<usize>,
}

impl<R> FetchedPage<R> {
    #[must_use]
    pub const fn new(products: Vec<R>) -> Self {
        Self {
            products,
            records_filtered: None,
        }
    }
}

/// Fetch failures
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// Backend reported an error
    #[error("Backend error: {0}")]
    Backend(String),

    /// Request never completed
    #[error("Fetch was interrupted before completion")]
    Interrupted,
}

/// Capability to fetch a page of the current result set
#[async_trait]
pub trait PageFetcher<R: Send>: Send + Sync {
    async fn fetch_more(&self, request: &FetchRequest) -> Result<FetchedPage<R>, FetchError>;
}

/// Fetcher serving pages from an in-memory, already filtered catalog
#[derive(Debug, Clone)]
pub struct StaticCatalogFetcher<R> {
    records: Vec<R>,
}

impl<R> StaticCatalogFetcher<R> {
    #[must_use]
    pub const fn new(records: Vec<R>) -> Self {
        Self { records }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[async_trait]
impl<R: Clone + Send + Sync> PageFetcher<R> for StaticCatalogFetcher<R> {
    async fn fetch_more(&self, request: &FetchRequest) -> Result<FetchedPage<R>, FetchError> {
        let start = request.from.min(self.records.len());
        let end = request.to.saturating_add(1).min(self.records.len());

        Ok(FetchedPage {
            products: self.records[start..end.max(start)].to_vec(),
            records_filtered: Some(self.records.len()),
        })
    }
}
