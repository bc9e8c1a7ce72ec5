//! Snapshot of the hosting search context
//!
//! The presentation layer hands the engine a JSON document shaped like the
//! search context it renders from:
//!
//! ```json
//! {
//!   "searchQuery": {
//!     "data": { "productSearch": { "products": [], "recordsFiltered": 45 } },
//!     "variables": { "query": "shoes", "map": "c,c", "orderBy": "", "priceRange": null }
//!   },
//!   "maxItemsPerPage": 10,
//!   "page": 3,
//!   "facets": { "categoriesTrees": [], "priceRanges": [] }
//! }
//! ```

use crate::category::Category;
use crate::query::{FilterVars, QueryState};
use crate::range::{RangeFacetOption, RangeSlider};
use crate::window::{Product, ResultWindow, WindowError};
use crate::NavError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchContext {
    #[serde(default)]
    pub search_query: SearchQuery,
    #[serde(default)]
    pub max_items_per_page: Option<usize>,
    #[serde(default)]
    pub page: Option<u32>,
    #[serde(default)]
    pub facets: Facets,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchQuery {
    #[serde(default)]
    pub data: SearchData,
    #[serde(default)]
    pub variables: FilterVars,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchData {
    #[serde(default)]
    pub product_search: ProductSearch,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductSearch {
    #[serde(default)]
    pub products: Vec<Product>,
    /// Missing means the materialised products are the whole result set
    #[serde(default)]
    pub records_filtered: Option<usize>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Facets {
    #[serde(default)]
    pub categories_trees: Vec<Category>,
    #[serde(default)]
    pub price_ranges: Vec<RangeFacetOption>,
}

impl SearchContext {
    /// Parse a snapshot from JSON text
    ///
    /// # Errors
    ///
    /// Returns `serde_json::Error` if the text is not a valid snapshot.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Read a snapshot file
    ///
    /// # Errors
    ///
    /// Returns `NavError::IoError` if the file cannot be read and
    /// `NavError::JsonError` if it is not a valid snapshot.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, NavError> {
        let text = fs::read_to_string(path)?;
        Ok(Self::from_json(&text)?)
    }

    /// Query state the snapshot was rendered from
    #[must_use]
    pub fn query_state(&self) -> QueryState {
        let vars = &self.search_query.variables;
        QueryState {
            query: vars.query.clone(),
            map: vars.map.clone(),
            order_by: vars.order_by.clone(),
            price_range: vars.price_range.clone(),
            page: self.page,
        }
    }

    #[must_use]
    pub const fn filters(&self) -> &FilterVars {
        &self.search_query.variables
    }

    /// Root of the category tree, if the backend returned one
    #[must_use]
    pub fn category_root(&self) -> Option<&Category> {
        self.facets.categories_trees.first()
    }

    /// Price slider, or `None` when the facet is not applicable
    #[must_use]
    pub fn price_slider(&self) -> Option<RangeSlider> {
        RangeSlider::from_facets(
            &self.facets.price_ranges,
            self.search_query.variables.price_range.as_deref(),
        )
    }

    /// Result window over the materialised products
    ///
    /// `default_page_size` applies when the snapshot has no `maxItemsPerPage`.
    ///
    /// # Errors
    ///
    /// Returns `WindowError::InvalidPageSize` if the effective page size is 0.
    pub fn result_window(&self, default_page_size: usize) -> Result<ResultWindow<Product>, WindowError> {
        let search = &self.search_query.data.product_search;

        ResultWindow::builder()
            .records(search.products.clone())
            .records_filtered(search.records_filtered.unwrap_or(search.products.len()))
            .max_items_per_page(self.max_items_per_page.unwrap_or(default_page_size))
            .page(self.page.unwrap_or(1))
            .filters(self.filters().clone())
            .build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SNAPSHOT: &str = r#"{
        "searchQuery": {
            "data": {
                "productSearch": {
                    "products": [
                        {"productId": "p20", "productName": "Runner"},
                        {"productId": "p21", "productName": "Trail"}
                    ],
                    "recordsFiltered": 45
                }
            },
            "variables": {"query": "shoes", "map": "ft", "orderBy": "OrderByPriceASC"}
        },
        "maxItemsPerPage": 10,
        "page": 3,
        "facets": {
            "categoriesTrees": [
                {"id": "1", "name": "Apparel", "selected": true, "children": [
                    {"id": "2", "name": "Shoes", "selected": true}
                ]}
            ],
            "priceRanges": [
                {"slug": "de-10-a-50", "name": "$10 - $50", "quantity": 3},
                {"slug": "de-50-a-200", "quantity": 9}
            ]
        }
    }"#;

    #[test]
    fn test_parse_snapshot() {
        let ctx = SearchContext::from_json(SNAPSHOT).unwrap();
        assert_eq!(ctx.search_query.data.product_search.products.len(), 2);
        assert_eq!(ctx.category_root().unwrap().name, "Apparel");
        assert_eq!(ctx.facets.price_ranges.len(), 2);
    }

    #[test]
    fn test_query_state_carries_page() {
        let ctx = SearchContext::from_json(SNAPSHOT).unwrap();
        let state = ctx.query_state();
        assert_eq!(state.page(), 3);
        assert!(state.map_tokens().is_free_text());
        assert_eq!(state.filters(), *ctx.filters());
    }

    #[test]
    fn test_price_slider_from_snapshot() {
        let ctx = SearchContext::from_json(SNAPSHOT).unwrap();
        let slider = ctx.price_slider().unwrap();
        assert_eq!((slider.domain.min, slider.domain.max), (10, 200));
        assert_eq!((slider.value.low, slider.value.high), (10, 200));
    }

    #[test]
    fn test_result_window_from_snapshot() {
        let ctx = SearchContext::from_json(SNAPSHOT).unwrap();
        let window = ctx.result_window(24).unwrap();
        assert_eq!(window.max_items_per_page(), 10);
        assert_eq!((window.from(), window.to()), (20, 22));
        assert_eq!(window.filters().query.as_deref(), Some("shoes"));
    }

    #[test]
    fn test_empty_snapshot_uses_defaults() {
        let ctx = SearchContext::from_json("{}").unwrap();
        assert!(ctx.category_root().is_none());
        assert!(ctx.price_slider().is_none());

        let window = ctx.result_window(10).unwrap();
        assert_eq!((window.from(), window.to()), (0, 0));
        assert!(!window.has_previous());
        assert!(!window.has_next());
    }
}
