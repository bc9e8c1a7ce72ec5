//! Query state owned by the hosting runtime
//!
//! The engine reads the current query (free text, map tokens, ordering, price
//! range, page) and writes back partial patches through a `QueryMutator`.
//!
//! # Map tokens
//!
//! The `map` parameter is a comma-delimited list with one token per active
//! facet term. The `ft` token marks an active free-text search, which makes
//! the root category optional.

pub mod patch;

pub use patch::{QueryKey, QueryPatch};

use serde::{Deserialize, Serialize};
use std::sync::Mutex;
use tokio::sync::mpsc::UnboundedSender;
use tracing::warn;

/// Map token marking an active free-text search
pub const FREE_TEXT_TOKEN: &str = "ft";

/// Navigable query state
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryState {
    #[serde(default)]
    pub query: Option<String>,
    #[serde(default)]
    pub map: Option<String>,
    #[serde(default)]
    pub order_by: Option<String>,
    #[serde(default)]
    pub price_range: Option<String>,
    #[serde(default)]
    pub page: Option<u32>,
}

impl QueryState {
    /// Tokens of the `map` parameter
    #[must_use]
    pub fn map_tokens(&self) -> MapTokens<'_> {
        MapTokens::parse(self.map.as_deref().unwrap_or_default())
    }

    /// Current 1-based page (missing or zero means the first page)
    #[must_use]
    pub fn page(&self) -> u32 {
        self.page.unwrap_or(1).max(1)
    }

    /// Filter variables that define the result set
    #[must_use]
    pub fn filters(&self) -> FilterVars {
        FilterVars {
            query: self.query.clone(),
            map: self.map.clone(),
            order_by: self.order_by.clone(),
            price_range: self.price_range.clone(),
        }
    }

    /// Merge `patch` into this state
    ///
    /// A page value that is not a positive integer removes the page.
    pub fn apply(&mut self, patch: &QueryPatch) {
        for (key, value) in patch.iter() {
            let value = value.map(str::to_string);
            match key {
                QueryKey::Query => self.query = value,
                QueryKey::Map => self.map = value,
                QueryKey::OrderBy => self.order_by = value,
                QueryKey::PriceRange => self.price_range = value,
                QueryKey::Page => {
                    self.page = value.and_then(|page| match page.parse::<u32>() {
                        Ok(page) if page > 0 => Some(page),
                        _ => {
                            warn!(page = %page, "ignoring invalid page in query patch");
                            None
                        }
                    });
                }
            }
        }
    }
}

/// Parsed comma-delimited `map` tokens
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MapTokens<'a> {
    tokens: Vec<&'a str>,
}

impl<'a> MapTokens<'a> {
    #[must_use]
    pub fn parse(map: &'a str) -> Self {
        let tokens = map
            .split(',')
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .collect();
        Self { tokens }
    }

    #[must_use]
    pub fn contains(&self, token: &str) -> bool {
        self.tokens.contains(&token)
    }

    /// Whether a free-text search is active
    #[must_use]
    pub fn is_free_text(&self) -> bool {
        self.contains(FREE_TEXT_TOKEN)
    }

    #[must_use]
    pub fn as_slice(&self) -> &[&'a str] {
        &self.tokens
    }
}

/// Filter variables captured when a fetch is triggered
///
/// Two fetches belong to the same result set exactly when their filter
/// variables are equal.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterVars {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub map: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order_by: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_range: Option<String>,
}

/// Capability to merge a patch into the navigable query (`setQuery`)
pub trait QueryMutator: Send + Sync {
    fn set_query(&self, patch: QueryPatch);
}

impl QueryMutator for Mutex<QueryState> {
    fn set_query(&self, patch: QueryPatch) {
        match self.lock() {
            Ok(mut state) => state.apply(&patch),
            Err(poisoned) => poisoned.into_inner().apply(&patch),
        }
    }
}

impl QueryMutator for UnboundedSender<QueryPatch> {
    fn set_query(&self, patch: QueryPatch) {
        if self.send(patch).is_err() {
            warn!("query patch receiver dropped; patch discarded");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_tokens_free_text() {
        assert!(MapTokens::parse("ft,c,c").is_free_text());
        assert!(MapTokens::parse("c, ft").is_free_text());
        assert!(!MapTokens::parse("c,c").is_free_text());
        assert!(!MapTokens::parse("").is_free_text());
        // token match, not substring match
        assert!(!MapTokens::parse("fts,c").is_free_text());
    }

    #[test]
    fn test_map_tokens_skip_empty() {
        assert_eq!(MapTokens::parse("c,,b,").as_slice(), &["c", "b"]);
    }

    #[test]
    fn test_page_defaults_to_first() {
        let mut state = QueryState::default();
        assert_eq!(state.page(), 1);
        state.page = Some(0);
        assert_eq!(state.page(), 1);
        state.page = Some(4);
        assert_eq!(state.page(), 4);
    }

    #[test]
    fn test_apply_sets_and_removes() {
        let mut state = QueryState {
            query: Some("shoes".to_string()),
            map: Some("ft".to_string()),
            page: Some(3),
            ..Default::default()
        };

        let patch = QueryPatch::new()
            .set(QueryKey::PriceRange, "10 TO 20")
            .remove(QueryKey::Page);
        state.apply(&patch);

        assert_eq!(state.price_range.as_deref(), Some("10 TO 20"));
        assert_eq!(state.page, None);
        assert_eq!(state.query.as_deref(), Some("shoes"));
        assert_eq!(state.map.as_deref(), Some("ft"));
    }

    #[test]
    fn test_apply_invalid_page_removes_it() {
        let mut state = QueryState {
            page: Some(2),
            ..Default::default()
        };
        state.apply(&QueryPatch::new().set(QueryKey::Page, "abc"));
        assert_eq!(state.page, None);

        state.apply(&QueryPatch::new().set(QueryKey::Page, "5"));
        assert_eq!(state.page, Some(5));
    }

    #[test]
    fn test_filters_capture_variables() {
        let state = QueryState {
            query: Some("q".to_string()),
            map: Some("ft".to_string()),
            order_by: Some("OrderByPriceASC".to_string()),
            price_range: Some("1 TO 2".to_string()),
            page: Some(2),
        };
        let filters = state.filters();
        assert_eq!(filters.query.as_deref(), Some("q"));
        assert_eq!(filters.order_by.as_deref(), Some("OrderByPriceASC"));
        assert_eq!(filters.price_range.as_deref(), Some("1 TO 2"));
    }

    #[test]
    fn test_mutex_mutator_applies_patch() {
        let state = Mutex::new(QueryState::default());
        state.set_query(QueryPatch::new().set(QueryKey::OrderBy, "OrderByNameASC"));
        assert_eq!(
            state.lock().unwrap().order_by.as_deref(),
            Some("OrderByNameASC")
        );
    }

    #[test]
    fn test_channel_mutator_forwards_patch() {
        let (tx, mut rx) = tokio::sync::mpsc::unbounded_channel();
        tx.set_query(QueryPatch::new().remove(QueryKey::Page));
        assert_eq!(rx.try_recv().unwrap(), QueryPatch::new().remove(QueryKey::Page));
    }
}
