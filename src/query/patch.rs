//! Partial query updates
//!
//! A `QueryPatch` mirrors the host runtime's `setQuery(patch)` contract: each
//! key is either set to a new value or removed (`None`), and keys absent from
//! the patch keep their current value.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Keys of the navigable query state
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum QueryKey {
    Query,
    Map,
    OrderBy,
    PriceRange,
    Page,
}

impl QueryKey {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Query => "query",
            Self::Map => "map",
            Self::OrderBy => "orderBy",
            Self::PriceRange => "priceRange",
            Self::Page => "page",
        }
    }
}

impl fmt::Display for QueryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Set-or-remove updates keyed by `QueryKey`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QueryPatch {
    entries: BTreeMap<QueryKey, Option<String>>,
}

impl QueryPatch {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `key` to `value`
    #[must_use]
    pub fn set(mut self, key: QueryKey, value: impl Into<String>) -> Self {
        self.entries.insert(key, Some(value.into()));
        self
    }

    /// Remove `key` from the query
    #[must_use]
    pub fn remove(mut self, key: QueryKey) -> Self {
        self.entries.insert(key, None);
        self
    }

    /// Entry for `key`: `None` if untouched, `Some(None)` if removed
    #[must_use]
    pub fn get(&self, key: QueryKey) -> Option<Option<&str>> {
        self.entries.get(&key).map(Option::as_deref)
    }

    /// Whether the patch removes `key`
    #[must_use]
    pub fn removes(&self, key: QueryKey) -> bool {
        matches!(self.entries.get(&key), Some(None))
    }

    pub fn iter(&self) -> impl Iterator<Item = (QueryKey, Option<&str>)> {
        self.entries.iter().map(|(key, value)| (*key, value.as_deref()))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl fmt::Display for QueryPatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self
            .iter()
            .map(|(key, value)| match value {
                Some(value) => format!("{key}={value}"),
                None => format!("-{key}"),
            })
            .collect();
        write!(f, "{}", parts.join(" "))
    }
}
