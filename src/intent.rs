//! Navigation intents
//!
//! An intent is plain data describing how the active facet selection should
//! change. The host turns it into its own query representation; this crate
//! never encodes facets into the map/query strings itself.

use crate::category::FacetRef;
use serde::{Deserialize, Serialize};

/// Facets to add to and remove from the active selection
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NavigationIntent {
    #[serde(default)]
    pub facets_to_add: Vec<FacetRef>,
    #[serde(default)]
    pub facets_to_remove: Vec<FacetRef>,
}

impl NavigationIntent {
    /// Navigate into `facets`
    #[must_use]
    pub const fn select(facets: Vec<FacetRef>) -> Self {
        Self {
            facets_to_add: facets,
            facets_to_remove: Vec::new(),
        }
    }

    /// Drop `facets` from the selection
    #[must_use]
    pub const fn unselect(facets: Vec<FacetRef>) -> Self {
        Self {
            facets_to_add: Vec::new(),
            facets_to_remove: facets,
        }
    }

    /// True when applying the intent would change nothing
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.facets_to_add.is_empty() && self.facets_to_remove.is_empty()
    }
}
