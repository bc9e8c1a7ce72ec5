//! Capacity-bounded disclosure of child categories
//!
//! Long child lists are cut after `max_items` entries and the remainder is
//! hidden behind a "show more" action. The cut only happens when it would
//! hide more than `threshold` items; hiding one or two entries behind a toggle
//! costs more space than it saves.

use serde::{Deserialize, Serialize};

/// Bounds for the child list disclosure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisclosurePolicy {
    /// Items shown before the "show more" action
    pub max_items: usize,
    /// Minimum number of hidden items that justifies collapsing
    pub threshold: usize,
}

impl Default for DisclosurePolicy {
    fn default() -> Self {
        Self {
            max_items: 8,
            threshold: 2,
        }
    }
}

impl DisclosurePolicy {
    #[must_use]
    pub const fn new(max_items: usize, threshold: usize) -> Self {
        Self {
            max_items,
            threshold,
        }
    }

    /// Split `items` into visible and hidden parts
    #[must_use]
    pub fn split<'a, T>(&self, items: &'a [T]) -> Disclosure<'a, T> {
        let cut = if items.len() > self.max_items.saturating_add(self.threshold) {
            self.max_items
        } else {
            items.len()
        };

        Disclosure { items, cut }
    }
}

/// Result of applying a `DisclosurePolicy` to a list
#[derive(Debug)]
pub struct Disclosure<'a, T> {
    items: &'a [T],
    cut: usize,
}

impl<'a, T> Disclosure<'a, T> {
    /// Items rendered directly
    #[must_use]
    pub fn visible(&self) -> &'a [T] {
        &self.items[..self.cut]
    }

    /// Items behind the "show more" action
    #[must_use]
    pub fn hidden(&self) -> &'a [T] {
        &self.items[self.cut..]
    }

    /// Whether a "show more" action is needed
    #[must_use]
    pub fn has_more(&self) -> bool {
        self.cut < self.items.len()
    }

    /// Every item, as shown once expanded
    #[must_use]
    pub const fn all(&self) -> &'a [T] {
        self.items
    }
}
