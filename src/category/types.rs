//! Category tree data types
//!
//! A `Category` is a read-only snapshot of one node of the category facet
//! tree returned by the search backend. Navigation code never mutates a tree
//! in place; it derives paths from it and emits new facet selections.

use super::error::CategoryError;
use serde::{Deserialize, Serialize};

/// Node in the category facet tree
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Opaque stable identifier
    #[serde(default)]
    pub id: Option<String>,

    /// Display label
    #[serde(default)]
    pub name: String,

    /// Whether this node is part of the active selection
    #[serde(default)]
    pub selected: bool,

    /// Ordered children, absent for leaves
    #[serde(default)]
    pub children: Option<Vec<Category>>,
}

impl Category {
    /// Create an unselected leaf category
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            name: name.into(),
            selected: false,
            children: None,
        }
    }

    /// Set the selection flag
    #[must_use]
    pub const fn with_selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }

    /// Replace the children of this node
    #[must_use]
    pub fn with_children(mut self, children: Vec<Self>) -> Self {
        self.children = Some(children);
        self
    }

    /// Children in backend order (empty slice for leaves)
    #[must_use]
    pub fn children(&self) -> &[Self] {
        self.children.as_deref().unwrap_or_default()
    }

    /// Whether this node has at least one child
    #[must_use]
    pub fn has_children(&self) -> bool {
        !self.children().is_empty()
    }

    /// First selected child, if any
    ///
    /// Only one child per level should be selected; when the backend breaks
    /// that rule the earliest one in sequence order wins.
    #[must_use]
    pub fn selected_child(&self) -> Option<&Self> {
        self.children().iter().find(|child| child.selected)
    }
}

/// Reference to a category facet carried by navigation intents
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FacetRef {
    pub id: String,
    pub name: String,
}

impl TryFrom<&Category> for FacetRef {
    type Error = CategoryError;

    fn try_from(category: &Category) -> Result<Self, Self::Error> {
        let id = category
            .id
            .clone()
            .ok_or_else(|| CategoryError::MissingId(category.name.clone()))?;

        Ok(Self {
            id,
            name: category.name.clone(),
        })
    }
}
