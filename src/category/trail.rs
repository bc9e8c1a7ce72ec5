//! Category trail: the interactive view over a selected path
//!
//! The trail turns clicks on the rendered category filter into navigation
//! intents:
//!
//! - **Root**: only actionable while a free-text search is active. In shallow
//!   mode (category shown as a suggestion) clicking it navigates into it;
//!   otherwise it removes the whole path.
//! - **Selected entries**: entry `k` (path index `k`, `k >= 1`) removes
//!   `path[k..]`.
//! - **Children of the last node**: selecting one navigates into it, together
//!   with the root in shallow mode.

use super::disclosure::{Disclosure, DisclosurePolicy};
use super::error::CategoryError;
use super::path::SelectedPath;
use super::types::{Category, FacetRef};
use crate::intent::NavigationIntent;
use crate::query::MapTokens;

/// Interactive state of one rendered category filter
#[derive(Debug, Clone)]
pub struct CategoryTrail<'a> {
    path: SelectedPath<'a>,
    shallow: bool,
    can_disable_root: bool,
    disclosure: DisclosurePolicy,
}

/// Selected, removable entry of the trail
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrailEntry<'a> {
    /// Path index passed to `CategoryTrail::unselect_at`
    pub index: usize,
    pub category: &'a Category,
}

impl<'a> CategoryTrail<'a> {
    /// Build the trail for `root` under the current map tokens
    #[must_use]
    pub fn new(root: &'a Category, map: &MapTokens<'_>, shallow: bool) -> Self {
        Self {
            path: SelectedPath::resolve(root),
            shallow,
            can_disable_root: map.is_free_text(),
            disclosure: DisclosurePolicy::default(),
        }
    }

    /// Use a custom disclosure policy for the child list
    #[must_use]
    pub const fn with_disclosure(mut self, disclosure: DisclosurePolicy) -> Self {
        self.disclosure = disclosure;
        self
    }

    #[must_use]
    pub const fn path(&self) -> &SelectedPath<'a> {
        &self.path
    }

    #[must_use]
    pub fn root(&self) -> &'a Category {
        self.path.root()
    }

    #[must_use]
    pub const fn is_shallow(&self) -> bool {
        self.shallow
    }

    /// Whether the root may be deselected (free-text search active)
    #[must_use]
    pub const fn can_disable_root(&self) -> bool {
        self.can_disable_root
    }

    /// Whether the root is rendered with a close marker
    #[must_use]
    pub const fn shows_root_close(&self) -> bool {
        !self.shallow && self.can_disable_root
    }

    /// Intent for a click on the root, `None` when the root is not actionable
    ///
    /// # Errors
    ///
    /// Returns `CategoryError::MissingId` if a referenced category has no id.
    pub fn click_root(&self) -> Result<Option<NavigationIntent>, CategoryError> {
        if !self.can_disable_root {
            return Ok(None);
        }

        if self.shallow {
            let root = FacetRef::try_from(self.root())?;
            Ok(Some(NavigationIntent::select(vec![root])))
        } else {
            self.unselect_at(0).map(Some)
        }
    }

    /// Entries for every selected node below the root
    #[must_use]
    pub fn entries(&self) -> Vec<TrailEntry<'a>> {
        self.path
            .iter()
            .enumerate()
            .skip(1)
            .map(|(index, category)| TrailEntry { index, category })
            .collect()
    }

    /// Intent removing `path[index..]`
    ///
    /// # Errors
    ///
    /// Returns `CategoryError::RootNotDisableable` for index 0 without an
    /// active free-text search, `CategoryError::IndexOutOfRange` for an index
    /// past the path and `CategoryError::MissingId` for nodes without id.
    pub fn unselect_at(&self, index: usize) -> Result<NavigationIntent, CategoryError> {
        if index == 0 && !self.can_disable_root {
            return Err(CategoryError::RootNotDisableable);
        }

        let facets = self.path.unselect_facets(index)?;
        Ok(NavigationIntent::unselect(facets))
    }

    /// Children of the deepest selected node split for display
    ///
    /// `None` when that node has no children and nothing should render.
    #[must_use]
    pub fn child_options(&self) -> Option<Disclosure<'a, Category>> {
        let last = self.path.last();
        last.has_children()
            .then(|| self.disclosure.split(last.children()))
    }

    /// Intent for a click on `child`
    ///
    /// # Errors
    ///
    /// Returns `CategoryError::MissingId` if the child or, in shallow mode,
    /// the root has no id.
    pub fn select_child(&self, child: &Category) -> Result<NavigationIntent, CategoryError> {
        let child = FacetRef::try_from(child)?;

        let facets = if self.shallow {
            vec![FacetRef::try_from(self.root())?, child]
        } else {
            vec![child]
        };

        Ok(NavigationIntent::select(facets))
    }

    /// Intent for a click on the child with id `child_id`
    ///
    /// # Errors
    ///
    /// Returns `CategoryError::UnknownChild` when no child of the deepest
    /// selected node carries `child_id`.
    pub fn select_child_by_id(&self, child_id: &str) -> Result<NavigationIntent, CategoryError> {
        let child = self
            .path
            .last()
            .children()
            .iter()
            .find(|child| child.id.as_deref() == Some(child_id))
            .ok_or_else(|| CategoryError::UnknownChild(child_id.to_string()))?;

        self.select_child(child)
    }
}
