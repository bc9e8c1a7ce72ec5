//! Selected category path resolution
//!
//! The selected path is a prefix walk of the category tree: it starts at the
//! root (always included, whether or not the root itself is flagged) and
//! follows the first selected child of each node until a level has no
//! selected child or no children at all.
//!
//! ```text
//! Root                 path = [Root, Clothing, Shoes]
//! ├─ Clothing *
//! │  ├─ Shirts
//! │  └─ Shoes *        unselect(1) → [Clothing, Shoes]
//! └─ Toys
//! ```
//!
//! Paths borrow from an immutable tree snapshot and are recomputed whenever
//! the tree changes.

use super::error::CategoryError;
use super::types::{Category, FacetRef};

/// Ordered root-to-leaf walk of selected categories
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedPath<'a> {
    nodes: Vec<&'a Category>,
}

impl<'a> SelectedPath<'a> {
    /// Walk `root` following selected children
    #[must_use]
    pub fn resolve(root: &'a Category) -> Self {
        let mut nodes = vec![root];
        let mut current = root;

        while let Some(child) = current.selected_child() {
            nodes.push(child);
            current = child;
        }

        Self { nodes }
    }

    /// Number of nodes in the path (at least 1)
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always false: the root is part of every path
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// The root the walk started from
    #[must_use]
    pub fn root(&self) -> &'a Category {
        self.nodes[0]
    }

    /// Deepest selected node (the root when nothing is selected)
    #[must_use]
    pub fn last(&self) -> &'a Category {
        self.nodes[self.nodes.len() - 1]
    }

    /// Node at `index`
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&'a Category> {
        self.nodes.get(index).copied()
    }

    /// Nodes in root-to-leaf order
    #[must_use]
    pub fn as_slice(&self) -> &[&'a Category] {
        &self.nodes
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a Category> + '_ {
        self.nodes.iter().copied()
    }

    /// Nodes to drop when deselecting at `index`: `path[index..]`
    ///
    /// Index 0 removes the whole path including the root; whether that is
    /// allowed is decided by the caller (see `CategoryTrail`).
    ///
    /// # Errors
    ///
    /// Returns `CategoryError::IndexOutOfRange` if `index >= len()`.
    pub fn unselect(&self, index: usize) -> Result<&[&'a Category], CategoryError> {
        if index >= self.nodes.len() {
            return Err(CategoryError::IndexOutOfRange {
                index,
                len: self.nodes.len(),
            });
        }
        Ok(&self.nodes[index..])
    }

    /// Facet references for `unselect(index)`
    ///
    /// # Errors
    ///
    /// Returns `CategoryError::IndexOutOfRange` for a bad index and
    /// `CategoryError::MissingId` if a removed node has no identifier.
    pub fn unselect_facets(&self, index: usize) -> Result<Vec<FacetRef>, CategoryError> {
        self.unselect(index)?
            .iter()
            .map(|category| FacetRef::try_from(*category))
            .collect()
    }

    /// New tree equal to the root with the `unselect(index)` removal applied
    ///
    /// Only the nodes at path positions `index..` lose their flag; nodes
    /// off the path are copied as they are.
    ///
    /// # Errors
    ///
    /// Returns `CategoryError::IndexOutOfRange` if `index >= len()`.
    pub fn apply_unselect(&self, index: usize) -> Result<Category, CategoryError> {
        self.unselect(index)?;
        Ok(rebuild_along(&self.nodes, 0, index))
    }
}

/// Copy of `nodes[depth]`, clearing `selected` on path positions `>= index`
fn rebuild_along(nodes: &[&Category], depth: usize, index: usize) -> Category {
    let node = nodes[depth];
    let next = nodes.get(depth + 1).copied();

    Category {
        id: node.id.clone(),
        name: node.name.clone(),
        selected: node.selected && depth < index,
        children: node.children.as_ref().map(|children| {
            children
                .iter()
                .map(|child| match next {
                    Some(next) if std::ptr::eq(child, next) => {
                        rebuild_along(nodes, depth + 1, index)
                    }
                    _ => child.clone(),
                })
                .collect()
        }),
    }
}

/// Resolve the selected path of `root`
#[must_use]
pub fn resolve_selected_path(root: &Category) -> SelectedPath<'_> {
    SelectedPath::resolve(root)
}
