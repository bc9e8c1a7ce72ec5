//! Category navigation error types
//!
//! These errors guard preconditions of the category trail. They signal a
//! programming error in the host (an intent built from a category without an
//! id, an unselect index past the end of the path) rather than a condition
//! users can recover from.

use thiserror::Error;

/// Category navigation errors
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CategoryError {
    /// Category has no identifier and cannot be referenced by an intent
    #[error("Category '{0}' has no identifier")]
    MissingId(String),

    /// Unselect index is past the end of the selected path
    #[error("Unselect index {index} is out of range for a path of length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    /// No child of the deepest selected node has the requested id
    #[error("No child category with id '{0}'")]
    UnknownChild(String),

    /// Root category is load-bearing for the current navigation
    #[error("Root category cannot be deselected without an active free-text search")]
    RootNotDisableable,
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod error_tests;
