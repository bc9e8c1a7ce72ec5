//! Result window construction errors

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum WindowError {
    /// Page size must be positive
    #[error("maxItemsPerPage must be at least 1")]
    InvalidPageSize,

    /// Required builder field was not provided
    #[error("Missing window field: {0}")]
    MissingField(&'static str),
}
