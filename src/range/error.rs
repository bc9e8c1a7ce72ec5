//! Range facet parse errors
//!
//! Both grammars are backend-defined: bucket slugs `de-<int>-a-<int>` and
//! active values `<int> TO <int>`. A string that does not match is not
//! applicable; callers drop the option or fall back to the domain bounds.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RangeParseError {
    /// Slug does not follow `de-<int>-a-<int>`
    #[error("Invalid range slug: {0}")]
    InvalidSlug(String),

    /// Active value does not follow `<int> TO <int>`
    #[error("Invalid range value: {0}")]
    InvalidValue(String),
}
