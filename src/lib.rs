//! Facetnav - A faceted navigation state engine
//!
//! This library turns a search context snapshot (category tree, range facets,
//! a materialised page of results) into navigation intents and query patches:
//! category trail selection/unselection, debounced price range commits and a
//! bidirectional "fetch more" result window.

use thiserror::Error;

pub mod category;
pub mod cli;
pub mod commands;
pub mod config;
pub mod context;
pub mod intent;
pub mod logging;
pub mod output;
pub mod query;
pub mod range;
pub mod window;

#[cfg(test)]
pub mod testing;

pub use category::{Category, CategoryTrail, FacetRef, SelectedPath, resolve_selected_path};
pub use context::SearchContext;
pub use intent::NavigationIntent;
pub use query::{QueryMutator, QueryPatch, QueryState};
pub use window::{PageFetcher, ResultWindow};

/// Error enum, contains all failure states of the program
#[derive(Debug, Error)]
pub enum NavError {
    /// Category navigation error
    #[error("Category error: {0}")]
    CategoryError(#[from] category::CategoryError),
    /// Range facet error
    #[error("Range error: {0}")]
    RangeError(#[from] range::RangeParseError),
    /// Result window construction error
    #[error("Window error: {0}")]
    WindowError(#[from] window::WindowError),
    /// Page fetch error
    #[error("Fetch error: {0}")]
    FetchError(#[from] window::FetchError),
    /// Represents a configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] ::config::ConfigError),
    /// Represents an I/O error
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
    /// Snapshot (de)serialization error
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
    /// Invalid input error
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
