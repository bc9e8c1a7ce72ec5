//! Result windows with bidirectional "fetch more"
//!
//! - `fetch`: records, fetch requests and the injected `PageFetcher`
//! - `state`: the window state machine and its merge rules

pub mod error;
pub mod fetch;
pub mod state;

pub use error::WindowError;
pub use fetch::{
    FetchError, FetchRequest, FetchedPage, PageFetcher, Product, Record, StaticCatalogFetcher,
};
pub use state::{
    Direction, FetchTicket, MergeOutcome, ResultWindow, ResultWindowBuilder, WindowView,
};
