//! Range facets (price filter)
//!
//! - `codec`: bucket slugs, domain folding, active value decoding and change
//!   encoding
//! - `debounce`: trailing-edge debouncing of slider changes

pub mod codec;
pub mod debounce;
pub mod error;

pub use codec::{
    ActiveRange, RangeDomain, RangeFacetOption, RangeSlider, encode_change, encode_slug,
    parse_active, parse_domain, parse_slug,
};
pub use debounce::{DEFAULT_DEBOUNCE, RangeDebouncer};
pub use error::RangeParseError;
