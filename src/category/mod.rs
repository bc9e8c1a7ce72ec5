//! Category facet navigation
//!
//! Resolves the selected root-to-leaf path of a category tree and turns
//! interaction with the rendered trail into navigation intents.
//!
//! # Architecture
//!
//! - `types`: tree node (`Category`) and intent payload (`FacetRef`)
//! - `path`: pure path resolution and unselection (`SelectedPath`)
//! - `trail`: root-toggle policy and click handling (`CategoryTrail`)
//! - `disclosure`: "show more" split of long child lists

pub mod disclosure;
pub mod error;
pub mod path;
pub mod trail;
pub mod types;

pub use disclosure::{Disclosure, DisclosurePolicy};
pub use error::CategoryError;
pub use path::{SelectedPath, resolve_selected_path};
pub use trail::{CategoryTrail, TrailEntry};
pub use types::{Category, FacetRef};
