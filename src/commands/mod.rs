//! Command implementations
//!
//! Each command is a module with an execute function that takes a loaded
//! search context snapshot plus parsed CLI args and prints the result.

pub mod price;
pub mod select_child;
pub mod slide;
pub mod trail;
pub mod unselect;
pub mod window;

// Re-export execute functions for convenience
pub use price::execute as price;
pub use select_child::execute as select_child;
pub use slide::execute as slide;
pub use trail::execute as trail;
pub use unselect::execute as unselect;
pub use window::execute as window;

use crate::category::Category;
use crate::{NavError, SearchContext};

/// Root of the snapshot's category tree
fn category_root(ctx: &SearchContext) -> Result<&Category, NavError> {
    ctx.category_root()
        .ok_or_else(|| NavError::InvalidInput("Snapshot has no category tree".into()))
}
