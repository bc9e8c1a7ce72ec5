//! Select-child command - intent for choosing a child of the last trail entry

use super::category_root;
use crate::category::CategoryTrail;
use crate::{NavError, SearchContext, output};

type Result<T> = std::result::Result<T, NavError>;

/// Execute the select-child command
///
/// # Errors
/// Returns an error if the snapshot has no category tree or `child_id` is not
/// a child of the last selected category.
pub fn execute(ctx: &SearchContext, child_id: &str, shallow: bool, json: bool) -> Result<()> {
    let root = category_root(ctx)?;
    let state = ctx.query_state();
    let trail = CategoryTrail::new(root, &state.map_tokens(), shallow);

    let intent = trail.select_child_by_id(child_id)?;

    if json {
        output::print_json(&intent)
    } else {
        println!("{}", output::intent(&intent));
        Ok(())
    }
}
