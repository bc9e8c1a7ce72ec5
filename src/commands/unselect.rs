//! Unselect command - intent for clicking a trail entry

use super::category_root;
use crate::category::{CategoryTrail, resolve_selected_path};
use crate::intent::NavigationIntent;
use crate::{NavError, SearchContext, output};
use serde::Serialize;

type Result<T> = std::result::Result<T, NavError>;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct UnselectReport {
    intent: NavigationIntent,
    path_after: Vec<String>,
}

/// Execute the unselect command
///
/// # Errors
/// Returns an error if the snapshot has no category tree, the index is past
/// the end of the path, or index 0 is given while the root is not removable.
pub fn execute(ctx: &SearchContext, index: usize, json: bool) -> Result<()> {
    let root = category_root(ctx)?;
    let state = ctx.query_state();
    let trail = CategoryTrail::new(root, &state.map_tokens(), false);

    let intent = trail.unselect_at(index)?;
    let next = trail.path().apply_unselect(index)?;
    let path_after = resolve_selected_path(&next)
        .iter()
        .map(|category| category.name.clone())
        .collect();

    let report = UnselectReport { intent, path_after };

    if json {
        return output::print_json(&report);
    }

    println!("{}", output::intent(&report.intent));
    let names: Vec<&str> = report.path_after.iter().map(String::as_str).collect();
    println!("{} {}", output::header("Path after:"), output::breadcrumb(&names, false));
    Ok(())
}
