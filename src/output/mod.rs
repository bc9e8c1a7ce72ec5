//! Output formatting for CLI display
//!
//! Human-readable renderings of trails, intents, patches and window state.
//! With `--json` the commands print serde output through `print_json` instead.

use crate::NavError;
use crate::category::{Category, FacetRef};
use crate::intent::NavigationIntent;
use crate::query::QueryPatch;
use crate::window::WindowView;
use colored::Colorize;
use serde::Serialize;

/// Print `value` as pretty JSON on stdout
///
/// # Errors
///
/// Returns `NavError::JsonError` if `value` cannot be serialized.
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<(), NavError> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Section header
#[must_use]
pub fn header(title: &str) -> String {
    title.bold().to_string()
}

/// Category with its id, highlighted when selected
#[must_use]
pub fn category(category: &Category) -> String {
    let id = category.id.as_deref().unwrap_or("?");
    let label = format!("{} ({id})", category.name);
    if category.selected {
        label.green().to_string()
    } else {
        label
    }
}

/// Breadcrumb of a selected path, root marked with `×` when it can be cleared
#[must_use]
pub fn breadcrumb(names: &[&str], root_close: bool) -> String {
    let mut parts: Vec<String> = names.iter().map(|name| (*name).to_string()).collect();
    if root_close && let Some(root) = parts.first_mut() {
        *root = format!("{root} {}", "×".red());
    }
    let separator = " › ".dimmed().to_string();
    parts.join(separator.as_str())
}

fn facet_list(facets: &[FacetRef]) -> String {
    facets
        .iter()
        .map(|facet| format!("{} ({})", facet.name, facet.id))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Both sides of an intent, one per line
#[must_use]
pub fn intent(intent: &NavigationIntent) -> String {
    if intent.is_empty() {
        return "  (no change)".dimmed().to_string();
    }

    let mut lines = Vec::new();
    if !intent.facets_to_add.is_empty() {
        lines.push(format!("  {} {}", "+".green(), facet_list(&intent.facets_to_add)));
    }
    if !intent.facets_to_remove.is_empty() {
        lines.push(format!("  {} {}", "-".red(), facet_list(&intent.facets_to_remove)));
    }
    lines.join("\n")
}

/// Query patch, removed keys in red
#[must_use]
pub fn patch(patch: &QueryPatch) -> String {
    patch
        .iter()
        .map(|(key, value)| match value {
            Some(value) => format!("{key}={}", value.cyan()),
            None => format!("-{key}").red().to_string(),
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Pagination control state
#[must_use]
pub fn window(view: &WindowView) -> String {
    let mut line = format!(
        "items {}..{} of {}",
        view.from, view.to, view.records_filtered
    );
    if view.has_previous {
        line.push_str(&format!(" {}", "[show previous]".yellow()));
    }
    if view.has_next {
        line.push_str(&format!(" {}", "[show more]".yellow()));
    }
    if view.loading {
        line.push_str(&format!(" {}", "(loading)".dimmed()));
    }
    line
}
