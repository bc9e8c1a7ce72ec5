//! Trail command - show the selected category path and child options

use super::category_root;
use crate::category::{Category, CategoryTrail};
use crate::config::NavConfig;
use crate::{NavError, SearchContext, output};
use serde::Serialize;

type Result<T> = std::result::Result<T, NavError>;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct TrailNode<'a> {
    index: usize,
    id: Option<&'a str>,
    name: &'a str,
}

impl<'a> TrailNode<'a> {
    fn new(index: usize, category: &'a Category) -> Self {
        Self {
            index,
            id: category.id.as_deref(),
            name: &category.name,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct TrailReport<'a> {
    shallow: bool,
    can_disable_root: bool,
    shows_root_close: bool,
    path: Vec<TrailNode<'a>>,
    children: Vec<TrailNode<'a>>,
    hidden_children: usize,
}

/// Execute the trail command
///
/// # Errors
/// Returns an error if the snapshot has no category tree.
pub fn execute(
    ctx: &SearchContext,
    config: &NavConfig,
    shallow: bool,
    show_all: bool,
    json: bool,
) -> Result<()> {
    let root = category_root(ctx)?;
    let state = ctx.query_state();
    let trail = CategoryTrail::new(root, &state.map_tokens(), shallow).with_disclosure(config.disclosure);

    let (children, hidden) = match trail.child_options() {
        Some(options) if show_all => (options.all(), 0),
        Some(options) => (options.visible(), options.hidden().len()),
        None => (&[][..], 0),
    };

    let report = TrailReport {
        shallow,
        can_disable_root: trail.can_disable_root(),
        shows_root_close: trail.shows_root_close(),
        path: trail
            .path()
            .iter()
            .enumerate()
            .map(|(index, category)| TrailNode::new(index, category))
            .collect(),
        children: children
            .iter()
            .enumerate()
            .map(|(index, category)| TrailNode::new(index, category))
            .collect(),
        hidden_children: hidden,
    };

    if json {
        return output::print_json(&report);
    }

    let names: Vec<&str> = report.path.iter().map(|node| node.name).collect();
    println!("{}", output::breadcrumb(&names, report.shows_root_close));

    for entry in trail.entries() {
        println!("  [{}] {}", entry.index, output::category(entry.category));
    }

    if !children.is_empty() {
        println!("{}", output::header("Children:"));
        for child in children {
            println!("  {}", output::category(child));
        }
        if hidden > 0 {
            println!("  … {hidden} more (use --all)");
        }
    }
    Ok(())
}
