//! Window command - grow the result window against a catalog file

use crate::config::NavConfig;
use crate::window::{Direction, MergeOutcome, Product, Record, StaticCatalogFetcher, WindowView};
use crate::{NavError, SearchContext, output};
use serde::Serialize;
use std::fs;
use std::path::Path;

type Result<T> = std::result::Result<T, NavError>;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Step {
    direction: Direction,
    outcome: MergeOutcome,
    window: WindowView,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct WindowReport {
    initial: WindowView,
    steps: Vec<Step>,
    records: Vec<String>,
}

/// Execute the window command
///
/// Fetches up to `previous` pages backwards, then up to `next` pages
/// forwards, stopping early in a direction once nothing is left to fetch.
///
/// # Errors
/// Returns an error if the catalog cannot be read or parsed or the snapshot
/// does not describe a valid window.
pub async fn execute(
    ctx: &SearchContext,
    config: &NavConfig,
    catalog: &Path,
    previous: usize,
    next: usize,
    json: bool,
) -> Result<()> {
    let records: Vec<Product> = serde_json::from_str(&fs::read_to_string(catalog)?)?;
    let fetcher = StaticCatalogFetcher::new(records);

    let mut window = ctx.result_window(config.max_items_per_page)?;
    let initial = window.view();
    let mut steps = Vec::new();

    let plan = [(Direction::Previous, previous), (Direction::Next, next)];
    for (direction, count) in plan {
        for _ in 0..count {
            let outcome = match direction {
                Direction::Previous => window.fetch_previous(&fetcher).await,
                Direction::Next => window.fetch_next(&fetcher).await,
            };
            steps.push(Step {
                direction,
                outcome,
                window: window.view(),
            });
            if outcome == MergeOutcome::Skipped {
                break;
            }
        }
    }

    let report = WindowReport {
        initial,
        steps,
        records: window.records().iter().map(|r| r.record_id().to_string()).collect(),
    };

    if json {
        return output::print_json(&report);
    }

    println!("{}", output::window(&report.initial));
    for step in &report.steps {
        let label = match step.direction {
            Direction::Previous => "previous",
            Direction::Next => "next",
        };
        let outcome = match step.outcome {
            MergeOutcome::Merged { added } => format!("+{added}"),
            other => format!("{other:?}").to_lowercase(),
        };
        println!("  {label:<8} {outcome:<10} {}", output::window(&step.window));
    }
    println!("{} {}", output::header("Records:"), report.records.join(", "));
    Ok(())
}
