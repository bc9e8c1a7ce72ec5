//! Slide command - feed slider values through the debouncer
//!
//! Values are pushed `step` apart, so a step shorter than the configured
//! quiet period collapses into a single commit.

use crate::config::NavConfig;
use crate::query::{QueryPatch, QueryState};
use crate::range::RangeDebouncer;
use crate::{NavError, SearchContext, output};
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::time::sleep;

type Result<T> = std::result::Result<T, NavError>;

const POLL_INTERVAL: Duration = Duration::from_millis(10);

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SlideReport {
    commits: Vec<QueryPatch>,
    query: QueryState,
}

/// Execute the slide command
///
/// # Errors
/// Returns an error if JSON output fails to serialize.
pub async fn execute(
    ctx: &SearchContext,
    config: &NavConfig,
    values: &[(i64, i64)],
    step: Duration,
    json: bool,
) -> Result<()> {
    let (tx, mut rx) = mpsc::unbounded_channel::<QueryPatch>();
    let mut debouncer = RangeDebouncer::new(Arc::new(tx), config.debounce());

    for (i, &(low, high)) in values.iter().enumerate() {
        if i > 0 {
            sleep(step).await;
        }
        debouncer.push(low, high);
    }

    while debouncer.is_pending() {
        sleep(POLL_INTERVAL).await;
    }
    drop(debouncer);

    let mut query = ctx.query_state();
    let mut commits = Vec::new();
    while let Some(patch) = rx.recv().await {
        query.apply(&patch);
        commits.push(patch);
    }

    let report = SlideReport { commits, query };

    if json {
        return output::print_json(&report);
    }

    println!("{} {}", output::header("Commits:"), report.commits.len());
    for patch in &report.commits {
        println!("  {}", output::patch(patch));
    }
    if let Some(price_range) = &report.query.price_range {
        println!("{} {price_range}", output::header("priceRange:"));
    }
    Ok(())
}
