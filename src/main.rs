//! Facetnav CLI application entry point
//!
//! Drives the faceted navigation engine against search context snapshots
//! (JSON files shaped like the hosting page's search context).
//!
//! # Usage
//!
//! ```bash
//! # Category trail and child options
//! facetnav trail ctx.json
//! facetnav trail ctx.json --shallow --all
//!
//! # Intents for clicks
//! facetnav unselect ctx.json 1
//! facetnav select-child ctx.json 1003
//!
//! # Price slider and debounced commits
//! facetnav price ctx.json
//! facetnav slide --step-ms 100 ctx.json 10:90 20:90 30:90
//!
//! # Fetch more results
//! facetnav window ctx.json --catalog all.json --previous 2 --next 1
//!
//! # Machine output, debug logs
//! facetnav --json -v trail ctx.json
//! ```
//!
//! # Configuration
//!
//! Read from `~/.config/facetnav/config.toml` on Linux (or `--config`),
//! overridden by `FACETNAV_*` environment variables. Log filtering follows
//! `FACETNAV_LOG`, then `RUST_LOG`, then `-v`/`-q`.

use facetnav::{
    NavError, SearchContext,
    cli::{Cli, Commands},
    commands,
    config::NavConfig,
    logging::{self, Verbosity},
};
use std::path::Path;
use std::time::Duration;
use tracing::debug;

type Result<T> = std::result::Result<T, NavError>;

fn load_config(path: Option<&Path>) -> Result<NavConfig> {
    let config = match path {
        Some(path) => NavConfig::load_from(path)?,
        None => NavConfig::load()?,
    };
    debug!(?config, "configuration loaded");
    Ok(config)
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse_args();

    logging::init_subscriber(Verbosity::from_flags(cli.verbose, cli.quiet));

    let config = load_config(cli.config.as_deref())?;
    let json = cli.json;

    match &cli.command {
        Commands::Trail {
            snapshot,
            shallow,
            all,
        } => {
            let ctx = SearchContext::from_path(snapshot)?;
            commands::trail(&ctx, &config, *shallow, *all, json)?;
        }
        Commands::Unselect { snapshot, index } => {
            let ctx = SearchContext::from_path(snapshot)?;
            commands::unselect(&ctx, *index, json)?;
        }
        Commands::SelectChild {
            snapshot,
            child_id,
            shallow,
        } => {
            let ctx = SearchContext::from_path(snapshot)?;
            commands::select_child(&ctx, child_id, *shallow, json)?;
        }
        Commands::Price { snapshot } => {
            let ctx = SearchContext::from_path(snapshot)?;
            commands::price(&ctx, json)?;
        }
        Commands::Slide {
            snapshot,
            values,
            step_ms,
        } => {
            let ctx = SearchContext::from_path(snapshot)?;
            commands::slide(&ctx, &config, values, Duration::from_millis(*step_ms), json).await?;
        }
        Commands::Window {
            snapshot,
            catalog,
            previous,
            next,
        } => {
            let ctx = SearchContext::from_path(snapshot)?;
            commands::window(&ctx, &config, catalog, *previous, *next, json).await?;
        }
    }

    Ok(())
}
