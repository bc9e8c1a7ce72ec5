//! Command-line interface definitions and parsing
//!
//! Every command reads a search context snapshot (JSON) and prints the
//! navigation state or the intents an action produces.
//!
//! # Commands
//!
//! - **trail**: Selected category path, root toggle state and child options
//! - **unselect**: Intent for clicking the trail entry at an index
//! - **select-child**: Intent for choosing a child of the last trail entry
//! - **price**: Price slider domain and active value
//! - **slide**: Feed slider values through the debouncer and show commits
//! - **window**: Grow the result window against a catalog file
//!
//! # Examples
//!
//! ```bash
//! facetnav trail ctx.json
//! facetnav unselect ctx.json 1
//! facetnav slide --step-ms 100 ctx.json 10:90 20:90 30:90
//! facetnav --json window ctx.json --catalog catalog.json --previous 2
//! ```

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Main CLI structure for parsing command-line arguments
#[derive(Parser, Debug)]
#[command(name = "facetnav")]
#[command(about = "Faceted navigation state engine", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Only log errors
    #[arg(short = 'q', long = "quiet", global = true)]
    pub quiet: bool,

    /// Log debug output
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    /// Print machine-readable JSON
    #[arg(long = "json", global = true)]
    pub json: bool,

    /// Config file (defaults to the user config directory)
    #[arg(long = "config", value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Show the selected category trail
    #[command(visible_alias = "t")]
    Trail {
        /// Search context snapshot
        #[arg(value_name = "SNAPSHOT")]
        snapshot: PathBuf,

        /// Render the root as a peer suggestion
        #[arg(long = "shallow")]
        shallow: bool,

        /// Show every child option instead of collapsing long lists
        #[arg(long = "all")]
        all: bool,
    },

    /// Unselect the trail entry at INDEX (0 is the root)
    #[command(visible_alias = "u")]
    Unselect {
        #[arg(value_name = "SNAPSHOT")]
        snapshot: PathBuf,

        #[arg(value_name = "INDEX")]
        index: usize,
    },

    /// Select a child of the last trail entry
    #[command(visible_alias = "s")]
    SelectChild {
        #[arg(value_name = "SNAPSHOT")]
        snapshot: PathBuf,

        /// Child category id
        #[arg(value_name = "CHILD_ID")]
        child_id: String,

        #[arg(long = "shallow")]
        shallow: bool,
    },

    /// Show the price slider
    #[command(visible_alias = "p")]
    Price {
        #[arg(value_name = "SNAPSHOT")]
        snapshot: PathBuf,
    },

    /// Push slider values and print the committed query patches
    Slide {
        #[arg(value_name = "SNAPSHOT")]
        snapshot: PathBuf,

        /// Slider values as LOW:HIGH, in order
        #[arg(
            value_name = "LOW:HIGH",
            required = true,
            num_args = 1..,
            allow_hyphen_values = true,
            value_parser = parse_range_value
        )]
        values: Vec<(i64, i64)>,

        /// Delay between consecutive values in milliseconds
        #[arg(long = "step-ms", default_value_t = 0)]
        step_ms: u64,
    },

    /// Fetch previous/next pages into the result window
    #[command(visible_alias = "w")]
    Window {
        #[arg(value_name = "SNAPSHOT")]
        snapshot: PathBuf,

        /// JSON array with the full filtered result set
        #[arg(long = "catalog", value_name = "PATH")]
        catalog: PathBuf,

        /// Number of previous pages to fetch
        #[arg(long = "previous", default_value_t = 0)]
        previous: usize,

        /// Number of next pages to fetch
        #[arg(long = "next", default_value_t = 0)]
        next: usize,
    },
}

impl Cli {
    /// Parse command-line arguments
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

/// Parse a `LOW:HIGH` slider value
///
/// # Errors
///
/// Returns a message if the value is not two integers separated by `:`.
pub fn parse_range_value(s: &str) -> Result<(i64, i64), String> {
    let (low, high) = s
        .split_once(':')
        .ok_or_else(|| format!("expected LOW:HIGH, got '{s}'"))?;

    let low = low
        .trim()
        .parse()
        .map_err(|e| format!("invalid low bound '{low}': {e}"))?;
    let high = high
        .trim()
        .parse()
        .map_err(|e| format!("invalid high bound '{high}': {e}"))?;

    Ok((low, high))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_trail() {
        let cli = Cli::parse_from(["facetnav", "trail", "ctx.json", "--shallow"]);
        match cli.command {
            Commands::Trail { snapshot, shallow, all } => {
                assert_eq!(snapshot, PathBuf::from("ctx.json"));
                assert!(shallow);
                assert!(!all);
            }
            other => panic!("Expected Trail command, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_unselect_index() {
        let cli = Cli::parse_from(["facetnav", "u", "ctx.json", "2"]);
        assert!(matches!(cli.command, Commands::Unselect { index: 2, .. }));
    }

    #[test]
    fn test_parse_slide_values() {
        let cli = Cli::parse_from([
            "facetnav", "slide", "--step-ms", "100", "ctx.json", "10:90", "20:90",
        ]);
        if let Commands::Slide { values, step_ms, .. } = cli.command {
            assert_eq!(values, vec![(10, 90), (20, 90)]);
            assert_eq!(step_ms, 100);
        } else {
            panic!("Expected Slide command");
        }
    }

    #[test]
    fn test_parse_range_value_errors() {
        assert!(parse_range_value("10").is_err());
        assert!(parse_range_value("a:10").is_err());
        assert_eq!(parse_range_value(" 1 : 2 "), Ok((1, 2)));
    }

    #[test]
    fn test_global_flags() {
        let cli = Cli::parse_from([
            "facetnav", "price", "ctx.json", "--json", "-v", "--config", "/tmp/c.toml",
        ]);
        assert!(cli.json);
        assert!(cli.verbose);
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/c.toml")));
    }

    #[test]
    fn test_parse_window() {
        let cli = Cli::parse_from([
            "facetnav", "window", "ctx.json", "--catalog", "all.json", "--previous", "2",
        ]);
        assert!(matches!(
            cli.command,
            Commands::Window { previous: 2, next: 0, .. }
        ));
    }
}
