//! CLI mode implementation
//!
//! Provides the command-line interface for searching a document biblio

use clap::{Parser, Subcommand};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// biblio-search CLI
#[derive(Parser, Debug)]
#[command(name = "biblio-search")]
#[command(about = "Fuzzy search over the biblio of a generated specification document", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Biblio JSON file, or rendered HTML embedding it
    #[arg(short = 'b', long, global = true, env = "BIBLIO_SEARCH_BIBLIO")]
    pub biblio: Option<PathBuf>,

    /// Search configuration file (JSON)
    #[arg(short = 'c', long, global = true, env = "BIBLIO_SEARCH_CONFIG")]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress non-error output
    #[arg(long, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run a single query and print the ranked results
    Search(SearchArgs),
    /// Read search-box contents from stdin, one line per keystroke, and print debounced results
    Watch(WatchArgs),
    /// Show corpus size per entry kind
    Stats,
    /// Serve JSON-RPC requests on stdio (default when no command is given)
    Serve,
}

/// Search tool arguments
#[derive(Parser, JsonSchema, Deserialize, Serialize, Clone, Debug)]
pub struct SearchArgs {
    /// Search text, or a section number such as 7.1
    #[arg(short = 'q', long)]
    #[schemars(description = "Search text, or a section number such as 7.1")]
    pub query: String,

    /// Maximum number of results (default 50, max 1000)
    #[arg(short = 'l', long)]
    #[schemars(description = "Maximum number of results (default 50, max 1000)")]
    pub limit: Option<usize>,

    /// Emit results as JSON instead of markdown
    #[arg(long)]
    #[serde(default)]
    #[schemars(description = "Emit results as JSON instead of markdown")]
    pub json: bool,
}

/// Watch command arguments
#[derive(Parser, Debug, Clone)]
pub struct WatchArgs {
    /// Quiet period before a query runs, in milliseconds
    #[arg(long)]
    pub debounce_ms: Option<u64>,

    /// Maximum number of results per query
    #[arg(short = 'l', long)]
    pub limit: Option<usize>,
}
