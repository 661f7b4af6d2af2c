//! biblio-search CLI & stdio server
//!
//! Dual-mode application:
//! - Server Mode (default): JSON-RPC tools over stdio
//! - CLI Mode: `search`, `watch` and `stats` commands run directly
//!
//! The biblio is loaded once at startup and shared by every query.

use anyhow::Result;
use biblio_search::biblio;
use biblio_search::cli::{Cli, Commands, SearchArgs, WatchArgs};
use biblio_search::config::SearchConfig;
use biblio_search::error::AppError;
use biblio_search::mcp;
use biblio_search::search::SearchEngine;
use biblio_search::tools;
use clap::Parser;
use std::sync::Arc;
use tokio::io::BufReader;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity flags
    let log_level = if cli.quiet {
        "error"
    } else if cli.verbose {
        "debug"
    } else {
        "info"
    };

    tracing_subscriber::fmt()
        .with_env_filter(log_level)
        .with_writer(std::io::stderr) // stdout carries results and responses
        .init();

    let engine = match build_engine(&cli) {
        Ok(engine) => Arc::new(engine),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(e.exit_code());
        }
    };

    let result = match cli.command {
        Some(Commands::Search(args)) => execute_search_cli(&engine, args),
        Some(Commands::Watch(args)) => execute_watch_cli(engine, args).await,
        Some(Commands::Stats) => Ok(tools::stats::execute_stats(&engine).first_text()),
        Some(Commands::Serve) | None => return run_server_mode(engine).await,
    };

    match result {
        Ok(output) => {
            if !output.is_empty() {
                print!("{}", output);
            }
            Ok(())
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(e.exit_code());
        }
    }
}

/// Load configuration and corpus from the global flags
fn build_engine(cli: &Cli) -> Result<SearchEngine, AppError> {
    let config = match &cli.config {
        Some(path) => SearchConfig::load(path)?,
        None => SearchConfig::default(),
    };

    let corpus = biblio::load_optional_corpus(cli.biblio.as_deref())?;
    Ok(SearchEngine::with_config(corpus, config))
}

/// Execute search command in CLI mode
fn execute_search_cli(engine: &SearchEngine, args: SearchArgs) -> Result<String, AppError> {
    let tool_result = tools::search::execute_search(engine, &args)?;
    Ok(tool_result.first_text())
}

/// Execute watch command in CLI mode
async fn execute_watch_cli(engine: Arc<SearchEngine>, args: WatchArgs) -> Result<String, AppError> {
    let mut config = engine.config().clone();
    if let Some(debounce_ms) = args.debounce_ms {
        config = config.with_debounce_ms(debounce_ms);
    }
    if let Some(limit) = args.limit {
        let result_cap = limit.min(config.result_cap);
        config = config.with_result_cap(result_cap);
    }
    config.validate()?;

    let delay = config.debounce_delay();
    let engine = Arc::new(engine.reconfigured(config));

    info!("Watching stdin for queries ({}ms debounce)", delay.as_millis());
    let stdin = BufReader::new(tokio::io::stdin());
    tools::watch::watch(engine, stdin, delay, |text| print!("{}", text)).await?;

    Ok(String::new())
}

/// Run in stdio server mode
async fn run_server_mode(engine: Arc<SearchEngine>) -> Result<()> {
    info!("Starting biblio-search server");

    mcp::handle_stdio(engine).await?;

    Ok(())
}
