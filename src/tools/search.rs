//! Search tool implementation
//!
//! Implements the `search(query)` tool and renders results as markdown links
//! into the document. Sections are labelled with their number.

use crate::cli::SearchArgs;
use crate::config::MAX_RESULT_CAP;
use crate::error::AppError;
use crate::mcp::{McpResponse, ToolResult};
use crate::search::{EntryKind, SearchEngine, SearchOutcome, SearchResult};
use serde_json::{json, Value};
use tracing::debug;

/// Message shown for an active search without hits
pub const NO_RESULTS: &str = "No results.";

/// Handle search tool call
pub fn handle_search(engine: &SearchEngine, id: Option<Value>, args: Value) -> McpResponse {
    match handle_search_impl(engine, args) {
        Ok(content) => match serde_json::to_value(content) {
            Ok(value) => McpResponse::success(id, value),
            Err(e) => McpResponse::error(id, "internal_error", &e.to_string()),
        },
        Err(e) => McpResponse::error(id, e.error_code(), &e.message()),
    }
}

fn handle_search_impl(engine: &SearchEngine, args: Value) -> Result<ToolResult, AppError> {
    let search_args: SearchArgs = serde_json::from_value(args)
        .map_err(|e| AppError::InvalidInput(format!("Invalid arguments: {}", e)))?;

    execute_search(engine, &search_args)
}

/// Shared implementation for search (used by the server and the CLI)
pub fn execute_search(engine: &SearchEngine, search_args: &SearchArgs) -> Result<ToolResult, AppError> {
    let limit = validate_limit(search_args.limit)?;

    debug!("Search request: '{}'", search_args.query);

    let mut outcome = engine.search(&search_args.query);
    if let Some(limit) = limit {
        outcome.results.truncate(limit);
    }

    let text = if search_args.json {
        serde_json::to_string_pretty(&outcome)?
    } else {
        format_results_markdown(&outcome)
    };

    let metadata = json!({
        "active": outcome.active,
        "total": outcome.results.len(),
        "first": outcome.first_anchor(),
    });

    Ok(ToolResult::with_metadata(text, metadata))
}

fn validate_limit(limit: Option<usize>) -> Result<Option<usize>, AppError> {
    match limit {
        Some(0) => Err(AppError::InvalidInput("Limit must be at least 1".to_string())),
        Some(limit) if limit > MAX_RESULT_CAP => Err(AppError::InvalidInput(format!(
            "Limit too large, maximum {}",
            MAX_RESULT_CAP
        ))),
        other => Ok(other),
    }
}

/// Display label: `number title` for sections, the key otherwise
pub fn result_label(result: &SearchResult<'_>) -> String {
    let entry = result.entry;
    match (entry.kind, entry.record.number()) {
        (EntryKind::Section, Some(number)) => format!("{} {}", number, entry.key),
        _ => entry.key.clone(),
    }
}

/// Render an outcome as a markdown list of links.
///
/// An inactive search renders as an empty string; an active search without
/// hits renders [`NO_RESULTS`].
pub fn format_results_markdown(outcome: &SearchOutcome<'_>) -> String {
    if !outcome.active {
        return String::new();
    }

    if outcome.results.is_empty() {
        return format!("{}\n", NO_RESULTS);
    }

    let mut markdown = String::new();
    for result in &outcome.results {
        markdown.push_str(&format!(
            "- [{}](#{})\n",
            result_label(result),
            result.entry.record.id()
        ));
    }
    markdown
}
