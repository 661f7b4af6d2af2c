//! Stats tool implementation

use crate::mcp::{McpResponse, ToolResult};
use crate::search::{EntryKind, SearchEngine};
use serde_json::{json, Value};

/// Handle stats tool call
pub fn handle_stats(engine: &SearchEngine, id: Option<Value>) -> McpResponse {
    match serde_json::to_value(execute_stats(engine)) {
        Ok(value) => McpResponse::success(id, value),
        Err(e) => McpResponse::error(id, "internal_error", &e.to_string()),
    }
}

/// Corpus size per entry kind, as a markdown table
pub fn execute_stats(engine: &SearchEngine) -> ToolResult {
    let corpus = engine.corpus();
    let kinds = [EntryKind::Section, EntryKind::Production, EntryKind::Operation];

    let mut markdown = String::from("| Kind | Entries |\n|------|---------|\n");
    let mut counts = serde_json::Map::new();
    for kind in kinds {
        let count = corpus.count(kind);
        markdown.push_str(&format!("| {} | {} |\n", kind.biblio_kind(), count));
        counts.insert(kind.biblio_kind().to_string(), json!(count));
    }
    markdown.push_str(&format!("| total | {} |\n", corpus.len()));
    counts.insert("total".to_string(), json!(corpus.len()));

    ToolResult::with_metadata(markdown, Value::Object(counts))
}
