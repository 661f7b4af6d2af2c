//! End-to-end tests: rendered document on disk through to served results

use crate::biblio::load_corpus;
use crate::mcp::serve;
use crate::search::{EntryKind, SearchEngine};
use serde_json::Value;
use std::io::Write;
use std::sync::Arc;

const DOCUMENT: &str = r#"<!doctype html>
<html>
<head><title>Example Specification</title></head>
<body>
<div id="menu-search"><input id="menu-search-box" type="text"></div>
<script type="application/json" id="menu-search-biblio">
{
  "clauses": {
    "sec-intro": { "id": "sec-intro", "number": "1", "title": "Introduction" },
    "sec-type-conversion": { "id": "sec-type-conversion", "number": "7.1", "title": "Type Conversion" },
    "sec-tostring": { "id": "sec-tostring", "number": "7.1.17", "title": "ToString" },
    "sec-abstract-ops": { "id": "sec-abstract-ops", "number": "7", "title": "Abstract Operations" }
  },
  "productions": {
    "StringLiteral": { "id": "prod-StringLiteral", "name": "StringLiteral" },
    "Introduction": { "id": "prod-Introduction", "name": "Introduction" }
  },
  "ops": {
    "ToString": { "id": "sec-tostring", "aoid": "ToString" },
    "ToNumber": { "id": "sec-tonumber", "aoid": "ToNumber" },
    "broken": { "id": "sec-broken" }
  }
}
</script>
</body>
</html>
"#;

fn engine() -> SearchEngine {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(DOCUMENT.as_bytes()).unwrap();
    SearchEngine::new(load_corpus(file.path()).unwrap())
}

#[test]
fn test_document_corpus_dedups_and_skips_malformed() {
    let engine = engine();
    let corpus = engine.corpus();

    // Sections claim "Introduction" and "ToString" first; "broken" has no aoid
    assert_eq!(corpus.count(EntryKind::Section), 4);
    assert_eq!(corpus.count(EntryKind::Production), 1);
    assert_eq!(corpus.count(EntryKind::Operation), 1);
    assert_eq!(corpus.len(), 6);
}

#[test]
fn test_section_number_query_keeps_document_order() {
    let engine = engine();
    let outcome = engine.search(" 7.1 ");
    let numbers: Vec<&str> = outcome
        .results
        .iter()
        .filter_map(|r| r.entry.record.number())
        .collect();
    assert_eq!(numbers, vec!["7.1", "7.1.17"]);
    assert!(outcome.results.iter().all(|r| r.relevance.is_none()));
}

#[test]
fn test_free_text_ranking_over_document() {
    let engine = engine();
    let outcome = engine.search("ToS");
    let keys: Vec<&str> = outcome.results.iter().map(|r| r.entry.key.as_str()).collect();

    // Exact-case prefix leads; lower-cased scattered hits trail
    assert_eq!(keys, vec!["ToString", "Type Conversion", "Abstract Operations"]);
    assert_eq!(outcome.results[0].entry.kind, EntryKind::Section);
    assert_eq!(outcome.results[0].relevance, Some(4087));
    assert_eq!(outcome.results[1].relevance, Some(880));
    assert_eq!(outcome.results[2].relevance, Some(876));
    assert_eq!(outcome.first_anchor().as_deref(), Some("#sec-tostring"));
}

#[tokio::test]
async fn test_served_search_over_document() {
    let engine = Arc::new(engine());
    let input = concat!(
        r#"{"jsonrpc":"2.0","id":1,"method":"initialize","params":{"clientInfo":{"name":"viewer"}}}"#,
        "\n",
        r#"{"jsonrpc":"2.0","id":2,"method":"tools/call","params":{"name":"search","arguments":{"query":"7.1","limit":1}}}"#,
        "\n",
        r#"{"jsonrpc":"2.0","id":3,"method":"tools/call","params":{"name":"search","arguments":{"query":"zzz"}}}"#,
        "\n",
    );

    let mut output = Vec::new();
    serve(engine, input.as_bytes(), &mut output).await.unwrap();

    let responses: Vec<Value> = String::from_utf8(output)
        .unwrap()
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();
    assert_eq!(responses.len(), 3);
    assert_eq!(responses[0]["result"]["corpus"]["entries"], 6);
    assert_eq!(
        responses[1]["result"]["content"][0]["text"],
        "- [7.1 Type Conversion](#sec-type-conversion)\n"
    );
    assert_eq!(responses[2]["result"]["content"][0]["text"], "No results.\n");
    assert_eq!(responses[2]["result"]["content"][0]["metadata"]["active"], true);
}
