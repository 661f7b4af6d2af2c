//! Tests for search and stats tool argument handling over JSON-RPC

#[cfg(test)]
mod tools_argument_parsing_tests {
    use crate::search::{Corpus, SearchEngine};
    use crate::tools::search::handle_search;
    use crate::tools::stats::handle_stats;
    use serde_json::json;

    fn engine() -> SearchEngine {
        let biblio = json!({
            "clauses": {
                "sec-1": { "id": "sec-1", "number": "1", "title": "Scope" },
                "sec-1.1": { "id": "sec-1.1", "number": "1.1", "title": "Conformance" }
            },
            "ops": {
                "IsCallable": { "id": "sec-iscallable", "aoid": "IsCallable" }
            }
        });
        SearchEngine::new(Corpus::from_biblio(&biblio))
    }

    #[test]
    fn test_search_args_with_all_fields() {
        let resp = handle_search(
            &engine(),
            Some(json!(7)),
            json!({ "query": "IsC", "limit": 10, "json": false }),
        );
        assert!(resp.error.is_none());
        assert_eq!(resp.id, Some(json!(7)));
        let result = resp.result.unwrap();
        assert_eq!(
            result["content"][0]["text"],
            "- [IsCallable](#sec-iscallable)\n"
        );
    }

    #[test]
    fn test_search_args_unknown_fields_ignored() {
        let resp = handle_search(&engine(), None, json!({ "query": "1.1", "account": "x" }));
        assert!(resp.error.is_none());
        let text = resp.result.unwrap()["content"][0]["text"].clone();
        assert_eq!(text, "- [1.1 Conformance](#sec-1.1)\n");
    }

    #[test]
    fn test_search_args_wrong_types_rejected() {
        let resp = handle_search(&engine(), None, json!({ "query": 11 }));
        let error = resp.error.expect("error present");
        assert_eq!(error.code, "invalid_input");
        assert!(error.message.contains("Invalid arguments"));

        let resp = handle_search(&engine(), None, json!({ "query": "Is", "limit": -1 }));
        assert!(resp.error.is_some());
    }

    #[test]
    fn test_search_long_query_still_answered() {
        let key = format!("{}Z", "a".repeat(600));
        let biblio = json!({ "ops": { "Long": { "id": "sec-long", "aoid": key } } });
        let engine = SearchEngine::new(Corpus::from_biblio(&biblio));

        let resp = handle_search(&engine, None, json!({ "query": "a".repeat(501) }));
        assert!(resp.error.is_none());
        let result = resp.result.unwrap();
        assert_eq!(result["content"][0]["metadata"]["active"], true);
        assert_eq!(result["content"][0]["metadata"]["total"], 1);
        assert_eq!(result["content"][0]["metadata"]["first"], "#sec-long");
    }

    #[test]
    fn test_search_short_query_is_not_an_error() {
        let resp = handle_search(&engine(), None, json!({ "query": "I" }));
        assert!(resp.error.is_none());
        let result = resp.result.unwrap();
        assert_eq!(result["content"][0]["metadata"]["active"], false);
        assert_eq!(result["content"][0]["text"], "");
    }

    #[test]
    fn test_stats_ignores_arguments() {
        let resp = handle_stats(&engine(), Some(json!("s")));
        let result = resp.result.unwrap();
        assert_eq!(result["content"][0]["metadata"]["total"], 3);
    }
}
