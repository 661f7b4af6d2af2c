use proptest::prelude::*;
use crate::search::corpus::{Corpus, CorpusEntry, EntryKind, Record};
use crate::search::fuzzy::fuzzy_match;
use crate::search::ranking::relevance;
use crate::search::SearchEngine;

fn key_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9 ]{1,40}"
}

// Property test: a key always matches itself exactly
proptest! {
    #[test]
    fn identical_strings_match_exactly(key in key_strategy()) {
        let m = fuzzy_match(&key, &key).expect("key matches itself");
        prop_assert!(m.case_match);
        prop_assert_eq!(m.chunks, 1);
        prop_assert!(m.prefix);
    }
}

// Property test: a query longer than the key never matches
proptest! {
    #[test]
    fn longer_query_never_matches(key in key_strategy(), extra in "[a-z]{1,5}") {
        let query = format!("{}{}", key, extra);
        prop_assert!(fuzzy_match(&query, &key).is_none());
    }
}

// Property test: any leading slice of a key matches as a contiguous prefix
proptest! {
    #[test]
    fn leading_slice_is_prefix_match(key in "[a-zA-Z]{2,40}", cut in 1usize..40) {
        let cut = cut.min(key.len() - 1);
        let query = &key[..cut];
        let m = fuzzy_match(query, &key).expect("prefix matches");
        prop_assert!(m.case_match);
        prop_assert_eq!(m.chunks, 1);
        prop_assert!(m.prefix);
    }
}

// Property test: chunks never exceed the query length and never drop below 1
proptest! {
    #[test]
    fn chunk_count_is_bounded(query in "[a-c]{1,6}", key in "[a-d]{1,30}") {
        if let Some(m) = fuzzy_match(&query, &key) {
            prop_assert!(m.chunks >= 1);
            prop_assert!(m.chunks as usize <= query.chars().count());
        }
    }
}

// Property test: swapping the case of every query letter still matches when the original did
proptest! {
    #[test]
    fn case_swapped_query_still_matches(key in "[a-zA-Z]{3,30}", take in 1usize..30) {
        let query: String = key.chars().step_by(2).take(take).collect();
        prop_assume!(query.chars().count() < key.chars().count());
        let swapped: String = query
            .chars()
            .map(|c| if c.is_ascii_uppercase() { c.to_ascii_lowercase() } else { c.to_ascii_uppercase() })
            .collect();
        prop_assert!(fuzzy_match(&query, &key).is_some());
        prop_assert!(fuzzy_match(&swapped, &key).is_some());
    }
}

// Property test: any prefix match outranks any non-prefix match
proptest! {
    #[test]
    fn prefix_bonus_dominates(
        prefix_chunks in 1u32..20,
        prefix_case in any::<bool>(),
        prefix_len in 0usize..2048,
        other_chunks in 1u32..20,
        other_case in any::<bool>(),
        other_len in 0usize..2048,
    ) {
        let prefix = crate::search::FuzzyMatch { case_match: prefix_case, chunks: prefix_chunks, prefix: true };
        let other = crate::search::FuzzyMatch { case_match: other_case, chunks: other_chunks, prefix: false };
        prop_assert!(relevance(&prefix, &"k".repeat(prefix_len)) > relevance(&other, &"k".repeat(other_len)));
    }
}

// Property test: results are capped and sorted by descending relevance
proptest! {
    #[test]
    fn results_sorted_and_capped(suffixes in proptest::collection::vec("[a-z]{0,12}", 1..120)) {
        let entries = suffixes.iter().enumerate().map(|(i, suffix)| {
            let key = format!("Get{}{}", suffix, i);
            CorpusEntry {
                kind: EntryKind::Operation,
                key: key.clone(),
                record: Record::Operation { id: format!("sec-{}", i), aoid: key },
            }
        });
        let engine = SearchEngine::new(Corpus::from_entries(entries));
        let outcome = engine.search("Get");

        prop_assert!(outcome.active);
        prop_assert_eq!(outcome.results.len(), suffixes.len().min(50));
        let scores: Vec<u32> = outcome.results.iter().filter_map(|r| r.relevance).collect();
        prop_assert!(scores.windows(2).all(|w| w[0] >= w[1]));
    }
}
