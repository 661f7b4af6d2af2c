//! Search Engine Integration
//!
//! Ties together query routing, fuzzy matching, and ranking over an
//! immutable corpus.

use super::corpus::{Corpus, CorpusEntry};
use super::fuzzy::{fuzzy_match, FuzzyMatch};
use super::parser::{ParsedQuery, QueryMode, QueryParser};
use super::ranking::ScoringWeights;
use crate::config::SearchConfig;
use serde::Serialize;
use std::sync::Arc;
use std::time::Instant;
use tracing::debug;

/// One ranked hit
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchResult<'a> {
    /// The matched corpus entry
    pub entry: &'a CorpusEntry,
    /// Fuzzy match descriptor; absent for section-number queries
    #[serde(rename = "match", skip_serializing_if = "Option::is_none")]
    pub fuzzy_match: Option<FuzzyMatch>,
    /// Ordering score; absent for section-number queries
    #[serde(skip_serializing_if = "Option::is_none")]
    pub relevance: Option<u32>,
}

/// Answer to a single query
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchOutcome<'a> {
    /// False when the query was too short to search at all
    pub active: bool,
    pub results: Vec<SearchResult<'a>>,
}

impl<'a> SearchOutcome<'a> {
    /// Outcome for a query that does not activate the search
    pub fn inactive() -> Self {
        Self {
            active: false,
            results: Vec::new(),
        }
    }

    fn active(results: Vec<SearchResult<'a>>) -> Self {
        Self {
            active: true,
            results,
        }
    }

    /// Active search that found nothing
    pub fn is_empty(&self) -> bool {
        self.active && self.results.is_empty()
    }

    /// Link target of the top result, used to jump straight to it
    pub fn first_anchor(&self) -> Option<String> {
        self.results
            .first()
            .map(|result| format!("#{}", result.entry.record.id()))
    }
}

/// Search engine over a shared, read-only corpus
#[derive(Debug, Clone)]
pub struct SearchEngine {
    corpus: Arc<Corpus>,
    config: SearchConfig,
    scoring_weights: ScoringWeights,
}

impl SearchEngine {
    /// Create a new search engine with default configuration
    pub fn new(corpus: Corpus) -> Self {
        Self::with_config(corpus, SearchConfig::default())
    }

    pub fn with_config(corpus: Corpus, config: SearchConfig) -> Self {
        Self {
            corpus: Arc::new(corpus),
            config,
            scoring_weights: ScoringWeights::default(),
        }
    }

    /// Same corpus, different configuration
    pub fn reconfigured(&self, config: SearchConfig) -> Self {
        Self {
            corpus: Arc::clone(&self.corpus),
            config,
            scoring_weights: self.scoring_weights.clone(),
        }
    }

    pub fn corpus(&self) -> &Corpus {
        &self.corpus
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Search the corpus with a raw search-box string.
    ///
    /// Results are ordered by relevance (highest first) for free text, and in
    /// corpus order for section numbers, then capped.
    pub fn search(&self, query: &str) -> SearchOutcome<'_> {
        let started = Instant::now();
        let parsed = QueryParser::parse(query, self.config.min_query_len);

        let outcome = match parsed.mode {
            QueryMode::Inactive => SearchOutcome::inactive(),
            QueryMode::SectionNumber => SearchOutcome::active(self.search_sections(&parsed)),
            QueryMode::FreeText => SearchOutcome::active(self.search_text(&parsed)),
        };

        debug!(
            "Search for '{}' ({:?}) returned {} results in {:?}",
            parsed.text,
            parsed.mode,
            outcome.results.len(),
            started.elapsed()
        );

        outcome
    }

    /// Literal string-prefix match on section numbers
    fn search_sections(&self, parsed: &ParsedQuery) -> Vec<SearchResult<'_>> {
        self.corpus
            .sections()
            .filter(|entry| {
                entry
                    .record
                    .number()
                    .is_some_and(|number| number.starts_with(parsed.text.as_str()))
            })
            .take(self.config.result_cap)
            .map(|entry| SearchResult {
                entry,
                fuzzy_match: None,
                relevance: None,
            })
            .collect()
    }

    /// Fuzzy match every key, then rank
    fn search_text(&self, parsed: &ParsedQuery) -> Vec<SearchResult<'_>> {
        let mut results: Vec<SearchResult<'_>> = self
            .corpus
            .entries()
            .iter()
            .filter_map(|entry| {
                let fuzzy_match = fuzzy_match(&parsed.text, &entry.key)?;
                let relevance = self
                    .scoring_weights
                    .score(&fuzzy_match, entry.key.chars().count());
                Some(SearchResult {
                    entry,
                    fuzzy_match: Some(fuzzy_match),
                    relevance: Some(relevance),
                })
            })
            .collect();

        // Stable: equal scores keep corpus order
        results.sort_by(|a, b| b.relevance.cmp(&a.relevance));
        results.truncate(self.config.result_cap);
        results
    }
}
