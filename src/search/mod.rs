//! Fuzzy search over the document biblio
//!
//! The corpus is built once from the biblio; each query is then routed,
//! matched against every key, ranked and capped.

pub mod corpus;
pub mod debounce;
pub mod engine;
pub mod fuzzy;
pub mod parser;
pub mod ranking;

#[cfg(test)]
mod property_tests;

pub use corpus::{Corpus, CorpusEntry, EntryKind, Record};
pub use debounce::{debounce, Debouncer};
pub use engine::{SearchEngine, SearchOutcome, SearchResult};
pub use fuzzy::{fuzzy_match, FuzzyMatch};
pub use parser::{ParsedQuery, QueryMode, QueryParser};
pub use ranking::{relevance, ScoringWeights};
