//! biblio-search
//!
//! Fuzzy search and ranking over the biblio of a generated specification
//! document: section titles, grammar production names and abstract operation
//! names. Section numbers such as `7.1` are matched as literal prefixes.

pub mod biblio;
pub mod cli;
pub mod config;
pub mod error;
pub mod mcp;
pub mod search;
pub mod tools;

#[cfg(test)]
mod tests_end_to_end;

pub use config::SearchConfig;
pub use error::AppError;
pub use search::{fuzzy_match, relevance, Corpus, FuzzyMatch, SearchEngine, SearchOutcome};
