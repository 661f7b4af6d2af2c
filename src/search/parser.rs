//! Query Parser & Router
//!
//! Classifies a raw search-box string into one of the search modes.

use serde::Serialize;

/// How a query is answered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum QueryMode {
    /// Too short to search; the caller hides the result list
    Inactive,
    /// Only digits and dots: literal prefix match on section numbers
    SectionNumber,
    /// Fuzzy match against every corpus key
    FreeText,
}

/// Parsed and classified search query
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedQuery {
    /// Original unmodified query
    pub original: String,
    /// Query with surrounding whitespace removed
    pub text: String,
    /// Selected search mode
    pub mode: QueryMode,
}

/// Query parser and router
pub struct QueryParser;

impl QueryParser {
    /// Parse a query; anything shorter than `min_len` characters is inactive
    pub fn parse(query: &str, min_len: usize) -> ParsedQuery {
        let text = query.trim();

        let mode = if text.chars().count() < min_len {
            QueryMode::Inactive
        } else if Self::is_section_number(text) {
            QueryMode::SectionNumber
        } else {
            QueryMode::FreeText
        };

        ParsedQuery {
            original: query.to_string(),
            text: text.to_string(),
            mode,
        }
    }

    /// Check if a query consists only of ASCII digits and `.`
    pub fn is_section_number(text: &str) -> bool {
        text.chars().all(|c| c.is_ascii_digit() || c == '.')
    }
}
