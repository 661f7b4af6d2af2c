//! Ranking & Scoring System
//!
//! Integer relevance used purely for ordering:
//! - `2048` when the match is a prefix match
//! - `(8 - chunks) * 128`, doubled when the case matched
//! - `255 - key length`
//!
//! Prefer case-sensitive matches with fewer chunks, and otherwise prefer
//! shorter keys.

use super::fuzzy::FuzzyMatch;

/// Scoring weights for the relevance signals
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoringWeights {
    /// Chunk count at which the chunk term drops to zero
    pub chunk_budget: u32,
    /// Weight of each chunk below the budget
    pub chunk_weight: u32,
    /// Multiplier applied to the chunk term when the case matched
    pub case_multiplier: u32,
    /// Flat bonus for prefix matches
    pub prefix_bonus: u32,
    /// Key length at which the length term drops to zero
    pub length_budget: u32,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            chunk_budget: 8,
            chunk_weight: 128,
            case_multiplier: 2,
            prefix_bonus: 2048,
            length_budget: 255,
        }
    }
}

impl ScoringWeights {
    /// Score a match against a key of `key_len` characters
    pub fn score(&self, fuzzy_match: &FuzzyMatch, key_len: usize) -> u32 {
        let mut relevance = self.chunk_budget.saturating_sub(fuzzy_match.chunks) * self.chunk_weight;

        if fuzzy_match.case_match {
            relevance *= self.case_multiplier;
        }

        if fuzzy_match.prefix {
            relevance += self.prefix_bonus;
        }

        let key_len = u32::try_from(key_len).unwrap_or(u32::MAX);
        relevance + self.length_budget.saturating_sub(key_len)
    }
}

/// Relevance of `fuzzy_match` on `key` with the default weights
pub fn relevance(fuzzy_match: &FuzzyMatch, key: &str) -> u32 {
    ScoringWeights::default().score(fuzzy_match, key.chars().count())
}
