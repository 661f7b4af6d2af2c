//! Fuzzy Matching Engine
//!
//! Subsequence matcher with chunk counting. Every query character must be
//! found in the key, in order; the characters in between are skipped. The
//! number of contiguous runs of matched characters ("chunks") and whether the
//! scan stayed near the start of the key feed the ranking.
//!
//! Lengths are counted in `char`s, never bytes.

use serde::{Deserialize, Serialize};

/// Descriptor of a successful fuzzy match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FuzzyMatch {
    /// Matched without falling back to the lower-cased pass
    pub case_match: bool,
    /// Number of contiguous runs of matched characters (always >= 1)
    pub chunks: u32,
    /// The scan consumed no more of the key than the query's own length
    pub prefix: bool,
}

impl FuzzyMatch {
    fn exact(case_match: bool) -> Self {
        Self {
            case_match,
            chunks: 1,
            prefix: true,
        }
    }
}

/// Match `query` against `key`.
///
/// Returns `None` when some query character cannot be found in order, even
/// after retrying with both strings lower-cased.
pub fn fuzzy_match(query: &str, key: &str) -> Option<FuzzyMatch> {
    let query_len = query.chars().count();
    let key_len = key.chars().count();

    if query_len > key_len {
        return None;
    }

    if query_len == key_len {
        if query == key {
            return Some(FuzzyMatch::exact(true));
        }
        if query.to_lowercase() == key.to_lowercase() {
            return Some(FuzzyMatch::exact(false));
        }
        return None;
    }

    // Case-sensitive pass first, then a single lower-cased retry.
    for case_match in [true, false] {
        let (needle, haystack): (Vec<char>, Vec<char>) = if case_match {
            (query.chars().collect(), key.chars().collect())
        } else {
            (
                query.to_lowercase().chars().collect(),
                key.to_lowercase().chars().collect(),
            )
        };

        if let Some((chunks, prefix)) = scan(&needle, &haystack) {
            return Some(FuzzyMatch {
                case_match,
                chunks,
                prefix,
            });
        }
    }

    None
}

/// Walk `haystack` once, consuming characters until each needle character is
/// found. Returns `(chunks, prefix)` or `None` if the haystack runs out.
fn scan(needle: &[char], haystack: &[char]) -> Option<(u32, bool)> {
    let mut chunks = 1u32;
    let mut finding = false;
    let mut cursor = 0usize;

    'needle: for &wanted in needle {
        while cursor < haystack.len() {
            let current = haystack[cursor];
            cursor += 1;

            if current == wanted {
                finding = true;
                continue 'needle;
            }

            // A skip right after a matched character closes a chunk.
            if finding {
                chunks += 1;
                finding = false;
            }
        }

        return None;
    }

    Some((chunks, cursor <= needle.len()))
}
