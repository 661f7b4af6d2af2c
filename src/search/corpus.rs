//! Corpus Builder
//!
//! Flattens the biblio dictionary (`kind -> name -> record`) into an ordered
//! list of searchable entries. Deduplication uses a single set of keys shared
//! by every kind: the first record to claim a key wins, whatever its kind.

use serde::Serialize;
use serde_json::{Map, Value};
use std::collections::HashSet;
use tracing::{debug, warn};

/// Kind of a searchable entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    /// A clause, intro or annex of the document
    Section,
    /// A grammar production
    Production,
    /// A named abstract operation
    Operation,
}

impl EntryKind {
    /// Map a biblio kind name to an entry kind
    pub fn from_biblio_kind(kind: &str) -> Option<Self> {
        match kind {
            "clauses" => Some(EntryKind::Section),
            "productions" => Some(EntryKind::Production),
            "ops" => Some(EntryKind::Operation),
            _ => None,
        }
    }

    /// The biblio kind name this entry kind is read from
    pub fn biblio_kind(&self) -> &'static str {
        match self {
            EntryKind::Section => "clauses",
            EntryKind::Production => "productions",
            EntryKind::Operation => "ops",
        }
    }

    /// Record field holding the display key
    fn key_field(&self) -> &'static str {
        match self {
            EntryKind::Section => "title",
            EntryKind::Production => "name",
            EntryKind::Operation => "aoid",
        }
    }
}

/// Typed record payload, one variant per kind
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Record {
    Section {
        id: String,
        number: String,
        title: String,
    },
    Production {
        id: String,
        name: String,
    },
    Operation {
        id: String,
        aoid: String,
    },
}

impl Record {
    /// Document anchor identifier
    pub fn id(&self) -> &str {
        match self {
            Record::Section { id, .. } | Record::Production { id, .. } | Record::Operation { id, .. } => id,
        }
    }

    /// Dotted section number, sections only
    pub fn number(&self) -> Option<&str> {
        match self {
            Record::Section { number, .. } => Some(number),
            _ => None,
        }
    }

    /// Build a typed record from a raw biblio value, given its already-derived key.
    ///
    /// Returns `None` when a field required by the kind is missing.
    fn from_value(kind: EntryKind, key: &str, value: &Value) -> Option<Self> {
        let id = text_field(value, "id")?;
        let record = match kind {
            EntryKind::Section => Record::Section {
                id,
                number: text_field(value, "number")?,
                title: key.to_string(),
            },
            EntryKind::Production => Record::Production {
                id,
                name: key.to_string(),
            },
            EntryKind::Operation => Record::Operation {
                id,
                aoid: key.to_string(),
            },
        };
        Some(record)
    }
}

/// One searchable entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CorpusEntry {
    pub kind: EntryKind,
    /// Human-visible string matched against queries
    pub key: String,
    pub record: Record,
}

/// Flat, deduplicated, immutable list of entries
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    entries: Vec<CorpusEntry>,
}

impl Corpus {
    /// Corpus for a document without a biblio
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build the corpus from a biblio dictionary, in dictionary order
    pub fn from_biblio(biblio: &Value) -> Self {
        let Some(kinds) = biblio.as_object() else {
            warn!("Biblio is not an object; using an empty corpus");
            return Self::empty();
        };

        let mut seen_keys: HashSet<String> = HashSet::new();
        let mut entries = Vec::new();

        for (kind_name, records) in kinds {
            let Some(kind) = EntryKind::from_biblio_kind(kind_name) else {
                debug!("Ignoring biblio kind '{}'", kind_name);
                continue;
            };

            let Some(records) = records.as_object() else {
                warn!("Biblio kind '{}' is not an object; skipping", kind_name);
                continue;
            };

            Self::collect_kind(kind, records, &mut seen_keys, &mut entries);
        }

        debug!("Built corpus with {} entries", entries.len());
        Self { entries }
    }

    /// Build a corpus directly from entries, keeping the first entry per key
    pub fn from_entries(candidates: impl IntoIterator<Item = CorpusEntry>) -> Self {
        let mut seen_keys = HashSet::new();
        let entries = candidates
            .into_iter()
            .filter(|entry| seen_keys.insert(entry.key.clone()))
            .collect();
        Self { entries }
    }

    fn collect_kind(
        kind: EntryKind,
        records: &Map<String, Value>,
        seen_keys: &mut HashSet<String>,
        entries: &mut Vec<CorpusEntry>,
    ) {
        for (record_name, value) in records {
            let Some(key) = text_field(value, kind.key_field()) else {
                warn!(
                    "Skipping {} '{}': missing '{}'",
                    kind.biblio_kind(),
                    record_name,
                    kind.key_field()
                );
                continue;
            };

            if seen_keys.contains(&key) {
                continue;
            }

            let Some(record) = Record::from_value(kind, &key, value) else {
                warn!("Skipping {} '{}': malformed record", kind.biblio_kind(), record_name);
                continue;
            };

            seen_keys.insert(key.clone());
            entries.push(CorpusEntry { kind, key, record });
        }
    }

    pub fn entries(&self) -> &[CorpusEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Section entries in corpus order
    pub fn sections(&self) -> impl Iterator<Item = &CorpusEntry> {
        self.entries
            .iter()
            .filter(|entry| entry.kind == EntryKind::Section)
    }

    /// Number of entries of a given kind
    pub fn count(&self, kind: EntryKind) -> usize {
        self.entries.iter().filter(|entry| entry.kind == kind).count()
    }
}

/// Read a string field; numeric values are accepted and rendered as text
fn text_field(value: &Value, name: &str) -> Option<String> {
    match value.get(name)? {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}
