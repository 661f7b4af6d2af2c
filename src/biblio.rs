//! Biblio loading
//!
//! The biblio is the cross-reference dictionary emitted alongside a generated
//! document. It is read either from a standalone JSON file or from the
//! `<script id="menu-search-biblio">` element embedded in the rendered HTML.

use crate::search::Corpus;
use regex::Regex;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use thiserror::Error;
use tracing::{debug, info};

/// Id of the element carrying the embedded biblio payload
pub const BIBLIO_ELEMENT_ID: &str = "menu-search-biblio";

#[derive(Debug, Error)]
pub enum BiblioError {
    #[error("Failed to read biblio {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid biblio JSON: {0}")]
    Json(#[from] serde_json::Error),
}

fn biblio_element() -> &'static Regex {
    static ELEMENT: OnceLock<Regex> = OnceLock::new();
    ELEMENT.get_or_init(|| {
        Regex::new(r#"(?is)<script\b[^>]*\bid\s*=\s*["']?menu-search-biblio["']?[^>]*>(.*?)</script\s*>"#)
            .expect("biblio element pattern is valid")
    })
}

/// Parse biblio text: raw JSON, or an HTML document embedding it.
///
/// A document without the biblio element yields `None`, which callers treat
/// as an empty corpus.
pub fn parse_biblio(content: &str) -> Result<Option<Value>, BiblioError> {
    let trimmed = content.trim_start();

    if trimmed.starts_with('{') {
        return Ok(Some(serde_json::from_str(trimmed)?));
    }

    match biblio_element().captures(content).and_then(|c| c.get(1)) {
        Some(payload) => {
            debug!("Found embedded biblio ({} bytes)", payload.as_str().len());
            Ok(Some(serde_json::from_str(payload.as_str().trim())?))
        }
        None => {
            info!("No #{} element found; search corpus will be empty", BIBLIO_ELEMENT_ID);
            Ok(None)
        }
    }
}

/// Load a biblio file and build the corpus from it
pub fn load_corpus(path: &Path) -> Result<Corpus, BiblioError> {
    let content = fs::read_to_string(path).map_err(|source| BiblioError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let corpus = match parse_biblio(&content)? {
        Some(biblio) => Corpus::from_biblio(&biblio),
        None => Corpus::empty(),
    };

    info!("Loaded {} search entries from {}", corpus.len(), path.display());
    Ok(corpus)
}

/// Load the corpus when a biblio path is given; no path means no corpus
pub fn load_optional_corpus(path: Option<&Path>) -> Result<Corpus, BiblioError> {
    match path {
        Some(path) => load_corpus(path),
        None => {
            info!("No biblio supplied; search corpus is empty");
            Ok(Corpus::empty())
        }
    }
}
