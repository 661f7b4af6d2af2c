//! Interactive watch mode
//!
//! Each input line is the current content of the search box. Lines arrive per
//! keystroke, so queries are debounced and only the text present once typing
//! pauses is searched.

use crate::search::{debounce, SearchEngine};
use crate::tools::search::format_results_markdown;
use anyhow::Result;
use std::sync::Arc;
use std::time::Duration;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::debug;

/// Feed `input` lines through a debouncer and pass rendered results to `sink`.
///
/// Inactive searches produce no output.
pub async fn watch<R, S>(engine: Arc<SearchEngine>, input: R, delay: Duration, mut sink: S) -> Result<()>
where
    R: AsyncBufRead + Unpin,
    S: FnMut(String) + Send + 'static,
{
    let debouncer = debounce(delay, move |query: String| {
        let outcome = engine.search(&query);
        if !outcome.active {
            debug!("Search inactive for '{}'", query);
            return;
        }
        sink(format_results_markdown(&outcome));
    });

    let mut lines = input.lines();
    while let Some(line) = lines.next_line().await? {
        debouncer.call(line);
    }

    debouncer.finish().await;
    Ok(())
}
