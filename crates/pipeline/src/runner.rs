//! Sequential execution of the comparison run.
//!
//! [`run_web_search`] handles one configuration; [`run_search_suite`] walks the
//! configurations in order, one request in flight at a time. Progress lines go
//! to the supplied writer (stdout in the binary) and structured events go to
//! `tracing`.
//!
//! A [`ProviderError`] aborts the suite immediately and the results collected
//! so far are dropped with it.

use std::io::Write;
use std::time::Instant;

use thiserror::Error;
use tracing::{info, instrument};

use crate::extract::{extract_citations, extract_response_text};
use crate::{
    ProviderError, ResponsesApi, ResultTable, SearchConfiguration, SearchResult, WebSearchRequest,
};

/// Maximum number of characters shown when previewing a response.
pub const PREVIEW_CHARS: usize = 300;

/// Failure while running the suite.
#[derive(Debug, Error)]
pub enum RunError {
    #[error(transparent)]
    Provider(#[from] ProviderError),

    #[error("failed to write progress output: {0}")]
    Output(#[from] std::io::Error),
}

/// Issues one web-search request for `config` and assembles its result.
#[instrument(skip_all, fields(search_type = %config.name(), effort = %config.effort()))]
pub async fn run_web_search<W: Write>(
    api: &dyn ResponsesApi,
    query: &str,
    config: &SearchConfiguration,
    out: &mut W,
) -> Result<SearchResult, RunError> {
    writeln!(out, "[{}] search started...", config.name())?;

    let request = WebSearchRequest::new(config.effort(), query);
    let started = Instant::now();
    let response = api.create_response(&request).await?;
    let elapsed = started.elapsed();

    let result = SearchResult::new(
        config.name().clone(),
        query,
        elapsed,
        extract_response_text(&response),
        extract_citations(&response),
    );

    info!(
        duration_seconds = result.duration_seconds(),
        citation_count = result.citation_count(),
        response_chars = result.response_text().chars().count(),
        "web search completed"
    );
    writeln!(
        out,
        "[{}] done ({:.2}s)",
        config.name(),
        result.duration_seconds()
    )?;

    Ok(result)
}

/// Runs every configuration in declaration order and previews each answer.
pub async fn run_search_suite<W: Write>(
    api: &dyn ResponsesApi,
    query: &str,
    configs: &[SearchConfiguration],
    out: &mut W,
) -> Result<ResultTable, RunError> {
    let mut table = ResultTable::new();
    for config in configs {
        let result = run_web_search(api, query, config, out).await?;
        writeln!(out, "\nPreview: {} ...", preview(result.response_text(), PREVIEW_CHARS))?;
        table.push(result);
    }
    Ok(table)
}

/// Returns at most `max_chars` characters of `text`, never splitting a code point.
pub fn preview(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((end, _)) => &text[..end],
        None => text,
    }
}
