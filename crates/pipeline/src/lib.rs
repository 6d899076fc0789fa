//! Core domain for the GPT-5 web-search effort comparison.
//!
//! This crate contains the search configurations, result types, the tolerant
//! response extractor, the [`ResponsesApi`] port, and the sequential runner.
//! Infrastructure crates implement the port; they never add domain rules.
//!
//! ## Architectural Layer
//!
//! **Business logic + port definitions.** This crate has no I/O dependencies
//! beyond the progress writer handed to the runner. It defines *what* is
//! needed; `llm` and `export` define *how* to supply it.
//!
//! ## Module Layout
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`identifiers`] | Newtype identifiers (`SearchTypeName`, `ModelId`, `RunId`) |
//! | [`types`] | Configurations, requests, citations, results |
//! | [`errors`] | `ConfigError` and `ProviderError` |
//! | [`config`] | Credential resolution |
//! | [`extract`] | Total text/citation extraction over raw JSON |
//! | [`ports`] | The `ResponsesApi` trait |
//! | [`runner`] | Per-configuration runner and the ordered suite |

pub mod config;
pub mod errors;
pub mod extract;
pub mod identifiers;
pub mod ports;
pub mod runner;
pub mod types;

// Re-export everything at the crate root for ergonomic usage by downstream crates.
pub use config::{ApiKey, API_KEY_VARIABLES};
pub use errors::{ConfigError, ProviderError};
pub use extract::{extract_citations, extract_response_text, ResponseShape};
pub use identifiers::{ModelId, RunId, SearchTypeName};
pub use ports::ResponsesApi;
pub use runner::{preview, run_search_suite, run_web_search, RunError, PREVIEW_CHARS};
pub use types::{
    Citations, ReasoningEffort, ResultTable, SearchConfiguration, SearchResult,
    WebSearchRequest, MODEL, TEST_QUERY,
};
