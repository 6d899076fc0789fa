//! Value types for one comparison run.
//!
//! Unlike the newtype identifiers in [`crate::identifiers`], these types carry
//! invariants: citation URLs and titles always come in pairs, and a
//! [`SearchResult`] is immutable once assembled.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::{ModelId, SearchTypeName};

/// Model every request is sent to.
pub const MODEL: &str = "gpt-5";

/// Query issued under every configuration.
pub const TEST_QUERY: &str = "서울시 종로구 맛집 추천";

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

/// How much internal deliberation the model performs before answering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReasoningEffort {
    Low,
    Medium,
    High,
}

impl ReasoningEffort {
    /// Wire representation used in the `reasoning.effort` request field.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

impl std::fmt::Display for ReasoningEffort {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------

/// One named effort level to compare.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchConfiguration {
    name: SearchTypeName,
    effort: ReasoningEffort,
}

impl SearchConfiguration {
    /// Creates a configuration from a validated name and an effort level.
    pub fn new(name: SearchTypeName, effort: ReasoningEffort) -> Self {
        Self { name, effort }
    }

    /// The fixed comparison set, in the order it is run and exported.
    pub fn defaults() -> Vec<Self> {
        vec![
            Self::new(SearchTypeName::from_static("non_reasoning"), ReasoningEffort::Low),
            Self::new(SearchTypeName::from_static("agentic"), ReasoningEffort::Medium),
            Self::new(SearchTypeName::from_static("deep_research"), ReasoningEffort::High),
        ]
    }

    pub fn name(&self) -> &SearchTypeName {
        &self.name
    }

    pub fn effort(&self) -> ReasoningEffort {
        self.effort
    }
}

// ---------------------------------------------------------------------------
// Requests
// ---------------------------------------------------------------------------

/// A single web-search-augmented "create a response" call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WebSearchRequest {
    pub model: ModelId,
    pub effort: ReasoningEffort,
    pub input: String,
}

impl WebSearchRequest {
    /// Builds a request against [`MODEL`] for the given effort and query.
    pub fn new(effort: ReasoningEffort, input: impl Into<String>) -> Self {
        Self {
            model: ModelId::from_static(MODEL),
            effort,
            input: input.into(),
        }
    }
}

// ---------------------------------------------------------------------------
// Citations
// ---------------------------------------------------------------------------

/// Ordered citation URLs with their index-aligned titles.
///
/// Entries can only be added as a pair, so `urls().len() == titles().len()`
/// always holds. Deserialisation goes through the same check.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "UncheckedCitations")]
pub struct Citations {
    urls: Vec<String>,
    titles: Vec<String>,
}

impl Citations {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one citation, keeping encounter order.
    pub fn push(&mut self, url: impl Into<String>, title: impl Into<String>) {
        self.urls.push(url.into());
        self.titles.push(title.into());
    }

    pub fn len(&self) -> usize {
        self.urls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.urls.is_empty()
    }

    pub fn urls(&self) -> &[String] {
        &self.urls
    }

    pub fn titles(&self) -> &[String] {
        &self.titles
    }
}

#[derive(Deserialize)]
struct UncheckedCitations {
    urls: Vec<String>,
    titles: Vec<String>,
}

impl TryFrom<UncheckedCitations> for Citations {
    type Error = String;

    fn try_from(raw: UncheckedCitations) -> Result<Self, Self::Error> {
        if raw.urls.len() != raw.titles.len() {
            return Err(format!(
                "citation lists differ in length: {} urls, {} titles",
                raw.urls.len(),
                raw.titles.len()
            ));
        }
        Ok(Self {
            urls: raw.urls,
            titles: raw.titles,
        })
    }
}

// ---------------------------------------------------------------------------
// Results
// ---------------------------------------------------------------------------

/// Outcome of one configuration's request. Never mutated after creation.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchResult {
    search_type: SearchTypeName,
    query: String,
    duration_seconds: f64,
    response_text: String,
    citations: Citations,
}

impl SearchResult {
    /// Assembles a result; `elapsed` is stored in seconds rounded to two decimals.
    pub fn new(
        search_type: SearchTypeName,
        query: impl Into<String>,
        elapsed: Duration,
        response_text: impl Into<String>,
        citations: Citations,
    ) -> Self {
        Self {
            search_type,
            query: query.into(),
            duration_seconds: round_to_hundredths(elapsed.as_secs_f64()),
            response_text: response_text.into(),
            citations,
        }
    }

    pub fn search_type(&self) -> &SearchTypeName {
        &self.search_type
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn duration_seconds(&self) -> f64 {
        self.duration_seconds
    }

    pub fn response_text(&self) -> &str {
        &self.response_text
    }

    pub fn citation_count(&self) -> usize {
        self.citations.len()
    }

    pub fn citation_urls(&self) -> &[String] {
        self.citations.urls()
    }

    pub fn citation_titles(&self) -> &[String] {
        self.citations.titles()
    }
}

fn round_to_hundredths(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

// ---------------------------------------------------------------------------

/// Ordered, column-uniform collection of results for export.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResultTable {
    rows: Vec<SearchResult>,
}

impl ResultTable {
    /// Column headers, in [`SearchResult`] field order.
    pub const COLUMNS: [&'static str; 7] = [
        "search_type",
        "query",
        "duration_seconds",
        "response_text",
        "citation_count",
        "citation_urls",
        "citation_titles",
    ];

    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, row: SearchResult) {
        self.rows.push(row);
    }

    pub fn rows(&self) -> &[SearchResult] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl FromIterator<SearchResult> for ResultTable {
    fn from_iter<I: IntoIterator<Item = SearchResult>>(iter: I) -> Self {
        Self {
            rows: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_configurations_are_ordered() {
        let configs = SearchConfiguration::defaults();
        let names: Vec<_> = configs.iter().map(|c| c.name().as_str()).collect();
        assert_eq!(names, ["non_reasoning", "agentic", "deep_research"]);

        let efforts: Vec<_> = configs.iter().map(|c| c.effort()).collect();
        assert_eq!(
            efforts,
            [ReasoningEffort::Low, ReasoningEffort::Medium, ReasoningEffort::High]
        );
    }

    #[test]
    fn test_effort_serialises_lowercase() {
        let json = serde_json::to_string(&ReasoningEffort::Medium).unwrap();
        assert_eq!(json, "\"medium\"");
    }

    #[test]
    fn test_request_targets_fixed_model() {
        let req = WebSearchRequest::new(ReasoningEffort::High, TEST_QUERY);
        assert_eq!(req.model.as_str(), "gpt-5");
        assert_eq!(req.input, TEST_QUERY);
    }

    #[test]
    fn test_citation_count_matches_lists() {
        let mut citations = Citations::new();
        citations.push("https://a.example", "A");
        citations.push("https://b.example", "");

        let result = SearchResult::new(
            SearchTypeName::new("agentic").unwrap(),
            "q",
            Duration::from_millis(10),
            "text",
            citations,
        );

        assert_eq!(result.citation_count(), 2);
        assert_eq!(result.citation_urls().len(), 2);
        assert_eq!(result.citation_titles().len(), 2);
        assert_eq!(result.citation_titles()[0], "A");
    }

    #[test]
    fn test_citations_deserialise_only_when_paired() {
        let citations: Citations =
            serde_json::from_str(r#"{"urls":["https://a.example"],"titles":["A"]}"#).unwrap();
        assert_eq!(citations.len(), 1);
        assert_eq!(citations.titles(), ["A"]);

        let err = serde_json::from_str::<Citations>(
            r#"{"urls":["https://a.example","https://b.example"],"titles":[]}"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("differ in length"), "{err}");
    }

    #[test]
    fn test_duration_is_rounded_to_hundredths() {
        let result = SearchResult::new(
            SearchTypeName::new("agentic").unwrap(),
            "q",
            Duration::from_micros(1_234_567),
            "",
            Citations::new(),
        );
        assert_eq!(result.duration_seconds(), 1.23);

        let result = SearchResult::new(
            SearchTypeName::new("agentic").unwrap(),
            "q",
            Duration::from_micros(2_995_001),
            "",
            Citations::new(),
        );
        assert_eq!(result.duration_seconds(), 3.0);
    }
}
