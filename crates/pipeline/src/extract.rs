//! Best-effort extraction of answer text and citations from a Responses API
//! payload.
//!
//! The payload schema is not contractually stable, so both public entry points
//! are total: [`extract_response_text`] and [`extract_citations`] never fail and
//! fall back to empty values on any shape they do not recognise. The fallible
//! walkers underneath return [`ExtractionError`], which is mapped to the empty
//! default at the public boundary and never escapes this module.

use serde_json::{Map, Value};
use thiserror::Error;

use crate::Citations;

/// Annotation `type` that marks a web citation.
const URL_CITATION: &str = "url_citation";

/// Why a payload did not have the expected structure.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
enum ExtractionError {
    #[error("field `{field}` is not {expected}")]
    UnexpectedType {
        field: &'static str,
        expected: &'static str,
    },
}

type Extracted<T> = Result<T, ExtractionError>;

// ---------------------------------------------------------------------------
// Shape classification
// ---------------------------------------------------------------------------

/// The top-level layouts a response payload is recognised as.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ResponseShape<'a> {
    /// Carries the aggregated `output_text` field (a `null` value counts as empty).
    FlatText {
        text: Option<&'a Value>,
        output: Option<&'a Value>,
    },
    /// No aggregated text; content must be found under `output[*].content[*]`.
    NestedOutput(&'a Value),
    /// Neither field is present, or the payload is not an object.
    Unrecognized,
}

impl<'a> ResponseShape<'a> {
    pub fn classify(response: &'a Value) -> Self {
        let Some(object) = response.as_object() else {
            return Self::Unrecognized;
        };

        match (object.get("output_text"), object.get("output")) {
            (Some(text), output) => Self::FlatText {
                text: Some(text).filter(|t| !t.is_null()),
                output,
            },
            (None, Some(output)) => Self::NestedOutput(output),
            (None, None) => Self::Unrecognized,
        }
    }

    fn output(self) -> Option<&'a Value> {
        match self {
            Self::FlatText { output, .. } => output,
            Self::NestedOutput(output) => Some(output),
            Self::Unrecognized => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Text
// ---------------------------------------------------------------------------

/// Returns the response's answer text, or `""` when none can be found.
///
/// The aggregated `output_text` field wins when present. Otherwise the first
/// content item under `output` with a `text` field is used.
pub fn extract_response_text(response: &Value) -> String {
    try_extract_text(ResponseShape::classify(response)).unwrap_or_else(|err| {
        tracing::debug!(error = %err, "response text not extractable");
        String::new()
    })
}

fn try_extract_text(shape: ResponseShape<'_>) -> Extracted<String> {
    match shape {
        ResponseShape::FlatText { text: None, .. } => Ok(String::new()),
        ResponseShape::FlatText { text: Some(text), .. } => text
            .as_str()
            .map(str::to_owned)
            .ok_or(ExtractionError::UnexpectedType {
                field: "output_text",
                expected: "a string",
            }),
        // Walked lazily: items after the first text are never inspected.
        ResponseShape::NestedOutput(output) => {
            for item in as_array(output, "output")? {
                let Some(content) = as_object(item, "output[]")?.get("content") else {
                    continue;
                };
                for entry in as_array(content, "content")? {
                    if let Some(text) = as_object(entry, "content[]")?.get("text") {
                        return text.as_str().map(str::to_owned).ok_or(
                            ExtractionError::UnexpectedType {
                                field: "text",
                                expected: "a string",
                            },
                        );
                    }
                }
            }
            Ok(String::new())
        }
        ResponseShape::Unrecognized => Ok(String::new()),
    }
}

// ---------------------------------------------------------------------------
// Citations
// ---------------------------------------------------------------------------

/// Collects `url_citation` annotations in encounter order.
///
/// Any structural surprise yields an empty [`Citations`] rather than a partial one.
pub fn extract_citations(response: &Value) -> Citations {
    try_extract_citations(ResponseShape::classify(response)).unwrap_or_else(|err| {
        tracing::debug!(error = %err, "citations not extractable");
        Citations::new()
    })
}

fn try_extract_citations(shape: ResponseShape<'_>) -> Extracted<Citations> {
    let mut citations = Citations::new();
    let Some(output) = shape.output() else {
        return Ok(citations);
    };

    for content in content_items(output)? {
        let Some(annotations) = content.get("annotations") else {
            continue;
        };
        for annotation in as_array(annotations, "annotations")? {
            let annotation = as_object(annotation, "annotations[]")?;
            if annotation.get("type").and_then(Value::as_str) != Some(URL_CITATION) {
                continue;
            }
            citations.push(
                optional_str(annotation, "url")?,
                optional_str(annotation, "title")?,
            );
        }
    }

    Ok(citations)
}

// ---------------------------------------------------------------------------
// Structural helpers
// ---------------------------------------------------------------------------

/// Flattens `output[*].content[*]` into content objects, in traversal order.
///
/// Output items without a `content` field (tool calls such as
/// `web_search_call`) carry no text and are skipped.
fn content_items(output: &Value) -> Extracted<Vec<&Map<String, Value>>> {
    let mut items = Vec::new();
    for item in as_array(output, "output")? {
        let item = as_object(item, "output[]")?;
        let Some(content) = item.get("content") else {
            continue;
        };
        for entry in as_array(content, "content")? {
            items.push(as_object(entry, "content[]")?);
        }
    }
    Ok(items)
}

fn as_array<'a>(value: &'a Value, field: &'static str) -> Extracted<&'a Vec<Value>> {
    value.as_array().ok_or(ExtractionError::UnexpectedType {
        field,
        expected: "an array",
    })
}

fn as_object<'a>(value: &'a Value, field: &'static str) -> Extracted<&'a Map<String, Value>> {
    value.as_object().ok_or(ExtractionError::UnexpectedType {
        field,
        expected: "an object",
    })
}

/// Reads a string field, treating a missing or `null` field as `""`.
fn optional_str(object: &Map<String, Value>, field: &'static str) -> Extracted<String> {
    match object.get(field) {
        None | Some(Value::Null) => Ok(String::new()),
        Some(Value::String(s)) => Ok(s.clone()),
        Some(_) => Err(ExtractionError::UnexpectedType {
            field,
            expected: "a string",
        }),
    }
}
