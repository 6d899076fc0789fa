//! Port traits implemented by infrastructure crates.

use async_trait::async_trait;
use serde_json::Value;

use crate::{ProviderError, WebSearchRequest};

/// The hosted "create a response" operation.
///
/// Implementations return the raw JSON payload untouched; interpreting it is
/// the job of [`crate::extract`]. One instance is built by the composition
/// root and passed by reference to every call.
#[async_trait]
pub trait ResponsesApi: Send + Sync {
    async fn create_response(&self, request: &WebSearchRequest) -> Result<Value, ProviderError>;
}
