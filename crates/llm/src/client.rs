use async_trait::async_trait;
use pipeline::{ApiKey, ProviderError, ResponsesApi, WebSearchRequest};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, warn};

use crate::config::OpenAiConfig;

/// Errors raised while constructing the adapter.
#[derive(Debug, thiserror::Error)]
pub enum LlmError {
    #[error("failed to build HTTP client: {0}")]
    ClientBuild(#[source] reqwest::Error),
}

/// Responses API client.
///
/// Sends exactly one HTTP request per call; there is no retry or back-off.
pub struct OpenAiClient {
    http: reqwest::Client,
    api_key: ApiKey,
    api_base_url: String,
}

#[derive(Serialize)]
struct CreateResponseBody<'a> {
    model: &'a str,
    tools: [Tool; 1],
    reasoning: Reasoning<'a>,
    input: &'a str,
}

#[derive(Serialize)]
struct Tool {
    #[serde(rename = "type")]
    kind: &'static str,
}

#[derive(Serialize)]
struct Reasoning<'a> {
    effort: &'a str,
}

#[derive(Deserialize)]
struct ApiErrorResponse {
    error: Option<ApiErrorDetail>,
}

#[derive(Deserialize)]
struct ApiErrorDetail {
    message: String,
}

impl OpenAiClient {
    pub fn new(config: &OpenAiConfig) -> Result<Self, LlmError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build().map_err(LlmError::ClientBuild)?;

        Ok(Self {
            http,
            api_key: config.api_key.clone(),
            api_base_url: config.api_base_url.clone(),
        })
    }
}

#[async_trait]
impl ResponsesApi for OpenAiClient {
    async fn create_response(&self, request: &WebSearchRequest) -> Result<Value, ProviderError> {
        let url = format!("{}/v1/responses", self.api_base_url);
        let body = CreateResponseBody {
            model: request.model.as_str(),
            tools: [Tool { kind: "web_search" }],
            reasoning: Reasoning {
                effort: request.effort.as_str(),
            },
            input: &request.input,
        };

        debug!(model = %request.model, effort = %request.effort, "creating response");

        let resp = self
            .http
            .post(&url)
            .bearer_auth(self.api_key.expose())
            .json(&body)
            .send()
            .await
            .map_err(|e| ProviderError::Transport {
                message: e.to_string(),
            })?;

        let status = resp.status();
        if !status.is_success() {
            let body_text = resp.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ApiErrorResponse>(&body_text)
                .ok()
                .and_then(|r| r.error)
                .map(|e| e.message)
                .unwrap_or(body_text);
            warn!(status = status.as_u16(), %message, "Responses API returned an error");
            return Err(ProviderError::Api {
                status: status.as_u16(),
                message,
            });
        }

        resp.json::<Value>()
            .await
            .map_err(|e| ProviderError::Decode {
                message: e.to_string(),
            })
    }
}
