use std::time::Duration;

use pipeline::ApiKey;

/// Production endpoint of the Responses API.
pub const DEFAULT_API_BASE_URL: &str = "https://api.openai.com";

/// Connection settings for [`crate::OpenAiClient`].
///
/// `Debug` is safe to derive: [`ApiKey`] redacts itself.
#[derive(Debug, Clone)]
pub struct OpenAiConfig {
    pub api_key: ApiKey,
    pub api_base_url: String,
    /// `None` leaves the transport without an overall request timeout.
    pub timeout: Option<Duration>,
}

impl OpenAiConfig {
    pub fn builder(api_key: ApiKey) -> OpenAiConfigBuilder {
        OpenAiConfigBuilder {
            api_key,
            api_base_url: DEFAULT_API_BASE_URL.into(),
            timeout: None,
        }
    }
}

/// Builder for [`OpenAiConfig`]; tests use it to point at a mock server.
pub struct OpenAiConfigBuilder {
    api_key: ApiKey,
    api_base_url: String,
    timeout: Option<Duration>,
}

impl OpenAiConfigBuilder {
    pub fn api_base_url(mut self, api_base_url: impl Into<String>) -> Self {
        self.api_base_url = api_base_url.into();
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn build(self) -> OpenAiConfig {
        OpenAiConfig {
            api_key: self.api_key,
            api_base_url: self.api_base_url.trim_end_matches('/').to_owned(),
            timeout: self.timeout,
        }
    }
}
