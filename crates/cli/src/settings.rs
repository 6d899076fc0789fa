//! Runtime settings resolved from the environment.

use std::path::PathBuf;

use llm::DEFAULT_API_BASE_URL;
use pipeline::{ApiKey, ConfigError};

/// Everything the run needs from the environment.
#[derive(Debug, Clone)]
pub struct Settings {
    pub api_key: ApiKey,
    /// `OPENAI_BASE_URL`, defaulting to the production endpoint.
    pub api_base_url: String,
    /// `RESULTS_DIR`, defaulting to the working directory.
    pub results_dir: PathBuf,
}

impl Settings {
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = ApiKey::from_lookup(&lookup)?;

        let api_base_url = lookup("OPENAI_BASE_URL")
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_API_BASE_URL.into());

        let results_dir = lookup("RESULTS_DIR")
            .filter(|v| !v.is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("."));

        Ok(Self {
            api_key,
            api_base_url,
            results_dir,
        })
    }
}
