//! Credential resolution.
//!
//! The environment is passed in as a lookup function so callers (and tests)
//! decide where values come from.

use crate::ConfigError;

/// Environment variables consulted for the credential, in priority order.
pub const API_KEY_VARIABLES: [&str; 2] = ["API_KEY", "OPENAI_API_KEY"];

/// Marker found in template `.env` files that were never filled in.
const PLACEHOLDER_MARKER: &str = "your-api-key";

/// A bearer credential for the hosted API.
///
/// `Debug` is implemented by hand so the secret never reaches logs.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    /// Resolves the first non-empty variable from [`API_KEY_VARIABLES`].
    ///
    /// A value containing the template placeholder is rejected rather than
    /// falling through to the next variable.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let found = API_KEY_VARIABLES
            .iter()
            .find_map(|&name| lookup(name).filter(|v| !v.is_empty()).map(|v| (name, v)));

        match found {
            None => Err(ConfigError::MissingCredential {
                variables: API_KEY_VARIABLES.to_vec(),
            }),
            Some((variable, value)) if value.contains(PLACEHOLDER_MARKER) => {
                Err(ConfigError::PlaceholderCredential { variable })
            }
            Some((_, value)) => Ok(Self(value)),
        }
    }

    /// Returns the raw secret for use in an `Authorization` header.
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("ApiKey(<redacted>)")
    }
}
