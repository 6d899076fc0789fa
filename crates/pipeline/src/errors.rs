//! Error types for the web-search comparison domain.
//!
//! [`ConfigError`] halts the run before any network activity.
//! [`ProviderError`] is produced by [`crate::ResponsesApi`] implementations and
//! is never caught by the runner: a failed request ends the whole run.
//!
//! Extraction failures are deliberately absent here. They are recovered inside
//! [`crate::extract`] and never reach a caller.

use thiserror::Error;

// ---------------------------------------------------------------------------
// Configuration errors
// ---------------------------------------------------------------------------

/// The credential needed to talk to the hosted API is unusable.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// None of the accepted environment variables hold a value.
    #[error("API key is not set; export one of {}", .variables.join(" or "))]
    MissingCredential {
        /// Variable names that were consulted, in lookup order.
        variables: Vec<&'static str>,
    },

    /// A value was found but it is still the template placeholder.
    #[error("API key in {variable} is a placeholder; replace it with a real key")]
    PlaceholderCredential {
        /// Variable the placeholder was read from.
        variable: &'static str,
    },
}

// ---------------------------------------------------------------------------
// Provider errors
// ---------------------------------------------------------------------------

/// A request to the hosted Responses API failed.
///
/// Produced by infrastructure adapters; the domain never retries on any variant.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// The request never produced an HTTP response (DNS, TLS, connect, timeout).
    #[error("transport failure: {message}")]
    Transport {
        /// Description of the underlying transport error.
        message: String,
    },

    /// The API answered with a non-success status.
    #[error("API error (status {status}): {message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Error message reported by the API, or the raw body.
        message: String,
    },

    /// The body of a successful response was not JSON.
    #[error("response body could not be decoded: {message}")]
    Decode {
        /// Description of the decoding failure.
        message: String,
    },
}
