//! OpenAI Responses API adapter.
//!
//! Implements the [`pipeline::ResponsesApi`] trait over HTTPS with `reqwest`.
//!
//! ## Architectural Layer
//!
//! **Infrastructure.** Request formatting, authentication, and mapping of HTTP
//! failures onto [`pipeline::ProviderError`] live here. The response payload is
//! handed back as raw JSON; interpreting it belongs to [`pipeline::extract`].

mod client;
mod config;

pub use client::{LlmError, OpenAiClient};
pub use config::{OpenAiConfig, OpenAiConfigBuilder, DEFAULT_API_BASE_URL};
