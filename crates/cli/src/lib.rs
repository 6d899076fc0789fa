//! Composition root for the GPT-5 web-search comparison.
//!
//! Responsibilities:
//!
//! 1. **Resolve settings** — credential, endpoint and output directory from the
//!    environment (after loading `.env` in the binary).
//! 2. **Wire observability** — `tracing-subscriber` with a JSON layer and an
//!    optional OpenTelemetry OTLP exporter.
//! 3. **Construct infrastructure** — one `OpenAiClient`, injected into the
//!    runner as a [`pipeline::ResponsesApi`].
//! 4. **Run and export** — three sequential searches, then one CSV/XLSX export.

pub mod app;
pub mod settings;
pub mod telemetry;

pub use app::{connect_openai, run};
pub use settings::Settings;
pub use telemetry::Telemetry;
