//! The end-to-end run: settings, one client, three searches, one export.

use std::io::Write;

use anyhow::Context;
use export::{export_results, ExportPaths};
use llm::{OpenAiClient, OpenAiConfig};
use pipeline::{run_search_suite, ResponsesApi, SearchConfiguration, TEST_QUERY};
use tracing::info;

use crate::settings::Settings;

/// Builds the production Responses API client.
pub fn connect_openai(settings: &Settings) -> anyhow::Result<Box<dyn ResponsesApi>> {
    let config = OpenAiConfig::builder(settings.api_key.clone())
        .api_base_url(&settings.api_base_url)
        .build();
    Ok(Box::new(OpenAiClient::new(&config)?))
}

/// Runs the comparison and exports the results.
///
/// Settings are resolved through `lookup` before `connect` is called, so a
/// missing credential ends the run without constructing a client or sending
/// anything. Any request failure ends the run and nothing is exported.
pub async fn run<L, C, W>(lookup: L, connect: C, out: &mut W) -> anyhow::Result<ExportPaths>
where
    L: Fn(&str) -> Option<String>,
    C: FnOnce(&Settings) -> anyhow::Result<Box<dyn ResponsesApi>>,
    W: Write,
{
    let settings = Settings::from_lookup(lookup)?;
    let api = connect(&settings).context("failed to construct API client")?;

    let configs = SearchConfiguration::defaults();
    info!(configurations = configs.len(), "starting web search comparison");

    let table = run_search_suite(api.as_ref(), TEST_QUERY, &configs, out).await?;
    let paths = export_results(&table, &settings.results_dir).context("failed to export results")?;

    writeln!(
        out,
        "\nResults saved:\n- CSV: {}\n- Excel: {}",
        paths.csv.display(),
        paths.xlsx.display()
    )?;
    Ok(paths)
}
