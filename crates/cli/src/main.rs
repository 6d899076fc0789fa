//! GPT-5 web-search comparison entry point.
//!
//! Takes no arguments. Reads the credential from `API_KEY` or
//! `OPENAI_API_KEY` (a `.env` file in the working directory is honoured),
//! runs the three effort levels in order, and writes the timestamped CSV and
//! XLSX files.

use std::process::ExitCode;

use gpt5_web_search::{connect_openai, run, Telemetry};
use pipeline::RunId;
use tracing::{error, info_span, Instrument};

#[tokio::main]
async fn main() -> ExitCode {
    dotenv::dotenv().ok();

    let telemetry = match Telemetry::init() {
        Ok(telemetry) => telemetry,
        Err(err) => {
            eprintln!("{err:#}");
            return ExitCode::FAILURE;
        }
    };

    let run_id = RunId::new_random();
    let mut stdout = std::io::stdout().lock();
    let result = run(|name| std::env::var(name).ok(), connect_openai, &mut stdout)
        .instrument(info_span!("web_search_run", %run_id))
        .await;

    let code = match result {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            error!(error = %format!("{err:#}"), "run failed");
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    };

    telemetry.shutdown();
    code
}
