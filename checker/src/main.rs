use std::process::ExitCode;

use api_checker::{suite, ApiChecker, CheckerConfig, HttpClient, UreqTransport};
use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let config = CheckerConfig::parse();
    let client = HttpClient::new(&config.base_url, UreqTransport::new(config.timeout()));
    info!(server_url = %client.server_url(), timeout = ?config.timeout(), "checking api");

    let mut checker = ApiChecker::new(client, std::io::stdout().lock());

    match suite::run(&mut checker) {
        Ok(records) => {
            info!(calls = records.len(), "done");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(error = %e, "check aborted");
            ExitCode::FAILURE
        }
    }
}
