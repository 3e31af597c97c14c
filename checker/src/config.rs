use std::time::Duration;

use clap::Parser;

/// Command line and environment configuration for `api-check`.
#[derive(Debug, Clone, Parser)]
#[command(name = "api-check", about = "Call every endpoint of the API and print the outcome")]
pub struct CheckerConfig {
    /// Scheme, host and port of the server.
    #[arg(long, env = "API_BASE_URL", default_value = "http://127.0.0.1:5000")]
    pub base_url: String,

    /// Upper bound for each call, in seconds. Unset means no explicit limit.
    #[arg(long, env = "API_TIMEOUT_SECS")]
    pub timeout_secs: Option<u64>,
}

impl CheckerConfig {
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}
