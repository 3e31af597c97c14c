use clap::Parser;

/// Command line and environment configuration for `api-server`.
#[derive(Debug, Clone, Parser)]
#[command(name = "api-server", about = "Greeting, calculator and user lookup REST service")]
pub struct ServerConfig {
    /// Interface to bind.
    #[arg(long, env = "API_HOST", default_value = "127.0.0.1")]
    pub host: String,

    /// Port to listen on.
    #[arg(long, env = "PORT", default_value_t = 5000)]
    pub port: u16,
}

impl ServerConfig {
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
