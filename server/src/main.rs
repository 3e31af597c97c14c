use api_server::{ServerConfig, UserDirectory};
use clap::Parser;
use tokio::net::TcpListener;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), std::io::Error> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = ServerConfig::parse();
    let addr = config.addr();
    let listener = TcpListener::bind(&addr).await?;
    let users = UserDirectory::seeded();
    info!(%addr, users = users.len(), "listening");
    api_server::run_until(listener, users, shutdown_signal()).await?;
    info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("shutdown signal received, draining connections"),
        Err(e) => {
            warn!(error = %e, "failed to listen for ctrl-c, running until killed");
            std::future::pending::<()>().await
        }
    }
}
