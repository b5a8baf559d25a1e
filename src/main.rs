use anyhow::Result;
use portfolio_site::{config::Config, server};
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file (ignored in production)
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("portfolio_site=info".parse()?),
        )
        .init();

    info!("Starting portfolio site v{}", env!("CARGO_PKG_VERSION"));

    // Load configuration from environment
    let config = Config::from_env()?;
    info!("Codewars API: {}", config.codewars_api_url);

    let state = server::AppState::new(config)?;
    server::serve(state, shutdown_signal()).await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Shutdown signal received"),
        Err(e) => warn!("Failed to listen for shutdown signal: {}", e),
    }
}
