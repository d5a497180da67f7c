//! Gauntlet HTTP Server binary

use gauntlet_server::{telemetry, AppState, ServerConfig};
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ServerConfig::from_env()?;
    telemetry::init(&config.log_filter)?;

    info!("Starting Gauntlet HTTP Server v{}", env!("CARGO_PKG_VERSION"));

    let app = gauntlet_server::app(AppState::in_memory());

    info!("Listening on {}", config.bind_address);
    let listener = tokio::net::TcpListener::bind(config.bind_address).await?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| anyhow::anyhow!("Server error: {}", e))?;

    info!("Server shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("Received shutdown signal, shutting down gracefully...");
}
