use tracing_subscriber::EnvFilter;

use forecast_service::{AppState, ServiceConfig, ServiceError, SERVICE_NAME};

#[tokio::main]
async fn main() -> Result<(), ServiceError> {
    // Initialise tracing.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cfg = ServiceConfig::from_env()?;
    let addr = cfg.socket_addr()?;
    tracing::debug!(?cfg, "loaded configuration");

    let app = forecast_service::app(AppState::new(cfg));

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("{SERVICE_NAME} listening on http://{addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("Failed to listen for Ctrl+C: {e}");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received, gracefully stopping");
}
