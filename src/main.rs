use anyhow::Result;
use http_client_metrics::probe::Prober;
use http_client_metrics::{create_router, create_transport, AppConfig};
use std::sync::Arc;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing subscriber to log to stdout
    tracing_subscriber::fmt::try_init().ok();

    // Load all configuration from environment
    let config = AppConfig::from_env()?;

    let transport = Arc::new(create_transport(&config.instrumentation)?);

    if config.probe.targets.is_empty() {
        info!("No probe targets configured");
    } else {
        let prober = Prober::new(Arc::clone(&transport), &config.probe)?;
        tokio::spawn(prober.run());
    }

    let app = create_router(transport);

    info!("Starting at endpoint:{}", config.server.bind_addr);
    info!("Starting HTTP client metrics v{}...", env!("CARGO_PKG_VERSION"));

    let listener = tokio::net::TcpListener::bind(&config.server.bind_addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            tokio::signal::ctrl_c().await.ok();
            info!("Shutdown signal received");
        })
        .await?;

    Ok(())
}
