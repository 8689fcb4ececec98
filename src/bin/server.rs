use std::sync::Arc;

use tracing::info;

use bingobot::api::{self, AppState};
use bingobot::core::config::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    bingobot::setup_logging();

    let config = AppConfig::from_env().map_err(|e| anyhow::anyhow!("Config error: {e}"))?;
    let bind_address = config.bind_address.clone();

    let state = Arc::new(AppState::from_config(config));
    let app = api::router(state);

    let listener = tokio::net::TcpListener::bind(&bind_address).await?;
    info!("Webhook relay listening on http://{}/callback", bind_address);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to install ctrl-c handler");
    info!("Shutdown signal received");
}
