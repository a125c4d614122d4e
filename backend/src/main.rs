use anyhow::{Context, Result};
use axum::http::HeaderValue;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

use ledger_backend::config::ServerConfig;
use ledger_backend::{create_router, initialize_backend};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = ServerConfig::load()?;
    info!("Starting with configuration: {:?}", config);

    let allowed_origin: HeaderValue = config
        .allowed_origin
        .parse()
        .with_context(|| format!("Invalid allowed origin `{}`", config.allowed_origin))?;

    let backend_config = config.clone();
    let app_state = tokio::task::spawn_blocking(move || initialize_backend(&backend_config)).await?;
    let app = create_router(app_state, allowed_origin);

    let listener = TcpListener::bind(&config.bind_address)
        .await
        .with_context(|| format!("Failed to bind {}", config.bind_address))?;
    info!("Listening on {}", config.bind_address);

    axum::serve(listener, app).await?;

    Ok(())
}
