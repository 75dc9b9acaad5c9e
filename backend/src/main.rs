//! # Provider Service
//!
//! Entry point for the mock price/balance provider.

use backend::{app, AppState, Config};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("backend=debug,tower_http=info")),
        )
        .init();

    let config = Config::from_env()?;
    config.validate()?;

    let state = AppState::new(&config);
    let router = app(state);

    let listener = tokio::net::TcpListener::bind(&config.bind_address).await?;
    tracing::info!("Provider listening on http://{}", config.bind_address);

    axum::serve(listener, router).await?;
    Ok(())
}
