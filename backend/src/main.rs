//! Car Park Finder - Backend Server
//!
//! Pick a car park and a date, get the forecast number of free spots.

use std::net::SocketAddr;

use cpf_backend::{create_app, AppState, Config};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "cpf_server=debug,cpf_backend=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = Config::load()?;

    tracing::info!("Starting Car Park Finder Server");
    tracing::info!("Environment: {}", config.environment);
    tracing::info!(
        "Forecast artifacts: {} ({}, cache {})",
        config.forecast.storage_root.display(),
        config.forecast.format,
        if config.forecast.cache_enabled { "on" } else { "off" }
    );

    let host: std::net::IpAddr = config.server.host.parse()?;
    let addr = SocketAddr::from((host, config.server.port));

    // Create application state
    let state = AppState::from_config(config)?;
    tracing::info!(
        "Reference data: {} car parks, {} facilities",
        state.occupancy.reference().car_parks().len(),
        state.occupancy.reference().capacities().len()
    );

    // Build application
    let app = create_app(state);

    // Start server
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
