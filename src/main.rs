//! NASA Explorer - space-data aggregation gateway
//!
//! A thin HTTP layer that proxies public space-data APIs (APOD, Mars rover
//! imagery, near-Earth objects, live ISS position, launches, astronauts,
//! space news, media search) to a browser client.

use std::net::SocketAddr;

use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use nasa_explorer::{api, config, AppState, Result};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "nasa_explorer=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = config::init();
    tracing::info!(
        "Starting NASA Explorer gateway on {}:{}",
        config.server.host,
        config.server.port
    );
    tracing::info!("Environment: {}", config.server.environment);

    // Initialize application state
    let state = AppState::new(config);

    // Build router
    let app = api::router(state);

    // Start server
    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port)
        .parse()
        .expect("Invalid address");

    let listener = TcpListener::bind(addr).await?;
    tracing::info!("Listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
