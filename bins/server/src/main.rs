//! Taxline API Server
//!
//! Main entry point for the line-item recompute service.

use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use taxline_api::{AppState, create_router};
use taxline_shared::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env and configuration
    let config = AppConfig::load_with_dotenv()?;

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "taxline=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!(
        default_gst_percentage = %config.engine.default_gst_percentage,
        default_unit_type = %config.engine.default_unit_type,
        "Line defaults configured"
    );

    // Create application state
    let state = AppState::new(&config.engine);

    // Create router
    let app = create_router(state);

    // Start server
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
