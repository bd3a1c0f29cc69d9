//! Student Registry Service
//!
//! Serves the student entry form and persists submissions to a JSON file.

use anyhow::{Context, Result};
use std::sync::Arc;
use student_registry::{create_router, AppState, Config, JsonFileStore};
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "student_registry=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Student Registry Service");

    let config = Config::from_env().context("Failed to load configuration")?;

    let store = JsonFileStore::new(config.data_file.clone());
    info!("Data file: {}", store.path().display());
    let app = create_router(AppState::new(Arc::new(store)));

    let listener = TcpListener::bind(&config.address())
        .await
        .with_context(|| format!("Failed to bind to {}", config.address()))?;

    info!("Server running at http://{}", config.address());

    axum::serve(listener, app)
        .await
        .context("Server error")?;

    Ok(())
}
