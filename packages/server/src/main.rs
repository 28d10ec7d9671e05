// Main entry point for the travel-search API server

use std::sync::Arc;

use anyhow::{Context, Result};
use server_core::{build_app, Config};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use travel_search::{HttpSearcher, SimulatedSearcher, WebSearcher};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,server_core=debug,travel_search=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting travel-package search API");

    // Load configuration
    let config = Config::from_env().context("Failed to load configuration")?;

    // Choose the search backend
    let searcher: Arc<dyn WebSearcher> = match &config.search_backend_url {
        Some(url) => {
            tracing::info!(endpoint = %url, "using HTTP search backend");
            Arc::new(HttpSearcher::new(url).context("Invalid SEARCH_BACKEND_URL")?)
        }
        None => {
            tracing::info!(
                delay_ms = config.simulated_delay.as_millis() as u64,
                "no SEARCH_BACKEND_URL set, using simulated backend"
            );
            Arc::new(SimulatedSearcher::new().with_delay(config.simulated_delay))
        }
    };

    // Build application
    let app = build_app(searcher);

    // Start server
    let addr = format!("0.0.0.0:{}", config.port);
    tracing::info!("Starting server on {}", addr);
    tracing::info!("Search endpoint: http://localhost:{}/api/search", config.port);
    tracing::info!("Health check: http://localhost:{}/health", config.port);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .context("Failed to bind to address")?;

    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
