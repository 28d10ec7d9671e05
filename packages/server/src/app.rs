//! Application setup and router configuration.

use std::sync::Arc;

use axum::{
    extract::Extension,
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use travel_search::{TravelSearch, WebSearcher};

use crate::routes::{health_handler, search_handler};

/// The orchestrator as the server holds it: backend chosen at startup.
pub type AppSearch = TravelSearch<Arc<dyn WebSearcher>>;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub search: Arc<AppSearch>,
}

/// Build the Axum application router
pub fn build_app(searcher: Arc<dyn WebSearcher>) -> Router {
    let state = AppState {
        search: Arc::new(TravelSearch::new(searcher)),
    };

    Router::new()
        .route("/health", get(health_handler))
        .route("/api/search", post(search_handler))
        .layer(Extension(state))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
