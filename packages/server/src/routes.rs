//! HTTP handlers.

use axum::{extract::Extension, http::StatusCode, Json};
use serde::Serialize;
use travel_search::{SearchParams, TravelPackage};

use crate::app::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    status: String,
}

/// Health check endpoint
pub async fn health_handler() -> (StatusCode, Json<HealthResponse>) {
    (
        StatusCode::OK,
        Json(HealthResponse {
            status: "ok".to_string(),
        }),
    )
}

/// Run one travel-package search.
///
/// Always answers 200 with a JSON array: backend failures are absorbed by
/// fallback generation inside the orchestrator, and an empty array is a
/// valid "no results" outcome.
pub async fn search_handler(
    Extension(state): Extension<AppState>,
    Json(params): Json<SearchParams>,
) -> Json<Vec<TravelPackage>> {
    tracing::info!(destination = %params.destination, "search request");
    let packages = state.search.search(&params).await;
    Json(packages)
}
