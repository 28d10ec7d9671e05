//! Travel-package search API server.
//!
//! A thin axum front over the `travel-search` library: one search endpoint
//! (`POST /api/search`) and a health check. The search backend is chosen at
//! startup: a real HTTP backend when `SEARCH_BACKEND_URL` is set, the
//! simulated backend otherwise.

pub mod app;
pub mod config;
pub mod routes;

pub use app::{build_app, AppState};
pub use config::Config;
