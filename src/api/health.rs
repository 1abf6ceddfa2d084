//! Health check endpoints

use axum::{Json, Router, routing::get};
use serde::Serialize;

use crate::app::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}

#[derive(Serialize)]
pub struct ReadyResponse {
    pub ready: bool,
    pub authors: usize,
    pub films: usize,
}

/// Health check - always returns OK if the server is running
async fn healthz() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Readiness check - reports what the store currently holds
async fn readyz(
    axum::extract::State(state): axum::extract::State<AppState>,
) -> Json<ReadyResponse> {
    Json(ReadyResponse {
        ready: true,
        authors: state.db.authors().count(),
        films: state.db.films().count(),
    })
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
}
