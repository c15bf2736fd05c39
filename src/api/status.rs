//! Status routes.
//!
//! Routes:
//! - GET /health - Basic health check with uptime and environment

use axum::extract::State;
use axum::{routing::get, Json, Router};
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::AppState;

/// Build status routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub message: &'static str,
    pub timestamp: DateTime<Utc>,
    /// Seconds since the server started.
    pub uptime: u64,
    pub environment: String,
}

/// Basic health check.
///
/// GET /health
///
/// Returns 200 if the server is running. Used by load balancers
/// for basic availability checking.
#[axum::debug_handler]
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "OK",
        message: "NASA Explorer backend is running",
        timestamp: Utc::now(),
        uptime: state.started_at.elapsed().as_secs(),
        environment: state.environment.clone(),
    })
}
