//! Launch routes.
//!
//! Routes:
//! - GET /launches/upcoming - scheduled launches
//! - GET /launches/latest - most recent launch
//! - GET /launches/past - completed launches, newest first

use axum::extract::{Query, State};
use axum::{routing::get, Json, Router};
use serde::Deserialize;
use serde_json::Value;

use crate::{AppState, Result};

use super::success;

/// Build launch routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/launches/upcoming", get(get_upcoming))
        .route("/launches/latest", get(get_latest))
        .route("/launches/past", get(get_past))
}

/// GET /launches/upcoming
#[axum::debug_handler]
async fn get_upcoming(State(state): State<AppState>) -> Result<Json<Value>> {
    let data = state.launches.upcoming().await?;
    Ok(success(data))
}

/// GET /launches/latest
#[axum::debug_handler]
async fn get_latest(State(state): State<AppState>) -> Result<Json<Value>> {
    let data = state.launches.latest().await?;
    Ok(success(data))
}

#[derive(Debug, Deserialize)]
pub struct PastLaunchesParams {
    pub limit: Option<u32>,
}

/// GET /launches/past?limit=10
#[axum::debug_handler]
async fn get_past(
    State(state): State<AppState>,
    Query(params): Query<PastLaunchesParams>,
) -> Result<Json<Value>> {
    let data = state.launches.past(params.limit.unwrap_or(10)).await?;
    Ok(success(data))
}
