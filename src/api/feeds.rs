//! Roster and news routes.
//!
//! Routes:
//! - GET /astronauts - astronaut roster
//! - GET /news - space news articles

use axum::extract::{Query, State};
use axum::{routing::get, Json, Router};
use serde::Deserialize;
use serde_json::Value;

use crate::{AppState, Result};

use super::success;

/// Build feed routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/astronauts", get(get_astronauts))
        .route("/news", get(get_news))
}

/// GET /astronauts
#[axum::debug_handler]
async fn get_astronauts(State(state): State<AppState>) -> Result<Json<Value>> {
    let data = state.feeds.astronauts().await?;
    Ok(success(data))
}

#[derive(Debug, Deserialize)]
pub struct NewsParams {
    pub limit: Option<u32>,
}

/// GET /news?limit=10
#[axum::debug_handler]
async fn get_news(
    State(state): State<AppState>,
    Query(params): Query<NewsParams>,
) -> Result<Json<Value>> {
    let data = state.feeds.news(params.limit.unwrap_or(10)).await?;
    Ok(success(data))
}
