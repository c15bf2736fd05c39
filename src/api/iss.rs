//! ISS routes.
//!
//! Routes:
//! - GET /iss/position - live position, cached for a short TTL
//! - GET /iss/pass-times - static unavailability notice + live position

use axum::extract::{Query, State};
use axum::{routing::get, Json, Router};
use serde::Deserialize;
use serde_json::Value;

use crate::{AppState, Error, Result};

use super::success;

/// Build ISS routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/iss/position", get(get_position))
        .route("/iss/pass-times", get(get_pass_times))
}

/// Current ISS position.
///
/// GET /iss/position
///
/// Served from the cache slot when a success is younger than the TTL;
/// otherwise fetched (primary, then fallback) and re-cached.
#[axum::debug_handler]
async fn get_position(State(state): State<AppState>) -> Result<Json<Value>> {
    if let Some(cached) = state.iss_cache.get().await {
        return Ok(success(cached));
    }

    let data = state.satellite.current_position().await?;
    state.iss_cache.put(data.clone()).await;

    Ok(success(data))
}

#[derive(Debug, Deserialize)]
pub struct PassTimesParams {
    pub lat: Option<String>,
    pub lon: Option<String>,
    #[allow(dead_code)]
    pub alt: Option<String>,
}

/// Pass-time predictions. The upstream service is discontinued, so after
/// validating the coordinates this returns a notice plus the live position.
///
/// GET /iss/pass-times?lat=51.5&lon=-0.1
#[axum::debug_handler]
async fn get_pass_times(
    State(state): State<AppState>,
    Query(params): Query<PassTimesParams>,
) -> Result<Json<Value>> {
    if params.lat.is_none() || params.lon.is_none() {
        return Err(Error::Validation(
            "Latitude (lat) and longitude (lon) parameters are required".into(),
        ));
    }

    let data = state.satellite.pass_times().await?;
    Ok(success(data))
}
