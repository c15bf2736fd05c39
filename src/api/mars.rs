//! Mars rover photo routes.
//!
//! Routes:
//! - GET /mars-rovers/:rover/photos - filtered photo query
//! - GET /mars-rovers/:rover/latest-photos - most recent photo set
//!
//! `data` is always the photo array itself, so clients can render an
//! empty gallery without inspecting the upstream envelope.

use axum::extract::{Path, Query, State};
use axum::{routing::get, Json, Router};
use serde::Deserialize;
use serde_json::Value;

use crate::services::RoverPhotoQuery;
use crate::{AppState, Result};

use super::success;

/// Build Mars rover routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/mars-rovers/:rover/photos", get(get_rover_photos))
        .route("/mars-rovers/:rover/latest-photos", get(get_latest_photos))
}

#[derive(Debug, Deserialize)]
pub struct RoverPhotosParams {
    pub sol: Option<String>,
    pub earth_date: Option<String>,
    pub camera: Option<String>,
    pub page: Option<u32>,
}

/// Photos for a rover, filtered by sol or Earth date and camera.
///
/// GET /mars-rovers/:rover/photos?sol=1000&camera=NAVCAM&page=1
#[axum::debug_handler]
async fn get_rover_photos(
    State(state): State<AppState>,
    Path(rover): Path<String>,
    Query(params): Query<RoverPhotosParams>,
) -> Result<Json<Value>> {
    let filters = RoverPhotoQuery {
        sol: params.sol,
        earth_date: params.earth_date,
        camera: params.camera,
        page: params.page,
    };

    let data = state.nasa.rover_photos(&rover, &filters).await?;
    Ok(success(data))
}

/// Most recent photo set for a rover.
///
/// GET /mars-rovers/:rover/latest-photos
#[axum::debug_handler]
async fn get_latest_photos(
    State(state): State<AppState>,
    Path(rover): Path<String>,
) -> Result<Json<Value>> {
    let data = state.nasa.latest_rover_photos(&rover).await?;
    Ok(success(data))
}
