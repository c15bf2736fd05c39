//! Earth imagery routes.
//!
//! Routes:
//! - GET /earth/imagery - Landsat imagery for a coordinate

use axum::extract::{Query, State};
use axum::{routing::get, Json, Router};
use serde::Deserialize;
use serde_json::Value;

use crate::{AppState, Error, Result};

use super::success;

/// Build Earth imagery routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/earth/imagery", get(get_imagery))
}

#[derive(Debug, Deserialize)]
pub struct EarthImageryParams {
    pub lat: Option<String>,
    pub lon: Option<String>,
    pub date: Option<String>,
    pub dim: Option<String>,
}

/// Imagery for a coordinate. `lat` and `lon` are required and forwarded
/// verbatim along with the optional date and dimension.
///
/// GET /earth/imagery?lat=29.78&lon=-95.33&date=2018-01-01&dim=0.15
#[axum::debug_handler]
async fn get_imagery(
    State(state): State<AppState>,
    Query(params): Query<EarthImageryParams>,
) -> Result<Json<Value>> {
    let (lat, lon) = match (&params.lat, &params.lon) {
        (Some(lat), Some(lon)) => (lat, lon),
        _ => {
            return Err(Error::Validation(
                "Latitude (lat) and longitude (lon) parameters are required".into(),
            ))
        }
    };

    let data = state
        .nasa
        .earth_imagery(lat, lon, params.date.as_deref(), params.dim.as_deref())
        .await?;

    Ok(success(data))
}
