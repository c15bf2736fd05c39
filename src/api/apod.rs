//! APOD routes.
//!
//! Routes:
//! - GET /apod - Astronomy Picture of the Day, single date or date range

use axum::extract::{Query, State};
use axum::{routing::get, Json, Router};
use serde::Deserialize;
use serde_json::Value;

use crate::{AppState, Result};

use super::success;

/// Build APOD routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/apod", get(get_apod))
}

#[derive(Debug, Deserialize)]
pub struct ApodQuery {
    pub date: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

/// Picture of the day, or the date-range variant when both range
/// parameters are present.
///
/// GET /apod?date=YYYY-MM-DD
/// GET /apod?start_date=YYYY-MM-DD&end_date=YYYY-MM-DD
#[axum::debug_handler]
async fn get_apod(
    State(state): State<AppState>,
    Query(query): Query<ApodQuery>,
) -> Result<Json<Value>> {
    let data = match (&query.start_date, &query.end_date) {
        (Some(start_date), Some(end_date)) => state.nasa.apod_range(start_date, end_date).await?,
        _ => state.nasa.apod(query.date.as_deref()).await?,
    };

    Ok(success(data))
}
