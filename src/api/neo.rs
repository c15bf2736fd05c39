//! Near-Earth object routes.
//!
//! Routes:
//! - GET /neo - close-approach feed for a date range
//! - GET /neo/:id - single object lookup

use axum::extract::{Path, Query, State};
use axum::{routing::get, Json, Router};
use serde::Deserialize;
use serde_json::Value;

use crate::{AppState, Error, Result};

use super::success;

/// Build NEO routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/neo", get(get_neo_feed))
        .route("/neo/:id", get(get_neo_by_id))
}

#[derive(Debug, Deserialize)]
pub struct NeoFeedParams {
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

/// Close-approach feed. Both dates are required.
///
/// GET /neo?start_date=YYYY-MM-DD&end_date=YYYY-MM-DD
#[axum::debug_handler]
async fn get_neo_feed(
    State(state): State<AppState>,
    Query(params): Query<NeoFeedParams>,
) -> Result<Json<Value>> {
    let (start_date, end_date) = match (&params.start_date, &params.end_date) {
        (Some(start_date), Some(end_date)) => (start_date, end_date),
        _ => {
            return Err(Error::Validation(
                "start_date and end_date parameters are required".into(),
            ))
        }
    };

    let data = state.nasa.neo_feed(start_date, end_date).await?;
    Ok(success(data))
}

/// Single near-Earth object lookup.
///
/// GET /neo/:id
#[axum::debug_handler]
async fn get_neo_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Value>> {
    let data = state.nasa.neo_by_id(&id).await?;
    Ok(success(data))
}
