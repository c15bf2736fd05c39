//! Media library search routes.
//!
//! Routes:
//! - GET /images - NASA Image and Video Library search

use axum::extract::{Query, State};
use axum::{routing::get, Json, Router};
use serde::Deserialize;
use serde_json::Value;

use crate::{AppState, Error, Result};

use super::success;

/// Build media search routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/images", get(search_images))
}

#[derive(Debug, Deserialize)]
pub struct ImageSearchParams {
    pub q: Option<String>,
    pub media_type: Option<String>,
    pub page: Option<u32>,
}

/// Free-text media search. `q` is required.
///
/// GET /images?q=apollo&media_type=image&page=1
#[axum::debug_handler]
async fn search_images(
    State(state): State<AppState>,
    Query(params): Query<ImageSearchParams>,
) -> Result<Json<Value>> {
    let q = params
        .q
        .as_deref()
        .filter(|q| !q.is_empty())
        .ok_or_else(|| Error::Validation(r#"Query parameter "q" is required"#.into()))?;

    let data = state
        .media
        .search(q, params.media_type.as_deref(), params.page.unwrap_or(1))
        .await?;

    Ok(success(data))
}
