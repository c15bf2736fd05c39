//! API routes for the gateway.
//!
//! This module combines all routes into a single router. Every proxied
//! route lives under /api/nasa; /health is served at the root.

mod apod;
mod earth;
mod feeds;
mod iss;
mod launches;
mod mars;
mod media;
mod neo;
pub mod status;

use axum::extract::OriginalUri;
use axum::{Json, Router};
use serde_json::{json, Value};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::{AppState, Error};

/// Build the complete application router, with CORS open to any origin
/// (the gateway is consumed directly by browser clients) and request
/// tracing on every route.
pub fn router(state: AppState) -> Router {
    Router::new()
        .merge(routes())
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}

/// All routes, grouped by upstream.
///
/// Route structure:
/// - /health - liveness/uptime/environment report (public)
/// - /api/nasa/apod - Astronomy Picture of the Day
/// - /api/nasa/mars-rovers/* - Mars rover photos
/// - /api/nasa/neo* - Near-Earth objects
/// - /api/nasa/images - media library search
/// - /api/nasa/iss/* - ISS position and pass times
/// - /api/nasa/launches/* - SpaceX launches
/// - /api/nasa/astronauts, /api/nasa/news - roster and news feeds
/// - /api/nasa/earth/imagery - Landsat imagery
fn routes() -> Router<AppState> {
    Router::new()
        .merge(status::routes())
        .nest("/api/nasa", space_data_routes())
}

fn space_data_routes() -> Router<AppState> {
    Router::new()
        .merge(apod::routes())
        .merge(mars::routes())
        .merge(neo::routes())
        .merge(media::routes())
        .merge(iss::routes())
        .merge(launches::routes())
        .merge(feeds::routes())
        .merge(earth::routes())
}

/// Wrap a relayed upstream payload in the success envelope.
pub(crate) fn success(data: Value) -> Json<Value> {
    Json(json!({
        "success": true,
        "data": data,
    }))
}

/// Fallback for unmatched routes: 404 echoing the requested path.
async fn not_found(OriginalUri(uri): OriginalUri) -> Error {
    Error::NotFound(uri.path().to_string())
}
