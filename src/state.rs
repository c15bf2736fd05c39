//! Application state for the gateway.
//!
//! Contains the shared state that is passed to all handlers.

use std::sync::Arc;
use std::time::Instant;

use serde_json::Value;

use crate::config::Config;
use crate::services::{
    FeedsService, LaunchService, MediaLibraryService, NasaApiService, SatelliteService, TtlSlot,
};

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Keyed api.nasa.gov client (APOD, rovers, NEO, Earth imagery).
    pub nasa: Arc<NasaApiService>,
    /// NASA media library client.
    pub media: Arc<MediaLibraryService>,
    /// ISS position client with primary/fallback sources.
    pub satellite: Arc<SatelliteService>,
    /// SpaceX launch client.
    pub launches: Arc<LaunchService>,
    /// Astronaut roster and news clients.
    pub feeds: Arc<FeedsService>,
    /// Single-slot cache for the ISS position payload.
    pub iss_cache: Arc<TtlSlot<Value>>,
    /// Environment name reported by /health.
    pub environment: String,
    /// Server start time, for uptime reporting.
    pub started_at: Instant,
}

impl AppState {
    /// Create a new application state, initializing all upstream clients.
    pub fn new(config: &Config) -> Self {
        Self {
            nasa: Arc::new(NasaApiService::new(&config.nasa)),
            media: Arc::new(MediaLibraryService::new(&config.upstreams.images_base_url)),
            satellite: Arc::new(SatelliteService::new(
                &config.upstreams.wheretheiss_base_url,
                &config.upstreams.open_notify_base_url,
            )),
            launches: Arc::new(LaunchService::new(&config.upstreams.spacex_base_url)),
            feeds: Arc::new(FeedsService::new(
                &config.upstreams.spacedevs_base_url,
                &config.upstreams.spaceflight_news_base_url,
            )),
            iss_cache: Arc::new(TtlSlot::new(config.cache.iss_position_ttl)),
            environment: config.server.environment.clone(),
            started_at: Instant::now(),
        }
    }
}
