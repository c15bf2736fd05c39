//! Shared test setup helpers.

#![allow(dead_code)]

use std::time::Duration;

use axum_test::TestServer;
use nasa_explorer::config::{CacheConfig, Config, NasaConfig, ServerConfig, UpstreamConfig};
use nasa_explorer::{api, AppState};

/// Build a configuration with every upstream pointed at `base_url`.
/// Tests that need distinct upstreams override individual fields.
pub fn test_config(base_url: &str) -> Config {
    Config {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
            environment: "test".to_string(),
        },
        nasa: NasaConfig {
            api_key: "DEMO_KEY".to_string(),
            base_url: base_url.to_string(),
        },
        upstreams: UpstreamConfig {
            images_base_url: base_url.to_string(),
            wheretheiss_base_url: base_url.to_string(),
            open_notify_base_url: base_url.to_string(),
            spacex_base_url: base_url.to_string(),
            spacedevs_base_url: base_url.to_string(),
            spaceflight_news_base_url: base_url.to_string(),
        },
        cache: CacheConfig {
            iss_position_ttl: Duration::from_secs(30),
        },
    }
}

/// A base URL nothing listens on, for tests that must not reach upstream.
pub const UNREACHABLE: &str = "http://127.0.0.1:1";

/// Spin up an in-process test server over the full application router.
pub fn spawn_server(config: &Config) -> TestServer {
    let state = AppState::new(config);
    TestServer::new(api::router(state)).expect("Failed to start test server")
}
