//! Configuration management for the gateway.
//!
//! Loads configuration from environment variables. Every upstream base URL
//! is overridable so the gateway can be pointed at mock servers in tests.

use std::env;
use std::sync::OnceLock;
use std::time::Duration;

/// Global configuration instance
static CONFIG: OnceLock<Config> = OnceLock::new();

/// Get the global configuration
pub fn config() -> &'static Config {
    CONFIG.get_or_init(Config::from_env)
}

/// Initialize configuration (call once at startup)
pub fn init() -> &'static Config {
    config()
}

#[derive(Debug, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub nasa: NasaConfig,
    pub upstreams: UpstreamConfig,
    pub cache: CacheConfig,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub environment: String,
}

/// Settings for the keyed api.nasa.gov API (APOD, Mars rovers, NEO,
/// Earth imagery).
#[derive(Debug, Clone)]
pub struct NasaConfig {
    pub api_key: String,
    pub base_url: String,
}

/// Base URLs of the unkeyed space-data upstreams.
#[derive(Debug, Clone)]
pub struct UpstreamConfig {
    /// NASA Image and Video Library.
    pub images_base_url: String,
    /// Where The ISS At? - primary ISS position source.
    pub wheretheiss_base_url: String,
    /// Open Notify - fallback ISS position source.
    pub open_notify_base_url: String,
    /// SpaceX launches.
    pub spacex_base_url: String,
    /// Launch Library astronaut roster.
    pub spacedevs_base_url: String,
    /// Spaceflight News articles.
    pub spaceflight_news_base_url: String,
}

#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// TTL of the single ISS position cache slot.
    pub iss_position_ttl: Duration,
}

impl Config {
    /// Build configuration from environment variables.
    pub fn from_env() -> Self {
        Self {
            server: ServerConfig {
                host: env_or("HOST", "0.0.0.0"),
                port: env_or("PORT", "5001").parse().unwrap_or(5001),
                environment: env_or("ENVIRONMENT", "development"),
            },
            nasa: NasaConfig {
                api_key: env_or("NASA_API_KEY", "DEMO_KEY"),
                base_url: env_or("NASA_API_BASE_URL", "https://api.nasa.gov"),
            },
            upstreams: UpstreamConfig {
                images_base_url: env_or("NASA_IMAGES_BASE_URL", "https://images-api.nasa.gov"),
                wheretheiss_base_url: env_or(
                    "WHERETHEISS_BASE_URL",
                    "https://api.wheretheiss.at",
                ),
                open_notify_base_url: env_or("OPEN_NOTIFY_BASE_URL", "http://api.open-notify.org"),
                spacex_base_url: env_or("SPACEX_BASE_URL", "https://api.spacexdata.com"),
                spacedevs_base_url: env_or("SPACEDEVS_BASE_URL", "https://ll.thespacedevs.com"),
                spaceflight_news_base_url: env_or(
                    "SPACEFLIGHT_NEWS_BASE_URL",
                    "https://api.spaceflightnewsapi.net",
                ),
            },
            cache: CacheConfig {
                iss_position_ttl: Duration::from_millis(
                    env_or("ISS_CACHE_TTL_MS", "30000").parse().unwrap_or(30_000),
                ),
            },
        }
    }
}

fn env_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_public_upstreams() {
        let config = Config::from_env();
        assert_eq!(config.nasa.api_key, "DEMO_KEY");
        assert_eq!(config.nasa.base_url, "https://api.nasa.gov");
        assert_eq!(config.cache.iss_position_ttl, Duration::from_secs(30));
    }
}
