//! Clients for the roster and news feeds.
//!
//! Astronauts come from the Launch Library (thespacedevs), articles from
//! the Spaceflight News API. Both are plain pass-throughs.

use reqwest::Client;
use serde_json::Value;

use crate::error::Result;

use super::upstream;

#[derive(Clone)]
pub struct FeedsService {
    client: Client,
    roster_base_url: String,
    news_base_url: String,
}

impl FeedsService {
    pub fn new(roster_base_url: &str, news_base_url: &str) -> Self {
        Self {
            client: upstream::http_client(),
            roster_base_url: roster_base_url.to_string(),
            news_base_url: news_base_url.to_string(),
        }
    }

    /// Full astronaut roster.
    pub async fn astronauts(&self) -> Result<Value> {
        let url = format!("{}/2.2.0/astronaut/", self.roster_base_url);
        upstream::get_json(&self.client, &url, &[]).await
    }

    /// Most recent space news articles.
    pub async fn news(&self, limit: u32) -> Result<Value> {
        let url = format!("{}/v4/articles/", self.news_base_url);
        upstream::get_json(&self.client, &url, &[("limit", limit.to_string())]).await
    }
}
