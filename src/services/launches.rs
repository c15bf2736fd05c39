//! Client for the SpaceX launch API (v4).

use reqwest::Client;
use serde_json::Value;

use crate::error::Result;

use super::upstream;

#[derive(Clone)]
pub struct LaunchService {
    client: Client,
    base_url: String,
}

impl LaunchService {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: upstream::http_client(),
            base_url: base_url.to_string(),
        }
    }

    pub async fn upcoming(&self) -> Result<Value> {
        let url = format!("{}/v4/launches/upcoming", self.base_url);
        upstream::get_json(&self.client, &url, &[]).await
    }

    pub async fn latest(&self) -> Result<Value> {
        let url = format!("{}/v4/launches/latest", self.base_url);
        upstream::get_json(&self.client, &url, &[]).await
    }

    pub async fn past(&self, limit: u32) -> Result<Value> {
        let url = format!("{}/v4/launches/past", self.base_url);
        upstream::get_json(&self.client, &url, &[("limit", limit.to_string())]).await
    }
}
