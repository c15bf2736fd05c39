//! Client for the NASA Image and Video Library.

use reqwest::Client;
use serde_json::Value;

use crate::error::Result;

use super::upstream;

#[derive(Clone)]
pub struct MediaLibraryService {
    client: Client,
    base_url: String,
}

impl MediaLibraryService {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: upstream::http_client(),
            base_url: base_url.to_string(),
        }
    }

    /// Free-text media search, optionally restricted to a media type.
    pub async fn search(&self, q: &str, media_type: Option<&str>, page: u32) -> Result<Value> {
        let url = format!("{}/search", self.base_url);
        let mut query = vec![("q", q.to_string()), ("page", page.to_string())];
        if let Some(media_type) = media_type {
            query.push(("media_type", media_type.to_string()));
        }
        upstream::get_json(&self.client, &url, &query).await
    }
}
