//! Client for the keyed api.nasa.gov API.
//!
//! Covers APOD, Mars rover photos, the near-Earth object feed, and Earth
//! imagery. The configured `api_key` is attached to every request.

use reqwest::Client;
use serde_json::Value;

use crate::config::NasaConfig;
use crate::error::Result;

use super::upstream;

/// Optional filters for a Mars rover photo query.
#[derive(Debug, Default)]
pub struct RoverPhotoQuery {
    pub sol: Option<String>,
    pub earth_date: Option<String>,
    pub camera: Option<String>,
    pub page: Option<u32>,
}

#[derive(Clone)]
pub struct NasaApiService {
    client: Client,
    base_url: String,
    api_key: String,
}

impl NasaApiService {
    pub fn new(config: &NasaConfig) -> Self {
        Self {
            client: upstream::http_client(),
            base_url: config.base_url.clone(),
            api_key: config.api_key.clone(),
        }
    }

    fn keyed_query(&self) -> Vec<(&'static str, String)> {
        vec![("api_key", self.api_key.clone())]
    }

    /// Astronomy Picture of the Day, optionally for a specific date.
    pub async fn apod(&self, date: Option<&str>) -> Result<Value> {
        let url = format!("{}/planetary/apod", self.base_url);
        let mut query = self.keyed_query();
        if let Some(date) = date {
            query.push(("date", date.to_string()));
        }
        upstream::get_json(&self.client, &url, &query).await
    }

    /// APOD entries for an inclusive date range.
    pub async fn apod_range(&self, start_date: &str, end_date: &str) -> Result<Value> {
        let url = format!("{}/planetary/apod", self.base_url);
        let mut query = self.keyed_query();
        query.push(("start_date", start_date.to_string()));
        query.push(("end_date", end_date.to_string()));
        upstream::get_json(&self.client, &url, &query).await
    }

    /// Photos taken by a rover, filtered by sol or Earth date and camera.
    ///
    /// Returns the photo array itself (possibly empty), not the upstream
    /// `{"photos": [...]}` envelope.
    pub async fn rover_photos(&self, rover: &str, filters: &RoverPhotoQuery) -> Result<Value> {
        let url = format!("{}/mars-photos/api/v1/rovers/{}/photos", self.base_url, rover);
        let mut query = self.keyed_query();
        query.push(("page", filters.page.unwrap_or(1).to_string()));
        if let Some(sol) = &filters.sol {
            query.push(("sol", sol.clone()));
        }
        if let Some(earth_date) = &filters.earth_date {
            query.push(("earth_date", earth_date.clone()));
        }
        if let Some(camera) = &filters.camera {
            query.push(("camera", camera.clone()));
        }

        let body = upstream::get_json(&self.client, &url, &query).await?;
        Ok(unwrap_array(body, "photos"))
    }

    /// Most recent photo set for a rover, as a plain array.
    pub async fn latest_rover_photos(&self, rover: &str) -> Result<Value> {
        let url = format!(
            "{}/mars-photos/api/v1/rovers/{}/latest_photos",
            self.base_url, rover
        );
        let body = upstream::get_json(&self.client, &url, &self.keyed_query()).await?;
        Ok(unwrap_array(body, "latest_photos"))
    }

    /// Near-Earth object feed for a date range.
    pub async fn neo_feed(&self, start_date: &str, end_date: &str) -> Result<Value> {
        let url = format!("{}/neo/rest/v1/feed", self.base_url);
        let mut query = self.keyed_query();
        query.push(("start_date", start_date.to_string()));
        query.push(("end_date", end_date.to_string()));
        upstream::get_json(&self.client, &url, &query).await
    }

    /// Single near-Earth object lookup.
    pub async fn neo_by_id(&self, id: &str) -> Result<Value> {
        let url = format!("{}/neo/rest/v1/neo/{}", self.base_url, id);
        upstream::get_json(&self.client, &url, &self.keyed_query()).await
    }

    /// Landsat imagery for a coordinate.
    pub async fn earth_imagery(
        &self,
        lat: &str,
        lon: &str,
        date: Option<&str>,
        dim: Option<&str>,
    ) -> Result<Value> {
        let url = format!("{}/planetary/earth/imagery", self.base_url);
        let mut query = self.keyed_query();
        query.push(("lat", lat.to_string()));
        query.push(("lon", lon.to_string()));
        if let Some(date) = date {
            query.push(("date", date.to_string()));
        }
        if let Some(dim) = dim {
            query.push(("dim", dim.to_string()));
        }
        upstream::get_json(&self.client, &url, &query).await
    }
}

/// Lift `key` out of the upstream envelope, defaulting to an empty array.
fn unwrap_array(mut body: Value, key: &str) -> Value {
    match body.get_mut(key).map(Value::take) {
        Some(photos @ Value::Array(_)) => photos,
        _ => Value::Array(Vec::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn unwrap_array_extracts_the_photo_list() {
        let body = json!({"photos": [{"id": 1}, {"id": 2}]});
        assert_eq!(unwrap_array(body, "photos"), json!([{"id": 1}, {"id": 2}]));
    }

    #[test]
    fn unwrap_array_defaults_to_empty() {
        assert_eq!(unwrap_array(json!({}), "photos"), json!([]));
        assert_eq!(unwrap_array(json!({"photos": 3}), "photos"), json!([]));
    }
}
