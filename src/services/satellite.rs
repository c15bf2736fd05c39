//! ISS position tracking.
//!
//! Where The ISS At? is the primary source. Its response is reshaped into
//! the Open Notify layout the frontend was built against (stringified
//! latitude/longitude under `iss_position`), enriched with the extra fields
//! the primary exposes. When the primary is down, Open Notify's own
//! `iss-now.json` is relayed as-is; when both are down, the primary failure
//! is the one surfaced to the client.

use reqwest::Client;
use serde_json::{json, Value};

use crate::error::{Error, Result};

use super::upstream;

/// NORAD catalog id of the International Space Station.
const ISS_NORAD_ID: u32 = 25544;

const PASS_TIMES_NOTICE: &str = "ISS pass times prediction service is currently unavailable. \
     The original Open Notify API endpoint has been discontinued.";

const PASS_TIMES_ALTERNATIVE: &str = "You can track the ISS in real-time using the position \
     data above, or visit https://spotthestation.nasa.gov/ for pass predictions.";

#[derive(Clone)]
pub struct SatelliteService {
    client: Client,
    primary_base_url: String,
    fallback_base_url: String,
}

impl SatelliteService {
    pub fn new(primary_base_url: &str, fallback_base_url: &str) -> Self {
        Self {
            client: upstream::http_client(),
            primary_base_url: primary_base_url.to_string(),
            fallback_base_url: fallback_base_url.to_string(),
        }
    }

    /// Current ISS position.
    ///
    /// Primary source first; on any primary failure (transport, HTTP error,
    /// or unexpected shape) the fallback is tried once and its body returned
    /// unmodified. If the fallback fails too, the primary error wins.
    pub async fn current_position(&self) -> Result<Value> {
        let primary_err = match self.fetch_primary().await {
            Ok(position) => return Ok(position),
            Err(err) => err,
        };

        tracing::warn!(error = %primary_err, "primary ISS source failed, trying fallback");
        match self.fetch_fallback().await {
            Ok(raw) => Ok(raw),
            Err(fallback_err) => {
                tracing::warn!(error = %fallback_err, "fallback ISS source failed");
                Err(primary_err)
            }
        }
    }

    /// Pass-time predictions are discontinued upstream; report that along
    /// with the live position so callers still get something useful.
    pub async fn pass_times(&self) -> Result<Value> {
        let position = self.raw_primary_position().await?;

        Ok(json!({
            "message": PASS_TIMES_NOTICE,
            "alternative": PASS_TIMES_ALTERNATIVE,
            "current_iss_position": position,
            // Empty array to stay compatible with the old response shape
            "response": [],
        }))
    }

    async fn fetch_primary(&self) -> Result<Value> {
        let raw = self.raw_primary_position().await?;
        normalize_position(raw)
    }

    async fn raw_primary_position(&self) -> Result<Value> {
        let url = format!("{}/v1/satellites/{}", self.primary_base_url, ISS_NORAD_ID);
        upstream::get_json(&self.client, &url, &[]).await
    }

    async fn fetch_fallback(&self) -> Result<Value> {
        let url = format!("{}/iss-now.json", self.fallback_base_url);
        upstream::get_json(&self.client, &url, &[]).await
    }
}

/// Reshape a Where The ISS At? record into the Open Notify layout,
/// keeping the richer fields (altitude, velocity, visibility, units).
fn normalize_position(raw: Value) -> Result<Value> {
    let latitude = coordinate(&raw, "latitude")?;
    let longitude = coordinate(&raw, "longitude")?;

    Ok(json!({
        "message": "success",
        "timestamp": raw.get("timestamp").cloned().unwrap_or(Value::Null),
        "iss_position": {
            "latitude": latitude,
            "longitude": longitude,
        },
        "altitude": raw.get("altitude").cloned().unwrap_or(Value::Null),
        "velocity": raw.get("velocity").cloned().unwrap_or(Value::Null),
        "visibility": raw.get("visibility").cloned().unwrap_or(Value::Null),
        "units": raw.get("units").cloned().unwrap_or(Value::Null),
    }))
}

fn coordinate(raw: &Value, field: &str) -> Result<String> {
    raw.get(field)
        .and_then(Value::as_f64)
        .map(|v| v.to_string())
        .ok_or_else(|| Error::Upstream(format!("ISS position response missing {}", field)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_stringifies_coordinates() {
        let raw = json!({
            "latitude": 12.345,
            "longitude": -67.89,
            "timestamp": 1640995200,
            "altitude": 420.5,
            "velocity": 27580.1,
            "visibility": "daylight",
            "units": "kilometers",
        });

        let position = normalize_position(raw).unwrap();
        assert_eq!(position["message"], "success");
        assert_eq!(position["iss_position"]["latitude"], "12.345");
        assert_eq!(position["iss_position"]["longitude"], "-67.89");
        assert_eq!(position["timestamp"], 1640995200);
        assert_eq!(position["altitude"], 420.5);
        assert_eq!(position["visibility"], "daylight");
    }

    #[test]
    fn normalize_rejects_missing_coordinates() {
        let err = normalize_position(json!({"latitude": 12.0})).unwrap_err();
        assert!(err.to_string().contains("longitude"));
    }
}
