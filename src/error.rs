//! Error types for the gateway.
//!
//! Uses thiserror for ergonomic error definitions that integrate
//! with axum's response system. Every failure is rendered as
//! `{"success": false, "error": <message>}` with a mapped status code.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    // Client validation errors, raised before any upstream call
    #[error("{0}")]
    Validation(String),

    // Unmatched routes
    #[error("Not found - {0}")]
    NotFound(String),

    // Upstream transport/HTTP errors
    #[error("External service unavailable")]
    ServiceUnavailable,

    #[error("Rate limit exceeded. Please try again later.")]
    RateLimited,

    #[error("NASA API access forbidden. Please check your API key.")]
    UpstreamForbidden,

    #[error("{0}")]
    Upstream(String),

    // Generic errors
    #[error("Internal error: {0}")]
    Internal(String),

    #[error("{0}")]
    Other(#[from] anyhow::Error),
}

impl Error {
    pub fn status_code(&self) -> StatusCode {
        match self {
            // 400
            Self::Validation(_) => StatusCode::BAD_REQUEST,

            // 403
            Self::UpstreamForbidden => StatusCode::FORBIDDEN,

            // 404
            Self::NotFound(_) => StatusCode::NOT_FOUND,

            // 429
            Self::RateLimited => StatusCode::TOO_MANY_REQUESTS,

            // 503
            Self::ServiceUnavailable => StatusCode::SERVICE_UNAVAILABLE,

            // 500
            Self::Upstream(_) | Self::Internal(_) | Self::Other(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = self.to_string();

        if status.is_server_error() {
            tracing::error!(%status, error = %message, "request failed");
        }

        let body = Json(json!({
            "success": false,
            "error": message,
        }));

        (status, body).into_response()
    }
}

// Convenience conversions
impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Self::Internal(err.to_string())
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        // Connection-level failures (refused, DNS, timeout) mean the
        // upstream is unreachable rather than misbehaving.
        if err.is_connect() || err.is_timeout() {
            Self::ServiceUnavailable
        } else {
            Self::Upstream(format!("HTTP request failed: {}", err))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes_follow_upstream_mapping() {
        assert_eq!(
            Error::Validation("bad".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            Error::ServiceUnavailable.status_code(),
            StatusCode::SERVICE_UNAVAILABLE
        );
        assert_eq!(
            Error::RateLimited.status_code(),
            StatusCode::TOO_MANY_REQUESTS
        );
        assert_eq!(Error::UpstreamForbidden.status_code(), StatusCode::FORBIDDEN);
        assert_eq!(
            Error::Upstream("boom".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn not_found_echoes_path() {
        let err = Error::NotFound("/api/unknown-route".into());
        assert_eq!(err.to_string(), "Not found - /api/unknown-route");
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
    }
}
