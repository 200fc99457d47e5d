//! Error types for the dashboard server.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use thiserror::Error;

use crate::github::error::FetcherError;

/// Result type alias for dashboard operations.
pub type DashboardResult<T> = Result<T, DashboardError>;

/// Errors that can occur in the dashboard server.
#[derive(Debug, Error)]
pub enum DashboardError {
    /// Failed to bind to the specified address.
    #[error("failed to bind to {0}: {1}")]
    BindFailed(std::net::SocketAddr, std::io::Error),

    /// A repository fetch against the search API failed.
    #[error("repository fetch failed: {0}")]
    Fetch(#[from] FetcherError),

    /// Invalid request parameters.
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// Internal server error.
    #[error("internal error: {0}")]
    Internal(String),
}

/// JSON error response body.
#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: String,
    message: String,
}

impl IntoResponse for DashboardError {
    fn into_response(self) -> Response {
        let (status, error_type) = match &self {
            Self::InvalidRequest(_) => (StatusCode::BAD_REQUEST, "invalid_request"),
            Self::Fetch(fetch) => {
                let error_type = match fetch {
                    FetcherError::Network(_) => "network_error",
                    FetcherError::Http { .. } => "upstream_error",
                    FetcherError::Parse(_) => "parse_error",
                };
                (StatusCode::BAD_GATEWAY, error_type)
            }
            Self::BindFailed(_, _) | Self::Internal(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "internal_error")
            }
        };

        let body = ErrorResponse {
            error: error_type.to_string(),
            message: self.to_string(),
        };

        let json = serde_json::to_string(&body).unwrap_or_else(|_| {
            r#"{"error":"internal_error","message":"failed to serialize error"}"#.to_string()
        });

        (status, [("content-type", "application/json")], json).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;

    #[tokio::test]
    async fn network_failure_maps_to_bad_gateway() {
        // Force a reqwest error by parsing a URL with an unsupported scheme.
        let reqwest_err = reqwest::Client::new()
            .get("unix://nowhere")
            .send()
            .await
            .unwrap_err();
        let err = DashboardError::Fetch(FetcherError::Network(reqwest_err));
        let response = err.into_response();

        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);

        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(json["error"], "network_error");
    }

    #[tokio::test]
    async fn upstream_status_maps_to_bad_gateway() {
        let err = DashboardError::Fetch(FetcherError::Http {
            status: 403,
            message: "rate limit exceeded".to_string(),
        });
        let response = err.into_response();

        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);

        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(json["error"], "upstream_error");
        assert!(json["message"].as_str().unwrap().contains("403"));
    }

    #[tokio::test]
    async fn parse_failure_maps_to_bad_gateway() {
        let serde_err = serde_json::from_str::<u32>("{").unwrap_err();
        let err = DashboardError::Fetch(FetcherError::Parse(serde_err));
        let response = err.into_response();

        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);

        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(json["error"], "parse_error");
    }

    #[tokio::test]
    async fn invalid_request_maps_to_bad_request() {
        let err = DashboardError::InvalidRequest("bad languages parameter".to_string());
        let response = err.into_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn error_display() {
        let err = DashboardError::InvalidRequest("bad param".to_string());
        assert_eq!(err.to_string(), "invalid request: bad param");
    }
}
