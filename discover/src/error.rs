//! Unified error types for the discover page
//!
//! This module defines error types for each layer:
//! - `DiscoveryError`: discovery API client errors
//! - `AppError`: Application layer errors (wraps client errors for HTTP responses)

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Discovery API client errors
#[derive(Debug, Error)]
pub enum DiscoveryError {
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Malformed discovery body: {0}")]
    Decode(String),

    #[error("Invalid discovery URL: {0}")]
    InvalidUrl(String),
}

/// Application layer errors - used by HTTP handlers
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Discovery error: {0}")]
    Discovery(#[from] DiscoveryError),
}

/// Error response body for JSON responses
#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<String>,
}

impl AppError {
    fn parts(&self) -> (StatusCode, &'static str, Option<String>) {
        match self {
            AppError::Discovery(DiscoveryError::Request(e)) => {
                tracing::error!("Discovery request failed: {}", e);
                (
                    StatusCode::BAD_GATEWAY,
                    "Discovery service unavailable",
                    None,
                )
            }
            AppError::Discovery(DiscoveryError::Decode(msg)) => {
                tracing::error!("Malformed discovery response: {}", msg);
                (
                    StatusCode::BAD_GATEWAY,
                    "Malformed discovery response",
                    Some(msg.clone()),
                )
            }
            AppError::Discovery(DiscoveryError::InvalidUrl(msg)) => {
                tracing::error!("Invalid discovery URL: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error",
                    None,
                )
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error, details) = self.parts();

        let body = Json(ErrorResponse {
            error: error.to_string(),
            details,
        });

        (status, body).into_response()
    }
}
