#![allow(dead_code)]

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// Each variant is a distinct failure kind with its own machine-readable code;
/// none of them is retried, and none of them escapes as a panic.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Only POST allowed")]
    InvalidMethod,

    #[error("Missing required fields: {}", .0.join(", "))]
    MissingFields(Vec<String>),

    #[error("Missing upstream API credential")]
    MissingConfiguration,

    #[error("Upstream completion service unavailable: {0}")]
    UpstreamUnavailable(String),

    #[error("Upstream completion service returned no usable text")]
    EmptyUpstreamPayload,

    #[error("Completion text failed sequence validation: {0}")]
    MalformedPayload(String),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::InvalidMethod => (
                StatusCode::METHOD_NOT_ALLOWED,
                "INVALID_METHOD",
                self.to_string(),
            ),
            AppError::MissingFields(_) => {
                (StatusCode::BAD_REQUEST, "MISSING_FIELD", self.to_string())
            }
            AppError::MissingConfiguration => {
                tracing::error!("Upstream credential is not configured");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "MISSING_CONFIGURATION",
                    self.to_string(),
                )
            }
            AppError::UpstreamUnavailable(msg) => {
                tracing::error!("Upstream unavailable: {msg}");
                (
                    StatusCode::BAD_GATEWAY,
                    "UPSTREAM_UNAVAILABLE",
                    self.to_string(),
                )
            }
            AppError::EmptyUpstreamPayload => {
                tracing::error!("Upstream returned an empty payload");
                (
                    StatusCode::BAD_GATEWAY,
                    "EMPTY_UPSTREAM_PAYLOAD",
                    self.to_string(),
                )
            }
            AppError::MalformedPayload(msg) => {
                tracing::error!("Upstream payload failed validation: {msg}");
                (
                    StatusCode::BAD_GATEWAY,
                    "MALFORMED_PAYLOAD",
                    self.to_string(),
                )
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal server error occurred".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}
