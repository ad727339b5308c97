/*
 * Responsibility
 * - The one error type handlers and middleware hand back (AppError)
 * - IntoResponse: map each variant to a status and the flat `{"error": ...}` body
 */
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AppError {
    #[error("missing required fields: {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),
    #[error("not found")]
    NotFound,
    #[error("method not allowed")]
    MethodNotAllowed,
    #[error("request timed out")]
    Timeout,
    #[error("payload too large")]
    PayloadTooLarge,
    #[error("{0}")]
    Internal(String),
}

impl AppError {
    pub fn internal(details: impl Into<String>) -> Self {
        Self::Internal(details.into())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error, details) = match self {
            AppError::MissingFields(fields) => {
                tracing::debug!(?fields, "registration rejected");
                (StatusCode::BAD_REQUEST, "Missing required fields", None)
            }
            AppError::NotFound => (StatusCode::NOT_FOUND, "Not found", None),
            AppError::MethodNotAllowed => {
                (StatusCode::METHOD_NOT_ALLOWED, "Method not allowed", None)
            }
            AppError::Timeout => (StatusCode::REQUEST_TIMEOUT, "Request timeout", None),
            AppError::PayloadTooLarge => {
                (StatusCode::PAYLOAD_TOO_LARGE, "Payload too large", None)
            }
            // Details go to the client as-is; nothing is redacted.
            AppError::Internal(details) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Server error",
                Some(details),
            ),
        };

        (status, Json(ErrorResponse { error, details })).into_response()
    }
}
