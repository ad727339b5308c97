/*
 * Responsibility
 * - POST /api/register (mock: validate presence, echo, store nothing)
 * - Body is taken as raw bytes so malformed JSON falls into the 400 path
 *   instead of axum's Json rejection
 * - Body-limit rejections are answered with the JSON 413 body
 */
use axum::{
    Json,
    body::Bytes,
    extract::rejection::BytesRejection,
    http::StatusCode,
};

use crate::{
    api::dto::register::{RegistrationRequest, RegistrationResponse},
    error::AppError,
};

pub async fn register(
    body: Result<Bytes, BytesRejection>,
) -> Result<(StatusCode, Json<RegistrationResponse>), AppError> {
    let body = body.map_err(|rejection| {
        if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
            AppError::PayloadTooLarge
        } else {
            AppError::internal(rejection.body_text())
        }
    })?;

    let user = RegistrationRequest::from_body(&body)?;

    tracing::debug!(extra_fields = user.extra.len(), "user registered (mock)");

    Ok((
        StatusCode::CREATED,
        Json(RegistrationResponse {
            message: "User registered (mock)",
            user,
        }),
    ))
}
