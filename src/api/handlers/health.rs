/*
 * Responsibility
 * - GET /api/health (liveness probe)
 * - Reports the configured service name, never fails
 */
use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use serde_json::json;

use crate::state::AppState;

pub async fn health(State(state): State<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(json!({"status": "ok", "service": state.config.service_name})),
    )
}
