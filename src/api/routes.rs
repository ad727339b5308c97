/*
 * Responsibility
 * - URL layout under /api
 * - Unknown paths and unsupported methods answer with the JSON error body
 */
use axum::{
    Router,
    routing::{get, post},
};

use crate::api::handlers::{
    fallback::{method_not_allowed, not_found},
    health::health,
    products::list_products,
    register::register,
};
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    let api = Router::new()
        .route("/health", get(health))
        .route("/products", get(list_products))
        .route("/register", post(register))
        .method_not_allowed_fallback(method_not_allowed);

    Router::new()
        .nest("/api", api)
        .fallback(not_found)
        .method_not_allowed_fallback(method_not_allowed)
}
