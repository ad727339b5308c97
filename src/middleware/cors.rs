//! CORS policy for the browser frontend.
//!
//! The storefront is served from a different origin than this API, so every
//! origin is allowed. No credentials are involved: registration is a mock and
//! there is no session to protect.
//!
//! Applied as the outermost layer so preflight requests are answered before
//! routing, and 404/405/500 bodies carry the CORS headers as well.

use std::time::Duration;

use axum::Router;
use axum::http::{HeaderName, Method, header};
use tower_http::cors::{Any, CorsLayer};

/// Apply the permissive CORS policy to the given Router.
///
/// Do not add `allow_credentials(true)` here: it cannot be combined with a
/// wildcard origin.
pub fn apply(router: Router) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
        .expose_headers([HeaderName::from_static("x-request-id")])
        .max_age(Duration::from_secs(60 * 10));

    router.layer(cors)
}
