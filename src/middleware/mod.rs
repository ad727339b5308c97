/*
 * Responsibility
 * - Router-level middleware, each exposing apply(Router) -> Router
 */
pub mod cors;
pub mod http;
pub mod security_headers;
