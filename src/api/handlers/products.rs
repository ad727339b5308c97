use axum::Json;

use crate::{api::dto::products::Product, services::catalog};

pub async fn list_products() -> Json<&'static [Product]> {
    Json(catalog::sample_products())
}
