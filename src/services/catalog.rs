/*
 * Responsibility
 * - The fixed product catalog served by GET /api/products
 * - No storage behind it: the same two products, in the same order, every call
 */
use crate::api::dto::products::Product;

static PRODUCTS: [Product; 2] = [
    Product {
        id: 1,
        name: "Sample Product A",
        price: 19.99,
        description: "A placeholder product",
    },
    Product {
        id: 2,
        name: "Sample Product B",
        price: 29.99,
        description: "Another placeholder product",
    },
];

pub fn sample_products() -> &'static [Product] {
    &PRODUCTS
}
