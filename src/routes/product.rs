//! Product CRUD routes.

use crate::handlers::{create_product, delete_product, list_products};
use crate::state::AppState;
use axum::{routing::delete, routing::get, Router};

pub fn product_routes(state: AppState) -> Router {
    Router::new()
        .route("/products", get(list_products).post(create_product))
        .route("/products/:id", delete(delete_product))
        .with_state(state)
}
