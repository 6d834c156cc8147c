//! Product handlers: list, create, delete.

use crate::error::{AppError, DbAction, ErrorBody, INVALID_BODY_MESSAGE, INVALID_ID_MESSAGE};
use crate::product::{CreateProductRequest, Product};
use crate::response::{created, message, MessageBody};
use crate::service::validate_new_product;
use crate::state::AppState;
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    response::IntoResponse,
    Json,
};
use serde_json::Value;

pub const DELETED_MESSAGE: &str = "Termék törölve";

/// Parse a path id. `Ok(None)` means an integer outside the key range: no row can match.
fn parse_id(id_str: &str) -> Result<Option<i32>, AppError> {
    let digits = id_str.strip_prefix('-').unwrap_or(id_str);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(AppError::BadRequest(INVALID_ID_MESSAGE.into()));
    }
    Ok(id_str.parse::<i32>().ok())
}

#[utoipa::path(
    get,
    path = "/products",
    tag = "products",
    responses(
        (status = 200, description = "All products", body = [Product]),
        (status = 500, description = "Database failure", body = ErrorBody)
    )
)]
pub async fn list_products(State(state): State<AppState>) -> Result<Json<Vec<Product>>, AppError> {
    let rows = state.store.list_all().await.map_err(AppError::db(DbAction::List))?;
    tracing::debug!(count = rows.len(), "listed products");
    Ok(Json(rows))
}

#[utoipa::path(
    post,
    path = "/products",
    tag = "products",
    request_body = CreateProductRequest,
    responses(
        (status = 201, description = "Created product", body = Product),
        (status = 400, description = "Invalid body or field", body = ErrorBody),
        (status = 500, description = "Database failure", body = ErrorBody)
    )
)]
pub async fn create_product(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(body) = body.map_err(|rejection| {
        tracing::debug!(error = %rejection, "unreadable request body");
        AppError::BadRequest(INVALID_BODY_MESSAGE.into())
    })?;
    let new_product = validate_new_product(&body)?;
    let product = state
        .store
        .create(new_product)
        .await
        .map_err(AppError::db(DbAction::Create))?;
    tracing::info!(id = product.id, name = %product.name, "product created");
    Ok(created(product))
}

#[utoipa::path(
    delete,
    path = "/products/{id}",
    tag = "products",
    params(("id" = i32, Path, description = "Product id")),
    responses(
        (status = 200, description = "Product deleted", body = MessageBody),
        (status = 400, description = "Id is not an integer", body = ErrorBody),
        (status = 404, description = "No product with this id", body = ErrorBody),
        (status = 500, description = "Database failure", body = ErrorBody)
    )
)]
pub async fn delete_product(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let Some(id) = parse_id(&id_str)? else {
        return Err(AppError::NotFound(id_str));
    };
    let deleted = state
        .store
        .delete_by_id(id)
        .await
        .map_err(AppError::db(DbAction::Delete))?;
    if deleted == 0 {
        return Err(AppError::NotFound(id_str));
    }
    tracing::info!(id, "product deleted");
    Ok(message(DELETED_MESSAGE))
}
