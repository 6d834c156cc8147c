//! OpenAPI document for the product API, served at `/openapi.json`.

use crate::error::ErrorBody;
use crate::product::{CreateProductRequest, Product};
use crate::response::MessageBody;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(title = "Webshop backend", description = "Product catalog REST API"),
    paths(
        crate::handlers::product::list_products,
        crate::handlers::product::create_product,
        crate::handlers::product::delete_product
    ),
    components(schemas(Product, CreateProductRequest, MessageBody, ErrorBody)),
    tags((name = "products", description = "Product catalog"))
)]
pub struct ApiDoc;
