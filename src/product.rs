//! The Product entity as stored and as served.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Longest accepted product name (the column is `VARCHAR(255)`).
pub const NAME_MAX_CHARS: usize = 255;

/// A persisted product.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
pub struct Product {
    /// Generated by the database; never changes.
    #[schema(example = 1)]
    pub id: i32,
    #[schema(example = "Widget")]
    pub name: String,
    #[schema(example = 9.99)]
    pub price: f64,
    pub description: Option<String>,
}

/// Fields of a product that passed validation but has no id yet.
#[derive(Clone, Debug, PartialEq)]
pub struct NewProduct {
    pub name: String,
    pub price: f64,
    pub description: Option<String>,
}

impl NewProduct {
    pub fn into_product(self, id: i32) -> Product {
        Product {
            id,
            name: self.name,
            price: self.price,
            description: self.description,
        }
    }
}

/// Request body accepted by `POST /products`. Documentation only; bodies are
/// validated from raw JSON so that every malformed field gets a precise message.
#[derive(Deserialize, ToSchema)]
pub struct CreateProductRequest {
    #[schema(example = "Widget")]
    pub name: String,
    #[schema(example = 9.99)]
    pub price: f64,
    pub description: Option<String>,
}
