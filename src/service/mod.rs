//! Persistence seam for products: the trait handlers depend on, and its PostgreSQL implementation.

mod crud;
mod validation;
pub use crud::PgProductStore;
pub use validation::{
    validate_new_product, NAME_REQUIRED_MESSAGE, NAME_TOO_LONG_MESSAGE, PRICE_INVALID_MESSAGE,
};

use crate::product::{NewProduct, Product};
use async_trait::async_trait;

/// Product persistence. Implementations must be safe to share across concurrent requests.
#[async_trait]
pub trait ProductStore: Send + Sync {
    /// Every product, ordered by id.
    async fn list_all(&self) -> Result<Vec<Product>, sqlx::Error>;

    /// Insert one product and return it with its generated id.
    async fn create(&self, product: NewProduct) -> Result<Product, sqlx::Error>;

    /// Remove the product with `id`. Returns the number of rows removed (0 or 1).
    async fn delete_by_id(&self, id: i32) -> Result<u64, sqlx::Error>;

    /// Cheap connectivity probe.
    async fn ping(&self) -> Result<(), sqlx::Error>;
}
