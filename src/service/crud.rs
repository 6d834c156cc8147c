//! Product CRUD execution against PostgreSQL.

use crate::product::{NewProduct, Product};
use crate::service::ProductStore;
use crate::sql::{delete_by_id, insert, select_all, TableDef, PRODUCTS};
use async_trait::async_trait;
use sqlx::PgPool;

/// Statements are rendered once from the table definition.
#[derive(Clone, Debug)]
struct Statements {
    select_all: String,
    insert: String,
    delete_by_id: String,
}

impl Statements {
    fn for_table(table: &TableDef) -> Self {
        Statements {
            select_all: select_all(table),
            insert: insert(table),
            delete_by_id: delete_by_id(table),
        }
    }
}

#[derive(Clone, Debug)]
pub struct PgProductStore {
    pool: PgPool,
    sql: Statements,
}

impl PgProductStore {
    pub fn new(pool: PgPool) -> Self {
        PgProductStore {
            pool,
            sql: Statements::for_table(&PRODUCTS),
        }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl ProductStore for PgProductStore {
    async fn list_all(&self) -> Result<Vec<Product>, sqlx::Error> {
        tracing::debug!(sql = %self.sql.select_all, "query");
        sqlx::query_as::<_, Product>(&self.sql.select_all)
            .fetch_all(&self.pool)
            .await
    }

    async fn create(&self, product: NewProduct) -> Result<Product, sqlx::Error> {
        tracing::debug!(sql = %self.sql.insert, name = %product.name, price = product.price, "query");
        sqlx::query_as::<_, Product>(&self.sql.insert)
            .bind(product.name)
            .bind(product.price)
            .bind(product.description)
            .fetch_one(&self.pool)
            .await
    }

    async fn delete_by_id(&self, id: i32) -> Result<u64, sqlx::Error> {
        tracing::debug!(sql = %self.sql.delete_by_id, id, "query");
        let result = sqlx::query(&self.sql.delete_by_id)
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }

    async fn ping(&self) -> Result<(), sqlx::Error> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
