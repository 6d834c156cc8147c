//! Schema sync: create the product table if missing and reconcile an existing one.
//! Runs once at start-up, before the listener opens.

use crate::error::{AppError, DbAction};
use crate::sql::{create_table, reconcile_columns, TableDef, PRODUCTS};
use sqlx::PgPool;

/// Create or reconcile every managed table. Idempotent.
pub async fn apply_migrations(pool: &PgPool) -> Result<(), AppError> {
    sync_table(pool, &PRODUCTS).await
}

async fn sync_table(pool: &PgPool, table: &TableDef) -> Result<(), AppError> {
    let ddl = create_table(table);
    tracing::debug!(sql = %ddl, "schema sync");
    sqlx::query(&ddl)
        .execute(pool)
        .await
        .map_err(AppError::db(DbAction::Migrate))?;

    for stmt in reconcile_columns(table) {
        tracing::debug!(sql = %stmt, "schema sync");
        sqlx::query(&stmt)
            .execute(pool)
            .await
            .map_err(AppError::db(DbAction::Migrate))?;
    }
    tracing::info!(table = table.name, "schema synchronized");
    Ok(())
}
