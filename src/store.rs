//! Connection pool set-up and start-up connectivity check.

use crate::config::{DatabaseSettings, DatabaseTarget};
use crate::error::{AppError, ConfigError, DbAction};
use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use sqlx::PgPool;
use std::str::FromStr;

/// Connection options for the configured target. Parts are passed field by field so
/// passwords never need URL escaping.
pub fn connect_options(target: &DatabaseTarget) -> Result<PgConnectOptions, ConfigError> {
    Ok(match target {
        DatabaseTarget::Url(url) => {
            PgConnectOptions::from_str(url).map_err(|e| ConfigError::DatabaseUrl(e.to_string()))?
        }
        DatabaseTarget::Parts {
            host,
            port,
            name,
            user,
            password,
        } => PgConnectOptions::new()
            .host(host)
            .port(*port)
            .database(name)
            .username(user)
            .password(password),
    })
}

/// Connection description for logs, taken from parsed options so the password never appears.
pub fn describe_connection(options: &PgConnectOptions) -> String {
    format!(
        "postgres://{}@{}:{}/{}",
        options.get_username(),
        options.get_host(),
        options.get_port(),
        options.get_database().unwrap_or("")
    )
}

/// Open the pool. Fails if the first connection cannot be established in time.
pub async fn connect_pool(settings: &DatabaseSettings) -> Result<PgPool, AppError> {
    let options = connect_options(&settings.target)?;
    tracing::info!(
        database = %describe_connection(&options),
        max_connections = settings.max_connections,
        "connecting to database"
    );
    PgPoolOptions::new()
        .max_connections(settings.max_connections)
        .acquire_timeout(settings.connect_timeout)
        .connect_with(options)
        .await
        .map_err(AppError::db(DbAction::Connect))
}

/// Round-trip a trivial query and log the outcome.
pub async fn check_connection(pool: &PgPool) -> Result<(), AppError> {
    match sqlx::query("SELECT 1").execute(pool).await {
        Ok(_) => {
            tracing::info!("database connection established");
            Ok(())
        }
        Err(e) => {
            tracing::error!(error = %e, "could not reach the database");
            Err(AppError::db(DbAction::Connect)(e))
        }
    }
}
