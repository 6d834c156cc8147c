//! Typed errors and HTTP mapping.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;

pub const NOT_FOUND_MESSAGE: &str = "Nem található termék az adott azonosítóval";
pub const INVALID_BODY_MESSAGE: &str = "Érvénytelen kérés törzs.";
pub const INVALID_ID_MESSAGE: &str = "Érvénytelen azonosító.";
pub const TIMEOUT_MESSAGE: &str = "A kérés feldolgozása túllépte az időkorlátot.";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing environment variable: {0}")]
    Missing(&'static str),
    #[error("invalid value for {key}: '{value}'")]
    Invalid { key: &'static str, value: String },
    #[error("invalid DATABASE_URL: {0}")]
    DatabaseUrl(String),
}

/// Persistence operation that failed; selects the message the client sees.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DbAction {
    List,
    Create,
    Delete,
    Connect,
    Migrate,
}

impl DbAction {
    pub fn client_message(self) -> &'static str {
        match self {
            DbAction::List => "Hiba a termékek lekérése során",
            DbAction::Create => "Hiba történt a termék létrehozásakor",
            DbAction::Delete => "Hiba történt a törlés során",
            DbAction::Connect | DbAction::Migrate => "Adatbázis hiba",
        }
    }
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("validation: {0}")]
    Validation(String),
    #[error("database ({action:?}): {source}")]
    Db {
        action: DbAction,
        #[source]
        source: sqlx::Error,
    },
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error("request timed out")]
    Timeout,
    #[error("middleware: {0}")]
    Internal(String),
}

impl AppError {
    /// Adapter for `map_err` that tags a sqlx error with the failing operation.
    pub fn db(action: DbAction) -> impl FnOnce(sqlx::Error) -> AppError {
        move |source| AppError::Db { action, source }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Config(_) | AppError::Db { .. } | AppError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            AppError::Timeout => StatusCode::REQUEST_TIMEOUT,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Validation(_) | AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
        }
    }

    /// Message safe to hand to the client. Internal details stay in the logs.
    pub fn client_message(&self) -> String {
        match self {
            AppError::Config(_) => "Konfigurációs hiba".to_string(),
            AppError::NotFound(_) => NOT_FOUND_MESSAGE.to_string(),
            AppError::Validation(msg) | AppError::BadRequest(msg) => msg.clone(),
            AppError::Db { action, .. } => action.client_message().to_string(),
            AppError::Timeout => TIMEOUT_MESSAGE.to_string(),
            AppError::Internal(_) => "Belső szerverhiba".to_string(),
        }
    }
}

#[derive(Serialize, ToSchema)]
pub struct ErrorBody {
    pub error: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        } else {
            tracing::debug!(error = %self, status = status.as_u16(), "request rejected");
        }
        let body = ErrorBody {
            error: self.client_message(),
        };
        (status, Json(body)).into_response()
    }
}
