//! Common routes: liveness text, health, readiness, version, OpenAPI document.

use crate::openapi::ApiDoc;
use crate::state::AppState;
use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use serde::Serialize;
use utoipa::OpenApi;

pub const LIVENESS_MESSAGE: &str = "Webshop backend működik!";

/// Body of `/health` and `/ready`. The database field appears only where it was checked.
#[derive(Serialize)]
struct StatusBody {
    status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    database: Option<&'static str>,
}

impl StatusBody {
    const ALIVE: StatusBody = StatusBody { status: "ok", database: None };
    const READY: StatusBody = StatusBody { status: "ok", database: Some("ok") };
    const DEGRADED: StatusBody = StatusBody { status: "degraded", database: Some("unavailable") };
}

#[derive(Serialize)]
struct VersionBody {
    name: &'static str,
    version: &'static str,
}

async fn liveness() -> &'static str {
    LIVENESS_MESSAGE
}

async fn health() -> Json<StatusBody> {
    Json(StatusBody::ALIVE)
}

/// 503 when the store cannot answer a trivial query.
async fn ready(State(state): State<AppState>) -> (StatusCode, Json<StatusBody>) {
    match state.store.ping().await {
        Ok(()) => (StatusCode::OK, Json(StatusBody::READY)),
        Err(e) => {
            tracing::warn!(error = %e, "readiness check failed");
            (StatusCode::SERVICE_UNAVAILABLE, Json(StatusBody::DEGRADED))
        }
    }
}

async fn version() -> Json<VersionBody> {
    Json(VersionBody {
        name: env!("CARGO_PKG_NAME"),
        version: env!("CARGO_PKG_VERSION"),
    })
}

async fn openapi() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// GET /, /health, /ready, /version, /openapi.json.
pub fn common_routes(state: AppState) -> Router {
    Router::new()
        .route("/", get(liveness))
        .route("/health", get(health))
        .route("/ready", get(ready))
        .route("/version", get(version))
        .route("/openapi.json", get(openapi))
        .with_state(state)
}
