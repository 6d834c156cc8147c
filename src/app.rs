//! Router assembly and the application lifecycle: init (connect, check, sync), serve, teardown.

use crate::config::{HttpSettings, Settings};
use crate::error::AppError;
use crate::middleware::request_id_layer;
use crate::migration::apply_migrations;
use crate::routes::{common_routes, product_routes};
use crate::service::PgProductStore;
use crate::state::AppState;
use crate::store::{check_connection, connect_pool};
use axum::{error_handling::HandleErrorLayer, extract::DefaultBodyLimit, BoxError, Router};
use sqlx::PgPool;
use std::future::{Future, IntoFuture};
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::Notify;
use tower::timeout::{error::Elapsed, TimeoutLayer};
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};

/// Largest accepted request body.
pub const BODY_LIMIT_BYTES: usize = 100 * 1024;

/// Turns errors raised by the middleware stack into the usual JSON error response.
async fn handle_middleware_error(err: BoxError) -> AppError {
    if err.is::<Elapsed>() {
        AppError::Timeout
    } else {
        AppError::Internal(err.to_string())
    }
}

/// Full router with middleware: request id span, CORS for every origin, request timeout, body limit.
pub fn build_router(state: AppState, http: &HttpSettings) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);
    Router::new()
        .merge(common_routes(state.clone()))
        .merge(product_routes(state))
        .layer(
            ServiceBuilder::new()
                .layer(axum::middleware::from_fn(request_id_layer))
                .layer(cors)
                .layer(HandleErrorLayer::new(handle_middleware_error))
                .layer(TimeoutLayer::new(http.request_timeout))
                .layer(DefaultBodyLimit::max(BODY_LIMIT_BYTES)),
        )
}

pub struct Application {
    settings: Settings,
    pool: PgPool,
    state: AppState,
}

impl Application {
    /// Connect, verify the database answers, and sync the schema. Any failure is returned;
    /// the caller is expected to stop rather than serve without a database.
    pub async fn init(settings: Settings) -> Result<Self, AppError> {
        let pool = connect_pool(&settings.database).await?;
        check_connection(&pool).await?;
        apply_migrations(&pool).await?;
        let state = AppState::new(PgProductStore::new(pool.clone()));
        Ok(Application::new(settings, pool, state))
    }

    /// Assemble from parts that are already set up. `pool` is the one closed on teardown.
    pub fn new(settings: Settings, pool: PgPool, state: AppState) -> Self {
        Application { settings, pool, state }
    }

    pub fn router(&self) -> Router {
        build_router(self.state.clone(), &self.settings.http)
    }

    /// Serve until `shutdown` resolves, then drain in-flight requests for at most the grace period.
    pub async fn serve<F>(&self, shutdown: F) -> std::io::Result<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let listener = TcpListener::bind(self.settings.http.bind_addr()).await?;
        tracing::info!("listening on {}", listener.local_addr()?);

        let stopping = Arc::new(Notify::new());
        let notify = stopping.clone();
        let server = axum::serve(listener, self.router()).with_graceful_shutdown(async move {
            shutdown.await;
            notify.notify_one();
        });

        let grace = self.settings.http.shutdown_grace;
        let deadline = async move {
            stopping.notified().await;
            tokio::time::sleep(grace).await;
        };

        tokio::select! {
            res = server.into_future() => res,
            _ = deadline => {
                tracing::warn!(grace_secs = grace.as_secs(), "shutdown grace period elapsed, dropping open connections");
                Ok(())
            }
        }
    }

    /// Close the pool after the server has stopped.
    pub async fn teardown(self) {
        self.pool.close().await;
        tracing::info!("database pool closed");
    }
}
