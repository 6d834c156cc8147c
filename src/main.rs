//! Server entry point: load settings, connect and sync the database, serve until stopped.

use std::process::ExitCode;

use tracing_subscriber::EnvFilter;
use webshop_backend::{load_from_env, shutdown::shutdown_signal, Application};

const DEFAULT_LOG_FILTER: &str = "webshop_backend=info,tower_http=info";

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .init();

    let settings = match load_from_env() {
        Ok(s) => s,
        Err(e) => {
            tracing::error!(error = %e, "invalid configuration");
            return ExitCode::FAILURE;
        }
    };

    let app = match Application::init(settings).await {
        Ok(app) => app,
        Err(e) => {
            tracing::error!(error = %e, "start-up failed, the database must be reachable before serving");
            return ExitCode::FAILURE;
        }
    };

    let served = app.serve(shutdown_signal()).await;
    app.teardown().await;
    match served {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "server error");
            ExitCode::FAILURE
        }
    }
}
