//! Webshop backend: product catalog REST API over PostgreSQL.

pub mod app;
pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod migration;
pub mod openapi;
pub mod product;
pub mod response;
pub mod routes;
pub mod service;
pub mod shutdown;
pub mod sql;
pub mod state;
pub mod store;

pub use app::{build_router, Application};
pub use config::{load_from_env, load_from_lookup, Settings};
pub use error::{AppError, ConfigError};
pub use migration::apply_migrations;
pub use product::{NewProduct, Product};
pub use service::{PgProductStore, ProductStore};
pub use state::AppState;
