//! Shared fixtures: in-memory stores and a router built the same way as in production.

#![allow(dead_code)]

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use serde_json::Value;
use std::sync::Mutex;
use std::time::Duration;
use tower::ServiceExt;
use webshop_backend::config::HttpSettings;
use webshop_backend::{build_router, AppState, NewProduct, Product, ProductStore};

#[derive(Default)]
struct Table {
    last_id: i32,
    rows: Vec<Product>,
}

/// Keeps products in memory; ids are issued from 1 upwards and never reused.
#[derive(Default)]
pub struct MemoryStore {
    table: Mutex<Table>,
}

#[async_trait]
impl ProductStore for MemoryStore {
    async fn list_all(&self) -> Result<Vec<Product>, sqlx::Error> {
        Ok(self.table.lock().unwrap().rows.clone())
    }

    async fn create(&self, product: NewProduct) -> Result<Product, sqlx::Error> {
        let mut table = self.table.lock().unwrap();
        table.last_id += 1;
        let created = product.into_product(table.last_id);
        table.rows.push(created.clone());
        Ok(created)
    }

    async fn delete_by_id(&self, id: i32) -> Result<u64, sqlx::Error> {
        let mut table = self.table.lock().unwrap();
        let before = table.rows.len();
        table.rows.retain(|p| p.id != id);
        Ok((before - table.rows.len()) as u64)
    }

    async fn ping(&self) -> Result<(), sqlx::Error> {
        Ok(())
    }
}

/// Every operation fails as if the database had gone away.
pub struct FailingStore;

#[async_trait]
impl ProductStore for FailingStore {
    async fn list_all(&self) -> Result<Vec<Product>, sqlx::Error> {
        Err(sqlx::Error::PoolTimedOut)
    }

    async fn create(&self, _product: NewProduct) -> Result<Product, sqlx::Error> {
        Err(sqlx::Error::PoolTimedOut)
    }

    async fn delete_by_id(&self, _id: i32) -> Result<u64, sqlx::Error> {
        Err(sqlx::Error::PoolTimedOut)
    }

    async fn ping(&self) -> Result<(), sqlx::Error> {
        Err(sqlx::Error::PoolClosed)
    }
}

/// Answers correctly, but only after `delay`.
pub struct SlowStore {
    pub delay: Duration,
    pub inner: MemoryStore,
}

#[async_trait]
impl ProductStore for SlowStore {
    async fn list_all(&self) -> Result<Vec<Product>, sqlx::Error> {
        tokio::time::sleep(self.delay).await;
        self.inner.list_all().await
    }

    async fn create(&self, product: NewProduct) -> Result<Product, sqlx::Error> {
        tokio::time::sleep(self.delay).await;
        self.inner.create(product).await
    }

    async fn delete_by_id(&self, id: i32) -> Result<u64, sqlx::Error> {
        tokio::time::sleep(self.delay).await;
        self.inner.delete_by_id(id).await
    }

    async fn ping(&self) -> Result<(), sqlx::Error> {
        Ok(())
    }
}

pub fn http_settings() -> HttpSettings {
    HttpSettings {
        host: "127.0.0.1".into(),
        port: 0,
        request_timeout: Duration::from_secs(5),
        shutdown_grace: Duration::from_secs(1),
    }
}

pub fn app_with<S: ProductStore + 'static>(store: S) -> Router {
    build_router(AppState::new(store), &http_settings())
}

pub fn app_with_timeout<S: ProductStore + 'static>(store: S, request_timeout: Duration) -> Router {
    let http = HttpSettings {
        request_timeout,
        ..http_settings()
    };
    build_router(AppState::new(store), &http)
}

pub fn app() -> Router {
    app_with(MemoryStore::default())
}

pub struct TestResponse {
    pub status: StatusCode,
    pub content_type: Option<String>,
    pub text: String,
}

impl TestResponse {
    pub fn json(&self) -> Value {
        serde_json::from_str(&self.text).unwrap_or_else(|e| panic!("not JSON ({e}): {}", self.text))
    }
}

pub async fn send(app: &Router, method: Method, uri: &str, body: Option<&str>) -> TestResponse {
    let mut builder = Request::builder().method(method).uri(uri);
    if body.is_some() {
        builder = builder.header(header::CONTENT_TYPE, "application/json");
    }
    let req = builder
        .body(body.map(|b| Body::from(b.to_string())).unwrap_or_else(Body::empty))
        .unwrap();
    let resp = app.clone().oneshot(req).await.unwrap();
    let status = resp.status();
    let content_type = resp
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    TestResponse {
        status,
        content_type,
        text: String::from_utf8(bytes.to_vec()).unwrap(),
    }
}

pub async fn get(app: &Router, uri: &str) -> TestResponse {
    send(app, Method::GET, uri, None).await
}

pub async fn post(app: &Router, uri: &str, body: &str) -> TestResponse {
    send(app, Method::POST, uri, Some(body)).await
}

pub async fn delete(app: &Router, uri: &str) -> TestResponse {
    send(app, Method::DELETE, uri, None).await
}
