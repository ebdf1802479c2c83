//! Shared helpers for database-backed tests
//!
//! Each test gets its own PostgreSQL schema (via `search_path`) so tests
//! can run in parallel against one `DATABASE_URL`.

use std::str::FromStr;
use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use rand::distributions::Alphanumeric;
use rand::Rng;
use serde_json::Value;
use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use sqlx::PgPool;
use tower::ServiceExt;

use telegraph_server::db::schema::ensure_schema;
use telegraph_server::{build_router, AppState};

pub struct TestDb {
    pub pool: PgPool,
    admin: PgPool,
    schema: String,
    _static_dir: tempfile::TempDir,
    pub app: Router,
}

impl TestDb {
    pub async fn new() -> Self {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
        let admin = PgPool::connect(&url).await.expect("admin connect failed");

        let suffix: String = rand::thread_rng()
            .sample_iter(&Alphanumeric)
            .take(10)
            .map(|c| (c as char).to_ascii_lowercase())
            .collect();
        let schema = format!("telegraph_test_{}", suffix);

        sqlx::query(&format!("CREATE SCHEMA {}", schema))
            .execute(&admin)
            .await
            .expect("create schema failed");

        let options = PgConnectOptions::from_str(&url)
            .expect("invalid DATABASE_URL")
            .options([("search_path", schema.as_str())]);
        let pool = PgPoolOptions::new()
            .max_connections(5)
            .connect_with(options)
            .await
            .expect("test pool connect failed");

        ensure_schema(&pool).await.expect("schema bootstrap failed");

        let static_dir = tempfile::tempdir().expect("tempdir");
        std::fs::write(static_dir.path().join("index.html"), "<html></html>").expect("index");
        let app = build_router(Arc::new(AppState::new(pool.clone())), static_dir.path());

        Self {
            pool,
            admin,
            schema,
            _static_dir: static_dir,
            app,
        }
    }

    /// Send a request, returning status and parsed JSON body (Null when empty).
    pub async fn send(&self, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        let body = match body {
            Some(json) => {
                builder = builder.header("content-type", "application/json");
                Body::from(json.to_string())
            }
            None => Body::empty(),
        };

        let response = self
            .app
            .clone()
            .oneshot(builder.body(body).expect("request"))
            .await
            .expect("router error");

        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body");
        let json = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).expect("json body")
        };
        (status, json)
    }

    pub async fn cleanup(self) {
        self.pool.close().await;
        sqlx::query(&format!("DROP SCHEMA {} CASCADE", self.schema))
            .execute(&self.admin)
            .await
            .expect("drop schema failed");
    }
}
