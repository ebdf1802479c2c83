//! telegraph-server: article CRUD over HTTP
//!
//! Exposes paginated create/read/update/delete endpoints for text articles
//! stored in PostgreSQL, and serves the single-page application for every
//! other path.

pub mod config;
pub mod db;
pub mod http;
pub mod models;

pub use config::{DbConfig, ServerConfig};
pub use http::{build_router, run_server, AppState};
