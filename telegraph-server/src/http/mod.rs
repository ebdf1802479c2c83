//! HTTP server layer
//!
//! Axum server with:
//! - Article CRUD under /api/articles
//! - Permissive CORS, gzip compression, basic hardening headers
//! - Request tracing
//! - SPA fallback for every unmatched path
//! - Graceful shutdown

pub mod error;
pub mod extractors;
pub mod routes;
pub mod server;

pub use error::ApiError;
pub use server::{build_router, run_server, AppState};
