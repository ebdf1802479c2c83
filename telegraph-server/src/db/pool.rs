//! Database connection pool management
//!
//! Uses sqlx PgPool with explicit connection limits. The pool connects
//! lazily so that the server can start while PostgreSQL is unreachable.

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

use crate::config::DbConfig;

/// Create a PostgreSQL connection pool.
///
/// No connection is opened here; the first query does that. A database
/// that is down at startup therefore surfaces as per-request errors.
///
/// # Example
///
/// ```ignore
/// let pool = create_pool(&DbConfig::default());
/// ```
pub fn create_pool(config: &DbConfig) -> PgPool {
    PgPoolOptions::new()
        .max_connections(config.max_connections)
        .idle_timeout(config.idle_timeout)
        .acquire_timeout(config.acquire_timeout)
        .connect_lazy_with(config.connect_options())
}
