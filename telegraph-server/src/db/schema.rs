//! Schema bootstrap for the articles table
//!
//! There are no migrations beyond `CREATE TABLE IF NOT EXISTS`; running
//! this against an existing database is a no-op.

use chrono::{DateTime, Utc};
use sqlx::PgPool;

/// Check that the database answers, returning its clock.
pub async fn check_connection(pool: &PgPool) -> Result<DateTime<Utc>, sqlx::Error> {
    let (now,): (DateTime<Utc>,) = sqlx::query_as("SELECT NOW()").fetch_one(pool).await?;
    Ok(now)
}

/// Create the articles table and its list index if missing.
pub async fn ensure_schema(pool: &PgPool) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS articles (
            id SERIAL PRIMARY KEY,
            title VARCHAR(255) NOT NULL,
            content TEXT NOT NULL,
            slug VARCHAR(255) UNIQUE NOT NULL,
            created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
            updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        "CREATE INDEX IF NOT EXISTS idx_articles_created ON articles(created_at DESC)",
    )
    .execute(pool)
    .await?;

    Ok(())
}

/// Outcome of [`bootstrap`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BootstrapReport {
    pub connected: bool,
    pub schema_ready: bool,
}

impl BootstrapReport {
    pub fn is_healthy(&self) -> bool {
        self.connected && self.schema_ready
    }
}

/// Startup checks: connectivity probe, then table creation.
///
/// Failures are logged and reported, never returned as errors. The server
/// starts either way and requests fail individually until the database is
/// reachable. Table creation is skipped when the probe fails, so a dead
/// database costs one acquire timeout rather than two.
pub async fn bootstrap(pool: &PgPool) -> BootstrapReport {
    let connected = match check_connection(pool).await {
        Ok(now) => {
            tracing::info!(db_time = %now, "Database connected");
            true
        }
        Err(e) => {
            tracing::error!(error = %e, "Database connection check failed");
            false
        }
    };

    if !connected {
        tracing::warn!("Skipping schema initialization, database unreachable");
        return BootstrapReport {
            connected,
            schema_ready: false,
        };
    }

    let schema_ready = match ensure_schema(pool).await {
        Ok(()) => {
            tracing::info!("Database schema initialized");
            true
        }
        Err(e) => {
            tracing::error!(error = %e, "Database schema initialization failed");
            false
        }
    };

    BootstrapReport {
        connected,
        schema_ready,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{DbConfig, DEFAULT_ACQUIRE_TIMEOUT};
    use crate::db::create_pool;
    use std::time::{Duration, Instant};

    fn unreachable_pool() -> PgPool {
        create_pool(&DbConfig {
            host: "127.0.0.1".into(),
            port: 1,
            acquire_timeout: Duration::from_secs(1),
            ..DbConfig::default()
        })
    }

    #[tokio::test]
    async fn bootstrap_survives_unreachable_database() {
        let report = bootstrap(&unreachable_pool()).await;
        assert!(!report.connected);
        assert!(!report.schema_ready);
        assert!(!report.is_healthy());
    }

    #[tokio::test]
    async fn bootstrap_is_bounded_by_one_acquire_timeout() {
        let pool = create_pool(&DbConfig {
            host: "127.0.0.1".into(),
            port: 1,
            ..DbConfig::default()
        });

        let started = Instant::now();
        let report = bootstrap(&pool).await;

        assert!(!report.connected);
        assert!(
            started.elapsed() < DEFAULT_ACQUIRE_TIMEOUT + Duration::from_secs(2),
            "bootstrap took {:?}",
            started.elapsed()
        );
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn ensure_schema_is_idempotent() {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
        let pool = PgPool::connect(&url).await.expect("connect failed");

        ensure_schema(&pool).await.expect("first run");
        ensure_schema(&pool).await.expect("second run");

        let report = bootstrap(&pool).await;
        assert!(report.is_healthy());
    }
}
