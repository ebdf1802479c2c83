//! One-shot schema bootstrap
//!
//! Same checks the server runs at startup, but failures are fatal here.

use std::time::Duration;

use anyhow::{Context, Result};
use clap::Args;

use telegraph_server::db::{create_pool, schema};
use telegraph_server::DbConfig;

use super::db::DbArgs;

/// Arguments for the init-db command
#[derive(Args, Debug)]
pub struct InitDbArgs {
    /// Seconds to wait for a database connection
    #[arg(long, default_value = "10")]
    pub connect_timeout: u64,

    #[command(flatten)]
    pub db: DbArgs,
}

/// Check connectivity and create the articles table
pub async fn run_init_db(args: InitDbArgs) -> Result<()> {
    let db_config = DbConfig {
        acquire_timeout: Duration::from_secs(args.connect_timeout),
        ..DbConfig::from(args.db)
    };
    let pool = create_pool(&db_config);

    let now = schema::check_connection(&pool)
        .await
        .with_context(|| {
            format!(
                "Database connection check failed ({}:{}/{})",
                db_config.host, db_config.port, db_config.name
            )
        })?;
    tracing::info!(db_time = %now, "Database connected");

    schema::ensure_schema(&pool)
        .await
        .context("Failed to create articles table")?;
    tracing::info!("Database schema initialized");

    pool.close().await;
    Ok(())
}
