//! HTTP server command
//!
//! Runs the article API and SPA fallback until Ctrl+C or SIGTERM.

use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use telegraph_server::db::create_pool;
use telegraph_server::{run_server, DbConfig, ServerConfig};

use super::db::DbArgs;

/// Arguments for the serve command
#[derive(Args, Debug)]
pub struct ServeArgs {
    /// Port to listen on
    #[arg(long, short = 'p', env = "PORT", default_value = "3000")]
    pub port: u16,

    /// Address to bind to
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    pub host: IpAddr,

    /// Directory holding the single-page application
    #[arg(long, env = "STATIC_DIR", default_value = "public")]
    pub static_dir: PathBuf,

    #[command(flatten)]
    pub db: DbArgs,
}

impl ServeArgs {
    pub fn server_config(&self) -> ServerConfig {
        ServerConfig {
            bind_addr: SocketAddr::new(self.host, self.port),
            static_dir: self.static_dir.clone(),
        }
    }
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    let config = args.server_config();
    let db_config = DbConfig::from(args.db);

    tracing::info!(
        db_host = %db_config.host,
        db_port = db_config.port,
        db_name = %db_config.name,
        "Starting telegraph server on {}",
        config.bind_addr
    );

    // Lazy pool: an unreachable database does not stop startup
    let pool = create_pool(&db_config);

    // Run server (blocks until shutdown)
    run_server(pool, config).await.context("Server error")?;

    Ok(())
}
