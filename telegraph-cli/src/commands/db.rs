//! Database connection flags shared by every command

use std::time::Duration;

use clap::Args;
use telegraph_server::DbConfig;

/// PostgreSQL connection arguments
#[derive(Args, Debug, Clone)]
pub struct DbArgs {
    /// Database user
    #[arg(long, env = "DB_USER", default_value = "postgres")]
    pub db_user: String,

    /// Database host
    #[arg(long, env = "DB_HOST", default_value = "localhost")]
    pub db_host: String,

    /// Database name
    #[arg(long, env = "DB_NAME", default_value = "telegraph")]
    pub db_name: String,

    /// Database password
    #[arg(long, env = "DB_PASSWORD", default_value = "password", hide_env_values = true)]
    pub db_password: String,

    /// Database port
    #[arg(long, env = "DB_PORT", default_value = "5432")]
    pub db_port: u16,

    /// Seconds a request waits for a database connection before failing
    #[arg(long, env = "DB_ACQUIRE_TIMEOUT", default_value = "3")]
    pub db_acquire_timeout: u64,
}

impl From<DbArgs> for DbConfig {
    fn from(args: DbArgs) -> Self {
        Self {
            user: args.db_user,
            host: args.db_host,
            name: args.db_name,
            password: args.db_password,
            port: args.db_port,
            acquire_timeout: Duration::from_secs(args.db_acquire_timeout),
            ..DbConfig::default()
        }
    }
}
