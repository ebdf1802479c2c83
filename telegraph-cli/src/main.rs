//! telegraph CLI - article CRUD server
//!
//! Entry point for the `telegraph` binary:
//! - `serve`: run the HTTP API and SPA fallback
//! - `init-db`: check the database and create the articles table
//!
//! Settings come from flags or environment variables; a `.env` file in the
//! working directory is loaded first when present.

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod tracing_setup;

use tracing_setup::TracingConfig;

#[derive(Parser, Debug)]
#[command(
    name = "telegraph",
    author,
    version,
    about = "Minimal article publishing backend: paginated CRUD over PostgreSQL"
)]
struct Cli {
    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the HTTP server (article API + single-page app)
    Serve(commands::serve::ServeArgs),
    /// Check the database connection and create the articles table
    InitDb(commands::init_db::InitDbArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    tracing_setup::init(&TracingConfig { debug: cli.debug })?;

    match cli.command {
        Commands::Serve(args) => commands::run_serve(args).await?,
        Commands::InitDb(args) => commands::run_init_db(args).await?,
    }

    Ok(())
}
