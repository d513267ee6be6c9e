//! Schema bootstrap command

use anyhow::{Context, Result};
use clap::Parser;

use forum_server::db::{create_pool, ensure_schema};

use super::require_database_url;

/// Arguments for the init-db command
#[derive(Parser, Debug)]
pub struct InitDbArgs {
    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    pub database_url: Option<String>,
}

/// Create the forum tables if they are missing
pub async fn run_init_db(args: InitDbArgs) -> Result<()> {
    let database_url = require_database_url(args.database_url)?;

    let pool = create_pool(&database_url, 1)
        .await
        .context("Failed to connect to database")?;

    ensure_schema(&pool)
        .await
        .context("Failed to initialize schema")?;

    pool.close().await;
    println!("Forum schema is ready");
    Ok(())
}
