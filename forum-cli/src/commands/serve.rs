//! HTTP server command
//!
//! Runs the forum HTTP server with the topics and comments routes.

use anyhow::{Context, Result};
use clap::Parser;
use std::net::SocketAddr;

use forum_server::db::{create_pool, ensure_schema, DEFAULT_MAX_CONNECTIONS};
use forum_server::models::TopicDeletePolicy;
use forum_server::{run_server, ServerConfig};

use super::require_database_url;

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind to
    #[arg(long, short = 'b', env = "FORUM_BIND", default_value = "127.0.0.1:3030")]
    pub bind: SocketAddr,

    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    pub database_url: Option<String>,

    /// Maximum pooled database connections
    #[arg(long, env = "FORUM_MAX_CONNECTIONS", default_value_t = DEFAULT_MAX_CONNECTIONS)]
    pub max_connections: u32,

    /// What deleting a topic does to its comments: cascade or restrict
    #[arg(long, env = "FORUM_ON_TOPIC_DELETE", default_value_t = TopicDeletePolicy::Restrict)]
    pub on_topic_delete: TopicDeletePolicy,

    /// Create missing tables before serving
    #[arg(long)]
    pub init_schema: bool,
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    let database_url = require_database_url(args.database_url)?;

    tracing::info!("Starting forum server on {}", args.bind);

    let pool = create_pool(&database_url, args.max_connections)
        .await
        .context("Failed to create database pool")?;

    if args.init_schema {
        ensure_schema(&pool)
            .await
            .context("Failed to initialize schema")?;
    }

    let config = ServerConfig {
        bind_addr: args.bind,
        topic_delete_policy: args.on_topic_delete,
    };

    // Run server (blocks until shutdown)
    run_server(pool, config).await.context("Server error")?;

    Ok(())
}
