//! Database connection pool management
//!
//! Uses sqlx PgPool with explicit connection limits. Handlers never hold a
//! connection beyond the request: queries borrow from the pool, and
//! transactions give their connection back on commit, rollback, or drop.

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

/// Default maximum connections for the pool.
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// Create a PostgreSQL connection pool.
///
/// Connects eagerly so a bad `DATABASE_URL` fails at startup rather than on
/// the first request.
///
/// # Example
///
/// ```ignore
/// let pool = create_pool("postgres://localhost/forum", DEFAULT_MAX_CONNECTIONS).await?;
/// ```
pub async fn create_pool(database_url: &str, max_connections: u32) -> Result<PgPool, sqlx::Error> {
    tracing::debug!(max_connections, "connecting to database");

    PgPoolOptions::new()
        .max_connections(max_connections.max(1))
        .connect(database_url)
        .await
}
