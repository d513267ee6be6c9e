//! Database layer - connection pool, schema, and repositories
//!
//! # Design Principles
//!
//! - Pooled connections, borrowed per request and released on drop
//! - Counters are updated server-side (`replies = replies + 1`), never read-modify-write
//! - Every multi-statement mutation runs in one transaction
//! - Rely on DB constraints, handle violations - no check-then-insert

pub mod pool;
pub mod repos;
pub mod schema;

pub use pool::{create_pool, DEFAULT_MAX_CONNECTIONS};
pub use repos::*;
pub use schema::ensure_schema;
