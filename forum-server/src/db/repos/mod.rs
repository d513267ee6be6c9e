//! Repository implementations for database access
//!
//! Each repository follows these patterns:
//! - Borrows the pool; no connection outlives a call
//! - Uses transactions for multi-step operations
//! - Maps constraint violations to [`DbError`] variants instead of pre-checking

pub mod topics;
pub mod comments;

pub use topics::{NewTopic, Topic, TopicRepo};
pub use comments::{Comment, CommentRepo, NewComment};

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("not found: {resource} '{id}'")]
    NotFound { resource: &'static str, id: String },

    #[error("conflict: {resource} '{id}' {reason}")]
    Conflict {
        resource: &'static str,
        id: String,
        reason: &'static str,
    },
}

/// True when `err` is a foreign-key violation reported by the database.
pub(crate) fn is_foreign_key_violation(err: &sqlx::Error) -> bool {
    err.as_database_error()
        .is_some_and(|db| db.is_foreign_key_violation())
}
