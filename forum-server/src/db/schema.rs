//! Idempotent schema bootstrap for the `topics` and `comments` tables

use sqlx::PgPool;

use crate::models::{DEFAULT_CATEGORY, LAST_POST_JUST_NOW};

/// Create tables and indexes if they do not exist yet.
///
/// `comments.topic_id` is a plain foreign key (no `ON DELETE` action): the
/// database refuses to delete a topic that still has comments, and
/// [`TopicRepo::delete`](super::TopicRepo::delete) decides whether to clear
/// them first.
pub async fn ensure_schema(pool: &PgPool) -> Result<(), sqlx::Error> {
    tracing::info!("Ensuring forum schema...");

    let mut tx = pool.begin().await?;

    sqlx::query(&format!(
        r#"
        CREATE TABLE IF NOT EXISTS topics (
            id BIGSERIAL PRIMARY KEY,
            title TEXT NOT NULL,
            author TEXT NOT NULL,
            category TEXT NOT NULL DEFAULT '{DEFAULT_CATEGORY}',
            replies INTEGER NOT NULL DEFAULT 0 CHECK (replies >= 0),
            views INTEGER NOT NULL DEFAULT 0 CHECK (views >= 0),
            last_post TEXT NOT NULL DEFAULT '{LAST_POST_JUST_NOW}',
            is_pinned BOOLEAN NOT NULL DEFAULT FALSE,
            created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
        )
        "#
    ))
    .execute(&mut *tx)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS comments (
            id BIGSERIAL PRIMARY KEY,
            topic_id BIGINT NOT NULL REFERENCES topics(id),
            author TEXT NOT NULL,
            content TEXT NOT NULL,
            created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
        )
        "#,
    )
    .execute(&mut *tx)
    .await?;

    sqlx::query(
        "CREATE INDEX IF NOT EXISTS idx_topics_listing ON topics (is_pinned DESC, created_at DESC)",
    )
    .execute(&mut *tx)
    .await?;

    sqlx::query(
        "CREATE INDEX IF NOT EXISTS idx_comments_topic ON comments (topic_id, created_at)",
    )
    .execute(&mut *tx)
    .await?;

    tx.commit().await?;

    tracing::info!("Forum schema ready");
    Ok(())
}
