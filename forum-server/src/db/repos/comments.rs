//! Comment repository
//!
//! Creating or deleting a comment also moves the parent topic's `replies`
//! counter, in the same transaction as the row change.

use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use tracing::instrument;

use crate::models::{AuthorName, CommentContent, RecordId, LAST_POST_JUST_NOW};
use super::DbError;

/// Comment record from database
#[derive(Debug, Clone, FromRow)]
pub struct Comment {
    pub id: RecordId,
    pub topic_id: RecordId,
    pub author: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

/// Validated input for a new comment
#[derive(Debug, Clone)]
pub struct NewComment {
    pub topic_id: RecordId,
    pub author: AuthorName,
    pub content: CommentContent,
}

/// Comment repository
pub struct CommentRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> CommentRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List a topic's comments in chronological order.
    ///
    /// An unknown topic simply has no comments.
    #[instrument(skip(self))]
    pub async fn list_for_topic(&self, topic_id: RecordId) -> Result<Vec<Comment>, DbError> {
        let comments = sqlx::query_as::<_, Comment>(
            r#"
            SELECT id, topic_id, author, content, created_at
            FROM comments
            WHERE topic_id = $1
            ORDER BY created_at ASC, id ASC
            "#,
        )
        .bind(topic_id)
        .fetch_all(self.pool)
        .await?;

        Ok(comments)
    }

    /// Add a comment and bump the parent topic (atomic).
    ///
    /// The counter update runs first: it takes the topic's row lock, so
    /// concurrent comments on one topic serialize, and a missing topic is
    /// detected before anything is inserted.
    #[instrument(skip(self, comment), fields(topic_id = comment.topic_id))]
    pub async fn create(&self, comment: NewComment) -> Result<RecordId, DbError> {
        let mut tx = self.pool.begin().await?;

        let touched = sqlx::query(
            "UPDATE topics SET replies = replies + 1, last_post = $1 WHERE id = $2",
        )
        .bind(LAST_POST_JUST_NOW)
        .bind(comment.topic_id)
        .execute(&mut *tx)
        .await?
        .rows_affected();

        if touched == 0 {
            return Err(DbError::NotFound {
                resource: "topic",
                id: comment.topic_id.to_string(),
            });
        }

        let id: RecordId = sqlx::query_scalar(
            r#"
            INSERT INTO comments (topic_id, author, content)
            VALUES ($1, $2, $3)
            RETURNING id
            "#,
        )
        .bind(comment.topic_id)
        .bind(comment.author.as_str())
        .bind(comment.content.as_str())
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;
        tracing::info!(comment_id = id, "comment added");
        Ok(id)
    }

    /// Delete a comment and decrement its topic's counter (atomic).
    ///
    /// Returns whether a row was removed; deleting a missing id leaves every
    /// counter untouched. Locks the parent topic before the comment row, the
    /// same order as [`TopicRepo::delete`](super::TopicRepo::delete).
    #[instrument(skip(self))]
    pub async fn delete(&self, id: RecordId) -> Result<bool, DbError> {
        let mut tx = self.pool.begin().await?;

        let topic_id: Option<RecordId> =
            sqlx::query_scalar("SELECT topic_id FROM comments WHERE id = $1")
                .bind(id)
                .fetch_optional(&mut *tx)
                .await?;

        let Some(topic_id) = topic_id else {
            return Ok(false);
        };

        sqlx::query("SELECT id FROM topics WHERE id = $1 FOR UPDATE")
            .bind(topic_id)
            .execute(&mut *tx)
            .await?;

        // A cascading topic delete may have removed it while we waited
        let removed = sqlx::query("DELETE FROM comments WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?
            .rows_affected();

        if removed == 0 {
            return Ok(false);
        }

        sqlx::query("UPDATE topics SET replies = GREATEST(replies - 1, 0) WHERE id = $1")
            .bind(topic_id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        tracing::info!(comment_id = id, topic_id, "comment deleted");
        Ok(true)
    }
}
