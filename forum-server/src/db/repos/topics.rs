//! Topic repository
//!
//! Handles topic listing, creation, and deletion. Deleting a topic honours
//! the configured [`TopicDeletePolicy`] for its comments.

use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use tracing::instrument;

use crate::models::{AuthorName, Category, RecordId, TopicDeletePolicy, TopicTitle, LAST_POST_JUST_NOW};
use super::{is_foreign_key_violation, DbError};

/// Topic record from database
#[derive(Debug, Clone, FromRow)]
pub struct Topic {
    pub id: RecordId,
    pub title: String,
    pub author: String,
    pub category: String,
    pub replies: i32,
    pub views: i32,
    pub last_post: String,
    pub is_pinned: bool,
    pub created_at: DateTime<Utc>,
}

/// Validated input for a new topic
#[derive(Debug, Clone)]
pub struct NewTopic {
    pub title: TopicTitle,
    pub author: AuthorName,
    pub category: Category,
}

/// Topic repository
pub struct TopicRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> TopicRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List every topic, pinned first, newest first.
    #[instrument(skip(self))]
    pub async fn list(&self) -> Result<Vec<Topic>, DbError> {
        let topics = sqlx::query_as::<_, Topic>(
            r#"
            SELECT id, title, author, category, replies, views, last_post, is_pinned, created_at
            FROM topics
            ORDER BY is_pinned DESC, created_at DESC, id DESC
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(topics)
    }

    /// Get a single topic by ID.
    ///
    /// No route serves single topics; the database tests read counters
    /// through it.
    #[instrument(skip(self))]
    pub async fn get(&self, id: RecordId) -> Result<Topic, DbError> {
        sqlx::query_as::<_, Topic>(
            r#"
            SELECT id, title, author, category, replies, views, last_post, is_pinned, created_at
            FROM topics
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or_else(|| DbError::NotFound {
            resource: "topic",
            id: id.to_string(),
        })
    }

    /// Insert a topic with zeroed counters. Returns the new id.
    #[instrument(skip(self, topic), fields(title = topic.title.as_str()))]
    pub async fn create(&self, topic: NewTopic) -> Result<RecordId, DbError> {
        let id: RecordId = sqlx::query_scalar(
            r#"
            INSERT INTO topics (title, author, category, replies, views, last_post)
            VALUES ($1, $2, $3, 0, 0, $4)
            RETURNING id
            "#,
        )
        .bind(topic.title.as_str())
        .bind(topic.author.as_str())
        .bind(topic.category.as_str())
        .bind(LAST_POST_JUST_NOW)
        .fetch_one(self.pool)
        .await?;

        tracing::info!(topic_id = id, "topic created");
        Ok(id)
    }

    /// Delete a topic. Returns whether a row was removed.
    ///
    /// A missing id is not an error. With [`TopicDeletePolicy::Restrict`] a
    /// topic that still has comments yields [`DbError::Conflict`].
    #[instrument(skip(self))]
    pub async fn delete(&self, id: RecordId, policy: TopicDeletePolicy) -> Result<bool, DbError> {
        let mut tx = self.pool.begin().await?;

        // Lock the row so comment creation on this topic waits for us
        let exists: Option<RecordId> =
            sqlx::query_scalar("SELECT id FROM topics WHERE id = $1 FOR UPDATE")
                .bind(id)
                .fetch_optional(&mut *tx)
                .await?;

        if exists.is_none() {
            return Ok(false);
        }

        if policy == TopicDeletePolicy::Cascade {
            let removed = sqlx::query("DELETE FROM comments WHERE topic_id = $1")
                .bind(id)
                .execute(&mut *tx)
                .await?
                .rows_affected();
            tracing::debug!(topic_id = id, comments = removed, "cascaded comment delete");
        }

        let result = sqlx::query("DELETE FROM topics WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await;

        match result {
            Ok(_) => {}
            Err(e) if is_foreign_key_violation(&e) => {
                return Err(DbError::Conflict {
                    resource: "topic",
                    id: id.to_string(),
                    reason: "still has comments",
                });
            }
            Err(e) => return Err(e.into()),
        }

        tx.commit().await?;
        tracing::info!(topic_id = id, %policy, "topic deleted");
        Ok(true)
    }
}
