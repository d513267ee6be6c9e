//! Comment endpoints
//!
//! `/comments`: GET `?topicId=` lists, POST creates, DELETE `?id=` removes.

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use serde::{Deserialize, Serialize};

use super::{method_not_allowed, CreatedResponse, MessageResponse};
use crate::db::repos::{Comment, CommentRepo, NewComment};
use crate::http::error::ApiError;
use crate::http::extractors::{IdQuery, JsonBody, TopicIdQuery};
use crate::http::server::AppState;
use crate::models::{required, AuthorName, CommentContent, IdInput, RecordId, ValidationError};

/// Create comment request
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCommentRequest {
    pub topic_id: Option<IdInput>,
    pub author: Option<String>,
    pub content: Option<String>,
}

impl CreateCommentRequest {
    fn validate(self) -> Result<NewComment, ApiError> {
        let topic_id = self
            .topic_id
            .ok_or(ValidationError::Missing { field: "topicId" })?
            .into_id("topicId")?;

        Ok(NewComment {
            topic_id,
            author: AuthorName::new(required("author", self.author)?),
            content: CommentContent::new(required("content", self.content)?),
        })
    }
}

/// Comment response
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentResponse {
    pub id: RecordId,
    pub topic_id: RecordId,
    pub author: String,
    pub content: String,
    pub created_at: String,
}

impl From<Comment> for CommentResponse {
    fn from(c: Comment) -> Self {
        Self {
            id: c.id,
            topic_id: c.topic_id,
            author: c.author,
            content: c.content,
            created_at: c.created_at.to_rfc3339(),
        }
    }
}

/// Comment list response
#[derive(Debug, Serialize)]
pub struct CommentListResponse {
    pub comments: Vec<CommentResponse>,
}

/// GET /comments?topicId= - a topic's comments, oldest first
async fn list_comments(
    State(state): State<Arc<AppState>>,
    TopicIdQuery(topic_id): TopicIdQuery,
) -> Result<Json<CommentListResponse>, ApiError> {
    let comments = CommentRepo::new(&state.pool).list_for_topic(topic_id).await?;

    Ok(Json(CommentListResponse {
        comments: comments.into_iter().map(CommentResponse::from).collect(),
    }))
}

/// POST /comments - add a comment and bump the topic's counters
async fn create_comment(
    State(state): State<Arc<AppState>>,
    JsonBody(req): JsonBody<CreateCommentRequest>,
) -> Result<(StatusCode, Json<CreatedResponse>), ApiError> {
    let comment = req.validate()?;
    let id = CommentRepo::new(&state.pool).create(comment).await?;

    Ok((
        StatusCode::CREATED,
        Json(CreatedResponse {
            id,
            message: "Comment added",
        }),
    ))
}

/// DELETE /comments?id= - remove a comment (missing ids succeed too)
async fn delete_comment(
    State(state): State<Arc<AppState>>,
    IdQuery(id): IdQuery,
) -> Result<Json<MessageResponse>, ApiError> {
    CommentRepo::new(&state.pool).delete(id).await?;

    Ok(Json(MessageResponse {
        message: "Comment deleted",
    }))
}

/// Comment routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route(
        "/comments",
        get(list_comments)
            .post(create_comment)
            .delete(delete_comment)
            .fallback(method_not_allowed),
    )
}
