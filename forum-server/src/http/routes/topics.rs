//! Topic endpoints
//!
//! `/topics`: GET lists, POST creates, DELETE `?id=` removes.

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use serde::{Deserialize, Serialize};

use super::{method_not_allowed, CreatedResponse, MessageResponse};
use crate::db::repos::{NewTopic, Topic, TopicRepo};
use crate::http::error::ApiError;
use crate::http::extractors::{IdQuery, JsonBody};
use crate::http::server::AppState;
use crate::models::{required, AuthorName, Category, RecordId, TopicTitle};

/// Create topic request
#[derive(Debug, Deserialize)]
pub struct CreateTopicRequest {
    pub title: Option<String>,
    pub author: Option<String>,
    pub category: Option<String>,
}

impl CreateTopicRequest {
    /// Only absent or `null` title/author are rejected; values are kept as sent.
    fn validate(self) -> Result<NewTopic, ApiError> {
        Ok(NewTopic {
            title: TopicTitle::new(required("title", self.title)?),
            author: AuthorName::new(required("author", self.author)?),
            category: Category::new(self.category.as_deref()),
        })
    }
}

/// Topic response
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TopicResponse {
    pub id: RecordId,
    pub title: String,
    pub author: String,
    pub category: String,
    pub replies: i32,
    pub views: i32,
    pub last_post: String,
    pub is_pinned: bool,
    pub created_at: String,
}

impl From<Topic> for TopicResponse {
    fn from(t: Topic) -> Self {
        Self {
            id: t.id,
            title: t.title,
            author: t.author,
            category: t.category,
            replies: t.replies,
            views: t.views,
            last_post: t.last_post,
            is_pinned: t.is_pinned,
            created_at: t.created_at.to_rfc3339(),
        }
    }
}

/// Topic list response
#[derive(Debug, Serialize)]
pub struct TopicListResponse {
    pub topics: Vec<TopicResponse>,
}

/// GET /topics - all topics, pinned first then newest
async fn list_topics(
    State(state): State<Arc<AppState>>,
) -> Result<Json<TopicListResponse>, ApiError> {
    let topics = TopicRepo::new(&state.pool).list().await?;

    Ok(Json(TopicListResponse {
        topics: topics.into_iter().map(TopicResponse::from).collect(),
    }))
}

/// POST /topics - create a topic
async fn create_topic(
    State(state): State<Arc<AppState>>,
    JsonBody(req): JsonBody<CreateTopicRequest>,
) -> Result<(StatusCode, Json<CreatedResponse>), ApiError> {
    let topic = req.validate()?;
    let id = TopicRepo::new(&state.pool).create(topic).await?;

    Ok((
        StatusCode::CREATED,
        Json(CreatedResponse {
            id,
            message: "Topic created",
        }),
    ))
}

/// DELETE /topics?id= - delete a topic (missing ids succeed too)
async fn delete_topic(
    State(state): State<Arc<AppState>>,
    IdQuery(id): IdQuery,
) -> Result<Json<MessageResponse>, ApiError> {
    TopicRepo::new(&state.pool)
        .delete(id, state.topic_delete_policy)
        .await?;

    Ok(Json(MessageResponse {
        message: "Topic deleted",
    }))
}

/// Topic routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route(
        "/topics",
        get(list_topics)
            .post(create_topic)
            .delete(delete_topic)
            .fallback(method_not_allowed),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ValidationError, DEFAULT_CATEGORY};

    fn request(title: Option<&str>, author: Option<&str>, category: Option<&str>) -> CreateTopicRequest {
        CreateTopicRequest {
            title: title.map(str::to_owned),
            author: author.map(str::to_owned),
            category: category.map(str::to_owned),
        }
    }

    #[test]
    fn validate_fills_default_category() {
        let topic = request(Some("Intro"), Some("alice"), None).validate().unwrap();
        assert_eq!(topic.title.as_str(), "Intro");
        assert_eq!(topic.author.as_str(), "alice");
        assert_eq!(topic.category.as_str(), DEFAULT_CATEGORY);
    }

    #[test]
    fn validate_rejects_missing_title() {
        let err = request(None, Some("alice"), None).validate().unwrap_err();
        assert!(matches!(
            err,
            ApiError::Validation(ValidationError::Missing { field: "title" })
        ));
    }

    #[test]
    fn validate_keeps_values_as_sent() {
        let topic = request(Some(" Intro\n"), Some(""), Some("  ")).validate().unwrap();
        assert_eq!(topic.title.as_str(), " Intro\n");
        assert_eq!(topic.author.as_str(), "");
        assert_eq!(topic.category.as_str(), "  ");
    }

    #[test]
    fn response_uses_camel_case() {
        let response = TopicResponse {
            id: 1,
            title: "Intro".into(),
            author: "alice".into(),
            category: "General".into(),
            replies: 0,
            views: 0,
            last_post: "just now".into(),
            is_pinned: false,
            created_at: "2024-01-01T00:00:00+00:00".into(),
        };
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["lastPost"], "just now");
        assert_eq!(json["isPinned"], false);
        assert!(json.get("createdAt").is_some());
    }
}
