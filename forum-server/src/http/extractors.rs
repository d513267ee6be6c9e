//! Custom Axum extractors
//!
//! Every rejection is an [`ApiError`], so malformed input gets the same JSON
//! error body as a failed validation.

use std::collections::HashMap;

use axum::body::Bytes;
use axum::extract::{FromRequest, FromRequestParts, Query, Request};
use axum::http::request::Parts;
use serde::de::DeserializeOwned;

use super::error::ApiError;
use crate::models::{parse_id, RecordId, ValidationError};

/// JSON request body, decoded whatever the `Content-Type`.
///
/// An empty body decodes as `{}` so that missing fields surface as
/// per-field validation errors.
pub struct JsonBody<T>(pub T);

impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state).await.map_err(|e| {
            ApiError::Validation(ValidationError::Malformed {
                reason: e.body_text(),
            })
        })?;

        let raw: &[u8] = if bytes.iter().all(u8::is_ascii_whitespace) {
            b"{}"
        } else {
            &bytes
        };

        serde_json::from_slice(raw).map(Self).map_err(|e| {
            ApiError::Validation(ValidationError::Malformed {
                reason: e.to_string(),
            })
        })
    }
}

/// Read one id-valued query parameter.
fn query_id(parts: &Parts, field: &'static str) -> Result<RecordId, ApiError> {
    let Query(params) = Query::<HashMap<String, String>>::try_from_uri(&parts.uri).map_err(|e| {
        ApiError::Validation(ValidationError::Malformed {
            reason: e.body_text(),
        })
    })?;

    Ok(parse_id(field, params.get(field).map(String::as_str))?)
}

/// Extract and validate `?id=` from the query string
pub struct IdQuery(pub RecordId);

impl<S> FromRequestParts<S> for IdQuery
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        query_id(parts, "id").map(Self)
    }
}

/// Extract and validate `?topicId=` from the query string
pub struct TopicIdQuery(pub RecordId);

impl<S> FromRequestParts<S> for TopicIdQuery
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        query_id(parts, "topicId").map(Self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http;
    use serde::Deserialize;

    #[derive(Deserialize)]
    struct Probe {
        name: Option<String>,
    }

    fn parts(uri: &str) -> Parts {
        let (parts, _) = http::Request::builder().uri(uri).body(Body::empty()).unwrap().into_parts();
        parts
    }

    #[tokio::test]
    async fn id_query_parses() {
        let mut p = parts("/topics?id=12");
        let IdQuery(id) = IdQuery::from_request_parts(&mut p, &()).await.unwrap();
        assert_eq!(id, 12);
    }

    #[tokio::test]
    async fn topic_id_query_missing_is_validation_error() {
        let mut p = parts("/comments?id=12");
        let err = TopicIdQuery::from_request_parts(&mut p, &()).await.err().unwrap();
        assert!(matches!(
            err,
            ApiError::Validation(ValidationError::Missing { field: "topicId" })
        ));
    }

    #[tokio::test]
    async fn empty_body_decodes_as_empty_object() {
        let req = http::Request::builder().body(Body::empty()).unwrap();
        let JsonBody(probe) = JsonBody::<Probe>::from_request(req, &()).await.unwrap();
        assert!(probe.name.is_none());
    }

    #[tokio::test]
    async fn body_without_content_type_is_accepted() {
        let req = http::Request::builder().body(Body::from(r#"{"name":"x"}"#)).unwrap();
        let JsonBody(probe) = JsonBody::<Probe>::from_request(req, &()).await.unwrap();
        assert_eq!(probe.name.as_deref(), Some("x"));
    }

    #[tokio::test]
    async fn invalid_json_is_malformed() {
        let req = http::Request::builder().body(Body::from("{nope")).unwrap();
        let err = JsonBody::<Probe>::from_request(req, &()).await.err().unwrap();
        assert!(matches!(
            err,
            ApiError::Validation(ValidationError::Malformed { .. })
        ));
    }
}
