//! Route handlers organized by resource

pub mod health;
pub mod topics;
pub mod comments;

use serde::Serialize;

use crate::http::error::ApiError;
use crate::models::RecordId;

/// Body returned by successful creates
#[derive(Debug, Serialize)]
pub struct CreatedResponse {
    pub id: RecordId,
    pub message: &'static str,
}

/// Body returned by successful deletes
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

/// Fallback for methods a resource does not serve
pub(crate) async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}
