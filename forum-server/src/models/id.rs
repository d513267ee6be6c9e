//! Record id parsing
//!
//! Topics and comments use `BIGSERIAL` keys. Ids arrive as query-string text
//! or as JSON values that may be either numbers or numeric strings.

use serde::Deserialize;

use super::ValidationError;

/// Surrogate key shared by topics and comments.
pub type RecordId = i64;

const NOT_AN_ID: &str = "must be a positive integer";

/// Parse a textual id, e.g. from `?id=42`.
pub fn parse_id(field: &'static str, raw: Option<&str>) -> Result<RecordId, ValidationError> {
    let raw = raw.map(str::trim).ok_or(ValidationError::Missing { field })?;

    if raw.is_empty() {
        return Err(ValidationError::Empty { field });
    }

    match raw.parse::<RecordId>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(ValidationError::InvalidFormat {
            field,
            reason: NOT_AN_ID,
        }),
    }
}

/// An id in a JSON body: `42` or `"42"`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum IdInput {
    Number(i64),
    Text(String),
}

impl IdInput {
    pub fn into_id(self, field: &'static str) -> Result<RecordId, ValidationError> {
        match self {
            Self::Number(id) if id > 0 => Ok(id),
            Self::Number(_) => Err(ValidationError::InvalidFormat {
                field,
                reason: NOT_AN_ID,
            }),
            Self::Text(s) => parse_id(field, Some(&s)),
        }
    }
}
