//! What happens to comments when their topic is deleted

use std::fmt;
use std::str::FromStr;

use super::ValidationError;

/// Topic deletion policy.
///
/// `comments.topic_id` references `topics.id` without `ON DELETE`, so the
/// database refuses to orphan comments; this decides how the repo reacts.
/// Deleting a topic never touches its comments unless `Cascade` is chosen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TopicDeletePolicy {
    /// Refuse to delete a topic that still has comments.
    #[default]
    Restrict,
    /// Opt-in: delete the topic's comments in the same transaction.
    Cascade,
}

impl TopicDeletePolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Cascade => "cascade",
            Self::Restrict => "restrict",
        }
    }
}

impl fmt::Display for TopicDeletePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TopicDeletePolicy {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "cascade" => Ok(Self::Cascade),
            "restrict" => Ok(Self::Restrict),
            other => Err(ValidationError::InvalidVariant {
                field: "topic delete policy",
                value: other.to_owned(),
            }),
        }
    }
}
