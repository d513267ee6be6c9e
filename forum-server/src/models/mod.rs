//! Domain models with validation at construction
//!
//! All user input is validated when creating these types.
//! Invalid input returns ValidationError, not panic.

pub mod validation;
pub mod topic;
pub mod comment;
pub mod id;
pub mod policy;

pub use validation::{required, ValidationError};
pub use topic::{Category, TopicTitle, DEFAULT_CATEGORY};
pub use comment::{AuthorName, CommentContent};
pub use id::{parse_id, IdInput, RecordId};
pub use policy::TopicDeletePolicy;

/// Recency label written to `topics.last_post` on creation and on every new comment.
pub const LAST_POST_JUST_NOW: &str = "just now";
