//! Comment and author input types

/// Display name of a topic or comment author.
///
/// Not a verified identity; whatever the client sends is stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorName(String);

impl AuthorName {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Comment body. Whitespace and length are preserved as received.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentContent(String);

impl CommentContent {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn author_is_kept_verbatim() {
        assert_eq!(AuthorName::new(" bob ").as_str(), " bob ");
        assert_eq!(AuthorName::new("x".repeat(129)).as_str().len(), 129);
    }

    #[test]
    fn content_whitespace_is_preserved() {
        let raw = "    indented code\n";
        assert_eq!(CommentContent::new(raw).as_str(), raw);
    }

    #[test]
    fn large_content_is_accepted() {
        let raw = "a".repeat(65537);
        assert_eq!(CommentContent::new(raw.as_str()).as_str(), raw);
    }
}
