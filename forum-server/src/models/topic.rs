//! Topic input types

/// Category assigned when a topic is created without one.
pub const DEFAULT_CATEGORY: &str = "General";

/// Topic title, stored exactly as the client sent it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopicTitle(String);

impl TopicTitle {
    /// Wrap a title. Presence is checked at the request boundary; the text
    /// itself is not trimmed, bounded, or otherwise rewritten.
    ///
    /// # Example
    /// ```
    /// use forum_server::models::TopicTitle;
    ///
    /// assert_eq!(TopicTitle::new(" Intro ").as_str(), " Intro ");
    /// ```
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Topic category, falling back to [`DEFAULT_CATEGORY`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category(String);

impl Category {
    /// Absent (or `null`) input yields the default category.
    pub fn new(s: Option<&str>) -> Self {
        s.map_or_else(Self::default, |name| Self(name.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for Category {
    fn default() -> Self {
        Self(DEFAULT_CATEGORY.to_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn titles_are_kept_verbatim() {
        assert_eq!(TopicTitle::new("Intro").as_str(), "Intro");
        assert_eq!(TopicTitle::new("  hello  ").as_str(), "  hello  ");
        assert_eq!(TopicTitle::new("").as_str(), "");
    }

    #[test]
    fn long_titles_are_accepted() {
        let long = "a".repeat(257);
        assert_eq!(TopicTitle::new(long.as_str()).as_str(), long);
    }

    #[test]
    fn category_defaults() {
        assert_eq!(Category::new(None).as_str(), DEFAULT_CATEGORY);
        assert_eq!(Category::default().as_str(), DEFAULT_CATEGORY);
    }

    #[test]
    fn given_category_is_kept_verbatim() {
        assert_eq!(Category::new(Some(" News ")).as_str(), " News ");
        assert_eq!(Category::new(Some("")).as_str(), "");
        let long = "c".repeat(65);
        assert_eq!(Category::new(Some(&long)).as_str(), long);
    }
}
