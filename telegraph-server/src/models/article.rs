//! Article input validation
//!
//! Title is optional and falls back to a placeholder; content is required.

use super::ValidationError;

/// Placeholder used when a title is absent or empty
pub const UNTITLED: &str = "Untitled";

/// Maximum title length, matching the `VARCHAR(255)` column
const MAX_TITLE_LEN: usize = 255;

/// Validated article title
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleTitle(String);

impl ArticleTitle {
    /// Create a title from optional input.
    ///
    /// `None` and `""` both become [`UNTITLED`]. Length is counted in
    /// characters, the way PostgreSQL counts `VARCHAR(n)`.
    ///
    /// # Example
    /// ```
    /// use telegraph_server::models::ArticleTitle;
    ///
    /// assert_eq!(ArticleTitle::new(None).unwrap().as_str(), "Untitled");
    /// assert_eq!(ArticleTitle::new(Some("Hello")).unwrap().as_str(), "Hello");
    /// ```
    pub fn new(s: Option<&str>) -> Result<Self, ValidationError> {
        let title = match s {
            Some(t) if !t.is_empty() => t,
            _ => UNTITLED,
        };

        if title.chars().count() > MAX_TITLE_LEN {
            return Err(ValidationError::TooLong {
                field: "title",
                max: MAX_TITLE_LEN,
            });
        }

        Ok(Self(title.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for ArticleTitle {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Validated article body (never empty)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleContent(String);

impl ArticleContent {
    /// Create content, rejecting missing or empty input.
    pub fn new(s: Option<&str>) -> Result<Self, ValidationError> {
        match s {
            Some(c) if !c.is_empty() => Ok(Self(c.to_owned())),
            _ => Err(ValidationError::Empty { field: "content" }),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}
