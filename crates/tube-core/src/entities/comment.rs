//! Comment entity - a user's text reply under a video

use chrono::{DateTime, Utc};

use crate::error::DomainError;
use crate::value_objects::Snowflake;

/// Longest comment body accepted, in characters
pub const MAX_COMMENT_LEN: usize = 1000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    pub id: Snowflake,
    pub video_id: Snowflake,
    pub author_id: Snowflake,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

impl Comment {
    /// Create a new Comment. The body is trimmed and must not end up empty.
    pub fn new(
        id: Snowflake,
        video_id: Snowflake,
        author_id: Snowflake,
        content: &str,
    ) -> Result<Self, DomainError> {
        let content = content.trim();
        if content.is_empty() {
            return Err(DomainError::ValidationError(
                "Comment cannot be blank".to_string(),
            ));
        }
        if content.chars().count() > MAX_COMMENT_LEN {
            return Err(DomainError::ValidationError(format!(
                "Comment must be at most {MAX_COMMENT_LEN} characters"
            )));
        }

        Ok(Self {
            id,
            video_id,
            author_id,
            content: content.to_string(),
            created_at: Utc::now(),
        })
    }
}
