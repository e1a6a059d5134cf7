//! Comment database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for video_comments table
#[derive(Debug, Clone, FromRow)]
pub struct CommentModel {
    pub id: i64,
    pub video_id: i64,
    pub author_id: i64,
    pub content: String,
    pub created_at: DateTime<Utc>,
}
