//! Video database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for videos table
#[derive(Debug, Clone, FromRow)]
pub struct VideoModel {
    pub id: i64,
    pub owner_id: i64,
    pub title: String,
    pub description: Option<String>,
    pub category: Option<String>,
    pub video_url: String,
    pub thumbnail_url: Option<String>,
    pub duration: Option<String>,
    pub created_at: DateTime<Utc>,
}
