//! Video entity - metadata of an uploaded video

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::value_objects::Snowflake;

/// Video metadata record. Media bytes live in external storage; only URLs are kept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Video {
    pub id: Snowflake,
    pub owner_id: Snowflake,
    pub title: String,
    pub description: Option<String>,
    pub category: Option<String>,
    pub video_url: String,
    pub thumbnail_url: Option<String>,
    pub duration: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Video {
    /// Create a new Video with required fields
    pub fn new(id: Snowflake, owner_id: Snowflake, title: String, video_url: String) -> Self {
        Self {
            id,
            owner_id,
            title,
            description: None,
            category: None,
            video_url,
            thumbnail_url: None,
            duration: None,
            created_at: Utc::now(),
        }
    }

    /// Category comparison ignores ASCII case
    pub fn in_category(&self, category: &str) -> bool {
        self.category
            .as_deref()
            .is_some_and(|own| own.eq_ignore_ascii_case(category))
    }

    /// Rank of this video for a search, lower is better.
    ///
    /// `0` when the title contains `terms`, `1` when only the description
    /// does, `None` when neither matches. Matching is case-insensitive.
    pub fn search_rank(&self, terms: &str) -> Option<u8> {
        let terms = terms.to_lowercase();
        if self.title.to_lowercase().contains(&terms) {
            Some(0)
        } else if self
            .description
            .as_deref()
            .is_some_and(|d| d.to_lowercase().contains(&terms))
        {
            Some(1)
        } else {
            None
        }
    }
}

/// Ordering of search results
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VideoSort {
    /// Title matches before description matches, newest first within each
    #[default]
    Relevance,
    /// Newest first
    Date,
    /// Highest likes minus dislikes first, newest first on ties
    Rating,
}

/// A title/description search over all videos
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoSearch {
    pub terms: String,
    pub sort: VideoSort,
    pub limit: i64,
}
