//! Response DTOs for API endpoints
//!
//! Field names follow the JSON shape the web client reads: camelCase, with
//! identifiers exposed as `_id` strings.

use chrono::{DateTime, Utc};
use serde::Serialize;
use tube_core::Snowflake;

// ============================================================================
// Auth Responses
// ============================================================================

/// Returned by register and login: the account plus its access token
#[derive(Debug, Clone, Serialize)]
pub struct AuthResponse {
    #[serde(rename = "_id")]
    pub id: Snowflake,
    pub username: String,
    pub email: String,
    pub avatar: Option<String>,
    pub subscribers: i64,
    pub token: String,
    #[serde(rename = "expiresIn")]
    pub expires_in: i64,
}

// ============================================================================
// Channel Responses
// ============================================================================

/// Public channel profile (a user as seen by others)
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChannelResponse {
    #[serde(rename = "_id")]
    pub id: Snowflake,
    pub username: String,
    pub avatar: Option<String>,
    pub subscribers: i64,
    pub created_at: DateTime<Utc>,
}

// ============================================================================
// Video Responses
// ============================================================================

/// Video record with its counters and uploader profile
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoResponse {
    #[serde(rename = "_id")]
    pub id: Snowflake,
    pub title: String,
    pub description: Option<String>,
    pub category: Option<String>,
    pub video_url: String,
    pub thumbnail_url: Option<String>,
    pub duration: Option<String>,
    pub likes: i64,
    pub dislikes: i64,
    pub user: ChannelResponse,
    pub created_at: DateTime<Utc>,
}

// ============================================================================
// Comment Responses
// ============================================================================

/// A comment with its author's public profile
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentResponse {
    #[serde(rename = "_id")]
    pub id: Snowflake,
    pub video_id: Snowflake,
    pub content: String,
    pub user: ChannelResponse,
    pub created_at: DateTime<Utc>,
}

// ============================================================================
// Engagement Responses
// ============================================================================

/// Post-mutation subscriber count
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SubscribersResponse {
    pub subscribers: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionStatusResponse {
    pub is_subscribed: bool,
}

/// Post-mutation like/dislike counts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ReactionCountsResponse {
    pub likes: i64,
    pub dislikes: i64,
}

/// Caller's reaction on a video; at most one flag is ever set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LikeStatusResponse {
    pub liked: bool,
    pub disliked: bool,
}

// ============================================================================
// Health Responses
// ============================================================================

/// Basic health check response
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: Utc::now(),
        }
    }
}

/// Readiness check response
#[derive(Debug, Clone, Serialize)]
pub struct ReadinessResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub checks: HealthChecks,
}

/// Health check status for each dependency
#[derive(Debug, Clone, Serialize)]
pub struct HealthChecks {
    pub storage: String,
}

impl ReadinessResponse {
    pub fn ready(storage_healthy: bool) -> Self {
        Self {
            status: if storage_healthy { "ready" } else { "not_ready" }.to_string(),
            timestamp: Utc::now(),
            checks: HealthChecks {
                storage: if storage_healthy { "healthy" } else { "unhealthy" }.to_string(),
            },
        }
    }

    pub fn is_ready(&self) -> bool {
        self.status == "ready"
    }
}
