//! Test fixtures and data generators
//!
//! Request bodies and the response shapes tests read back.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Short unique suffix for usernames and emails
pub fn unique_suffix() -> String {
    Uuid::new_v4().simple().to_string()[..12].to_string()
}

/// Registration request
#[derive(Debug, Clone, Serialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

impl RegisterRequest {
    pub fn unique() -> Self {
        let suffix = unique_suffix();
        Self {
            username: format!("user{suffix}"),
            email: format!("test{suffix}@example.com"),
            password: "TestPass123".to_string(),
        }
    }
}

/// Login request
#[derive(Debug, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

impl LoginRequest {
    pub fn from_register(reg: &RegisterRequest) -> Self {
        Self {
            email: reg.email.clone(),
            password: reg.password.clone(),
        }
    }
}

/// Register/login response
#[derive(Debug, Deserialize)]
pub struct AuthResponse {
    #[serde(rename = "_id")]
    pub id: String,
    pub username: String,
    pub email: String,
    pub avatar: Option<String>,
    pub subscribers: i64,
    pub token: String,
}

/// Channel profile
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChannelResponse {
    #[serde(rename = "_id")]
    pub id: String,
    pub username: String,
    pub subscribers: i64,
    pub created_at: String,
}

/// Create video request
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateVideoRequest {
    pub title: String,
    pub description: Option<String>,
    pub category: Option<String>,
    pub video_url: String,
    pub thumbnail_url: Option<String>,
    pub duration: Option<String>,
}

impl CreateVideoRequest {
    pub fn unique() -> Self {
        let suffix = unique_suffix();
        Self {
            title: format!("Video {suffix}"),
            description: Some("Integration test upload".to_string()),
            category: Some("education".to_string()),
            video_url: format!("https://cdn.example.com/v/{suffix}.mp4"),
            thumbnail_url: Some(format!("https://cdn.example.com/t/{suffix}.jpg")),
            duration: Some("10:00".to_string()),
        }
    }
}

/// Video record
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoResponse {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    pub video_url: String,
    pub likes: i64,
    pub dislikes: i64,
    pub user: ChannelResponse,
    pub created_at: String,
}

/// Post comment request
#[derive(Debug, Serialize)]
pub struct CreateCommentRequest {
    pub content: String,
}

/// Comment with its author
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentResponse {
    #[serde(rename = "_id")]
    pub id: String,
    pub content: String,
    pub user: ChannelResponse,
    pub created_at: String,
}

#[derive(Debug, Deserialize, PartialEq, Eq)]
pub struct SubscribersResponse {
    pub subscribers: i64,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionStatusResponse {
    pub is_subscribed: bool,
}

#[derive(Debug, Deserialize, PartialEq, Eq)]
pub struct ReactionCountsResponse {
    pub likes: i64,
    pub dislikes: i64,
}

#[derive(Debug, Deserialize, PartialEq, Eq)]
pub struct LikeStatusResponse {
    pub liked: bool,
    pub disliked: bool,
}

/// Empty JSON object sent as the body of engagement mutations
#[derive(Debug, Serialize)]
pub struct EmptyBody {}
