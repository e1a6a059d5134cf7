//! Request DTOs for API endpoints
//!
//! All request DTOs implement `Deserialize` and `Validate` for input validation.

use serde::Deserialize;
use tube_core::{VideoSort, MAX_COMMENT_LEN};
use validator::Validate;

// ============================================================================
// Auth Requests
// ============================================================================

/// User registration request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(length(min = 2, max = 32, message = "Username must be 2-32 characters"))]
    pub username: String,

    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(min = 8, max = 72, message = "Password must be 8-72 characters"))]
    pub password: String,
}

/// User login request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

// ============================================================================
// Video Requests
// ============================================================================

/// Register an uploaded video by its metadata
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateVideoRequest {
    #[validate(length(min = 1, max = 100, message = "Title must be 1-100 characters"))]
    pub title: String,

    #[validate(length(max = 5000, message = "Description must be at most 5000 characters"))]
    pub description: Option<String>,

    #[validate(length(max = 50, message = "Category must be at most 50 characters"))]
    pub category: Option<String>,

    #[validate(url(message = "videoUrl must be a valid URL"))]
    pub video_url: String,

    #[validate(url(message = "thumbnailUrl must be a valid URL"))]
    pub thumbnail_url: Option<String>,

    /// Display duration such as "12:34"
    #[validate(length(max = 16, message = "Duration must be at most 16 characters"))]
    pub duration: Option<String>,
}

/// Home feed filters: `?category=music&limit=20`
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct ListVideosQuery {
    #[validate(length(min = 1, max = 50, message = "Category must be 1-50 characters"))]
    pub category: Option<String>,

    #[validate(range(min = 1, max = 100, message = "limit must be between 1 and 100"))]
    pub limit: Option<i64>,
}

/// Search parameters: `?q=rust&sort=date`
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct SearchVideosQuery {
    #[serde(default)]
    #[validate(length(max = 100, message = "Search terms must be at most 100 characters"))]
    pub q: String,

    pub sort: Option<VideoSort>,

    #[validate(range(min = 1, max = 100, message = "limit must be between 1 and 100"))]
    pub limit: Option<i64>,
}

// ============================================================================
// Comment Requests
// ============================================================================

/// Post a comment under a video
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateCommentRequest {
    #[validate(length(min = 1, max = 1000, message = "Comment must be 1-1000 characters"))]
    pub content: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_request_validation() {
        let valid = RegisterRequest {
            username: "creator".to_string(),
            email: "creator@example.com".to_string(),
            password: "Password123".to_string(),
        };
        assert!(valid.validate().is_ok());

        let short_username = RegisterRequest {
            username: "a".to_string(),
            ..valid.clone()
        };
        assert!(short_username.validate().is_err());

        let bad_email = RegisterRequest {
            email: "not-an-email".to_string(),
            ..valid.clone()
        };
        assert!(bad_email.validate().is_err());

        let long_password = RegisterRequest {
            password: "A1".repeat(40),
            ..valid
        };
        assert!(long_password.validate().is_err());
    }

    #[test]
    fn test_create_video_request_uses_camel_case() {
        let request: CreateVideoRequest = serde_json::from_str(
            r#"{
                "title": "Launch day",
                "videoUrl": "https://cdn.example.com/v/1.mp4",
                "thumbnailUrl": "https://cdn.example.com/t/1.jpg",
                "duration": "3:07"
            }"#,
        )
        .unwrap();

        assert_eq!(request.video_url, "https://cdn.example.com/v/1.mp4");
        assert!(request.description.is_none());
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_create_video_request_validation() {
        let request = CreateVideoRequest {
            title: String::new(),
            description: None,
            category: None,
            video_url: "not a url".to_string(),
            thumbnail_url: Some("also not a url".to_string()),
            duration: None,
        };

        let errors = request.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("title"));
        assert!(fields.contains_key("video_url"));
        assert!(fields.contains_key("thumbnail_url"));
    }

    #[test]
    fn test_search_query_defaults_and_bounds() {
        let query: SearchVideosQuery = serde_json::from_str(r#"{"sort": "rating"}"#).unwrap();
        assert_eq!(query.q, "");
        assert_eq!(query.sort, Some(VideoSort::Rating));
        assert!(query.validate().is_ok());

        let too_many = SearchVideosQuery {
            limit: Some(500),
            ..query
        };
        assert!(too_many.validate().is_err());

        let views = serde_json::from_str::<SearchVideosQuery>(r#"{"sort": "views"}"#);
        assert!(views.is_err());
    }

    #[test]
    fn test_comment_request_validation() {
        let ok = CreateCommentRequest { content: "Great video".to_string() };
        assert!(ok.validate().is_ok());

        let empty = CreateCommentRequest { content: String::new() };
        assert!(empty.validate().is_err());

        let long = CreateCommentRequest { content: "x".repeat(MAX_COMMENT_LEN + 1) };
        assert!(long.validate().is_err());
    }
}
