//! Repository traits (ports) - define the interface for data access
//!
//! These traits follow the Repository pattern from Domain-Driven Design.
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation.

use async_trait::async_trait;

use crate::entities::{Comment, User, Video, VideoSearch};
use crate::error::DomainError;
use crate::value_objects::Snowflake;

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// User Repository
// ============================================================================

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find user by ID
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<User>>;

    /// Find user by email
    async fn find_by_email(&self, email: &str) -> RepoResult<Option<User>>;

    /// Find several users at once, preserving the order of `ids` and skipping unknown ones
    async fn find_many(&self, ids: &[Snowflake]) -> RepoResult<Vec<User>>;

    /// Check if a user (and therefore a channel) exists
    async fn exists(&self, id: Snowflake) -> RepoResult<bool>;

    /// Check if email is already taken
    async fn email_exists(&self, email: &str) -> RepoResult<bool>;

    /// Create a new user together with an empty subscriber counter
    async fn create(&self, user: &User, password_hash: &str) -> RepoResult<()>;

    /// Get password hash for authentication
    async fn get_password_hash(&self, id: Snowflake) -> RepoResult<Option<String>>;
}

// ============================================================================
// Video Repository
// ============================================================================

#[async_trait]
pub trait VideoRepository: Send + Sync {
    /// Find video by ID
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Video>>;

    /// List videos uploaded by a channel, newest first
    async fn find_by_owner(&self, owner_id: Snowflake, limit: i64) -> RepoResult<Vec<Video>>;

    /// Newest videos across all channels, optionally restricted to one
    /// category (compared case-insensitively)
    async fn find_recent(&self, category: Option<&str>, limit: i64) -> RepoResult<Vec<Video>>;

    /// Videos whose title or description contains the search terms
    async fn search(&self, search: &VideoSearch) -> RepoResult<Vec<Video>>;

    /// Check if a video exists
    async fn exists(&self, id: Snowflake) -> RepoResult<bool>;

    /// Create a new video together with empty like/dislike counters
    async fn create(&self, video: &Video) -> RepoResult<()>;
}

// ============================================================================
// Comment Repository
// ============================================================================

#[async_trait]
pub trait CommentRepository: Send + Sync {
    /// Store a comment. Fails with `VideoNotFound` for an unknown video.
    async fn create(&self, comment: &Comment) -> RepoResult<()>;

    /// Comments under a video, newest first
    async fn find_by_video(&self, video_id: Snowflake, limit: i64) -> RepoResult<Vec<Comment>>;
}
