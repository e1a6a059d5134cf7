//! Data transfer objects for API requests and responses
//!
//! This module provides:
//! - Request DTOs with validation for API inputs
//! - Response DTOs (camelCase JSON, `_id` identifiers)
//! - Mappers for converting domain entities to DTOs

pub mod mappers;
pub mod requests;
pub mod responses;

pub use requests::{
    CreateCommentRequest, CreateVideoRequest, ListVideosQuery, LoginRequest, RegisterRequest,
    SearchVideosQuery,
};

pub use responses::{
    AuthResponse, ChannelResponse, CommentResponse, HealthChecks, HealthResponse, LikeStatusResponse,
    ReactionCountsResponse, ReadinessResponse, SubscribersResponse, SubscriptionStatusResponse,
    VideoResponse,
};
