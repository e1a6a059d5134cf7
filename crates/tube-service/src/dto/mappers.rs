//! Entity to DTO mappers
//!
//! Implements conversions from domain entities and ledger counters to response DTOs.

use tube_common::AccessToken;
use tube_core::{ChannelStats, Comment, ReactionKind, User, Video, VideoStats};

use super::responses::{
    AuthResponse, ChannelResponse, CommentResponse, LikeStatusResponse, ReactionCountsResponse,
    SubscribersResponse, VideoResponse,
};

// ============================================================================
// User Mappers
// ============================================================================

impl AuthResponse {
    pub fn new(user: &User, subscribers: i64, token: AccessToken) -> Self {
        Self {
            id: user.id,
            username: user.username.clone(),
            email: user.email.clone(),
            avatar: user.avatar.clone(),
            subscribers,
            token: token.token,
            expires_in: token.expires_in,
        }
    }
}

impl ChannelResponse {
    pub fn new(user: &User, stats: ChannelStats) -> Self {
        Self {
            id: user.id,
            username: user.username.clone(),
            avatar: user.avatar.clone(),
            subscribers: stats.subscriber_count,
            created_at: user.created_at,
        }
    }
}

// ============================================================================
// Video Mappers
// ============================================================================

impl VideoResponse {
    pub fn new(video: &Video, stats: VideoStats, user: ChannelResponse) -> Self {
        Self {
            id: video.id,
            title: video.title.clone(),
            description: video.description.clone(),
            category: video.category.clone(),
            video_url: video.video_url.clone(),
            thumbnail_url: video.thumbnail_url.clone(),
            duration: video.duration.clone(),
            likes: stats.like_count,
            dislikes: stats.dislike_count,
            user,
            created_at: video.created_at,
        }
    }
}

impl CommentResponse {
    pub fn new(comment: &Comment, user: ChannelResponse) -> Self {
        Self {
            id: comment.id,
            video_id: comment.video_id,
            content: comment.content.clone(),
            user,
            created_at: comment.created_at,
        }
    }
}

// ============================================================================
// Ledger Mappers
// ============================================================================

impl From<ChannelStats> for SubscribersResponse {
    fn from(stats: ChannelStats) -> Self {
        Self {
            subscribers: stats.subscriber_count,
        }
    }
}

impl From<VideoStats> for ReactionCountsResponse {
    fn from(stats: VideoStats) -> Self {
        Self {
            likes: stats.like_count,
            dislikes: stats.dislike_count,
        }
    }
}

impl From<Option<ReactionKind>> for LikeStatusResponse {
    fn from(kind: Option<ReactionKind>) -> Self {
        Self {
            liked: kind == Some(ReactionKind::Like),
            disliked: kind == Some(ReactionKind::Dislike),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tube_core::Snowflake;

    #[test]
    fn test_like_status_from_reaction() {
        assert_eq!(
            LikeStatusResponse::from(None),
            LikeStatusResponse { liked: false, disliked: false }
        );
        assert_eq!(
            LikeStatusResponse::from(Some(ReactionKind::Like)),
            LikeStatusResponse { liked: true, disliked: false }
        );
        assert_eq!(
            LikeStatusResponse::from(Some(ReactionKind::Dislike)),
            LikeStatusResponse { liked: false, disliked: true }
        );
    }

    #[test]
    fn test_video_response_carries_counts_and_uploader() {
        let owner = User::new(Snowflake::new(1), "creator".to_string(), "c@example.com".to_string());
        let video = Video::new(
            Snowflake::new(2),
            owner.id,
            "Launch".to_string(),
            "https://cdn.example.com/v/2.mp4".to_string(),
        );
        let stats = VideoStats {
            video_id: video.id,
            like_count: 3,
            dislike_count: 1,
        };
        let channel = ChannelResponse::new(
            &owner,
            ChannelStats {
                channel_id: owner.id,
                subscriber_count: 9,
            },
        );

        let response = VideoResponse::new(&video, stats, channel);
        assert_eq!((response.likes, response.dislikes), (3, 1));
        assert_eq!(response.user.subscribers, 9);
        assert_eq!(response.user.id, owner.id);
    }
}
