//! Counter rows and reaction kinds

use tube_core::{ChannelStats, DomainError, ReactionKind, Snowflake, VideoStats};

use crate::models::{ChannelStatsModel, VideoStatsModel};

impl From<ChannelStatsModel> for ChannelStats {
    fn from(model: ChannelStatsModel) -> Self {
        ChannelStats {
            channel_id: Snowflake::new(model.channel_id),
            subscriber_count: model.subscriber_count,
        }
    }
}

impl From<VideoStatsModel> for VideoStats {
    fn from(model: VideoStatsModel) -> Self {
        VideoStats {
            video_id: Snowflake::new(model.video_id),
            like_count: model.like_count,
            dislike_count: model.dislike_count,
        }
    }
}

/// Decode the `video_reactions.kind` column
pub fn parse_reaction_kind(raw: &str) -> Result<ReactionKind, DomainError> {
    raw.parse()
        .map_err(|e: String| DomainError::DatabaseError(format!("corrupt reaction row: {e}")))
}
