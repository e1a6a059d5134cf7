//! Materialized counter rows

use sqlx::FromRow;

#[derive(Debug, Clone, Copy, FromRow)]
pub struct ChannelStatsModel {
    pub channel_id: i64,
    pub subscriber_count: i64,
}

#[derive(Debug, Clone, Copy, FromRow)]
pub struct VideoStatsModel {
    pub video_id: i64,
    pub like_count: i64,
    pub dislike_count: i64,
}
