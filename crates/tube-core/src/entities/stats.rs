//! Materialized engagement counters
//!
//! These rows are caches of the edge tables. They are only ever written in the
//! same atomic unit as the edge they summarize.

use serde::Serialize;

use crate::value_objects::Snowflake;

use super::reaction::ReactionTransition;

/// Add `delta` to a counter, never going below zero
#[inline]
pub fn floored_add(count: i64, delta: i64) -> i64 {
    count.saturating_add(delta).max(0)
}

/// Subscriber counter for a channel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ChannelStats {
    pub channel_id: Snowflake,
    pub subscriber_count: i64,
}

impl ChannelStats {
    /// Stats for a channel nobody has subscribed to yet
    pub fn empty(channel_id: Snowflake) -> Self {
        Self {
            channel_id,
            subscriber_count: 0,
        }
    }
}

/// Like/dislike counters for a video
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct VideoStats {
    pub video_id: Snowflake,
    pub like_count: i64,
    pub dislike_count: i64,
}

impl VideoStats {
    /// Stats for a video with no reactions
    pub fn empty(video_id: Snowflake) -> Self {
        Self {
            video_id,
            like_count: 0,
            dislike_count: 0,
        }
    }

    /// Apply a transition's deltas, flooring both counters at zero
    #[must_use]
    pub fn apply(self, transition: &ReactionTransition) -> Self {
        Self {
            video_id: self.video_id,
            like_count: floored_add(self.like_count, transition.like_delta),
            dislike_count: floored_add(self.dislike_count, transition.dislike_delta),
        }
    }
}
