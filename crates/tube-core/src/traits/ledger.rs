//! Engagement ledger port
//!
//! The ledger owns subscription edges, reaction edges, and the materialized
//! counters derived from them. Implementations must apply every edge write and
//! its counter adjustment as one atomic unit, and must serialize mutations per
//! (user, channel) and (user, video) key. Mutations on different keys are
//! independent.

use async_trait::async_trait;

use crate::entities::{ChannelStats, ReactionKind, VideoStats};
use crate::value_objects::Snowflake;

use super::repositories::RepoResult;

#[async_trait]
pub trait EngagementLedger: Send + Sync {
    // ------------------------------------------------------------------------
    // Subscriptions
    // ------------------------------------------------------------------------

    /// Subscribe `subscriber_id` to `channel_id`.
    ///
    /// Fails with `SelfSubscription` when both IDs match and with
    /// `ChannelNotFound` for an unknown channel. Subscribing twice is a no-op
    /// that returns the current count.
    async fn subscribe(
        &self,
        subscriber_id: Snowflake,
        channel_id: Snowflake,
    ) -> RepoResult<ChannelStats>;

    /// Remove the subscription edge if present. Missing edges are not an error.
    async fn unsubscribe(
        &self,
        subscriber_id: Snowflake,
        channel_id: Snowflake,
    ) -> RepoResult<ChannelStats>;

    /// Whether the edge exists
    async fn is_subscribed(&self, subscriber_id: Snowflake, channel_id: Snowflake)
        -> RepoResult<bool>;

    /// Channels a user is subscribed to, most recent first
    async fn user_subscriptions(&self, user_id: Snowflake) -> RepoResult<Vec<Snowflake>>;

    // ------------------------------------------------------------------------
    // Reactions
    // ------------------------------------------------------------------------

    /// Apply a like/dislike request following `ReactionKind::transition`.
    ///
    /// Fails with `VideoNotFound` for an unknown video and with `Conflict` when
    /// a concurrent writer kept winning for the same key.
    async fn react(
        &self,
        user_id: Snowflake,
        video_id: Snowflake,
        kind: ReactionKind,
    ) -> RepoResult<VideoStats>;

    /// The user's current reaction on a video, if any
    async fn user_reaction(&self, user_id: Snowflake, video_id: Snowflake)
        -> RepoResult<Option<ReactionKind>>;

    // ------------------------------------------------------------------------
    // Materialized counters
    // ------------------------------------------------------------------------

    /// Read the subscriber counter of a channel (zero when never written)
    async fn channel_stats(&self, channel_id: Snowflake) -> RepoResult<ChannelStats>;

    /// Read the like/dislike counters of a video (zero when never written)
    async fn video_stats(&self, video_id: Snowflake) -> RepoResult<VideoStats>;

    /// Check that the backing store is reachable
    async fn health_check(&self) -> RepoResult<()>;
}
