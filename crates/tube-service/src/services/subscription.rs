//! Subscription service
//!
//! Thin layer over the engagement ledger. The ledger owns the edge and the
//! counter; this service resolves the caller and shapes the responses.

use tracing::{info, instrument};
use tube_core::{DomainError, Snowflake, Subscription};

use crate::dto::{ChannelResponse, SubscribersResponse, SubscriptionStatusResponse};

use super::channel::ChannelService;
use super::context::ServiceContext;
use super::error::ServiceResult;

/// Subscription service
pub struct SubscriptionService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> SubscriptionService<'a> {
    /// Create a new SubscriptionService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Subscribe the caller to a channel; repeating it is a no-op
    #[instrument(skip(self))]
    pub async fn subscribe(
        &self,
        caller_id: Snowflake,
        channel_id: Snowflake,
    ) -> ServiceResult<SubscribersResponse> {
        Subscription::ensure_distinct(caller_id, channel_id)?;

        let stats = self.ctx.ledger().subscribe(caller_id, channel_id).await?;

        info!(subscribers = stats.subscriber_count, "Subscribe applied");
        Ok(stats.into())
    }

    /// Unsubscribe the caller from a channel; a missing edge is not an error
    #[instrument(skip(self))]
    pub async fn unsubscribe(
        &self,
        caller_id: Snowflake,
        channel_id: Snowflake,
    ) -> ServiceResult<SubscribersResponse> {
        let stats = self.ctx.ledger().unsubscribe(caller_id, channel_id).await?;

        info!(subscribers = stats.subscriber_count, "Unsubscribe applied");
        Ok(stats.into())
    }

    /// Whether the caller follows a channel
    #[instrument(skip(self))]
    pub async fn status(
        &self,
        caller_id: Snowflake,
        channel_id: Snowflake,
    ) -> ServiceResult<SubscriptionStatusResponse> {
        if !self.ctx.user_repo().exists(channel_id).await? {
            return Err(DomainError::UserNotFound(channel_id).into());
        }

        let is_subscribed = self.ctx.ledger().is_subscribed(caller_id, channel_id).await?;
        Ok(SubscriptionStatusResponse { is_subscribed })
    }

    /// Channel profiles the caller is subscribed to, most recent first
    #[instrument(skip(self))]
    pub async fn my_subscriptions(&self, caller_id: Snowflake) -> ServiceResult<Vec<ChannelResponse>> {
        let channel_ids = self.ctx.ledger().user_subscriptions(caller_id).await?;
        ChannelService::new(self.ctx).profiles(&channel_ids).await
    }
}
