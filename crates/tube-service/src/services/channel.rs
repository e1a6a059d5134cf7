//! Channel service
//!
//! A channel is a user seen from the outside: profile plus subscriber count.

use futures::future::try_join_all;
use tracing::instrument;
use tube_core::{DomainError, Snowflake, User};

use crate::dto::ChannelResponse;

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Channel profile service
pub struct ChannelService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ChannelService<'a> {
    /// Create a new ChannelService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Get a channel profile by its user ID
    #[instrument(skip(self))]
    pub async fn get_channel(&self, channel_id: Snowflake) -> ServiceResult<ChannelResponse> {
        let user = self
            .ctx
            .user_repo()
            .find_by_id(channel_id)
            .await?
            .ok_or(DomainError::UserNotFound(channel_id))?;

        self.profile(&user).await
    }

    /// Attach the materialized subscriber count to a user
    pub async fn profile(&self, user: &User) -> ServiceResult<ChannelResponse> {
        let stats = self.ctx.ledger().channel_stats(user.id).await?;
        Ok(ChannelResponse::new(user, stats))
    }

    /// Profiles for several channels, in the order given; unknown IDs are skipped
    pub async fn profiles(&self, channel_ids: &[Snowflake]) -> ServiceResult<Vec<ChannelResponse>> {
        let users = self.ctx.user_repo().find_many(channel_ids).await?;
        try_join_all(users.iter().map(|user| self.profile(user))).await
    }
}
