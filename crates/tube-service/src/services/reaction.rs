//! Reaction service
//!
//! Like and dislike are the same ledger operation with a different kind.

use tracing::{info, instrument};
use tube_core::{DomainError, ReactionKind, Snowflake};

use crate::dto::{LikeStatusResponse, ReactionCountsResponse};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Reaction service
pub struct ReactionService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ReactionService<'a> {
    /// Create a new ReactionService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Like a video, or retract an existing like
    pub async fn like(
        &self,
        caller_id: Snowflake,
        video_id: Snowflake,
    ) -> ServiceResult<ReactionCountsResponse> {
        self.react(caller_id, video_id, ReactionKind::Like).await
    }

    /// Dislike a video, or retract an existing dislike
    pub async fn dislike(
        &self,
        caller_id: Snowflake,
        video_id: Snowflake,
    ) -> ServiceResult<ReactionCountsResponse> {
        self.react(caller_id, video_id, ReactionKind::Dislike).await
    }

    #[instrument(skip(self))]
    async fn react(
        &self,
        caller_id: Snowflake,
        video_id: Snowflake,
        kind: ReactionKind,
    ) -> ServiceResult<ReactionCountsResponse> {
        let stats = self.ctx.ledger().react(caller_id, video_id, kind).await?;

        info!(
            likes = stats.like_count,
            dislikes = stats.dislike_count,
            "Reaction applied"
        );
        Ok(stats.into())
    }

    /// The caller's current reaction on a video
    #[instrument(skip(self))]
    pub async fn status(
        &self,
        caller_id: Snowflake,
        video_id: Snowflake,
    ) -> ServiceResult<LikeStatusResponse> {
        if !self.ctx.video_repo().exists(video_id).await? {
            return Err(DomainError::VideoNotFound(video_id).into());
        }

        let kind = self.ctx.ledger().user_reaction(caller_id, video_id).await?;
        Ok(kind.into())
    }
}
