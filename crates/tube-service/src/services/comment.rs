//! Comment service
//!
//! Posts and lists the text comments under a video.

use std::collections::HashMap;

use tracing::{info, instrument};
use tube_core::{Comment, DomainError, Snowflake};

use crate::dto::{ChannelResponse, CommentResponse, CreateCommentRequest};

use super::channel::ChannelService;
use super::context::ServiceContext;
use super::error::ServiceResult;

/// Most comments returned for one video
pub const DEFAULT_VIDEO_COMMENTS: i64 = 100;

/// Comment service
pub struct CommentService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> CommentService<'a> {
    /// Create a new CommentService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    async fn ensure_video(&self, video_id: Snowflake) -> ServiceResult<()> {
        if self.ctx.video_repo().exists(video_id).await? {
            Ok(())
        } else {
            Err(DomainError::VideoNotFound(video_id).into())
        }
    }

    /// Post a comment as `author_id`
    #[instrument(skip(self, request))]
    pub async fn create(
        &self,
        author_id: Snowflake,
        video_id: Snowflake,
        request: CreateCommentRequest,
    ) -> ServiceResult<CommentResponse> {
        let author = self
            .ctx
            .user_repo()
            .find_by_id(author_id)
            .await?
            .ok_or(DomainError::UserNotFound(author_id))?;
        self.ensure_video(video_id).await?;

        let comment = Comment::new(self.ctx.generate_id(), video_id, author_id, &request.content)?;
        self.ctx.comment_repo().create(&comment).await?;

        info!(comment_id = %comment.id, video_id = %video_id, "Comment posted");

        let user = ChannelService::new(self.ctx).profile(&author).await?;
        Ok(CommentResponse::new(&comment, user))
    }

    /// Comments under a video, newest first
    #[instrument(skip(self))]
    pub async fn list(&self, video_id: Snowflake) -> ServiceResult<Vec<CommentResponse>> {
        self.ensure_video(video_id).await?;

        let comments = self
            .ctx
            .comment_repo()
            .find_by_video(video_id, DEFAULT_VIDEO_COMMENTS)
            .await?;

        let mut author_ids: Vec<Snowflake> = comments.iter().map(|c| c.author_id).collect();
        author_ids.sort_unstable();
        author_ids.dedup();

        let authors: HashMap<Snowflake, ChannelResponse> = ChannelService::new(self.ctx)
            .profiles(&author_ids)
            .await?
            .into_iter()
            .map(|profile| (profile.id, profile))
            .collect();

        Ok(comments
            .iter()
            .filter_map(|comment| {
                let user = authors.get(&comment.author_id)?.clone();
                Some(CommentResponse::new(comment, user))
            })
            .collect())
    }
}
