//! Video service
//!
//! Registers video metadata and serves it together with its reaction counters:
//! single videos, channel uploads, the home feed, search, and recommendations.

use std::collections::HashMap;

use futures::future::try_join_all;
use tracing::{debug, info, instrument};
use tube_core::{DomainError, Snowflake, Video, VideoSearch, VideoStats};

use crate::dto::{
    ChannelResponse, CreateVideoRequest, ListVideosQuery, SearchVideosQuery, VideoResponse,
};

use super::channel::ChannelService;
use super::context::ServiceContext;
use super::error::ServiceResult;

/// Default number of videos returned for a channel
pub const DEFAULT_CHANNEL_VIDEOS: i64 = 50;

/// Default size of the home feed
pub const DEFAULT_FEED_VIDEOS: i64 = 20;

/// Default number of search results
pub const DEFAULT_SEARCH_RESULTS: i64 = 20;

/// Number of videos recommended next to a video
pub const RECOMMENDED_VIDEOS: usize = 10;

/// Video service
pub struct VideoService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> VideoService<'a> {
    /// Create a new VideoService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Register an uploaded video for `owner_id`
    #[instrument(skip(self, request), fields(title = %request.title))]
    pub async fn create(
        &self,
        owner_id: Snowflake,
        request: CreateVideoRequest,
    ) -> ServiceResult<VideoResponse> {
        let owner = self
            .ctx
            .user_repo()
            .find_by_id(owner_id)
            .await?
            .ok_or(DomainError::UserNotFound(owner_id))?;

        let video = Video {
            description: request.description,
            category: request.category,
            thumbnail_url: request.thumbnail_url,
            duration: request.duration,
            ..Video::new(
                self.ctx.generate_id(),
                owner_id,
                request.title.trim().to_string(),
                request.video_url,
            )
        };
        self.ctx.video_repo().create(&video).await?;

        info!(video_id = %video.id, owner_id = %owner_id, "Video created");

        let uploader = ChannelService::new(self.ctx).profile(&owner).await?;
        Ok(VideoResponse::new(&video, VideoStats::empty(video.id), uploader))
    }

    /// Get a video with its counters and uploader profile
    #[instrument(skip(self))]
    pub async fn get_video(&self, video_id: Snowflake) -> ServiceResult<VideoResponse> {
        let video = self
            .ctx
            .video_repo()
            .find_by_id(video_id)
            .await?
            .ok_or(DomainError::VideoNotFound(video_id))?;

        let uploader = ChannelService::new(self.ctx)
            .get_channel(video.owner_id)
            .await?;
        let stats = self.ctx.ledger().video_stats(video.id).await?;

        Ok(VideoResponse::new(&video, stats, uploader))
    }

    /// Videos uploaded by a channel, newest first
    #[instrument(skip(self))]
    pub async fn list_by_owner(&self, owner_id: Snowflake) -> ServiceResult<Vec<VideoResponse>> {
        let uploader = ChannelService::new(self.ctx).get_channel(owner_id).await?;
        let videos = self
            .ctx
            .video_repo()
            .find_by_owner(owner_id, DEFAULT_CHANNEL_VIDEOS)
            .await?;

        try_join_all(videos.iter().map(|video| {
            let uploader = uploader.clone();
            async move {
                let stats = self.ctx.ledger().video_stats(video.id).await?;
                Ok(VideoResponse::new(video, stats, uploader))
            }
        }))
        .await
    }

    /// Home feed: newest videos, optionally within one category
    #[instrument(skip(self))]
    pub async fn list(&self, query: ListVideosQuery) -> ServiceResult<Vec<VideoResponse>> {
        let videos = self
            .ctx
            .video_repo()
            .find_recent(
                query.category.as_deref(),
                query.limit.unwrap_or(DEFAULT_FEED_VIDEOS),
            )
            .await?;

        self.hydrate(videos).await
    }

    /// Title/description search. Blank terms match nothing.
    #[instrument(skip(self))]
    pub async fn search(&self, query: SearchVideosQuery) -> ServiceResult<Vec<VideoResponse>> {
        let search = VideoSearch {
            terms: query.q.trim().to_string(),
            sort: query.sort.unwrap_or_default(),
            limit: query.limit.unwrap_or(DEFAULT_SEARCH_RESULTS),
        };
        if search.terms.is_empty() {
            return Ok(Vec::new());
        }

        let videos = self.ctx.video_repo().search(&search).await?;
        debug!(hits = videos.len(), sort = ?search.sort, "Search finished");
        self.hydrate(videos).await
    }

    /// Videos to watch next: the same category first, then the newest uploads
    #[instrument(skip(self))]
    pub async fn recommended(&self, video_id: Snowflake) -> ServiceResult<Vec<VideoResponse>> {
        let video = self
            .ctx
            .video_repo()
            .find_by_id(video_id)
            .await?
            .ok_or(DomainError::VideoNotFound(video_id))?;

        // One extra row covers the video itself showing up in its own listing.
        let fetch = RECOMMENDED_VIDEOS as i64 + 1;
        let mut picks = match video.category.as_deref() {
            Some(category) => self.ctx.video_repo().find_recent(Some(category), fetch).await?,
            None => Vec::new(),
        };
        picks.retain(|v| v.id != video.id);

        if picks.len() < RECOMMENDED_VIDEOS {
            let recent = self
                .ctx
                .video_repo()
                .find_recent(None, fetch + picks.len() as i64)
                .await?;
            for candidate in recent {
                if candidate.id != video.id && picks.iter().all(|p| p.id != candidate.id) {
                    picks.push(candidate);
                }
            }
        }
        picks.truncate(RECOMMENDED_VIDEOS);

        self.hydrate(picks).await
    }

    /// Attach uploader profiles and counters, keeping the given order.
    /// Videos whose uploader is gone are dropped.
    async fn hydrate(&self, videos: Vec<Video>) -> ServiceResult<Vec<VideoResponse>> {
        let mut owner_ids: Vec<Snowflake> = videos.iter().map(|v| v.owner_id).collect();
        owner_ids.sort_unstable();
        owner_ids.dedup();

        let owners: HashMap<Snowflake, ChannelResponse> = ChannelService::new(self.ctx)
            .profiles(&owner_ids)
            .await?
            .into_iter()
            .map(|profile| (profile.id, profile))
            .collect();

        try_join_all(videos.iter().filter_map(|video| {
            let uploader = owners.get(&video.owner_id)?.clone();
            Some(async move {
                let stats = self.ctx.ledger().video_stats(video.id).await?;
                Ok(VideoResponse::new(video, stats, uploader))
            })
        }))
        .await
    }
}
