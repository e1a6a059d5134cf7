//! Video entity <-> model mapper

use tube_core::{Snowflake, Video};

use crate::models::VideoModel;

impl From<VideoModel> for Video {
    fn from(model: VideoModel) -> Self {
        Video {
            id: Snowflake::new(model.id),
            owner_id: Snowflake::new(model.owner_id),
            title: model.title,
            description: model.description,
            category: model.category,
            video_url: model.video_url,
            thumbnail_url: model.thumbnail_url,
            duration: model.duration,
            created_at: model.created_at,
        }
    }
}
