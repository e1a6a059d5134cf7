//! Database models - SQLx-compatible structs for PostgreSQL tables

mod comment;
mod stats;
mod user;
mod video;

pub use comment::CommentModel;
pub use stats::{ChannelStatsModel, VideoStatsModel};
pub use user::UserModel;
pub use video::VideoModel;
