//! Service layer - business logic implementation
//!
//! Services sit between the HTTP handlers and the storage ports. Each service
//! borrows a [`ServiceContext`] for the duration of one request.

mod auth;
mod channel;
mod comment;
mod context;
mod error;
mod reaction;
mod subscription;
mod video;

#[cfg(test)]
pub(crate) mod test_support;

pub use auth::AuthService;
pub use channel::ChannelService;
pub use comment::CommentService;
pub use context::{ServiceContext, ServiceContextBuilder};
pub use error::{ServiceError, ServiceResult};
pub use reaction::ReactionService;
pub use subscription::SubscriptionService;
pub use video::VideoService;
