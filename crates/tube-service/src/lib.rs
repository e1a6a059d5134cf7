//! # tube-service
//!
//! Application layer containing the use cases behind the HTTP surface:
//! accounts, channel profiles, video records and discovery, comments,
//! subscriptions, and reactions.

pub mod dto;
pub mod services;

pub use services::{
    AuthService, ChannelService, CommentService, ReactionService, ServiceContext, ServiceContextBuilder,
    ServiceError, ServiceResult, SubscriptionService, VideoService,
};
