//! # tube-core
//!
//! Domain layer containing entities, the reaction state machine, value objects,
//! and the storage traits the engagement ledger is built on.
//! This crate has zero dependencies on infrastructure (database, web framework, etc.).

pub mod entities;
pub mod error;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{
    floored_add, ChannelStats, Comment, ReactionKind, ReactionTransition, Subscription, User,
    Video, VideoSearch, VideoSort, VideoStats, MAX_COMMENT_LEN,
};
pub use error::DomainError;
pub use traits::{
    CommentRepository, EngagementLedger, RepoResult, UserRepository, VideoRepository,
};
pub use value_objects::{Snowflake, SnowflakeGenerator, SnowflakeParseError};
