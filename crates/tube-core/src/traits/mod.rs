//! Storage traits (ports)

mod ledger;
mod repositories;

pub use ledger::EngagementLedger;
pub use repositories::{CommentRepository, RepoResult, UserRepository, VideoRepository};
