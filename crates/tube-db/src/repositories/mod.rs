//! Repository implementations
//!
//! PostgreSQL implementations of the storage traits defined in tube-core.

mod comment;
mod error;
mod ledger;
mod user;
mod video;

pub use comment::PgCommentRepository;
pub use ledger::PgEngagementLedger;
pub use user::PgUserRepository;
pub use video::PgVideoRepository;
