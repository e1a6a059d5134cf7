//! Domain entities - core business objects

mod comment;
mod reaction;
mod stats;
mod subscription;
mod user;
mod video;

pub use comment::{Comment, MAX_COMMENT_LEN};
pub use reaction::{ReactionKind, ReactionTransition};
pub use stats::{floored_add, ChannelStats, VideoStats};
pub use subscription::Subscription;
pub use user::User;
pub use video::{Video, VideoSearch, VideoSort};
