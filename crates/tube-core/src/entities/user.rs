//! User entity - an account, which doubles as a channel

use chrono::{DateTime, Utc};

use crate::value_objects::Snowflake;

/// User entity. Every user owns exactly one channel with the same ID.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: Snowflake,
    pub username: String,
    pub email: String,
    pub avatar: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Create a new User with required fields
    pub fn new(id: Snowflake, username: String, email: String) -> Self {
        let now = Utc::now();
        Self {
            id,
            username,
            email,
            avatar: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// The channel this user publishes to
    #[inline]
    pub fn channel_id(&self) -> Snowflake {
        self.id
    }
}
