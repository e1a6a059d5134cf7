//! Subscription entity - a user following a channel

use chrono::{DateTime, Utc};

use crate::error::DomainError;
use crate::value_objects::Snowflake;

/// Edge from a subscriber to a channel (both are user IDs)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Subscription {
    pub subscriber_id: Snowflake,
    pub channel_id: Snowflake,
    pub created_at: DateTime<Utc>,
}

impl Subscription {
    /// Create a new Subscription, rejecting self-subscription
    pub fn new(subscriber_id: Snowflake, channel_id: Snowflake) -> Result<Self, DomainError> {
        Self::ensure_distinct(subscriber_id, channel_id)?;
        Ok(Self {
            subscriber_id,
            channel_id,
            created_at: Utc::now(),
        })
    }

    /// A user can never subscribe to their own channel
    pub fn ensure_distinct(subscriber_id: Snowflake, channel_id: Snowflake) -> Result<(), DomainError> {
        if subscriber_id == channel_id {
            return Err(DomainError::SelfSubscription);
        }
        Ok(())
    }
}
