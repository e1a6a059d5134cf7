//! Route handlers
//!
//! All HTTP request handlers organized by domain.

pub mod auth;
pub mod comments;
pub mod health;
pub mod reactions;
pub mod subscriptions;
pub mod users;
pub mod videos;
