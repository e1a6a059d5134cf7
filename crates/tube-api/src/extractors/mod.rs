//! Axum extractors for request handling
//!
//! Custom extractors for authentication, path IDs, query strings, and
//! validated bodies.

mod auth;
mod path;
mod query;
mod validated;

pub use auth::AuthUser;
pub use path::IdPath;
pub use query::ValidatedQuery;
pub use validated::ValidatedJson;
