//! Model to entity mappers
//!
//! `From<Model> for Entity` turns database rows into domain objects.

mod comment;
mod stats;
mod user;
mod video;

pub use stats::parse_reaction_kind;
