//! Reaction entity - a user's like or dislike on a video
//!
//! A user holds at most one reaction per video. Repeating the same action
//! retracts it, the other action flips it in place.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Kind of reaction a user can leave on a video
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReactionKind {
    Like,
    Dislike,
}

impl ReactionKind {
    /// Database / wire representation
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Like => "like",
            Self::Dislike => "dislike",
        }
    }

    /// Compute the state change for `requested` given the user's `current` reaction.
    ///
    /// | current | requested | next    | effect                      |
    /// |---------|-----------|---------|-----------------------------|
    /// | none    | k         | k       | +1 k                        |
    /// | k       | k         | none    | -1 k (toggle off)           |
    /// | k       | !k        | !k      | -1 k, +1 !k (flip in place) |
    pub fn transition(current: Option<Self>, requested: Self) -> ReactionTransition {
        let next = match current {
            Some(kind) if kind == requested => None,
            _ => Some(requested),
        };
        ReactionTransition::between(current, next)
    }
}

impl fmt::Display for ReactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReactionKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "like" => Ok(Self::Like),
            "dislike" => Ok(Self::Dislike),
            other => Err(format!("unknown reaction kind: {other}")),
        }
    }
}

/// Result of applying a reaction request to one (user, video) pair
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReactionTransition {
    pub previous: Option<ReactionKind>,
    pub next: Option<ReactionKind>,
    pub like_delta: i64,
    pub dislike_delta: i64,
}

impl ReactionTransition {
    fn between(previous: Option<ReactionKind>, next: Option<ReactionKind>) -> Self {
        let weight = |state: Option<ReactionKind>, kind: ReactionKind| i64::from(state == Some(kind));

        Self {
            previous,
            next,
            like_delta: weight(next, ReactionKind::Like) - weight(previous, ReactionKind::Like),
            dislike_delta: weight(next, ReactionKind::Dislike)
                - weight(previous, ReactionKind::Dislike),
        }
    }
}
