//! Materialized counters
//!
//! Subscriber counts are single atomics. A video's like and dislike counts
//! move together on a flip, so the pair sits behind one small mutex per video.

use std::sync::atomic::{AtomicI64, Ordering};

use parking_lot::Mutex;
use tube_core::{floored_add, ReactionTransition, Snowflake, VideoStats};

/// Atomically add `delta`, flooring at zero. Returns the value written.
pub(crate) fn add_floored(counter: &AtomicI64, delta: i64) -> i64 {
    if delta == 0 {
        return counter.load(Ordering::Acquire);
    }

    let mut current = counter.load(Ordering::Acquire);
    loop {
        let next = floored_add(current, delta);
        match counter.compare_exchange_weak(current, next, Ordering::AcqRel, Ordering::Acquire) {
            Ok(_) => return next,
            Err(observed) => current = observed,
        }
    }
}

/// Like/dislike counters of one video
#[derive(Debug)]
pub(crate) struct ReactionCounters {
    stats: Mutex<VideoStats>,
}

impl ReactionCounters {
    pub(crate) fn new(video_id: Snowflake) -> Self {
        Self {
            stats: Mutex::new(VideoStats::empty(video_id)),
        }
    }

    /// Apply both deltas of `transition` in one step and return the result
    pub(crate) fn apply(&self, transition: &ReactionTransition) -> VideoStats {
        let mut stats = self.stats.lock();
        *stats = stats.apply(transition);
        *stats
    }

    pub(crate) fn snapshot(&self) -> VideoStats {
        *self.stats.lock()
    }
}
