//! DashMap-backed implementation of the storage traits

use std::cmp::Reverse;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use tracing::{info, instrument};

use tube_core::{
    ChannelStats, Comment, CommentRepository, DomainError, EngagementLedger, ReactionKind,
    RepoResult, Snowflake, Subscription, User, UserRepository, Video, VideoRepository,
    VideoSearch, VideoSort, VideoStats,
};

use super::counters::{add_floored, ReactionCounters};
use super::locks::KeyedLocks;

struct UserRecord {
    user: User,
    password_hash: String,
}

/// Lock key for one edge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum EdgeKey {
    Subscription { subscriber: Snowflake, channel: Snowflake },
    Reaction { user: Snowflake, video: Snowflake },
}

/// In-memory users, videos, comments, and engagement ledger.
///
/// Each (user, channel) and (user, video) pair has its own mutex, so the edge
/// check-and-write plus its counter adjustment happen as one step for that
/// pair. Subscriber counts are shared atomics and each video's like/dislike
/// pair has its own short-lived lock, so different pairs touching the same
/// channel or video only contend for the counter update itself.
pub struct MemoryStore {
    users: DashMap<Snowflake, UserRecord>,
    emails: DashMap<String, Snowflake>,
    videos: DashMap<Snowflake, Video>,
    channel_stats: DashMap<Snowflake, Arc<AtomicI64>>,
    video_stats: DashMap<Snowflake, Arc<ReactionCounters>>,
    /// (subscriber, channel) -> edge
    subscriptions: DashMap<(Snowflake, Snowflake), Subscription>,
    /// (user, video) -> current reaction
    reactions: DashMap<(Snowflake, Snowflake), ReactionKind>,
    comments: DashMap<Snowflake, Comment>,
    edge_locks: KeyedLocks<EdgeKey>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            users: DashMap::new(),
            emails: DashMap::new(),
            videos: DashMap::new(),
            channel_stats: DashMap::new(),
            video_stats: DashMap::new(),
            subscriptions: DashMap::new(),
            reactions: DashMap::new(),
            comments: DashMap::new(),
            edge_locks: KeyedLocks::new(),
        }
    }

    fn subscriber_counter(&self, channel_id: Snowflake) -> Arc<AtomicI64> {
        Arc::clone(self.channel_stats.entry(channel_id).or_default().value())
    }

    fn reaction_counters(&self, video_id: Snowflake) -> Arc<ReactionCounters> {
        Arc::clone(
            self.video_stats
                .entry(video_id)
                .or_insert_with(|| Arc::new(ReactionCounters::new(video_id)))
                .value(),
        )
    }

    fn rating(&self, video_id: Snowflake) -> i64 {
        self.video_stats.get(&video_id).map_or(0, |r| {
            let stats = r.snapshot();
            stats.like_count - stats.dislike_count
        })
    }

    fn ensure_user(&self, id: Snowflake) -> RepoResult<()> {
        if self.users.contains_key(&id) {
            Ok(())
        } else {
            Err(DomainError::UserNotFound(id))
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for MemoryStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MemoryStore")
            .field("users", &self.users.len())
            .field("videos", &self.videos.len())
            .field("subscriptions", &self.subscriptions.len())
            .field("reactions", &self.reactions.len())
            .field("comments", &self.comments.len())
            .finish_non_exhaustive()
    }
}

// ============================================================================
// Users
// ============================================================================

#[async_trait]
impl UserRepository for MemoryStore {
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<User>> {
        Ok(self.users.get(&id).map(|r| r.user.clone()))
    }

    async fn find_by_email(&self, email: &str) -> RepoResult<Option<User>> {
        let id = self.emails.get(email).map(|r| *r.value());
        Ok(id.and_then(|id| self.users.get(&id).map(|r| r.user.clone())))
    }

    async fn find_many(&self, ids: &[Snowflake]) -> RepoResult<Vec<User>> {
        Ok(ids
            .iter()
            .filter_map(|id| self.users.get(id).map(|r| r.user.clone()))
            .collect())
    }

    async fn exists(&self, id: Snowflake) -> RepoResult<bool> {
        Ok(self.users.contains_key(&id))
    }

    async fn email_exists(&self, email: &str) -> RepoResult<bool> {
        Ok(self.emails.contains_key(email))
    }

    #[instrument(skip(self, user, password_hash), fields(user_id = %user.id))]
    async fn create(&self, user: &User, password_hash: &str) -> RepoResult<()> {
        match self.emails.entry(user.email.clone()) {
            Entry::Occupied(_) => Err(DomainError::EmailAlreadyExists),
            Entry::Vacant(slot) => {
                self.users.insert(
                    user.id,
                    UserRecord {
                        user: user.clone(),
                        password_hash: password_hash.to_string(),
                    },
                );
                self.channel_stats.entry(user.id).or_default();
                slot.insert(user.id);
                Ok(())
            }
        }
    }

    async fn get_password_hash(&self, id: Snowflake) -> RepoResult<Option<String>> {
        Ok(self.users.get(&id).map(|r| r.password_hash.clone()))
    }
}

// ============================================================================
// Videos
// ============================================================================

#[async_trait]
impl VideoRepository for MemoryStore {
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Video>> {
        Ok(self.videos.get(&id).map(|r| r.value().clone()))
    }

    async fn find_by_owner(&self, owner_id: Snowflake, limit: i64) -> RepoResult<Vec<Video>> {
        let mut videos: Vec<Video> = self
            .videos
            .iter()
            .filter(|r| r.owner_id == owner_id)
            .map(|r| r.value().clone())
            .collect();

        videos.sort_by(|a, b| (b.created_at, b.id).cmp(&(a.created_at, a.id)));
        videos.truncate(limit.clamp(1, 100) as usize);
        Ok(videos)
    }

    async fn find_recent(&self, category: Option<&str>, limit: i64) -> RepoResult<Vec<Video>> {
        let mut videos: Vec<Video> = self
            .videos
            .iter()
            .filter(|r| category.map_or(true, |c| r.in_category(c)))
            .map(|r| r.value().clone())
            .collect();

        videos.sort_by(|a, b| (b.created_at, b.id).cmp(&(a.created_at, a.id)));
        videos.truncate(limit.clamp(1, 100) as usize);
        Ok(videos)
    }

    async fn search(&self, search: &VideoSearch) -> RepoResult<Vec<Video>> {
        let terms = search.terms.trim();
        if terms.is_empty() {
            return Ok(Vec::new());
        }

        let mut hits: Vec<(u8, Video)> = self
            .videos
            .iter()
            .filter_map(|r| r.search_rank(terms).map(|rank| (rank, r.value().clone())))
            .collect();

        match search.sort {
            VideoSort::Relevance => hits.sort_by_key(|(rank, v)| (*rank, Reverse((v.created_at, v.id)))),
            VideoSort::Date => hits.sort_by_key(|(_, v)| Reverse((v.created_at, v.id))),
            VideoSort::Rating => {
                hits.sort_by_cached_key(|(_, v)| Reverse((self.rating(v.id), v.created_at, v.id)))
            }
        }

        hits.truncate(search.limit.clamp(1, 100) as usize);
        Ok(hits.into_iter().map(|(_, video)| video).collect())
    }

    async fn exists(&self, id: Snowflake) -> RepoResult<bool> {
        Ok(self.videos.contains_key(&id))
    }

    #[instrument(skip(self, video), fields(video_id = %video.id, owner_id = %video.owner_id))]
    async fn create(&self, video: &Video) -> RepoResult<()> {
        self.ensure_user(video.owner_id)?;

        match self.videos.entry(video.id) {
            Entry::Occupied(_) => Err(DomainError::Conflict(format!(
                "video {} already exists",
                video.id
            ))),
            Entry::Vacant(slot) => {
                self.reaction_counters(video.id);
                slot.insert(video.clone());
                Ok(())
            }
        }
    }
}

// ============================================================================
// Comments
// ============================================================================

#[async_trait]
impl CommentRepository for MemoryStore {
    #[instrument(skip(self, comment), fields(comment_id = %comment.id, video_id = %comment.video_id))]
    async fn create(&self, comment: &Comment) -> RepoResult<()> {
        if !self.videos.contains_key(&comment.video_id) {
            return Err(DomainError::VideoNotFound(comment.video_id));
        }
        self.ensure_user(comment.author_id)?;

        match self.comments.entry(comment.id) {
            Entry::Occupied(_) => Err(DomainError::Conflict(format!(
                "comment {} already exists",
                comment.id
            ))),
            Entry::Vacant(slot) => {
                slot.insert(comment.clone());
                Ok(())
            }
        }
    }

    async fn find_by_video(&self, video_id: Snowflake, limit: i64) -> RepoResult<Vec<Comment>> {
        let mut comments: Vec<Comment> = self
            .comments
            .iter()
            .filter(|r| r.video_id == video_id)
            .map(|r| r.value().clone())
            .collect();

        comments.sort_by(|a, b| (b.created_at, b.id).cmp(&(a.created_at, a.id)));
        comments.truncate(limit.clamp(1, 100) as usize);
        Ok(comments)
    }
}

// ============================================================================
// Engagement ledger
// ============================================================================

#[async_trait]
impl EngagementLedger for MemoryStore {
    #[instrument(skip(self))]
    async fn subscribe(
        &self,
        subscriber_id: Snowflake,
        channel_id: Snowflake,
    ) -> RepoResult<ChannelStats> {
        let edge = Subscription::new(subscriber_id, channel_id)?;
        if !self.users.contains_key(&channel_id) {
            return Err(DomainError::ChannelNotFound(channel_id));
        }
        self.ensure_user(subscriber_id)?;

        let key = EdgeKey::Subscription {
            subscriber: subscriber_id,
            channel: channel_id,
        };
        let (created, subscriber_count) = self.edge_locks.with(&key, || {
            let counter = self.subscriber_counter(channel_id);
            match self.subscriptions.entry((subscriber_id, channel_id)) {
                Entry::Occupied(_) => (false, counter.load(Ordering::Acquire)),
                Entry::Vacant(slot) => {
                    slot.insert(edge);
                    (true, add_floored(&counter, 1))
                }
            }
        });

        info!(
            subscriber_id = %subscriber_id,
            channel_id = %channel_id,
            created,
            subscribers = subscriber_count,
            "Subscribe applied"
        );

        Ok(ChannelStats {
            channel_id,
            subscriber_count,
        })
    }

    #[instrument(skip(self))]
    async fn unsubscribe(
        &self,
        subscriber_id: Snowflake,
        channel_id: Snowflake,
    ) -> RepoResult<ChannelStats> {
        if !self.users.contains_key(&channel_id) {
            return Err(DomainError::ChannelNotFound(channel_id));
        }

        let key = EdgeKey::Subscription {
            subscriber: subscriber_id,
            channel: channel_id,
        };
        let (removed, subscriber_count) = self.edge_locks.with(&key, || {
            let counter = self.subscriber_counter(channel_id);
            if self
                .subscriptions
                .remove(&(subscriber_id, channel_id))
                .is_some()
            {
                (true, add_floored(&counter, -1))
            } else {
                (false, counter.load(Ordering::Acquire))
            }
        });

        info!(
            subscriber_id = %subscriber_id,
            channel_id = %channel_id,
            removed,
            subscribers = subscriber_count,
            "Unsubscribe applied"
        );

        Ok(ChannelStats {
            channel_id,
            subscriber_count,
        })
    }

    async fn is_subscribed(
        &self,
        subscriber_id: Snowflake,
        channel_id: Snowflake,
    ) -> RepoResult<bool> {
        Ok(self.subscriptions.contains_key(&(subscriber_id, channel_id)))
    }

    async fn user_subscriptions(&self, user_id: Snowflake) -> RepoResult<Vec<Snowflake>> {
        let mut edges: Vec<_> = self
            .subscriptions
            .iter()
            .filter(|r| r.subscriber_id == user_id)
            .map(|r| (r.created_at, r.channel_id))
            .collect();

        edges.sort_by(|a, b| b.cmp(a));
        Ok(edges.into_iter().map(|(_, channel_id)| channel_id).collect())
    }

    #[instrument(skip(self))]
    async fn react(
        &self,
        user_id: Snowflake,
        video_id: Snowflake,
        kind: ReactionKind,
    ) -> RepoResult<VideoStats> {
        if !self.videos.contains_key(&video_id) {
            return Err(DomainError::VideoNotFound(video_id));
        }
        self.ensure_user(user_id)?;

        let key = EdgeKey::Reaction {
            user: user_id,
            video: video_id,
        };
        let (transition, stats) = self.edge_locks.with(&key, || {
            let current = self.reactions.get(&(user_id, video_id)).map(|r| *r.value());
            let transition = ReactionKind::transition(current, kind);

            match transition.next {
                Some(next) => {
                    self.reactions.insert((user_id, video_id), next);
                }
                None => {
                    self.reactions.remove(&(user_id, video_id));
                }
            }

            let stats = self.reaction_counters(video_id).apply(&transition);
            (transition, stats)
        });

        info!(
            user_id = %user_id,
            video_id = %video_id,
            requested = %kind,
            previous = ?transition.previous,
            next = ?transition.next,
            likes = stats.like_count,
            dislikes = stats.dislike_count,
            "Reaction applied"
        );

        Ok(stats)
    }

    async fn user_reaction(
        &self,
        user_id: Snowflake,
        video_id: Snowflake,
    ) -> RepoResult<Option<ReactionKind>> {
        Ok(self.reactions.get(&(user_id, video_id)).map(|r| *r.value()))
    }

    async fn channel_stats(&self, channel_id: Snowflake) -> RepoResult<ChannelStats> {
        Ok(ChannelStats {
            channel_id,
            subscriber_count: self
                .channel_stats
                .get(&channel_id)
                .map_or(0, |r| r.load(Ordering::Acquire)),
        })
    }

    async fn video_stats(&self, video_id: Snowflake) -> RepoResult<VideoStats> {
        Ok(self
            .video_stats
            .get(&video_id)
            .map_or_else(|| VideoStats::empty(video_id), |r| r.snapshot()))
    }

    async fn health_check(&self) -> RepoResult<()> {
        Ok(())
    }
}
