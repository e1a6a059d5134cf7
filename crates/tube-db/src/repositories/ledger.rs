//! PostgreSQL implementation of EngagementLedger
//!
//! Every mutation runs in one transaction that writes the edge row and adjusts
//! the matching `*_stats` row, so counters never disagree with committed edges.
//!
//! - Subscriptions lean on the primary key: `INSERT .. ON CONFLICT DO NOTHING`
//!   and `DELETE .. RETURNING` tell us whether the edge actually changed, and
//!   only then is the counter touched.
//! - Reactions lock the current edge with `SELECT .. FOR UPDATE`, compute the
//!   transition, and guard the write on the state they observed. A guard that
//!   matches no row means another writer got there first; the transaction is
//!   rolled back and retried a bounded number of times.

use async_trait::async_trait;
use sqlx::{PgConnection, PgPool};
use tracing::{debug, info, instrument, warn};

use tube_core::{
    ChannelStats, DomainError, EngagementLedger, ReactionKind, ReactionTransition, RepoResult,
    Snowflake, Subscription, VideoStats,
};

use crate::mappers::parse_reaction_kind;
use crate::models::{ChannelStatsModel, VideoStatsModel};

use super::error::{map_db_error, map_fk_violation};

/// Default number of attempts for a contended reaction
pub const DEFAULT_MAX_ATTEMPTS: u32 = 3;

/// PostgreSQL implementation of EngagementLedger
#[derive(Clone)]
pub struct PgEngagementLedger {
    pool: PgPool,
    max_attempts: u32,
}

impl PgEngagementLedger {
    /// Create a new PgEngagementLedger
    pub fn new(pool: PgPool) -> Self {
        Self {
            pool,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }

    /// Override how many times a contended reaction is attempted
    pub fn with_max_attempts(mut self, max_attempts: u32) -> Self {
        self.max_attempts = max_attempts.max(1);
        self
    }

    /// One reaction attempt. `Ok(None)` means the guarded write lost a race.
    async fn try_react(
        &self,
        user_id: Snowflake,
        video_id: Snowflake,
        kind: ReactionKind,
    ) -> RepoResult<Option<(ReactionTransition, VideoStats)>> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        if !video_exists(&mut tx, video_id).await? {
            return Err(DomainError::VideoNotFound(video_id));
        }

        let current = sqlx::query_scalar::<_, String>(
            r"
            SELECT kind FROM video_reactions
            WHERE user_id = $1 AND video_id = $2
            FOR UPDATE
            ",
        )
        .bind(user_id.into_inner())
        .bind(video_id.into_inner())
        .fetch_optional(&mut *tx)
        .await
        .map_err(map_db_error)?
        .as_deref()
        .map(parse_reaction_kind)
        .transpose()?;

        let transition = ReactionKind::transition(current, kind);

        let applied = match (transition.previous, transition.next) {
            (None, Some(next)) => sqlx::query(
                r"
                INSERT INTO video_reactions (user_id, video_id, kind, updated_at)
                VALUES ($1, $2, $3, NOW())
                ON CONFLICT (user_id, video_id) DO NOTHING
                ",
            )
            .bind(user_id.into_inner())
            .bind(video_id.into_inner())
            .bind(next.as_str())
            .execute(&mut *tx)
            .await
            .map_err(|e| map_fk_violation(e, || DomainError::UserNotFound(user_id)))?,
            (Some(previous), Some(next)) => sqlx::query(
                r"
                UPDATE video_reactions
                SET kind = $3, updated_at = NOW()
                WHERE user_id = $1 AND video_id = $2 AND kind = $4
                ",
            )
            .bind(user_id.into_inner())
            .bind(video_id.into_inner())
            .bind(next.as_str())
            .bind(previous.as_str())
            .execute(&mut *tx)
            .await
            .map_err(map_db_error)?,
            (Some(previous), None) => sqlx::query(
                "DELETE FROM video_reactions WHERE user_id = $1 AND video_id = $2 AND kind = $3",
            )
            .bind(user_id.into_inner())
            .bind(video_id.into_inner())
            .bind(previous.as_str())
            .execute(&mut *tx)
            .await
            .map_err(map_db_error)?,
            (None, None) => {
                return Err(DomainError::InternalError(
                    "reaction transition without effect".to_string(),
                ))
            }
        };

        if applied.rows_affected() == 0 {
            tx.rollback().await.map_err(map_db_error)?;
            return Ok(None);
        }

        let stats = sqlx::query_as::<_, VideoStatsModel>(
            r"
            INSERT INTO video_stats (video_id, like_count, dislike_count)
            VALUES ($1, GREATEST($2, 0), GREATEST($3, 0))
            ON CONFLICT (video_id) DO UPDATE
            SET like_count    = GREATEST(video_stats.like_count + $2, 0),
                dislike_count = GREATEST(video_stats.dislike_count + $3, 0)
            RETURNING video_id, like_count, dislike_count
            ",
        )
        .bind(video_id.into_inner())
        .bind(transition.like_delta)
        .bind(transition.dislike_delta)
        .fetch_one(&mut *tx)
        .await
        .map_err(map_db_error)?;

        tx.commit().await.map_err(map_db_error)?;

        Ok(Some((transition, stats.into())))
    }
}

async fn channel_exists(conn: &mut PgConnection, channel_id: Snowflake) -> RepoResult<bool> {
    sqlx::query_scalar::<_, bool>(
        "SELECT EXISTS(SELECT 1 FROM users WHERE id = $1 AND deleted_at IS NULL)",
    )
    .bind(channel_id.into_inner())
    .fetch_one(conn)
    .await
    .map_err(map_db_error)
}

async fn video_exists(conn: &mut PgConnection, video_id: Snowflake) -> RepoResult<bool> {
    sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM videos WHERE id = $1)")
        .bind(video_id.into_inner())
        .fetch_one(conn)
        .await
        .map_err(map_db_error)
}

async fn read_subscriber_count(conn: &mut PgConnection, channel_id: Snowflake) -> RepoResult<i64> {
    let count = sqlx::query_scalar::<_, i64>(
        "SELECT subscriber_count FROM channel_stats WHERE channel_id = $1",
    )
    .bind(channel_id.into_inner())
    .fetch_optional(conn)
    .await
    .map_err(map_db_error)?;

    Ok(count.unwrap_or(0))
}

#[async_trait]
impl EngagementLedger for PgEngagementLedger {
    #[instrument(skip(self))]
    async fn subscribe(
        &self,
        subscriber_id: Snowflake,
        channel_id: Snowflake,
    ) -> RepoResult<ChannelStats> {
        Subscription::ensure_distinct(subscriber_id, channel_id)?;

        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        if !channel_exists(&mut tx, channel_id).await? {
            return Err(DomainError::ChannelNotFound(channel_id));
        }

        let inserted = sqlx::query(
            r"
            INSERT INTO subscriptions (subscriber_id, channel_id, created_at)
            VALUES ($1, $2, NOW())
            ON CONFLICT (subscriber_id, channel_id) DO NOTHING
            ",
        )
        .bind(subscriber_id.into_inner())
        .bind(channel_id.into_inner())
        .execute(&mut *tx)
        .await
        .map_err(|e| map_fk_violation(e, || DomainError::UserNotFound(subscriber_id)))?
        .rows_affected()
            == 1;

        let subscriber_count = if inserted {
            sqlx::query_as::<_, ChannelStatsModel>(
                r"
                INSERT INTO channel_stats (channel_id, subscriber_count)
                VALUES ($1, 1)
                ON CONFLICT (channel_id) DO UPDATE
                SET subscriber_count = channel_stats.subscriber_count + 1
                RETURNING channel_id, subscriber_count
                ",
            )
            .bind(channel_id.into_inner())
            .fetch_one(&mut *tx)
            .await
            .map_err(map_db_error)?
            .subscriber_count
        } else {
            read_subscriber_count(&mut tx, channel_id).await?
        };

        tx.commit().await.map_err(map_db_error)?;

        info!(
            subscriber_id = %subscriber_id,
            channel_id = %channel_id,
            created = inserted,
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
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        if !channel_exists(&mut tx, channel_id).await? {
            return Err(DomainError::ChannelNotFound(channel_id));
        }

        let removed = sqlx::query_scalar::<_, i64>(
            r"
            DELETE FROM subscriptions
            WHERE subscriber_id = $1 AND channel_id = $2
            RETURNING channel_id
            ",
        )
        .bind(subscriber_id.into_inner())
        .bind(channel_id.into_inner())
        .fetch_optional(&mut *tx)
        .await
        .map_err(map_db_error)?
        .is_some();

        let subscriber_count = if removed {
            sqlx::query_scalar::<_, i64>(
                r"
                UPDATE channel_stats
                SET subscriber_count = GREATEST(subscriber_count - 1, 0)
                WHERE channel_id = $1
                RETURNING subscriber_count
                ",
            )
            .bind(channel_id.into_inner())
            .fetch_optional(&mut *tx)
            .await
            .map_err(map_db_error)?
            .unwrap_or(0)
        } else {
            read_subscriber_count(&mut tx, channel_id).await?
        };

        tx.commit().await.map_err(map_db_error)?;

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

    #[instrument(skip(self))]
    async fn is_subscribed(
        &self,
        subscriber_id: Snowflake,
        channel_id: Snowflake,
    ) -> RepoResult<bool> {
        sqlx::query_scalar::<_, bool>(
            r"
            SELECT EXISTS(
                SELECT 1 FROM subscriptions WHERE subscriber_id = $1 AND channel_id = $2
            )
            ",
        )
        .bind(subscriber_id.into_inner())
        .bind(channel_id.into_inner())
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)
    }

    #[instrument(skip(self))]
    async fn user_subscriptions(&self, user_id: Snowflake) -> RepoResult<Vec<Snowflake>> {
        let results = sqlx::query_scalar::<_, i64>(
            r"
            SELECT channel_id
            FROM subscriptions
            WHERE subscriber_id = $1
            ORDER BY created_at DESC, channel_id DESC
            ",
        )
        .bind(user_id.into_inner())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Snowflake::new).collect())
    }

    #[instrument(skip(self))]
    async fn react(
        &self,
        user_id: Snowflake,
        video_id: Snowflake,
        kind: ReactionKind,
    ) -> RepoResult<VideoStats> {
        for attempt in 1..=self.max_attempts {
            match self.try_react(user_id, video_id, kind).await? {
                Some((transition, stats)) => {
                    info!(
                        user_id = %user_id,
                        video_id = %video_id,
                        requested = %kind,
                        previous = ?transition.previous,
                        next = ?transition.next,
                        likes = stats.like_count,
                        dislikes = stats.dislike_count,
                        attempt,
                        "Reaction applied"
                    );
                    return Ok(stats);
                }
                None => debug!(attempt, "Reaction guard lost to a concurrent writer"),
            }
        }

        warn!(
            user_id = %user_id,
            video_id = %video_id,
            attempts = self.max_attempts,
            "Reaction abandoned after repeated contention"
        );
        Err(DomainError::Conflict(format!(
            "reaction on video {video_id} kept conflicting; retry the request"
        )))
    }

    #[instrument(skip(self))]
    async fn user_reaction(
        &self,
        user_id: Snowflake,
        video_id: Snowflake,
    ) -> RepoResult<Option<ReactionKind>> {
        sqlx::query_scalar::<_, String>(
            "SELECT kind FROM video_reactions WHERE user_id = $1 AND video_id = $2",
        )
        .bind(user_id.into_inner())
        .bind(video_id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?
        .as_deref()
        .map(parse_reaction_kind)
        .transpose()
    }

    #[instrument(skip(self))]
    async fn channel_stats(&self, channel_id: Snowflake) -> RepoResult<ChannelStats> {
        let row = sqlx::query_as::<_, ChannelStatsModel>(
            "SELECT channel_id, subscriber_count FROM channel_stats WHERE channel_id = $1",
        )
        .bind(channel_id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(row.map_or_else(|| ChannelStats::empty(channel_id), ChannelStats::from))
    }

    #[instrument(skip(self))]
    async fn video_stats(&self, video_id: Snowflake) -> RepoResult<VideoStats> {
        let row = sqlx::query_as::<_, VideoStatsModel>(
            "SELECT video_id, like_count, dislike_count FROM video_stats WHERE video_id = $1",
        )
        .bind(video_id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(row.map_or_else(|| VideoStats::empty(video_id), VideoStats::from))
    }

    async fn health_check(&self) -> RepoResult<()> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map(|_| ())
            .map_err(map_db_error)
    }
}
