//! PostgreSQL implementation of VideoRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use tube_core::{DomainError, RepoResult, Snowflake, Video, VideoRepository, VideoSearch, VideoSort};

use crate::models::VideoModel;

use super::error::{map_db_error, map_fk_violation};

const VIDEO_COLUMNS: &str =
    "id, owner_id, title, description, category, video_url, thumbnail_url, duration, created_at";

/// Escape `terms` for use inside an ILIKE pattern and wrap it in wildcards
fn contains_pattern(terms: &str) -> String {
    let mut pattern = String::with_capacity(terms.len() + 2);
    pattern.push('%');
    for c in terms.chars() {
        if matches!(c, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

fn search_order(sort: VideoSort) -> &'static str {
    match sort {
        VideoSort::Relevance => "(title ILIKE $1) DESC, created_at DESC, id DESC",
        VideoSort::Date => "created_at DESC, id DESC",
        VideoSort::Rating => {
            "(SELECT s.like_count - s.dislike_count FROM video_stats s WHERE s.video_id = videos.id) \
             DESC NULLS LAST, created_at DESC, id DESC"
        }
    }
}

/// PostgreSQL implementation of VideoRepository
#[derive(Clone)]
pub struct PgVideoRepository {
    pool: PgPool,
}

impl PgVideoRepository {
    /// Create a new PgVideoRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl VideoRepository for PgVideoRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Video>> {
        let result = sqlx::query_as::<_, VideoModel>(&format!(
            "SELECT {VIDEO_COLUMNS} FROM videos WHERE id = $1"
        ))
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Video::from))
    }

    #[instrument(skip(self))]
    async fn find_by_owner(&self, owner_id: Snowflake, limit: i64) -> RepoResult<Vec<Video>> {
        let limit = limit.clamp(1, 100);

        let results = sqlx::query_as::<_, VideoModel>(&format!(
            r"
            SELECT {VIDEO_COLUMNS}
            FROM videos
            WHERE owner_id = $1
            ORDER BY created_at DESC, id DESC
            LIMIT $2
            "
        ))
        .bind(owner_id.into_inner())
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Video::from).collect())
    }

    #[instrument(skip(self))]
    async fn find_recent(&self, category: Option<&str>, limit: i64) -> RepoResult<Vec<Video>> {
        let limit = limit.clamp(1, 100);

        let results = sqlx::query_as::<_, VideoModel>(&format!(
            r"
            SELECT {VIDEO_COLUMNS}
            FROM videos
            WHERE $1::text IS NULL OR lower(category) = lower($1)
            ORDER BY created_at DESC, id DESC
            LIMIT $2
            "
        ))
        .bind(category)
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Video::from).collect())
    }

    #[instrument(skip(self))]
    async fn search(&self, search: &VideoSearch) -> RepoResult<Vec<Video>> {
        let terms = search.terms.trim();
        if terms.is_empty() {
            return Ok(Vec::new());
        }

        let results = sqlx::query_as::<_, VideoModel>(&format!(
            r"
            SELECT {VIDEO_COLUMNS}
            FROM videos
            WHERE title ILIKE $1 OR description ILIKE $1
            ORDER BY {}
            LIMIT $2
            ",
            search_order(search.sort)
        ))
        .bind(contains_pattern(terms))
        .bind(search.limit.clamp(1, 100))
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Video::from).collect())
    }

    #[instrument(skip(self))]
    async fn exists(&self, id: Snowflake) -> RepoResult<bool> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM videos WHERE id = $1)")
            .bind(id.into_inner())
            .fetch_one(&self.pool)
            .await
            .map_err(map_db_error)
    }

    #[instrument(skip(self, video), fields(video_id = %video.id, owner_id = %video.owner_id))]
    async fn create(&self, video: &Video) -> RepoResult<()> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        sqlx::query(
            r"
            INSERT INTO videos (id, owner_id, title, description, category, video_url,
                                thumbnail_url, duration, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            ",
        )
        .bind(video.id.into_inner())
        .bind(video.owner_id.into_inner())
        .bind(&video.title)
        .bind(&video.description)
        .bind(&video.category)
        .bind(&video.video_url)
        .bind(&video.thumbnail_url)
        .bind(&video.duration)
        .bind(video.created_at)
        .execute(&mut *tx)
        .await
        .map_err(|e| map_fk_violation(e, || DomainError::UserNotFound(video.owner_id)))?;

        sqlx::query(
            "INSERT INTO video_stats (video_id, like_count, dislike_count) VALUES ($1, 0, 0)",
        )
        .bind(video.id.into_inner())
        .execute(&mut *tx)
        .await
        .map_err(map_db_error)?;

        tx.commit().await.map_err(map_db_error)
    }
}
