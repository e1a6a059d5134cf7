//! PostgreSQL implementation of CommentRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use tube_core::{Comment, CommentRepository, DomainError, RepoResult, Snowflake};

use crate::models::CommentModel;

use super::error::map_db_error;

const AUTHOR_FK: &str = "video_comments_author_fk";

/// PostgreSQL implementation of CommentRepository
#[derive(Clone)]
pub struct PgCommentRepository {
    pool: PgPool,
}

impl PgCommentRepository {
    /// Create a new PgCommentRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// A comment insert can miss either parent row; the constraint name says which.
fn map_insert_error(e: sqlx::Error, comment: &Comment) -> DomainError {
    if let Some(db_err) = e.as_database_error() {
        if db_err.is_foreign_key_violation() {
            return if db_err.constraint() == Some(AUTHOR_FK) {
                DomainError::UserNotFound(comment.author_id)
            } else {
                DomainError::VideoNotFound(comment.video_id)
            };
        }
    }
    map_db_error(e)
}

#[async_trait]
impl CommentRepository for PgCommentRepository {
    #[instrument(skip(self, comment), fields(comment_id = %comment.id, video_id = %comment.video_id))]
    async fn create(&self, comment: &Comment) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO video_comments (id, video_id, author_id, content, created_at)
            VALUES ($1, $2, $3, $4, $5)
            ",
        )
        .bind(comment.id.into_inner())
        .bind(comment.video_id.into_inner())
        .bind(comment.author_id.into_inner())
        .bind(&comment.content)
        .bind(comment.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| map_insert_error(e, comment))?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn find_by_video(&self, video_id: Snowflake, limit: i64) -> RepoResult<Vec<Comment>> {
        let results = sqlx::query_as::<_, CommentModel>(
            r"
            SELECT id, video_id, author_id, content, created_at
            FROM video_comments
            WHERE video_id = $1
            ORDER BY created_at DESC, id DESC
            LIMIT $2
            ",
        )
        .bind(video_id.into_inner())
        .bind(limit.clamp(1, 100))
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Comment::from).collect())
    }
}
