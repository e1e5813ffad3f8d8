//! PostgreSQL implementation of CommentRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use askme_core::entities::Comment;
use askme_core::traits::{CommentRepository, RepoResult};
use askme_core::value_objects::Snowflake;

use crate::models::CommentModel;

use super::error::map_db_error;

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

#[async_trait]
impl CommentRepository for PgCommentRepository {
    #[instrument(skip(self, comment))]
    async fn create(&self, comment: &Comment) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO comments (id, answer_id, user_id, comment_text, created_at)
            VALUES ($1, $2, $3, $4, $5)
            ",
        )
        .bind(comment.id.into_inner())
        .bind(comment.answer_id.into_inner())
        .bind(comment.user_id.into_inner())
        .bind(&comment.comment_text)
        .bind(comment.created_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn find_by_answer(&self, answer_id: Snowflake) -> RepoResult<Vec<Comment>> {
        let result = sqlx::query_as::<_, CommentModel>(
            r"
            SELECT id, answer_id, user_id, comment_text, created_at
            FROM comments
            WHERE answer_id = $1
            ORDER BY id DESC
            ",
        )
        .bind(answer_id.into_inner())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.into_iter().map(Comment::from).collect())
    }
}
