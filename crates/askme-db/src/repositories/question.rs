//! PostgreSQL implementation of QuestionRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use askme_core::entities::Question;
use askme_core::traits::{QuestionRepository, RepoResult};
use askme_core::value_objects::Snowflake;

use crate::models::QuestionModel;

use super::error::map_db_error;

const QUESTION_COLUMNS: &str = "id, question_text, asked_user_id, asker_id, created_at";

/// PostgreSQL implementation of QuestionRepository
#[derive(Clone)]
pub struct PgQuestionRepository {
    pool: PgPool,
}

impl PgQuestionRepository {
    /// Create a new PgQuestionRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl QuestionRepository for PgQuestionRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Question>> {
        let result = sqlx::query_as::<_, QuestionModel>(&format!(
            "SELECT {QUESTION_COLUMNS} FROM questions WHERE id = $1"
        ))
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Question::from))
    }

    #[instrument(skip(self, question))]
    async fn create(&self, question: &Question) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO questions (id, question_text, asked_user_id, asker_id, created_at)
            VALUES ($1, $2, $3, $4, $5)
            ",
        )
        .bind(question.id.into_inner())
        .bind(&question.question_text)
        .bind(question.asked_user_id.into_inner())
        .bind(question.asker_id.map(Snowflake::into_inner))
        .bind(question.created_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self, questions))]
    async fn create_batch(&self, questions: &[Question]) -> RepoResult<()> {
        if questions.is_empty() {
            return Ok(());
        }

        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        for question in questions {
            sqlx::query(
                r"
                INSERT INTO questions (id, question_text, asked_user_id, asker_id, created_at)
                VALUES ($1, $2, $3, $4, $5)
                ",
            )
            .bind(question.id.into_inner())
            .bind(&question.question_text)
            .bind(question.asked_user_id.into_inner())
            .bind(question.asker_id.map(Snowflake::into_inner))
            .bind(question.created_at)
            .execute(&mut *tx)
            .await
            .map_err(map_db_error)?;
        }

        tx.commit().await.map_err(map_db_error)?;
        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete_cascade(&self, id: Snowflake) -> RepoResult<bool> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        sqlx::query(
            r"
            DELETE FROM comments
            WHERE answer_id IN (SELECT id FROM answers WHERE question_id = $1)
            ",
        )
        .bind(id.into_inner())
        .execute(&mut *tx)
        .await
        .map_err(map_db_error)?;

        sqlx::query("DELETE FROM answers WHERE question_id = $1")
            .bind(id.into_inner())
            .execute(&mut *tx)
            .await
            .map_err(map_db_error)?;

        let result = sqlx::query("DELETE FROM questions WHERE id = $1")
            .bind(id.into_inner())
            .execute(&mut *tx)
            .await
            .map_err(map_db_error)?;

        tx.commit().await.map_err(map_db_error)?;
        Ok(result.rows_affected() > 0)
    }

    #[instrument(skip(self))]
    async fn unanswered_for(&self, user: Snowflake) -> RepoResult<Vec<Question>> {
        let result = sqlx::query_as::<_, QuestionModel>(
            r"
            SELECT q.id, q.question_text, q.asked_user_id, q.asker_id, q.created_at
            FROM questions q
            LEFT JOIN answers a ON a.question_id = q.id
            WHERE q.asked_user_id = $1 AND a.id IS NULL
            ORDER BY q.id DESC
            ",
        )
        .bind(user.into_inner())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.into_iter().map(Question::from).collect())
    }
}
