//! PostgreSQL implementation of AnswerRepository

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use tracing::instrument;

use askme_core::entities::{Answer, Question};
use askme_core::error::DomainError;
use askme_core::traits::{AnswerRepository, AnswerStats, FeedQuery, RepoResult};
use askme_core::value_objects::Snowflake;

use crate::models::AnswerModel;

use super::error::{answer_not_found, map_db_error, map_unique_violation};

const ANSWER_COLUMNS: &str = "id, question_id, answer_text, likes, dislikes, created_at";

/// Joined answer + question row for feed queries
#[derive(Debug, FromRow)]
struct FeedRow {
    answer_id: i64,
    question_id: i64,
    answer_text: String,
    likes: i32,
    dislikes: i32,
    answer_created_at: DateTime<Utc>,
    question_text: String,
    asked_user_id: i64,
    asker_id: Option<i64>,
    question_created_at: DateTime<Utc>,
}

impl FeedRow {
    fn split(self) -> (Answer, Question) {
        let answer = Answer {
            id: Snowflake::new(self.answer_id),
            question_id: Snowflake::new(self.question_id),
            answer_text: self.answer_text,
            likes: self.likes,
            dislikes: self.dislikes,
            created_at: self.answer_created_at,
        };
        let question = Question {
            id: Snowflake::new(self.question_id),
            question_text: self.question_text,
            asked_user_id: Snowflake::new(self.asked_user_id),
            asker_id: self.asker_id.map(Snowflake::new),
            created_at: self.question_created_at,
        };
        (answer, question)
    }
}

/// PostgreSQL implementation of AnswerRepository
#[derive(Clone)]
pub struct PgAnswerRepository {
    pool: PgPool,
}

impl PgAnswerRepository {
    /// Create a new PgAnswerRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AnswerRepository for PgAnswerRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Answer>> {
        let result = sqlx::query_as::<_, AnswerModel>(&format!(
            "SELECT {ANSWER_COLUMNS} FROM answers WHERE id = $1"
        ))
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Answer::from))
    }

    #[instrument(skip(self, answer))]
    async fn create(&self, answer: &Answer) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO answers (id, question_id, answer_text, likes, dislikes, created_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            ",
        )
        .bind(answer.id.into_inner())
        .bind(answer.question_id.into_inner())
        .bind(&answer.answer_text)
        .bind(answer.likes)
        .bind(answer.dislikes)
        .bind(answer.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, |_| DomainError::QuestionAlreadyAnswered))?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn adjust_votes(
        &self,
        id: Snowflake,
        like_delta: i32,
        dislike_delta: i32,
    ) -> RepoResult<Answer> {
        let result = sqlx::query_as::<_, AnswerModel>(&format!(
            "UPDATE answers
             SET likes = GREATEST(likes + $2, 0), dislikes = GREATEST(dislikes + $3, 0)
             WHERE id = $1
             RETURNING {ANSWER_COLUMNS}"
        ))
        .bind(id.into_inner())
        .bind(like_delta)
        .bind(dislike_delta)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        result.map(Answer::from).ok_or_else(|| answer_not_found(id))
    }

    #[instrument(skip(self, asked_users))]
    async fn answers_to_users(
        &self,
        asked_users: &[Snowflake],
        query: FeedQuery,
    ) -> RepoResult<Vec<(Answer, Question)>> {
        if asked_users.is_empty() {
            return Ok(Vec::new());
        }

        let raw: Vec<i64> = asked_users.iter().map(|id| id.into_inner()).collect();

        let result = sqlx::query_as::<_, FeedRow>(
            r"
            SELECT a.id AS answer_id, a.question_id, a.answer_text, a.likes, a.dislikes,
                   a.created_at AS answer_created_at,
                   q.question_text, q.asked_user_id, q.asker_id,
                   q.created_at AS question_created_at
            FROM answers a
            JOIN questions q ON q.id = a.question_id
            WHERE q.asked_user_id = ANY($1)
              AND ($2::BIGINT IS NULL OR a.id < $2)
            ORDER BY a.id DESC
            LIMIT $3
            ",
        )
        .bind(&raw)
        .bind(query.before.map(Snowflake::into_inner))
        .bind(query.limit)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.into_iter().map(FeedRow::split).collect())
    }

    #[instrument(skip(self))]
    async fn stats_for(&self, user: Snowflake) -> RepoResult<AnswerStats> {
        let (answers_count, likes_count) = sqlx::query_as::<_, (i64, i64)>(
            r"
            SELECT COUNT(*), COALESCE(SUM(a.likes), 0)::BIGINT
            FROM answers a
            JOIN questions q ON q.id = a.question_id
            WHERE q.asked_user_id = $1
            ",
        )
        .bind(user.into_inner())
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(AnswerStats {
            answers_count,
            likes_count,
        })
    }
}
