//! PostgreSQL implementation of FriendshipRepository
//!
//! Friend requests and friendship edges live in separate tables. Two
//! uniqueness constraints carry the invariants: a partial unique index on
//! pending (from, to) pairs blocks duplicate requests, and a unique index
//! on (LEAST(from, to), GREATEST(from, to)) blocks duplicate edges in
//! either direction. Accepting a request deletes the request row and
//! inserts the edge in one transaction, so a request can only be consumed
//! once even under concurrent accepts.

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use askme_core::entities::{FriendRequest, Friendship};
use askme_core::error::DomainError;
use askme_core::traits::{FriendshipRepository, RepoResult};
use askme_core::value_objects::Snowflake;

use crate::models::FriendRequestModel;

use super::error::{friend_request_not_found, map_db_error, map_unique_violation};

const REQUEST_COLUMNS: &str =
    "id, from_user_id, to_user_id, message, status, rejected_at, created_at";

/// PostgreSQL implementation of FriendshipRepository
#[derive(Clone)]
pub struct PgFriendshipRepository {
    pool: PgPool,
}

impl PgFriendshipRepository {
    /// Create a new PgFriendshipRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl FriendshipRepository for PgFriendshipRepository {
    #[instrument(skip(self))]
    async fn find_request(&self, id: Snowflake) -> RepoResult<Option<FriendRequest>> {
        let result = sqlx::query_as::<_, FriendRequestModel>(&format!(
            "SELECT {REQUEST_COLUMNS} FROM friend_requests WHERE id = $1"
        ))
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(FriendRequest::from))
    }

    #[instrument(skip(self))]
    async fn find_pending_request(
        &self,
        from: Snowflake,
        to: Snowflake,
    ) -> RepoResult<Option<FriendRequest>> {
        let result = sqlx::query_as::<_, FriendRequestModel>(&format!(
            "SELECT {REQUEST_COLUMNS} FROM friend_requests
             WHERE from_user_id = $1 AND to_user_id = $2 AND status = 'pending'"
        ))
        .bind(from.into_inner())
        .bind(to.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(FriendRequest::from))
    }

    #[instrument(skip(self))]
    async fn pending_requests_for(&self, to_user: Snowflake) -> RepoResult<Vec<FriendRequest>> {
        let result = sqlx::query_as::<_, FriendRequestModel>(&format!(
            "SELECT {REQUEST_COLUMNS} FROM friend_requests
             WHERE to_user_id = $1 AND status = 'pending'
             ORDER BY id DESC"
        ))
        .bind(to_user.into_inner())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.into_iter().map(FriendRequest::from).collect())
    }

    #[instrument(skip(self, request))]
    async fn create_request(&self, request: &FriendRequest) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO friend_requests (id, from_user_id, to_user_id, message, status, created_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            ",
        )
        .bind(request.id.into_inner())
        .bind(request.from_user_id.into_inner())
        .bind(request.to_user_id.into_inner())
        .bind(&request.message)
        .bind(request.status.as_str())
        .bind(request.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, |_| DomainError::FriendRequestExists))?;

        Ok(())
    }

    #[instrument(skip(self, edge))]
    async fn accept_request(&self, request_id: Snowflake, edge: &Friendship) -> RepoResult<()> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        // Deleting the pending row first means concurrent accepts race on
        // this statement; the loser sees zero rows and bails out.
        let deleted = sqlx::query(
            r"
            DELETE FROM friend_requests WHERE id = $1 AND status = 'pending'
            ",
        )
        .bind(request_id.into_inner())
        .execute(&mut *tx)
        .await
        .map_err(map_db_error)?;

        if deleted.rows_affected() == 0 {
            return Err(friend_request_not_found(request_id));
        }

        sqlx::query(
            r"
            INSERT INTO friendships (id, from_user_id, to_user_id, created_at)
            VALUES ($1, $2, $3, $4)
            ",
        )
        .bind(edge.id.into_inner())
        .bind(edge.from_user_id.into_inner())
        .bind(edge.to_user_id.into_inner())
        .bind(edge.created_at)
        .execute(&mut *tx)
        .await
        .map_err(|e| map_unique_violation(e, |_| DomainError::AlreadyFriends))?;

        tx.commit().await.map_err(map_db_error)?;
        Ok(())
    }

    #[instrument(skip(self))]
    async fn mark_rejected(&self, request_id: Snowflake) -> RepoResult<bool> {
        let result = sqlx::query(
            r"
            UPDATE friend_requests
            SET status = 'rejected', rejected_at = NOW()
            WHERE id = $1 AND status = 'pending'
            ",
        )
        .bind(request_id.into_inner())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.rows_affected() > 0)
    }

    #[instrument(skip(self))]
    async fn edge_exists(&self, a: Snowflake, b: Snowflake) -> RepoResult<bool> {
        let result = sqlx::query_scalar::<_, bool>(
            r"
            SELECT EXISTS(
                SELECT 1 FROM friendships
                WHERE (from_user_id = $1 AND to_user_id = $2)
                   OR (from_user_id = $2 AND to_user_id = $1)
            )
            ",
        )
        .bind(a.into_inner())
        .bind(b.into_inner())
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result)
    }

    #[instrument(skip(self))]
    async fn delete_edge(&self, a: Snowflake, b: Snowflake) -> RepoResult<bool> {
        let result = sqlx::query(
            r"
            DELETE FROM friendships
            WHERE (from_user_id = $1 AND to_user_id = $2)
               OR (from_user_id = $2 AND to_user_id = $1)
            ",
        )
        .bind(a.into_inner())
        .bind(b.into_inner())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.rows_affected() > 0)
    }

    #[instrument(skip(self))]
    async fn friend_ids(&self, user: Snowflake) -> RepoResult<Vec<Snowflake>> {
        let result = sqlx::query_scalar::<_, i64>(
            r"
            SELECT CASE WHEN from_user_id = $1 THEN to_user_id ELSE from_user_id END
            FROM friendships
            WHERE from_user_id = $1 OR to_user_id = $1
            ORDER BY id DESC
            ",
        )
        .bind(user.into_inner())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.into_iter().map(Snowflake::new).collect())
    }

    #[instrument(skip(self))]
    async fn count_friends(&self, user: Snowflake) -> RepoResult<i64> {
        let result = sqlx::query_scalar::<_, i64>(
            r"
            SELECT COUNT(*) FROM friendships
            WHERE from_user_id = $1 OR to_user_id = $1
            ",
        )
        .bind(user.into_inner())
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result)
    }
}
