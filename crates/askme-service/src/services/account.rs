//! Account service
//!
//! Profile settings, public account info, stats, and user search.

use askme_core::DomainError;
use chrono::Utc;
use tracing::{info, instrument};

use askme_core::Snowflake;

use crate::dto::{
    CurrentUserResponse, PublicUserResponse, StatsResponse, UpdateSettingsRequest,
};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

const SEARCH_LIMIT: i64 = 25;

/// Account service
pub struct AccountService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AccountService<'a> {
    /// Create a new AccountService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Get the current user's full profile
    #[instrument(skip(self))]
    pub async fn current_user(&self, user_id: Snowflake) -> ServiceResult<CurrentUserResponse> {
        let user = self
            .ctx
            .user_repo()
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("User", user_id.to_string()))?;

        Ok(CurrentUserResponse::from(&user))
    }

    /// Update the current user's profile settings
    #[instrument(skip(self, request))]
    pub async fn update_settings(
        &self,
        user_id: Snowflake,
        request: UpdateSettingsRequest,
    ) -> ServiceResult<CurrentUserResponse> {
        if let Some(dob) = request.date_of_birth {
            if dob > Utc::now().date_naive() {
                return Err(DomainError::FutureDateOfBirth.into());
            }
        }

        let mut user = self
            .ctx
            .user_repo()
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("User", user_id.to_string()))?;

        if let Some(first_name) = request.first_name {
            user.first_name = first_name;
        }
        if let Some(last_name) = request.last_name {
            user.last_name = last_name;
        }
        if let Some(avatar) = request.avatar {
            user.avatar = if avatar.is_empty() { None } else { Some(avatar) };
        }
        if let Some(description) = request.self_description {
            user.self_description = if description.is_empty() {
                None
            } else {
                Some(description)
            };
        }
        if let Some(dob) = request.date_of_birth {
            user.date_of_birth = Some(dob);
        }
        user.updated_at = Utc::now();

        self.ctx.user_repo().update(&user).await?;

        info!(user_id = %user_id, "Account settings updated");
        Ok(CurrentUserResponse::from(&user))
    }

    /// Public profile info for a username
    #[instrument(skip(self))]
    pub async fn public_info(&self, username: &str) -> ServiceResult<PublicUserResponse> {
        let user = self
            .ctx
            .user_repo()
            .find_by_username(username)
            .await?
            .ok_or_else(|| ServiceError::Domain(DomainError::UsernameNotFound(username.to_string())))?;

        Ok(PublicUserResponse::from(&user))
    }

    /// Aggregate counters for a username
    #[instrument(skip(self))]
    pub async fn stats(&self, username: &str) -> ServiceResult<StatsResponse> {
        let user = self
            .ctx
            .user_repo()
            .find_by_username(username)
            .await?
            .ok_or_else(|| ServiceError::Domain(DomainError::UsernameNotFound(username.to_string())))?;

        let answer_stats = self.ctx.answer_repo().stats_for(user.id).await?;
        let friends_count = self.ctx.friendship_repo().count_friends(user.id).await?;

        Ok(StatsResponse {
            answers_count: answer_stats.answers_count,
            friends_count,
            likes_count: answer_stats.likes_count,
        })
    }

    /// Search users by username or display names
    #[instrument(skip(self))]
    pub async fn search(&self, query: &str) -> ServiceResult<Vec<PublicUserResponse>> {
        let query = query.trim();
        if query.is_empty() {
            return Ok(Vec::new());
        }

        let users = self.ctx.user_repo().search(query, SEARCH_LIMIT).await?;
        Ok(users.iter().map(PublicUserResponse::from).collect())
    }
}
