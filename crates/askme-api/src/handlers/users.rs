//! User handlers
//!
//! Endpoints for the current user's profile and settings, public profiles,
//! per-user stats, and user search.

use askme_service::dto::{
    CurrentUserResponse, FeedItemResponse, PaginatedResponse, PublicUserResponse, StatsResponse,
    UpdateSettingsRequest,
};
use askme_service::services::{AccountService, AnswerService};
use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;

use crate::extractors::{AuthUser, Pagination, UsernamePath, ValidatedJson};
use crate::response::ApiResult;
use crate::state::AppState;

/// Get current user
///
/// GET /users/@me
pub async fn get_current_user(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<CurrentUserResponse>> {
    let service = AccountService::new(state.service_context());
    let response = service.current_user(auth.user_id).await?;
    Ok(Json(response))
}

/// Update current user's settings
///
/// PATCH /users/@me
pub async fn update_settings(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<UpdateSettingsRequest>,
) -> ApiResult<Json<CurrentUserResponse>> {
    let service = AccountService::new(state.service_context());
    let response = service.update_settings(auth.user_id, request).await?;
    Ok(Json(response))
}

/// Search query parameters
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub q: String,
}

/// Search users by username or name
///
/// GET /users/search?q=...
pub async fn search_users(
    State(state): State<AppState>,
    _auth: AuthUser,
    Query(params): Query<SearchParams>,
) -> ApiResult<Json<Vec<PublicUserResponse>>> {
    let service = AccountService::new(state.service_context());
    let users = service.search(&params.q).await?;
    Ok(Json(users))
}

/// Get a user's public profile by username
///
/// GET /users/{username}
pub async fn get_public_profile(
    State(state): State<AppState>,
    Path(path): Path<UsernamePath>,
) -> ApiResult<Json<PublicUserResponse>> {
    let service = AccountService::new(state.service_context());
    let response = service.public_info(path.username()).await?;
    Ok(Json(response))
}

/// Get a user's aggregate counters
///
/// GET /users/{username}/stats
pub async fn get_stats(
    State(state): State<AppState>,
    Path(path): Path<UsernamePath>,
) -> ApiResult<Json<StatsResponse>> {
    let service = AccountService::new(state.service_context());
    let response = service.stats(path.username()).await?;
    Ok(Json(response))
}

/// Get a user's answered questions, newest first
///
/// GET /users/{username}/answers
pub async fn get_user_answers(
    State(state): State<AppState>,
    Path(path): Path<UsernamePath>,
    pagination: Pagination,
) -> ApiResult<Json<PaginatedResponse<FeedItemResponse>>> {
    let service = AnswerService::new(state.service_context());
    let response = service
        .answers_by_username(path.username(), pagination.before, pagination.limit)
        .await?;
    Ok(Json(response))
}
