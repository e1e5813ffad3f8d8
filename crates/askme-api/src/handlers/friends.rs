//! Friendship handlers
//!
//! Endpoints for the friend request lifecycle and the friend list.

use askme_service::dto::{
    FriendRequestResponse, FriendshipResponse, PublicUserResponse, SendFriendRequestRequest,
};
use askme_service::services::FriendshipService;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::extractors::{AuthUser, RequestIdPath, UserIdPath, ValidatedJson};
use crate::response::{ApiError, ApiResult, Created, NoContent};
use crate::state::AppState;

/// Send a friend request
///
/// POST /friends/requests
pub async fn send_request(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<SendFriendRequestRequest>,
) -> ApiResult<Created<Json<FriendRequestResponse>>> {
    let service = FriendshipService::new(state.service_context());
    let response = service.send_request(auth.user_id, request).await?;
    Ok(Created(Json(response)))
}

/// List incoming pending friend requests, newest first
///
/// GET /friends/requests
pub async fn get_pending_requests(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<Vec<FriendRequestResponse>>> {
    let service = FriendshipService::new(state.service_context());
    let response = service.list_pending_requests(auth.user_id).await?;
    Ok(Json(response))
}

/// Accept a friend request
///
/// POST /friends/requests/{request_id}/accept
pub async fn accept_request(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(path): Path<RequestIdPath>,
) -> ApiResult<Created<Json<FriendshipResponse>>> {
    let request_id = path.request_id()?;
    let service = FriendshipService::new(state.service_context());
    let response = service.accept_request(request_id, auth.user_id).await?;
    Ok(Created(Json(response)))
}

/// Reject a friend request
///
/// POST /friends/requests/{request_id}/reject
pub async fn reject_request(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(path): Path<RequestIdPath>,
) -> ApiResult<NoContent> {
    let request_id = path.request_id()?;
    let service = FriendshipService::new(state.service_context());
    service.reject_request(request_id, auth.user_id).await?;
    Ok(NoContent)
}

/// List the current user's friends
///
/// GET /friends
pub async fn get_friends(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<Vec<PublicUserResponse>>> {
    let service = FriendshipService::new(state.service_context());
    let response = service.list_friends(auth.user_id).await?;
    Ok(Json(response))
}

/// Remove a friend
///
/// DELETE /friends/{user_id}
pub async fn remove_friend(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(path): Path<UserIdPath>,
) -> ApiResult<StatusCode> {
    let other = path.user_id()?;
    let service = FriendshipService::new(state.service_context());
    let removed = service.remove_friend(auth.user_id, other).await?;
    if removed {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::Service(
            askme_service::ServiceError::not_found("Friendship", other.to_string()),
        ))
    }
}
