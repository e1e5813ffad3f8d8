//! Answer handlers
//!
//! Endpoints for answering questions, voting, and the wall feed.

use askme_service::dto::{
    AnswerResponse, CreateAnswerRequest, FeedItemResponse, PaginatedResponse, VoteRequest,
};
use askme_service::services::AnswerService;
use axum::{
    extract::{Path, State},
    Json,
};

use crate::extractors::{AnswerIdPath, AuthUser, Pagination, QuestionIdPath, ValidatedJson};
use crate::response::{ApiResult, Created};
use crate::state::AppState;

/// Answer a question
///
/// POST /questions/{question_id}/answers
pub async fn create_answer(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(path): Path<QuestionIdPath>,
    ValidatedJson(request): ValidatedJson<CreateAnswerRequest>,
) -> ApiResult<Created<Json<AnswerResponse>>> {
    let question_id = path.question_id()?;
    let service = AnswerService::new(state.service_context());
    let response = service
        .create_answer(question_id, auth.user_id, request)
        .await?;
    Ok(Created(Json(response)))
}

/// Apply a vote action to an answer
///
/// POST /answers/{answer_id}/vote
pub async fn vote(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(path): Path<AnswerIdPath>,
    Json(request): Json<VoteRequest>,
) -> ApiResult<Json<AnswerResponse>> {
    let answer_id = path.answer_id()?;
    let service = AnswerService::new(state.service_context());
    let response = service.vote(answer_id, request).await?;
    Ok(Json(response))
}

/// Wall feed: answers to questions asked to any of the current user's
/// friends, newest first
///
/// GET /feed
pub async fn wall_feed(
    State(state): State<AppState>,
    auth: AuthUser,
    pagination: Pagination,
) -> ApiResult<Json<PaginatedResponse<FeedItemResponse>>> {
    let service = AnswerService::new(state.service_context());
    let response = service
        .wall_feed(auth.user_id, pagination.before, pagination.limit)
        .await?;
    Ok(Json(response))
}
