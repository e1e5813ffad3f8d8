//! Comment handlers
//!
//! Endpoints for commenting on answers and listing an answer's comments.

use askme_service::dto::{CommentResponse, CreateCommentRequest};
use askme_service::services::CommentService;
use axum::{
    extract::{Path, State},
    Json,
};

use crate::extractors::{AnswerIdPath, AuthUser, ValidatedJson};
use crate::response::{ApiResult, Created};
use crate::state::AppState;

/// Comment on an answer
///
/// POST /answers/{answer_id}/comments
pub async fn create_comment(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(path): Path<AnswerIdPath>,
    ValidatedJson(request): ValidatedJson<CreateCommentRequest>,
) -> ApiResult<Created<Json<CommentResponse>>> {
    let answer_id = path.answer_id()?;
    let service = CommentService::new(state.service_context());
    let response = service
        .create_comment(answer_id, auth.user_id, request)
        .await?;
    Ok(Created(Json(response)))
}

/// List comments on an answer, newest first
///
/// GET /answers/{answer_id}/comments
pub async fn get_comments(
    State(state): State<AppState>,
    Path(path): Path<AnswerIdPath>,
) -> ApiResult<Json<Vec<CommentResponse>>> {
    let answer_id = path.answer_id()?;
    let service = CommentService::new(state.service_context());
    let response = service.comments_for(answer_id).await?;
    Ok(Json(response))
}
