//! Question handlers
//!
//! Endpoints for posting questions (single and batch), listing the
//! authenticated user's unanswered inbox, and deleting a question.

use askme_service::dto::{CreateQuestionBatchRequest, CreateQuestionRequest, QuestionResponse};
use askme_service::services::QuestionService;
use axum::{
    extract::{Path, State},
    Json,
};

use crate::extractors::{AuthUser, OptionalAuthUser, QuestionIdPath, ValidatedJson};
use crate::response::{ApiResult, Created, NoContent};
use crate::state::AppState;

/// Post a question to a user
///
/// POST /questions
///
/// Accepts anonymous callers; an authenticated caller may still hide
/// their identity with the `anonymous` flag.
pub async fn create_question(
    State(state): State<AppState>,
    auth: OptionalAuthUser,
    ValidatedJson(request): ValidatedJson<CreateQuestionRequest>,
) -> ApiResult<Created<Json<QuestionResponse>>> {
    let service = QuestionService::new(state.service_context());
    let response = service.create_question(auth.user_id(), request).await?;
    Ok(Created(Json(response)))
}

/// Post one question to several users
///
/// POST /questions/batch
pub async fn create_question_batch(
    State(state): State<AppState>,
    auth: OptionalAuthUser,
    ValidatedJson(request): ValidatedJson<CreateQuestionBatchRequest>,
) -> ApiResult<Created<Json<Vec<QuestionResponse>>>> {
    let service = QuestionService::new(state.service_context());
    let response = service
        .create_questions_batch(auth.user_id(), request)
        .await?;
    Ok(Created(Json(response)))
}

/// List the current user's unanswered questions, newest first
///
/// GET /questions/unanswered
pub async fn get_unanswered_questions(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<Vec<QuestionResponse>>> {
    let service = QuestionService::new(state.service_context());
    let response = service.unanswered_questions(auth.user_id).await?;
    Ok(Json(response))
}

/// Delete a question along with its answer and comments
///
/// DELETE /questions/{question_id}
pub async fn delete_question(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(path): Path<QuestionIdPath>,
) -> ApiResult<NoContent> {
    let question_id = path.question_id()?;
    let service = QuestionService::new(state.service_context());
    service.delete_question(question_id, auth.user_id).await?;
    Ok(NoContent)
}
