//! Comment service

use askme_core::entities::Comment;
use askme_core::{DomainError, Snowflake};
use tracing::{info, instrument};

use crate::dto::{CommentResponse, CreateCommentRequest};

use super::context::ServiceContext;
use super::error::ServiceResult;

pub(crate) const MAX_COMMENT_LEN: usize = 500;

/// Comment service
pub struct CommentService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> CommentService<'a> {
    /// Create a new CommentService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Comment on an answer
    #[instrument(skip(self, request), fields(user = %user))]
    pub async fn create_comment(
        &self,
        answer_id: Snowflake,
        user: Snowflake,
        request: CreateCommentRequest,
    ) -> ServiceResult<CommentResponse> {
        if request.comment_text.chars().count() > MAX_COMMENT_LEN {
            return Err(DomainError::ContentTooLong { max: MAX_COMMENT_LEN }.into());
        }

        if self
            .ctx
            .answer_repo()
            .find_by_id(answer_id)
            .await?
            .is_none()
        {
            return Err(DomainError::AnswerNotFound(answer_id).into());
        }

        let comment = Comment::new(self.ctx.generate_id(), answer_id, user, request.comment_text);
        self.ctx.comment_repo().create(&comment).await?;

        info!(comment_id = %comment.id, answer_id = %answer_id, "Comment created");
        Ok(CommentResponse::from(&comment))
    }

    /// Comments on an answer, newest first
    #[instrument(skip(self))]
    pub async fn comments_for(&self, answer_id: Snowflake) -> ServiceResult<Vec<CommentResponse>> {
        if self
            .ctx
            .answer_repo()
            .find_by_id(answer_id)
            .await?
            .is_none()
        {
            return Err(DomainError::AnswerNotFound(answer_id).into());
        }

        let comments = self.ctx.comment_repo().find_by_answer(answer_id).await?;
        Ok(comments.iter().map(CommentResponse::from).collect())
    }
}
